pub mod wati;

pub use wati::*;
