//! Command implementations

mod pages;
mod search;

pub use pages::{PageRequest, pages};
pub use search::search;
