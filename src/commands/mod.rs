//! Command implementations

pub mod list;
pub mod play;

pub use list::run_list;
pub use play::{PlayOptions, run_play};
