//! Utility functions and helpers

pub mod logging;
pub mod time;

pub use logging::*;
pub use time::*;
