//! In-memory hook history storage

pub mod history;

pub use history::*;
