//! Error handling for the ingest pipeline

pub mod hook_error;

pub use hook_error::*;
