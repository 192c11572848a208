//! HTTP request handlers

pub mod ingest;
pub mod stats;
