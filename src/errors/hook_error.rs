//! Custom error types for hook ingestion

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HookError {
    #[error("Failed to decompress gzip payload: {0}")]
    Decompression(String),

    #[error("Failed to parse payload as JSON: {0}")]
    JsonParse(String),

    #[error("Validation failed{}: {field} - {reason}", .index.map(|i| format!(" for data[{i}]")).unwrap_or_default())]
    Validation {
        index: Option<usize>,
        field: String,
        reason: String,
    },

    #[error("Failed to read request body: {0}")]
    BodyRead(String),

    #[error("Decode worker failed: {0}")]
    Worker(String),
}

impl HookError {
    pub fn validation(index: Option<usize>, field: impl Into<String>, reason: impl Into<String>) -> Self {
        HookError::Validation {
            index,
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Short label used as a structured logging field
    pub fn kind(&self) -> &'static str {
        match self {
            HookError::Decompression(_) => "decompression",
            HookError::JsonParse(_) => "json_parse",
            HookError::Validation { .. } => "validation",
            HookError::BodyRead(_) => "body_read",
            HookError::Worker(_) => "worker",
        }
    }
}

pub type HookResult<T> = Result<T, HookError>;
