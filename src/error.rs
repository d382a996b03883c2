//! Error types for record comparison

use thiserror::Error;

/// Result type for comparison operations
pub type Result<T> = std::result::Result<T, DiffError>;

/// Comparison errors
///
/// Each error is fatal for the single comparison that raised it; callers
/// running a batch catch per-item failures and continue with the rest.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Neither revision supplied for {source_path}")]
    MissingRevisions { source_path: String },

    #[error("Source path too shallow to derive a container name: {path}")]
    PathTooShallow { path: String },

    #[error("Decoded tree root must have exactly one top-level field, found {field_count}")]
    RootShape { field_count: usize },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
