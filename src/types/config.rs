//! Configuration types for the annotation service.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_BATCH_CONCURRENCY, DEFAULT_MAX_FILE_SIZE};

/// Global annotator service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Maximum input file size in bytes
    pub max_file_size: usize,

    /// Maximum files annotated concurrently in a batch
    pub batch_concurrency: usize,

    /// Whether a batch keeps going after an individual file fails
    pub continue_on_error: bool,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
            continue_on_error: true,
        }
    }
}

impl AnnotatorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            max_file_size: std::env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_FILE_SIZE),
            batch_concurrency: std::env::var("BATCH_CONCURRENCY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_BATCH_CONCURRENCY),
            continue_on_error: std::env::var("CONTINUE_ON_ERROR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }
}
