//! Batch annotation for many files at once.
//!
//! Files are independent: each one's chunk set, name table, and marker
//! insertion are entirely local, so items run concurrently with no shared
//! mutable state and a failure in one file never affects another.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::error::AnnotateError;
use crate::processing::FileAnnotator;
use crate::types::{AnnotatorConfig, SourceFile};

/// Outcome for one file in a batch.
#[derive(Debug, Clone)]
pub struct AnnotatedFile {
    /// Path of the file
    pub path: String,
    /// Annotated content (or the original content for pass-throughs)
    pub content: String,
    /// Number of chunks marked; 0 for pass-throughs
    pub chunk_count: usize,
}

/// Error during batch processing, scoped to one file.
#[derive(Debug, Clone)]
pub struct BatchError {
    pub path: String,
    pub error: String,
}

/// Summary of a batch run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub total_files: usize,
    pub processed_files: usize,
    pub failed_files: usize,
    pub errors: Vec<BatchError>,
}

/// Batch annotator with bounded concurrency.
pub struct BatchAnnotator {
    annotator: Arc<FileAnnotator>,
    config: AnnotatorConfig,
}

impl BatchAnnotator {
    /// Create a batch annotator.
    pub fn new(annotator: Arc<FileAnnotator>, config: AnnotatorConfig) -> Self {
        Self { annotator, config }
    }

    /// Annotate a batch of files, preserving input order in the output.
    ///
    /// Files no front-end recognizes pass through unchanged, mirroring
    /// how a directory mirror copies unparsable files verbatim. Other
    /// failures are collected per file; with `continue_on_error` unset
    /// the first failure aborts the whole batch.
    pub async fn process_batch(
        &self,
        files: Vec<SourceFile>,
    ) -> Result<(Vec<AnnotatedFile>, BatchResult)> {
        let total_files = files.len();
        info!(total_files, "Starting batch annotation");

        let mut results = stream::iter(files.into_iter().map(|file| {
            let annotator = Arc::clone(&self.annotator);
            let max_size = self.config.max_file_size;
            tokio::task::spawn_blocking(move || annotate_one(&annotator, file, max_size))
        }))
        .buffered(self.config.batch_concurrency.max(1));

        let mut annotated = Vec::with_capacity(total_files);
        let mut errors = Vec::new();

        while let Some(joined) = results.next().await {
            let outcome = joined.map_err(|e| anyhow!("annotation task panicked: {e}"))?;
            match outcome {
                Ok(file) => annotated.push(file),
                Err((path, error)) => {
                    warn!(path = %path, error = %error, "Failed to annotate file");
                    if !self.config.continue_on_error {
                        return Err(anyhow!("{path}: {error}"));
                    }
                    errors.push(BatchError { path, error });
                }
            }
        }

        let result = BatchResult {
            total_files,
            processed_files: annotated.len(),
            failed_files: errors.len(),
            errors,
        };

        info!(
            processed = result.processed_files,
            failed = result.failed_files,
            "Batch annotation complete"
        );

        Ok((annotated, result))
    }
}

/// Annotate one file in isolation.
fn annotate_one(
    annotator: &FileAnnotator,
    file: SourceFile,
    max_size: usize,
) -> Result<AnnotatedFile, (String, String)> {
    if file.content.len() > max_size {
        let err = AnnotateError::FileTooLarge {
            path: file.path.clone(),
            size: file.content.len(),
            limit: max_size,
        };
        return Err((file.path, err.to_string()));
    }

    match annotator.annotate_counted(&file) {
        Ok((content, chunk_count)) => Ok(AnnotatedFile {
            path: file.path,
            content,
            chunk_count,
        }),
        // No front-end for this file: pass it through untouched.
        Err(AnnotateError::UnsupportedLanguage { .. }) => Ok(AnnotatedFile {
            path: file.path,
            content: file.content,
            chunk_count: 0,
        }),
        Err(e) => Err((file.path, e.to_string())),
    }
}
