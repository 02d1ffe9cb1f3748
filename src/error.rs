//! Error types for the annotation pipeline.
//!
//! Every error is scoped to a single file: a failure aborts that file's
//! transformation only and is reported independently of any other file in
//! a batch.

use thiserror::Error;

/// Errors produced while indexing a single file.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The input is not syntactically valid. The file is left untouched
    /// and the failure carries the parser diagnostic.
    #[error("parse error in {path}: {details}")]
    Parse { path: String, details: String },

    /// Marker nesting in already-annotated input is inconsistent. The
    /// whole-file strip fails; no partially-stripped text is produced.
    #[error("malformed marker at line {line}: {reason}")]
    MalformedMarker { line: usize, reason: String },

    /// No registered language front-end handles this file.
    #[error("no language front-end for {path}")]
    UnsupportedLanguage { path: String },

    /// The file exceeds the configured size limit.
    #[error("{path} exceeds maximum file size ({size} > {limit} bytes)")]
    FileTooLarge {
        path: String,
        size: usize,
        limit: usize,
    },
}

impl AnnotateError {
    /// Construct a parse error for the given file.
    pub fn parse(path: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Construct a malformed-marker error at a 1-indexed line.
    pub fn malformed_marker(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedMarker {
            line,
            reason: reason.into(),
        }
    }
}
