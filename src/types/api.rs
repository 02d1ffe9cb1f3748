//! Request/response definitions for the annotation API.

use serde::{Deserialize, Serialize};

use super::Chunk;

/// A source file submitted for annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file; used for language detection and error reporting
    pub path: String,

    /// Raw file content
    pub content: String,
}

impl SourceFile {
    /// Create a source file from a path and its content.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// File extension, lower-cased, without the dot.
    pub fn extension(&self) -> Option<String> {
        Self::extension_of(&self.path)
    }

    /// Extension of an arbitrary path, lower-cased, without the dot.
    pub fn extension_of(path: &str) -> Option<String> {
        let ext = path.rsplit('.').next()?;
        if ext == path {
            return None;
        }
        Some(ext.to_lowercase())
    }
}

/// Serializable view of one chunk, the structured output form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Chunk kind tag (class, interface, enum, field, method, lambda)
    pub kind: String,

    /// Dotted path from file scope, unique within the file
    pub qualified_name: String,

    /// First line of the chunk in the unmarked source (1-indexed)
    pub start_line: usize,

    /// Last line of the chunk in the unmarked source (1-indexed, inclusive)
    pub end_line: usize,

    /// Qualified name of the enclosing chunk, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl ChunkRecord {
    /// Build records for a resolved, document-ordered chunk list.
    pub fn from_chunks(chunks: &[Chunk]) -> Vec<Self> {
        chunks
            .iter()
            .map(|chunk| Self {
                kind: chunk.kind.tag().to_string(),
                qualified_name: chunk.qualified_name.clone(),
                start_line: chunk.span.start,
                end_line: chunk.span.end,
                parent: chunk
                    .parent
                    .map(|idx| chunks[idx].qualified_name.clone()),
            })
            .collect()
    }
}

/// Request body for `/annotate`, `/strip`, and `/chunks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateRequest {
    /// File to process
    #[serde(flatten)]
    pub file: SourceFile,
}

/// Response for `/annotate` and `/strip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateResponse {
    /// Path of the processed file
    pub path: String,

    /// Resulting text
    pub content: String,

    /// Number of chunks marked (0 for `/strip`)
    pub chunk_count: usize,
}

/// Response for `/chunks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkListResponse {
    /// Path of the processed file
    pub path: String,

    /// Chunks in document order
    pub chunks: Vec<ChunkRecord>,
}

/// Request body for `/annotate/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Files to annotate
    pub files: Vec<SourceFile>,
}

/// One failed file within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFileError {
    /// Path of the failed file
    pub path: String,

    /// Error description
    pub error: String,
}

/// Response for `/annotate/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Successfully annotated files (unsupported files pass through
    /// unchanged with a zero chunk count)
    pub files: Vec<AnnotateResponse>,

    /// Total files submitted
    pub total: usize,

    /// Files annotated (including pass-throughs)
    pub processed: usize,

    /// Files that failed
    pub failed: usize,

    /// Per-file failures
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<BatchFileError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_record_serialization() {
        let record = ChunkRecord {
            kind: "field".to_string(),
            qualified_name: "Example.field1".to_string(),
            start_line: 2,
            end_line: 2,
            parent: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "field");
        assert_eq!(json["qualified_name"], "Example.field1");
        // Absent parents are omitted entirely.
        assert!(json.get("parent").is_none());
    }

    #[test]
    fn test_extension() {
        assert_eq!(
            SourceFile::new("src/Example.java", "").extension(),
            Some("java".to_string())
        );
        assert_eq!(
            SourceFile::new("UPPER.JAVA", "").extension(),
            Some("java".to_string())
        );
        assert_eq!(SourceFile::new("Makefile", "").extension(), None);
        assert_eq!(
            SourceFile::extension_of("dir/Example.java"),
            Some("java".to_string())
        );
        assert_eq!(SourceFile::extension_of("Makefile"), None);
    }
}
