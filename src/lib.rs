//! Annotator Service Library
//!
//! A structural source-code annotator: decomposes a source file into a
//! hierarchy of named, addressable chunks (types, fields, methods, named
//! closures) and delimits each chunk's extent in place with paired region
//! marker comments carrying a stable hierarchical qualified name, so
//! downstream tools can address text ranges by semantic identity instead
//! of line numbers.

pub mod api;
pub mod ast_engine;
pub mod batch;
pub mod chunking;
pub mod error;
pub mod markers;
pub mod processing;
pub mod types;

pub use ast_engine::{JavaFrontEnd, LanguageFrontEnd, SyntaxTree};
pub use batch::{AnnotatedFile, BatchAnnotator, BatchResult};
pub use chunking::{ChunkClassifier, NameResolver};
pub use error::AnnotateError;
pub use markers::{MarkerStripper, MarkerSynthesizer};
pub use processing::FileAnnotator;
pub use types::{AnnotatorConfig, Chunk, ChunkKind, ChunkRecord, LineSpan, SourceFile};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::batch::*;
    pub use crate::error::AnnotateError;
    pub use crate::processing::FileAnnotator;
    pub use crate::types::*;
}

/// Default maximum input file size (10MB)
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Default number of files annotated concurrently in a batch
pub const DEFAULT_BATCH_CONCURRENCY: usize = 4;
