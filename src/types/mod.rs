//! Core types for the annotation service.

mod api;
mod chunk;
mod config;

pub use api::{
    AnnotateRequest, AnnotateResponse, BatchFileError, BatchRequest, BatchResponse,
    ChunkListResponse, ChunkRecord, SourceFile,
};
pub use chunk::{Chunk, ChunkKind, LineSpan};
pub use config::AnnotatorConfig;
