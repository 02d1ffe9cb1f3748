//! Per-file processing pipeline.

pub mod annotator;

pub use annotator::FileAnnotator;
