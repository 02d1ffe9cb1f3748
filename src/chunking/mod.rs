//! Chunk classification and qualified name resolution.

pub mod classifier;
pub mod resolver;

pub use classifier::ChunkClassifier;
pub use resolver::NameResolver;
