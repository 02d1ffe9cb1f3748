//! AST front-end layer.
//!
//! Language front-ends parse raw source text into a normalized,
//! arena-backed structural tree with line spans. Everything downstream of
//! this module is language-independent.

pub mod parser;
pub mod tree;

pub use parser::{JavaFrontEnd, LanguageFrontEnd};
pub use tree::{AstNode, NodeId, NodeKind, SyntaxTree};
