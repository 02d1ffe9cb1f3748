//! Tree-sitter based language front-ends.
//!
//! A front-end turns raw source text into the normalized arena tree the
//! classifier consumes. Front-ends are pluggable per source language; the
//! crate ships a Java implementation.

use anyhow::{anyhow, Result};
use tracing::debug;
use tree_sitter::{Node, Parser};

use crate::ast_engine::tree::{NodeId, NodeKind, SyntaxTree};
use crate::types::LineSpan;

/// A pluggable AST-providing capability for one source language.
pub trait LanguageFrontEnd: Send + Sync {
    /// Language name (e.g. "java").
    fn name(&self) -> &'static str;

    /// File extensions handled by this front-end, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Single-line comment token used as the marker line prefix.
    fn comment_leader(&self) -> &'static str;

    /// Parse source text into a normalized structural tree with spans.
    fn parse(&self, content: &str) -> Result<SyntaxTree>;
}

/// Java front-end backed by tree-sitter-java.
pub struct JavaFrontEnd;

impl JavaFrontEnd {
    /// Create the Java front-end.
    pub fn new() -> Self {
        Self
    }

    /// Map a grammar production to a normalized node kind.
    ///
    /// Lambda expressions are kept only when they are the direct `value`
    /// of a declarator; inline lambdas (call arguments, bare expressions)
    /// are dropped here so the classifier never has to reconsider them.
    fn map_kind(node: &Node) -> Option<NodeKind> {
        match node.kind() {
            "class_declaration" => Some(NodeKind::Class),
            "interface_declaration" => Some(NodeKind::Interface),
            "enum_declaration" => Some(NodeKind::Enum),
            "field_declaration" => Some(NodeKind::Field),
            "constant_declaration" => Some(NodeKind::InterfaceConstant),
            "variable_declarator" => Some(NodeKind::Variable),
            "method_declaration" => Some(NodeKind::Method),
            "constructor_declaration" => Some(NodeKind::Constructor),
            "local_variable_declaration" => Some(NodeKind::LocalBinding),
            "lambda_expression" if Self::is_declarator_value(node) => Some(NodeKind::Lambda),
            _ => None,
        }
    }

    /// Whether `node` is the direct initializer of a variable declarator.
    fn is_declarator_value(node: &Node) -> bool {
        node.parent().is_some_and(|parent| {
            parent.kind() == "variable_declarator"
                && parent
                    .child_by_field_name("value")
                    .is_some_and(|value| value.id() == node.id())
        })
    }

    /// Extract the declared identifier from a node's `name` field.
    fn declared_name(node: &Node, content: &str) -> Option<String> {
        node.child_by_field_name("name")
            .map(|name| content[name.start_byte()..name.end_byte()].to_string())
    }

    /// Recursively visit grammar nodes, keeping the normalized ones.
    fn visit(node: Node, content: &str, tree: &mut SyntaxTree, parent: NodeId) {
        let arena_parent = match Self::map_kind(&node) {
            Some(kind) => {
                let name = Self::declared_name(&node, content);
                let span = LineSpan::new(
                    node.start_position().row + 1,
                    node.end_position().row + 1,
                );
                tree.push(parent, kind, name, span)
            }
            None => parent,
        };

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            Self::visit(child, content, tree, arena_parent);
        }
    }

    /// Collect diagnostics for ERROR and MISSING nodes.
    fn collect_parse_errors(node: Node, errors: &mut Vec<String>) {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            errors.push(format!(
                "syntax error at line {}, column {}",
                pos.row + 1,
                pos.column + 1
            ));
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            Self::collect_parse_errors(child, errors);
        }
    }
}

impl Default for JavaFrontEnd {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageFrontEnd for JavaFrontEnd {
    fn name(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn comment_leader(&self) -> &'static str {
        "//"
    }

    fn parse(&self, content: &str) -> Result<SyntaxTree> {
        // Parser is not thread-safe, so each parse builds its own.
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_java::language())?;

        let ts_tree = parser
            .parse(content.as_bytes(), None)
            .ok_or_else(|| anyhow!("tree-sitter returned no tree"))?;

        if ts_tree.root_node().has_error() {
            let mut errors = Vec::new();
            Self::collect_parse_errors(ts_tree.root_node(), &mut errors);
            if errors.is_empty() {
                errors.push("unlocated syntax error".to_string());
            }
            return Err(anyhow!(errors.join("; ")));
        }

        let line_count = content.split('\n').count();
        let mut tree = SyntaxTree::new(line_count);
        let root = tree.root();
        Self::visit(ts_tree.root_node(), content, &mut tree, root);

        debug!(nodes = tree.len(), "Parsed Java source");
        Ok(tree)
    }
}
