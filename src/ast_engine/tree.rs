//! Arena-backed syntax tree produced by a language front-end.
//!
//! Nodes live in a flat indexed collection addressed by `NodeId`; each
//! entry stores its parent's id and an ordered list of child ids, so the
//! parent/child structure carries back-references without reference
//! cycles.

use crate::types::LineSpan;

/// Index of a node within a `SyntaxTree` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Normalized kinds of structural nodes a front-end may emit.
///
/// Front-ends map language-specific grammar productions onto this closed
/// set and drop everything else, so the classifier never sees raw grammar
/// node names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Synthetic root covering the whole file.
    File,
    Class,
    Interface,
    Enum,
    /// Field declaration in a class or enum body; declares one or more
    /// `Variable` children.
    Field,
    /// Constant declaration in an interface body.
    InterfaceConstant,
    /// A single declarator introducing one named variable.
    Variable,
    Method,
    Constructor,
    /// Local variable declaration statement; declares `Variable` children.
    LocalBinding,
    /// Closure literal appearing as the direct initializer of a declarator.
    Lambda,
}

/// A structural node with a kind, an optional declared name, and an
/// inclusive line span in the original text.
#[derive(Debug, Clone)]
pub struct AstNode {
    pub kind: NodeKind,
    pub name: Option<String>,
    pub span: LineSpan,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// A parsed file as a flat arena of structural nodes.
#[derive(Debug)]
pub struct SyntaxTree {
    nodes: Vec<AstNode>,
}

impl SyntaxTree {
    /// Create a tree containing only the file-scope root spanning
    /// `line_count` lines.
    pub fn new(line_count: usize) -> Self {
        Self {
            nodes: vec![AstNode {
                kind: NodeKind::File,
                name: None,
                span: LineSpan::new(1, line_count.max(1)),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Id of the file-scope root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a node under `parent`, preserving document order among
    /// siblings, and return its id.
    pub fn push(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: Option<String>,
        span: LineSpan,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(AstNode {
            kind,
            name,
            span,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Borrow a node by id.
    pub fn node(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.0]
    }

    /// Ordered child ids of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Iterate over all nodes in document order (arena ids are allocated
    /// during a preorder walk), root included.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &AstNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}
