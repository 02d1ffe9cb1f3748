//! Chunk type definitions.

use std::fmt;

/// Inclusive 1-indexed line span of a chunk in the unmarked source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineSpan {
    /// First line of the declaration's own text.
    pub start: usize,
    /// Last line, including the closing brace or terminator.
    pub end: usize,
}

impl LineSpan {
    /// Create a span covering `start..=end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered.
    pub fn line_count(&self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }

    /// Whether this span fully contains `other`.
    pub fn contains(&self, other: &LineSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether this span shares any line with `other`.
    pub fn overlaps(&self, other: &LineSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// The closed set of chunk kinds.
///
/// Field and lambda chunks carry the identifier of the variable that names
/// them, since that name comes from a declarator rather than from the
/// declaration node itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkKind {
    Class,
    Interface,
    Enum,
    /// A single declared field variable. A declaration introducing several
    /// variables splits into one chunk per variable.
    Field { variable: String },
    /// A method or constructor declaration.
    Method,
    /// A closure literal bound to a named local variable.
    Lambda { binding: String },
}

impl ChunkKind {
    /// The marker-grammar tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ChunkKind::Class => "class",
            ChunkKind::Interface => "interface",
            ChunkKind::Enum => "enum",
            ChunkKind::Field { .. } => "field",
            ChunkKind::Method => "method",
            ChunkKind::Lambda { .. } => "lambda",
        }
    }

    /// Whether `tag` names a valid chunk kind.
    pub fn is_valid_tag(tag: &str) -> bool {
        matches!(
            tag,
            "class" | "interface" | "enum" | "field" | "method" | "lambda"
        )
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A named, bounded unit of source text corresponding to one declaration.
///
/// Chunks form a forest rooted at file scope. The parent back-reference is
/// an index into the document-ordered chunk list, so the structure stays
/// acyclic and cheap to clone.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Kind of declaration this chunk covers.
    pub kind: ChunkKind,
    /// Simple name used for qualification (declared identifier, or the
    /// binding variable for fields and lambdas).
    pub local_name: String,
    /// Dotted path from file scope, unique within a file. Empty until the
    /// resolver has run.
    pub qualified_name: String,
    /// Extent in the unmarked source.
    pub span: LineSpan,
    /// Index of the enclosing chunk in the same list, or `None` at file
    /// scope.
    pub parent: Option<usize>,
    /// Nesting depth: 0 at file scope.
    pub depth: usize,
}

impl Chunk {
    /// Create an unresolved chunk; the resolver assigns the qualified name.
    pub fn new(
        kind: ChunkKind,
        local_name: impl Into<String>,
        span: LineSpan,
        parent: Option<usize>,
        depth: usize,
    ) -> Self {
        Self {
            kind,
            local_name: local_name.into(),
            qualified_name: String::new(),
            span,
            parent,
            depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_containment() {
        let outer = LineSpan::new(1, 20);
        let inner = LineSpan::new(5, 10);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_span_overlap() {
        let a = LineSpan::new(1, 5);
        let b = LineSpan::new(5, 9);
        let c = LineSpan::new(6, 9);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_kind_tags() {
        let field = ChunkKind::Field {
            variable: "field1".to_string(),
        };
        assert_eq!(field.tag(), "field");
        assert_eq!(ChunkKind::Class.tag(), "class");
        assert!(ChunkKind::is_valid_tag("lambda"));
        assert!(!ChunkKind::is_valid_tag("function"));
    }
}
