//! Chunk classification.
//!
//! Walks the normalized tree in document order and decides which nodes
//! are chunk-worthy: type declarations (nested included), class and enum
//! fields (one chunk per declared variable), methods and constructors,
//! and closure literals bound to a named local variable. Interface
//! constants and enum constant members are never chunked; inline closures
//! never reach this module at all.

use crate::ast_engine::{NodeId, NodeKind, SyntaxTree};
use crate::types::{Chunk, ChunkKind};

/// Classifies structural nodes into chunk candidates.
pub struct ChunkClassifier;

impl ChunkClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self
    }

    /// Emit chunk candidates in document order.
    ///
    /// Parent back-references are indices into the returned list; a parent
    /// always precedes its children, which is what lets the resolver run
    /// in a single pass.
    pub fn classify(&self, tree: &SyntaxTree) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        for &child in tree.children(tree.root()) {
            self.visit(tree, child, None, &mut chunks);
        }
        chunks
    }

    fn visit(
        &self,
        tree: &SyntaxTree,
        id: NodeId,
        parent: Option<usize>,
        chunks: &mut Vec<Chunk>,
    ) {
        let node = tree.node(id);
        let depth = parent.map_or(0, |p| chunks[p].depth + 1);

        match node.kind {
            NodeKind::Class | NodeKind::Interface | NodeKind::Enum => {
                let Some(name) = node.name.clone() else {
                    return self.visit_children(tree, id, parent, chunks);
                };
                let kind = match node.kind {
                    NodeKind::Class => ChunkKind::Class,
                    NodeKind::Interface => ChunkKind::Interface,
                    _ => ChunkKind::Enum,
                };
                let idx = chunks.len();
                chunks.push(Chunk::new(kind, name, node.span, parent, depth));
                self.visit_children(tree, id, Some(idx), chunks);
            }

            NodeKind::Method => {
                let Some(name) = node.name.clone() else {
                    return self.visit_children(tree, id, parent, chunks);
                };
                let idx = chunks.len();
                chunks.push(Chunk::new(ChunkKind::Method, name, node.span, parent, depth));
                self.visit_children(tree, id, Some(idx), chunks);
            }

            NodeKind::Constructor => {
                // A constructor shares its type's identifier, so it is
                // named after the enclosing chunk scope.
                let name = parent
                    .map(|p| chunks[p].local_name.clone())
                    .or_else(|| node.name.clone());
                let Some(name) = name else {
                    return self.visit_children(tree, id, parent, chunks);
                };
                let idx = chunks.len();
                chunks.push(Chunk::new(ChunkKind::Method, name, node.span, parent, depth));
                self.visit_children(tree, id, Some(idx), chunks);
            }

            NodeKind::Field => {
                // One chunk per declared variable, each spanning the whole
                // declaration statement.
                for &var_id in tree.children(id) {
                    let var = tree.node(var_id);
                    if var.kind != NodeKind::Variable {
                        continue;
                    }
                    let Some(variable) = var.name.clone() else {
                        continue;
                    };
                    let idx = chunks.len();
                    chunks.push(Chunk::new(
                        ChunkKind::Field {
                            variable: variable.clone(),
                        },
                        variable,
                        node.span,
                        parent,
                        depth,
                    ));
                    self.visit_children(tree, var_id, Some(idx), chunks);
                }
            }

            NodeKind::InterfaceConstant => {
                // Interface-level constants are excluded from chunking;
                // anything nested in their initializers still gets walked.
                self.visit_children(tree, id, parent, chunks);
            }

            NodeKind::LocalBinding => {
                for &var_id in tree.children(id) {
                    let var = tree.node(var_id);
                    if var.kind != NodeKind::Variable {
                        continue;
                    }
                    let lambda = tree
                        .children(var_id)
                        .iter()
                        .find(|&&c| tree.node(c).kind == NodeKind::Lambda);
                    match (lambda, var.name.clone()) {
                        (Some(&lambda_id), Some(binding)) => {
                            let idx = chunks.len();
                            chunks.push(Chunk::new(
                                ChunkKind::Lambda {
                                    binding: binding.clone(),
                                },
                                binding,
                                node.span,
                                parent,
                                depth,
                            ));
                            self.visit_children(tree, lambda_id, Some(idx), chunks);
                        }
                        _ => self.visit_children(tree, var_id, parent, chunks),
                    }
                }
            }

            // Reached only for nodes hanging off dropped constructs
            // (e.g. declarations inside an inline lambda body).
            NodeKind::Variable | NodeKind::Lambda | NodeKind::File => {
                self.visit_children(tree, id, parent, chunks);
            }
        }
    }

    fn visit_children(
        &self,
        tree: &SyntaxTree,
        id: NodeId,
        parent: Option<usize>,
        chunks: &mut Vec<Chunk>,
    ) {
        for &child in tree.children(id) {
            self.visit(tree, child, parent, chunks);
        }
    }
}

impl Default for ChunkClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast_engine::{JavaFrontEnd, LanguageFrontEnd};

    fn classify(code: &str) -> Vec<Chunk> {
        let tree = JavaFrontEnd::new().parse(code).unwrap();
        ChunkClassifier::new().classify(&tree)
    }

    fn tags(chunks: &[Chunk]) -> Vec<(&'static str, &str)> {
        chunks
            .iter()
            .map(|c| (c.kind.tag(), c.local_name.as_str()))
            .collect()
    }

    #[test]
    fn test_class_members() {
        let chunks = classify(
            r#"public class Example {
    private int field1 = 100;

    public Example() {
        this.field1 = 1;
    }

    public void addItem(String item) {
    }
}
"#,
        );

        assert_eq!(
            tags(&chunks),
            vec![
                ("class", "Example"),
                ("field", "field1"),
                ("method", "Example"),
                ("method", "addItem"),
            ]
        );
        // Members are parented to the class chunk.
        assert_eq!(chunks[1].parent, Some(0));
        assert_eq!(chunks[2].parent, Some(0));
        assert_eq!(chunks[3].depth, 1);
    }

    #[test]
    fn test_closure_selectivity() {
        let chunks = classify(
            r#"import java.util.List;
import java.util.function.Predicate;

class Example {
    void processItems(List<String> items) {
        Predicate<String> isNotEmpty = s -> !s.isEmpty();
        items.removeIf(s -> s.isEmpty());
        items.forEach(System.out::println);
    }
}
"#,
        );

        let lambdas: Vec<_> = chunks.iter().filter(|c| c.kind.tag() == "lambda").collect();
        assert_eq!(lambdas.len(), 1);
        assert_eq!(lambdas[0].local_name, "isNotEmpty");
        // Nested under the method chunk.
        assert_eq!(lambdas[0].parent, Some(1));
        assert_eq!(chunks[1].local_name, "processItems");
    }

    #[test]
    fn test_interface_constants_excluded() {
        let chunks = classify(
            r#"interface Processor {
    String VERSION = "1.0";

    void process(String input);
    String getResult();
}
"#,
        );

        assert_eq!(
            tags(&chunks),
            vec![
                ("interface", "Processor"),
                ("method", "process"),
                ("method", "getResult"),
            ]
        );
    }

    #[test]
    fn test_enum_constants_stay_inside_enum_span() {
        let chunks = classify(
            r#"enum Status {
    ACTIVE, INACTIVE, PENDING;

    private String description;

    public String getDescription() {
        return description;
    }
}
"#,
        );

        assert_eq!(
            tags(&chunks),
            vec![
                ("enum", "Status"),
                ("field", "description"),
                ("method", "getDescription"),
            ]
        );
        // The enum chunk spans the whole declaration including constants.
        assert_eq!(chunks[0].span.start, 1);
        assert_eq!(chunks[0].span.end, 9);
    }

    #[test]
    fn test_multi_variable_field_splits_per_declarator() {
        let chunks = classify(
            r#"class Pair {
    private int left, right;
}
"#,
        );

        assert_eq!(
            tags(&chunks),
            vec![("class", "Pair"), ("field", "left"), ("field", "right")]
        );
        // Both chunks cover the single declaration statement.
        assert_eq!(chunks[1].span, chunks[2].span);
    }

    #[test]
    fn test_nested_types() {
        let chunks = classify(
            r#"class Outer {
    private class Inner {
        private String innerField;

        public Inner(String value) {
            this.innerField = value;
        }
    }

    interface Listener {
        void onEvent(String event);
    }
}
"#,
        );

        assert_eq!(
            tags(&chunks),
            vec![
                ("class", "Outer"),
                ("class", "Inner"),
                ("field", "innerField"),
                ("method", "Inner"),
                ("interface", "Listener"),
                ("method", "onEvent"),
            ]
        );
        // Constructor is named after the nested class, not the outer one.
        assert_eq!(chunks[3].parent, Some(1));
        // Containment: every child's span lies within its parent's.
        for chunk in &chunks {
            if let Some(p) = chunk.parent {
                assert!(chunks[p].span.contains(&chunk.span));
            }
        }
    }

    #[test]
    fn test_determinism() {
        let code = r#"class Example {
    private int a = 1;
    void run() {}
}
"#;
        let first = classify(code);
        let second = classify(code);

        assert_eq!(tags(&first), tags(&second));
        let spans: Vec<_> = first.iter().map(|c| c.span).collect();
        let spans2: Vec<_> = second.iter().map(|c| c.span).collect();
        assert_eq!(spans, spans2);
    }
}
