//! Qualified name resolution.
//!
//! Assigns each chunk its dotted path from file scope in a single pass
//! over the document-ordered chunk list. A top-level declaration's
//! qualified name is its own simple name; no package or namespace prefix
//! is prepended even when one is declared.
//!
//! Collision policy: when two sibling chunks share a local name (e.g.
//! overloaded methods or an overload-style constructor pair), the first
//! occurrence in document order keeps the bare name and each later
//! duplicate gets a stable 1-based ordinal suffix (`#2`, `#3`, ...). The
//! policy never depends on anything other than document order, so
//! resolution is deterministic across runs.

use std::collections::HashMap;

use crate::types::Chunk;

/// Resolves qualified names over a classified chunk list.
pub struct NameResolver;

impl NameResolver {
    /// Create a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Fill in `qualified_name` for every chunk.
    ///
    /// Requires the classifier's ordering guarantee that a parent index
    /// always precedes its children, so each name only ever depends on
    /// already-resolved ancestors.
    pub fn resolve(&self, chunks: &mut [Chunk]) {
        let mut occurrences: HashMap<(Option<usize>, String), usize> = HashMap::new();

        for i in 0..chunks.len() {
            let base = match chunks[i].parent {
                Some(p) => format!("{}.{}", chunks[p].qualified_name, chunks[i].local_name),
                None => chunks[i].local_name.clone(),
            };

            let seen = occurrences
                .entry((chunks[i].parent, chunks[i].local_name.clone()))
                .or_insert(0);
            *seen += 1;

            chunks[i].qualified_name = if *seen == 1 {
                base
            } else {
                format!("{}#{}", base, seen)
            };
        }
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}
