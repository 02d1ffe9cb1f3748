//! Marker synthesis.
//!
//! Inserts paired delimiter comment lines around every chunk's span. No
//! byte of the original content is touched: markers are whole new lines,
//! so removing them reproduces the input exactly.

use crate::types::Chunk;

/// Inserts region markers into source text.
pub struct MarkerSynthesizer {
    leader: &'static str,
}

impl MarkerSynthesizer {
    /// Create a synthesizer using the host language's single-line comment
    /// token as the marker line prefix.
    pub fn new(leader: &'static str) -> Self {
        Self { leader }
    }

    /// The Open marker line for a resolved chunk.
    pub fn open_marker(&self, chunk: &Chunk) -> String {
        format!(
            "{} #region CHUNK ({}): {}",
            self.leader,
            chunk.kind.tag(),
            chunk.qualified_name
        )
    }

    /// The Close marker line for a resolved chunk.
    pub fn close_marker(&self, chunk: &Chunk) -> String {
        format!(
            "{} #endregion CHUNK ({}): {}",
            self.leader,
            chunk.kind.tag(),
            chunk.qualified_name
        )
    }

    /// Insert markers for every chunk into `text`.
    ///
    /// Chunks are processed innermost-and-latest first (nesting depth
    /// descending, then start line descending, then document order
    /// descending) so a chunk's computed line positions are never
    /// invalidated by markers inserted for its descendants; each
    /// ancestor's markers then land outside everything inserted within
    /// its span.
    pub fn annotate(&self, text: &str, chunks: &[Chunk]) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut opens: Vec<Vec<String>> = vec![Vec::new(); lines.len()];
        let mut closes: Vec<Vec<String>> = vec![Vec::new(); lines.len()];

        let mut order: Vec<usize> = (0..chunks.len()).collect();
        order.sort_by(|&a, &b| {
            chunks[b]
                .depth
                .cmp(&chunks[a].depth)
                .then(chunks[b].span.start.cmp(&chunks[a].span.start))
                .then(b.cmp(&a))
        });

        for idx in order {
            let chunk = &chunks[idx];
            let start = chunk.span.start.saturating_sub(1);
            let end = chunk.span.end.saturating_sub(1);
            if start >= lines.len() || end >= lines.len() {
                continue;
            }
            // Later-processed (outer) opens go in front of earlier (inner)
            // ones on the same line; closes keep inner-first order.
            opens[start].insert(0, self.open_marker(chunk));
            closes[end].push(self.close_marker(chunk));
        }

        let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2 * chunks.len());
        for (i, line) in lines.iter().enumerate() {
            for marker in &opens[i] {
                out.push(marker.as_str());
            }
            out.push(line);
            for marker in &closes[i] {
                out.push(marker.as_str());
            }
        }
        out.join("\n")
    }
}
