//! Per-file annotation pipeline.
//!
//! Indexing one file is a pure, synchronous pipeline:
//! strip-if-marked, parse, classify, resolve names, synthesize markers.
//! The chunk set is always recomputed from scratch from the AST of the
//! unmarked text, which is what makes re-indexing idempotent.

use std::sync::Arc;

use tracing::debug;

use crate::ast_engine::{JavaFrontEnd, LanguageFrontEnd};
use crate::chunking::{ChunkClassifier, NameResolver};
use crate::error::AnnotateError;
use crate::markers::{MarkerStripper, MarkerSynthesizer};
use crate::types::{Chunk, ChunkRecord, SourceFile};

/// Annotates single files using the registered language front-ends.
pub struct FileAnnotator {
    front_ends: Vec<Arc<dyn LanguageFrontEnd>>,
    classifier: ChunkClassifier,
    resolver: NameResolver,
}

impl FileAnnotator {
    /// Create an annotator with all built-in front-ends.
    pub fn new() -> Self {
        Self {
            front_ends: vec![Arc::new(JavaFrontEnd::new())],
            classifier: ChunkClassifier::new(),
            resolver: NameResolver::new(),
        }
    }

    /// Register an additional language front-end.
    pub fn with_front_end(mut self, front_end: Arc<dyn LanguageFrontEnd>) -> Self {
        self.front_ends.push(front_end);
        self
    }

    /// Names of all registered languages.
    pub fn languages(&self) -> Vec<&'static str> {
        self.front_ends.iter().map(|f| f.name()).collect()
    }

    /// Find the front-end handling a file, by extension.
    pub fn front_end_for(&self, path: &str) -> Option<&Arc<dyn LanguageFrontEnd>> {
        let ext = SourceFile::extension_of(path)?;
        self.front_ends
            .iter()
            .find(|f| f.extensions().contains(&ext.as_str()))
    }

    /// Produce the annotated text: identical to the input except for the
    /// inserted marker lines.
    ///
    /// Input that already carries markers is stripped first and re-indexed
    /// from the canonical unmarked text.
    pub fn annotate(&self, file: &SourceFile) -> Result<String, AnnotateError> {
        let (front_end, unmarked, chunks) = self.index(file)?;
        let synthesizer = MarkerSynthesizer::new(front_end.comment_leader());
        Ok(synthesizer.annotate(&unmarked, &chunks))
    }

    /// Produce the structured chunk list without mutating the content.
    pub fn chunks(&self, file: &SourceFile) -> Result<Vec<ChunkRecord>, AnnotateError> {
        let (_, _, chunks) = self.index(file)?;
        Ok(ChunkRecord::from_chunks(&chunks))
    }

    /// Annotate and also report the chunk count (service convenience).
    pub fn annotate_counted(&self, file: &SourceFile) -> Result<(String, usize), AnnotateError> {
        let (front_end, unmarked, chunks) = self.index(file)?;
        let synthesizer = MarkerSynthesizer::new(front_end.comment_leader());
        Ok((synthesizer.annotate(&unmarked, &chunks), chunks.len()))
    }

    /// Remove all markers from annotated text.
    pub fn strip(&self, file: &SourceFile) -> Result<String, AnnotateError> {
        let front_end = self
            .front_end_for(&file.path)
            .ok_or_else(|| AnnotateError::UnsupportedLanguage {
                path: file.path.clone(),
            })?;
        MarkerStripper::new(front_end.comment_leader()).strip(&file.content)
    }

    /// Run the shared front half of the pipeline: canonical unmarked text
    /// plus the resolved, document-ordered chunk list.
    fn index(
        &self,
        file: &SourceFile,
    ) -> Result<(&Arc<dyn LanguageFrontEnd>, String, Vec<Chunk>), AnnotateError> {
        let front_end = self
            .front_end_for(&file.path)
            .ok_or_else(|| AnnotateError::UnsupportedLanguage {
                path: file.path.clone(),
            })?;

        let stripper = MarkerStripper::new(front_end.comment_leader());
        let unmarked = if stripper.contains_markers(&file.content) {
            stripper.strip(&file.content)?
        } else {
            file.content.clone()
        };

        let tree = front_end
            .parse(&unmarked)
            .map_err(|e| AnnotateError::parse(&file.path, e.to_string()))?;

        let mut chunks = self.classifier.classify(&tree);
        self.resolver.resolve(&mut chunks);

        debug!(path = %file.path, chunks = chunks.len(), "Indexed file");
        Ok((front_end, unmarked, chunks))
    }
}

impl Default for FileAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = r#"public class Example {
    private int field1 = 100;

    public Example() {
        this.field1 = 1;
    }

    public int getField() {
        return field1;
    }
}
"#;

    #[test]
    fn test_round_trip() {
        let annotator = FileAnnotator::new();
        let file = SourceFile::new("Example.java", SOURCE);

        let annotated = annotator.annotate(&file).unwrap();
        let stripped = annotator
            .strip(&SourceFile::new("Example.java", annotated))
            .unwrap();

        assert_eq!(stripped, SOURCE);
    }

    #[test]
    fn test_reindexing_is_idempotent() {
        let annotator = FileAnnotator::new();
        let file = SourceFile::new("Example.java", SOURCE);

        let once = annotator.annotate(&file).unwrap();
        let twice = annotator
            .annotate(&SourceFile::new("Example.java", once.clone()))
            .unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_chunk_list_does_not_mutate() {
        let annotator = FileAnnotator::new();
        let file = SourceFile::new("Example.java", SOURCE);

        let records = annotator.chunks(&file).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.qualified_name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Example",
                "Example.field1",
                "Example.Example",
                "Example.getField",
            ]
        );
        assert_eq!(records[1].kind, "field");
        assert_eq!(records[1].start_line, 2);
        assert_eq!(records[1].end_line, 2);
        assert_eq!(records[2].parent.as_deref(), Some("Example"));
    }

    #[test]
    fn test_co_declarator_markers_nest_and_round_trip() {
        let source = "class Pair {\n    private int left, right;\n}\n";
        let annotator = FileAnnotator::new();
        let file = SourceFile::new("Pair.java", source);

        let annotated = annotator.annotate(&file).unwrap();

        assert_eq!(
            annotated,
            "// #region CHUNK (class): Pair\n\
             class Pair {\n\
             // #region CHUNK (field): Pair.left\n\
             // #region CHUNK (field): Pair.right\n\
             \x20   private int left, right;\n\
             // #endregion CHUNK (field): Pair.right\n\
             // #endregion CHUNK (field): Pair.left\n\
             }\n\
             // #endregion CHUNK (class): Pair\n"
        );

        let stripped = annotator
            .strip(&SourceFile::new("Pair.java", annotated))
            .unwrap();
        assert_eq!(stripped, source);
    }

    #[test]
    fn test_unsupported_extension() {
        let annotator = FileAnnotator::new();
        let file = SourceFile::new("script.lua", "print('hi')\n");

        assert!(matches!(
            annotator.annotate(&file),
            Err(AnnotateError::UnsupportedLanguage { .. })
        ));

        // Extensionless paths are unsupported too, not matched by name.
        assert!(annotator.front_end_for("Makefile").is_none());
    }

    #[test]
    fn test_parse_failure_reports_path() {
        let annotator = FileAnnotator::new();
        let file = SourceFile::new("Broken.java", "class Broken {\n");

        let err = annotator.annotate(&file).unwrap_err();
        assert!(err.to_string().contains("Broken.java"));
    }

    #[test]
    fn test_chunk_invariants_hold() {
        let annotator = FileAnnotator::new();
        let file = SourceFile::new("Example.java", SOURCE);
        let records = annotator.chunks(&file).unwrap();

        // Uniqueness.
        let mut names: Vec<&str> = records.iter().map(|r| r.qualified_name.as_str()).collect();
        names.sort();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());

        // Sibling spans never overlap (distinct declarations).
        for a in &records {
            for b in &records {
                if a.qualified_name != b.qualified_name && a.parent == b.parent {
                    assert!(
                        a.end_line < b.start_line || b.end_line < a.start_line,
                        "{} and {} overlap",
                        a.qualified_name,
                        b.qualified_name
                    );
                }
            }
        }
    }
}
