//! Marker stripping.
//!
//! Recognizes marker lines with a small line grammar applied after the
//! comment leader is removed, validates nesting with a stack, and
//! reconstructs the unmarked text. Any nesting inconsistency fails the
//! whole file; no partially-stripped output is ever produced.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::AnnotateError;

lazy_static! {
    /// Marker body grammar, matched against a line after the comment
    /// leader and its trailing space have been stripped.
    static ref MARKER_BODY: Regex = Regex::new(
        r"^#(region|endregion) CHUNK \((class|interface|enum|field|method|lambda)\): (.+)$"
    )
    .expect("marker grammar regex");
}

/// A recognized marker line.
#[derive(Debug, PartialEq, Eq)]
enum MarkerLine<'a> {
    Open { kind: &'a str, name: &'a str },
    Close { kind: &'a str, name: &'a str },
}

/// Removes region markers from annotated text.
pub struct MarkerStripper {
    prefix: String,
}

impl MarkerStripper {
    /// Create a stripper for the given single-line comment token.
    pub fn new(leader: &str) -> Self {
        Self {
            prefix: format!("{} ", leader),
        }
    }

    /// Recognize a marker line, tolerating a trailing carriage return.
    fn parse_marker_line<'a>(&self, line: &'a str) -> Option<MarkerLine<'a>> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let body = line.strip_prefix(&self.prefix)?;
        let caps = MARKER_BODY.captures(body)?;

        let kind = caps.get(2).expect("kind group").as_str();
        let name = caps.get(3).expect("name group").as_str();
        match caps.get(1).expect("sentinel group").as_str() {
            "region" => Some(MarkerLine::Open { kind, name }),
            _ => Some(MarkerLine::Close { kind, name }),
        }
    }

    /// Whether any line of `text` is a marker line.
    pub fn contains_markers(&self, text: &str) -> bool {
        text.split('\n')
            .any(|line| self.parse_marker_line(line).is_some())
    }

    /// Remove every marker line, leaving all other content (line breaks
    /// included) untouched.
    ///
    /// Every Close must match the nearest not-yet-closed Open in both
    /// kind and qualified name; an unmatched close, a mismatch, or opens
    /// left at end of file are fatal for the whole file.
    pub fn strip(&self, text: &str) -> Result<String, AnnotateError> {
        let mut kept: Vec<&str> = Vec::new();
        // (kind, name, 1-indexed line of the open marker)
        let mut stack: Vec<(String, String, usize)> = Vec::new();

        for (i, line) in text.split('\n').enumerate() {
            let line_no = i + 1;
            match self.parse_marker_line(line) {
                Some(MarkerLine::Open { kind, name }) => {
                    stack.push((kind.to_string(), name.to_string(), line_no));
                }
                Some(MarkerLine::Close { kind, name }) => {
                    let Some((open_kind, open_name, open_line)) = stack.pop() else {
                        return Err(AnnotateError::malformed_marker(
                            line_no,
                            format!("close marker ({kind}): {name} has no matching open"),
                        ));
                    };
                    if open_kind != kind || open_name != name {
                        return Err(AnnotateError::malformed_marker(
                            line_no,
                            format!(
                                "close marker ({kind}): {name} does not match open \
                                 ({open_kind}): {open_name} from line {open_line}"
                            ),
                        ));
                    }
                }
                None => kept.push(line),
            }
        }

        if let Some((kind, name, open_line)) = stack.pop() {
            return Err(AnnotateError::malformed_marker(
                open_line,
                format!("open marker ({kind}): {name} is never closed"),
            ));
        }

        Ok(kept.join("\n"))
    }
}
