//! Boundary to the document-text-extraction collaborator.
//!
//! The analysis core consumes already-extracted plain text and never touches
//! file formats. This module pins down the contract an extractor must meet:
//! direct text extraction first, an OCR fallback when the document has no
//! text layer, and the whitespace normalization both paths apply before the
//! text reaches the pipeline. No extractor implementation lives in this crate.

use thiserror::Error;

/// Failure kinds an extractor may surface to its caller. The analysis core
/// has no dependency on extraction succeeding.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Both direct extraction and the OCR fallback produced no text.
    #[error("document produced no extractable text")]
    EmptyDocument,
    /// The input bytes are not a well-formed document.
    #[error("input is not a well-formed document: {0}")]
    MalformedDocument(String),
}

/// Turns document bytes into normalized plain text.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Normalize extractor output: collapse runs of spaces and tabs within a line
/// to one space, collapse three or more consecutive line breaks to exactly
/// two, and trim every line.
pub fn normalize_extracted_text(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut blank_run = 0usize;

    for line in raw.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            blank_run += 1;
            // A third blank line in a row collapses into the existing break.
            if blank_run <= 1 {
                lines.push(collapsed);
            }
        } else {
            blank_run = 0;
            lines.push(collapsed);
        }
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_extracted_text;

    #[test]
    fn collapses_space_runs_within_a_line() {
        assert_eq!(normalize_extracted_text("a  b   c"), "a b c");
    }

    #[test]
    fn collapses_three_or_more_line_breaks_to_two() {
        assert_eq!(normalize_extracted_text("a\n\n\n\nc"), "a\n\nc");
        assert_eq!(normalize_extracted_text("a\n\nc"), "a\n\nc");
        assert_eq!(normalize_extracted_text("a\nc"), "a\nc");
    }

    #[test]
    fn trims_each_line_and_the_whole_text() {
        assert_eq!(normalize_extracted_text("  a \n  b  \n"), "a\nb");
        assert_eq!(normalize_extracted_text("\n\n  \n"), "");
    }
}
