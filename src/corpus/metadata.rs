//! Header and structure metadata for decree texts

use crate::models::{DocumentMetadata, DocumentType};
use regex::Regex;
use std::sync::OnceLock;

static INSTRUMENT_PATTERNS: OnceLock<Vec<(DocumentType, Regex)>> = OnceLock::new();
static ARTICLE_HEADING: OnceLock<Regex> = OnceLock::new();

/// Checked in order; the first instrument that matches wins
fn instrument_patterns() -> &'static [(DocumentType, Regex)] {
    INSTRUMENT_PATTERNS.get_or_init(|| {
        [
            (
                DocumentType::Decreto,
                r"(?i)\bDECRETO\s+(?:N[ÚU]MERO\s+|No\.?\s*)?(\d+)\s+DE\s+(\d{4})",
            ),
            (DocumentType::Ley, r"(?i)\bLEY\s+(\d+)\s+DE\s+(\d{4})"),
            (
                DocumentType::Resolucion,
                r"(?i)\bRESOLUCI[ÓO]N\s+(?:N[ÚU]MERO\s+|No\.?\s*)?(\d+)\s+DE\s+(\d{4})",
            ),
        ]
        .into_iter()
        .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("valid regex")))
        .collect()
    })
}

/// `ARTÍCULO 12.` / `Artículo 3o:`; bare references like "el artículo 5 de"
/// have no heading punctuation and are not counted
fn article_heading() -> &'static Regex {
    ARTICLE_HEADING.get_or_init(|| {
        Regex::new(r"(?i)\bART[ÍI]CULO\s+\d+\s*[oº°]?\s*[.:\-]").expect("valid regex")
    })
}

/// Extract counts and the instrument type, number and year from a text
pub fn extract_metadata(text: &str, filename: &str) -> DocumentMetadata {
    let paragraph_count = text.split("\n\n").filter(|p| !p.trim().is_empty()).count();

    let mut metadata = DocumentMetadata {
        filename: filename.to_string(),
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
        paragraph_count,
        article_count: article_heading().find_iter(text).count(),
        ..Default::default()
    };

    for (kind, re) in instrument_patterns() {
        if let Some(caps) = re.captures(text) {
            metadata.document_type = *kind;
            metadata.number = caps.get(1).map(|m| m.as_str().to_string());
            metadata.year = caps.get(2).map(|m| m.as_str().to_string());
            break;
        }
    }

    metadata
}
