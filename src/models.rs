//! Core data models for Ambiguity
//!
//! These models are shared by the corpus loader, the tagger, the analysis
//! passes and the reporters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of legal instrument recognised in a document header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Decreto,
    Ley,
    Resolucion,
    #[default]
    Unknown,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Decreto => write!(f, "DECRETO"),
            DocumentType::Ley => write!(f, "LEY"),
            DocumentType::Resolucion => write!(f, "RESOLUCION"),
            DocumentType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Basic descriptive metadata extracted from a decree text
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DocumentMetadata {
    pub filename: String,
    pub word_count: usize,
    pub char_count: usize,
    pub paragraph_count: usize,
    /// Number of `ARTÍCULO <n>` headings
    #[serde(default)]
    pub article_count: usize,
    #[serde(default)]
    pub document_type: DocumentType,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// A loaded, cleaned document ready for analysis
#[derive(Debug, Clone)]
pub struct Document {
    /// File stem used as the document id in reports
    pub name: String,
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Modal category of a lexicon entry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ModalCategory {
    /// Obligation, prohibition and permission
    #[default]
    Deontic,
    /// Certainty and possibility
    Epistemic,
    /// Ability and capacity
    Dynamic,
    /// Mitigation of the force of a claim
    Hedge,
}

impl ModalCategory {
    pub const ALL: [ModalCategory; 4] = [
        ModalCategory::Deontic,
        ModalCategory::Epistemic,
        ModalCategory::Dynamic,
        ModalCategory::Hedge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalCategory::Deontic => "deontic",
            ModalCategory::Epistemic => "epistemic",
            ModalCategory::Dynamic => "dynamic",
            ModalCategory::Hedge => "hedge",
        }
    }
}

impl std::fmt::Display for ModalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deontic" => Ok(ModalCategory::Deontic),
            "epistemic" => Ok(ModalCategory::Epistemic),
            "dynamic" => Ok(ModalCategory::Dynamic),
            "hedge" | "hedging" => Ok(ModalCategory::Hedge),
            other => Err(format!(
                "Unknown category '{}'. Valid categories: deontic, epistemic, dynamic, hedge",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Word,
    Number,
    Punct,
}

/// A token with its byte span in the source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Lowercased (and optionally accent-folded) form used for counting
    pub norm: String,
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub index: usize,
    pub sentence: usize,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// A lexicon hit in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagMatch {
    /// Canonical lexicon term (e.g. `deber`)
    pub term: String,
    pub category: ModalCategory,
    /// Text as it appears in the document (e.g. `deberán`)
    pub surface: String,
    pub start: usize,
    pub end: usize,
    /// First token covered by the match
    pub token_start: usize,
    /// One past the last token covered by the match
    pub token_end: usize,
    pub sentence: usize,
}

/// Frequency of one lexicon term across the corpus
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TermFrequency {
    pub term: String,
    pub category: ModalCategory,
    pub total: usize,
    /// Occurrences per 1,000 word tokens in the whole corpus
    pub per_thousand: f64,
    /// Document name -> count
    pub by_document: BTreeMap<String, usize>,
}

/// A content word and how often it appears
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FrequencyTable {
    pub terms: Vec<TermFrequency>,
    pub by_category: BTreeMap<ModalCategory, usize>,
    pub content_words: Vec<WordCount>,
    pub total_words: usize,
}

/// Association between a modal term and a neighbouring content word
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collocation {
    pub term: String,
    pub category: ModalCategory,
    pub word: String,
    pub joint: usize,
    pub term_count: usize,
    pub word_count: usize,
    pub pmi: f64,
    pub npmi: f64,
}

/// Number of sentences where two categories appear together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryPair {
    pub first: ModalCategory,
    pub second: ModalCategory,
    pub sentences: usize,
}

/// A sentence carrying both an obligation and a hedge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoftenedObligation {
    pub sentence: usize,
    pub deontic: Vec<String>,
    pub hedges: Vec<String>,
    pub excerpt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VocabularyStats {
    pub word_tokens: usize,
    pub unique_surface: usize,
    pub unique_normalized: usize,
    pub reduction_percentage: f64,
}

/// Interpretive modal profile of one document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentProfile {
    pub document: String,
    pub metadata: DocumentMetadata,
    pub word_tokens: usize,
    pub sentences: usize,
    pub modal_count: usize,
    pub density_per_thousand: f64,
    pub by_category: BTreeMap<ModalCategory, usize>,
    pub shares: BTreeMap<ModalCategory, f64>,
    pub dominant: Option<ModalCategory>,
    pub hedge_to_deontic: Option<f64>,
    pub softened_obligations: Vec<SoftenedObligation>,
    pub vocabulary: VocabularyStats,
    pub notes: Vec<String>,
}

/// Full result of an analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: String,
    pub documents: usize,
    pub total_words: usize,
    pub total_matches: usize,
    pub window: usize,
    pub frequencies: FrequencyTable,
    pub collocations: Vec<Collocation>,
    pub category_pairs: Vec<CategoryPair>,
    pub profiles: Vec<DocumentProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_parsing() {
        assert_eq!(ModalCategory::from_str("deontic").unwrap(), ModalCategory::Deontic);
        assert_eq!(ModalCategory::from_str("Hedging").unwrap(), ModalCategory::Hedge);
        assert_eq!(ModalCategory::from_str(" EPISTEMIC ").unwrap(), ModalCategory::Epistemic);
        assert!(ModalCategory::from_str("alethic").is_err());
    }

    #[test]
    fn test_category_order_is_declaration_order() {
        let mut cats = vec![ModalCategory::Hedge, ModalCategory::Deontic, ModalCategory::Dynamic];
        cats.sort();
        assert_eq!(
            cats,
            vec![ModalCategory::Deontic, ModalCategory::Dynamic, ModalCategory::Hedge]
        );
    }

    #[test]
    fn test_metadata_serializes_document_type_uppercase() {
        let meta = DocumentMetadata {
            filename: "decreto_1194_1989.txt".into(),
            document_type: DocumentType::Decreto,
            number: Some("1194".into()),
            year: Some("1989".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["document_type"], "DECRETO");
        assert_eq!(json["year"], "1989");
    }
}
