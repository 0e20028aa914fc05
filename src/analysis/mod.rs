//! Corpus analysis: frequencies, co-occurrence and modal profiles
//!
//! Orchestrates the full pipeline over loaded documents:
//! 1. Tokenize and split sentences
//! 2. Tag modal and hedging expressions
//! 3. Count term and content-word frequencies
//! 4. Score term/word collocations with PMI
//! 5. Build an interpretive profile per document

pub mod cooccurrence;
pub mod frequency;
pub mod profile;

use crate::config::{AnalysisConfig, ProjectConfig};
use crate::lexicon::{Lexicon, LexiconError, Tagger};
use crate::models::{AnalysisReport, Document, TagMatch, Token};
use crate::nlp::{tokenize, StopwordFilter, TokenizerOptions};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    pub window: usize,
    pub min_cooccurrence: usize,
    pub top_n: usize,
    pub min_token_len: usize,
    pub tokenizer: TokenizerOptions,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        AnalyzerOptions::from(&AnalysisConfig::default())
    }
}

impl From<&AnalysisConfig> for AnalyzerOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            window: config.window,
            min_cooccurrence: config.min_cooccurrence.max(1),
            top_n: config.top_n,
            min_token_len: config.min_token_len,
            tokenizer: TokenizerOptions {
                fold_accents: config.fold_accents,
            },
        }
    }
}

/// A document after tokenization and tagging
#[derive(Debug, Clone)]
pub struct TaggedDocument<'a> {
    pub document: &'a Document,
    pub tokens: Vec<Token>,
    pub matches: Vec<TagMatch>,
    /// `content[i]` is true when token `i` counts as a content word
    pub content: Vec<bool>,
}

impl TaggedDocument<'_> {
    pub fn word_tokens(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_word()).count()
    }

    pub fn content_words(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .zip(&self.content)
            .filter(|(_, is_content)| **is_content)
            .map(|(t, _)| t)
    }
}

pub struct Analyzer {
    tagger: Tagger,
    stopwords: StopwordFilter,
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new(
        lexicon: &Lexicon,
        stopwords: StopwordFilter,
        options: AnalyzerOptions,
    ) -> Result<Self, LexiconError> {
        Ok(Self {
            tagger: Tagger::new(lexicon)?,
            stopwords,
            options,
        })
    }

    /// Build the analyzer a project config describes
    pub fn from_config(config: &ProjectConfig, root: &Path) -> Result<Self, LexiconError> {
        let lexicon = Lexicon::from_config(&config.lexicon, root)?;
        let mut stopwords = StopwordFilter::new(&config.analysis.stopwords_language)
            .with_folded_accents(config.analysis.fold_accents);
        stopwords.add_stopwords(&config.analysis.extra_stopwords);
        debug!(
            "Analyzer ready: {} lexicon entries, {} stopwords",
            lexicon.len(),
            stopwords.len()
        );
        Self::new(&lexicon, stopwords, AnalyzerOptions::from(&config.analysis))
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut AnalyzerOptions {
        &mut self.options
    }

    /// Tokenize and tag a single document
    pub fn prepare<'a>(&self, document: &'a Document) -> TaggedDocument<'a> {
        let tokens = tokenize(&document.text, &self.options.tokenizer);
        let matches = self.tagger.tag(&document.text, &tokens);
        let content = content_mask(
            &tokens,
            &matches,
            &self.stopwords,
            self.options.min_token_len,
        );
        debug!(
            "{}: {} tokens, {} modal matches",
            document.name,
            tokens.len(),
            matches.len()
        );
        TaggedDocument {
            document,
            tokens,
            matches,
            content,
        }
    }

    /// Run the full pipeline. Output is deterministic apart from the
    /// `generated_at` timestamp.
    pub fn run(&self, documents: &[Document]) -> AnalysisReport {
        let tagged: Vec<TaggedDocument> = documents.iter().map(|d| self.prepare(d)).collect();

        let frequencies = frequency::count(&tagged, self.options.top_n);
        let collocations = cooccurrence::collocations(
            &tagged,
            self.options.window,
            self.options.min_cooccurrence,
        );
        let category_pairs = cooccurrence::category_pairs(&tagged);
        let profiles: Vec<_> = tagged.iter().map(profile::build).collect();
        let total_matches = tagged.iter().map(|t| t.matches.len()).sum();

        info!(
            "Analyzed {} documents: {} words, {} modal matches, {} collocations",
            documents.len(),
            frequencies.total_words,
            total_matches,
            collocations.len()
        );

        AnalysisReport {
            generated_at: chrono::Local::now().to_rfc3339(),
            documents: documents.len(),
            total_words: frequencies.total_words,
            total_matches,
            window: self.options.window,
            frequencies,
            collocations,
            category_pairs,
            profiles,
        }
    }
}

/// Content words are word tokens that are not stopwords, are long enough
/// and are not part of a tagged expression
fn content_mask(
    tokens: &[Token],
    matches: &[TagMatch],
    stopwords: &StopwordFilter,
    min_len: usize,
) -> Vec<bool> {
    let mut mask: Vec<bool> = tokens
        .iter()
        .map(|t| t.is_word() && t.norm.chars().count() >= min_len && !stopwords.is_stopword(&t.norm))
        .collect();
    for m in matches {
        for flag in mask.iter_mut().take(m.token_end).skip(m.token_start) {
            *flag = false;
        }
    }
    mask
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::corpus::extract_metadata;
    use crate::lexicon::LexiconEntry;
    use crate::models::ModalCategory;

    pub(crate) fn doc(name: &str, text: &str) -> Document {
        Document {
            name: name.to_string(),
            text: text.to_string(),
            metadata: extract_metadata(text, &format!("{name}.txt")),
        }
    }

    /// Small lexicon and stoplist so expected numbers are easy to derive
    pub(crate) fn small_analyzer(window: usize, min_cooccurrence: usize) -> Analyzer {
        let lexicon = Lexicon::new(vec![
            LexiconEntry::new("deber", ModalCategory::Deontic, "deb(?:e|en|erá|erán)"),
            LexiconEntry::literal("en lo posible", ModalCategory::Hedge),
            LexiconEntry::new("poder", ModalCategory::Dynamic, "pod(?:rá|rán)|pued(?:e|en)"),
            LexiconEntry::literal("tal vez", ModalCategory::Epistemic),
        ]);
        let stopwords = StopwordFilter::from_list(&["el", "la", "los", "las", "de", "y", "se"]);
        let options = AnalyzerOptions {
            window,
            min_cooccurrence,
            top_n: 10,
            min_token_len: 2,
            tokenizer: TokenizerOptions::default(),
        };
        Analyzer::new(&lexicon, stopwords, options).unwrap()
    }

    #[test]
    fn test_content_mask_excludes_matches_and_stopwords() {
        let analyzer = small_analyzer(3, 1);
        let d = doc("a", "El Ministerio deberá, en lo posible, publicar.");
        let tagged = analyzer.prepare(&d);
        let content: Vec<_> = tagged.content_words().map(|t| t.norm.as_str()).collect();
        assert_eq!(content, vec!["ministerio", "publicar"]);
        assert_eq!(tagged.matches.len(), 2);
        assert_eq!(tagged.word_tokens(), 7);
    }

    #[test]
    fn test_run_report_totals() {
        let analyzer = small_analyzer(3, 1);
        let docs = vec![
            doc("a", "El Ministerio deberá publicar. La entidad podrá publicar."),
            doc("b", "Tal vez el Ministerio deba esperar."),
        ];
        let report = analyzer.run(&docs);
        assert_eq!(report.documents, 2);
        // "deba" is not covered by the small lexicon
        assert_eq!(report.total_matches, 3);
        assert_eq!(report.profiles.len(), 2);
        assert_eq!(report.total_words, 14);
        assert!(!report.generated_at.is_empty());
    }

    #[test]
    fn test_from_config_uses_default_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = Analyzer::from_config(&ProjectConfig::default(), dir.path()).unwrap();
        let d = doc("a", "Las entidades deberán, en la medida de lo posible, informar.");
        let tagged = analyzer.prepare(&d);
        let terms: Vec<_> = tagged.matches.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(terms, vec!["deber", "en la medida de lo posible"]);
    }
}
