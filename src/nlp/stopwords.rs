//! Stopword filtering
//!
//! Language lists come from the `stop-words` crate; projects can add or
//! remove words on top of them.

use super::normalize::fold_accents;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from token streams
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
    /// Also match accent-folded spellings
    fold: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("es")
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language
    ///
    /// Supported languages: es, en, pt, fr, it, de. Unknown codes fall back
    /// to Spanish.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
            fold: false,
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            fold: false,
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
            fold: false,
        }
    }

    /// Match words regardless of accents, for accent-folded token forms
    pub fn with_folded_accents(mut self, fold: bool) -> Self {
        self.fold = fold;
        if fold {
            let folded: Vec<String> = self.stopwords.iter().map(|w| fold_accents(w)).collect();
            self.stopwords.extend(folded);
        }
        self
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let lower = word.as_ref().to_lowercase();
            if self.fold {
                self.stopwords.insert(fold_accents(&lower));
            }
            self.stopwords.insert(lower);
        }
    }

    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let lower = word.as_ref().to_lowercase();
            self.stopwords.remove(&fold_accents(&lower));
            self.stopwords.remove(&lower);
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "fr" | "french" => LANGUAGE::French,
            "it" | "italian" => LANGUAGE::Italian,
            "de" | "german" => LANGUAGE::German,
            _ => LANGUAGE::Spanish,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
