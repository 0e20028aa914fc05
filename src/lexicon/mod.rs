//! Modal and hedging lexicon
//!
//! A lexicon is an ordered list of entries, each a canonical term (usually
//! the infinitive or the fixed expression), a modal category and a regex
//! covering its inflections. The built-in lexicon targets Spanish legal
//! prose; projects can replace it with a TOML file or patch it from
//! `ambiguity.toml`.
//!
//! ```toml
//! [[entry]]
//! term = "deber"
//! category = "deontic"
//! pattern = "deb(?:e|en|erá|erán)"
//! ```

mod spanish;
mod tagger;

pub use tagger::Tagger;

use crate::config::{LexiconConfig, LexiconEntryOverride};
use crate::models::ModalCategory;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building a lexicon or tagger
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Invalid pattern for term '{term}': {source}")]
    Pattern {
        term: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown category '{category}' for term '{term}'")]
    Category { term: String, category: String },

    #[error("Lexicon entry has an empty term")]
    EmptyTerm,

    #[error("Failed to read lexicon {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub term: String,
    pub category: ModalCategory,
    /// Regex body, matched case-insensitively between word boundaries
    pub pattern: String,
}

impl LexiconEntry {
    pub fn new(term: &str, category: ModalCategory, pattern: &str) -> Self {
        Self {
            term: term.to_string(),
            category,
            pattern: pattern.to_string(),
        }
    }

    /// Entry whose pattern is the literal term, with flexible whitespace
    pub fn literal(term: &str, category: ModalCategory) -> Self {
        Self::new(term, category, &literal_pattern(term))
    }
}

fn literal_pattern(term: &str) -> String {
    term.split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    entry: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    term: String,
    category: String,
    #[serde(default)]
    pattern: Option<String>,
}

impl RawEntry {
    fn into_entry(self) -> Result<LexiconEntry, LexiconError> {
        let term = self.term.trim().to_string();
        if term.is_empty() {
            return Err(LexiconError::EmptyTerm);
        }
        let category: ModalCategory =
            self.category
                .parse()
                .map_err(|_| LexiconError::Category {
                    term: term.clone(),
                    category: self.category.clone(),
                })?;
        Ok(match self.pattern {
            Some(pattern) => LexiconEntry::new(&term, category, &pattern),
            None => LexiconEntry::literal(&term, category),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn new(entries: Vec<LexiconEntry>) -> Self {
        Self { entries }
    }

    /// The built-in Spanish legal lexicon
    pub fn spanish_default() -> Self {
        Self::new(spanish::entries())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = toml::from_str(content)?;
        let entries = file
            .entry
            .into_iter()
            .map(RawEntry::into_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(entries))
    }

    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_toml_str(&content)?;
        info!("Loaded {} lexicon entries from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Build the active lexicon for a project: the configured file or the
    /// built-in one, then `extra` and `disable` applied
    pub fn from_config(config: &LexiconConfig, root: &Path) -> Result<Self, LexiconError> {
        let mut lexicon = match &config.file {
            Some(file) => {
                let path = if file.is_absolute() {
                    file.clone()
                } else {
                    root.join(file)
                };
                Self::from_file(&path)?
            }
            None => Self::spanish_default(),
        };
        lexicon.apply_overrides(&config.extra, &config.disable)?;
        Ok(lexicon)
    }

    /// Append extra entries and drop disabled terms (case-insensitive)
    pub fn apply_overrides(
        &mut self,
        extra: &[LexiconEntryOverride],
        disable: &[String],
    ) -> Result<(), LexiconError> {
        for item in extra {
            let entry = RawEntry {
                term: item.term.clone(),
                category: item.category.clone(),
                pattern: item.pattern.clone(),
            }
            .into_entry()?;
            debug!("Adding lexicon term '{}' ({})", entry.term, entry.category);
            self.entries.push(entry);
        }

        if !disable.is_empty() {
            let disabled: Vec<String> = disable.iter().map(|d| d.trim().to_lowercase()).collect();
            self.entries
                .retain(|e| !disabled.contains(&e.term.to_lowercase()));
        }
        Ok(())
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn by_category(&self, category: ModalCategory) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn category_of(&self, term: &str) -> Option<ModalCategory> {
        self.entries
            .iter()
            .find(|e| e.term == term)
            .map(|e| e.category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
