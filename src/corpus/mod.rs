//! Decree corpus loading and preprocessing
//!
//! Raw `.txt` decrees are discovered in a data directory, decoded (UTF-8
//! with a Latin-1 fallback), cleaned, described with basic metadata and
//! written back out as processed texts.

mod clean;
mod metadata;
mod store;

pub use clean::{clean_text, repair_legal_terms};
pub use metadata::extract_metadata;
pub use store::{preprocess_all, CorpusStore, SUMMARY_FILENAME};

use crate::models::Document;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while reading or writing the corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Input directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Suffix of the metadata side files written next to processed texts
pub(crate) const METADATA_SUFFIX: &str = "_metadata.txt";

/// Stem suffix of processed texts
pub(crate) const PROCESSED_SUFFIX: &str = "_processed";

/// List the `.txt` documents directly inside `dir`, sorted by path.
///
/// Metadata side files are skipped.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::MissingDirectory(dir.to_path_buf()));
    }

    let walker = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .hidden(true)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("txt"))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.to_lowercase().ends_with(METADATA_SUFFIX))
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Read a text file, falling back to Latin-1 when it is not valid UTF-8
pub fn load_text(path: &Path) -> Result<String, CorpusError> {
    let bytes = std::fs::read(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => {
            info!("Loaded {}", path.display());
            Ok(text)
        }
        Err(e) => {
            warn!("Loaded {} with latin-1 encoding", path.display());
            Ok(decode_latin1(e.as_bytes()))
        }
    }
}

/// Latin-1 maps every byte to the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// File stem used as the document name
pub(crate) fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Document name for analysis: the file stem without the processed suffix,
/// so raw and processed inputs report the same names
fn corpus_name(path: &Path) -> String {
    let stem = document_name(path);
    match stem.strip_suffix(PROCESSED_SUFFIX) {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => stem,
    }
}

/// Load every document in `dir` for analysis.
///
/// Headings are repaired and texts cleaned again so raw directories can be
/// analyzed directly; both steps are idempotent on processed texts.
/// Unreadable files are logged and skipped.
pub fn load_corpus(dir: &Path) -> Result<Vec<Document>, CorpusError> {
    let files = discover(dir)?;
    let mut documents = Vec::with_capacity(files.len());

    for path in files {
        let raw = match load_text(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let text = clean_text(&repair_legal_terms(&raw));
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let metadata = extract_metadata(&text, &filename);
        documents.push(Document {
            name: corpus_name(&path),
            text,
            metadata,
        });
    }

    Ok(documents)
}
