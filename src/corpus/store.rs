//! Writing processed texts, metadata side files, backups and the
//! processing summary

use super::{
    clean_text, discover, document_name, extract_metadata, load_text, repair_legal_terms,
    CorpusError, PROCESSED_SUFFIX,
};
use crate::config::PathsConfig;
use crate::models::DocumentMetadata;
use crate::reporters::csv_line;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub const SUMMARY_FILENAME: &str = "processing_summary.csv";

/// Output locations for preprocessing
#[derive(Debug, Clone)]
pub struct CorpusStore {
    processed: PathBuf,
    backup: PathBuf,
}

impl CorpusStore {
    /// Create the store, making sure both output directories exist
    pub fn new(processed: &Path, backup: &Path) -> Result<Self, CorpusError> {
        for dir in [processed, backup] {
            std::fs::create_dir_all(dir).map_err(|source| CorpusError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        Ok(Self {
            processed: processed.to_path_buf(),
            backup: backup.to_path_buf(),
        })
    }

    pub fn processed_dir(&self) -> &Path {
        &self.processed
    }

    /// Keep an untouched copy of the raw text
    pub fn backup(&self, filename: &str, raw: &str) -> Result<PathBuf, CorpusError> {
        let path = self.backup.join(filename);
        write_file(&path, raw)?;
        Ok(path)
    }

    /// Write `<stem>_processed.txt` and `<stem>_processed_metadata.txt`
    pub fn save_processed(
        &self,
        text: &str,
        metadata: &DocumentMetadata,
    ) -> Result<PathBuf, CorpusError> {
        let stem = document_name(Path::new(&metadata.filename));
        let processed = self.processed.join(format!("{stem}{PROCESSED_SUFFIX}.txt"));
        write_file(&processed, text)?;

        let metadata_path = self.processed.join(format!("{stem}{PROCESSED_SUFFIX}_metadata.txt"));
        write_file(&metadata_path, &render_metadata(metadata))?;

        info!("Processed text saved as {}", processed.display());
        Ok(processed)
    }

    /// One CSV row per processed document
    pub fn save_summary(&self, all: &[DocumentMetadata]) -> Result<PathBuf, CorpusError> {
        let mut out = csv_line(&[
            "filename",
            "word_count",
            "char_count",
            "paragraph_count",
            "article_count",
            "document_type",
            "number",
            "year",
        ]);
        for meta in all {
            out.push_str(&csv_line(&[
                &meta.filename,
                &meta.word_count.to_string(),
                &meta.char_count.to_string(),
                &meta.paragraph_count.to_string(),
                &meta.article_count.to_string(),
                &meta.document_type.to_string(),
                meta.number.as_deref().unwrap_or(""),
                meta.year.as_deref().unwrap_or(""),
            ]));
        }

        let path = self.processed.join(SUMMARY_FILENAME);
        write_file(&path, &out)?;
        info!("Processing summary saved to {}", path.display());
        Ok(path)
    }
}

/// `key: value` lines, with `None` for missing values
fn render_metadata(meta: &DocumentMetadata) -> String {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "None".to_string());
    format!(
        "filename: {}\nword_count: {}\nchar_count: {}\nparagraph_count: {}\narticle_count: {}\ndocument_type: {}\nnumber: {}\nyear: {}\n",
        meta.filename,
        meta.word_count,
        meta.char_count,
        meta.paragraph_count,
        meta.article_count,
        meta.document_type,
        opt(&meta.number),
        opt(&meta.year),
    )
}

fn write_file(path: &Path, content: &str) -> Result<(), CorpusError> {
    std::fs::write(path, content).map_err(|source| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Clean every raw document and write processed texts, backups and the
/// summary. Failing documents are logged and skipped.
///
/// `on_document` is called after each document, successful or not, so the
/// caller can drive a progress bar.
pub fn preprocess_all(
    paths: &PathsConfig,
    mut on_document: impl FnMut(&Path, Option<&DocumentMetadata>),
) -> Result<Vec<DocumentMetadata>, CorpusError> {
    let files = discover(&paths.raw)?;
    if files.is_empty() {
        warn!("No .txt files found in {}", paths.raw.display());
        return Ok(Vec::new());
    }

    let store = CorpusStore::new(&paths.processed, &paths.backup)?;
    let mut all = Vec::with_capacity(files.len());

    for path in &files {
        match preprocess_one(&store, path) {
            Ok(metadata) => {
                on_document(path, Some(&metadata));
                all.push(metadata);
            }
            Err(e) => {
                error!("Error processing {}: {}", path.display(), e);
                on_document(path, None);
            }
        }
    }

    store.save_summary(&all)?;
    Ok(all)
}

fn preprocess_one(store: &CorpusStore, path: &Path) -> Result<DocumentMetadata, CorpusError> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let raw = load_text(path)?;
    store.backup(&filename, &raw)?;

    let cleaned = clean_text(&repair_legal_terms(&raw));
    let metadata = extract_metadata(&cleaned, &filename);
    store.save_processed(&cleaned, &metadata)?;
    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentType;

    fn paths_in(root: &Path) -> PathsConfig {
        PathsConfig::default().resolve(root)
    }

    #[test]
    fn test_preprocess_all_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::create_dir_all(&paths.raw).unwrap();
        std::fs::write(
            paths.raw.join("decreto_1194_1989.txt"),
            "DECRETO NUMERO 1194 DE 1989\n\n\n\nARTICULO 1. El Gobierno   deberá cumplir.",
        )
        .unwrap();

        let mut seen = 0;
        let all = preprocess_all(&paths, |_, _| seen += 1).unwrap();
        assert_eq!(seen, 1);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].document_type, DocumentType::Decreto);
        assert_eq!(all[0].article_count, 1);

        let processed =
            std::fs::read_to_string(paths.processed.join("decreto_1194_1989_processed.txt"))
                .unwrap();
        assert_eq!(
            processed,
            "DECRETO NÚMERO 1194 DE 1989\n\nARTÍCULO 1. El Gobierno deberá cumplir."
        );

        let meta = std::fs::read_to_string(
            paths
                .processed
                .join("decreto_1194_1989_processed_metadata.txt"),
        )
        .unwrap();
        assert!(meta.contains("document_type: DECRETO"));
        assert!(meta.contains("number: 1194"));

        assert!(paths.backup.join("decreto_1194_1989.txt").exists());

        let summary = std::fs::read_to_string(paths.processed.join(SUMMARY_FILENAME)).unwrap();
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("filename,word_count"));
        assert!(lines[1].starts_with("decreto_1194_1989.txt,"));
    }

    #[test]
    fn test_metadata_file_writes_none() {
        let meta = DocumentMetadata {
            filename: "nota.txt".into(),
            ..Default::default()
        };
        let rendered = render_metadata(&meta);
        assert!(rendered.contains("document_type: UNKNOWN"));
        assert!(rendered.contains("number: None"));
        assert!(rendered.contains("year: None"));
    }

    #[test]
    fn test_preprocess_empty_raw_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::create_dir_all(&paths.raw).unwrap();
        let all = preprocess_all(&paths, |_, _| {}).unwrap();
        assert!(all.is_empty());
        assert!(!paths.processed.exists());
    }
}
