//! CSV tables
//!
//! `render` produces the term frequency table; `write_csv_tables` writes
//! every table of a report into a directory. Quoting follows RFC 4180.

use crate::models::{AnalysisReport, ModalCategory};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// One CSV record, newline-terminated
pub(crate) fn csv_line(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn float(v: f64) -> String {
    format!("{v:.4}")
}

/// Render the term frequency table
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(frequencies(report))
}

fn frequencies(report: &AnalysisReport) -> String {
    let mut out = csv_line(&["term", "category", "total", "per_thousand", "document", "count"]);
    for t in &report.frequencies.terms {
        for (doc, count) in &t.by_document {
            out.push_str(&csv_line(&[
                &t.term,
                t.category.as_str(),
                &t.total.to_string(),
                &float(t.per_thousand),
                doc,
                &count.to_string(),
            ]));
        }
    }
    out
}

fn collocations(report: &AnalysisReport) -> String {
    let mut out = csv_line(&[
        "term", "category", "word", "joint", "term_count", "word_count", "pmi", "npmi",
    ]);
    for c in &report.collocations {
        out.push_str(&csv_line(&[
            &c.term,
            c.category.as_str(),
            &c.word,
            &c.joint.to_string(),
            &c.term_count.to_string(),
            &c.word_count.to_string(),
            &float(c.pmi),
            &float(c.npmi),
        ]));
    }
    out
}

fn profiles(report: &AnalysisReport) -> String {
    let mut header = vec![
        "document",
        "document_type",
        "word_tokens",
        "sentences",
        "modal_count",
        "density_per_thousand",
    ];
    let count_cols: Vec<String> = ModalCategory::ALL.iter().map(|c| format!("{c}_count")).collect();
    header.extend(count_cols.iter().map(String::as_str));
    header.extend([
        "dominant",
        "hedge_to_deontic",
        "softened_obligations",
        "vocabulary_reduction",
    ]);

    let mut out = csv_line(&header);
    for p in &report.profiles {
        let mut row = vec![
            p.document.clone(),
            p.metadata.document_type.to_string(),
            p.word_tokens.to_string(),
            p.sentences.to_string(),
            p.modal_count.to_string(),
            float(p.density_per_thousand),
        ];
        row.extend(
            ModalCategory::ALL
                .iter()
                .map(|c| p.by_category.get(c).copied().unwrap_or(0).to_string()),
        );
        row.push(p.dominant.map(|c| c.to_string()).unwrap_or_default());
        row.push(p.hedge_to_deontic.map(float).unwrap_or_default());
        row.push(p.softened_obligations.len().to_string());
        row.push(format!("{:.2}", p.vocabulary.reduction_percentage));

        let fields: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&csv_line(&fields));
    }
    out
}

fn category_pairs(report: &AnalysisReport) -> String {
    let mut out = csv_line(&["first", "second", "sentences"]);
    for pair in &report.category_pairs {
        out.push_str(&csv_line(&[
            pair.first.as_str(),
            pair.second.as_str(),
            &pair.sentences.to_string(),
        ]));
    }
    out
}

fn content_words(report: &AnalysisReport) -> String {
    let mut out = csv_line(&["word", "count"]);
    for w in &report.frequencies.content_words {
        out.push_str(&csv_line(&[&w.word, &w.count.to_string()]));
    }
    out
}

/// Write all report tables into `dir`, returning the written paths
pub fn write_csv_tables(report: &AnalysisReport, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let tables = [
        ("frequencies.csv", frequencies(report)),
        ("collocations.csv", collocations(report)),
        ("profiles.csv", profiles(report)),
        ("category_pairs.csv", category_pairs(report)),
        ("content_words.csv", content_words(report)),
    ];

    let mut written = Vec::with_capacity(tables.len());
    for (name, body) in tables {
        let path = dir.join(name);
        std::fs::write(&path, body)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_csv_line_quoting() {
        assert_eq!(csv_line(&["a", "b c", "1"]), "a,b c,1\n");
        assert_eq!(csv_line(&["x,y", "say \"hi\""]), "\"x,y\",\"say \"\"hi\"\"\"\n");
        assert_eq!(csv_line(&["two\nlines"]), "\"two\nlines\"\n");
    }

    #[test]
    fn test_frequencies_table() {
        let out = render(&test_report()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "term,category,total,per_thousand,document,count");
        assert_eq!(lines[1], "deber,deontic,3,30.0000,decreto_1,3");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_profiles_table_columns() {
        let out = profiles(&test_report());
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("document,document_type,word_tokens"));
        assert!(lines[0].contains("deontic_count,epistemic_count,dynamic_count,hedge_count"));
        assert_eq!(
            lines[1],
            "decreto_1,DECRETO,100,6,5,50.0000,3,0,1,1,deontic,0.3333,1,0.00"
        );
    }

    #[test]
    fn test_write_csv_tables() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_csv_tables(&test_report(), dir.path()).unwrap();
        assert_eq!(written.len(), 5);
        for path in &written {
            assert!(path.exists());
        }
        let pairs = std::fs::read_to_string(dir.path().join("category_pairs.csv")).unwrap();
        assert_eq!(pairs, "first,second,sentences\ndeontic,hedge,1\n");
    }
}
