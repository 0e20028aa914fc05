//! Tag command - list modal expressions found in one file

use crate::analysis::Analyzer;
use crate::config::load_project_config;
use crate::corpus::{clean_text, extract_metadata, load_text, repair_legal_terms};
use crate::models::{Document, ModalCategory};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

pub fn run(root: &Path, file: &Path, json: bool) -> Result<()> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", root.display()))?;
    let config = load_project_config(&root);
    let analyzer = Analyzer::from_config(&config, &root).context("Invalid lexicon")?;

    let raw = load_text(file)?;
    let text = clean_text(&repair_legal_terms(&raw));
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let document = Document {
        name: filename.clone(),
        metadata: extract_metadata(&text, &filename),
        text,
    };
    let tagged = analyzer.prepare(&document);

    if json {
        println!("{}", serde_json::to_string_pretty(&tagged.matches)?);
        return Ok(());
    }

    if tagged.matches.is_empty() {
        println!("No modal expressions found in {}", file.display());
        return Ok(());
    }

    for m in &tagged.matches {
        let category = match m.category {
            ModalCategory::Deontic => style(m.category.as_str()).red(),
            ModalCategory::Epistemic => style(m.category.as_str()).blue(),
            ModalCategory::Dynamic => style(m.category.as_str()).green(),
            ModalCategory::Hedge => style(m.category.as_str()).yellow(),
        };
        println!(
            "{:>5}  {:<10} {:<28} {}",
            m.sentence + 1,
            category,
            m.term,
            style(&m.surface).dim()
        );
    }
    println!(
        "\n{} matches in {} words",
        tagged.matches.len(),
        tagged.word_tokens()
    );
    Ok(())
}
