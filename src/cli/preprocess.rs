//! Preprocess command - clean raw texts into the processed directory

use crate::config::load_project_config;
use crate::corpus::{discover, preprocess_all, SUMMARY_FILENAME};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .expect("valid template")
        .progress_chars("█▓▒░  ")
}

pub fn run(path: &Path) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;
    let paths = load_project_config(&root).paths.resolve(&root);

    let total = discover(&paths.raw)
        .with_context(|| "Run 'ambiguity init' and add .txt files to the raw directory")?
        .len();
    if total == 0 {
        println!(
            "{} No .txt files found in {}",
            style("!").yellow(),
            style(paths.raw.display()).cyan()
        );
        return Ok(());
    }

    let bar = ProgressBar::new(total as u64);
    bar.set_style(bar_style());

    let mut lines = Vec::with_capacity(total);
    let processed = preprocess_all(&paths, |file, metadata| {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        bar.set_message(name.clone());
        bar.inc(1);
        lines.push(match metadata {
            Some(m) => format!(
                "{} {}: {} words, {} articles, {}",
                style("✓").green(),
                name,
                m.word_count,
                m.article_count,
                m.document_type
            ),
            None => format!("{} {}: failed (see log)", style("✗").red(), name),
        });
    })?;
    bar.finish_and_clear();

    for line in &lines {
        println!("{line}");
    }

    println!(
        "\nProcessed {}/{} documents into {}",
        processed.len(),
        total,
        style(paths.processed.display()).cyan()
    );
    println!(
        "Summary written to {}",
        style(paths.processed.join(SUMMARY_FILENAME).display()).cyan()
    );
    Ok(())
}
