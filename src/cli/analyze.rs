//! Analyze command - run the full analysis and write reports

use crate::analysis::Analyzer;
use crate::config::load_project_config;
use crate::corpus::load_corpus;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

pub const REPORT_FILENAME: &str = "report.json";

/// Flags of the analyze command; unset values fall back to the project config
#[derive(Debug, Default)]
pub struct AnalyzeArgs {
    pub input: Option<PathBuf>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub window: Option<usize>,
    pub min_cooccurrence: Option<usize>,
    pub top: Option<usize>,
}

pub fn run(path: &Path, args: AnalyzeArgs) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;
    let config = load_project_config(&root);
    let paths = config.paths.resolve(&root);

    let format_name = args.format.unwrap_or_else(|| config.defaults.format.clone());
    let format = OutputFormat::from_str(&format_name)?;

    let mut analyzer = Analyzer::from_config(&config, &root).context("Invalid lexicon")?;
    let options = analyzer.options_mut();
    if let Some(window) = args.window {
        options.window = window;
    }
    if let Some(min) = args.min_cooccurrence {
        options.min_cooccurrence = min;
    }
    if let Some(top) = args.top {
        options.top_n = top;
    }

    let input = match args.input {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => root.join(dir),
        None => paths.processed.clone(),
    };
    let documents = load_corpus(&input).with_context(|| {
        format!(
            "Cannot read {}. Run 'ambiguity preprocess' first or pass --input",
            input.display()
        )
    })?;
    if documents.is_empty() {
        anyhow::bail!("No documents found in {}", input.display());
    }

    let report = analyzer.run(&documents);

    std::fs::create_dir_all(&paths.results)
        .with_context(|| format!("Failed to create {}", paths.results.display()))?;
    let json_path = paths.results.join(REPORT_FILENAME);
    std::fs::write(&json_path, reporters::report_with_format(&report, OutputFormat::Json)?)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    let tables = reporters::write_csv_tables(&report, &paths.results)?;
    info!(
        "Wrote {} and {} CSV tables to {}",
        REPORT_FILENAME,
        tables.len(),
        paths.results.display()
    );

    let rendered = reporters::report_with_format(&report, format)?;
    match args.output {
        Some(out) => {
            std::fs::write(&out, &rendered)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            eprintln!(
                "{} Report written to {} ({})",
                style("✓").green(),
                style(out.display()).cyan(),
                format
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
