//! Lexicon command - print the active lexicon

use crate::config::load_project_config;
use crate::lexicon::Lexicon;
use crate::models::ModalCategory;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use std::str::FromStr;

pub fn run(root: &Path, category: Option<&str>, json: bool) -> Result<()> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", root.display()))?;
    let config = load_project_config(&root);
    let lexicon = Lexicon::from_config(&config.lexicon, &root).context("Invalid lexicon")?;

    let categories: Vec<ModalCategory> = match category {
        Some(c) => vec![ModalCategory::from_str(c).map_err(anyhow::Error::msg)?],
        None => ModalCategory::ALL.to_vec(),
    };

    if json {
        let entries: Vec<_> = lexicon
            .entries()
            .iter()
            .filter(|e| categories.contains(&e.category))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for c in categories {
        let entries: Vec<_> = lexicon.by_category(c).collect();
        println!("{} ({})", style(c.as_str().to_uppercase()).bold(), entries.len());
        for e in entries {
            println!("  {:<28} {}", e.term, style(&e.pattern).dim());
        }
        println!();
    }
    Ok(())
}
