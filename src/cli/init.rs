//! Init command - set up a project directory

use crate::config::{load_project_config, CONFIG_FILENAME, EXAMPLE_CONFIG};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    println!("\n{} Initializing ambiguity project\n", style("§").bold());

    let config_path = root.join(CONFIG_FILENAME);
    if config_path.exists() {
        println!(
            "{} Keeping existing {}",
            style("✓").green(),
            style(CONFIG_FILENAME).cyan()
        );
    } else {
        std::fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to create {}", config_path.display()))?;
        println!(
            "{} Created {}",
            style("✓").green(),
            style(CONFIG_FILENAME).cyan()
        );
    }

    let paths = load_project_config(&root).paths.resolve(&root);
    for dir in [&paths.raw, &paths.processed, &paths.backup, &paths.results] {
        if dir.is_dir() {
            continue;
        }
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        println!("{} Created {}", style("✓").green(), style(dir.display()).cyan());
    }

    println!(
        "\nPlace decree texts (.txt) in {} and run {}.",
        style(paths.raw.display()).cyan(),
        style("ambiguity preprocess").bold()
    );
    Ok(())
}
