//! Project-level configuration support
//!
//! Loads per-project configuration from `ambiguity.toml` in the project root.
//!
//! # Configuration Format
//!
//! ```toml
//! # ambiguity.toml
//!
//! [paths]
//! raw = "data/raw"
//! processed = "data/processed"
//! backup = "data/backup"
//! results = "results"
//!
//! [analysis]
//! window = 5
//! min_cooccurrence = 2
//! top_n = 20
//! stopwords_language = "es"
//! extra_stopwords = ["artículo", "parágrafo"]
//!
//! [lexicon]
//! disable = ["poder"]
//! extra = [{ term = "se exceptúa", category = "deontic" }]
//!
//! [defaults]
//! format = "text"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = "ambiguity.toml";

/// Top-level project configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub paths: PathsConfig,
    pub analysis: AnalysisConfig,
    pub lexicon: LexiconConfig,
    pub defaults: CliDefaults,
}

/// Directory layout, relative to the project root unless absolute
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub raw: PathBuf,
    pub processed: PathBuf,
    pub backup: PathBuf,
    pub results: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw: PathBuf::from("data/raw"),
            processed: PathBuf::from("data/processed"),
            backup: PathBuf::from("data/backup"),
            results: PathBuf::from("results"),
        }
    }
}

impl PathsConfig {
    /// Resolve every directory against the project root
    pub fn resolve(&self, root: &Path) -> PathsConfig {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        };
        PathsConfig {
            raw: join(&self.raw),
            processed: join(&self.processed),
            backup: join(&self.backup),
            results: join(&self.results),
        }
    }
}

/// Parameters for tokenization, counting and co-occurrence
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Tokens on each side of a modal term that count as co-occurring
    pub window: usize,
    /// Collocations seen fewer times than this are dropped
    pub min_cooccurrence: usize,
    /// Rows kept in top-N tables
    pub top_n: usize,
    pub stopwords_language: String,
    pub extra_stopwords: Vec<String>,
    /// Strip Spanish accents from normalised token forms
    pub fold_accents: bool,
    /// Content words shorter than this (in chars) are ignored
    pub min_token_len: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: 5,
            min_cooccurrence: 2,
            top_n: 20,
            stopwords_language: "es".to_string(),
            extra_stopwords: Vec::new(),
            fold_accents: true,
            min_token_len: 2,
        }
    }
}

/// An extra lexicon entry declared in the project config
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LexiconEntryOverride {
    pub term: String,
    pub category: String,
    #[serde(default)]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Replaces the built-in lexicon when set
    pub file: Option<PathBuf>,
    pub extra: Vec<LexiconEntryOverride>,
    pub disable: Vec<String>,
}

/// CLI defaults that flags override
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliDefaults {
    pub format: String,
}

impl Default for CliDefaults {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

/// Load project configuration from the project root.
///
/// Falls back to defaults when the file is missing or malformed.
pub fn load_project_config(root: &Path) -> ProjectConfig {
    let toml_path = root.join(CONFIG_FILENAME);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Template written by `ambiguity init`
pub const EXAMPLE_CONFIG: &str = r#"# Ambiguity project configuration

[paths]
# Raw decree texts (.txt, UTF-8 or Latin-1)
raw = "data/raw"
# Cleaned texts and per-document metadata
processed = "data/processed"
# Verbatim copies of the raw texts
backup = "data/backup"
# Reports and CSV tables
results = "results"

[analysis]
# Tokens on each side of a modal term counted as co-occurring
window = 5
# Drop collocations seen fewer times than this
min_cooccurrence = 2
# Rows kept in top-N tables
top_n = 20
stopwords_language = "es"
# extra_stopwords = ["artículo", "parágrafo", "decreto"]
fold_accents = true
min_token_len = 2

[lexicon]
# Replace the built-in Spanish lexicon with your own file
# file = "lexicon.toml"
# Remove built-in terms
# disable = ["poder"]
# Add terms (pattern defaults to the literal term)
# extra = [{ term = "se exceptúa", category = "deontic" }]

[defaults]
# Output format for `analyze` (text, json, markdown, csv)
format = "text"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProjectConfig::default();
        assert_eq!(config.analysis.window, 5);
        assert_eq!(config.analysis.min_cooccurrence, 2);
        assert_eq!(config.analysis.stopwords_language, "es");
        assert_eq!(config.paths.raw, PathBuf::from("data/raw"));
        assert_eq!(config.defaults.format, "text");
        assert!(config.lexicon.file.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ProjectConfig = toml::from_str(
            r#"
[analysis]
window = 3

[lexicon]
disable = ["poder"]
extra = [{ term = "se exceptúa", category = "deontic" }]
"#,
        )
        .unwrap();
        assert_eq!(config.analysis.window, 3);
        assert_eq!(config.analysis.top_n, 20);
        assert_eq!(config.paths.results, PathBuf::from("results"));
        assert_eq!(config.lexicon.disable, vec!["poder".to_string()]);
        assert_eq!(config.lexicon.extra[0].term, "se exceptúa");
        assert!(config.lexicon.extra[0].pattern.is_none());
    }

    #[test]
    fn test_example_config_parses() {
        let config: ProjectConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.paths.processed, PathBuf::from("data/processed"));
        assert!(config.analysis.fold_accents);
    }

    #[test]
    fn test_resolve_paths() {
        let paths = PathsConfig {
            results: PathBuf::from("/tmp/out"),
            ..Default::default()
        };
        let resolved = paths.resolve(Path::new("/project"));
        assert_eq!(resolved.raw, PathBuf::from("/project/data/raw"));
        assert_eq!(resolved.results, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[analysis\nwindow = ").unwrap();
        let config = load_project_config(dir.path());
        assert_eq!(config.analysis.window, 5);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_project_config(dir.path());
        assert_eq!(config.analysis.top_n, 20);
    }
}
