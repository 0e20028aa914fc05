//! Configuration module for Ambiguity
//!
//! This module handles:
//! - Project-level configuration (ambiguity.toml)
//! - Data and results directory layout
//! - Analysis parameters (window, thresholds)
//! - Lexicon overrides

mod project_config;

pub use project_config::{
    load_project_config, AnalysisConfig, CliDefaults, LexiconConfig, LexiconEntryOverride,
    PathsConfig, ProjectConfig, CONFIG_FILENAME, EXAMPLE_CONFIG,
};
