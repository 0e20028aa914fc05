//! CLI command definitions and handlers

mod analyze;
mod init;
mod lexicon;
mod preprocess;
mod tag;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a strictly positive count
fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("value must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// Ambiguity - modal and hedging analysis of Spanish legal decrees
#[derive(Parser, Debug)]
#[command(name = "ambiguity")]
#[command(
    version,
    about = "Measure deontic, epistemic, dynamic and hedging language in Spanish decrees",
    long_about = "Ambiguity cleans a corpus of decree texts, tags modal and hedging \
expressions with a configurable Spanish lexicon, and reports frequencies, \
PMI-scored collocations and a per-document interpretive profile.",
    after_help = "\
Examples:
  ambiguity init                           Write ambiguity.toml and data directories
  ambiguity preprocess                     Clean data/raw into data/processed
  ambiguity analyze --format markdown      Markdown report on stdout
  ambiguity analyze -f json -o report.json JSON report to a file
  ambiguity tag decreto.txt                List modal expressions in one file
  ambiguity lexicon --category hedge       Show hedging terms"
)]
pub struct Cli {
    /// Project root (default: current directory)
    #[arg(long, short = 'p', global = true, default_value = ".", env = "AMBIGUITY_PATH")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an ambiguity.toml with example settings and create data directories
    Init,

    /// Clean raw decree texts into the processed directory
    Preprocess,

    /// Analyze the processed corpus
    #[command(after_help = "\
Examples:
  ambiguity analyze                          Text report of data/processed
  ambiguity analyze --input texts/           Analyze another directory
  ambiguity analyze --window 3 --top 50      Narrower window, longer tables
  ambiguity analyze -f csv -o terms.csv      Term table as CSV")]
    Analyze {
        /// Directory of texts to analyze (default: processed directory)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Output format: text, json, markdown (or md), csv
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md", "csv"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Tokens on each side of a modal term counted as co-occurring
        #[arg(long, value_parser = parse_positive)]
        window: Option<usize>,

        /// Minimum joint count for a collocation to be reported
        #[arg(long, value_parser = parse_positive)]
        min_cooccurrence: Option<usize>,

        /// Rows kept in top-N tables
        #[arg(long, value_parser = parse_positive)]
        top: Option<usize>,
    },

    /// Tag modal expressions in a single file
    Tag {
        /// Text file to tag
        file: PathBuf,

        /// Output matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active lexicon
    Lexicon {
        /// Only show one category (deontic, epistemic, dynamic, hedge)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::run(&cli.path),

        Commands::Preprocess => preprocess::run(&cli.path),

        Commands::Analyze {
            input,
            format,
            output,
            window,
            min_cooccurrence,
            top,
        } => analyze::run(
            &cli.path,
            analyze::AnalyzeArgs {
                input,
                format,
                output,
                window,
                min_cooccurrence,
                top,
            },
        ),

        Commands::Tag { file, json } => tag::run(&cli.path, &file, json),

        Commands::Lexicon { category, json } => lexicon::run(&cli.path, category.as_deref(), json),

        Commands::Version => {
            println!("ambiguity {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("5"), Ok(5));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("abc").is_err());
    }

    #[test]
    fn test_cli_parses_analyze_flags() {
        let cli = Cli::try_parse_from([
            "ambiguity", "--path", "proj", "analyze", "-f", "json", "--window", "3", "--top", "10",
        ])
        .unwrap();
        assert_eq!(cli.path, PathBuf::from("proj"));
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Commands::Analyze { format, window, top, min_cooccurrence, .. } => {
                assert_eq!(format.as_deref(), Some("json"));
                assert_eq!(window, Some(3));
                assert_eq!(top, Some(10));
                assert_eq!(min_cooccurrence, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_zero_window() {
        assert!(Cli::try_parse_from(["ambiguity", "analyze", "--window", "0"]).is_err());
    }
}
