//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, DocumentProfile, ModalCategory};
use anyhow::Result;

/// Category colors (ANSI escape codes)
fn category_color(category: ModalCategory) -> &'static str {
    match category {
        ModalCategory::Deontic => "\x1b[31m",   // Red
        ModalCategory::Epistemic => "\x1b[34m", // Blue
        ModalCategory::Dynamic => "\x1b[32m",   // Green
        ModalCategory::Hedge => "\x1b[33m",     // Yellow
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const MAX_ROWS: usize = 15;

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}Modal Ambiguity Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Documents: {}  Words: {}  Modal expressions: {}  Window: ±{}\n\n",
        report.documents, report.total_words, report.total_matches, report.window
    ));

    // Category totals
    out.push_str(&format!("{BOLD}CATEGORIES{RESET}\n"));
    let parts: Vec<String> = report
        .frequencies
        .by_category
        .iter()
        .map(|(&c, n)| format!("{}{}{RESET}: {}", category_color(c), c, n))
        .collect();
    out.push_str(&format!("  {}\n\n", parts.join("  ")));

    // Terms
    if !report.frequencies.terms.is_empty() {
        out.push_str(&format!("{BOLD}TERMS{RESET}\n"));
        out.push_str(&format!(
            "{DIM}  TERM                          CATEGORY     COUNT   PER 1K{RESET}\n"
        ));
        for t in report.frequencies.terms.iter().take(MAX_ROWS) {
            out.push_str(&format!(
                "  {:<30}{}{:<13}{RESET}{:>5}   {:>6.2}\n",
                t.term,
                category_color(t.category),
                t.category.as_str(),
                t.total,
                t.per_thousand
            ));
        }
        if report.frequencies.terms.len() > MAX_ROWS {
            out.push_str(&format!(
                "{DIM}  ... and {} more{RESET}\n",
                report.frequencies.terms.len() - MAX_ROWS
            ));
        }
        out.push('\n');
    }

    // Collocations
    if !report.collocations.is_empty() {
        out.push_str(&format!("{BOLD}COLLOCATIONS{RESET} (by PMI)\n"));
        out.push_str(&format!(
            "{DIM}  TERM                WORD                JOINT     PMI    NPMI{RESET}\n"
        ));
        for c in report.collocations.iter().take(MAX_ROWS) {
            out.push_str(&format!(
                "  {:<20}{:<20}{:>5}  {:>6.2}  {:>6.2}\n",
                c.term, c.word, c.joint, c.pmi, c.npmi
            ));
        }
        out.push('\n');
    }

    // Documents
    out.push_str(&format!("{BOLD}DOCUMENTS{RESET}\n"));
    for profile in &report.profiles {
        out.push_str(&render_profile(profile));
    }

    Ok(out)
}

fn render_profile(p: &DocumentProfile) -> String {
    let mut out = String::new();
    let dominant = match p.dominant {
        Some(c) => format!("{}{}{RESET}", category_color(c), c),
        None => "-".to_string(),
    };
    out.push_str(&format!(
        "  {BOLD}{}{RESET} {DIM}[{}]{RESET}  words: {}  modal: {}  density: {:.1}/1k  dominant: {}\n",
        p.document, p.metadata.document_type, p.word_tokens, p.modal_count, p.density_per_thousand, dominant
    ));
    for note in &p.notes {
        out.push_str(&format!("    {DIM}-{RESET} {note}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_sections() {
        let out = render(&test_report()).unwrap();
        assert!(out.contains("Modal Ambiguity Analysis"));
        assert!(out.contains("TERMS"));
        assert!(out.contains("COLLOCATIONS"));
        assert!(out.contains("decreto_1"));
        assert!(out.contains("High modal density"));
    }

    #[test]
    fn test_text_render_without_matches() {
        let mut report = test_report();
        report.frequencies.terms.clear();
        report.collocations.clear();
        let out = render(&report).unwrap();
        assert!(!out.contains("COLLOCATIONS"));
        assert!(out.contains("DOCUMENTS"));
    }
}
