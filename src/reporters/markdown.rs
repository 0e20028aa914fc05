//! Markdown reporter for GitHub-flavored Markdown output

use crate::models::{AnalysisReport, DocumentProfile, ModalCategory};
use anyhow::Result;
use chrono::Local;

/// Maximum rows per table
const MAX_ROWS: usize = 25;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');
    md.push_str(&render_categories(report));
    md.push('\n');
    md.push_str(&render_terms(report));
    md.push('\n');
    md.push_str(&render_collocations(report));
    md.push('\n');
    md.push_str(&render_profiles(report));
    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(report: &AnalysisReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"# Modal Ambiguity Report

**Documents: {}** | **Words: {}** | **Modal expressions: {}**

Generated: {}
"#,
        report.documents, report.total_words, report.total_matches, timestamp
    )
}

fn render_categories(report: &AnalysisReport) -> String {
    let mut md = String::from("## Categories\n\n| Category | Count |\n|----------|------:|\n");
    for (category, n) in &report.frequencies.by_category {
        md.push_str(&format!("| {} | {} |\n", category, n));
    }
    if !report.category_pairs.is_empty() {
        md.push_str("\n### Same-sentence co-occurrence\n\n| Pair | Sentences |\n|------|----------:|\n");
        for pair in &report.category_pairs {
            md.push_str(&format!(
                "| {} + {} | {} |\n",
                pair.first, pair.second, pair.sentences
            ));
        }
    }
    md
}

fn render_terms(report: &AnalysisReport) -> String {
    let mut md = String::from("## Terms\n\n");
    if report.frequencies.terms.is_empty() {
        md.push_str("_No modal expressions found._\n");
        return md;
    }
    md.push_str("| Term | Category | Count | Per 1,000 words |\n");
    md.push_str("|------|----------|------:|----------------:|\n");
    for t in report.frequencies.terms.iter().take(MAX_ROWS) {
        md.push_str(&format!(
            "| {} | {} | {} | {:.2} |\n",
            escape_md(&t.term),
            t.category,
            t.total,
            t.per_thousand
        ));
    }
    md
}

fn render_collocations(report: &AnalysisReport) -> String {
    let mut md = format!("## Collocations (window ±{})\n\n", report.window);
    if report.collocations.is_empty() {
        md.push_str("_No collocations above the co-occurrence threshold._\n");
        return md;
    }
    md.push_str("| Term | Word | Joint | PMI | NPMI |\n");
    md.push_str("|------|------|------:|----:|-----:|\n");
    for c in report.collocations.iter().take(MAX_ROWS) {
        md.push_str(&format!(
            "| {} | {} | {} | {:.3} | {:.3} |\n",
            escape_md(&c.term),
            escape_md(&c.word),
            c.joint,
            c.pmi,
            c.npmi
        ));
    }
    md
}

fn render_profiles(report: &AnalysisReport) -> String {
    let mut md = String::from("## Documents\n\n");
    for p in &report.profiles {
        md.push_str(&render_profile(p));
        md.push('\n');
    }
    md
}

fn render_profile(p: &DocumentProfile) -> String {
    let mut md = format!("### {}\n\n", escape_md(&p.document));

    let instrument = match (&p.metadata.number, &p.metadata.year) {
        (Some(n), Some(y)) => format!("{} {} de {}", p.metadata.document_type, n, y),
        _ => p.metadata.document_type.to_string(),
    };
    md.push_str(&format!(
        "- **Instrument:** {}\n- **Words:** {} ({} articles)\n- **Modal density:** {:.1} per 1,000 words\n",
        instrument, p.word_tokens, p.metadata.article_count, p.density_per_thousand
    ));
    if let Some(dominant) = p.dominant {
        md.push_str(&format!("- **Dominant category:** {}\n", dominant));
    }
    if let Some(ratio) = p.hedge_to_deontic {
        md.push_str(&format!("- **Hedges per deontic expression:** {:.2}\n", ratio));
    }
    let shares: Vec<String> = ModalCategory::ALL
        .iter()
        .map(|c| format!("{} {:.0}%", c, p.shares.get(c).copied().unwrap_or(0.0) * 100.0))
        .collect();
    md.push_str(&format!("- **Shares:** {}\n", shares.join(", ")));

    if !p.notes.is_empty() {
        md.push('\n');
        for note in &p.notes {
            md.push_str(&format!("> {}\n", note));
        }
    }

    if !p.softened_obligations.is_empty() {
        md.push_str("\n**Softened obligations**\n\n");
        for s in p.softened_obligations.iter().take(MAX_ROWS) {
            md.push_str(&format!(
                "- _{}_ ({} / {})\n",
                escape_md(&s.excerpt),
                s.deontic.join(", "),
                s.hedges.join(", ")
            ));
        }
    }
    md
}

fn render_footer() -> String {
    "\n---\n\n*Generated by ambiguity*\n".to_string()
}

fn escape_md(s: &str) -> String {
    s.replace('|', "\\|").replace('_', "\\_").replace('*', "\\*")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_sections() {
        let md = render(&test_report()).unwrap();
        assert!(md.starts_with("# Modal Ambiguity Report"));
        assert!(md.contains("## Terms"));
        assert!(md.contains("| deber | deontic | 3 | 30.00 |"));
        assert!(md.contains("| deontic + hedge | 1 |"));
        assert!(md.contains("### decreto\\_1"));
        assert!(md.contains("DECRETO 1194 de 2015"));
        assert!(md.contains("**Softened obligations**"));
    }

    #[test]
    fn test_markdown_empty_tables() {
        let mut report = test_report();
        report.frequencies.terms.clear();
        report.collocations.clear();
        let md = render(&report).unwrap();
        assert!(md.contains("_No modal expressions found._"));
        assert!(md.contains("_No collocations above the co-occurrence threshold._"));
    }

    #[test]
    fn test_escape_md() {
        assert_eq!(escape_md("a|b_c*d"), "a\\|b\\_c\\*d");
    }
}
