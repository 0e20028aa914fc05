//! JSON reporter
//!
//! Outputs the full AnalysisReport as pretty-printed JSON, suitable for
//! piping to jq or loading into a notebook.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["documents"], 1);
        assert_eq!(parsed["frequencies"]["by_category"]["deontic"], 3);
        assert_eq!(parsed["profiles"][0]["dominant"], "deontic");
        assert_eq!(parsed["profiles"][0]["metadata"]["document_type"], "DECRETO");
    }

    #[test]
    fn test_json_round_trips() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let back: AnalysisReport = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(back.collocations, report.collocations);
        assert_eq!(back.profiles[0].softened_obligations.len(), 1);
    }

    #[test]
    fn test_json_empty_collocations() {
        let mut report = test_report();
        report.collocations.clear();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["collocations"].as_array().expect("collocations array").len(), 0);
    }
}
