//! Per-document interpretive profiles
//!
//! A profile summarises how a decree distributes its modal load across the
//! four categories and flags sentences where an obligation appears next to
//! a hedging expression.

use super::frequency::per_thousand;
use super::TaggedDocument;
use crate::models::{DocumentProfile, ModalCategory, SoftenedObligation, TagMatch, Token};
use crate::nlp::vocabulary_stats;
use std::collections::BTreeMap;

const EXCERPT_CHARS: usize = 160;

const HIGH_DENSITY: f64 = 20.0;
const LOW_DENSITY: f64 = 5.0;
const SOFTENED_RATIO: f64 = 0.5;
const RIGID_RATIO: f64 = 0.1;
const RIGID_MIN_DEONTIC: usize = 5;
const EPISTEMIC_SHARE: f64 = 0.25;

pub fn build(doc: &TaggedDocument) -> DocumentProfile {
    let word_tokens = doc.word_tokens();
    let modal_count = doc.matches.len();

    let mut by_category: BTreeMap<ModalCategory, usize> =
        ModalCategory::ALL.iter().map(|&c| (c, 0)).collect();
    for m in &doc.matches {
        *by_category.entry(m.category).or_insert(0) += 1;
    }

    let shares: BTreeMap<ModalCategory, f64> = by_category
        .iter()
        .map(|(&c, &n)| {
            let share = if modal_count == 0 {
                0.0
            } else {
                n as f64 / modal_count as f64
            };
            (c, share)
        })
        .collect();

    let dominant = dominant_category(&by_category);
    let deontic = by_category[&ModalCategory::Deontic];
    let hedges = by_category[&ModalCategory::Hedge];
    let hedge_to_deontic = (deontic > 0).then(|| hedges as f64 / deontic as f64);

    let mut profile = DocumentProfile {
        document: doc.document.name.clone(),
        metadata: doc.document.metadata.clone(),
        word_tokens,
        sentences: doc.tokens.last().map_or(0, |t| t.sentence + 1),
        modal_count,
        density_per_thousand: per_thousand(modal_count, word_tokens),
        by_category,
        shares,
        dominant,
        hedge_to_deontic,
        softened_obligations: softened_obligations(&doc.document.text, &doc.tokens, &doc.matches),
        vocabulary: vocabulary_stats(&doc.tokens),
        notes: Vec::new(),
    };
    profile.notes = notes(&profile);
    profile
}

/// Most frequent category; ties go to the earlier category
fn dominant_category(counts: &BTreeMap<ModalCategory, usize>) -> Option<ModalCategory> {
    let mut best: Option<(ModalCategory, usize)> = None;
    for (&category, &n) in counts {
        if n > 0 && best.map_or(true, |(_, b)| n > b) {
            best = Some((category, n));
        }
    }
    best.map(|(c, _)| c)
}

/// Sentences holding both a deontic and a hedging expression
fn softened_obligations(text: &str, tokens: &[Token], matches: &[TagMatch]) -> Vec<SoftenedObligation> {
    let mut by_sentence: BTreeMap<usize, (Vec<String>, Vec<String>)> = BTreeMap::new();
    for m in matches {
        let entry = by_sentence.entry(m.sentence).or_default();
        match m.category {
            ModalCategory::Deontic => entry.0.push(m.surface.clone()),
            ModalCategory::Hedge => entry.1.push(m.surface.clone()),
            _ => {}
        }
    }

    by_sentence
        .into_iter()
        .filter(|(_, (deontic, hedges))| !deontic.is_empty() && !hedges.is_empty())
        .map(|(sentence, (deontic, hedges))| SoftenedObligation {
            sentence,
            deontic,
            hedges,
            excerpt: sentence_excerpt(text, tokens, sentence),
        })
        .collect()
}

fn sentence_excerpt(text: &str, tokens: &[Token], sentence: usize) -> String {
    let first = tokens.partition_point(|t| t.sentence < sentence);
    let last = tokens.partition_point(|t| t.sentence <= sentence);
    if first >= last {
        return String::new();
    }
    let span = &text[tokens[first].start..tokens[last - 1].end];
    let flat = span.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&flat, EXCERPT_CHARS)
}

pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

fn notes(p: &DocumentProfile) -> Vec<String> {
    let mut notes = Vec::new();

    if p.modal_count == 0 {
        notes.push("No modal or hedging expressions found.".to_string());
        return notes;
    }

    if p.density_per_thousand >= HIGH_DENSITY {
        notes.push(format!(
            "High modal density ({:.1} per 1,000 words).",
            p.density_per_thousand
        ));
    } else if p.density_per_thousand < LOW_DENSITY {
        notes.push(format!(
            "Low modal density ({:.1} per 1,000 words).",
            p.density_per_thousand
        ));
    }

    if let Some(dominant) = p.dominant {
        let share = p.shares.get(&dominant).copied().unwrap_or(0.0);
        notes.push(format!(
            "{} expressions dominate ({:.0}% of modal matches).",
            capitalize(dominant.as_str()),
            share * 100.0
        ));
    }

    let deontic = p.by_category[&ModalCategory::Deontic];
    if let Some(ratio) = p.hedge_to_deontic {
        if ratio >= SOFTENED_RATIO {
            notes.push(format!(
                "Obligations are frequently softened ({ratio:.2} hedges per deontic expression)."
            ));
        } else if ratio < RIGID_RATIO && deontic >= RIGID_MIN_DEONTIC {
            notes.push("Obligations are stated with little mitigation.".to_string());
        }
    }

    if p.shares[&ModalCategory::Epistemic] >= EPISTEMIC_SHARE {
        notes.push("Notable epistemic qualification.".to_string());
    }

    if p.by_category[&ModalCategory::Dynamic] > deontic {
        notes.push("Capacity expressions outnumber obligations; a permissive reading may dominate.".to_string());
    }

    if !p.softened_obligations.is_empty() {
        notes.push(format!(
            "{} sentence(s) pair an obligation with a hedge.",
            p.softened_obligations.len()
        ));
    }

    notes
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::{doc, small_analyzer};

    #[test]
    fn test_profile_counts_and_shares() {
        let analyzer = small_analyzer(3, 1);
        let d = doc(
            "a",
            "El Ministerio deberá, en lo posible, publicar. La entidad deberá informar. Tal vez se publique.",
        );
        let tagged = analyzer.prepare(&d);
        let p = build(&tagged);

        assert_eq!(p.document, "a");
        assert_eq!(p.sentences, 3);
        assert_eq!(p.modal_count, 4);
        assert_eq!(p.by_category[&ModalCategory::Deontic], 2);
        assert_eq!(p.by_category[&ModalCategory::Dynamic], 0);
        assert!((p.shares[&ModalCategory::Deontic] - 0.5).abs() < 1e-12);
        assert_eq!(p.dominant, Some(ModalCategory::Deontic));
        assert_eq!(p.hedge_to_deontic, Some(0.5));
        assert!((p.density_per_thousand - 4000.0 / p.word_tokens as f64).abs() < 1e-9);
    }

    #[test]
    fn test_softened_obligation_detected() {
        let analyzer = small_analyzer(3, 1);
        let d = doc(
            "a",
            "El Ministerio deberá, en lo posible, publicar. La entidad deberá informar.",
        );
        let p = build(&analyzer.prepare(&d));
        assert_eq!(p.softened_obligations.len(), 1);
        let s = &p.softened_obligations[0];
        assert_eq!(s.sentence, 0);
        assert_eq!(s.deontic, vec!["deberá"]);
        assert_eq!(s.hedges, vec!["en lo posible"]);
        assert_eq!(s.excerpt, "El Ministerio deberá, en lo posible, publicar.");
        assert!(p.notes.iter().any(|n| n.contains("frequently softened")));
    }

    #[test]
    fn test_dominant_tie_prefers_category_order() {
        let analyzer = small_analyzer(3, 1);
        let d = doc("a", "Podrá publicar. Tal vez se publique.");
        let p = build(&analyzer.prepare(&d));
        assert_eq!(p.dominant, Some(ModalCategory::Epistemic));
        assert_eq!(p.hedge_to_deontic, None);
        assert!(p.notes.iter().any(|n| n.contains("permissive")));
    }

    #[test]
    fn test_empty_profile() {
        let analyzer = small_analyzer(3, 1);
        let d = doc("a", "Texto sin expresiones relevantes.");
        let p = build(&analyzer.prepare(&d));
        assert_eq!(p.modal_count, 0);
        assert_eq!(p.dominant, None);
        assert_eq!(p.density_per_thousand, 0.0);
        assert_eq!(p.notes, vec!["No modal or hedging expressions found."]);
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("corto", 10), "corto");
        assert_eq!(truncate_chars("artículo único", 8), "artículo...");
    }
}
