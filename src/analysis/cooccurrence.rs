//! Windowed co-occurrence and PMI scoring
//!
//! For every tagged expression the content words within `window` tokens on
//! either side, inside the same sentence, are counted as co-occurring with
//! the expression's term. A word is counted at most once per expression
//! occurrence.
//!
//! With `N` the number of content-word tokens plus tagged expressions in
//! the corpus:
//!
//! ```text
//! PMI(t, w)  = log2( joint * N / (count(t) * count(w)) )
//! NPMI(t, w) = PMI(t, w) / -log2( joint / N )
//! ```

use super::TaggedDocument;
use crate::models::{CategoryPair, Collocation, ModalCategory};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

/// Score term/content-word pairs seen at least `min_cooccurrence` times
pub fn collocations(
    tagged: &[TaggedDocument],
    window: usize,
    min_cooccurrence: usize,
) -> Vec<Collocation> {
    let mut term_counts: FxHashMap<(&str, ModalCategory), usize> = FxHashMap::default();
    let mut word_counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut joint: FxHashMap<(&str, ModalCategory, &str), usize> = FxHashMap::default();
    let mut total = 0usize;

    for doc in tagged {
        for token in doc.content_words() {
            *word_counts.entry(token.norm.as_str()).or_insert(0) += 1;
            total += 1;
        }

        for m in &doc.matches {
            *term_counts.entry((m.term.as_str(), m.category)).or_insert(0) += 1;
            total += 1;

            let before = m.token_start.saturating_sub(window)..m.token_start;
            let after = m.token_end..m.token_end.saturating_add(window).min(doc.tokens.len());

            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for i in before.chain(after) {
                let token = &doc.tokens[i];
                if token.sentence != m.sentence || !doc.content[i] {
                    continue;
                }
                if seen.insert(token.norm.as_str()) {
                    *joint
                        .entry((m.term.as_str(), m.category, token.norm.as_str()))
                        .or_insert(0) += 1;
                }
            }
        }
    }

    let n = total as f64;
    let mut rows: Vec<Collocation> = joint
        .into_iter()
        .filter(|&(_, count)| count >= min_cooccurrence)
        .filter_map(|((term, category, word), count)| {
            let term_count = *term_counts.get(&(term, category))?;
            let word_count = *word_counts.get(word)?;
            let (pmi, npmi) = pmi(count, term_count, word_count, n);
            Some(Collocation {
                term: term.to_string(),
                category,
                word: word.to_string(),
                joint: count,
                term_count,
                word_count,
                pmi,
                npmi,
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.pmi
            .total_cmp(&a.pmi)
            .then_with(|| b.joint.cmp(&a.joint))
            .then_with(|| a.term.cmp(&b.term))
            .then_with(|| a.category.cmp(&b.category))
            .then_with(|| a.word.cmp(&b.word))
    });
    rows
}

/// PMI and normalised PMI from raw counts
pub(crate) fn pmi(joint: usize, term_count: usize, word_count: usize, n: f64) -> (f64, f64) {
    let joint = joint as f64;
    let pmi = (joint * n / (term_count as f64 * word_count as f64)).log2();
    let h = -(joint / n).log2();
    let npmi = if h > 0.0 { pmi / h } else { 1.0 };
    (pmi, npmi)
}

/// Count, per unordered category pair, the sentences where both appear.
///
/// A category paired with itself counts sentences holding two or more of
/// its expressions.
pub fn category_pairs(tagged: &[TaggedDocument]) -> Vec<CategoryPair> {
    let mut counts: BTreeMap<(ModalCategory, ModalCategory), usize> = BTreeMap::new();

    for doc in tagged {
        let mut by_sentence: BTreeMap<usize, BTreeMap<ModalCategory, usize>> = BTreeMap::new();
        for m in &doc.matches {
            *by_sentence
                .entry(m.sentence)
                .or_default()
                .entry(m.category)
                .or_insert(0) += 1;
        }

        for cats in by_sentence.values() {
            let present: Vec<(ModalCategory, usize)> =
                cats.iter().map(|(&c, &n)| (c, n)).collect();
            for (i, &(a, count_a)) in present.iter().enumerate() {
                if count_a >= 2 {
                    *counts.entry((a, a)).or_insert(0) += 1;
                }
                for &(b, _) in &present[i + 1..] {
                    *counts.entry((a, b)).or_insert(0) += 1;
                }
            }
        }
    }

    counts
        .into_iter()
        .map(|((first, second), sentences)| CategoryPair {
            first,
            second,
            sentences,
        })
        .collect()
}
