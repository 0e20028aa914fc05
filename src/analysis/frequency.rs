//! Term and content-word frequency tables

use super::TaggedDocument;
use crate::models::{FrequencyTable, ModalCategory, TermFrequency, WordCount};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Occurrences per 1,000 word tokens
pub(crate) fn per_thousand(count: usize, words: usize) -> f64 {
    if words == 0 {
        0.0
    } else {
        count as f64 * 1000.0 / words as f64
    }
}

/// Count lexicon terms per document and overall, plus the `top_n` most
/// frequent content words
pub fn count(tagged: &[TaggedDocument], top_n: usize) -> FrequencyTable {
    let total_words: usize = tagged.iter().map(|t| t.word_tokens()).sum();

    let mut terms: FxHashMap<(&str, ModalCategory), TermFrequency> = FxHashMap::default();
    let mut by_category: BTreeMap<ModalCategory, usize> =
        ModalCategory::ALL.iter().map(|&c| (c, 0)).collect();

    for doc in tagged {
        for m in &doc.matches {
            let row = terms
                .entry((m.term.as_str(), m.category))
                .or_insert_with(|| TermFrequency {
                    term: m.term.clone(),
                    category: m.category,
                    ..Default::default()
                });
            row.total += 1;
            *row.by_document.entry(doc.document.name.clone()).or_insert(0) += 1;
            *by_category.entry(m.category).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<TermFrequency> = terms
        .into_values()
        .map(|mut row| {
            row.per_thousand = per_thousand(row.total, total_words);
            row
        })
        .collect();
    terms.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.term.cmp(&b.term))
            .then_with(|| a.category.cmp(&b.category))
    });

    let mut words: FxHashMap<&str, usize> = FxHashMap::default();
    for doc in tagged {
        for token in doc.content_words() {
            *words.entry(token.norm.as_str()).or_insert(0) += 1;
        }
    }
    let mut content_words: Vec<WordCount> = words
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();
    content_words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    content_words.truncate(top_n);

    FrequencyTable {
        terms,
        by_category,
        content_words,
        total_words,
    }
}
