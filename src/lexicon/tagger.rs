//! Regex tagging of modal and hedging expressions
//!
//! Every lexicon entry is compiled once. Tagging collects the matches of
//! all entries and keeps a leftmost-longest, non-overlapping selection, so
//! `en la medida de lo posible` wins over any shorter expression inside it.

use super::{Lexicon, LexiconError};
use crate::models::{ModalCategory, TagMatch, Token};
use regex::{Regex, RegexBuilder};

struct CompiledEntry {
    term: String,
    category: ModalCategory,
    regex: Regex,
}

pub struct Tagger {
    entries: Vec<CompiledEntry>,
}

impl Tagger {
    pub fn new(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        let entries = lexicon
            .entries()
            .iter()
            .map(|entry| {
                let regex = RegexBuilder::new(&format!(r"\b(?:{})\b", entry.pattern))
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| LexiconError::Pattern {
                        term: entry.term.clone(),
                        source,
                    })?;
                Ok(CompiledEntry {
                    term: entry.term.clone(),
                    category: entry.category,
                    regex,
                })
            })
            .collect::<Result<Vec<_>, LexiconError>>()?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tag `text`. `tokens` must come from tokenizing the same text; they are
    /// used to attach token spans and sentence indices.
    ///
    /// Matches are sorted by start offset and never overlap. On equal start
    /// the longer match wins; on equal span the earlier lexicon entry wins.
    pub fn tag(&self, text: &str, tokens: &[Token]) -> Vec<TagMatch> {
        let mut candidates: Vec<(usize, usize, usize)> = Vec::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            for m in entry.regex.find_iter(text) {
                if m.start() < m.end() {
                    candidates.push((m.start(), m.end(), idx));
                }
            }
        }

        candidates.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| (b.1 - b.0).cmp(&(a.1 - a.0)))
                .then_with(|| a.2.cmp(&b.2))
        });

        let mut matches = Vec::new();
        let mut last_end = 0usize;
        for (start, end, idx) in candidates {
            if start < last_end {
                continue;
            }
            last_end = end;

            let entry = &self.entries[idx];
            let token_start = tokens.partition_point(|t| t.end <= start);
            let token_end = tokens.partition_point(|t| t.start < end);
            let sentence = tokens.get(token_start).map_or(0, |t| t.sentence);

            matches.push(TagMatch {
                term: entry.term.clone(),
                category: entry.category,
                surface: text[start..end].to_string(),
                start,
                end,
                token_start,
                token_end: token_end.max(token_start),
                sentence,
            });
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconEntry;
    use crate::nlp::{tokenize, TokenizerOptions};

    fn tag_with(lexicon: &Lexicon, text: &str) -> Vec<TagMatch> {
        let tokens = tokenize(text, &TokenizerOptions::default());
        Tagger::new(lexicon).unwrap().tag(text, &tokens)
    }

    #[test]
    fn test_default_lexicon_tags_inflections() {
        let lexicon = Lexicon::spanish_default();
        let text = "Las entidades deberán reportar. El Ministerio podrá, en lo posible, procurar acuerdos.";
        let matches = tag_with(&lexicon, text);
        let terms: Vec<_> = matches.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(terms, vec!["deber", "poder", "en lo posible", "procurar"]);
        assert_eq!(matches[0].surface, "deberán");
        assert_eq!(matches[0].category, ModalCategory::Deontic);
        assert_eq!(matches[0].sentence, 0);
        assert_eq!(matches[1].sentence, 1);
    }

    #[test]
    fn test_case_insensitive_and_word_bounded() {
        let lexicon = Lexicon::new(vec![LexiconEntry::new("deber", ModalCategory::Deontic, "deb(?:e|en)")]);
        let matches = tag_with(&lexicon, "DEBE cumplir; el débil no; deben");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].surface, "DEBE");
        assert_eq!(matches[1].surface, "deben");
    }

    #[test]
    fn test_longest_match_wins() {
        let lexicon = Lexicon::new(vec![
            LexiconEntry::literal("posible", ModalCategory::Epistemic),
            LexiconEntry::literal("lo posible", ModalCategory::Hedge),
            LexiconEntry::literal("en la medida de lo posible", ModalCategory::Hedge),
        ]);
        let matches = tag_with(&lexicon, "se hará en la medida de lo posible y es posible");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].term, "en la medida de lo posible");
        assert_eq!(matches[1].term, "posible");
    }

    #[test]
    fn test_matches_sorted_and_non_overlapping() {
        let lexicon = Lexicon::spanish_default();
        let text = "Cuando sea necesario, las autoridades tendrán que y deberán, de manera progresiva, \
                    procurar lo que sea posible. Al parecer, es posible.";
        let matches = tag_with(&lexicon, text);
        assert!(!matches.is_empty());
        for pair in matches.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert_eq!(matches[0].term, "cuando sea necesario");
    }

    #[test]
    fn test_equal_span_prefers_earlier_entry() {
        let lexicon = Lexicon::new(vec![
            LexiconEntry::literal("podrá", ModalCategory::Dynamic),
            LexiconEntry::literal("podrá", ModalCategory::Deontic),
        ]);
        let matches = tag_with(&lexicon, "podrá");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, ModalCategory::Dynamic);
    }

    #[test]
    fn test_token_spans() {
        let lexicon = Lexicon::spanish_default();
        let text = "Se procurará, en la medida de lo posible, cumplir.";
        let tokens = tokenize(text, &TokenizerOptions::default());
        let matches = Tagger::new(&lexicon).unwrap().tag(text, &tokens);
        let hedge = matches
            .iter()
            .find(|m| m.term == "en la medida de lo posible")
            .unwrap();
        let covered: Vec<_> = tokens[hedge.token_start..hedge.token_end]
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(covered, vec!["en", "la", "medida", "de", "lo", "posible"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let lexicon = Lexicon::new(vec![LexiconEntry::new("roto", ModalCategory::Hedge, "(abc")]);
        assert!(matches!(
            Tagger::new(&lexicon),
            Err(LexiconError::Pattern { .. })
        ));
    }
}
