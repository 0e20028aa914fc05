//! Rule-based tokenizer with sentence segmentation
//!
//! Words are runs of letters and digits that start with a letter, with
//! internal hyphens or apostrophes kept (`político-administrativo`).
//! Numbers keep `.`/`,` separators between digits (`1.194`, `0,5`).
//! Every other visible character is a one-char punctuation token.
//!
//! Sentences end at `.`, `!`, `?`, `;` and at paragraph breaks. A period
//! right after a legal abbreviation (`Art.`, `Núm.`) or a single letter
//! (`D. C.`) does not end a sentence.

use super::normalize::{fold_accents, normalize_word};
use crate::models::{Token, TokenKind};

/// Abbreviations, accent-folded and lowercase
const ABBREVIATIONS: &[&str] = &[
    "art", "arts", "num", "no", "nro", "inc", "lit", "dr", "dra", "sr", "sra", "ltda", "pag",
    "ord", "dto", "cons",
];

#[derive(Debug, Clone)]
pub struct TokenizerOptions {
    /// Strip accents from `Token::norm`
    pub fold_accents: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self { fold_accents: true }
    }
}

/// Split `text` into tokens with byte spans and sentence indices
pub fn tokenize(text: &str, options: &TokenizerOptions) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut sentence = 0usize;
    let mut pending_break = false;

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        if c.is_whitespace() {
            let mut newlines = 0;
            while i < chars.len() && chars[i].1.is_whitespace() {
                if chars[i].1 == '\n' {
                    newlines += 1;
                }
                i += 1;
            }
            if newlines >= 2 {
                pending_break = true;
            }
            continue;
        }

        let (kind, end_idx) = if c.is_alphabetic() {
            (TokenKind::Word, scan_word(&chars, i))
        } else if c.is_numeric() {
            (TokenKind::Number, scan_number(&chars, i))
        } else {
            (TokenKind::Punct, i + 1)
        };

        if pending_break && !tokens.is_empty() {
            sentence += 1;
        }
        pending_break = false;

        let end = byte_at(end_idx);
        let surface = &text[start..end];
        let norm = match kind {
            TokenKind::Word => normalize_word(surface, options.fold_accents),
            _ => surface.to_string(),
        };

        if kind == TokenKind::Punct && ends_sentence(c, &tokens, start) {
            pending_break = true;
        }

        tokens.push(Token {
            text: surface.to_string(),
            norm,
            kind,
            start,
            end,
            index: tokens.len(),
            sentence,
        });

        i = end_idx;
    }

    tokens
}

fn scan_word(chars: &[(usize, char)], mut i: usize) -> usize {
    i += 1;
    while i < chars.len() {
        let c = chars[i].1;
        if c.is_alphanumeric() {
            i += 1;
        } else if (c == '-' || c == '\'')
            && chars.get(i + 1).is_some_and(|&(_, next)| next.is_alphabetic())
        {
            i += 2;
        } else {
            break;
        }
    }
    i
}

fn scan_number(chars: &[(usize, char)], mut i: usize) -> usize {
    i += 1;
    while i < chars.len() {
        let c = chars[i].1;
        if c.is_numeric() {
            i += 1;
        } else if (c == '.' || c == ',')
            && chars.get(i + 1).is_some_and(|&(_, next)| next.is_numeric())
        {
            i += 2;
        } else {
            break;
        }
    }
    // ordinal indicator: "2º", "1ª"
    if chars.get(i).is_some_and(|&(_, c)| matches!(c, 'º' | 'ª' | '°')) {
        i += 1;
    }
    i
}

fn ends_sentence(c: char, tokens: &[Token], start: usize) -> bool {
    match c {
        '!' | '?' | ';' => true,
        '.' => match tokens.last() {
            Some(prev) if prev.end == start && prev.is_word() => {
                let folded = fold_accents(&prev.text.to_lowercase());
                !(prev.text.chars().count() == 1 || ABBREVIATIONS.contains(&folded.as_str()))
            }
            _ => true,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_words_numbers_punct() {
        let tokens = tokenize(
            "El Decreto 1.194 (político-administrativo) rige.",
            &TokenizerOptions::default(),
        );
        assert_eq!(
            texts(&tokens),
            vec!["El", "Decreto", "1.194", "(", "político-administrativo", ")", "rige", "."]
        );
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[3].kind, TokenKind::Punct);
        assert_eq!(tokens[4].norm, "politico-administrativo");
    }

    #[test]
    fn test_byte_spans_match_text() {
        let text = "Según el artículo, deberán";
        let tokens = tokenize(text, &TokenizerOptions::default());
        for t in &tokens {
            assert_eq!(&text[t.start..t.end], t.text);
        }
        assert_eq!(tokens.iter().map(|t| t.index).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_norm_without_folding() {
        let options = TokenizerOptions { fold_accents: false };
        let tokens = tokenize("Deberán", &options);
        assert_eq!(tokens[0].norm, "deberán");
    }

    #[test]
    fn test_sentence_boundaries() {
        let tokens = tokenize(
            "Se debe cumplir. Podrá aplicarse; en lo posible\n\nARTÍCULO 2",
            &TokenizerOptions::default(),
        );
        let sentence_of = |w: &str| tokens.iter().find(|t| t.text == w).unwrap().sentence;
        assert_eq!(sentence_of("Se"), 0);
        assert_eq!(sentence_of("cumplir"), 0);
        assert_eq!(sentence_of("Podrá"), 1);
        assert_eq!(sentence_of("en"), 2);
        assert_eq!(sentence_of("ARTÍCULO"), 3);
    }

    #[test]
    fn test_ordinal_heading_ends_sentence() {
        let tokens = tokenize(
            "ARTÍCULO 2º. Las entidades deberán cumplir. Inciso 1ª y 3°.",
            &TokenizerOptions::default(),
        );
        assert_eq!(
            texts(&tokens),
            vec![
                "ARTÍCULO", "2º", ".", "Las", "entidades", "deberán", "cumplir", ".", "Inciso",
                "1ª", "y", "3°", "."
            ]
        );
        assert_eq!(tokens[1].kind, TokenKind::Number);
        let sentence_of = |w: &str| tokens.iter().find(|t| t.text == w).unwrap().sentence;
        assert_eq!(sentence_of("2º"), 0);
        assert_eq!(sentence_of("Las"), 1);
        assert_eq!(sentence_of("Inciso"), 2);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let tokens = tokenize(
            "Según el Art. 5 y el Núm. 3 de Bogotá D. C. se ordena. Fin",
            &TokenizerOptions::default(),
        );
        let last = tokens.iter().find(|t| t.text == "ordena").unwrap();
        assert_eq!(last.sentence, 0);
        let fin = tokens.iter().find(|t| t.text == "Fin").unwrap();
        assert_eq!(fin.sentence, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("", &TokenizerOptions::default()).is_empty());
        assert!(tokenize(" \n\n ", &TokenizerOptions::default()).is_empty());
    }
}
