//! Word normalisation and vocabulary statistics

use crate::models::{Token, VocabularyStats};
use rustc_hash::FxHashSet;

/// Strip Spanish acute accents and diaeresis. `ñ` is a distinct letter and
/// is kept.
pub fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'à' => 'a',
            'é' | 'è' => 'e',
            'í' | 'ì' => 'i',
            'ó' | 'ò' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'Á' | 'À' => 'A',
            'É' | 'È' => 'E',
            'Í' | 'Ì' => 'I',
            'Ó' | 'Ò' => 'O',
            'Ú' | 'Ù' | 'Ü' => 'U',
            other => other,
        })
        .collect()
}

/// Lowercase a word, folding accents when asked
pub fn normalize_word(word: &str, fold: bool) -> String {
    let lower = word.to_lowercase();
    if fold {
        fold_accents(&lower)
    } else {
        lower
    }
}

/// Compare distinct surface forms with distinct normalised forms.
///
/// The reduction percentage shows how much case and accent variation the
/// normalisation absorbs; it is 0 for an empty document.
pub fn vocabulary_stats(tokens: &[Token]) -> VocabularyStats {
    let words: Vec<&Token> = tokens.iter().filter(|t| t.is_word()).collect();
    let surface: FxHashSet<&str> = words.iter().map(|t| t.text.as_str()).collect();
    let normalized: FxHashSet<&str> = words.iter().map(|t| t.norm.as_str()).collect();

    let reduction_percentage = if surface.is_empty() {
        0.0
    } else {
        let ratio = normalized.len() as f64 / surface.len() as f64;
        ((1.0 - ratio) * 100.0 * 100.0).round() / 100.0
    };

    VocabularyStats {
        word_tokens: words.len(),
        unique_surface: surface.len(),
        unique_normalized: normalized.len(),
        reduction_percentage,
    }
}
