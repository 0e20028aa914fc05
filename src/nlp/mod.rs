//! Tokenization, normalisation and stopword filtering for Spanish legal text

mod normalize;
mod stopwords;
mod tokenizer;

pub use normalize::{fold_accents, normalize_word, vocabulary_stats};
pub use stopwords::StopwordFilter;
pub use tokenizer::{tokenize, TokenizerOptions};
