//! Ambiguity - modal and hedging analysis for legal decrees
//!
//! Loads a small corpus of decree texts, tags deontic, epistemic, dynamic
//! and hedging expressions with a regex lexicon, and reports frequencies,
//! PMI collocations and per-document modal profiles.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod lexicon;
pub mod models;
pub mod nlp;
pub mod reporters;
