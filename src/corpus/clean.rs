//! Text cleaning for extracted decree texts

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

static MANY_NEWLINES: OnceLock<Regex> = OnceLock::new();
static DISALLOWED: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();
static LEGAL_REPAIRS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

fn many_newlines() -> &'static Regex {
    MANY_NEWLINES.get_or_init(|| Regex::new(r"\n{3,}").expect("valid regex"))
}

/// Anything that is not a letter, digit, whitespace or legal punctuation.
/// `\w` is Unicode-aware, so accents, ñ and ü survive.
fn disallowed() -> &'static Regex {
    DISALLOWED.get_or_init(|| Regex::new(r#"[^\w\s.,;:!?()\-"']"#).expect("valid regex"))
}

fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK.get_or_init(|| Regex::new(r"\n[ \t]*\n\s*").expect("valid regex"))
}

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Headings commonly damaged by OCR or by lost accents.
/// Only upper-case and capitalised heading forms are rewritten so the verb
/// "articulo" in running text is left alone.
fn legal_repairs() -> &'static [(Regex, &'static str)] {
    LEGAL_REPAIRS.get_or_init(|| {
        [
            (r"\bART[Il1]CULO\b", "ARTÍCULO"),
            (r"\bArt[il1]culo\b", "Artículo"),
            (r"\bPARAGRAFO\b", "PARÁGRAFO"),
            (r"\bParagrafo\b", "Parágrafo"),
            (r"\bCAPITULO\b", "CAPÍTULO"),
            (r"\bCapitulo\b", "Capítulo"),
            (r"\bTITULO\b", "TÍTULO"),
            (r"\bDECRETO\s+N[UÚ]MERO\b", "DECRETO NÚMERO"),
            (r"\bRESOLUCION\b", "RESOLUCIÓN"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
        .collect()
    })
}

/// Repair accent loss and OCR confusions in legal headings
pub fn repair_legal_terms(text: &str) -> String {
    let mut out = text.to_string();
    for (re, replacement) in legal_repairs() {
        if re.is_match(&out) {
            out = re.replace_all(&out, *replacement).into_owned();
        }
    }
    out
}

/// Clean a decree text.
///
/// Removes symbols outside letters, digits and legal punctuation, collapses
/// whitespace inside paragraphs and keeps blank-line paragraph breaks.
pub fn clean_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = many_newlines().replace_all(&text, "\n\n");
    let text = disallowed().replace_all(&text, " ");

    let paragraphs: Vec<String> = paragraph_break()
        .split(&text)
        .map(|p| whitespace().replace_all(p, " ").trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    debug!("Text cleaning completed ({} paragraphs)", paragraphs.len());
    paragraphs.join("\n\n")
}
