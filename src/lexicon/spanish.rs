//! Built-in Spanish lexicon for legal and administrative prose

use super::LexiconEntry;
use crate::models::ModalCategory::{Deontic, Dynamic, Epistemic, Hedge};

/// Entry order matters only for ties between equal-length matches
pub(super) fn entries() -> Vec<LexiconEntry> {
    vec![
        // Obligation, prohibition, permission
        LexiconEntry::new(
            "deber",
            Deontic,
            r"deb(?:e|en|es|emos|er|erá|erán|ería|erían|ía|ían|iera|ieran|iere|ieren|a|an|iendo)",
        ),
        LexiconEntry::new(
            "tener que",
            Deontic,
            r"(?:tiene|tienen|tendrá|tendrán|tendría|tendrían|tener|tenga|tengan|tenía|tenían)\s+que",
        ),
        LexiconEntry::new("haber de", Deontic, r"(?:ha|han|habrá|habrán|haya|hayan)\s+de"),
        LexiconEntry::new(
            "estar obligado",
            Deontic,
            r"(?:está|están|estará|estarán|estar|estarían|queda|quedan|quedará|quedarán)\s+obligad[oa]s?",
        ),
        LexiconEntry::new("obligación", Deontic, r"obligaci[oó]n(?:es)?"),
        LexiconEntry::new("obligatorio", Deontic, r"obligatori[oa]s?|obligatoriamente"),
        LexiconEntry::new(
            "prohibir",
            Deontic,
            r"proh[ií]b(?:e|en|a|an|ido|ida|idos|idas|irá|irán|ir|ición|iciones)",
        ),
        LexiconEntry::new(
            "exigir",
            Deontic,
            r"exig(?:e|en|ir|irá|irán|ido|ida|idos|idas|ible|ibles)|exij(?:a|an)",
        ),
        LexiconEntry::new(
            "corresponder",
            Deontic,
            r"correspond(?:e|en|erá|erán|ía|ían)",
        ),
        LexiconEntry::new(
            "facultar",
            Deontic,
            r"facult(?:a|an|ar|ará|arán|ado|ada|ados|adas|ad|ades)",
        ),
        LexiconEntry::new(
            "ser necesario",
            Deontic,
            r"(?:es|será|serán|son|resulta|resultará)\s+necesari[oa]s?",
        ),
        LexiconEntry::new("se permite", Deontic, r"se\s+permit(?:e|en|irá|irán)"),
        // Certainty and possibility
        LexiconEntry::new("posiblemente", Epistemic, r"posiblemente"),
        LexiconEntry::new("probablemente", Epistemic, r"probablemente"),
        LexiconEntry::new("probable", Epistemic, r"probables?"),
        LexiconEntry::new("quizás", Epistemic, r"quiz[aá]s?"),
        LexiconEntry::literal("tal vez", Epistemic),
        LexiconEntry::literal("al parecer", Epistemic),
        LexiconEntry::new("parecer", Epistemic, r"parec(?:e|en|ería|erían|ía|ían|iera)"),
        LexiconEntry::new(
            "presumir",
            Epistemic,
            r"presum(?:e|en|ir|irá|irán|ible|ibles|iblemente|ido|ida)|presunci[oó]n",
        ),
        LexiconEntry::new(
            "ser posible",
            Epistemic,
            r"(?:es|será|sería|sea|resulta)\s+posible",
        ),
        LexiconEntry::new("seguramente", Epistemic, r"seguramente"),
        LexiconEntry::literal("sin duda", Epistemic),
        LexiconEntry::new("evidentemente", Epistemic, r"evidentemente|es\s+evidente"),
        LexiconEntry::new(
            "se estima",
            Epistemic,
            r"se\s+(?:estima|estiman|considera|consideran|presume|presumen)",
        ),
        // Ability and capacity
        LexiconEntry::new(
            "poder",
            Dynamic,
            r"pued(?:e|en|a|an|es)|pod(?:er|rá|rán|ría|rían|ía|ían|emos|ido)|pudiera|pudieran|pudiere|pudieren|pudo",
        ),
        LexiconEntry::new("ser capaz de", Dynamic, r"capa(?:z|ces)\s+de"),
        LexiconEntry::new("capacidad", Dynamic, r"capacidad(?:es)?"),
        LexiconEntry::new("estar en condiciones de", Dynamic, r"en\s+condiciones\s+de"),
        // Mitigation
        LexiconEntry::literal("en la medida de lo posible", Hedge),
        LexiconEntry::literal("en lo posible", Hedge),
        LexiconEntry::new("en la medida en que", Hedge, r"en\s+la\s+medida\s+(?:en\s+)?que"),
        LexiconEntry::new(
            "de ser posible",
            Hedge,
            r"(?:de\s+ser|si\s+es|si\s+fuere|si\s+fuera)\s+posible",
        ),
        LexiconEntry::new(
            "procurar",
            Hedge,
            r"procur(?:a|an|ar|ará|arán|e|en|ando)",
        ),
        LexiconEntry::new(
            "propender",
            Hedge,
            r"propend(?:e|en|er|erá|erán|a|an|iendo)",
        ),
        LexiconEntry::new(
            "según corresponda",
            Hedge,
            r"seg[uú]n\s+(?:corresponda|sea\s+el\s+caso|el\s+caso)",
        ),
        LexiconEntry::new(
            "cuando sea necesario",
            Hedge,
            r"cuando\s+(?:sea|resulte|fuere|se\s+considere)\s+necesari[oa]",
        ),
        LexiconEntry::new(
            "de manera progresiva",
            Hedge,
            r"(?:de\s+manera|en\s+forma)\s+(?:progresiva|gradual)|progresivamente|gradualmente",
        ),
        LexiconEntry::literal("eventualmente", Hedge),
        LexiconEntry::literal("aproximadamente", Hedge),
        LexiconEntry::literal("en principio", Hedge),
        LexiconEntry::new("razonable", Hedge, r"razonables?|razonablemente"),
        LexiconEntry::literal("relativamente", Hedge),
        LexiconEntry::new("tender a", Hedge, r"tiend(?:e|en)\s+a|tender[aá]n?\s+a"),
    ]
}
