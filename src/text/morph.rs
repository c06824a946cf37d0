//! English inflectional morphology: exception lists and suffix detachment.
//!
//! This module only proposes base forms. Deciding which candidate wins (and
//! whether an unvalidated guess is acceptable) is left to each backend.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Coarse word class used to pick exceptions and detachment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    /// Map a Penn Treebank tag to a class: J→adjective, V→verb, N→noun,
    /// R→adverb, anything else defaults to noun.
    pub fn from_penn(tag: &str) -> Self {
        match tag.as_bytes().first() {
            Some(b'J') => Self::Adjective,
            Some(b'V') => Self::Verb,
            Some(b'R') => Self::Adverb,
            _ => Self::Noun,
        }
    }

    /// Map a Universal POS label to a class, `None` for closed classes.
    pub fn from_universal(pos: &str) -> Option<Self> {
        match pos {
            "NOUN" => Some(Self::Noun),
            "VERB" | "AUX" => Some(Self::Verb),
            "ADJ" => Some(Self::Adjective),
            "ADV" => Some(Self::Adverb),
            _ => None,
        }
    }
}

/// Whether a Penn tag marks an inflected form (plural, past, comparative...).
/// Base forms only go through the exception lists.
pub fn is_inflected(tag: &str) -> bool {
    matches!(
        tag,
        "NNS" | "NNPS" | "VBD" | "VBG" | "VBN" | "VBZ" | "JJR" | "JJS" | "RBR" | "RBS"
    )
}

/// Irregular verbs as (base, past, past participle).
pub const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("arise", "arose", "arisen"),
    ("awake", "awoke", "awoken"),
    ("bear", "bore", "borne"),
    ("beat", "beat", "beaten"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bend", "bent", "bent"),
    ("bind", "bound", "bound"),
    ("bite", "bit", "bitten"),
    ("bleed", "bled", "bled"),
    ("blow", "blew", "blown"),
    ("break", "broke", "broken"),
    ("breed", "bred", "bred"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("buy", "bought", "bought"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("come", "came", "come"),
    ("deal", "dealt", "dealt"),
    ("dig", "dug", "dug"),
    ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feed", "fed", "fed"),
    ("feel", "felt", "felt"),
    ("fight", "fought", "fought"),
    ("find", "found", "found"),
    ("flee", "fled", "fled"),
    ("fly", "flew", "flown"),
    ("forget", "forgot", "forgotten"),
    ("forgive", "forgave", "forgiven"),
    ("freeze", "froze", "frozen"),
    ("get", "got", "gotten"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grow", "grew", "grown"),
    ("hang", "hung", "hung"),
    ("hear", "heard", "heard"),
    ("hide", "hid", "hidden"),
    ("hold", "held", "held"),
    ("keep", "kept", "kept"),
    ("know", "knew", "known"),
    ("lay", "laid", "laid"),
    ("lead", "led", "led"),
    ("leave", "left", "left"),
    ("lend", "lent", "lent"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("pay", "paid", "paid"),
    ("ride", "rode", "ridden"),
    ("ring", "rang", "rung"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("seek", "sought", "sought"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("shake", "shook", "shaken"),
    ("shine", "shone", "shone"),
    ("shoot", "shot", "shot"),
    ("show", "showed", "shown"),
    ("sing", "sang", "sung"),
    ("sink", "sank", "sunk"),
    ("sit", "sat", "sat"),
    ("sleep", "slept", "slept"),
    ("slide", "slid", "slid"),
    ("speak", "spoke", "spoken"),
    ("spend", "spent", "spent"),
    ("spin", "spun", "spun"),
    ("stand", "stood", "stood"),
    ("steal", "stole", "stolen"),
    ("stick", "stuck", "stuck"),
    ("strike", "struck", "struck"),
    ("swear", "swore", "sworn"),
    ("swim", "swam", "swum"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tear", "tore", "torn"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("understand", "understood", "understood"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("win", "won", "won"),
    ("write", "wrote", "written"),
];

const AUXILIARY_FORMS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
];

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("nuclei", "nucleus"),
    ("radii", "radius"),
    ("stimuli", "stimulus"),
    ("alumni", "alumnus"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("farther", "far"),
    ("furthest", "far"),
    ("farthest", "far"),
];

const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "well"),
    ("best", "well"),
    ("further", "far"),
    ("farther", "far"),
    ("harder", "hard"),
    ("hardest", "hard"),
];

static EXCEPTIONS: Lazy<HashMap<WordClass, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let mut verbs: HashMap<&str, &str> = AUXILIARY_FORMS.iter().copied().collect();
        for &(base, past, participle) in IRREGULAR_VERBS {
            verbs.entry(past).or_insert(base);
            verbs.entry(participle).or_insert(base);
        }
        // Participles equal to their base ("come", "run") map to themselves.
        verbs.retain(|form, base| *form != *base);

        HashMap::from([
            (WordClass::Verb, verbs),
            (WordClass::Noun, NOUN_EXCEPTIONS.iter().copied().collect()),
            (
                WordClass::Adjective,
                ADJECTIVE_EXCEPTIONS.iter().copied().collect(),
            ),
            (WordClass::Adverb, ADVERB_EXCEPTIONS.iter().copied().collect()),
        ])
    });

/// Detachment rules per class, in application order.
fn detachment_rules(class: WordClass) -> &'static [(&'static str, &'static str)] {
    match class {
        WordClass::Noun => &[
            ("s", ""),
            ("ses", "s"),
            ("xes", "x"),
            ("zes", "z"),
            ("ches", "ch"),
            ("shes", "sh"),
            ("men", "man"),
            ("ies", "y"),
        ],
        WordClass::Verb => &[
            ("s", ""),
            ("ies", "y"),
            ("es", "e"),
            ("es", ""),
            ("ed", "e"),
            ("ed", ""),
            ("ing", "e"),
            ("ing", ""),
        ],
        WordClass::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
        WordClass::Adverb => &[],
    }
}

/// Look up an irregular form. `word` must be lowercase.
pub fn exception(word: &str, class: WordClass) -> Option<&'static str> {
    EXCEPTIONS.get(&class)?.get(word).copied()
}

/// Whether rule-based analysis applies at all: plain lowercase letters, at
/// least three of them.
pub fn is_analyzable(word: &str) -> bool {
    word.len() >= 3 && word.chars().all(|c| c.is_ascii_lowercase())
}

/// Every base form the detachment rules produce, in rule order, deduplicated.
pub fn rule_forms(word: &str, class: WordClass) -> Vec<String> {
    let mut forms: Vec<String> = Vec::new();
    for &(suffix, replacement) in detachment_rules(class) {
        if let Some(stem) = word.strip_suffix(suffix) {
            if class == WordClass::Noun && suffix == "s" && !strippable_plural(word) {
                continue;
            }
            let form = format!("{stem}{replacement}");
            if form.len() >= 2 && !forms.contains(&form) {
                forms.push(form);
            }
        }
    }
    forms
}

/// Single best-effort base form from orthographic heuristics. May not be a
/// real word.
pub fn guess(word: &str, class: WordClass) -> Option<String> {
    match class {
        WordClass::Verb => guess_verb(word),
        WordClass::Noun => guess_noun(word),
        WordClass::Adjective => guess_adjective(word),
        WordClass::Adverb => None,
    }
}

/// `guess` first, then the detachment forms, deduplicated.
pub fn candidates(word: &str, class: WordClass) -> Vec<String> {
    let mut out: Vec<String> = guess(word, class).into_iter().collect();
    for form in rule_forms(word, class) {
        if !out.contains(&form) {
            out.push(form);
        }
    }
    out
}

fn guess_verb(word: &str) -> Option<String> {
    if word.len() > 4
        && let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied"))
    {
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("eed") {
        return Some(format!("{stem}ee"));
    }
    if let Some(stem) = word.strip_suffix("ing")
        && stem.len() >= 2
        && has_vowel(stem)
    {
        return Some(restore_stem(stem));
    }
    if let Some(stem) = word.strip_suffix("ed")
        && stem.len() >= 2
        && has_vowel(stem)
    {
        return Some(restore_stem(stem));
    }
    if let Some(stem) = word.strip_suffix("es")
        && ["s", "x", "z", "ch", "sh", "o"].iter().any(|e| stem.ends_with(e))
    {
        return Some(stem.to_string());
    }
    if strippable_plural(word) {
        return word.strip_suffix('s').map(str::to_string);
    }
    None
}

fn guess_noun(word: &str) -> Option<String> {
    if word.len() > 4
        && let Some(stem) = word.strip_suffix("ies")
    {
        return Some(format!("{stem}y"));
    }
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if let Some(stem) = word.strip_suffix("men")
        && !stem.is_empty()
    {
        return Some(format!("{stem}man"));
    }
    if strippable_plural(word) {
        return word.strip_suffix('s').map(str::to_string);
    }
    None
}

fn guess_adjective(word: &str) -> Option<String> {
    if word.len() > 4
        && let Some(stem) = word.strip_suffix("ier").or_else(|| word.strip_suffix("iest"))
    {
        return Some(format!("{stem}y"));
    }
    let stem = word
        .strip_suffix("est")
        .or_else(|| word.strip_suffix("er"))?;
    if stem.len() < 2 || !has_vowel(stem) {
        return None;
    }
    Some(restore_stem(stem))
}

/// Plural `-s` is only stripped from words longer than three letters that do
/// not end in `-ss`, `-us` or `-is`.
fn strippable_plural(word: &str) -> bool {
    word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
}

/// Undo spelling changes made when a suffix was attached: restore a dropped
/// `e`, undouble a final consonant.
fn restore_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }
    if n >= 2 && bytes[n - 1] == bytes[n - 2] && is_consonant(bytes, n - 1) {
        if matches!(bytes[n - 1], b'l' | b's' | b'z') {
            return stem.to_string();
        }
        return stem[..n - 1].to_string();
    }
    if (measure(bytes) == 1 && ends_cvc(bytes)) || n <= 2 {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn has_vowel(s: &str) -> bool {
    let bytes = s.as_bytes();
    (0..bytes.len()).any(|i| !is_consonant(bytes, i))
}

fn is_consonant(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(b, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences, the `m` in `[C](VC){m}[V]`.
fn measure(b: &[u8]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..b.len() {
        let vowel = !is_consonant(b, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

/// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
fn ends_cvc(b: &[u8]) -> bool {
    let n = b.len();
    n >= 3
        && is_consonant(b, n - 1)
        && !is_consonant(b, n - 2)
        && is_consonant(b, n - 3)
        && !matches!(b[n - 1], b'w' | b'x' | b'y')
}
