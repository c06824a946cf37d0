//! Rule-based Penn Treebank tagger.
//!
//! Tags one sentence at a time in two passes: a lexical pass (closed-class
//! lexicon, irregular verbs, capitalisation, suffixes) and a contextual pass
//! that repairs the common noun/verb confusions using neighbouring tags.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::morph::IRREGULAR_VERBS;

const CLOSED_CLASS: &[(&str, &str)] = &[
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"), ("these", "DT"),
    ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"), ("any", "DT"),
    ("no", "DT"), ("all", "DT"), ("both", "DT"), ("another", "DT"), ("either", "DT"),
    ("neither", "DT"),
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("from", "IN"), ("about", "IN"), ("into", "IN"), ("onto", "IN"),
    ("over", "IN"), ("after", "IN"), ("before", "IN"), ("under", "IN"), ("between", "IN"),
    ("through", "IN"), ("during", "IN"), ("without", "IN"), ("within", "IN"), ("among", "IN"),
    ("against", "IN"), ("since", "IN"), ("until", "IN"), ("upon", "IN"), ("across", "IN"),
    ("behind", "IN"), ("beyond", "IN"), ("near", "IN"), ("toward", "IN"), ("towards", "IN"),
    ("around", "IN"), ("along", "IN"), ("like", "IN"), ("as", "IN"), ("than", "IN"),
    ("because", "IN"), ("although", "IN"), ("though", "IN"), ("if", "IN"), ("whether", "IN"),
    ("while", "IN"), ("unless", "IN"), ("whereas", "IN"), ("despite", "IN"), ("per", "IN"),
    ("via", "IN"), ("throughout", "IN"), ("except", "IN"), ("below", "IN"), ("above", "IN"),
    ("inside", "IN"), ("outside", "IN"),
    ("to", "TO"),
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"), ("plus", "CC"),
    ("&", "CC"),
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"), ("we", "PRP"),
    ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("us", "PRP"), ("them", "PRP"),
    ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"), ("herself", "PRP"),
    ("itself", "PRP"), ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"), ("which", "WDT"),
    ("whatever", "WDT"), ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"), ("ca", "MD"),
    ("wo", "MD"),
    ("be", "VB"), ("am", "VBP"), ("is", "VBZ"), ("are", "VBP"), ("was", "VBD"), ("were", "VBD"),
    ("been", "VBN"), ("being", "VBG"),
    ("have", "VBP"), ("has", "VBZ"), ("had", "VBD"), ("having", "VBG"),
    ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("doing", "VBG"), ("done", "VBN"),
    ("not", "RB"), ("also", "RB"), ("very", "RB"), ("often", "RB"), ("never", "RB"),
    ("always", "RB"), ("sometimes", "RB"), ("usually", "RB"), ("just", "RB"), ("now", "RB"),
    ("then", "RB"), ("here", "RB"), ("there", "RB"), ("only", "RB"), ("even", "RB"),
    ("still", "RB"), ("already", "RB"), ("soon", "RB"), ("again", "RB"), ("quite", "RB"),
    ("rather", "RB"), ("almost", "RB"), ("too", "RB"), ("well", "RB"), ("however", "RB"),
    ("perhaps", "RB"), ("together", "RB"), ("away", "RB"), ("back", "RB"), ("ago", "RB"),
    ("so", "RB"), ("else", "RB"), ("instead", "RB"), ("therefore", "RB"), ("thus", "RB"),
    ("really", "RB"), ("maybe", "RB"), ("once", "RB"), ("twice", "RB"),
    ("up", "RP"), ("out", "RP"), ("down", "RP"), ("off", "RP"),
    ("oh", "UH"), ("yes", "UH"), ("hello", "UH"), ("hi", "UH"), ("please", "UH"), ("wow", "UH"),
    ("more", "JJR"), ("less", "JJR"), ("fewer", "JJR"), ("better", "JJR"), ("worse", "JJR"),
    ("most", "JJS"), ("least", "JJS"), ("best", "JJS"), ("worst", "JJS"),
    ("zero", "CD"), ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"),
    ("five", "CD"), ("six", "CD"), ("seven", "CD"), ("eight", "CD"), ("nine", "CD"),
    ("ten", "CD"), ("eleven", "CD"), ("twelve", "CD"), ("twenty", "CD"), ("thirty", "CD"),
    ("forty", "CD"), ("fifty", "CD"), ("hundred", "CD"), ("thousand", "CD"),
    ("million", "CD"), ("billion", "CD"), ("trillion", "CD"),
    ("today", "NN"), ("tomorrow", "NN"), ("yesterday", "NN"), ("people", "NNS"),
];

/// Open-class words whose suffix would mislead the suffix rules.
const OPEN_CLASS: &[(&str, &str)] = &[
    ("new", "JJ"), ("good", "JJ"), ("great", "JJ"), ("big", "JJ"), ("small", "JJ"),
    ("large", "JJ"), ("old", "JJ"), ("young", "JJ"), ("high", "JJ"), ("low", "JJ"),
    ("long", "JJ"), ("short", "JJ"), ("human", "JJ"), ("artificial", "JJ"), ("natural", "JJ"),
    ("different", "JJ"), ("important", "JJ"), ("several", "JJ"), ("many", "JJ"),
    ("much", "JJ"), ("other", "JJ"), ("same", "JJ"), ("own", "JJ"), ("able", "JJ"),
    ("free", "JJ"), ("full", "JJ"), ("real", "JJ"), ("recent", "JJ"), ("modern", "JJ"),
    ("simple", "JJ"), ("easy", "JJ"), ("hard", "JJ"), ("early", "JJ"), ("late", "JJ"),
    ("few", "JJ"), ("little", "JJ"), ("main", "JJ"), ("major", "JJ"), ("common", "JJ"),
    ("whole", "JJ"), ("clear", "JJ"), ("certain", "JJ"), ("true", "JJ"), ("first", "JJ"),
    ("last", "JJ"), ("next", "JJ"), ("such", "JJ"), ("likely", "JJ"), ("daily", "JJ"),
    ("only", "RB"), ("family", "NN"), ("supply", "NN"), ("reply", "NN"), ("july", "NNP"),
    ("italy", "NNP"), ("ally", "NN"), ("rally", "NN"), ("belly", "NN"), ("jelly", "NN"),
    ("fly", "VB"), ("apply", "VB"), ("help", "VB"), ("want", "VB"), ("use", "VB"),
    ("look", "VB"), ("seem", "VB"), ("try", "VB"), ("ask", "VB"), ("understand", "VB"),
    ("interpret", "VB"), ("manipulate", "VB"), ("need", "VB"), ("work", "NN"),
    ("language", "NN"), ("goal", "NN"), ("gap", "NN"), ("algorithm", "NN"),
];

static CLOSED: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CLOSED_CLASS.iter().copied().collect());

static OPEN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map: HashMap<&str, &str> = HashMap::new();
    for &(base, past, participle) in IRREGULAR_VERBS {
        map.entry(participle).or_insert("VBN");
        map.entry(past).or_insert("VBD");
        map.insert(base, "VB");
    }
    map.extend(OPEN_CLASS.iter().copied());
    map
});

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:[.,:/]\d+)*|\.\d+)$").expect("number pattern"));

static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:st|nd|rd|th)$").expect("ordinal pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Lexicon,
    Suffix,
    Fallback,
}

/// Tag one sentence's tokens. The output is aligned with the input.
pub fn tag<S: AsRef<str>>(tokens: &[S]) -> Vec<&'static str> {
    let words: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    let mut tags: Vec<&'static str> = Vec::with_capacity(words.len());
    let mut origins: Vec<Origin> = Vec::with_capacity(words.len());

    let mut at_start = true;
    for word in &words {
        let prev = tags.last().copied();
        let (tag, origin) = lexical(word, at_start, prev);
        at_start = at_start && matches!(tag, "``" | "(");
        tags.push(tag);
        origins.push(origin);
    }

    contextual(&words, &mut tags, &origins);
    tags
}

fn lexical(word: &str, at_start: bool, prev: Option<&str>) -> (&'static str, Origin) {
    if let Some(tag) = punctuation(word, at_start, prev) {
        return (tag, Origin::Lexicon);
    }
    if let Some(tag) = clitic(word) {
        return (tag, Origin::Lexicon);
    }
    if NUMBER.is_match(word) {
        return ("CD", Origin::Lexicon);
    }
    if ORDINAL.is_match(word) {
        return ("JJ", Origin::Lexicon);
    }
    if is_abbreviation(word) {
        let tag = if starts_upper(word) { "NNP" } else { "FW" };
        return (tag, Origin::Lexicon);
    }

    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase()) {
        return ("NNP", Origin::Lexicon);
    }

    let lower = word.to_lowercase();
    let capitalized = starts_upper(word);
    if !capitalized || at_start || word == "I" {
        if let Some(&tag) = CLOSED.get(lower.as_str()) {
            return (tag, Origin::Lexicon);
        }
        if let Some(&tag) = OPEN.get(lower.as_str()) {
            return (tag, Origin::Lexicon);
        }
    }

    if capitalized && !at_start {
        return ("NNP", Origin::Lexicon);
    }
    if word.contains('-') && word.split('-').all(|p| !p.is_empty()) {
        return ("JJ", Origin::Suffix);
    }
    match suffix(&lower) {
        Some(tag) => (tag, Origin::Suffix),
        None if capitalized => ("NNP", Origin::Lexicon),
        None => ("NN", Origin::Fallback),
    }
}

fn punctuation(word: &str, at_start: bool, prev: Option<&str>) -> Option<&'static str> {
    let tag = match word {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "..." | "--" | "-" | "\u{2026}" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "``" | "\u{201C}" | "`" | "\u{2018}" => "``",
        "''" | "\u{201D}" | "'" | "\u{2019}" => "''",
        "\"" => {
            let opening = at_start || matches!(prev, Some("(" | "``" | "," | ":"));
            if opening { "``" } else { "''" }
        }
        "$" | "\u{20AC}" | "\u{A3}" | "\u{20B9}" => "$",
        "#" => "#",
        "%" => "NN",
        _ if !word.is_empty() && word.chars().all(|c| !c.is_alphanumeric()) => "SYM",
        _ => return None,
    };
    Some(tag)
}

fn clitic(word: &str) -> Option<&'static str> {
    let tag = match word.to_lowercase().replace('\u{2019}', "'").as_str() {
        "n't" => "RB",
        "'s" => "POS",
        "'m" | "'re" | "'ve" => "VBP",
        "'ll" | "'d" => "MD",
        _ => return None,
    };
    Some(tag)
}

fn suffix(lower: &str) -> Option<&'static str> {
    let n = lower.chars().count();
    if n > 4 && lower.ends_with("ing") {
        return Some("VBG");
    }
    if n > 3 && lower.ends_with("ed") {
        return Some("VBD");
    }
    if n > 5 && lower.ends_with("iest") {
        return Some("JJS");
    }
    if n > 3 && lower.ends_with("ly") {
        return Some("RB");
    }
    const NOUN_ENDINGS: &[&str] = &[
        "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ism", "ship", "hood", "ist",
        "er", "or", "ure", "age", "dom",
    ];
    const ADJECTIVE_ENDINGS: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "ic", "ical", "less", "ish", "al",
    ];
    if n > 4 && NOUN_ENDINGS.iter().any(|e| lower.ends_with(e)) {
        return Some("NN");
    }
    if n > 4 && ADJECTIVE_ENDINGS.iter().any(|e| lower.ends_with(e)) {
        return Some("JJ");
    }
    if n > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return Some("NNS");
    }
    None
}

fn contextual(words: &[&str], tags: &mut [&'static str], origins: &[Origin]) {
    let n = tags.len();
    for i in 0..n {
        let lower = words[i].to_lowercase();
        let prev = if i > 0 { Some(tags[i - 1]) } else { None };
        let next = tags.get(i + 1).copied();
        // Nearest preceding tag that is not an adverb, for auxiliary checks.
        let governor = (0..i).rev().map(|j| tags[j]).find(|t| !t.starts_with("RB"));
        let governor_word = (0..i)
            .rev()
            .find(|&j| !tags[j].starts_with("RB"))
            .map(|j| words[j].to_lowercase());

        match tags[i] {
            "RB" if lower == "there" && next.is_some_and(|_| is_be(words[i + 1])) => {
                tags[i] = "EX";
            }
            "POS" if lower == "'s" && matches!(prev, Some("PRP" | "WP" | "EX" | "DT")) => {
                tags[i] = "VBZ";
            }
            "PRP$"
                if lower == "her"
                    && next.is_none_or(|t| matches!(t, "." | "," | "IN" | "TO" | "CC")) =>
            {
                tags[i] = "PRP";
            }
            "DT" if lower == "that" => {
                if matches!(prev, Some("NN" | "NNS" | "NNP" | "NNPS")) {
                    tags[i] = "WDT";
                } else if matches!(next, Some("DT" | "PRP" | "NNP" | "EX")) {
                    tags[i] = "IN";
                }
            }
            "JJR" | "JJS" if matches!(next, Some("JJ")) => {
                tags[i] = if tags[i] == "JJR" { "RBR" } else { "RBS" };
            }
            "VBD" if is_have(governor_word.as_deref()) || is_be_opt(governor_word.as_deref()) => {
                tags[i] = "VBN";
            }
            // Shared past / participle forms ("said", "made") right after a
            // subject pronoun are finite.
            "VBN" if origins[i] == Origin::Lexicon
                && matches!(prev, Some("PRP" | "WP"))
                && !is_have(governor_word.as_deref())
                && !is_be_opt(governor_word.as_deref()) =>
            {
                tags[i] = "VBD";
            }
            "NN" | "VBP" | "VB"
                if matches!(governor, Some("MD" | "TO"))
                    && (origins[i] != Origin::Suffix || tags[i] != "NN") =>
            {
                tags[i] = "VB";
            }
            "VB" | "VBP" | "VBD"
                if origins[i] == Origin::Lexicon
                    && matches!(prev, Some("DT" | "PRP$" | "JJ" | "POS")) =>
            {
                tags[i] = "NN";
            }
            "VB" if i > 0 && matches!(prev, Some("PRP" | "NNS" | "NNPS" | "WDT" | "WP")) => {
                tags[i] = "VBP";
            }
            "NN" if origins[i] == Origin::Fallback
                && matches!(prev, Some("PRP" | "NNS" | "WDT"))
                && matches!(next, Some("DT" | "PRP" | "PRP$" | "IN" | "TO")) =>
            {
                tags[i] = "VBP";
            }
            "NNS" if origins[i] == Origin::Suffix
                && matches!(prev, Some("PRP" | "NN" | "NNP" | "WDT" | "WP"))
                && matches!(
                    next,
                    Some("DT" | "PRP$" | "PRP" | "IN" | "TO" | "RB" | "JJ" | "NNS" | "CD")
                ) =>
            {
                tags[i] = "VBZ";
            }
            _ => {}
        }
    }
}

fn is_be(word: &str) -> bool {
    matches!(
        word.to_lowercase().as_str(),
        "is" | "are" | "was" | "were" | "be" | "been" | "'s" | "'re"
    )
}

fn is_be_opt(word: Option<&str>) -> bool {
    word.is_some_and(is_be)
}

fn is_have(word: Option<&str>) -> bool {
    matches!(word, Some("has" | "have" | "had" | "'ve" | "having"))
}

fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Dotted abbreviation such as `Dr.`, `U.S.` or `etc.`.
pub fn is_abbreviation(word: &str) -> bool {
    word.len() > 1
        && word.ends_with('.')
        && word.chars().any(char::is_alphabetic)
        && word.chars().all(|c| c.is_alphabetic() || c == '.')
}
