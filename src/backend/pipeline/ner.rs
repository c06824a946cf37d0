//! Entity recognition over an annotated document: numeric and temporal
//! expressions first, then proper-noun spans labelled from the gazetteer.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use super::doc::{Doc, DocEntity, Token};
use crate::text::gazetteer::{self, NameKind};

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:[.,]\d+)*$").expect("number pattern"));
static ORDINAL_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:st|nd|rd|th)$").expect("ordinal pattern"));
static CLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}$").expect("clock pattern"));
static DECADE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}s$").expect("decade pattern"));

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety", "hundred",
    "thousand", "million", "billion", "trillion", "dozen",
];
const MAGNITUDES: &[&str] = &[
    "hundred", "thousand", "million", "billion", "trillion", "lakh", "crore",
];
const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "twentieth", "hundredth",
];
const CURRENCY_SYMBOLS: &[&str] = &[
    "$", "\u{20AC}", "\u{A3}", "\u{20B9}", "rs", "rs.", "npr", "usd", "inr",
];
const CURRENCY_WORDS: &[&str] = &[
    "dollar", "dollars", "rupee", "rupees", "euro", "euros", "pound", "pounds", "cents", "usd",
    "npr", "inr",
];
const MERIDIEMS: &[&str] = &["am", "pm", "a.m.", "p.m.", "o'clock"];
const PERIODS: &[&str] = &[
    "year", "month", "week", "decade", "century", "weekend", "summer", "winter", "spring",
    "autumn",
];

pub const PERSON: &str = "PERSON";
pub const ORG: &str = "ORG";
pub const GPE: &str = "GPE";
pub const LOC: &str = "LOC";
pub const NORP: &str = "NORP";
pub const DATE: &str = "DATE";
pub const TIME: &str = "TIME";
pub const MONEY: &str = "MONEY";
pub const PERCENT: &str = "PERCENT";
pub const ORDINAL: &str = "ORDINAL";
pub const CARDINAL: &str = "CARDINAL";

/// Recognise entities sentence by sentence; entities never cross a
/// sentence boundary.
pub fn recognize(doc: &Doc<'_>) -> Vec<DocEntity> {
    let mut entities = Vec::new();
    for sentence in &doc.sentences {
        let tokens = &doc.tokens[sentence.clone()];
        let mut i = 0;
        while i < tokens.len() {
            let found = expression(tokens, i).or_else(|| name(tokens, i));
            match found {
                Some((len, label)) => {
                    let start = sentence.start + i;
                    entities.push(DocEntity {
                        tokens: start..start + len,
                        label,
                    });
                    i += len;
                }
                None => i += 1,
            }
        }
    }
    entities
}

fn lower(tokens: &[Token], i: usize) -> Option<String> {
    tokens.get(i).map(Token::lower)
}

fn is_in(tokens: &[Token], i: usize, words: &[&str]) -> bool {
    lower(tokens, i).is_some_and(|w| words.contains(&w.as_str()))
}

fn is_number(tokens: &[Token], i: usize) -> bool {
    tokens.get(i).is_some_and(|t| NUMBER.is_match(&t.text)) || is_in(tokens, i, NUMBER_WORDS)
}

fn numeric_value(tokens: &[Token], i: usize) -> Option<u32> {
    tokens.get(i).and_then(|t| t.text.parse().ok())
}

fn is_year(tokens: &[Token], i: usize) -> bool {
    tokens.get(i).is_some_and(|t| {
        t.text.len() == 4 && numeric_value(tokens, i).is_some_and(|y| (1000..=2099).contains(&y))
    })
}

fn is_day(tokens: &[Token], i: usize) -> bool {
    numeric_value(tokens, i).is_some_and(|d| (1..=31).contains(&d))
        || tokens.get(i).is_some_and(|t| ORDINAL_NUMBER.is_match(&t.text))
}

fn is_capitalized(tokens: &[Token], i: usize) -> bool {
    tokens
        .get(i)
        .and_then(|t| t.text.chars().next())
        .is_some_and(char::is_uppercase)
}

fn is_month(tokens: &[Token], i: usize) -> bool {
    is_capitalized(tokens, i) && tokens.get(i).is_some_and(|t| gazetteer::is_month(&t.text))
}

/// Numeric and temporal expressions starting at `i`, as (length, label).
fn expression(tokens: &[Token], i: usize) -> Option<(usize, &'static str)> {
    if is_in(tokens, i, CURRENCY_SYMBOLS) && is_number(tokens, i + 1) {
        let len = if is_in(tokens, i + 2, MAGNITUDES) { 3 } else { 2 };
        return Some((len, MONEY));
    }
    if is_month(tokens, i) {
        let mut j = i + 1;
        if is_day(tokens, j) {
            j += 1;
        }
        if is_in(tokens, j, &[","]) && is_year(tokens, j + 1) {
            j += 2;
        } else if is_year(tokens, j) {
            j += 1;
        }
        return Some((j - i, DATE));
    }
    if is_capitalized(tokens, i) && tokens.get(i).is_some_and(|t| gazetteer::is_weekday(&t.text)) {
        return Some((1, DATE));
    }
    if is_in(tokens, i, &["today", "yesterday", "tomorrow"]) {
        return Some((1, DATE));
    }
    if is_in(tokens, i, &["tonight", "noon", "midnight"]) {
        return Some((1, TIME));
    }
    if is_in(tokens, i, &["last", "next", "this"]) && is_in(tokens, i + 1, PERIODS) {
        return Some((2, DATE));
    }
    if is_in(tokens, i, ORDINAL_WORDS)
        || tokens
            .get(i)
            .is_some_and(|t| ORDINAL_NUMBER.is_match(&t.text))
    {
        if is_month(tokens, i + 1) {
            let len = if is_year(tokens, i + 2) { 3 } else { 2 };
            return Some((len, DATE));
        }
        return Some((1, ORDINAL));
    }
    if tokens.get(i).is_some_and(|t| CLOCK.is_match(&t.text)) {
        let len = if is_in(tokens, i + 1, MERIDIEMS) { 2 } else { 1 };
        return Some((len, TIME));
    }
    if tokens.get(i).is_some_and(|t| DECADE.is_match(&t.text)) {
        return Some((1, DATE));
    }
    if !is_number(tokens, i) {
        return None;
    }

    let mut j = i + 1;
    while is_in(tokens, j, MAGNITUDES)
        || (is_in(tokens, i, NUMBER_WORDS) && is_in(tokens, j, NUMBER_WORDS))
    {
        j += 1;
    }
    if is_in(tokens, j, CURRENCY_WORDS) {
        return Some((j + 1 - i, MONEY));
    }
    if is_in(tokens, j, &["%", "percent"]) {
        return Some((j + 1 - i, PERCENT));
    }
    if j == i + 1 {
        if numeric_value(tokens, i).is_some_and(|h| (1..=12).contains(&h))
            && is_in(tokens, j, MERIDIEMS)
        {
            return Some((2, TIME));
        }
        if is_day(tokens, i) && is_month(tokens, j) {
            let len = if is_year(tokens, j + 1) { 3 } else { 2 };
            return Some((len, DATE));
        }
        if is_year(tokens, i) {
            return Some((1, DATE));
        }
    }
    Some((j - i, CARDINAL))
}

fn is_name_token(token: &Token) -> bool {
    token.pos == "PROPN"
        && token.text.chars().any(char::is_alphabetic)
        && !gazetteer::is_person_title(&token.text)
        && !gazetteer::is_month(&token.text)
        && !gazetteer::is_weekday(&token.text)
}

fn has_org_keyword(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| gazetteer::is_org_keyword(&t.text))
}

/// A proper-noun span starting at `i`.
fn name(tokens: &[Token], i: usize) -> Option<(usize, &'static str)> {
    if !is_name_token(&tokens[i]) {
        return None;
    }
    let mut end = i + 1;
    loop {
        if end < tokens.len() && is_name_token(&tokens[end]) {
            end += 1;
        } else if end + 1 < tokens.len()
            && matches!(tokens[end].text.as_str(), "of" | "&")
            && is_name_token(&tokens[end + 1])
            && (tokens[end].text == "&" || has_org_keyword(&tokens[i..end]))
        {
            end += 2;
        } else {
            break;
        }
    }
    let previous = i.checked_sub(1).map(|p| &tokens[p]);
    Some((end - i, label_for(&tokens[i..end], previous)))
}

fn label_for(span: &[Token], previous: Option<&Token>) -> &'static str {
    if has_org_keyword(span) {
        return ORG;
    }
    let name = span.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ");
    match gazetteer::lookup(&name) {
        Some(NameKind::Organization) => return ORG,
        Some(NameKind::Place) => return GPE,
        Some(NameKind::Region) => return LOC,
        Some(NameKind::Group) => return NORP,
        None => {}
    }
    if previous.is_some_and(|p| gazetteer::is_person_title(&p.text))
        || gazetteer::is_first_name(&span[0].text)
    {
        return PERSON;
    }
    if let [only] = span {
        let letters: Vec<char> = only.text.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase()) {
            return ORG;
        }
    }
    if span.len() >= 3 {
        return ORG;
    }
    PERSON
}

/// Character offsets and source text of an entity.
pub fn resolve<'t>(doc: &Doc<'t>, entity: &DocEntity) -> (Range<usize>, &'t str) {
    (doc.char_span(entity.tokens.clone()), doc.slice(entity.tokens.clone()))
}
