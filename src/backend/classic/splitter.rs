//! Sentence splitter in the Punkt style: a terminal mark ends a sentence
//! unless it closes an abbreviation or an initial, or the next word starts
//! in lower case.

use std::collections::HashSet;

use once_cell::sync::Lazy;

const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "st", "mt", "ft", "vs", "etc", "e.g", "i.e",
    "cf", "al", "inc", "ltd", "co", "corp", "dept", "univ", "assn", "bros", "est", "approx",
    "no", "nos", "vol", "fig", "figs", "p", "pp", "ed", "eds", "gen", "col", "capt", "lt",
    "sgt", "gov", "sen", "rep", "rev", "hon", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec", "mon", "tue", "wed", "thu", "fri", "sat", "sun",
    "a.m", "p.m", "u.s", "u.k", "u.n", "ph.d", "b.sc", "m.sc", "b.a", "m.a",
];

static ABBREVIATION_SET: Lazy<HashSet<&str>> =
    Lazy::new(|| ABBREVIATIONS.iter().copied().collect());

const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}'];

/// Split `text` into sentences, each a trimmed slice of the input.
pub fn split(text: &str) -> Vec<&str> {
    let words: Vec<(usize, &str)> = words_with_offsets(text);
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(offset, word)) in words.iter().enumerate() {
        let begin = *start.get_or_insert(offset);
        let next = words.get(i + 1).map(|&(_, w)| w);
        if next.is_some_and(|next| ends_sentence(word, next)) {
            sentences.push(text[begin..offset + word.len()].trim());
            start = None;
        }
    }
    if let Some(begin) = start {
        let rest = text[begin..].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }
    }
    sentences
}

fn words_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                out.push((s, &text[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, &text[s..]));
    }
    out
}

fn ends_sentence(word: &str, next: &str) -> bool {
    let core = word.trim_end_matches(CLOSERS);
    let Some(mark) = core.chars().last() else {
        return false;
    };
    if !matches!(mark, '.' | '?' | '!' | '\u{2026}') {
        return false;
    }
    if next.chars().find(|c| c.is_alphanumeric()).is_some_and(char::is_lowercase) {
        return false;
    }
    if mark == '.' && !core.ends_with("..") {
        let stem = core.trim_end_matches('.');
        let stem = stem.trim_start_matches(|c: char| !c.is_alphanumeric());
        if is_abbreviation(stem) || is_initial(stem) {
            return false;
        }
    }
    true
}

fn is_abbreviation(stem: &str) -> bool {
    let lower = stem.to_lowercase();
    ABBREVIATION_SET.contains(lower.as_str())
        || (stem.contains('.') && stem.split('.').all(|p| p.chars().count() == 1))
}

fn is_initial(stem: &str) -> bool {
    let mut chars = stem.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviation_does_not_end_sentence() {
        let text = "Dr. Ram developed a new algorithm at Kathmandu University.";
        assert_eq!(split(text), vec![text]);
    }

    #[test]
    fn splits_on_terminal_marks() {
        let text = "It works. Does it? Yes!  Great.";
        assert_eq!(split(text), vec!["It works.", "Does it?", "Yes!", "Great."]);
    }

    #[test]
    fn initials_and_acronyms_are_kept_together() {
        let text = "J. K. Rowling moved to the U.S. Army base. She wrote there.";
        assert_eq!(
            split(text),
            vec!["J. K. Rowling moved to the U.S. Army base.", "She wrote there."]
        );
    }

    #[test]
    fn lowercase_continuation_is_not_a_break() {
        let text = "Prices rose 5 p.c. last year. Then fell.";
        assert_eq!(split(text), vec!["Prices rose 5 p.c. last year.", "Then fell."]);
    }

    #[test]
    fn closing_quote_stays_with_sentence() {
        let text = "He said \"stop.\" Then he left.";
        assert_eq!(split(text), vec!["He said \"stop.\"", "Then he left."]);
    }

    #[test]
    fn whitespace_only_gives_nothing() {
        assert!(split("   \n ").is_empty());
        assert_eq!(split("no terminal mark"), vec!["no terminal mark"]);
    }
}
