//! Word segmentation on UAX #29 boundaries, followed by the English
//! exceptions: abbreviations keep their period, contractions are split.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

use super::doc::{CharCursor, Token};
use crate::text::clitics;

const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "st", "mt", "vs", "etc", "inc", "ltd", "corp",
    "dept", "univ", "approx", "capt", "lt", "gov", "sen", "rev", "jan", "feb", "aug", "sept",
    "oct", "nov", "dec",
];

static ABBREVIATION_SET: Lazy<HashSet<&str>> =
    Lazy::new(|| ABBREVIATIONS.iter().copied().collect());

/// Tokenize `text`. Whitespace is never a token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let segments: Vec<(usize, &str)> = text
        .split_word_bound_indices()
        .filter(|(_, s)| !s.chars().all(char::is_whitespace))
        .collect();

    let mut pieces: Vec<(usize, usize)> = Vec::with_capacity(segments.len());
    let mut i = 0;
    while i < segments.len() {
        let (start, segment) = segments[i];
        let end = start + segment.len();
        let period = segments
            .get(i + 1)
            .filter(|&&(next_start, next)| next == "." && next_start == end);
        if period.is_some() && keeps_period(segment, segments.get(i + 2).map(|&(_, s)| s)) {
            pieces.push((start, end + 1));
            i += 2;
            continue;
        }
        if let Some(end) = clock_time(&segments[i..]) {
            pieces.push((start, end));
            i += 3;
            continue;
        }
        let mut offset = start;
        for part in clitics::split(segment) {
            pieces.push((offset, offset + part.len()));
            offset += part.len();
        }
        i += 1;
    }

    let mut cursor = CharCursor::new(text);
    pieces
        .into_iter()
        .map(|(start, end)| {
            let chars = cursor.advance_to(start)..cursor.advance_to(end);
            Token::new(&text[start..end], start..end, chars)
        })
        .collect()
}

/// `10` `:` `30` written without spaces is one clock-time token; returns its
/// byte end.
fn clock_time(segments: &[(usize, &str)]) -> Option<usize> {
    let [(start, hours), (colon_start, ":"), (minutes_start, minutes), ..] = segments else {
        return None;
    };
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    let adjacent = *colon_start == start + hours.len() && *minutes_start == colon_start + 1;
    (adjacent && digits(*hours) && hours.len() <= 2 && digits(*minutes) && minutes.len() == 2)
        .then(|| minutes_start + minutes.len())
}

/// Whether `word` followed by `.` forms one token: known abbreviations,
/// dotted acronyms (`U.S`) and capital initials before another name.
fn keeps_period(word: &str, after: Option<&str>) -> bool {
    if ABBREVIATION_SET.contains(word.to_lowercase().as_str()) {
        return true;
    }
    if word.contains('.') && word.split('.').all(|p| p.chars().count() == 1) {
        return true;
    }
    let mut chars = word.chars();
    let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase());
    initial && after.is_some_and(|a| a.chars().next().is_some_and(char::is_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn reference_sentence_with_offsets() {
        let text = "Dr. Ram developed a new algorithm at Kathmandu University.";
        let tokens = tokenize(text);
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            words,
            vec![
                "Dr.", "Ram", "developed", "a", "new", "algorithm", "at", "Kathmandu",
                "University", "."
            ]
        );
        assert_eq!((tokens[7].start, tokens[8].end), (37, 57));
    }

    #[test]
    fn contractions_and_acronyms() {
        assert_eq!(texts("I don't live in the U.S. now"), vec![
            "I", "do", "n't", "live", "in", "the", "U.S.", "now"
        ]);
        assert_eq!(texts("It's J. K. Rowling"), vec!["It", "'s", "J.", "K.", "Rowling"]);
    }

    #[test]
    fn symbols_and_hyphens_split() {
        assert_eq!(texts("$5 (10%) Kathmandu-based"), vec![
            "$", "5", "(", "10", "%", ")", "Kathmandu", "-", "based"
        ]);
        assert_eq!(texts("3.14 and 1,000"), vec!["3.14", "and", "1,000"]);
        assert_eq!(texts("at 10:30 pm"), vec!["at", "10:30", "pm"]);
    }

    #[test]
    fn offsets_are_characters() {
        let text = "Caf\u{e9} Nepal";
        let tokens = tokenize(text);
        assert_eq!((tokens[1].start, tokens[1].end), (5, 10));
        assert_eq!(tokens[1].bytes, 6..11);
    }

    #[test]
    fn blank_text_has_no_tokens() {
        assert!(tokenize(" \n\t ").is_empty());
    }
}
