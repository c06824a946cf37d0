//! Penn Treebank word tokenizer, applied to one sentence at a time.

use crate::text::clitics;

/// Tokenize a single sentence. Only the sentence-final period is split from
/// its word, so abbreviations inside the sentence stay whole.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    let mut out = Vec::new();
    for (i, chunk) in chunks.iter().enumerate() {
        split_chunk(chunk, i + 1 == chunks.len(), &mut out);
    }
    out
}

fn split_chunk(chunk: &str, last: bool, out: &mut Vec<String>) {
    let chars: Vec<char> = chunk.chars().collect();
    let n = chars.len();
    let final_period = if last { final_period(&chars) } else { None };

    let mut word = String::new();
    let mut i = 0;
    while i < n {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            '.' if Some(i) == final_period => {
                flush(&mut word, out);
                out.push(".".into());
            }
            '.' if next == Some('.') && chars.get(i + 2) == Some(&'.') => {
                flush(&mut word, out);
                out.push("...".into());
                i += 3;
                continue;
            }
            '-' if next == Some('-') => {
                flush(&mut word, out);
                out.push("--".into());
                i += 2;
                continue;
            }
            ',' | ':' if !next.is_some_and(|d| d.is_ascii_digit()) => {
                flush(&mut word, out);
                out.push(c.to_string());
            }
            ';' | '@' | '#' | '$' | '%' | '&' | '?' | '!' | '(' | ')' | '[' | ']' | '{' | '}'
            | '<' | '>' | '\u{2026}' => {
                flush(&mut word, out);
                out.push(c.to_string());
            }
            '"' => {
                let opening = word.is_empty()
                    && (i == 0 || matches!(chars[i - 1], '(' | '[' | '{' | '<'));
                flush(&mut word, out);
                out.push(if opening { "``" } else { "''" }.into());
            }
            '\u{201C}' => {
                flush(&mut word, out);
                out.push("``".into());
            }
            '\u{201D}' => {
                flush(&mut word, out);
                out.push("''".into());
            }
            '\'' if i == 0 && !starts_clitic(&chars[1..]) => {
                out.push("'".into());
            }
            '\'' if i + 1 == n && !word.is_empty() => {
                flush(&mut word, out);
                out.push("'".into());
            }
            _ => word.push(c),
        }
        i += 1;
    }
    flush(&mut word, out);
}

/// Index of a sentence-final period, allowing closing brackets or quotes
/// after it. An ellipsis is not a final period.
fn final_period(chars: &[char]) -> Option<usize> {
    let mut i = chars.len();
    while i > 0 && matches!(chars[i - 1], ')' | ']' | '}' | '>' | '"' | '\'' | '\u{201D}') {
        i -= 1;
    }
    if i == 0 || chars[i - 1] != '.' {
        return None;
    }
    if i >= 2 && chars[i - 2] == '.' {
        return None;
    }
    Some(i - 1)
}

fn starts_clitic(rest: &[char]) -> bool {
    let rest: String = rest.iter().take(2).collect::<String>().to_lowercase();
    ["re", "ve", "ll", "m", "t", "s", "d", "n"]
        .iter()
        .any(|c| rest.starts_with(c))
}

fn flush(word: &mut String, out: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }
    let token = std::mem::take(word);
    for part in clitics::split(&token) {
        out.push(part.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_final_period_only() {
        assert_eq!(
            tokenize("Dr. Ram developed a new algorithm at Kathmandu University."),
            vec![
                "Dr.", "Ram", "developed", "a", "new", "algorithm", "at", "Kathmandu",
                "University", "."
            ]
        );
    }

    #[test]
    fn contractions() {
        assert_eq!(tokenize("I don't know."), vec!["I", "do", "n't", "know", "."]);
        assert_eq!(tokenize("It's John's can't"), vec!["It", "'s", "John", "'s", "ca", "n't"]);
        assert_eq!(tokenize("won't cannot"), vec!["wo", "n't", "can", "not"]);
        assert_eq!(tokenize("We'll see, they're here"), vec![
            "We", "'ll", "see", ",", "they", "'re", "here"
        ]);
    }

    #[test]
    fn quotes_become_treebank_quotes() {
        assert_eq!(
            tokenize("He said \"hello\" twice."),
            vec!["He", "said", "``", "hello", "''", "twice", "."]
        );
    }

    #[test]
    fn punctuation_and_symbols() {
        assert_eq!(
            tokenize("It costs $5, (roughly) 10% more; ok?"),
            vec![
                "It", "costs", "$", "5", ",", "(", "roughly", ")", "10", "%", "more", ";", "ok",
                "?"
            ]
        );
        assert_eq!(tokenize("1,000 at 10:30"), vec!["1,000", "at", "10:30"]);
        assert_eq!(tokenize("Wait... what"), vec!["Wait", "...", "what"]);
    }

    #[test]
    fn period_inside_closing_bracket() {
        assert_eq!(tokenize("(See above.)"), vec!["(", "See", "above", ".", ")"]);
    }
}
