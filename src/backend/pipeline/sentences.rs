use std::ops::Range;

use super::doc::Token;

/// Group tokens into sentences. A sentence ends after terminal punctuation
/// (and any closing quotes or brackets right after it) unless the next token
/// starts in lower case, and always at a blank line.
pub fn segment(text: &str, tokens: &[Token]) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < tokens.len() {
        let mut last = i;
        if is_terminal(&tokens[i].text) {
            while last + 1 < tokens.len()
                && (is_closer(&tokens[last + 1].text) || is_terminal(&tokens[last + 1].text))
                && tokens[last + 1].bytes.start == tokens[last].bytes.end
            {
                last += 1;
            }
        }
        let Some(next) = tokens.get(last + 1) else {
            break;
        };
        let gap = &text[tokens[last].bytes.end..next.bytes.start];
        let blank_line = gap.matches('\n').count() >= 2;
        let terminal = is_terminal(&tokens[i].text) && !starts_lower(&next.text);
        if blank_line || terminal {
            sentences.push(start..last + 1);
            start = last + 1;
        }
        i = last + 1;
    }
    if start < tokens.len() {
        sentences.push(start..tokens.len());
    }
    sentences
}

fn is_terminal(text: &str) -> bool {
    matches!(text, "." | "!" | "?" | "..." | "\u{2026}")
}

fn is_closer(text: &str) -> bool {
    matches!(text, "\"" | "'" | ")" | "]" | "}" | "\u{201D}" | "\u{2019}")
}

fn starts_lower(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;

    fn sentences(text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        segment(text, &tokens)
            .into_iter()
            .map(|r| {
                let start = tokens[r.start].bytes.start;
                let end = tokens[r.end - 1].bytes.end;
                text[start..end].to_string()
            })
            .collect()
    }

    #[test]
    fn single_sentence_with_abbreviation() {
        let text = "Dr. Ram developed a new algorithm at Kathmandu University.";
        assert_eq!(sentences(text), vec![text]);
    }

    #[test]
    fn splits_after_terminals_and_closers() {
        assert_eq!(
            sentences("He said \"stop!\" Then left. Why?! Because."),
            vec!["He said \"stop!\"", "Then left.", "Why?!", "Because."]
        );
    }

    #[test]
    fn blank_lines_break_sentences() {
        assert_eq!(sentences("Title line\n\nBody text here"), vec!["Title line", "Body text here"]);
    }

    #[test]
    fn lowercase_after_period_continues() {
        assert_eq!(sentences("Version 2. is out"), vec!["Version 2. is out"]);
    }
}
