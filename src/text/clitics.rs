//! Splitting of English contractions into word and clitic.

/// Whole-word contractions with the split point after the first part.
const SPLIT_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("wanna", 3),
    ("gimme", 3),
    ("lemme", 3),
    ("'tis", 2),
    ("'twas", 2),
];

const CLITICS: &[&str] = &["'s", "'m", "'d", "'ll", "'re", "'ve"];

/// `don't` → `do n't`, `it's` → `it 's`, `cannot` → `can not`. The parts are
/// consecutive slices of `word`; a word with nothing to split comes back
/// whole. Typographic apostrophes are treated like ASCII ones.
pub fn split(word: &str) -> Vec<&str> {
    let normalized = word.replace('\u{2019}', "'").to_lowercase();
    if let Some(&(_, at)) = SPLIT_WORDS.iter().find(|(w, _)| *w == normalized) {
        return split_at_char(word, at);
    }
    let chars = normalized.chars().count();
    if chars > 3 && normalized.ends_with("n't") {
        return split_at_char(word, chars - 3);
    }
    for clitic in CLITICS {
        let len = clitic.chars().count();
        if chars > len && normalized.ends_with(clitic) {
            return split_at_char(word, chars - len);
        }
    }
    vec![word]
}

fn split_at_char(word: &str, at: usize) -> Vec<&str> {
    match word.char_indices().nth(at) {
        Some((byte, _)) => vec![&word[..byte], &word[byte..]],
        None => vec![word],
    }
}
