use std::sync::Arc;

use super::doc::Token;
use crate::text::Lexicon;
use crate::text::morph::{self, WordClass};

/// Rule lemmatizer driven by Universal POS. Lemmas are lower-cased except
/// for proper nouns, and an inflected word the lexicon cannot confirm still
/// gets its best rule-based form.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lexicon: Arc<Lexicon>,
}

impl Lemmatizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lemma(&self, token: &Token) -> String {
        if matches!(token.pos, "PROPN" | "PUNCT" | "SYM" | "NUM" | "X") {
            return token.text.clone();
        }
        let lower = token.lower().replace('\u{2019}', "'");
        if let Some(lemma) = contraction(&lower, token.pos) {
            return lemma.to_string();
        }
        if token.pos == "PRON" {
            return pronoun(&lower).map_or(lower.clone(), str::to_string);
        }
        let Some(class) = WordClass::from_universal(token.pos) else {
            return lower;
        };
        if let Some(base) = morph::exception(&lower, class) {
            return base.to_string();
        }
        if !morph::is_inflected(token.tag) || !morph::is_analyzable(&lower) {
            return lower;
        }
        let candidates = morph::candidates(&lower, class);
        if let Some(known) = candidates.iter().find(|c| self.lexicon.contains(c)) {
            return known.clone();
        }
        candidates.into_iter().next().unwrap_or(lower)
    }
}

fn contraction(lower: &str, pos: &str) -> Option<&'static str> {
    let lemma = match (lower, pos) {
        ("n't", _) => "not",
        ("'m" | "'re", _) => "be",
        ("'s", "AUX") => "be",
        ("'ll" | "wo", _) => "will",
        ("'d", "AUX") => "would",
        ("'ve", _) => "have",
        ("ca", "AUX") => "can",
        ("gon", _) => "go",
        ("na", "PART") => "to",
        _ => return None,
    };
    Some(lemma)
}

fn pronoun(lower: &str) -> Option<&'static str> {
    let lemma = match lower {
        "i" | "me" => "I",
        "we" | "us" => "we",
        "he" | "him" => "he",
        "she" | "her" => "she",
        "they" | "them" => "they",
        _ => return None,
    };
    Some(lemma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, pos: &'static str, tag: &'static str) -> Token {
        let mut t = Token::new(text, 0..text.len(), 0..text.chars().count());
        t.pos = pos;
        t.tag = tag;
        t
    }

    fn lemmatizer() -> Lemmatizer {
        Lemmatizer::new(Arc::new(Lexicon::from_words(["develop", "algorithm", "cat"])))
    }

    #[test]
    fn lowercases_common_words_keeps_proper_nouns() {
        let l = lemmatizer();
        assert_eq!(l.lemma(&token("The", "DET", "DT")), "the");
        assert_eq!(l.lemma(&token("Kathmandu", "PROPN", "NNP")), "Kathmandu");
        assert_eq!(l.lemma(&token("Cats", "NOUN", "NNS")), "cat");
    }

    #[test]
    fn validated_and_unvalidated_forms() {
        let l = lemmatizer();
        assert_eq!(l.lemma(&token("developed", "VERB", "VBD")), "develop");
        // Not in the lexicon, still reduced.
        assert_eq!(l.lemma(&token("blorfed", "VERB", "VBD")), "blorf");
        assert_eq!(l.lemma(&token("algorithm", "NOUN", "NN")), "algorithm");
    }

    #[test]
    fn exceptions_pronouns_and_clitics() {
        let l = lemmatizer();
        assert_eq!(l.lemma(&token("was", "AUX", "VBD")), "be");
        assert_eq!(l.lemma(&token("went", "VERB", "VBD")), "go");
        assert_eq!(l.lemma(&token("me", "PRON", "PRP")), "I");
        assert_eq!(l.lemma(&token("n't", "PART", "RB")), "not");
        assert_eq!(l.lemma(&token("'s", "AUX", "VBZ")), "be");
        assert_eq!(l.lemma(&token("'s", "PART", "POS")), "'s");
        assert_eq!(l.lemma(&token(".", "PUNCT", ".")), ".");
    }
}
