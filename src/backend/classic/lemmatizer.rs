use std::sync::Arc;

use crate::text::Lexicon;
use crate::text::morph::{self, WordClass};

/// Dictionary lemmatizer. A word is reduced only to a form the lexicon
/// knows; anything it cannot place comes back unchanged, case included.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lexicon: Arc<Lexicon>,
}

impl Lemmatizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lemmatize(&self, word: &str, tag: &str) -> String {
        if !morph::is_analyzable(word) {
            return word.to_string();
        }
        let class = WordClass::from_penn(tag);
        if let Some(base) = morph::exception(word, class) {
            return base.to_string();
        }
        if !morph::is_inflected(tag) {
            return word.to_string();
        }
        morph::candidates(word, class)
            .into_iter()
            .find(|form| self.lexicon.contains(form))
            .unwrap_or_else(|| word.to_string())
    }
}
