//! English word list used as the lemma index.
//!
//! Both backends accept a lemma candidate only when it appears here, which
//! is what keeps rule-based suffix stripping from inventing words.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// A case-insensitive set of known English words.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load a newline-separated word list (one word per line, `\r\n` tolerated).
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let lexicon = Self::from_words(raw.lines());
        if lexicon.is_empty() {
            bail!("word list {} is empty", path.display());
        }
        Ok(lexicon)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
