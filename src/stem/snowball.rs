use rust_stemmers::{Algorithm, Stemmer as RustStemmer};

use super::Stemmer;

/// Snowball English ("Porter2"), backed by `rust-stemmers`.
pub struct SnowballStemmer {
    inner: RustStemmer,
}

impl SnowballStemmer {
    pub fn new() -> Self {
        Self {
            inner: RustStemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SnowballStemmer {
    fn name(&self) -> &'static str {
        "snowball"
    }

    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conservative_english_stems() {
        let s = SnowballStemmer::new();
        assert_eq!(s.stem("running"), "run");
        assert_eq!(s.stem("runs"), "run");
        assert_eq!(s.stem("ran"), "ran");
        assert_eq!(s.stem("generously"), "generous");
        assert_eq!(s.stem("Cats"), "cat");
    }
}
