//! Suffix-stripping stemmers.
//!
//! Three algorithms of different aggressiveness: Lancaster strips the most,
//! Porter sits in the middle and Snowball English is the most conservative.
//! All of them lower-case their input first.

pub mod lancaster;
pub mod porter;
pub mod snowball;

use serde::{Deserialize, Serialize};

pub use lancaster::LancasterStemmer;
pub use porter::PorterStemmer;
pub use snowball::SnowballStemmer;

/// Reduces a single word to its stem.
pub trait Stemmer: Send + Sync {
    fn name(&self) -> &'static str;
    fn stem(&self, word: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    Porter,
    Lancaster,
    Snowball,
}

impl StemmerKind {
    pub const ALL: [StemmerKind; 3] = [Self::Porter, Self::Lancaster, Self::Snowball];

    /// Construct a fresh stemmer. Cheap enough to do per request.
    pub fn build(self) -> Box<dyn Stemmer> {
        match self {
            Self::Porter => Box::new(PorterStemmer),
            Self::Lancaster => Box::new(LancasterStemmer::new()),
            Self::Snowball => Box::new(SnowballStemmer::new()),
        }
    }
}

/// Stem every word with one stemmer, keeping positions aligned.
pub fn stem_all<S: AsRef<str>>(stemmer: &dyn Stemmer, words: &[S]) -> Vec<String> {
    words.iter().map(|w| stemmer.stem(w.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_build_matching_stemmers() {
        let names: Vec<&str> = StemmerKind::ALL.iter().map(|k| k.build().name()).collect();
        assert_eq!(names, vec!["porter", "lancaster", "snowball"]);
    }

    #[test]
    fn stem_all_keeps_alignment() {
        let words = ["The", "runners", "were", "running", "."];
        for kind in StemmerKind::ALL {
            let stemmer = kind.build();
            let stems = stem_all(stemmer.as_ref(), &words);
            assert_eq!(stems.len(), words.len(), "{}", stemmer.name());
            assert_eq!(stems[4], ".");
        }
    }

    #[test]
    fn aggressiveness_ordering_on_sample() {
        // Lancaster cuts deeper than Porter, which cuts deeper than Snowball.
        let word = "generously";
        let lancaster = LancasterStemmer::new().stem(word);
        let porter = PorterStemmer.stem(word);
        let snowball = SnowballStemmer::new().stem(word);
        assert!(lancaster.len() <= porter.len());
        assert!(porter.len() <= snowball.len());
    }
}
