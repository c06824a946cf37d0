//! The two linguistic backends behind a common interface.
//!
//! The classic backend works the way a word-list toolkit does: sentence
//! split, Treebank tokens, Penn tags, dictionary lemmas and a chunk tree for
//! entities. The pipeline backend builds one annotated document per request
//! with character offsets and Universal POS, and derives everything from it.

pub mod classic;
pub mod pipeline;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use classic::ClassicBackend;
pub use pipeline::PipelineBackend;

/// Sentences and word tokens, both in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokenization {
    pub sentences: Vec<String>,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    /// Fine-grained Penn Treebank tag.
    pub tag: String,
    /// Coarse Universal POS, when the backend produces one.
    pub pos: Option<String>,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            pos: None,
        }
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaPair {
    pub original: String,
    pub lemma: String,
}

impl LemmaPair {
    pub fn changed(&self) -> bool {
        self.original != self.lemma
    }
}

/// Character offsets into the request text, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub span: Option<Span>,
}

/// A linguistic engine. Implementations are immutable once built and are
/// shared across requests.
pub trait Backend: Send + Sync {
    fn name(&self) -> &'static str;

    fn tokenize(&self, text: &str) -> Result<Tokenization>;

    /// One pair per token, including tokens whose lemma equals the original.
    fn lemmatize(&self, text: &str) -> Result<Vec<LemmaPair>>;

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;

    fn entities(&self, text: &str) -> Result<Vec<Entity>>;
}
