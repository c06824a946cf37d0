//! Request and response bodies of the HTTP API.
//!
//! The `nltk` / `spacy` keys name Engine A (classic) and Engine B (pipeline)
//! and are kept for compatibility with existing clients.

use serde::{Deserialize, Serialize};

use crate::backend::LemmaPair;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

impl TextRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The text to process, rejecting blank input.
    pub fn validated(&self) -> Result<&str, ApiError> {
        if self.text.trim().is_empty() {
            return Err(ApiError::InvalidInput("text must not be empty".into()));
        }
        Ok(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicTokens {
    pub sentences: Vec<String>,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineTokens {
    pub sentences: Vec<String>,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeResponse {
    pub nltk: ClassicTokens,
    pub spacy: PipelineTokens,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmatizeResponse {
    pub original: Vec<String>,
    pub nltk_lemmas: Vec<String>,
    pub spacy_lemmas: Vec<String>,
    pub nltk_pairs: Vec<LemmaPair>,
    pub spacy_pairs: Vec<LemmaPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemRow {
    pub original: String,
    pub porter: String,
    pub lancaster: String,
    pub snowball: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemResponse {
    pub original: Vec<String>,
    pub porter_stems: Vec<String>,
    pub lancaster_stems: Vec<String>,
    pub snowball_stems: Vec<String>,
    pub comparison: Vec<StemRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicTag {
    pub text: String,
    pub pos: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineTag {
    pub text: String,
    pub pos: String,
    pub tag: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTagResponse {
    pub nltk: Vec<ClassicTag>,
    pub spacy: Vec<PipelineTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicEntity {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEntity {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub explanation: Option<String>,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NerResponse {
    pub nltk: Vec<ClassicEntity>,
    pub spacy: Vec<PipelineEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessAllResponse {
    pub tokenization: TokenizeResponse,
    pub lemmatization: LemmatizeResponse,
    pub stemming: StemResponse,
    pub pos_tagging: PosTagResponse,
    pub ner: NerResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engines {
    pub nltk: String,
    pub spacy: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub description: String,
    pub version: String,
    pub endpoints: Vec<String>,
    pub usage: String,
    pub engines: Engines,
    pub ready: bool,
}
