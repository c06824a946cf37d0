//! The six preprocessing operations, each running both backends and
//! shaping their output into the wire schema.

pub mod schema;

use std::sync::Arc;

use anyhow::Result;
use log::{debug, warn};

use crate::backend::{Backend, ClassicBackend, Entity, PipelineBackend, Span};
use crate::consts::{API_DESCRIPTION, API_TITLE, API_VERSION, ENDPOINTS, USAGE_HINT};
use crate::stem::{StemmerKind, stem_all};
use crate::text::{Lexicon, glossary};

use schema::*;

/// Stateless facade over the two backends. Cheap to share behind an `Arc`.
pub struct Service {
    classic: Arc<dyn Backend>,
    pipeline: Arc<dyn Backend>,
}

impl Service {
    pub fn new(classic: Arc<dyn Backend>, pipeline: Arc<dyn Backend>) -> Self {
        Self { classic, pipeline }
    }

    /// Both built-in backends over one shared lexicon.
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self::new(
            Arc::new(ClassicBackend::new(lexicon.clone())),
            Arc::new(PipelineBackend::new(lexicon)),
        )
    }

    pub fn engines(&self) -> Engines {
        Engines {
            nltk: self.classic.name().to_string(),
            spacy: self.pipeline.name().to_string(),
        }
    }

    pub fn root(&self, ready: bool) -> RootResponse {
        RootResponse {
            message: API_TITLE.to_string(),
            description: API_DESCRIPTION.to_string(),
            version: API_VERSION.to_string(),
            endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
            usage: USAGE_HINT.to_string(),
            engines: self.engines(),
            ready,
        }
    }

    pub fn tokenize(&self, text: &str) -> Result<TokenizeResponse> {
        debug!("tokenize: {} chars", text.chars().count());
        let classic = self.classic.tokenize(text)?;
        let pipeline = self.pipeline.tokenize(text)?;
        Ok(TokenizeResponse {
            nltk: ClassicTokens {
                sentences: classic.sentences,
                words: classic.tokens,
            },
            spacy: PipelineTokens {
                sentences: pipeline.sentences,
                tokens: pipeline.tokens,
            },
        })
    }

    pub fn lemmatize(&self, text: &str) -> Result<LemmatizeResponse> {
        debug!("lemmatize: {} chars", text.chars().count());
        let classic = self.classic.lemmatize(text)?;
        let pipeline = self.pipeline.lemmatize(text)?;
        Ok(LemmatizeResponse {
            original: classic.iter().map(|p| p.original.clone()).collect(),
            nltk_lemmas: classic.iter().map(|p| p.lemma.clone()).collect(),
            spacy_lemmas: pipeline.iter().map(|p| p.lemma.clone()).collect(),
            nltk_pairs: classic.into_iter().filter(|p| p.changed()).collect(),
            spacy_pairs: pipeline.into_iter().filter(|p| p.changed()).collect(),
        })
    }

    /// Stems the classic word tokens. Stemmers are built fresh per call.
    pub fn stem(&self, text: &str) -> Result<StemResponse> {
        debug!("stem: {} chars", text.chars().count());
        let words = self.classic.tokenize(text)?.tokens;
        let [porter, lancaster, snowball] =
            StemmerKind::ALL.map(|kind| stem_all(kind.build().as_ref(), &words));

        let comparison = words
            .iter()
            .zip(&porter)
            .zip(&lancaster)
            .zip(&snowball)
            .map(|(((original, p), l), s)| StemRow {
                original: original.clone(),
                porter: p.clone(),
                lancaster: l.clone(),
                snowball: s.clone(),
            })
            .collect();

        Ok(StemResponse {
            original: words,
            porter_stems: porter,
            lancaster_stems: lancaster,
            snowball_stems: snowball,
            comparison,
        })
    }

    pub fn pos_tag(&self, text: &str) -> Result<PosTagResponse> {
        debug!("pos-tag: {} chars", text.chars().count());
        let classic = self.classic.tag(text)?;
        let pipeline = self.pipeline.tag(text)?;
        Ok(PosTagResponse {
            nltk: classic
                .into_iter()
                .map(|t| ClassicTag {
                    text: t.text,
                    pos: t.tag,
                })
                .collect(),
            spacy: pipeline
                .into_iter()
                .map(|t| PipelineTag {
                    explanation: glossary::explain(&t.tag).map(str::to_string),
                    pos: t.pos.unwrap_or_else(|| glossary::penn_to_universal(&t.tag).to_string()),
                    tag: t.tag,
                    text: t.text,
                })
                .collect(),
        })
    }

    pub fn ner(&self, text: &str) -> Result<NerResponse> {
        debug!("ner: {} chars", text.chars().count());
        let classic = self.classic.entities(text)?;
        let pipeline = self.pipeline.entities(text)?;
        Ok(NerResponse {
            nltk: classic
                .into_iter()
                .map(|e| ClassicEntity {
                    text: e.text,
                    kind: e.label,
                })
                .collect(),
            spacy: with_offsets(text, pipeline),
        })
    }

    /// Runs the five operations one after another; the first failure wins.
    pub fn process_all(&self, text: &str) -> Result<ProcessAllResponse> {
        Ok(ProcessAllResponse {
            tokenization: self.tokenize(text)?,
            lemmatization: self.lemmatize(text)?,
            stemming: self.stem(text)?,
            pos_tagging: self.pos_tag(text)?,
            ner: self.ner(text)?,
        })
    }
}

/// Attach explanations and character offsets. Entities a backend returned
/// without a span are located in the text after the previous entity; one
/// that cannot be found is dropped.
fn with_offsets(text: &str, entities: Vec<Entity>) -> Vec<PipelineEntity> {
    let mut searched_from = 0;
    entities
        .into_iter()
        .filter_map(|entity| {
            let span = match entity.span {
                Some(span) => span,
                None => match locate(text, &entity.text, searched_from) {
                    Some(span) => span,
                    None => {
                        warn!("entity {:?} not found in request text", entity.text);
                        return None;
                    }
                },
            };
            searched_from = span.end;
            Some(PipelineEntity {
                explanation: glossary::explain(&entity.label).map(str::to_string),
                kind: entity.label,
                text: entity.text,
                start: span.start,
                end: span.end,
            })
        })
        .collect()
}

/// Character span of the first occurrence of `needle` at or after character
/// offset `from`.
fn locate(text: &str, needle: &str, from: usize) -> Option<Span> {
    if needle.is_empty() {
        return None;
    }
    let byte_from = text.char_indices().nth(from).map_or(text.len(), |(b, _)| b);
    let found = text[byte_from..].find(needle)? + byte_from;
    let start = text[..found].chars().count();
    Some(Span {
        start,
        end: start + needle.chars().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_counts_characters() {
        let text = "Caf\u{e9} in Kathmandu and Kathmandu";
        assert_eq!(locate(text, "Kathmandu", 0), Some(Span { start: 8, end: 17 }));
        assert_eq!(locate(text, "Kathmandu", 17), Some(Span { start: 22, end: 31 }));
        assert_eq!(locate(text, "Pokhara", 0), None);
        assert_eq!(locate(text, "", 0), None);
    }

    #[test]
    fn offsets_fill_missing_spans() {
        let text = "Sita met Sita.";
        let entities = vec![
            Entity { text: "Sita".into(), label: "PERSON".into(), span: None },
            Entity { text: "Sita".into(), label: "PERSON".into(), span: None },
            Entity { text: "Gita".into(), label: "PERSON".into(), span: None },
        ];
        let shaped = with_offsets(text, entities);
        assert_eq!(shaped.len(), 2);
        assert_eq!((shaped[0].start, shaped[0].end), (0, 4));
        assert_eq!((shaped[1].start, shaped[1].end), (9, 13));
        assert_eq!(
            shaped[0].explanation.as_deref(),
            Some("People, including fictional")
        );
    }
}
