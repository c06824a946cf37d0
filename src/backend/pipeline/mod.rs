mod doc;
mod lemmatizer;
mod ner;
mod sentences;
mod tagging;
mod tokenizer;

use std::sync::Arc;

use anyhow::Result;

use super::{Backend, Entity, LemmaPair, Span, TaggedToken, Tokenization};
use crate::text::Lexicon;

pub use doc::{Doc, DocEntity, Token};
pub use lemmatizer::Lemmatizer;

/// Engine B: one annotated [`Doc`] per call, from which every operation
/// reads its view.
pub struct PipelineBackend {
    lemmatizer: Lemmatizer,
}

impl PipelineBackend {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lemmatizer: Lemmatizer::new(lexicon),
        }
    }

    /// Tokenize, segment, tag, lemmatize and recognise entities.
    pub fn analyze<'t>(&self, text: &'t str) -> Doc<'t> {
        let tokens = tokenizer::tokenize(text);
        let sentences = sentences::segment(text, &tokens);
        let mut doc = Doc {
            text,
            tokens,
            sentences,
            entities: Vec::new(),
        };
        tagging::annotate(&mut doc);
        for i in 0..doc.tokens.len() {
            let lemma = self.lemmatizer.lemma(&doc.tokens[i]);
            doc.tokens[i].lemma = lemma;
        }
        doc.entities = ner::recognize(&doc);
        doc
    }
}

impl Backend for PipelineBackend {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn tokenize(&self, text: &str) -> Result<Tokenization> {
        let doc = self.analyze(text);
        Ok(Tokenization {
            sentences: doc.sentence_texts().into_iter().map(str::to_string).collect(),
            tokens: doc.tokens.into_iter().map(|t| t.text).collect(),
        })
    }

    fn lemmatize(&self, text: &str) -> Result<Vec<LemmaPair>> {
        Ok(self
            .analyze(text)
            .tokens
            .into_iter()
            .map(|t| LemmaPair {
                original: t.text,
                lemma: t.lemma,
            })
            .collect())
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        Ok(self
            .analyze(text)
            .tokens
            .into_iter()
            .map(|t| TaggedToken::new(t.text, t.tag).with_pos(t.pos))
            .collect())
    }

    fn entities(&self, text: &str) -> Result<Vec<Entity>> {
        let doc = self.analyze(text);
        Ok(doc
            .entities
            .iter()
            .map(|entity| {
                let (chars, source) = ner::resolve(&doc, entity);
                Entity {
                    text: source.to_string(),
                    label: entity.label.to_string(),
                    span: Some(Span {
                        start: chars.start,
                        end: chars.end,
                    }),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "Dr. Ram developed a new algorithm at Kathmandu University.";

    fn backend() -> PipelineBackend {
        let lexicon = Lexicon::from_words(["develop", "algorithm", "new", "run", "study"]);
        PipelineBackend::new(Arc::new(lexicon))
    }

    fn entities(text: &str) -> Vec<(String, String)> {
        backend()
            .entities(text)
            .unwrap()
            .into_iter()
            .map(|e| (e.text, e.label))
            .collect()
    }

    fn pair(text: &str, label: &str) -> (String, String) {
        (text.to_string(), label.to_string())
    }

    #[test]
    fn reference_sentence() {
        let b = backend();
        let out = b.tokenize(REFERENCE).unwrap();
        assert_eq!(out.sentences, vec![REFERENCE]);
        assert_eq!(out.tokens.len(), 10);

        let found = b.entities(REFERENCE).unwrap();
        let org = found.iter().find(|e| e.label == "ORG").unwrap();
        assert_eq!(org.text, "Kathmandu University");
        assert_eq!(org.span, Some(Span { start: 37, end: 57 }));
        assert!(found.iter().any(|e| e.text == "Ram" && e.label == "PERSON"));
    }

    #[test]
    fn spans_slice_the_original_text() {
        let text =
            "Caf\u{e9} owners in Kathmandu earned $5 million, about 20% more, on March 3, 2024.";
        let chars: Vec<char> = text.chars().collect();
        let found = backend().entities(text).unwrap();
        assert!(!found.is_empty());
        for entity in found {
            let span = entity.span.unwrap();
            assert!(span.start < span.end && span.end <= chars.len());
            let slice: String = chars[span.start..span.end].iter().collect();
            assert_eq!(slice, entity.text);
        }
    }

    #[test]
    fn numeric_and_temporal_expressions() {
        assert_eq!(
            entities("They paid $5 million for 20% on March 3, 2024."),
            vec![pair("$5 million", "MONEY"), pair("20%", "PERCENT"), pair("March 3, 2024", "DATE")]
        );
        assert_eq!(
            entities("The first two runs ended at 10:30 pm on Friday."),
            vec![
                pair("first", "ORDINAL"),
                pair("two", "CARDINAL"),
                pair("10:30 pm", "TIME"),
                pair("Friday", "DATE"),
            ]
        );
    }

    #[test]
    fn proper_noun_labels() {
        assert_eq!(
            entities("Nepali engineers from Google visited the Himalayas with Sita."),
            vec![
                pair("Nepali", "NORP"),
                pair("Google", "ORG"),
                pair("Himalayas", "LOC"),
                pair("Sita", "PERSON"),
            ]
        );
    }

    #[test]
    fn lemmas_and_tags_align_with_tokens() {
        let b = backend();
        let tokens = b.tokenize("The studies were running late.").unwrap().tokens;
        let lemmas = b.lemmatize("The studies were running late.").unwrap();
        let tagged = b.tag("The studies were running late.").unwrap();
        assert_eq!(lemmas.len(), tokens.len());
        assert_eq!(tagged.len(), tokens.len());
        assert_eq!(lemmas[0].lemma, "the");
        assert_eq!(lemmas[1].lemma, "study");
        assert_eq!(lemmas[2].lemma, "be");
        assert_eq!(lemmas[3].lemma, "run");
        assert!(tagged.iter().all(|t| t.pos.is_some()));
    }
}
