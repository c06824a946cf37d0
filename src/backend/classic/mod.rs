mod chunker;
mod lemmatizer;
mod splitter;
mod treebank;

use std::sync::Arc;

use anyhow::Result;

use super::{Backend, Entity, LemmaPair, TaggedToken, Tokenization};
use crate::text::{Lexicon, tagger};

pub use chunker::{ChunkNode, chunk, flatten};
pub use lemmatizer::Lemmatizer;

/// Engine A: sentence splitter, Treebank tokens, Penn tags, dictionary
/// lemmas and chunk-tree entities.
pub struct ClassicBackend {
    lemmatizer: Lemmatizer,
}

impl ClassicBackend {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lemmatizer: Lemmatizer::new(lexicon),
        }
    }

    /// Sentence texts, each with its word tokens.
    fn sentences<'t>(&self, text: &'t str) -> Vec<(&'t str, Vec<String>)> {
        splitter::split(text)
            .into_iter()
            .map(|sentence| (sentence, treebank::tokenize(sentence)))
            .collect()
    }

    /// Tags each sentence separately so that sentence-initial capitals are
    /// not mistaken for proper nouns.
    fn tagged(&self, text: &str) -> Vec<TaggedToken> {
        self.sentences(text)
            .into_iter()
            .flat_map(|(_, words)| {
                let tags = tagger::tag(&words);
                words
                    .into_iter()
                    .zip(tags)
                    .map(|(word, tag)| TaggedToken::new(word, tag))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl Backend for ClassicBackend {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn tokenize(&self, text: &str) -> Result<Tokenization> {
        let mut out = Tokenization::default();
        for (sentence, words) in self.sentences(text) {
            out.sentences.push(sentence.to_string());
            out.tokens.extend(words);
        }
        Ok(out)
    }

    fn lemmatize(&self, text: &str) -> Result<Vec<LemmaPair>> {
        Ok(self
            .tagged(text)
            .into_iter()
            .map(|token| LemmaPair {
                lemma: self.lemmatizer.lemmatize(&token.text, &token.tag),
                original: token.text,
            })
            .collect())
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        Ok(self.tagged(text))
    }

    fn entities(&self, text: &str) -> Result<Vec<Entity>> {
        Ok(flatten(&chunk(&self.tagged(text))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "Dr. Ram developed a new algorithm at Kathmandu University.";

    fn backend() -> ClassicBackend {
        let lexicon = Lexicon::from_words(["develop", "algorithm", "new", "run", "study"]);
        ClassicBackend::new(Arc::new(lexicon))
    }

    #[test]
    fn reference_sentence_tokens() {
        let out = backend().tokenize(REFERENCE).unwrap();
        assert_eq!(out.sentences, vec![REFERENCE]);
        assert_eq!(out.tokens.len(), 10);
        assert!(out.tokens.contains(&"Kathmandu".to_string()));
        assert!(out.tokens.contains(&"University".to_string()));
    }

    #[test]
    fn lemmas_align_with_tokens() {
        let b = backend();
        let tokens = b.tokenize(REFERENCE).unwrap().tokens;
        let pairs = b.lemmatize(REFERENCE).unwrap();
        let originals: Vec<String> = pairs.iter().map(|p| p.original.clone()).collect();
        assert_eq!(originals, tokens);
        assert_eq!(pairs[2].lemma, "develop");
    }

    #[test]
    fn tags_carry_no_universal_pos() {
        let tagged = backend().tag("They want food.").unwrap();
        assert_eq!(tagged.len(), 4);
        assert!(tagged.iter().all(|t| t.pos.is_none()));
        assert_eq!(tagged[1].tag, "VBP");
    }

    #[test]
    fn reference_entities() {
        let labels: Vec<(String, String)> = backend()
            .entities(REFERENCE)
            .unwrap()
            .into_iter()
            .map(|e| (e.text, e.label))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Ram".to_string(), "PERSON".to_string()),
                ("Kathmandu University".to_string(), "ORGANIZATION".to_string()),
            ]
        );
    }

    #[test]
    fn multi_sentence_tagging_restarts_each_sentence() {
        let tagged = backend().tag("It works. They want food.").unwrap();
        let they = tagged.iter().find(|t| t.text == "They").unwrap();
        assert_eq!(they.tag, "PRP");
    }
}
