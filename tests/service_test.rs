use std::sync::Arc;

use lexis::consts::SAMPLE_TEXT;
use lexis::service::Service;
use lexis::text::Lexicon;

const REFERENCE: &str = "Dr. Ram developed a new algorithm at Kathmandu University.";

fn service() -> Service {
    let words = [
        "run", "develop", "algorithm", "new", "university", "computer", "help", "language",
        "human", "understand", "manipulate", "interpret", "goal", "bridge", "gap", "process",
        "communication", "walk", "child", "be", "have",
    ];
    Service::with_lexicon(Arc::new(Lexicon::from_words(words)))
}

#[test]
fn every_engine_finds_sentences_and_tokens() {
    let service = service();
    for text in [REFERENCE, SAMPLE_TEXT, "hello", "Is it 10:30 yet?"] {
        let resp = service.tokenize(text).unwrap();
        assert!(!resp.nltk.sentences.is_empty(), "{text}");
        assert!(!resp.nltk.words.is_empty(), "{text}");
        assert!(!resp.spacy.sentences.is_empty(), "{text}");
        assert!(!resp.spacy.tokens.is_empty(), "{text}");
    }
}

#[test]
fn reference_sentence() {
    let service = service();
    let tokens = service.tokenize(REFERENCE).unwrap();
    assert_eq!(tokens.nltk.sentences.len(), 1);
    assert_eq!(tokens.spacy.sentences.len(), 1);
    for words in [&tokens.nltk.words, &tokens.spacy.tokens] {
        assert!(words.iter().any(|w| w == "Kathmandu"));
        assert!(words.iter().any(|w| w == "University"));
    }

    let ner = service.ner(REFERENCE).unwrap();
    let org = ner
        .spacy
        .iter()
        .find(|e| e.kind == "ORG")
        .expect("an ORG entity");
    assert_eq!(org.text, "Kathmandu University");
    assert_eq!((org.start, org.end), (37, 57));
}

#[test]
fn entity_offsets_slice_the_request_text() {
    let service = service();
    let text = "Café owners in Kathmandu met Google on 5 March 2024.";
    let chars: Vec<char> = text.chars().collect();
    for entity in service.ner(text).unwrap().spacy {
        assert!(entity.start < entity.end);
        assert!(entity.end <= chars.len());
        let slice: String = chars[entity.start..entity.end].iter().collect();
        assert_eq!(slice, entity.text);
    }
}

#[test]
fn stem_rows_are_aligned() {
    let resp = service().stem(SAMPLE_TEXT).unwrap();
    assert_eq!(resp.comparison.len(), resp.original.len());
    assert_eq!(resp.porter_stems.len(), resp.original.len());
    assert_eq!(resp.lancaster_stems.len(), resp.original.len());
    assert_eq!(resp.snowball_stems.len(), resp.original.len());
    for (i, row) in resp.comparison.iter().enumerate() {
        assert_eq!(row.original, resp.original[i]);
        assert_eq!(row.porter, resp.porter_stems[i]);
        assert_eq!(row.lancaster, resp.lancaster_stems[i]);
        assert_eq!(row.snowball, resp.snowball_stems[i]);
    }
}

#[test]
fn running_runs_ran() {
    let resp = service().stem("running runs ran").unwrap();
    assert_eq!(resp.original, vec!["running", "runs", "ran"]);
    assert_eq!(resp.lancaster_stems[0], resp.lancaster_stems[1]);
    assert_eq!(resp.snowball_stems[2], "ran");
}

#[test]
fn lemma_pairs_only_hold_changes() {
    let service = service();
    let resp = service.lemmatize(SAMPLE_TEXT).unwrap();
    assert_eq!(resp.nltk_lemmas.len(), resp.original.len());
    assert!(resp.nltk_pairs.iter().all(|p| p.original != p.lemma));
    assert!(resp.spacy_pairs.iter().all(|p| p.original != p.lemma));

    // Every changed position is listed, in order, and nothing else is.
    let classic_changes: Vec<(&str, &str)> = resp
        .original
        .iter()
        .zip(&resp.nltk_lemmas)
        .filter(|(original, lemma)| original != lemma)
        .map(|(original, lemma)| (original.as_str(), lemma.as_str()))
        .collect();
    let classic_pairs: Vec<(&str, &str)> = resp
        .nltk_pairs
        .iter()
        .map(|p| (p.original.as_str(), p.lemma.as_str()))
        .collect();
    assert_eq!(classic_pairs, classic_changes);

    let pipeline_tokens = service.tokenize(SAMPLE_TEXT).unwrap().spacy.tokens;
    assert_eq!(resp.spacy_lemmas.len(), pipeline_tokens.len());
    let pipeline_changes: Vec<(&str, &str)> = pipeline_tokens
        .iter()
        .zip(&resp.spacy_lemmas)
        .filter(|(original, lemma)| original != lemma)
        .map(|(original, lemma)| (original.as_str(), lemma.as_str()))
        .collect();
    let pipeline_pairs: Vec<(&str, &str)> = resp
        .spacy_pairs
        .iter()
        .map(|p| (p.original.as_str(), p.lemma.as_str()))
        .collect();
    assert_eq!(pipeline_pairs, pipeline_changes);

    // Unchanged tokens still appear in the full sequences.
    for (original, lemma) in resp.original.iter().zip(&resp.nltk_lemmas) {
        if original == lemma {
            assert!(resp.nltk_pairs.iter().all(|p| &p.original != original), "{original}");
        }
    }
    for (original, lemma) in pipeline_tokens.iter().zip(&resp.spacy_lemmas) {
        if original == lemma {
            assert!(resp.spacy_pairs.iter().all(|p| &p.original != original), "{original}");
        }
    }
}

#[test]
fn pipeline_tags_carry_explanations() {
    let resp = service().pos_tag(REFERENCE).unwrap();
    assert!(!resp.nltk.is_empty());
    let ram = resp.spacy.iter().find(|t| t.text == "Ram").unwrap();
    assert_eq!(ram.pos, "PROPN");
    assert_eq!(ram.tag, "NNP");
    assert_eq!(ram.explanation.as_deref(), Some("noun, proper singular"));
}

#[test]
fn process_all_equals_individual_calls() {
    let service = service();
    let all = service.process_all(SAMPLE_TEXT).unwrap();
    assert_eq!(all.tokenization, service.tokenize(SAMPLE_TEXT).unwrap());
    assert_eq!(all.lemmatization, service.lemmatize(SAMPLE_TEXT).unwrap());
    assert_eq!(all.stemming, service.stem(SAMPLE_TEXT).unwrap());
    assert_eq!(all.pos_tagging, service.pos_tag(SAMPLE_TEXT).unwrap());
    assert_eq!(all.ner, service.ner(SAMPLE_TEXT).unwrap());
}

#[test]
fn root_metadata() {
    let root = service().root(true);
    assert_eq!(root.message, "NLP Preprocessing API");
    assert_eq!(root.engines.nltk, "classic");
    assert_eq!(root.engines.spacy, "pipeline");
    assert!(root.endpoints.contains(&"/process-all".to_string()));
}
