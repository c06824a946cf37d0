use std::sync::Arc;

use serde_json::json;

use lexis::client::mock::MockProcessor;
use lexis::client::{Operation, Processor, Session, one_shot, render};
use lexis::consts::SAMPLE_TEXT;
use lexis::service::Service;
use lexis::text::Lexicon;

#[tokio::test]
async fn renders_scripted_stem_response() {
    let reply = json!({
        "original": ["running", "runs"],
        "porter_stems": ["run", "run"],
        "lancaster_stems": ["run", "run"],
        "snowball_stems": ["run", "run"],
        "comparison": [
            {"original": "running", "porter": "run", "lancaster": "run", "snowball": "run"},
            {"original": "runs", "porter": "run", "lancaster": "run", "snowball": "run"}
        ]
    });
    let session = Session::new(Box::new(MockProcessor::new(vec![Ok(reply)])));
    let out = session.call(Operation::Stem, "running runs").await.unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("word"));
    assert!(lines[2].starts_with("running"));
}

#[tokio::test]
async fn failed_call_keeps_the_detail() {
    let processor = MockProcessor::new(vec![Err("text must not be empty (422)".into())]);
    let session = Session::new(Box::new(processor));
    let err = session.call(Operation::Ner, "x").await.unwrap_err();
    assert_eq!(err.to_string(), "text must not be empty (422)");
}

#[tokio::test]
async fn blank_input_sends_previous_text() {
    let reply = json!({"nltk": [], "spacy": []});
    let processor = Arc::new(MockProcessor::new(vec![Ok(reply.clone()), Ok(reply)]));

    struct Shared(Arc<MockProcessor>);

    #[async_trait::async_trait]
    impl Processor for Shared {
        async fn process(&self, op: Operation, text: &str) -> anyhow::Result<serde_json::Value> {
            self.0.process(op, text).await
        }
    }

    let mut session = Session::new(Box::new(Shared(processor.clone())));
    let first = session.resolve_text("").unwrap();
    let out = session.call(Operation::Ner, &first).await.unwrap();
    assert!(out.contains("(none found)"));

    let typed = session.resolve_text("Ram lives in Patan.").unwrap();
    session.call(Operation::Ner, &typed).await.unwrap();

    let calls = processor.calls();
    assert_eq!(calls[0], (Operation::Ner, SAMPLE_TEXT.to_string()));
    assert_eq!(calls[1], (Operation::Ner, "Ram lives in Patan.".to_string()));
}

#[tokio::test]
async fn one_shot_surfaces_errors() {
    let processor = MockProcessor::new(vec![Err("could not reach http://localhost:8000".into())]);
    let err = one_shot(&processor, Operation::Tokenize, None, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("could not reach"));
    assert_eq!(processor.calls()[0].1, SAMPLE_TEXT);
}

#[test]
fn process_all_renders_five_sections() {
    let service = Service::with_lexicon(Arc::new(Lexicon::from_words(["develop", "new"])));
    let resp = service
        .process_all("Dr. Ram developed a new algorithm at Kathmandu University.")
        .unwrap();
    let value = serde_json::to_value(&resp).unwrap();
    let out = render::render(Operation::ProcessAll, &value).unwrap();
    for title in [
        "== Tokenization ==",
        "== Lemmatization ==",
        "== Stemming ==",
        "== POS tagging ==",
        "== Named entities ==",
    ] {
        assert!(out.contains(title), "missing {title}");
    }
    assert!(out.contains("Kathmandu University [ORG] 37..57"));
}
