use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use anyhow::{Result, bail};

use lexis::backend::{Backend, Entity, LemmaPair, TaggedToken, Tokenization};
use lexis::error::ErrorBody;
use lexis::server::{AppState, configure, json_config};
use lexis::service::Service;
use lexis::service::schema::{NerResponse, ProcessAllResponse, TextRequest, TokenizeResponse};
use lexis::text::Lexicon;

const REFERENCE: &str = "Dr. Ram developed a new algorithm at Kathmandu University.";

/// A backend whose every operation fails.
struct Broken;

impl Backend for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }
    fn tokenize(&self, _text: &str) -> Result<Tokenization> {
        bail!("tokenizer unavailable")
    }
    fn lemmatize(&self, _text: &str) -> Result<Vec<LemmaPair>> {
        bail!("lemmatizer unavailable")
    }
    fn tag(&self, _text: &str) -> Result<Vec<TaggedToken>> {
        bail!("tagger unavailable")
    }
    fn entities(&self, _text: &str) -> Result<Vec<Entity>> {
        bail!("recognizer unavailable")
    }
}

fn working() -> Arc<Service> {
    let lexicon = Lexicon::from_words(["develop", "algorithm", "new", "university"]);
    Arc::new(Service::with_lexicon(Arc::new(lexicon)))
}

macro_rules! app {
    ($service:expr) => {
        App::new()
            .app_data(web::Data::new(AppState::new($service)))
            .app_data(json_config(64 * 1024))
            .configure(configure)
    };
}

#[actix_web::test]
async fn tokenize_route() {
    let app = test::init_service(app!(working())).await;
    let req = test::TestRequest::post()
        .uri("/tokenize")
        .set_json(TextRequest::new(REFERENCE))
        .to_request();
    let body: TokenizeResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.nltk.sentences, vec![REFERENCE]);
    assert_eq!(body.spacy.sentences, vec![REFERENCE]);
}

#[actix_web::test]
async fn ner_route_reports_char_offsets() {
    let app = test::init_service(app!(working())).await;
    let req = test::TestRequest::post()
        .uri("/ner")
        .set_json(TextRequest::new(REFERENCE))
        .to_request();
    let body: NerResponse = test::call_and_read_body_json(&app, req).await;
    let org = body.spacy.iter().find(|e| e.kind == "ORG").unwrap();
    assert_eq!((org.start, org.end), (37, 57));
}

#[actix_web::test]
async fn process_all_route_has_five_sections() {
    let app = test::init_service(app!(working())).await;
    let req = test::TestRequest::post()
        .uri("/process-all")
        .set_json(TextRequest::new(REFERENCE))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    for key in ["tokenization", "lemmatization", "stemming", "pos_tagging", "ner"] {
        assert!(body.get(key).is_some(), "missing {key}");
    }
    let typed: ProcessAllResponse = serde_json::from_value(body).unwrap();
    assert_eq!(typed.stemming.comparison.len(), typed.stemming.original.len());
}

#[actix_web::test]
async fn empty_text_is_unprocessable() {
    let app = test::init_service(app!(working())).await;
    let req = test::TestRequest::post()
        .uri("/stem")
        .set_json(TextRequest::new("   "))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.detail, "text must not be empty");
}

#[actix_web::test]
async fn missing_text_field_is_unprocessable() {
    let app = test::init_service(app!(working())).await;
    let req = test::TestRequest::post()
        .uri("/lemmatize")
        .set_json(serde_json::json!({"body": "hello"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert!(!body.detail.is_empty());
}

#[actix_web::test]
async fn malformed_json_is_unprocessable() {
    let app = test::init_service(app!(working())).await;
    let req = test::TestRequest::post()
        .uri("/pos-tag")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"text\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn backend_failure_is_a_server_error() {
    let service = Arc::new(Service::new(Arc::new(Broken), Arc::new(Broken)));
    let app = test::init_service(app!(service)).await;
    let req = test::TestRequest::post()
        .uri("/tokenize")
        .set_json(TextRequest::new("hello"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.detail, "processing failed: tokenizer unavailable");
}

#[actix_web::test]
async fn root_lists_endpoints_and_engines() {
    let app = test::init_service(app!(working())).await;
    let req = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["engines"]["nltk"], "classic");
    assert_eq!(body["engines"]["spacy"], "pipeline");
    assert_eq!(body["ready"], true);
    assert_eq!(body["endpoints"].as_array().map(Vec::len), Some(6));
}
