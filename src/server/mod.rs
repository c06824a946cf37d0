//! HTTP surface: one POST route per operation plus `GET /` metadata.

use std::sync::Arc;

use actix_web::{App, HttpResponse, HttpServer, get, middleware, post, web};
use anyhow::{Context, anyhow};
use log::{error, info, warn};
use serde::Serialize;

use crate::config::Settings;
use crate::error::ApiError;
use crate::resources::Bootstrap;
use crate::service::Service;
use crate::service::schema::TextRequest;

/// Shared per-worker state.
pub struct AppState {
    pub service: Arc<Service>,
    pub ready: bool,
}

impl AppState {
    pub fn new(service: Arc<Service>) -> Self {
        Self {
            service,
            ready: true,
        }
    }
}

/// Register every route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(tokenize)
        .service(lemmatize)
        .service(stem)
        .service(pos_tag)
        .service(ner)
        .service(process_all);
}

/// JSON extractor settings. Oversize, malformed or mistyped bodies are
/// reported as invalid input.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            warn!("rejected body for {}: {err}", req.path());
            ApiError::InvalidInput(format!("invalid request body: {err}")).into()
        })
}

/// Bootstrap resources, then bind and serve until shutdown.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let bootstrap = Bootstrap::new(&settings.resources);
    let service = bootstrap
        .service()
        .await
        .context("resource bootstrap failed")?;
    let state = web::Data::new(AppState {
        service,
        ready: bootstrap.is_ready(),
    });

    let limit = settings.server.max_body_bytes;
    let address = settings.bind_address();
    info!("listening on http://{address}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(json_config(limit))
            .configure(configure)
    })
    .bind(&address)
    .with_context(|| format!("failed to bind {address}"))?
    .run()
    .await
    .context("server stopped with an error")
}

#[get("/")]
async fn root(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.service.root(state.ready))
}

#[post("/tokenize")]
async fn tokenize(
    state: web::Data<AppState>,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&state, body, "tokenize", Service::tokenize).await
}

#[post("/lemmatize")]
async fn lemmatize(
    state: web::Data<AppState>,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&state, body, "lemmatize", Service::lemmatize).await
}

#[post("/stem")]
async fn stem(
    state: web::Data<AppState>,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&state, body, "stem", Service::stem).await
}

#[post("/pos-tag")]
async fn pos_tag(
    state: web::Data<AppState>,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&state, body, "pos-tag", Service::pos_tag).await
}

#[post("/ner")]
async fn ner(
    state: web::Data<AppState>,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&state, body, "ner", Service::ner).await
}

#[post("/process-all")]
async fn process_all(
    state: web::Data<AppState>,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&state, body, "process-all", Service::process_all).await
}

/// Validate the request, then run `op` on the blocking pool.
async fn run<T, F>(
    state: &AppState,
    body: web::Json<TextRequest>,
    name: &'static str,
    op: F,
) -> Result<HttpResponse, ApiError>
where
    T: Serialize + Send + 'static,
    F: FnOnce(&Service, &str) -> anyhow::Result<T> + Send + 'static,
{
    let text = match body.validated() {
        Ok(text) => text.to_string(),
        Err(e) => {
            warn!("{name}: {e}");
            return Err(e);
        }
    };
    let service = state.service.clone();
    let result = web::block(move || op(&service, &text))
        .await
        .map_err(|e| anyhow!("worker pool unavailable: {e}"))?;
    match result {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!("{name} failed: {e:#}");
            Err(ApiError::Engine(e))
        }
    }
}
