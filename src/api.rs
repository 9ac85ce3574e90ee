use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::analysis::Ticker;
use crate::config::AppConfig;
use crate::llm::ModelClient;
use crate::services::pipeline::Pipeline;
use crate::views;

/// Shared, read-only for the life of the process. Runs own their results.
pub struct AppState {
    pub pipeline: Pipeline,
    pub llm: Arc<dyn ModelClient>,
    pub config: AppConfig,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze_form))
        .route("/api/analyze", post(analyze_json))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) -> std::io::Result<()> {
    let addr = state.config.server.bind_addr();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API Server listening on {}", addr);
    axum::serve(listener, app).await
}

#[derive(Deserialize)]
pub struct AnalyzeParams {
    #[serde(default)]
    pub ticker: String,
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let ui = &state.config.ui;
    Html(views::page(ui, &ui.default_ticker, ""))
}

async fn analyze_form(
    State(state): State<Arc<AppState>>,
    Form(params): Form<AnalyzeParams>,
) -> Html<String> {
    let ui = &state.config.ui;

    let Some(ticker) = Ticker::parse(&params.ticker) else {
        return Html(views::page(ui, &params.ticker, ""));
    };

    info!("📨 [API] Analysis requested for {}", ticker);
    let report = state.pipeline.run(&ticker, state.llm.as_ref()).await;
    let body = views::report(&state.pipeline, &report);

    Html(views::page(ui, ticker.as_str(), &body))
}

async fn analyze_json(
    State(state): State<Arc<AppState>>,
    Json(params): Json<AnalyzeParams>,
) -> impl IntoResponse {
    let Some(ticker) = Ticker::parse(&params.ticker) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "error", "message": "ticker must not be empty"})),
        )
            .into_response();
    };

    info!("📨 [API] JSON analysis requested for {}", ticker);
    let report = state.pipeline.run(&ticker, state.llm.as_ref()).await;

    let status = if report.is_complete() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, Json(report)).into_response()
}

async fn health() -> &'static str {
    "OK"
}
