//! HTTP gateway (Axum) for CV ranking.
//!
//! This module is primarily used by the `cvrank` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{parse_rank_request, rank_handler};
pub use state::HandlerState;

use crate::constants::{
    CVRANK_STATUS_ERROR, CVRANK_STATUS_HEADER, CVRANK_STATUS_HEALTHY, CVRANK_STATUS_READY,
};
use crate::embedding::SentenceEncoder;

pub fn create_router(state: HandlerState) -> Router {
    Router::new()
        .route("/", post(rank_handler))
        .route("/v1/rank", post(rank_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub embedding: &'static str,
    pub embedder_mode: &'static str,
    pub translator_mode: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        CVRANK_STATUS_HEADER,
        HeaderValue::from_static(CVRANK_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

/// Embeds a short text and checks the output has the advertised dimension.
pub fn embedding_status(encoder: &SentenceEncoder) -> &'static str {
    match encoder.embed("readiness check") {
        Ok(embedding) if embedding.len() == encoder.embedding_dim() => CVRANK_STATUS_READY,
        Ok(embedding) => {
            tracing::warn!(
                expected = encoder.embedding_dim(),
                actual = embedding.len(),
                "Encoder returned unexpected dimension"
            );
            CVRANK_STATUS_ERROR
        }
        Err(e) => {
            tracing::warn!(error = %e, "Encoder readiness check failed");
            CVRANK_STATUS_ERROR
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let pipeline = state.pipeline.clone();
    let embedding = tokio::task::spawn_blocking(move || {
        embedding_status(pipeline.scorer().encoder())
    })
    .await
    .unwrap_or(CVRANK_STATUS_ERROR);

    let embedder_mode = if state.pipeline.scorer().encoder().is_stub() {
        "stub"
    } else {
        "model"
    };

    let components = ComponentStatus {
        http: CVRANK_STATUS_READY,
        embedding,
        embedder_mode,
        translator_mode: state.pipeline.translator().mode(),
    };

    let is_ready = components.embedding == CVRANK_STATUS_READY;
    let (status_code, status_msg) = if is_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "pending")
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        CVRANK_STATUS_HEADER,
        HeaderValue::from_static(if is_ready {
            CVRANK_STATUS_READY
        } else {
            CVRANK_STATUS_ERROR
        }),
    );

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
