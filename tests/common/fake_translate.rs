//! In-process LibreTranslate stand-in.
//!
//! Texts registered with [`FakeTranslateConfig::translation`] are detected as
//! Indonesian; everything else is detected as English.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Default)]
pub struct FakeTranslateConfig {
    pub translations: HashMap<String, String>,
    /// Number of leading `/translate` calls answered with 503.
    pub fail_first: usize,
    /// Every `/translate` call fails with this status.
    pub always_fail: Option<u16>,
}

impl FakeTranslateConfig {
    pub fn translation(mut self, from: &str, to: &str) -> Self {
        self.translations.insert(from.to_string(), to.to_string());
        self
    }

    pub fn fail_first(mut self, n: usize) -> Self {
        self.fail_first = n;
        self
    }

    pub fn always_fail(mut self, status: u16) -> Self {
        self.always_fail = Some(status);
        self
    }
}

#[derive(Default)]
pub struct FakeCounters {
    pub detect_calls: AtomicUsize,
    pub translate_calls: AtomicUsize,
}

struct FakeState {
    config: FakeTranslateConfig,
    counters: Arc<FakeCounters>,
}

#[derive(Deserialize)]
struct DetectBody {
    q: String,
}

#[derive(Deserialize)]
struct TranslateBody {
    q: String,
    source: String,
    target: String,
}

pub struct FakeTranslateServer {
    pub addr: SocketAddr,
    pub counters: Arc<FakeCounters>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakeTranslateServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn detect_calls(&self) -> usize {
        self.counters.detect_calls.load(Ordering::SeqCst)
    }

    pub fn translate_calls(&self) -> usize {
        self.counters.translate_calls.load(Ordering::SeqCst)
    }
}

impl Drop for FakeTranslateServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn detect(State(state): State<Arc<FakeState>>, Json(body): Json<DetectBody>) -> Json<Value> {
    state.counters.detect_calls.fetch_add(1, Ordering::SeqCst);

    if state.config.translations.contains_key(&body.q) {
        Json(json!([
            {"language": "en", "confidence": 12.0},
            {"language": "id", "confidence": 91.0}
        ]))
    } else {
        Json(json!([{"language": "en", "confidence": 88.0}]))
    }
}

async fn translate(
    State(state): State<Arc<FakeState>>,
    Json(body): Json<TranslateBody>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let call = state.counters.translate_calls.fetch_add(1, Ordering::SeqCst);

    if let Some(status) = state.config.always_fail {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Err((status, "configured failure".to_string()));
    }

    if call < state.config.fail_first {
        return Err((StatusCode::SERVICE_UNAVAILABLE, "warming up".to_string()));
    }

    if body.source != "id" || body.target != "en" {
        return Err((StatusCode::BAD_REQUEST, "unsupported language pair".to_string()));
    }

    let translated = state
        .config
        .translations
        .get(&body.q)
        .cloned()
        .unwrap_or(body.q);

    Ok(Json(json!({"translatedText": translated})))
}

pub async fn spawn_fake_translate(config: FakeTranslateConfig) -> std::io::Result<FakeTranslateServer> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let counters = Arc::new(FakeCounters::default());
    let state = Arc::new(FakeState {
        config,
        counters: counters.clone(),
    });

    let app = Router::new()
        .route("/detect", post(detect))
        .route("/translate", post(translate))
        .with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    Ok(FakeTranslateServer {
        addr,
        counters,
        shutdown_tx: Some(shutdown_tx),
    })
}
