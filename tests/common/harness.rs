//! Test server harness.

use cvrank::gateway::{HandlerState, create_router};
use cvrank::ranking::RankingPipeline;
use cvrank::scoring::SimilarityScorer;
use cvrank::translate::{TextTranslator, TranslationConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub port: u16,
    pub max_candidates: usize,
    /// Base URL of a LibreTranslate-compatible server. `None` = passthrough.
    pub translate_url: Option<String>,
    pub translate_retries: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            port: 0,
            max_candidates: cvrank::constants::DEFAULT_MAX_CANDIDATES,
            translate_url: None,
            translate_retries: 0,
        }
    }
}

impl TestServerConfig {
    pub fn with_translate_url(mut self, url: impl Into<String>) -> Self {
        self.translate_url = Some(url.into());
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_translate_retries(mut self, retries: usize) -> Self {
        self.translate_retries = retries;
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn find_available_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a server with a stub encoder.
///
/// Translation passes through unless `translate_url` points at a
/// LibreTranslate-compatible server (see `fake_translate`).
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let port = if config.port == 0 {
        find_available_port().await?
    } else {
        config.port
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let scorer = SimilarityScorer::stub()
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let translation_config = match config.translate_url {
        Some(url) => TranslationConfig {
            max_retries: config.translate_retries,
            retry_backoff: Duration::from_millis(10),
            ..TranslationConfig::remote(url)
        },
        None => TranslationConfig::passthrough(),
    };
    let translator = TextTranslator::from_config(&translation_config)
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let pipeline = RankingPipeline::new(Arc::new(translator), Arc::new(scorer));
    let state = HandlerState::new(Arc::new(pipeline)).with_max_candidates(config.max_candidates);

    let app = create_router(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
