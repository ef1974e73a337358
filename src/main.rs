//! cvrank HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use cvrank::config::Config;
use cvrank::embedding::{EncoderConfig, SentenceEncoder};
use cvrank::gateway::{HandlerState, create_router};
use cvrank::ranking::RankingPipeline;
use cvrank::scoring::SimilarityScorer;
use cvrank::translate::{TextTranslator, TranslationConfig};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        max_candidates = config.max_candidates,
        "cvrank starting"
    );

    let encoder_config = if let Some(path) = &config.model_path {
        EncoderConfig::new(path.clone())
    } else {
        tracing::warn!("No CVRANK_MODEL_PATH configured, running encoder in stub mode");
        EncoderConfig::stub()
    };
    let encoder = Arc::new(SentenceEncoder::load(encoder_config)?);
    let scorer = Arc::new(SimilarityScorer::new(encoder));

    let translation_config = TranslationConfig::from_env()?;
    let translator = Arc::new(TextTranslator::from_config(&translation_config)?);
    tracing::info!(
        mode = translator.mode(),
        source_lang = %translation_config.source_lang,
        target_lang = %translation_config.target_lang,
        "Translation configured"
    );

    let pipeline = Arc::new(RankingPipeline::new(translator, scorer));
    let state = HandlerState::new(pipeline).with_max_candidates(config.max_candidates);

    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("cvrank shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var("CVRANK_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
