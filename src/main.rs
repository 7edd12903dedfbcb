use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ratehub::{routes, AppState, RateStore, ServerConfig};

#[tokio::main]
async fn main() {
    // init tracing from env RUST_LOG or RATEHUB_LOG
    let filter = std::env::var("RATEHUB_LOG")
        .unwrap_or_else(|_| std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cfg = ServerConfig::from_env();
    info!(data_dir = %cfg.data_dir.display(), "ratehub starting up");

    // Opening the store is the startup connectivity probe; failure is fatal.
    let store = match init_store(&cfg) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(err = ?e, "failed to open rate store");
            std::process::exit(1);
        }
    };
    info!(rates = store.len(), "rate store ready");

    let app = routes::build_router(AppState::new(store.clone()), cfg.max_body_bytes);

    // CORS: in dev allow Any, else use RATEHUB_CORS_ORIGINS if provided
    let cors = if cfg.dev_mode {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else if !cfg.cors_origins.is_empty() {
        // invalid entries are skipped
        let list: Vec<HeaderValue> = cfg
            .cors_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        if list.is_empty() {
            CorsLayer::new().allow_methods(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(list))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        // no public CORS allowed by default
        CorsLayer::new().allow_methods(Any)
    };
    let app = app.layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], cfg.port));
    info!(listen = %addr.to_string(), "ratehub listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(listen = %addr.to_string(), err = ?e, "failed to bind to address");
            std::process::exit(1);
        }
    };
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            let _ = store.flush();
        })
        .await
        .unwrap();
}

fn init_store(cfg: &ServerConfig) -> anyhow::Result<RateStore> {
    RateStore::open(&cfg.data_dir)
        .with_context(|| format!("open rate store at {}", cfg.data_dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_store_error_names_the_path() {
        // a regular file cannot back a sled database
        let file = tempfile::NamedTempFile::new().expect("tmpfile");
        let cfg = ServerConfig {
            data_dir: file.path().to_path_buf(),
            ..ServerConfig::default()
        };
        let err = init_store(&cfg).expect_err("file path must be rejected");
        assert!(err.to_string().contains("open rate store"));
    }
}
