use std::sync::Arc;

use anyhow::Context;
use chatter_config::AppConfig;
use chatter_db::CredentialStore;
use chatter_observability::{PrometheusHandle, metrics_app};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::router::init_router;
use crate::state::AppState;

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
///
/// When a Prometheus handle is given, `/metrics` is served on its own
/// listener at `config.metrics.port`.
pub async fn serve(
    config: AppConfig,
    store: Arc<dyn CredentialStore>,
    metrics: Option<PrometheusHandle>,
) -> anyhow::Result<()> {
    if let Some(handle) = metrics {
        let metrics_addr = format!("{}:{}", config.server.host, config.metrics.port);
        let listener = TcpListener::bind(&metrics_addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {metrics_addr}"))?;
        info!("Metrics available at http://{}/metrics", metrics_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let state = AppState::new(store, config.cors);
    let app = init_router(state);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server started at http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
