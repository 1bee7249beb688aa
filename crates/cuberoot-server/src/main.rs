//! cuberoot server binary.
//!
//! - `GET /cubic-root?d=<value>` : real cubic root as JSON
//! - `GET /metrics`              : Prometheus scrape endpoint
//! - `PORT` / `DEBUG` env vars, `RUST_LOG` overrides the log filter

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use cuberoot_server::{app_state::AppState, config, router, VERSION};

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match config::load_from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("info");
            tracing::error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cfg.default_log_filter());

    let state = AppState::new(cfg);
    let listen = state.cfg().listen_addr();
    let app = router::build_router(state.clone());

    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%listen, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(version = VERSION, %listen, "cuberoot-server starting");
    tracing::info!("send requests to http://localhost:{}/cubic-root?d=<value>", listen.port());
    tracing::info!(debug = state.cfg().debug, "debug mode");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
    {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("cuberoot-server stopped");
    ExitCode::SUCCESS
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt().with_env_filter(filter).init();
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    state.set_draining();
    tracing::info!("signal received, draining");
}
