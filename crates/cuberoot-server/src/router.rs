//! Axum router wiring.
//!
//! `/cubic-root` serves the computation; `/metrics`, `/healthz` and
//! `/readyz` are the ops surface.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/cubic-root", get(transport::cubic_root::cubic_root))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .with_state(state)
}
