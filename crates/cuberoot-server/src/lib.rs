//! cuberoot server library entry.
//!
//! Wires config, metrics, the `/cubic-root` handler, and the ops endpoints
//! into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests, which drive the router in-process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;

/// Version reported at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
