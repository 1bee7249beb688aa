//! In-process metrics backed by `prometheus-client`.
//!
//! One `ServiceMetrics` is built at startup and shared through `AppState`;
//! the `/metrics` handler renders its registry in text exposition format.

pub mod metrics;
