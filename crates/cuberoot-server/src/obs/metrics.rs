//! Metrics registry for the cubic-root service.
//!
//! All series carry the `cubic_root_` prefix:
//! - `cubic_root_requests_total{status}`
//! - `cubic_root_request_duration_seconds{status}`
//! - `cubic_root_request_size_bytes`
//! - `cubic_root_response_size_bytes`
//! - `cubic_root_active_requests`
//!
//! `status` is the HTTP status code of the finished request, so the label has
//! at most three values.

use std::fmt;
use std::time::Duration;

use cuberoot_core::error::ClientCode;
use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::metrics::histogram::{exponential_buckets, Histogram};
use prometheus_client::registry::Registry;

/// Latency buckets in seconds (the Prometheus client defaults).
pub const LATENCY_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

// Payload buckets: 10, 20, 40 ... 5120 bytes.
const SIZE_BUCKET_START: f64 = 10.0;
const SIZE_BUCKET_FACTOR: f64 = 2.0;
const SIZE_BUCKET_COUNT: u16 = 10;

/// Final outcome of a request, used as the `status` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    BadRequest,
    Internal,
}

impl Outcome {
    pub fn as_label(self) -> &'static str {
        match self {
            Outcome::Ok => "200",
            Outcome::BadRequest => "400",
            Outcome::Internal => "500",
        }
    }
}

impl From<ClientCode> for Outcome {
    fn from(code: ClientCode) -> Self {
        match code {
            ClientCode::BadRequest => Outcome::BadRequest,
            ClientCode::Internal => Outcome::Internal,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct StatusLabels {
    pub status: String,
}

impl StatusLabels {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            status: outcome.as_label().to_string(),
        }
    }
}

fn latency_histogram() -> Histogram {
    Histogram::new(LATENCY_BUCKETS.iter().copied())
}

fn size_histogram() -> Histogram {
    Histogram::new(exponential_buckets(
        SIZE_BUCKET_START,
        SIZE_BUCKET_FACTOR,
        SIZE_BUCKET_COUNT,
    ))
}

/// Service-wide metrics plus the registry they are exposed through.
///
/// Metric handles are cheap clones sharing atomics with the registered
/// copies, so updates through the fields show up in `render()`.
pub struct ServiceMetrics {
    registry: Registry,
    pub requests_total: Family<StatusLabels, Counter>,
    pub request_duration_seconds: Family<StatusLabels, Histogram>,
    pub request_size_bytes: Histogram,
    pub response_size_bytes: Histogram,
    pub active_requests: Gauge,
}

impl fmt::Debug for ServiceMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceMetrics")
            .field("active_requests", &self.active_requests.get())
            .finish_non_exhaustive()
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceMetrics {
    /// Create a fresh registry and register every metric in it.
    pub fn new() -> Self {
        let mut registry = Registry::with_prefix("cubic_root");

        let requests_total = Family::<StatusLabels, Counter>::default();
        registry.register(
            "requests",
            "Total number of requests to the cubic root endpoint",
            requests_total.clone(),
        );

        let request_duration_seconds: Family<StatusLabels, Histogram> =
            Family::new_with_constructor(latency_histogram);
        registry.register(
            "request_duration_seconds",
            "Histogram of response time for cubic root requests",
            request_duration_seconds.clone(),
        );

        let request_size_bytes = size_histogram();
        registry.register(
            "request_size_bytes",
            "Histogram of request sizes in bytes",
            request_size_bytes.clone(),
        );

        let response_size_bytes = size_histogram();
        registry.register(
            "response_size_bytes",
            "Histogram of response sizes in bytes",
            response_size_bytes.clone(),
        );

        let active_requests = Gauge::default();
        registry.register(
            "active_requests",
            "Number of active requests being processed",
            active_requests.clone(),
        );

        Self {
            registry,
            requests_total,
            request_duration_seconds,
            request_size_bytes,
            response_size_bytes,
            active_requests,
        }
    }

    /// Mark a request in flight until the returned guard drops.
    pub fn track_in_flight(&self) -> InFlight {
        self.active_requests.inc();
        InFlight {
            gauge: self.active_requests.clone(),
        }
    }

    pub fn observe_request_size(&self, bytes: u64) {
        self.request_size_bytes.observe(bytes as f64);
    }

    pub fn observe_response_size(&self, bytes: usize) {
        self.response_size_bytes.observe(bytes as f64);
    }

    /// Record a finished request: latency and count, both keyed by outcome.
    pub fn record(&self, outcome: Outcome, elapsed: Duration) {
        let labels = StatusLabels::new(outcome);
        self.request_duration_seconds
            .get_or_create(&labels)
            .observe(elapsed.as_secs_f64());
        self.requests_total.get_or_create(&labels).inc();
    }

    /// Current `requests_total` value for one outcome. Creates the series
    /// at zero if it was never recorded.
    pub fn requests(&self, outcome: Outcome) -> u64 {
        self.requests_total
            .get_or_create(&StatusLabels::new(outcome))
            .get()
    }

    pub fn in_flight(&self) -> i64 {
        self.active_requests.get()
    }

    /// Render the registry in text exposition format.
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        encode(&mut out, &self.registry)?;
        Ok(out)
    }
}

/// Decrements `cubic_root_active_requests` on drop.
#[derive(Debug)]
pub struct InFlight {
    gauge: Gauge,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.gauge.dec();
    }
}
