#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use cuberoot_core::error::ClientCode;
use cuberoot_server::obs::metrics::{Outcome, ServiceMetrics};

#[test]
fn in_flight_guard_restores_gauge() {
    let m = ServiceMetrics::new();
    {
        let _a = m.track_in_flight();
        let _b = m.track_in_flight();
        assert_eq!(m.in_flight(), 2);
    }
    assert_eq!(m.in_flight(), 0);
}

#[test]
fn record_counts_per_outcome() {
    let m = ServiceMetrics::new();
    m.record(Outcome::Ok, Duration::from_millis(1));
    m.record(Outcome::Ok, Duration::from_millis(2));
    m.record(Outcome::BadRequest, Duration::from_micros(5));

    assert_eq!(m.requests(Outcome::Ok), 2);
    assert_eq!(m.requests(Outcome::BadRequest), 1);
    assert_eq!(m.requests(Outcome::Internal), 0);
}

#[test]
fn registries_are_isolated() {
    let a = ServiceMetrics::new();
    let b = ServiceMetrics::new();
    a.record(Outcome::Ok, Duration::from_millis(1));
    assert_eq!(a.requests(Outcome::Ok), 1);
    assert_eq!(b.requests(Outcome::Ok), 0);
}

#[test]
fn render_lists_every_series() {
    let m = ServiceMetrics::new();
    m.record(Outcome::Internal, Duration::from_millis(3));
    m.observe_request_size(0);
    m.observe_response_size(47);

    let text = m.render().unwrap();
    for name in [
        "cubic_root_requests_total",
        "cubic_root_request_duration_seconds",
        "cubic_root_request_size_bytes",
        "cubic_root_response_size_bytes",
        "cubic_root_active_requests",
    ] {
        assert!(text.contains(name), "missing {name} in:\n{text}");
    }
    assert!(text.contains("status=\"500\""));
}

#[test]
fn outcome_follows_client_code() {
    assert_eq!(Outcome::from(ClientCode::BadRequest).as_label(), "400");
    assert_eq!(Outcome::from(ClientCode::Internal).as_label(), "500");
    assert_eq!(Outcome::Ok.as_label(), "200");
}
