//! `/cubic-root` request parsing and response encoding.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use cuberoot_core::error::ClientCode;
use cuberoot_core::protocol::{CubicRootRequest, CubicRootResponse, DONE_MESSAGE};
use cuberoot_core::CubeRootError;

#[test]
fn missing_or_empty_param_is_missing() {
    for raw in [None, Some("")] {
        let err = CubicRootRequest::parse(raw).expect_err("must fail");
        assert!(matches!(err, CubeRootError::MissingParameter));
        assert_eq!(err.to_string(), "Missing parameter 'd'");
        assert_eq!(err.client_code(), ClientCode::BadRequest);
    }
}

#[test]
fn garbage_param_is_invalid_with_detail() {
    let err = CubicRootRequest::parse(Some("abc")).expect_err("must fail");
    assert!(matches!(err, CubeRootError::InvalidParameter(_)));
    let msg = err.to_string();
    assert!(msg.starts_with("Invalid parameter 'd': "), "{msg}");
    assert!(msg.len() > "Invalid parameter 'd': ".len());
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn accepts_signed_and_fractional_values() {
    assert_eq!(CubicRootRequest::parse(Some("27.000000")).unwrap().d, 27.0);
    assert_eq!(CubicRootRequest::parse(Some("-8")).unwrap().d, -8.0);
    assert_eq!(CubicRootRequest::parse(Some("1e3")).unwrap().d, 1000.0);
    assert!(CubicRootRequest::parse(Some("inf")).unwrap().d.is_infinite());
}

#[test]
fn overflowing_literal_is_out_of_range() {
    for raw in ["1e400", "-1e400", "+9e999"] {
        let err = CubicRootRequest::parse(Some(raw)).expect_err("must fail");
        assert!(matches!(err, CubeRootError::InvalidParameter(_)), "{raw}");
        assert_eq!(err.to_string(), "Invalid parameter 'd': value out of range");
    }
}

#[test]
fn explicit_infinity_spellings_are_accepted() {
    for raw in ["inf", "-inf", "+Infinity", "INF"] {
        let d = CubicRootRequest::parse(Some(raw)).unwrap().d;
        assert!(d.is_infinite(), "{raw}");
    }
}

#[test]
fn hex_float_literal_is_invalid() {
    let err = CubicRootRequest::parse(Some("0x1p3")).expect_err("must fail");
    assert!(matches!(err, CubeRootError::InvalidParameter(_)));
}

#[test]
fn first_d_in_query_wins() {
    let pairs = [("x", "1"), ("d", "8"), ("d", "27")];
    let req = CubicRootRequest::from_query(pairs.iter().copied()).unwrap();
    assert_eq!(req.d, 8.0);

    let none: [(&str, &str); 1] = [("x", "1")];
    let err = CubicRootRequest::from_query(none.iter().copied()).expect_err("must fail");
    assert!(matches!(err, CubeRootError::MissingParameter));
}

#[test]
fn response_encodes_result_and_message() {
    let bytes = CubicRootResponse::done(-2.0).to_json().unwrap();
    let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["result"], serde_json::json!(-2.0));
    assert_eq!(v["message"], DONE_MESSAGE);
    assert_eq!(v.as_object().unwrap().len(), 2);
}

#[test]
fn non_finite_result_fails_to_encode() {
    for r in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = CubicRootResponse::done(r).to_json().expect_err("must fail");
        assert!(matches!(err, CubeRootError::Encoding(_)));
        assert_eq!(err.client_code(), ClientCode::Internal);
    }
}
