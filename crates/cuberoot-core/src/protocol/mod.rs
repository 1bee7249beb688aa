//! Wire types for the `/cubic-root` endpoint.
//!
//! The request side is parsed from a query-string value, the response side is
//! encoded as JSON. Both directions are panic-free: bad input and
//! unrepresentable output are reported as `CubeRootError`.

pub mod cubic_root;

pub use cubic_root::{CubicRootRequest, CubicRootResponse, DONE_MESSAGE};
