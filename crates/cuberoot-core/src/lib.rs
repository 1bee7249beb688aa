//! cuberoot core: the Newton cubic-root solver, request/response wire types,
//! and the error surface shared with the HTTP server.
//!
//! Nothing here knows about HTTP or async runtimes, so the solver and the
//! wire contract can be exercised directly from tests and benchmarks.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Bad input surfaces as `CubeRootError` and every solver call terminates,
//! whatever the input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod solver;

/// Shared result type.
pub use error::{CubeRootError, Result};
pub use solver::cube_root;
