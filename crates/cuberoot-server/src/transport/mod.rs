//! HTTP transport for the computation endpoint.
//!
//! Parses the query once into `CubicRootRequest`, runs the solver, and maps
//! `CubeRootError` onto status codes and plain-text bodies.

pub mod cubic_root;
