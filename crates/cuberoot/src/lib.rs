//! Top-level facade crate for cuberoot.
//!
//! Re-exports the solver core and the server library so users can depend on a single crate.

pub mod core {
    pub use cuberoot_core::*;
}

pub mod server {
    pub use cuberoot_server::*;
}
