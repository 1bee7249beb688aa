//! Server config loader (process environment).
//!
//! - `PORT`  : TCP port, default 8080. Anything but a `u16` is fatal.
//! - `DEBUG` : verbose per-request logging. Unparseable means off.

pub mod schema;

use cuberoot_core::error::{CubeRootError, Result};

pub use schema::ServerConfig;

pub const PORT_VAR: &str = "PORT";
pub const DEBUG_VAR: &str = "DEBUG";

pub fn load_from_env() -> Result<ServerConfig> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Build config from any key lookup (tests pass a closure over a map).
pub fn load_from_lookup<F>(lookup: F) -> Result<ServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup(PORT_VAR).filter(|s| !s.is_empty()) {
        None => schema::default_port(),
        Some(s) => s
            .parse::<u16>()
            .map_err(|e| CubeRootError::InvalidConfig(format!("invalid port {s:?}: {e}")))?,
    };

    let debug = lookup(DEBUG_VAR)
        .and_then(|s| parse_bool(&s))
        .unwrap_or(false);

    Ok(ServerConfig { port, debug })
}

/// Boolean spellings accepted for flags like `DEBUG`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
