// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Environment variable names read by the relay.
pub mod names {
    /// Listen port.
    pub const PORT: &str = "PORT";
    /// Path to a TOML transform config.
    pub const JM_CONFIG: &str = "JM_CONFIG";
    /// Parse mode override (`tolerant` or `strict`).
    pub const JM_PARSE_MODE: &str = "JM_PARSE_MODE";
    /// Log filter directives.
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Returns the value of `PORT` if set to a valid port number.
pub fn port() -> Option<u16> {
    std::env::var(names::PORT).ok()?.trim().parse().ok()
}

/// Returns the value of `JM_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(names::JM_CONFIG)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns the raw value of `JM_PARSE_MODE` if set and non-empty.
pub fn parse_mode() -> Option<String> {
    std::env::var(names::JM_PARSE_MODE)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
