// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jm-core operations.

use thiserror::Error;

/// All possible errors that can occur while transforming a webhook event.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid webhook payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid parse mode: '{0}'\n  hint: valid modes are: tolerant, strict")]
    InvalidParseMode(String),
}

/// A specialized Result type for jm-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
