// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery of rendered payloads to the chat webhook.
//!
//! Each payload is posted exactly once. Callers get the outcome back and
//! decide what to report; nothing here retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

/// Errors that can occur while delivering a payload.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("request to chat webhook failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("chat webhook rejected message: {status} {body}")]
    Status { status: u16, body: String },
}

/// Sends serialized payloads to a destination webhook URL.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, url: &str, payload: Vec<u8>) -> Result<(), DispatchError>;
}

/// [`Dispatcher`] that POSTs JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
}

impl HttpDispatcher {
    /// Creates a dispatcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpDispatcher { client })
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, url: &str, payload: Vec<u8>) -> Result<(), DispatchError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("chat webhook accepted message ({})", status);
            return Ok(());
        }

        // Informational only.
        let body = response.text().await.unwrap_or_default();
        Err(DispatchError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
