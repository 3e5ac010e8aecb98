// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP server implementation.
//!
//! Every path except `/health` receives tracker webhooks, with any method. The chat destination travels with
//! each request as the `mattermost_hook_url` query parameter, so a single
//! relay can serve any number of channels.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{any, get};
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::state::ServerState;

/// Query string of the webhook route.
#[derive(Debug, Default, Deserialize)]
pub struct RelayQuery {
    /// Chat incoming-webhook URL to post the message to.
    pub mattermost_hook_url: Option<String>,
}

/// Builds the router with all routes.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", any(relay_webhook))
        .route("/health", get(health))
        .fallback(relay_webhook)
        .with_state(state)
}

/// Run the HTTP server on the given address.
pub async fn run(addr: SocketAddr, state: ServerState) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: {}", addr);
    serve(listener, state).await?;
    Ok(())
}

/// Serve requests from an already bound listener until it fails.
pub async fn serve(listener: TcpListener, state: ServerState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}

/// Transforms the webhook body and forwards it to the chat webhook.
///
/// - No destination: nothing is sent, `200 OK`.
/// - Body rejected (strict parse mode only): `400 Bad Request`.
/// - Delivery failed: `502 Bad Gateway` with the reason.
pub(crate) async fn relay_webhook(
    State(state): State<ServerState>,
    Query(query): Query<RelayQuery>,
    body: Bytes,
) -> (StatusCode, String) {
    let Some(url) = query.mattermost_hook_url.filter(|url| !url.is_empty()) else {
        debug!("no destination given, dropping {} byte webhook", body.len());
        return (StatusCode::OK, String::new());
    };

    let payload = match state.transformer().transform_to_json(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("rejecting webhook: {}", e);
            return (StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match state.dispatcher().dispatch(&url, payload).await {
        Ok(()) => {
            info!("forwarded webhook to {}", destination_host(&url));
            (StatusCode::OK, String::new())
        }
        Err(e) => {
            error!(
                "failed to forward webhook to {}: {}",
                destination_host(&url),
                e
            );
            (StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

/// Host part of a hook URL, for logs. Hook paths carry the webhook secret.
pub(crate) fn destination_host(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(String::from))
        .unwrap_or_else(|| "<invalid url>".to_string())
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
