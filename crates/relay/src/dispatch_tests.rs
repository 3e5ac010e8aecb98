// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A received request: content type and body.
type Captured = Arc<Mutex<Vec<(String, Vec<u8>)>>>;

/// Starts a fake chat webhook that records requests and answers `status`.
async fn start_capture(status: StatusCode) -> (SocketAddr, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/hooks/abc",
            post(
                move |State(captured): State<Captured>, headers: HeaderMap, body: Bytes| async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    captured.lock().unwrap().push((content_type, body.to_vec()));
                    (status, "rejected by test")
                },
            ),
        )
        .with_state(captured.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, captured)
}

fn dispatcher() -> HttpDispatcher {
    HttpDispatcher::new(Duration::from_secs(5)).expect("client builds")
}

#[tokio::test]
async fn dispatch_posts_json_once() {
    let (addr, captured) = start_capture(StatusCode::OK).await;
    let url = format!("http://{addr}/hooks/abc");

    dispatcher()
        .dispatch(&url, br#"{"text":"hi"}"#.to_vec())
        .await
        .unwrap();

    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "application/json");
    assert_eq!(requests[0].1, br#"{"text":"hi"}"#.to_vec());
}

#[tokio::test]
async fn dispatch_reports_rejection_status() {
    let (addr, captured) = start_capture(StatusCode::INTERNAL_SERVER_ERROR).await;
    let url = format!("http://{addr}/hooks/abc");

    let err = dispatcher().dispatch(&url, b"{}".to_vec()).await.unwrap_err();

    match err {
        DispatchError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "rejected by test");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn dispatch_reports_unreachable_destination() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = dispatcher()
        .dispatch(&format!("http://{addr}/hooks/abc"), b"{}".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Request(_)));
}

#[tokio::test]
async fn dispatch_reports_invalid_url() {
    let err = dispatcher()
        .dispatch("not a url", b"{}".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Request(_)));
    assert!(err.to_string().starts_with("request to chat webhook failed"));
}
