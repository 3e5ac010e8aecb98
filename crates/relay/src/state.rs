// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared server state.
//!
//! Holds only immutable, request-independent parts: the transformer and
//! the dispatcher. Requests never share mutable data.

use std::sync::Arc;

use jm_core::Transformer;

use crate::dispatch::Dispatcher;

/// Cheaply clonable handle passed to every request handler.
#[derive(Clone)]
pub struct ServerState {
    inner: Arc<ServerStateInner>,
}

struct ServerStateInner {
    /// Webhook body to chat payload pipeline.
    transformer: Transformer,
    /// Outbound delivery to the chat webhook.
    dispatcher: Arc<dyn Dispatcher>,
}

impl ServerState {
    pub fn new(transformer: Transformer, dispatcher: Arc<dyn Dispatcher>) -> Self {
        ServerState {
            inner: Arc::new(ServerStateInner {
                transformer,
                dispatcher,
            }),
        }
    }

    pub fn transformer(&self) -> &Transformer {
        &self.inner.transformer
    }

    pub fn dispatcher(&self) -> &dyn Dispatcher {
        self.inner.dispatcher.as_ref()
    }
}
