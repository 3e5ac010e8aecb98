// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end webhook transformation.
//!
//! [`Transformer`] holds only immutable configuration, so one instance can
//! be shared across concurrent requests without locking.

use crate::compose::{Composer, RenderedMessage};
use crate::config::TransformConfig;
use crate::error::Result;
use crate::event::{EventParser, InboundEvent};
use crate::payload::{BotIdentity, OutboundPayload};

/// Runs parse → compose → serialize for raw webhook bodies.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    parser: EventParser,
    composer: Composer,
    bot: BotIdentity,
}

impl Transformer {
    pub fn new(config: &TransformConfig) -> Self {
        Transformer {
            parser: EventParser::new(config.parse_mode).with_avatar_size(&config.avatar_size),
            composer: Composer::new(config.multiline(), config.priority.clone()),
            bot: config.bot.clone(),
        }
    }

    pub fn parse(&self, raw: &[u8]) -> Result<InboundEvent> {
        self.parser.parse(raw)
    }

    pub fn compose(&self, event: &InboundEvent) -> RenderedMessage {
        self.composer.compose(event)
    }

    /// Transforms a raw webhook body into the outbound payload.
    ///
    /// Fails only in strict parse mode on malformed JSON.
    pub fn transform(&self, raw: &[u8]) -> Result<OutboundPayload> {
        let event = self.parse(raw)?;
        let message = self.compose(&event);
        Ok(OutboundPayload::from_message(message, &self.bot))
    }

    /// Transforms a raw webhook body into outbound JSON bytes.
    pub fn transform_to_json(&self, raw: &[u8]) -> Result<Vec<u8>> {
        self.transform(raw)?.to_json()
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
