// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound chat webhook payload.
//!
//! Wire format accepted by the chat incoming-webhook endpoint:
//!
//! ```json
//! {"text":"...","username":"JIRA","icon_url":"https://...","color":"ff0000"}
//! ```
//!
//! `pretext` and `color` are omitted when unset.

use serde::{Deserialize, Serialize};

use crate::compose::RenderedMessage;
use crate::error::Result;

/// Bot name shown on posted messages unless configured otherwise.
pub const DEFAULT_USERNAME: &str = "JIRA";

/// Bot avatar shown on posted messages unless configured otherwise.
pub const DEFAULT_ICON_URL: &str =
    "https://raw.githubusercontent.com/hhommersom/mattermost-jira/master/logo-02.png";

/// Identity the relay posts as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_icon_url")]
    pub icon_url: String,
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_icon_url() -> String {
    DEFAULT_ICON_URL.to_string()
}

impl Default for BotIdentity {
    fn default() -> Self {
        BotIdentity {
            username: default_username(),
            icon_url: default_icon_url(),
        }
    }
}

/// Message as posted to the chat webhook. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    pub text: String,
    pub username: String,
    pub icon_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl OutboundPayload {
    /// Maps a rendered message onto the wire schema for `bot`.
    pub fn from_message(msg: RenderedMessage, bot: &BotIdentity) -> Self {
        OutboundPayload {
            pretext: None,
            text: msg.body,
            username: bot.username.clone(),
            icon_url: bot.icon_url.clone(),
            color: msg.color.filter(|c| !c.is_empty()),
        }
    }

    /// Encodes the payload as compact JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Maps a rendered message using the default bot identity.
pub fn serialize(msg: RenderedMessage) -> OutboundPayload {
    OutboundPayload::from_message(msg, &BotIdentity::default())
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
