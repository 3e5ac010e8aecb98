// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound webhook event model and decoding.
//!
//! The tracker posts a large JSON document per notification. Only a small
//! slice of it drives the chat message: who acted, which issue, what kind
//! of event, the comment (if any), and the changelog items. Decoding maps
//! that slice into [`InboundEvent`], an owned, immutable snapshot that
//! lives for the duration of one request.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Avatar size key used when none is configured.
pub const DEFAULT_AVATAR_SIZE: &str = "16x16";

/// Category of tracker notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventKind {
    IssueCreated,
    IssueUpdated,
    IssueDeleted,
    /// Any event name this relay does not know about.
    #[default]
    Unknown,
}

impl EventKind {
    /// Maps the tracker's `webhookEvent` name to a kind.
    pub fn from_webhook_event(name: &str) -> Self {
        match name {
            "jira:issue_created" => EventKind::IssueCreated,
            "jira:issue_updated" => EventKind::IssueUpdated,
            "jira:issue_deleted" => EventKind::IssueDeleted,
            _ => EventKind::Unknown,
        }
    }

    /// Returns the verb shown in the message. Empty for unknown events.
    pub fn action(&self) -> &'static str {
        match self {
            EventKind::IssueCreated => "created",
            EventKind::IssueUpdated => "updated",
            EventKind::IssueDeleted => "deleted",
            EventKind::Unknown => "",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action())
    }
}

/// The user who triggered the event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
    pub display_name: String,
    pub login_name: String,
    pub avatar_url: String,
}

/// The issue the event is about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueRef {
    /// Absolute REST URL of the issue; scheme and host are reused for links.
    pub self_url: String,
    /// Issue key such as `ABC-123`.
    pub key: String,
    pub issue_type_name: String,
    pub issue_type_icon_url: String,
    pub summary: String,
}

/// One changelog item, kept exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldChange {
    pub field_name: String,
    pub from_value: String,
    pub to_value: String,
}

impl FieldChange {
    pub fn new(
        field_name: impl Into<String>,
        from_value: impl Into<String>,
        to_value: impl Into<String>,
    ) -> Self {
        FieldChange {
            field_name: field_name.into(),
            from_value: from_value.into(),
            to_value: to_value.into(),
        }
    }

    /// Field name with only its first character upper-cased.
    pub fn display_name(&self) -> String {
        let mut chars = self.field_name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Previous value, with an empty value shown as `None`.
    pub fn from_display(&self) -> &str {
        if self.from_value.is_empty() {
            "None"
        } else {
            &self.from_value
        }
    }
}

/// Normalized inbound event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundEvent {
    pub kind: EventKind,
    pub actor: Actor,
    pub issue: IssueRef,
    /// Raw wiki markup of the comment. `None` when the event has no comment.
    pub comment: Option<String>,
    /// Changelog items in the order received.
    pub changes: Vec<FieldChange>,
}

/// How decode failures are handled.
///
/// A field of the wrong type is dropped to its empty value in both modes.
/// The mode only decides what happens to a body that is not a JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// A non-object body yields an empty event and a warning.
    #[default]
    Tolerant,
    /// A non-object body is an error.
    Strict,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Tolerant => "tolerant",
            ParseMode::Strict => "strict",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tolerant" => Ok(ParseMode::Tolerant),
            "strict" => Ok(ParseMode::Strict),
            _ => Err(Error::InvalidParseMode(s.to_string())),
        }
    }
}

/// Decodes raw webhook bytes into an [`InboundEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParser {
    mode: ParseMode,
    avatar_size: String,
}

impl Default for EventParser {
    fn default() -> Self {
        EventParser::new(ParseMode::default())
    }
}

impl EventParser {
    pub fn new(mode: ParseMode) -> Self {
        EventParser {
            mode,
            avatar_size: DEFAULT_AVATAR_SIZE.to_string(),
        }
    }

    /// Selects which `avatarUrls` entry becomes the actor avatar (builder pattern).
    pub fn with_avatar_size(mut self, size: impl Into<String>) -> Self {
        self.avatar_size = size.into();
        self
    }

    /// Decodes `raw`.
    ///
    /// Missing, `null` and mistyped fields become empty values in both
    /// modes; the rest of the event is kept. Only a body that is not a JSON
    /// object is subject to the mode: in tolerant mode it produces
    /// `InboundEvent::default()`, in strict mode it returns [`Error::Json`].
    pub fn parse(&self, raw: &[u8]) -> Result<InboundEvent> {
        match serde_json::from_slice::<WebhookPayload>(raw) {
            Ok(payload) => Ok(payload.into_event(&self.avatar_size)),
            Err(e) => match self.mode {
                ParseMode::Tolerant => {
                    tracing::warn!("ignoring malformed webhook payload: {}", e);
                    Ok(InboundEvent::default())
                }
                ParseMode::Strict => Err(Error::Json(e)),
            },
        }
    }
}

/// Decodes `raw` with tolerant defaults. Never fails.
pub fn parse(raw: &[u8]) -> InboundEvent {
    EventParser::default().parse(raw).unwrap_or_default()
}

// Wire shape of the tracker webhook. Every field is optional and decoded
// through `lenient`, so absent, null and mistyped values all decode to
// `None` without failing the enclosing object.

/// Decodes a field, replacing a value of the wrong type with `None`.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WebhookPayload {
    #[serde(deserialize_with = "lenient")]
    webhook_event: Option<String>,
    #[serde(deserialize_with = "lenient")]
    user: Option<WireUser>,
    #[serde(deserialize_with = "lenient")]
    issue: Option<WireIssue>,
    #[serde(deserialize_with = "lenient")]
    comment: Option<WireComment>,
    #[serde(deserialize_with = "lenient")]
    changelog: Option<WireChangelog>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireUser {
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    display_name: Option<String>,
    // Entries are checked one by one when the avatar is picked.
    #[serde(deserialize_with = "lenient")]
    avatar_urls: Option<HashMap<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireIssue {
    #[serde(rename = "self", deserialize_with = "lenient")]
    self_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    key: Option<String>,
    #[serde(deserialize_with = "lenient")]
    fields: Option<WireIssueFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireIssueFields {
    #[serde(deserialize_with = "lenient")]
    issuetype: Option<WireIssueType>,
    #[serde(deserialize_with = "lenient")]
    summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireIssueType {
    #[serde(deserialize_with = "lenient")]
    icon_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireComment {
    #[serde(deserialize_with = "lenient")]
    body: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireChangelog {
    // Items are decoded one by one so a bad item only empties itself.
    #[serde(deserialize_with = "lenient")]
    items: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireChangelogItem {
    #[serde(deserialize_with = "lenient")]
    field: Option<String>,
    #[serde(deserialize_with = "lenient")]
    from_string: Option<String>,
    #[serde(rename = "toString", deserialize_with = "lenient")]
    to_value: Option<String>,
}

impl WebhookPayload {
    fn into_event(self, avatar_size: &str) -> InboundEvent {
        let kind = self
            .webhook_event
            .as_deref()
            .map(EventKind::from_webhook_event)
            .unwrap_or_default();

        let actor = self
            .user
            .map(|user| Actor {
                display_name: user.display_name.unwrap_or_default(),
                login_name: user.name.unwrap_or_default(),
                avatar_url: user
                    .avatar_urls
                    .and_then(|mut urls| urls.remove(avatar_size))
                    .and_then(|url| match url {
                        Value::String(url) => Some(url),
                        _ => None,
                    })
                    .unwrap_or_default(),
            })
            .unwrap_or_default();

        let issue = self
            .issue
            .map(|issue| {
                let fields = issue.fields.unwrap_or_default();
                let issue_type = fields.issuetype.unwrap_or_default();
                IssueRef {
                    self_url: issue.self_url.unwrap_or_default(),
                    key: issue.key.unwrap_or_default(),
                    issue_type_name: issue_type.name.unwrap_or_default(),
                    issue_type_icon_url: issue_type.icon_url.unwrap_or_default(),
                    summary: fields.summary.unwrap_or_default(),
                }
            })
            .unwrap_or_default();

        let comment = self
            .comment
            .and_then(|c| c.body)
            .filter(|body| !body.is_empty());

        let changes = self
            .changelog
            .and_then(|log| log.items)
            .unwrap_or_default()
            .into_iter()
            .map(|item| serde_json::from_value::<WireChangelogItem>(item).unwrap_or_default())
            .map(|item| FieldChange {
                field_name: item.field.unwrap_or_default(),
                from_value: item.from_string.unwrap_or_default(),
                to_value: item.to_value.unwrap_or_default(),
            })
            .collect();

        InboundEvent {
            kind,
            actor,
            issue,
            comment,
            changes,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
