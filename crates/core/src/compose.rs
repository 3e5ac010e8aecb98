// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Message composition.
//!
//! Builds the one-line headline (actor, action, issue) with the changelog
//! and comment sections appended, and derives the attachment color.
//!
//! Headline layout:
//!
//! ```text
//! ![user_icon](avatar) [Name](site/secure/ViewProfile.jspa?name=login) created bug ![task_icon](icon) [KEY-1](site/browse/KEY-1) "Summary"
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::changelog::{self, MultilineFields};
use crate::event::InboundEvent;
use crate::markup;

/// Issue key prefix that marks elevated priority, with its color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRule {
    /// Case-sensitive prefix of the issue key.
    pub prefix: String,
    /// Six hex digit color, without `#`.
    pub color: String,
}

impl PriorityRule {
    pub fn new(prefix: impl Into<String>, color: impl Into<String>) -> Self {
        PriorityRule {
            prefix: prefix.into(),
            color: color.into(),
        }
    }

    pub fn matches(&self, key: &str) -> bool {
        key.starts_with(&self.prefix)
    }
}

/// Rules applied when none are configured.
pub fn default_priority_rules() -> Vec<PriorityRule> {
    vec![PriorityRule::new("SVD", "ff0000")]
}

/// Composed chat message before wire encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Full markdown body.
    pub body: String,
    /// Six hex digit color. Set only for elevated-priority issues.
    pub color: Option<String>,
}

/// Composes [`RenderedMessage`]s from inbound events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    multiline: MultilineFields,
    priority: Vec<PriorityRule>,
}

impl Default for Composer {
    fn default() -> Self {
        Composer::new(MultilineFields::default(), default_priority_rules())
    }
}

impl Composer {
    pub fn new(multiline: MultilineFields, priority: Vec<PriorityRule>) -> Self {
        Composer {
            multiline,
            priority,
        }
    }

    pub fn compose(&self, event: &InboundEvent) -> RenderedMessage {
        let (scheme, host) = site_origin(&event.issue.self_url);
        let changes = changelog::render(&event.changes, &self.multiline);
        let comment = event
            .comment
            .as_deref()
            .map(|body| format!("\nComment:\n{}\n", markup::translate(body)))
            .unwrap_or_default();

        let body = format!(
            "![user_icon]({avatar}) [{name}]({scheme}://{host}/secure/ViewProfile.jspa?name={login}) {action} {issue_type} ![task_icon]({icon}) [{key}]({scheme}://{host}/browse/{key}) \"{summary}\"{changes}{comment}",
            avatar = event.actor.avatar_url,
            name = event.actor.display_name,
            login = event.actor.login_name,
            action = event.kind.action(),
            issue_type = event.issue.issue_type_name.to_lowercase(),
            icon = event.issue.issue_type_icon_url,
            key = event.issue.key,
            summary = event.issue.summary,
        );
        tracing::debug!("composed message for {}: {}", event.issue.key, body);

        RenderedMessage {
            body,
            color: color_hint(&event.issue.key, &self.priority),
        }
    }
}

/// Returns the color of the first rule whose prefix starts `key`.
pub fn color_hint(key: &str, rules: &[PriorityRule]) -> Option<String> {
    rules
        .iter()
        .find(|rule| rule.matches(key))
        .map(|rule| rule.color.clone())
}

/// Splits an issue URL into scheme and host (with explicit port).
///
/// Unparsable or relative URLs yield two empty strings.
pub fn site_origin(self_url: &str) -> (String, String) {
    let Ok(url) = Url::parse(self_url) else {
        return (String::new(), String::new());
    };
    // `Url::port` is `None` for the scheme's default port even when it is
    // written out, so `https://h:443/` yields `h` rather than `h:443`.
    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };
    (url.scheme().to_string(), host)
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
