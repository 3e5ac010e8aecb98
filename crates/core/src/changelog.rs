// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Changelog rendering.
//!
//! Short fields render inline as a struck-through old value followed by
//! the new one. Long free-text fields ("multiline" fields) render as a
//! separate block with the new value translated to chat markdown.

use std::collections::HashSet;

use crate::event::FieldChange;
use crate::markup;

/// Field names rendered as blocks unless configured otherwise.
pub const DEFAULT_MULTILINE_FIELDS: &[&str] = &[
    "Acceptance Criteria",
    "Demo Script",
    "Release Notes Text",
    "Description",
    "Deployment Notes",
];

/// Set of display field names whose changes render as blocks.
///
/// Names are matched after first-letter capitalization, so configure
/// them as they appear in the message (`Description`, not `description`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultilineFields {
    names: HashSet<String>,
}

impl MultilineFields {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MultilineFields {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if changes to `display_name` render as a block.
    pub fn contains(&self, display_name: &str) -> bool {
        self.names.contains(display_name)
    }
}

impl Default for MultilineFields {
    fn default() -> Self {
        MultilineFields::new(DEFAULT_MULTILINE_FIELDS.iter().copied())
    }
}

/// Renders all changes in order. Empty input renders as an empty string.
pub fn render(changes: &[FieldChange], multiline: &MultilineFields) -> String {
    changes
        .iter()
        .map(|change| render_change(change, multiline))
        .collect()
}

/// Renders a single change.
pub fn render_change(change: &FieldChange, multiline: &MultilineFields) -> String {
    let name = change.display_name();
    if multiline.contains(&name) {
        format!(
            "\nChanged **{}**:\n\n---\n{}\n",
            name,
            markup::translate(&change.to_value)
        )
    } else {
        format!(
            "\n{}: ~~{}~~ {}",
            name,
            change.from_display().trim_matches(' '),
            change.to_value
        )
    }
}

#[cfg(test)]
#[path = "changelog_tests.rs"]
mod tests;
