// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transform configuration.
//!
//! Stored as TOML. Every key is optional:
//!
//! ```toml
//! parse_mode = "tolerant"
//! avatar_size = "16x16"
//! multiline_fields = ["Description", "Release Notes Text"]
//!
//! [[priority]]
//! prefix = "SVD"
//! color = "ff0000"
//!
//! [bot]
//! username = "JIRA"
//! icon_url = "https://example.com/logo.png"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::changelog::{MultilineFields, DEFAULT_MULTILINE_FIELDS};
use crate::compose::{default_priority_rules, PriorityRule};
use crate::error::{Error, Result};
use crate::event::{ParseMode, DEFAULT_AVATAR_SIZE};
use crate::payload::BotIdentity;

/// Settings for the whole parse → compose → serialize pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// How malformed webhook JSON is handled.
    #[serde(default)]
    pub parse_mode: ParseMode,
    /// Key of the `avatarUrls` entry used for the actor icon.
    #[serde(default = "default_avatar_size")]
    pub avatar_size: String,
    /// Display names of fields rendered as blocks.
    #[serde(default = "default_multiline_fields")]
    pub multiline_fields: Vec<String>,
    /// Issue key prefixes that color the message, first match wins.
    #[serde(default = "default_priority_rules")]
    pub priority: Vec<PriorityRule>,
    /// Identity the message is posted as.
    #[serde(default)]
    pub bot: BotIdentity,
}

fn default_avatar_size() -> String {
    DEFAULT_AVATAR_SIZE.to_string()
}

fn default_multiline_fields() -> Vec<String> {
    DEFAULT_MULTILINE_FIELDS
        .iter()
        .map(|name| name.to_string())
        .collect()
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig {
            parse_mode: ParseMode::default(),
            avatar_size: default_avatar_size(),
            multiline_fields: default_multiline_fields(),
            priority: default_priority_rules(),
            bot: BotIdentity::default(),
        }
    }
}

impl TransformConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TransformConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks priority rules: non-empty prefixes and six hex digit colors.
    pub fn validate(&self) -> Result<()> {
        for rule in &self.priority {
            if rule.prefix.is_empty() {
                return Err(Error::Config(
                    "priority rule prefix must not be empty".to_string(),
                ));
            }
            if !is_hex_color(&rule.color) {
                return Err(Error::Config(format!(
                    "invalid color '{}' for prefix '{}'\n  hint: use six hex digits, e.g. ff0000",
                    rule.color, rule.prefix
                )));
            }
        }
        Ok(())
    }

    pub fn multiline(&self) -> MultilineFields {
        MultilineFields::new(self.multiline_fields.iter().cloned())
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
