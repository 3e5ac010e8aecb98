// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jm-core: Issue tracker webhook to chat message transformation.
//!
//! This crate turns a raw tracker webhook body into the JSON payload of a
//! chat incoming webhook. It performs no I/O; the relay binary owns the
//! network side.

pub mod changelog;
pub mod compose;
pub mod config;
pub mod error;
pub mod event;
pub mod markup;
pub mod payload;
pub mod transform;

pub use changelog::MultilineFields;
pub use compose::{Composer, PriorityRule, RenderedMessage};
pub use config::TransformConfig;
pub use error::{Error, Result};
pub use event::{Actor, EventKind, EventParser, FieldChange, InboundEvent, IssueRef, ParseMode};
pub use payload::{BotIdentity, OutboundPayload};
pub use transform::Transformer;
