// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wiki markup to chat markdown translation.
//!
//! The tracker writes comments and long fields in its own wiki dialect
//! (`h1.`, `{code}`, `(y)` emoticons, `#` numbered lists). The chat side
//! speaks markdown with `:emoji:` shortcodes. Translation is a single
//! left-to-right scan over a fixed token table: at each position the
//! first rule in table order that matches is replaced, and replaced text
//! is never scanned again.

use regex::Regex;
use std::sync::LazyLock;

/// Source token to target token, in match priority order.
///
/// No source token is a prefix of another, so table priority and
/// longest-match agree at every position.
pub const WIKI_RULES: &[(&str, &str)] = &[
    (":)", ":simple_smile:"),
    (":(", ":worried:"),
    // Leading space keeps `xmlns:Pkg` style namespaces intact.
    (" :P", ":stuck_out_tongue_winking_eye:"),
    (" :D", ":grinning:"),
    (";)", ":wink:"),
    ("(y)", ":thumbsup:"),
    ("(n)", ":thumbsdown:"),
    ("(i)", ":information_source:"),
    ("(/)", ":white_check_mark:"),
    ("(x)", ":x:"),
    ("(!)", ":warning:"),
    ("(-)", ":no_entry:"),
    ("(?)", ":question:"),
    ("(on)", ":bulb:"),
    ("(*)", ":star:"),
    ("----", "---"),
    ("{code}", "```"),
    ("{code:xml}", "```xml "),
    ("{code:java}", "```java "),
    ("{code:javascript}", "```javascript "),
    ("{code:sql}", "```sql "),
    ("# ", "1. "),
    ("## ", "  1. "),
    ("### ", "    1. "),
    ("** ", "  * "),
    ("*** ", "    * "),
    ("-- ", "  * "),
    ("--- ", "    * "),
    ("h1.", "#"),
    ("h2.", "##"),
    ("h3.", "###"),
    ("h4.", "####"),
    ("h5.", "#####"),
    ("h6.", "######"),
];

// Alternation in table order. The regex engine uses leftmost-first
// semantics, so the earliest listed alternative wins at a given offset.
// Every alternative is an escaped literal, so compilation cannot fail.
static WIKI_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = WIKI_RULES
        .iter()
        .map(|(from, _)| regex::escape(from))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&alternation) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Translates wiki markup into chat markdown.
///
/// Pure and deterministic. Text without any known token is returned
/// unchanged.
pub fn translate(input: &str) -> String {
    WIKI_RE
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let matched = &caps[0];
            match replacement_for(matched) {
                Some(to) => to.to_string(),
                None => matched.to_string(),
            }
        })
        .into_owned()
}

/// Looks up the target token for an exact source token.
pub fn replacement_for(token: &str) -> Option<&'static str> {
    WIKI_RULES
        .iter()
        .find(|(from, _)| *from == token)
        .map(|(_, to)| *to)
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
