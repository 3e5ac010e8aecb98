// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    smile = { ":)", ":simple_smile:" },
    sad = { ":(", ":worried:" },
    tongue = { "x :P", "x:stuck_out_tongue_winking_eye:" },
    grin = { "x :D", "x:grinning:" },
    wink = { ";)", ":wink:" },
    thumbs_up = { "(y)", ":thumbsup:" },
    thumbs_down = { "(n)", ":thumbsdown:" },
    info = { "(i)", ":information_source:" },
    check = { "(/)", ":white_check_mark:" },
    cross = { "(x)", ":x:" },
    warning = { "(!)", ":warning:" },
    no_entry = { "(-)", ":no_entry:" },
    question = { "(?)", ":question:" },
    bulb = { "(on)", ":bulb:" },
    star = { "(*)", ":star:" },
    rule = { "----", "---" },
    code = { "{code}", "```" },
    code_xml = { "{code:xml}", "```xml " },
    code_java = { "{code:java}", "```java " },
    code_javascript = { "{code:javascript}", "```javascript " },
    code_sql = { "{code:sql}", "```sql " },
    list_1 = { "# item", "1. item" },
    list_2 = { "## item", "  1. item" },
    list_3 = { "### item", "    1. item" },
    bullet_2 = { "** item", "  * item" },
    bullet_3 = { "*** item", "    * item" },
    dash_2 = { "-- item", "  * item" },
    dash_3 = { "--- item", "    * item" },
    h1 = { "h1. Title", "# Title" },
    h2 = { "h2. Title", "## Title" },
    h3 = { "h3. Title", "### Title" },
    h4 = { "h4. Title", "#### Title" },
    h5 = { "h5. Title", "##### Title" },
    h6 = { "h6. Title", "###### Title" },
)]
fn translate_single_token(input: &str, expected: &str) {
    assert_eq!(translate(input), expected);
}

#[parameterized(
    empty = { "" },
    plain = { "nothing to see here" },
    single_star = { "* item" },
    colon_without_space = { "xmlns:Pkg and a:D" },
    unknown_emoticon = { "(z) (yy" },
)]
fn translate_leaves_plain_text(input: &str) {
    assert_eq!(translate(input), input);
}

#[test]
fn translate_output_is_not_rescanned() {
    // "h1." becomes "#", which must not then be read as a "# " list marker.
    assert_eq!(translate("h1. Intro"), "# Intro");
}

#[test]
fn translate_longer_dash_run_wins() {
    assert_eq!(translate("----"), "---");
    assert_eq!(translate("--- x"), "    * x");
    assert_eq!(translate("-- x"), "  * x");
}

#[test]
fn translate_code_block_with_language() {
    let input = "{code:java}\nint x = 1;\n{code}";
    assert_eq!(translate(input), "```java \nint x = 1;\n```");
}

#[test]
fn translate_mixed_comment() {
    let input = "h2. Plan\n# first (y)\n## nested :)\nDone (/)";
    let expected = "## Plan\n1. first :thumbsup:\n  1. nested :simple_smile:\nDone :white_check_mark:";
    assert_eq!(translate(input), expected);
}

#[test]
fn translate_comment_smile() {
    assert_eq!(translate(":) great"), ":simple_smile: great");
}

#[parameterized(
    emoji = { ":) great (y)" },
    code = { "{code:sql}select 1{code}" },
    lists = { "# one\n** two\n-- three" },
)]
fn translate_is_stable_once_tokens_are_gone(input: &str) {
    let once = translate(input);
    assert_eq!(translate(&once), once);
}

#[test]
fn replacement_for_known_and_unknown() {
    assert_eq!(replacement_for("(on)"), Some(":bulb:"));
    assert_eq!(replacement_for("(off)"), None);
}

#[test]
fn rules_have_no_prefix_overlap() {
    for (i, (a, _)) in WIKI_RULES.iter().enumerate() {
        for (j, (b, _)) in WIKI_RULES.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
            }
        }
    }
}
