// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn render_empty_is_empty() {
    assert_eq!(render(&[], &MultilineFields::default()), "");
}

#[test]
fn render_empty_from_value_as_none() {
    let changes = [FieldChange::new("status", "", "Done")];
    assert_eq!(
        render(&changes, &MultilineFields::default()),
        "\nStatus: ~~None~~ Done"
    );
}

#[parameterized(
    plain = { "Open", "Open" },
    padded = { "  Open  ", "Open" },
    tabs_kept = { "\tOpen", "\tOpen" },
    only_spaces = { "   ", "" },
)]
fn render_inline_trims_spaces_from_old_value(from: &str, shown: &str) {
    let change = FieldChange::new("status", from, "Done");
    assert_eq!(
        render_change(&change, &MultilineFields::default()),
        format!("\nStatus: ~~{shown}~~ Done")
    );
}

#[test]
fn render_inline_new_value_untouched() {
    let change = FieldChange::new("summary", "Old", " New :) ");
    assert_eq!(
        render_change(&change, &MultilineFields::default()),
        "\nSummary: ~~Old~~  New :) "
    );
}

#[test]
fn render_multiline_block_translates_markup() {
    let change = FieldChange::new("description", "x", "{code}a{code}");
    let out = render_change(&change, &MultilineFields::default());
    assert_eq!(out, "\nChanged **Description**:\n\n---\n```a```\n");
    assert!(!out.contains("{code}"));
}

#[parameterized(
    acceptance = { "acceptance Criteria" },
    demo = { "demo Script" },
    release = { "release Notes Text" },
    description = { "description" },
    deployment = { "deployment Notes" },
)]
fn render_default_multiline_fields(field: &str) {
    let change = FieldChange::new(field, "", "h1. Title");
    let out = render_change(&change, &MultilineFields::default());
    assert!(out.starts_with("\nChanged **"), "{out:?}");
    assert!(out.ends_with("---\n# Title\n"), "{out:?}");
}

#[test]
fn render_multiline_lookup_is_case_sensitive_after_first_letter() {
    let change = FieldChange::new("release notes text", "a", "b");
    assert_eq!(
        render_change(&change, &MultilineFields::default()),
        "\nRelease notes text: ~~a~~ b"
    );
}

#[test]
fn render_custom_multiline_fields() {
    let fields = MultilineFields::new(["Steps"]);
    let changes = [
        FieldChange::new("steps", "", "# one"),
        FieldChange::new("description", "a", "b"),
    ];
    assert_eq!(
        render(&changes, &fields),
        "\nChanged **Steps**:\n\n---\n1. one\n\nDescription: ~~a~~ b"
    );
}

#[test]
fn render_keeps_change_order() {
    let changes = [
        FieldChange::new("priority", "Low", "High"),
        FieldChange::new("status", "Open", "Done"),
    ];
    assert_eq!(
        render(&changes, &MultilineFields::default()),
        "\nPriority: ~~Low~~ High\nStatus: ~~Open~~ Done"
    );
}

#[test]
fn multiline_fields_default_set() {
    let fields = MultilineFields::default();
    for name in DEFAULT_MULTILINE_FIELDS {
        assert!(fields.contains(name));
    }
    assert!(!fields.contains("description"));
    assert!(!MultilineFields::new(Vec::<String>::new()).contains("Description"));
}
