//! End-to-end command tests driving the plugin against an in-memory host.

use markdown_fmtkeys_engine::{BufferEditor, FormatPlugin, HostEditor, Position};
use pretty_assertions::assert_eq;

fn editor_with_selection(text: &str) -> BufferEditor {
    let mut editor = BufferEditor::new(text);
    let last = editor.line_count() - 1;
    let end = Position::new(last, editor.line(last).len());
    editor.select(Position::new(0, 0), end);
    editor
}

fn apply(text: &str, command_id: &str) -> String {
    let plugin = FormatPlugin::new();
    let mut editor = editor_with_selection(text);
    assert!(plugin.dispatch(command_id, Some(&mut editor)));
    editor.text()
}

#[test]
fn toggle_unordered_list_moves_caret_with_the_text() {
    let plugin = FormatPlugin::new();
    let mut editor = BufferEditor::new("world");
    editor.place_caret(Position::new(0, 5));

    plugin.dispatch("toggle-unordered-list", Some(&mut editor));

    assert_eq!(editor.text(), "- world");
    assert_eq!(editor.caret(), Position::new(0, 7));

    // Toggling again strips the marker and pulls the caret back.
    plugin.dispatch("toggle-unordered-list", Some(&mut editor));

    assert_eq!(editor.text(), "world");
    assert_eq!(editor.caret(), Position::new(0, 5));
}

#[test]
fn remove_formatting_strips_numbered_list() {
    assert_eq!(apply("1. a\n2. b", "remove-formatting"), "a\nb");
}

#[test]
fn checklist_full_match_removes() {
    assert_eq!(
        apply("- [ ] one\n- [ ] two\n- [ ] three", "toggle-checklist"),
        "one\ntwo\nthree"
    );
}

#[test]
fn checklist_mixed_span_normalizes() {
    assert_eq!(
        apply("- [ ] one\ntwo", "toggle-checklist"),
        "- [ ] one\n- [ ] two"
    );
}

#[test]
fn ordered_list_renumbers_from_one() {
    assert_eq!(
        apply("4. a\n9. b\nc", "toggle-ordered-list"),
        "1. a\n2. b\n3. c"
    );
}

#[test]
fn list_kinds_replace_each_other() {
    let once = apply("- a\n- b", "toggle-ordered-list");
    assert_eq!(once, "1. a\n2. b");

    let back = apply(&once, "toggle-unordered-list");
    assert_eq!(back, "- a\n- b");
}

#[test]
fn heading_decrease_scenario() {
    assert_eq!(apply("### Title", "decrease-heading-level"), "## Title");
    assert_eq!(apply("# Title", "decrease-heading-level"), "Title");
}

#[test]
fn heading_increase_saturates_at_six() {
    let mut text = "Title".to_string();
    text = apply(&text, "increase-heading-level");
    assert_eq!(text, "# Title");

    for _ in 0..5 {
        text = apply(&text, "increase-heading-level");
    }
    assert_eq!(text, "###### Title");

    text = apply(&text, "increase-heading-level");
    assert_eq!(text, "###### Title");
}

#[test]
fn apply_heading_commands_replace_other_formats() {
    assert_eq!(apply("- item", "apply-heading-1"), "# item");
    assert_eq!(apply("> quote", "apply-heading-3"), "### quote");
    assert_eq!(apply("## old", "apply-heading-6"), "###### old");
}

#[test]
fn indentation_survives_every_command() {
    let text = "  one\n\ttwo";

    assert_eq!(apply(text, "toggle-blockquote"), "  > one\n\t> two");
    assert_eq!(apply(text, "toggle-ordered-list"), "  1. one\n\t2. two");
    assert_eq!(apply(text, "increase-heading-level"), "  # one\n\t# two");
    assert_eq!(
        apply("  - one\n\t- two", "remove-formatting"),
        "  one\n\ttwo"
    );
}

#[test]
fn partial_selection_widens_to_whole_lines() {
    let plugin = FormatPlugin::new();
    let mut editor = BufferEditor::new("alpha\nbeta\ngamma");
    editor.select(Position::new(0, 2), Position::new(1, 1));

    plugin.dispatch("toggle-blockquote", Some(&mut editor));

    assert_eq!(editor.text(), "> alpha\n> beta\ngamma");
    assert_eq!(
        editor.selection(),
        Some((Position::new(0, 0), Position::new(1, 6)))
    );
}

#[test]
fn round_trip_identity_for_plain_spans() {
    let plain = "alpha\nbeta\ngamma";
    for id in [
        "toggle-checklist",
        "toggle-blockquote",
        "toggle-unordered-list",
        "toggle-ordered-list",
    ] {
        let formatted = apply(plain, id);
        assert_eq!(apply(&formatted, id), plain, "round trip through {id}");
    }
}
