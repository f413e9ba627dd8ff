use regex::Regex;

use crate::editing::{patterns, rewrite, selection};
use crate::host::HostEditor;

/// Deepen every line of the selection by one heading level.
///
/// Plain lines become level-1 headings; a line already at level 6 is left
/// alone. Each line is handled independently, there is no cross-line state.
pub fn increase(editor: &mut dyn HostEditor) {
    adjust(editor, increase_line);
}

/// Raise every line of the selection by one heading level.
///
/// A level-1 heading drops its marker and separator entirely, leaving the
/// body as plain text. Lines that are not headings are left alone.
pub fn decrease(editor: &mut dyn HostEditor) {
    adjust(editor, decrease_line);
}

fn adjust(editor: &mut dyn HostEditor, adjust_line: fn(&str, &Regex) -> String) {
    let sel = selection::capture(&*editor);
    let pattern = patterns::combine(&[patterns::HEADING]);
    let updated = sel
        .content
        .split('\n')
        .map(|line| adjust_line(line, &pattern))
        .collect::<Vec<_>>()
        .join("\n");
    selection::commit(editor, &sel, &updated);
}

fn increase_line(line: &str, pattern: &Regex) -> String {
    let (indent, rest) = rewrite::split_indent(line);
    match pattern.captures(rest) {
        None => format!("{indent}# {rest}"),
        Some(caps) if caps[1].len() >= 6 => line.to_string(),
        Some(_) => format!("{indent}#{rest}"),
    }
}

fn decrease_line(line: &str, pattern: &Regex) -> String {
    let (indent, rest) = rewrite::split_indent(line);
    match pattern.captures(rest) {
        None => line.to_string(),
        // Level 1: take off the `#` and its separator, keep the body.
        Some(caps) if caps[1].len() == 1 => format!("{indent}{}", &rest[2..]),
        Some(_) => format!("{indent}{}", &rest[1..]),
    }
}
