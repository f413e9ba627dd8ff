use crate::editing::{patterns, rewrite, selection};
use crate::host::HostEditor;

/// Declarative description of one user-facing toggle action.
#[derive(Debug, Clone, Copy)]
pub struct FormatRequest {
    /// Patterns identifying lines that already carry this format.
    pub searches: &'static [&'static str],
    /// Mutually exclusive families, stripped on the add path so switching
    /// between list kinds replaces the marker instead of stacking two.
    pub replace: &'static [&'static str],
    /// Literal prefix inserted after the indent.
    pub prefix: &'static str,
    /// Number lines `1. `, `2. `, ... instead of using `prefix`.
    pub numbering: bool,
}

pub const CHECKLIST: FormatRequest = FormatRequest {
    searches: &[patterns::TODO],
    replace: &[patterns::OL, patterns::UL],
    prefix: "- [ ] ",
    numbering: false,
};

pub const BLOCKQUOTE: FormatRequest = FormatRequest {
    searches: &[patterns::QUOTE],
    replace: &[],
    prefix: "> ",
    numbering: false,
};

pub const UNORDERED_LIST: FormatRequest = FormatRequest {
    searches: &[patterns::UL],
    replace: &[patterns::TODO, patterns::OL],
    prefix: "- ",
    numbering: false,
};

pub const ORDERED_LIST: FormatRequest = FormatRequest {
    searches: &[patterns::OL],
    replace: &[patterns::TODO, patterns::UL],
    prefix: "",
    numbering: true,
};

/// Toggle a block format on the current selection or line.
///
/// The decision rule is strict: only when *every* line of the span already
/// matches the identifying pattern is the format removed. A mixed span (some
/// lines formatted, some not) routes to the add path, which normalizes the
/// whole span rather than stripping the formatted part.
pub fn toggle_prefix(editor: &mut dyn HostEditor, request: &FormatRequest) {
    let sel = selection::capture(&*editor);

    let escaped;
    let identify: Vec<&str> = if request.searches.is_empty() {
        escaped = regex::escape(request.prefix);
        vec![escaped.as_str()]
    } else {
        request.searches.to_vec()
    };

    // Lines are classified most-specific-family-first, so a checklist line
    // does not count as "already a bullet" for the unordered toggle.
    let fully_matched = if request.searches.is_empty() {
        let pattern = patterns::combine(&identify);
        sel.content.split('\n').all(|line| pattern.is_match(line))
    } else {
        sel.content.split('\n').all(|line| {
            patterns::classify(line).is_some_and(|family| request.searches.contains(&family))
        })
    };

    if fully_matched {
        let updated = rewrite::prefix_lines(&sel.content, "", &identify, false);
        selection::commit(editor, &sel, &updated);
    } else {
        let strip: Vec<&str> = identify.iter().chain(request.replace).copied().collect();
        let updated = if request.numbering {
            number_lines(&sel.content, &strip)
        } else {
            rewrite::prefix_lines(&sel.content, request.prefix, &strip, true)
        };
        selection::commit(editor, &sel, &updated);
    }
}

/// Add a prefix to the current selection or line, stripping the `replace`
/// families first.
pub fn add_prefix(editor: &mut dyn HostEditor, replace: &[&str], prefix: &str) {
    let sel = selection::capture(&*editor);
    let updated = rewrite::prefix_lines(&sel.content, prefix, replace, true);
    selection::commit(editor, &sel, &updated);
}

/// Strip the given prefix families from the current selection or line.
pub fn remove_prefix(editor: &mut dyn HostEditor, searches: &[&str]) {
    let sel = selection::capture(&*editor);
    let updated = rewrite::prefix_lines(&sel.content, "", searches, false);
    selection::commit(editor, &sel, &updated);
}

/// Strip every known prefix family, leaving plain text.
pub fn remove_formatting(editor: &mut dyn HostEditor) {
    remove_prefix(editor, patterns::PREFIXES);
}

/// Apply a heading of the given level (1-6), replacing any other block
/// format. Always adds; headings are not toggled.
pub fn apply_heading(editor: &mut dyn HostEditor, level: u8) {
    let level = level.clamp(1, 6) as usize;
    let prefix = format!("{} ", "#".repeat(level));
    add_prefix(editor, patterns::PREFIXES, &prefix);
}

/// The ordered-list add strategy: numbering restarts at 1 on every
/// toggle-on, whatever numbers the lines carried before.
fn number_lines(content: &str, strip: &[&str]) -> String {
    content
        .split('\n')
        .enumerate()
        .map(|(index, line)| rewrite::prefix_lines(line, &format!("{}. ", index + 1), strip, true))
        .collect::<Vec<_>>()
        .join("\n")
}
