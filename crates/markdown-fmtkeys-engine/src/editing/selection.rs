use crate::host::{HostEditor, Position};

/// Normalized, line-aligned view of the host's selection state.
///
/// Built fresh at the start of every command and discarded when the command
/// completes. The span always covers whole lines (column 0 of the first line
/// through end-of-line of the last), even when the user's raw selection was
/// partial. `original_caret` is only present in caret-only mode so the caret
/// can be put back after the edit changes the line's length.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub has_selection: bool,
    pub start: Position,
    pub end: Position,
    pub content: String,
    pub original_caret: Option<Position>,
}

/// Read the host's selection state, widened to whole lines.
pub fn capture(editor: &dyn HostEditor) -> Selection {
    if editor.has_selection() {
        let (from, to) = editor.selection_bounds();
        let start = Position::new(from.line, 0);
        let end = Position::new(to.line, editor.line(to.line).len());
        let content = read_span(editor, from.line, to.line);
        Selection {
            has_selection: true,
            start,
            end,
            content,
            original_caret: None,
        }
    } else {
        let caret = editor.caret();
        let content = editor.line(caret.line);
        Selection {
            has_selection: false,
            start: Position::new(caret.line, 0),
            end: Position::new(caret.line, content.len()),
            content,
            original_caret: Some(caret),
        }
    }
}

/// Restore the selection or caret after the span has been rewritten.
///
/// A selection is re-extended to the new end of its last line. A lone caret
/// is shifted by the net length change of the last line, which keeps it
/// anchored to the same character when the prefix in front of it grew or
/// shrank.
pub fn restore(editor: &mut dyn HostEditor, selection: &Selection, updated: &str) {
    if selection.has_selection {
        let end_line = selection.end.line;
        let end = Position::new(end_line, editor.line(end_line).len());
        editor.set_selection(selection.start, end);
    } else if let Some(caret) = selection.original_caret {
        let delta = last_line_len(updated) - last_line_len(&selection.content);
        let column = (caret.column as isize + delta).max(0) as usize;
        editor.set_caret(Position::new(caret.line, column));
    }
}

/// Replace the captured span with `updated` and restore the cursor.
pub(crate) fn commit(editor: &mut dyn HostEditor, selection: &Selection, updated: &str) {
    editor.replace_range(updated, selection.start, selection.end);
    restore(editor, selection, updated);
}

fn read_span(editor: &dyn HostEditor, from_line: usize, to_line: usize) -> String {
    (from_line..=to_line)
        .map(|index| editor.line(index))
        .collect::<Vec<_>>()
        .join("\n")
}

fn last_line_len(content: &str) -> isize {
    content.rsplit('\n').next().map_or(0, str::len) as isize
}
