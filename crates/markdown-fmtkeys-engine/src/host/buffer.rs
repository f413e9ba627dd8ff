use super::{HostEditor, Position};

/// In-memory [`HostEditor`] backed by a line vector.
///
/// Holds the document as lines plus a caret and an optional selection, the
/// same observable state a real editor surface exposes. An empty document is
/// a single empty line, so every valid caret has a line to sit on.
#[derive(Debug, Clone)]
pub struct BufferEditor {
    lines: Vec<String>,
    caret: Position,
    selection: Option<(Position, Position)>,
}

impl BufferEditor {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            caret: Position::new(0, 0),
            selection: None,
        }
    }

    /// Current document content.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Select a range, leaving the caret at the selection end.
    pub fn select(&mut self, from: Position, to: Position) {
        self.caret = to;
        self.selection = Some((from, to));
    }

    /// Collapse any selection and place the caret.
    pub fn place_caret(&mut self, position: Position) {
        self.caret = position;
        self.selection = None;
    }

    pub fn selection(&self) -> Option<(Position, Position)> {
        self.selection
    }
}

impl HostEditor for BufferEditor {
    fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    fn selection_bounds(&self) -> (Position, Position) {
        self.selection.unwrap_or((self.caret, self.caret))
    }

    fn caret(&self) -> Position {
        self.caret
    }

    fn line(&self, index: usize) -> String {
        self.lines.get(index).cloned().unwrap_or_default()
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let last = self.lines.len() - 1;
        let from_line = from.line.min(last);
        let to_line = to.line.min(last);

        let head = {
            let line = &self.lines[from_line];
            line[..from.column.min(line.len())].to_string()
        };
        let tail = {
            let line = &self.lines[to_line];
            line[to.column.min(line.len())..].to_string()
        };

        let merged = format!("{head}{text}{tail}");
        let replacement: Vec<String> = merged.split('\n').map(str::to_string).collect();
        self.lines.splice(from_line..=to_line, replacement);
    }

    fn set_selection(&mut self, from: Position, to: Position) {
        self.select(from, to);
    }

    fn set_caret(&mut self, position: Position) {
        self.place_caret(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty_document_has_one_line() {
        let editor = BufferEditor::new("");

        assert_eq!(editor.line_count(), 1);
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn test_line_access() {
        let editor = BufferEditor::new("one\ntwo");

        assert_eq!(editor.line(0), "one");
        assert_eq!(editor.line(1), "two");
        assert_eq!(editor.line(5), "");
    }

    #[test]
    fn test_replace_range_single_line() {
        let mut editor = BufferEditor::new("hello world");
        editor.replace_range("there", Position::new(0, 6), Position::new(0, 11));

        assert_eq!(editor.text(), "hello there");
    }

    #[test]
    fn test_replace_range_whole_span() {
        let mut editor = BufferEditor::new("- a\n- b\nrest");
        editor.replace_range("a\nb", Position::new(0, 0), Position::new(1, 3));

        assert_eq!(editor.text(), "a\nb\nrest");
    }

    #[test]
    fn test_replace_range_grows_line_count() {
        let mut editor = BufferEditor::new("one");
        editor.replace_range("one\ntwo\nthree", Position::new(0, 0), Position::new(0, 3));

        assert_eq!(editor.line_count(), 3);
        assert_eq!(editor.text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_place_caret_collapses_selection() {
        let mut editor = BufferEditor::new("one\ntwo");
        editor.select(Position::new(0, 0), Position::new(1, 3));
        assert!(editor.has_selection());

        editor.place_caret(Position::new(1, 1));

        assert!(!editor.has_selection());
        assert_eq!(editor.caret(), Position::new(1, 1));
    }
}
