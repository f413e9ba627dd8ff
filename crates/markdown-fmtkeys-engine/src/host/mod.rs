//! The capability surface the engine needs from its host editor.
//!
//! The engine never owns the document. It reads the host's buffer at the
//! start of a command, writes the rewritten span back once, and restores the
//! cursor. Anything that can show a text buffer with a cursor can implement
//! [`HostEditor`]; [`BufferEditor`] is the in-memory implementation used by
//! the CLI host and the test suite.

pub mod buffer;

pub use buffer::BufferEditor;

/// Zero-based line/column location. Columns are byte offsets into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Minimal editing surface required by the format commands.
pub trait HostEditor {
    /// Whether the user has an explicit multi-character selection.
    fn has_selection(&self) -> bool;

    /// Raw selection bounds, start ordered before end. May be mid-line; the
    /// engine widens to whole lines itself.
    fn selection_bounds(&self) -> (Position, Position);

    /// Current caret position.
    fn caret(&self) -> Position;

    /// Text of one line, without its trailing newline.
    fn line(&self, index: usize) -> String;

    /// Replace the text between two positions. `text` may span lines.
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    /// Select from `from` to `to`.
    fn set_selection(&mut self, from: Position, to: Position);

    /// Collapse the selection and place the caret.
    fn set_caret(&mut self, position: Position);
}
