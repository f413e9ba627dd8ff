/*!
 * Block-format editing core.
 *
 * Every command follows the same read-transform-write shape:
 *
 * 1. `selection` captures the host's state as a line-aligned [`Selection`]
 *    (a partial selection widens to whole lines; a lone caret takes its
 *    line and remembers where it was).
 * 2. `toggle` or `heading` decides what the span should become, using the
 *    prefix families in `patterns` and the indent-preserving rewriter in
 *    `rewrite`.
 * 3. The span is written back through the host in one `replace_range` call
 *    and the selection or caret is restored.
 *
 * The toggle rule is deliberately conservative: a format is only removed
 * when every line of the span already carries it. Mixed spans are
 * normalized by adding, never stripped.
 *
 * There is no state between commands; the host buffer is the single source
 * of truth and is read fresh each time.
 */

pub mod commands;
pub mod heading;
pub mod patterns;
pub mod rewrite;
pub mod selection;
pub mod toggle;

pub use commands::{FormatCommand, Hotkey, HotkeyParseError, Modifier};
pub use selection::Selection;
pub use toggle::FormatRequest;
