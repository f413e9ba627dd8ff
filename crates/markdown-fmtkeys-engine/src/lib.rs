pub mod editing;
pub mod host;
pub mod plugin;

// Re-export key types for easier usage
pub use editing::{commands::*, selection::Selection, toggle::FormatRequest};
pub use host::{BufferEditor, HostEditor, Position};
pub use plugin::{Binding, FormatPlugin, default_bindings};
