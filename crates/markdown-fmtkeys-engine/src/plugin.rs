use crate::editing::commands::{FormatCommand, Hotkey};
use crate::host::HostEditor;

/// One registered command with its key chord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub command: FormatCommand,
    pub hotkey: Hotkey,
}

/// Process-wide plugin handle.
///
/// Holds the registered-command table and nothing else. `start` and `stop`
/// only log; there is no other global state to set up or tear down.
#[derive(Debug, Clone)]
pub struct FormatPlugin {
    bindings: Vec<Binding>,
}

impl FormatPlugin {
    /// Plugin with the stock binding table.
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    pub fn with_bindings(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn start(&self) {
        log::info!("Loading...");
        for binding in &self.bindings {
            log::debug!("registered {} ({})", binding.command.id(), binding.hotkey);
        }
        log::info!("Loaded!");
    }

    pub fn stop(&self) {
        log::info!("Cleanly shutdown");
    }

    /// Dispatch a command by id against the active editor, if any.
    ///
    /// No active editor and unknown ids are silent no-ops; the return value
    /// reports whether a command actually ran.
    pub fn dispatch(&self, id: &str, editor: Option<&mut dyn HostEditor>) -> bool {
        let Some(editor) = editor else {
            return false;
        };
        let Some(binding) = self.bindings.iter().find(|b| b.command.id() == id) else {
            return false;
        };
        binding.command.run(editor);
        true
    }
}

impl Default for FormatPlugin {
    fn default() -> Self {
        Self::new()
    }
}

/// The stock binding table: every command under its default chord.
pub fn default_bindings() -> Vec<Binding> {
    FormatCommand::all()
        .into_iter()
        .map(|command| {
            let hotkey = command.default_hotkey();
            Binding { command, hotkey }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{BufferEditor, Position};

    #[test]
    fn test_default_bindings_cover_every_command() {
        let bindings = default_bindings();

        assert_eq!(bindings.len(), FormatCommand::all().len());
        for command in FormatCommand::all() {
            assert!(bindings.iter().any(|b| b.command == command));
        }
    }

    #[test]
    fn test_dispatch_runs_command() {
        let plugin = FormatPlugin::new();
        let mut editor = BufferEditor::new("task");
        editor.place_caret(Position::new(0, 0));

        let ran = plugin.dispatch("toggle-checklist", Some(&mut editor));

        assert!(ran);
        assert_eq!(editor.text(), "- [ ] task");
    }

    #[test]
    fn test_dispatch_without_editor_is_noop() {
        let plugin = FormatPlugin::new();

        assert!(!plugin.dispatch("toggle-checklist", None));
    }

    #[test]
    fn test_dispatch_unknown_id_is_noop() {
        let plugin = FormatPlugin::new();
        let mut editor = BufferEditor::new("task");

        let ran = plugin.dispatch("toggle-bold", Some(&mut editor));

        assert!(!ran);
        assert_eq!(editor.text(), "task");
    }

    #[test]
    fn test_custom_bindings_replace_table() {
        let plugin = FormatPlugin::with_bindings(vec![Binding {
            command: FormatCommand::ToggleBlockquote,
            hotkey: Hotkey::new(vec![], "F9"),
        }]);

        assert_eq!(plugin.bindings().len(), 1);

        let mut editor = BufferEditor::new("text");
        assert!(!plugin.dispatch("toggle-checklist", Some(&mut editor)));
        assert!(plugin.dispatch("toggle-blockquote", Some(&mut editor)));
        assert_eq!(editor.text(), "> text");
    }
}
