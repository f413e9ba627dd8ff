use std::fmt;

use thiserror::Error;

use crate::editing::{heading, toggle};
use crate::host::HostEditor;

/// Modifier part of a key chord. `Mod` is the platform primary modifier
/// (Cmd on macOS, Ctrl elsewhere); hosts resolve it when registering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Mod,
    Ctrl,
    Shift,
    Alt,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modifier::Mod => "Mod",
            Modifier::Ctrl => "Ctrl",
            Modifier::Shift => "Shift",
            Modifier::Alt => "Alt",
        };
        write!(f, "{name}")
    }
}

/// A key chord: zero or more modifiers plus a key name, e.g. `Mod+Shift+7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HotkeyParseError {
    #[error("empty key chord")]
    Empty,
    #[error("unknown modifier `{0}` in key chord")]
    UnknownModifier(String),
}

impl Hotkey {
    pub fn new(modifiers: Vec<Modifier>, key: &str) -> Self {
        Self {
            modifiers,
            key: key.to_string(),
        }
    }

    /// Parse a chord like `Mod+Shift+7` or `Ctrl+Alt+Plus`. The last
    /// segment is the key name, everything before it must be a modifier.
    pub fn parse(chord: &str) -> Result<Self, HotkeyParseError> {
        let segments: Vec<&str> = chord.split('+').map(str::trim).collect();
        let (key, modifier_names) = segments.split_last().ok_or(HotkeyParseError::Empty)?;
        if key.is_empty() {
            return Err(HotkeyParseError::Empty);
        }

        let mut modifiers = Vec::with_capacity(modifier_names.len());
        for name in modifier_names {
            let modifier = match name.to_ascii_lowercase().as_str() {
                "mod" => Modifier::Mod,
                "ctrl" | "control" => Modifier::Ctrl,
                "shift" => Modifier::Shift,
                "alt" | "option" => Modifier::Alt,
                _ => return Err(HotkeyParseError::UnknownModifier(name.to_string())),
            };
            modifiers.push(modifier);
        }

        Ok(Self {
            modifiers,
            key: key.to_string(),
        })
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier}+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Every user-facing formatting command.
///
/// Each maps a stable string id to one engine entry point; the heading
/// levels are a parameter rather than six near-identical variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    ToggleChecklist,
    ToggleBlockquote,
    ToggleUnorderedList,
    ToggleOrderedList,
    RemoveFormatting,
    ApplyHeading(u8),
    IncreaseHeadingLevel,
    DecreaseHeadingLevel,
}

impl FormatCommand {
    /// Every registrable command, heading levels 1-6 included.
    pub fn all() -> Vec<FormatCommand> {
        let mut commands = vec![
            FormatCommand::ToggleChecklist,
            FormatCommand::ToggleBlockquote,
            FormatCommand::ToggleUnorderedList,
            FormatCommand::ToggleOrderedList,
            FormatCommand::RemoveFormatting,
        ];
        commands.extend((1..=6).map(FormatCommand::ApplyHeading));
        commands.push(FormatCommand::IncreaseHeadingLevel);
        commands.push(FormatCommand::DecreaseHeadingLevel);
        commands
    }

    /// Stable identifier used for registration and keymap files.
    pub fn id(&self) -> String {
        match self {
            FormatCommand::ToggleChecklist => "toggle-checklist".to_string(),
            FormatCommand::ToggleBlockquote => "toggle-blockquote".to_string(),
            FormatCommand::ToggleUnorderedList => "toggle-unordered-list".to_string(),
            FormatCommand::ToggleOrderedList => "toggle-ordered-list".to_string(),
            FormatCommand::RemoveFormatting => "remove-formatting".to_string(),
            FormatCommand::ApplyHeading(level) => format!("apply-heading-{level}"),
            FormatCommand::IncreaseHeadingLevel => "increase-heading-level".to_string(),
            FormatCommand::DecreaseHeadingLevel => "decrease-heading-level".to_string(),
        }
    }

    /// Inverse of [`FormatCommand::id`].
    pub fn from_id(id: &str) -> Option<FormatCommand> {
        if let Some(level) = id.strip_prefix("apply-heading-") {
            let level: u8 = level.parse().ok()?;
            return (1..=6).contains(&level).then_some(FormatCommand::ApplyHeading(level));
        }
        match id {
            "toggle-checklist" => Some(FormatCommand::ToggleChecklist),
            "toggle-blockquote" => Some(FormatCommand::ToggleBlockquote),
            "toggle-unordered-list" => Some(FormatCommand::ToggleUnorderedList),
            "toggle-ordered-list" => Some(FormatCommand::ToggleOrderedList),
            "remove-formatting" => Some(FormatCommand::RemoveFormatting),
            "increase-heading-level" => Some(FormatCommand::IncreaseHeadingLevel),
            "decrease-heading-level" => Some(FormatCommand::DecreaseHeadingLevel),
            _ => None,
        }
    }

    /// Human-readable command name.
    pub fn name(&self) -> String {
        match self {
            FormatCommand::ToggleChecklist => "Toggle checklist for selection".to_string(),
            FormatCommand::ToggleBlockquote => "Toggle blockquote for selection".to_string(),
            FormatCommand::ToggleUnorderedList => "Toggle bulleted list for selection".to_string(),
            FormatCommand::ToggleOrderedList => "Toggle numbered list for selection".to_string(),
            FormatCommand::RemoveFormatting => "Remove formatting".to_string(),
            FormatCommand::ApplyHeading(level) => format!("Apply heading {level} to selection"),
            FormatCommand::IncreaseHeadingLevel => "Increase heading level".to_string(),
            FormatCommand::DecreaseHeadingLevel => "Decrease heading level".to_string(),
        }
    }

    /// The stock key chord for this command.
    pub fn default_hotkey(&self) -> Hotkey {
        use Modifier::{Alt, Mod, Shift};
        match self {
            FormatCommand::ToggleChecklist => Hotkey::new(vec![Mod, Shift], "6"),
            FormatCommand::ToggleBlockquote => Hotkey::new(vec![Mod, Shift], "9"),
            FormatCommand::ToggleUnorderedList => Hotkey::new(vec![Mod, Shift], "8"),
            FormatCommand::ToggleOrderedList => Hotkey::new(vec![Mod, Shift], "7"),
            FormatCommand::RemoveFormatting => Hotkey::new(vec![Mod, Alt], "0"),
            FormatCommand::ApplyHeading(level) => Hotkey::new(vec![Mod, Alt], &level.to_string()),
            FormatCommand::IncreaseHeadingLevel => Hotkey::new(vec![Mod, Shift], "Plus"),
            FormatCommand::DecreaseHeadingLevel => Hotkey::new(vec![Mod, Shift], "Minus"),
        }
    }

    /// Run the command against the host editor.
    pub fn run(&self, editor: &mut dyn HostEditor) {
        match self {
            FormatCommand::ToggleChecklist => toggle::toggle_prefix(editor, &toggle::CHECKLIST),
            FormatCommand::ToggleBlockquote => toggle::toggle_prefix(editor, &toggle::BLOCKQUOTE),
            FormatCommand::ToggleUnorderedList => {
                toggle::toggle_prefix(editor, &toggle::UNORDERED_LIST)
            }
            FormatCommand::ToggleOrderedList => {
                toggle::toggle_prefix(editor, &toggle::ORDERED_LIST)
            }
            FormatCommand::RemoveFormatting => toggle::remove_formatting(editor),
            FormatCommand::ApplyHeading(level) => toggle::apply_heading(editor, *level),
            FormatCommand::IncreaseHeadingLevel => heading::increase(editor),
            FormatCommand::DecreaseHeadingLevel => heading::decrease(editor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for command in FormatCommand::all() {
            assert_eq!(FormatCommand::from_id(&command.id()), Some(command));
        }
    }

    #[test]
    fn test_all_lists_thirteen_commands() {
        assert_eq!(FormatCommand::all().len(), 13);
    }

    #[test]
    fn test_from_id_rejects_unknown() {
        assert_eq!(FormatCommand::from_id("toggle-bold"), None);
        assert_eq!(FormatCommand::from_id("apply-heading-7"), None);
        assert_eq!(FormatCommand::from_id("apply-heading-0"), None);
        assert_eq!(FormatCommand::from_id("apply-heading-x"), None);
    }

    #[test]
    fn test_hotkey_parse() {
        assert_eq!(
            Hotkey::parse("Mod+Shift+7"),
            Ok(Hotkey::new(vec![Modifier::Mod, Modifier::Shift], "7"))
        );
        assert_eq!(
            Hotkey::parse("ctrl+alt+Plus"),
            Ok(Hotkey::new(vec![Modifier::Ctrl, Modifier::Alt], "Plus"))
        );
        assert_eq!(Hotkey::parse("X"), Ok(Hotkey::new(vec![], "X")));
    }

    #[test]
    fn test_hotkey_parse_errors() {
        assert_eq!(Hotkey::parse(""), Err(HotkeyParseError::Empty));
        assert_eq!(Hotkey::parse("Mod+"), Err(HotkeyParseError::Empty));
        assert_eq!(
            Hotkey::parse("Hyper+X"),
            Err(HotkeyParseError::UnknownModifier("Hyper".to_string()))
        );
    }

    #[test]
    fn test_hotkey_display_round_trip() {
        for command in FormatCommand::all() {
            let hotkey = command.default_hotkey();
            assert_eq!(Hotkey::parse(&hotkey.to_string()), Ok(hotkey));
        }
    }
}
