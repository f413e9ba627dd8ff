use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use markdown_fmtkeys_engine::{
    Binding, FormatCommand, Hotkey, HotkeyParseError, default_bindings,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeymapError {
    #[error("Failed to read keymap file at {keymap_path}: {source}")]
    KeymapReadError {
        keymap_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse keymap file at {keymap_path}: {source}")]
    KeymapParseError {
        keymap_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Keymap refers to unknown command `{id}`")]
    UnknownCommand { id: String },

    #[error("Invalid key chord for `{id}`: {source}")]
    InvalidChord {
        id: String,
        source: HotkeyParseError,
    },
}

/// On-disk keymap format: a `[keys]` table of command id to key chord.
///
/// ```toml
/// [keys]
/// toggle-checklist = "Ctrl+Alt+C"
/// remove-formatting = "Ctrl+Alt+Backspace"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct KeymapFile {
    #[serde(default)]
    pub keys: BTreeMap<String, String>,
}

/// The resolved binding table: the engine defaults with any user overrides
/// applied on top.
#[derive(Debug, Clone)]
pub struct Keymap {
    pub bindings: Vec<Binding>,
}

impl Keymap {
    /// The stock bindings with no overrides.
    pub fn defaults() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }

    /// Load a keymap file and merge it over the defaults. A missing file is
    /// not an error: the caller gets `Ok(None)` and keeps the defaults.
    pub fn load_from_path<P: AsRef<Path>>(keymap_path: P) -> Result<Option<Self>, KeymapError> {
        let keymap_path = keymap_path.as_ref();
        if !keymap_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(keymap_path).map_err(|source| {
            KeymapError::KeymapReadError {
                keymap_path: keymap_path.to_path_buf(),
                source,
            }
        })?;

        let file: KeymapFile =
            toml::from_str(&content).map_err(|source| KeymapError::KeymapParseError {
                keymap_path: keymap_path.to_path_buf(),
                source,
            })?;

        Ok(Some(Self::from_overrides(&file.keys)?))
    }

    /// Apply chord overrides to the default table. Every key must name a
    /// known command and parse as a chord.
    pub fn from_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, KeymapError> {
        let mut bindings = default_bindings();

        for (id, chord) in overrides {
            let command = FormatCommand::from_id(id).ok_or_else(|| {
                KeymapError::UnknownCommand { id: id.clone() }
            })?;
            let hotkey = Hotkey::parse(chord).map_err(|source| KeymapError::InvalidChord {
                id: id.clone(),
                source,
            })?;

            if let Some(binding) = bindings.iter_mut().find(|b| b.command == command) {
                binding.hotkey = hotkey;
            }
        }

        Ok(Self { bindings })
    }
}
