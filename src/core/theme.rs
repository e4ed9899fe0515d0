//! Persisted light/dark preference.
//!
//! The preference lives in a small JSON object under the project's state
//! directory, next to any other local settings:
//!
//! ```json
//! { "theme": "dark" }
//! ```
//!
//! Only `"dark"` selects the dark theme. A missing file, a missing key or
//! any other value reads as light.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key the theme is stored under. Shared with the page toggle script.
pub const THEME_KEY: &str = "theme";

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Interpret a stored value. Anything but `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

/// JSON key-value file holding user preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store inside `state_dir` (usually `<root>/.folio`).
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(PREFERENCES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current theme; falls back to the default on any read problem.
    pub fn read_theme(&self) -> Theme {
        let entries = match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                crate::debug!("theme"; "ignoring unreadable preferences: {:#}", e);
                return Theme::default();
            }
        };
        Theme::from_stored(entries.get(THEME_KEY).and_then(Value::as_str))
    }

    /// Persist `theme`, keeping any other keys in the file. A file that does
    /// not hold a JSON object is an error and stays untouched.
    pub fn write_theme(&self, theme: Theme) -> Result<()> {
        let mut entries = self
            .load()
            .with_context(|| format!("refusing to overwrite {}", self.path.display()))?;
        entries.insert(THEME_KEY.into(), Value::String(theme.as_str().into()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    /// Flip the stored theme and return the new value.
    pub fn toggle_theme(&self) -> Result<Theme> {
        let next = self.read_theme().toggle();
        self.write_theme(next)?;
        Ok(next)
    }

    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;
        match value {
            Value::Object(map) => Ok(map),
            _ => anyhow::bail!("{} is not a JSON object", self.path.display()),
        }
    }
}
