//! Configuration loading and parsing.
//!
//! Parses `marrow.toml` (or an override path provided by the binary). Every
//! section is optional and unknown fields are ignored so older files keep
//! loading. A file that fails to parse is reported and replaced by defaults;
//! a bad config never prevents the editor from starting.
//!
//! ```toml
//! [editor]
//! tab_stop = 4
//! center = false
//! auto_indent = true
//! backup = false
//! status_timeout_secs = 5
//!
//! [highlight]
//! numbers = true
//! strings = true
//!
//! [theme]
//! name = "default"
//!
//! [themes.solar]
//! keyword = 36
//! ```

mod theme;

pub use theme::{Theme, ThemeFile, ThemeSet};

use anyhow::Result;
use core_syntax::SyntaxFlags;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// Accepted tab stop range; values outside are clamped.
pub const TAB_STOP_RANGE: std::ops::RangeInclusive<usize> = 1..=16;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    pub tab_stop: usize,
    pub center: bool,
    pub auto_indent: bool,
    pub backup: bool,
    pub status_timeout_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: 4,
            center: false,
            auto_indent: true,
            backup: false,
            status_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HighlightConfig {
    pub numbers: bool,
    pub strings: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            numbers: true,
            strings: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeSelect {
    pub name: String,
}

impl Default for ThemeSelect {
    fn default() -> Self {
        Self {
            name: ThemeSet::DEFAULT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub theme: ThemeSelect,
    #[serde(default)]
    pub themes: BTreeMap<String, ThemeFile>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Effective editor settings after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorSettings {
    pub tab_stop: usize,
    pub center: bool,
    pub auto_indent: bool,
    pub backup: bool,
    pub status_timeout: Duration,
    pub highlight_mask: SyntaxFlags,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Config::default().settings()
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("marrow.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("marrow").join("marrow.toml");
    }
    PathBuf::from("marrow.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_absent_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), themes = file.themes.len(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Resolve the editor section into effective settings.
    pub fn settings(&self) -> EditorSettings {
        let editor = &self.file.editor;
        let raw = editor.tab_stop;
        let tab_stop = raw.clamp(*TAB_STOP_RANGE.start(), *TAB_STOP_RANGE.end());
        if tab_stop != raw {
            info!(target: "config", raw, clamped = tab_stop, "tab_stop_clamped");
        }
        let mut highlight_mask = SyntaxFlags::empty();
        if self.file.highlight.numbers {
            highlight_mask |= SyntaxFlags::NUMBERS;
        }
        if self.file.highlight.strings {
            highlight_mask |= SyntaxFlags::STRINGS;
        }
        EditorSettings {
            tab_stop,
            center: editor.center,
            auto_indent: editor.auto_indent,
            backup: editor.backup,
            status_timeout: Duration::from_secs(editor.status_timeout_secs),
            highlight_mask,
        }
    }

    /// Built-in default theme plus every `[themes.<name>]` table.
    pub fn themes(&self) -> ThemeSet {
        ThemeSet::from_files(&self.file.themes)
    }

    /// Configured theme name, or the default when it names no known theme.
    pub fn theme_name(&self, themes: &ThemeSet) -> String {
        let wanted = &self.file.theme.name;
        if themes.get(wanted).is_some() {
            wanted.clone()
        } else {
            warn!(target: "config", theme = %wanted, "unknown_theme_using_default");
            ThemeSet::DEFAULT.to_string()
        }
    }
}
