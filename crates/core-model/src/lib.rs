//! Editor workspace: the open documents (tabs), the shared mode and status
//! line, and the settings every document is opened with.
//!
//! Invariants (after every public call):
//! * `active` is `None` exactly when no tab is open, otherwise a valid index.
//! * every tab's viewport matches the workspace text area.
//!
//! With no active tab the renderer shows the welcome screen and the
//! dispatcher ignores everything except quit.

use core_config::{EditorSettings, Theme, ThemeSet};
use core_state::{Document, DocumentError, DocumentOptions, Mode, StatusLine};
use std::path::Path;
use tracing::info;

/// Paint hook invoked after any cursor, document or prompt change.
pub trait Render {
    fn render(&mut self, ws: &Workspace) -> anyhow::Result<()>;
}

pub struct Workspace {
    tabs: Vec<Document>,
    active: Option<usize>,
    pub mode: Mode,
    pub status: StatusLine,
    settings: EditorSettings,
    themes: ThemeSet,
    theme: String,
    /// Text area `(rows, cols)`.
    screen: (usize, usize),
}

impl Workspace {
    pub fn new(settings: EditorSettings, themes: ThemeSet, theme: String, screen: (usize, usize)) -> Self {
        let theme = if themes.get(&theme).is_some() {
            theme
        } else {
            ThemeSet::DEFAULT.to_string()
        };
        Self {
            tabs: Vec::new(),
            active: None,
            mode: Mode::Normal,
            status: StatusLine::default(),
            settings,
            themes,
            theme,
            screen,
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            center: self.settings.center,
            auto_indent: self.settings.auto_indent,
            backup: self.settings.backup,
        }
    }

    /// Open `path` in a new tab and make it active.
    pub fn open_tab(&mut self, path: impl AsRef<Path>) -> Result<usize, DocumentError> {
        let doc = Document::open(
            path,
            self.settings.tab_stop,
            self.settings.highlight_mask,
            self.document_options(),
            self.screen,
        )?;
        Ok(self.push_tab(doc))
    }

    /// Add an already built document as the active tab.
    pub fn push_tab(&mut self, mut doc: Document) -> usize {
        doc.resize(self.screen.0, self.screen.1);
        self.tabs.push(doc);
        let idx = self.tabs.len() - 1;
        self.active = Some(idx);
        info!(target: "model", tab = idx, tabs = self.tabs.len(), "tab_opened");
        idx
    }

    pub fn tabs(&self) -> &[Document] {
        &self.tabs
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn set_active(&mut self, idx: usize) -> bool {
        if idx < self.tabs.len() {
            self.active = Some(idx);
            true
        } else {
            false
        }
    }

    /// Close tab `idx`; the previous tab (if any) becomes active.
    pub fn close_tab(&mut self, idx: usize) -> Option<Document> {
        if idx >= self.tabs.len() {
            return None;
        }
        let doc = self.tabs.remove(idx);
        self.active = match self.tabs.len() {
            0 => None,
            n => Some(idx.saturating_sub(1).min(n - 1)),
        };
        Some(doc)
    }

    pub fn active_doc(&self) -> Option<&Document> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    pub fn active_doc_mut(&mut self) -> Option<&mut Document> {
        self.active.and_then(|i| self.tabs.get_mut(i))
    }

    pub fn screen(&self) -> (usize, usize) {
        self.screen
    }

    /// New text area size, applied to every tab.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.screen = (rows.max(1), cols.max(1));
        for doc in &mut self.tabs {
            doc.resize(self.screen.0, self.screen.1);
        }
    }

    pub fn theme_name(&self) -> &str {
        &self.theme
    }

    pub fn theme(&self) -> Theme {
        self.themes.get(&self.theme).copied().unwrap_or_default()
    }

    pub fn themes(&self) -> &ThemeSet {
        &self.themes
    }

    /// Switch to the named theme; false when it does not exist.
    pub fn set_theme(&mut self, name: &str) -> bool {
        if self.themes.get(name).is_none() {
            return false;
        }
        self.theme = name.to_string();
        info!(target: "model", theme = name, "theme_set");
        true
    }

    /// Status text still inside the configured timeout.
    pub fn visible_status(&self) -> Option<&str> {
        self.status.visible(self.settings.status_timeout)
    }
}
