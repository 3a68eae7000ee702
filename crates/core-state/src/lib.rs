//! Per-document editing state: the [`Document`] buffer, the editor mode tag,
//! and the timed status line.

mod document;

pub use document::{Direction, Document, DocumentOptions, Viewport};

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and commands.
    #[default]
    Normal,
    /// Text insertion.
    Edit,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Edit => "EDIT",
        }
    }
}

/// Failures of the file-backed document operations.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("can't save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("backup to {} failed: {source}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no file name")]
    NoPath,
}

/// One status message, stamped when set. Display expiry is the renderer's
/// call, driven by the configured timeout.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    text: String,
    set_at: Option<Instant>,
}

impl StatusLine {
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.set_at = Some(Instant::now());
        tracing::debug!(target: "state.status", text = %self.text, "status_set");
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.set_at = None;
    }

    /// Latest text regardless of age.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text if it was set less than `ttl` ago.
    pub fn visible(&self, ttl: Duration) -> Option<&str> {
        self.visible_at(Instant::now(), ttl)
    }

    pub fn visible_at(&self, now: Instant, ttl: Duration) -> Option<&str> {
        let set_at = self.set_at?;
        if self.text.is_empty() || now.saturating_duration_since(set_at) >= ttl {
            return None;
        }
        Some(&self.text)
    }
}
