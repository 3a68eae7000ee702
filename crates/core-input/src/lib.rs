//! Terminal key decoding backed by `crossterm`.

use core_events::{KeyCode, KeyEvent, KeyModifiers, KeySource};
use crossterm::event::{
    self, Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind,
    KeyModifiers as CMods,
};

/// Blocking reader over `crossterm::event::read`.
///
/// Non-key events are skipped. The last terminal resize seen while waiting is
/// kept for the main loop to pick up with [`CrosstermKeys::take_resize`].
#[derive(Debug, Default)]
pub struct CrosstermKeys {
    resized: Option<(u16, u16)>,
}

impl CrosstermKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns and rows of the most recent resize, cleared on read.
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }
}

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> anyhow::Result<KeyEvent> {
        loop {
            match event::read()? {
                CEvent::Key(key) => {
                    if let Some(k) = translate(key) {
                        return Ok(k);
                    }
                }
                CEvent::Resize(cols, rows) => {
                    tracing::debug!(target: "input.key", cols, rows, "resize");
                    self.resized = Some((cols, rows));
                }
                _ => {}
            }
        }
    }
}

/// Map a crossterm key to the editor's key set. Releases and keys the editor
/// has no binding for yield `None`.
pub fn translate(key: CKeyEvent) -> Option<KeyEvent> {
    if key.kind == CKind::Release {
        return None;
    }
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        other => {
            tracing::trace!(target: "input.key", code = ?other, "unbound_key_dropped");
            return None;
        }
    };
    Some(KeyEvent::new(code, map_mods(key.modifiers)))
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
