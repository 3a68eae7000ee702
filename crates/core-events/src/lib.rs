//! Decoded key events and the blocking key source contract.
//!
//! The editor is single-threaded: the only suspension point is
//! [`KeySource::read_key`]. Terminal decoding lives in `core-input`; this crate
//! only names the keys the dispatcher understands, plus a scripted source used
//! by tests and headless runs.

use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

/// Logical keys consumed by the dispatcher. Anything the terminal reports
/// outside this set is dropped by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Key without modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    pub fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Ctrl plus a letter, e.g. `KeyEvent::ctrl('q')`.
    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CTRL)
    }

    /// True for Ctrl-`c`, case-insensitive on the letter.
    pub fn is_ctrl(&self, c: char) -> bool {
        self.mods.contains(KeyModifiers::CTRL)
            && matches!(self.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
    }

    /// The character this key inserts as text, if any. Ctrl/Alt chords and
    /// control characters insert nothing.
    pub fn printable(&self) -> Option<char> {
        if self.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
            return None;
        }
        match self.code {
            KeyCode::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}

/// Blocking source of decoded keys.
pub trait KeySource {
    fn read_key(&mut self) -> anyhow::Result<KeyEvent>;
}

/// Replays a fixed key sequence. Reading past the end is an error so a test
/// that under-scripts a prompt fails instead of hanging.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// One unmodified `Char` key per character of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().map(KeyEvent::char))
    }

    pub fn push(&mut self, key: KeyEvent) {
        self.keys.push_back(key);
    }

    pub fn push_text(&mut self, text: &str) {
        self.keys.extend(text.chars().map(KeyEvent::char));
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> anyhow::Result<KeyEvent> {
        let key = self
            .keys
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted key source exhausted"))?;
        tracing::trace!(target: "input.script", %key, "scripted_key");
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_display() {
        let k = KeyEvent::ctrl('x');
        let s = format!("{}", k);
        assert!(s.contains("Char"));
        assert!(s.contains("CTRL"));
    }

    #[test]
    fn ctrl_matching_ignores_case() {
        assert!(KeyEvent::ctrl('Q').is_ctrl('q'));
        assert!(!KeyEvent::char('q').is_ctrl('q'));
    }

    #[test]
    fn printable_excludes_chords_and_named_keys() {
        assert_eq!(KeyEvent::char('a').printable(), Some('a'));
        assert_eq!(
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT).printable(),
            Some('A')
        );
        assert_eq!(KeyEvent::ctrl('a').printable(), None);
        assert_eq!(KeyEvent::plain(KeyCode::Enter).printable(), None);
        assert_eq!(KeyEvent::char('\u{7}').printable(), None);
    }

    #[test]
    fn scripted_keys_replay_then_error() {
        let mut keys = ScriptedKeys::from_text("ab");
        keys.push(KeyEvent::plain(KeyCode::Esc));
        assert_eq!(keys.read_key().unwrap(), KeyEvent::char('a'));
        assert_eq!(keys.read_key().unwrap(), KeyEvent::char('b'));
        assert_eq!(keys.read_key().unwrap().code, KeyCode::Esc);
        assert!(keys.read_key().is_err());
    }
}
