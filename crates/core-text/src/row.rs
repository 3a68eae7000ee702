//! A single document row and its tab-aware coordinate mapping.

use core_syntax::Highlight;

/// One line of a document.
///
/// `chars` is the raw content; `render` is `chars` with every tab expanded
/// to the next tab stop; `hl` classifies each `render` cell. The row store
/// keeps `render.len() == hl.len()` and `idx` equal to the row's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub(crate) idx: usize,
    pub(crate) chars: Vec<char>,
    pub(crate) render: Vec<char>,
    pub(crate) hl: Vec<Highlight>,
    pub(crate) comment_open: bool,
}

impl Row {
    pub(crate) fn new(idx: usize, chars: Vec<char>) -> Self {
        Self {
            idx,
            chars,
            ..Self::default()
        }
    }

    pub fn idx(&self) -> usize {
        self.idx
    }
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
    pub fn render(&self) -> &[char] {
        &self.render
    }
    pub fn hl(&self) -> &[Highlight] {
        &self.hl
    }
    /// True when a block comment is still open at the end of this row.
    pub fn comment_open(&self) -> bool {
        self.comment_open
    }
    /// Raw length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
    pub fn render_text(&self) -> String {
        self.render.iter().collect()
    }

    /// Render column of raw column `cx` (clamped to the row length).
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut rx = 0;
        for &c in self.chars.iter().take(cx) {
            if c == '\t' {
                rx += (tab_stop - 1) - (rx % tab_stop);
            }
            rx += 1;
        }
        rx
    }

    /// Raw column whose render cell range contains `rx`; the row length when
    /// `rx` lies past the end.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut cur_rx = 0;
        for (cx, &c) in self.chars.iter().enumerate() {
            if c == '\t' {
                cur_rx += (tab_stop - 1) - (cur_rx % tab_stop);
            }
            cur_rx += 1;
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    /// Recompute `render` from `chars`. Highlighting is refreshed separately.
    pub(crate) fn update_render(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        self.render.clear();
        for &c in &self.chars {
            if c == '\t' {
                self.render.push(' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(' ');
                }
            } else {
                self.render.push(c);
            }
        }
    }

    /// Leading run of tabs and spaces, limited to the first `limit` chars.
    pub fn indentation(&self, limit: usize) -> &[char] {
        let end = self
            .chars
            .iter()
            .take(limit)
            .take_while(|c| **c == ' ' || **c == '\t')
            .count();
        &self.chars[..end]
    }
}
