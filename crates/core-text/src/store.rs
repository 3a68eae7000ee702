//! The row collection and its highlight propagation.

use crate::Row;
use core_syntax::{Highlight, SyntaxFlags, SyntaxProfile, highlight_line};
use tracing::trace;

/// Default width of a tab stop in render cells.
pub const DEFAULT_TAB_STOP: usize = 4;

/// Ordered rows of one document plus the syntax profile used to classify them.
#[derive(Debug, Clone)]
pub struct RowStore {
    rows: Vec<Row>,
    tab_stop: usize,
    syntax: Option<&'static SyntaxProfile>,
    mask: SyntaxFlags,
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl RowStore {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            tab_stop: tab_stop.max(1),
            syntax: None,
            mask: SyntaxFlags::all(),
        }
    }

    /// Build a store from text, one row per line. Trailing `\r` is stripped.
    pub fn from_text(text: &str, tab_stop: usize) -> Self {
        let mut store = Self::new(tab_stop);
        for line in text.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            store.insert_row(store.len(), line);
        }
        store
    }

    /// Assign (or clear) the syntax profile and re-highlight every row.
    /// `mask` limits the profile's flags.
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxProfile>, mask: SyntaxFlags) {
        self.syntax = syntax;
        self.mask = mask;
        for at in 0..self.rows.len() {
            self.highlight_row(at);
        }
    }

    pub fn syntax(&self) -> Option<&'static SyntaxProfile> {
        self.syntax
    }
    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn get(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    /// Raw length of row `at`, 0 for a missing row.
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    /// Insert a row at `at` (clamped into `[0, len]`). Returns the index used.
    pub fn insert_row(&mut self, at: usize, text: &str) -> usize {
        self.insert_row_chars(at, text.chars().collect())
    }

    pub fn insert_row_chars(&mut self, at: usize, chars: Vec<char>) -> usize {
        let at = at.min(self.rows.len());
        let mut row = Row::new(at, chars);
        // Seed with the state the following row currently sees so propagation
        // notices when the new row changes it.
        row.comment_open = at > 0 && self.rows[at - 1].comment_open;
        self.rows.insert(at, row);
        self.renumber(at + 1);
        self.update_row(at);
        at
    }

    /// Remove row `at`; no-op for a missing row.
    pub fn delete_row(&mut self, at: usize) -> Option<Row> {
        if at >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(at);
        self.renumber(at);
        self.rehighlight_from(at);
        Some(removed)
    }

    /// Insert `ch` into row `row` at `at` (clamped to the row length).
    /// Returns the column used, or `None` for a missing row.
    pub fn insert_char(&mut self, row: usize, at: usize, ch: char) -> Option<usize> {
        let r = self.rows.get_mut(row)?;
        let at = at.min(r.chars.len());
        r.chars.insert(at, ch);
        self.update_row(row);
        Some(at)
    }

    /// Delete the char of row `row` at `at` (clamped to the last column).
    /// Returns the removed char; `None` for a missing or empty row.
    pub fn delete_char(&mut self, row: usize, at: usize) -> Option<char> {
        let r = self.rows.get_mut(row)?;
        if r.chars.is_empty() {
            return None;
        }
        let at = at.min(r.chars.len() - 1);
        let removed = r.chars.remove(at);
        self.update_row(row);
        Some(removed)
    }

    /// Append `text` to row `row` (line joins).
    pub fn append_chars(&mut self, row: usize, text: &[char]) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        r.chars.extend_from_slice(text);
        self.update_row(row);
    }

    /// Truncate row `row` at `at` (clamped) and return the removed tail.
    pub fn split_off(&mut self, row: usize, at: usize) -> Vec<char> {
        let Some(r) = self.rows.get_mut(row) else {
            return Vec::new();
        };
        let at = at.min(r.chars.len());
        let tail = r.chars.split_off(at);
        self.update_row(row);
        tail
    }

    /// Temporarily class `len` render cells of row `row` from `rx` as
    /// [`Highlight::Match`]. Returns the classes to hand back to
    /// [`RowStore::restore_highlight`].
    pub fn mark_match(&mut self, row: usize, rx: usize, len: usize) -> Option<Vec<Highlight>> {
        let r = self.rows.get_mut(row)?;
        let saved = r.hl.clone();
        let start = rx.min(r.hl.len());
        let end = (rx + len).min(r.hl.len());
        for cell in &mut r.hl[start..end] {
            *cell = Highlight::Match;
        }
        Some(saved)
    }

    /// Put back classes saved by [`RowStore::mark_match`]. Ignored if the row
    /// changed length since.
    pub fn restore_highlight(&mut self, row: usize, saved: Vec<Highlight>) {
        if let Some(r) = self.rows.get_mut(row)
            && r.hl.len() == saved.len()
        {
            r.hl = saved;
        }
    }

    /// Every row followed by `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows.iter().map(|r| r.len() + 1).sum());
        for row in &self.rows {
            out.extend(row.chars.iter());
            out.push('\n');
        }
        out
    }

    fn renumber(&mut self, from: usize) {
        for (idx, row) in self.rows.iter_mut().enumerate().skip(from) {
            row.idx = idx;
        }
    }

    fn update_row(&mut self, at: usize) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at) {
            row.update_render(tab_stop);
            self.rehighlight_from(at);
        }
    }

    /// Re-highlight from `start`, moving forward while the carried comment
    /// state keeps changing.
    fn rehighlight_from(&mut self, start: usize) {
        let mut at = start;
        let mut scanned = 0usize;
        while at < self.rows.len() {
            scanned += 1;
            if !self.highlight_row(at) {
                break;
            }
            at += 1;
        }
        trace!(target: "text.highlight", start, scanned, "propagate");
    }

    /// Highlight one row from its predecessor's state. Returns true when the
    /// row's `comment_open` changed.
    fn highlight_row(&mut self, at: usize) -> bool {
        let prev_open = at > 0 && self.rows[at - 1].comment_open;
        let syntax = self.syntax;
        let mask = self.mask;
        let row = &mut self.rows[at];
        let before = row.comment_open;
        row.comment_open = match syntax {
            Some(profile) => highlight_line(&row.render, profile, mask, prev_open, &mut row.hl),
            None => {
                row.hl.clear();
                row.hl.resize(row.render.len(), Highlight::Normal);
                false
            }
        };
        row.comment_open != before
    }
}
