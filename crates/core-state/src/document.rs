//! The document buffer: rows, cursor, viewport and file binding.
//!
//! Cursor `(cx, cy)` is in raw coordinates. `cy == numrows` is the phantom
//! line past the last row, where typing appends a new row. Every method keeps
//! `cy <= numrows` and `cx <= len(row cy)`; out-of-range requests are clamped.
//! Mutations bump the dirty counter and re-run [`Document::scroll`].

use crate::DocumentError;
use core_syntax::{Highlight, SyntaxFlags, SyntaxProfile, select_profile};
use core_text::{Row, RowStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Behaviour switches taken from the editor settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Keep the cursor row centred while scrolling.
    pub center: bool,
    /// Copy leading whitespace onto new lines.
    pub auto_indent: bool,
    /// Copy the previous file to the backup path before saving.
    pub backup: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            center: false,
            auto_indent: true,
            backup: false,
        }
    }
}

/// Visible window over the document in render coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub rowoff: usize,
    pub coloff: usize,
    /// Text rows on screen.
    pub rows: usize,
    /// Text columns on screen.
    pub cols: usize,
}

#[derive(Debug, Clone)]
pub struct Document {
    rows: RowStore,
    cx: usize,
    cy: usize,
    rx: usize,
    view: Viewport,
    dirty: u64,
    path: Option<PathBuf>,
    backup_path: Option<PathBuf>,
    options: DocumentOptions,
}

impl Document {
    /// Empty unnamed document.
    pub fn new(tab_stop: usize, options: DocumentOptions, screen: (usize, usize)) -> Self {
        Self::with_rows(RowStore::new(tab_stop), options, screen)
    }

    /// Unnamed document holding `text`, without syntax.
    pub fn from_text(
        text: &str,
        tab_stop: usize,
        options: DocumentOptions,
        screen: (usize, usize),
    ) -> Self {
        Self::with_rows(RowStore::from_text(text, tab_stop), options, screen)
    }

    fn with_rows(rows: RowStore, options: DocumentOptions, screen: (usize, usize)) -> Self {
        Self {
            rows,
            cx: 0,
            cy: 0,
            rx: 0,
            view: Viewport {
                rowoff: 0,
                coloff: 0,
                rows: screen.0.max(1),
                cols: screen.1.max(1),
            },
            dirty: 0,
            path: None,
            backup_path: None,
            options,
        }
    }

    /// Open `path`, creating an empty file when it does not exist. The syntax
    /// profile is chosen from the file name and limited by `mask`.
    pub fn open(
        path: impl AsRef<Path>,
        tab_stop: usize,
        mask: SyntaxFlags,
        options: DocumentOptions,
        screen: (usize, usize),
    ) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();
        let open_err = |source| DocumentError::Open {
            path: path.clone(),
            source,
        };
        if !path.exists() {
            fs::File::create(&path).map_err(open_err)?;
            info!(target: "io", path = %path.display(), "file_created");
        }
        let bytes = fs::read(&path).map_err(open_err)?;
        let text = String::from_utf8_lossy(&bytes);
        let mut rows = RowStore::new(tab_stop);
        // Syntax first so rows are highlighted once, as they are inserted.
        let profile = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(select_profile);
        rows.set_syntax(profile, mask);
        for line in text.lines() {
            rows.insert_row(rows.len(), line.trim_end_matches('\r'));
        }
        info!(target: "io", path = %path.display(), rows = rows.len(), "file_opened");

        let mut doc = Self::with_rows(rows, options, screen);
        doc.backup_path = Some(backup_path_for(&path));
        doc.path = Some(path);
        Ok(doc)
    }

    // ---- accessors -----------------------------------------------------------------------------

    pub fn rows(&self) -> &[Row] {
        self.rows.rows()
    }
    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }
    pub fn numrows(&self) -> usize {
        self.rows.len()
    }
    pub fn tab_stop(&self) -> usize {
        self.rows.tab_stop()
    }
    /// `(cx, cy)` in raw coordinates.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cx, self.cy)
    }
    /// Render column of the cursor as of the last [`Document::scroll`].
    pub fn rx(&self) -> usize {
        self.rx
    }
    pub fn viewport(&self) -> Viewport {
        self.view
    }
    pub fn dirty(&self) -> u64 {
        self.dirty
    }
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }
    pub fn options(&self) -> DocumentOptions {
        self.options
    }
    pub fn syntax(&self) -> Option<&'static SyntaxProfile> {
        self.rows.syntax()
    }
    /// Display name: the path as given, or `[No Name]`.
    pub fn display_name(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| "[No Name]".to_string(), |p| p.display().to_string())
    }
    /// Whole document, every row followed by `\n`.
    pub fn text(&self) -> String {
        self.rows.to_text()
    }

    // ---- configuration -------------------------------------------------------------------------

    pub fn set_syntax(&mut self, profile: Option<&'static SyntaxProfile>, mask: SyntaxFlags) {
        self.rows.set_syntax(profile, mask);
    }

    pub fn set_options(&mut self, options: DocumentOptions) {
        self.options = options;
    }

    /// New text area size.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.view.rows = rows.max(1);
        self.view.cols = cols.max(1);
        self.scroll();
    }

    /// Place the cursor, clamped into the document.
    pub fn set_cursor(&mut self, cx: usize, cy: usize) {
        self.cy = cy.min(self.numrows());
        self.cx = cx.min(self.rows.row_len(self.cy));
    }

    /// Restore saved viewport offsets (prompt cancel).
    pub fn set_offsets(&mut self, rowoff: usize, coloff: usize) {
        self.view.rowoff = rowoff;
        self.view.coloff = coloff;
    }

    // ---- editing -------------------------------------------------------------------------------

    pub fn insert_char(&mut self, c: char) {
        if self.cy == self.numrows() {
            self.rows.insert_row(self.numrows(), "");
        }
        if let Some(at) = self.rows.insert_char(self.cy, self.cx, c) {
            self.cx = at + 1;
        }
        self.edited("insert_char");
    }

    /// Delete before the cursor, joining with the previous row at column 0.
    pub fn delete_char(&mut self) {
        if self.cy == self.numrows() || (self.cx == 0 && self.cy == 0) {
            return;
        }
        if self.cx > 0 {
            self.rows.delete_char(self.cy, self.cx - 1);
            self.cx -= 1;
        } else {
            let prev = self.cy - 1;
            let join_at = self.rows.row_len(prev);
            let tail = self
                .rows
                .get(self.cy)
                .map(|r| r.chars().to_vec())
                .unwrap_or_default();
            self.rows.append_chars(prev, &tail);
            self.rows.delete_row(self.cy);
            self.cy = prev;
            self.cx = join_at;
        }
        self.edited("delete_char");
    }

    /// Delete under the cursor: step right, then delete backwards.
    pub fn forward_delete(&mut self) {
        self.move_cursor(Direction::Right);
        self.delete_char();
    }

    /// Split the cursor row. With `auto_indent` the leading whitespace left of
    /// the cursor is repeated on the new row and the cursor lands after it.
    pub fn insert_newline(&mut self) {
        if self.cy == self.numrows() {
            self.rows.insert_row(self.numrows(), "");
            self.cy += 1;
            self.cx = 0;
            self.edited("insert_newline");
            return;
        }
        let indent: Vec<char> = match (self.options.auto_indent, self.rows.get(self.cy)) {
            (true, Some(row)) => row.indentation(self.cx).to_vec(),
            _ => Vec::new(),
        };
        let tail = self.rows.split_off(self.cy, self.cx);
        let mut new_row = indent.clone();
        new_row.extend(tail);
        self.rows.insert_row_chars(self.cy + 1, new_row);
        self.cy += 1;
        self.cx = indent.len();
        self.edited("insert_newline");
    }

    /// Remove the cursor row.
    pub fn delete_row(&mut self) {
        if self.rows.delete_row(self.cy).is_none() {
            return;
        }
        self.set_cursor(self.cx, self.cy);
        self.edited("delete_row");
    }

    fn edited(&mut self, op: &'static str) {
        self.dirty += 1;
        trace!(target: "state.edit", op, cx = self.cx, cy = self.cy, rows = self.numrows(), "edit");
        self.scroll();
    }

    // ---- motion --------------------------------------------------------------------------------

    pub fn move_cursor(&mut self, dir: Direction) {
        let numrows = self.numrows();
        match dir {
            Direction::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = self.rows.row_len(self.cy);
                }
            }
            Direction::Right => {
                if self.cy < numrows {
                    if self.cx < self.rows.row_len(self.cy) {
                        self.cx += 1;
                    } else {
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            Direction::Up => self.cy = self.cy.saturating_sub(1),
            Direction::Down => {
                if self.cy < numrows {
                    self.cy += 1;
                }
            }
        }
        self.cx = self.cx.min(self.rows.row_len(self.cy));
        self.scroll();
    }

    pub fn line_start(&mut self) {
        self.cx = 0;
        self.scroll();
    }

    pub fn line_end(&mut self) {
        self.cx = self.rows.row_len(self.cy);
        self.scroll();
    }

    /// Jump to the top of the screen, then one screenful up.
    pub fn page_up(&mut self) {
        self.cy = self.view.rowoff.min(self.numrows());
        for _ in 0..self.view.rows {
            self.move_cursor(Direction::Up);
        }
    }

    /// Jump to the bottom of the screen, then one screenful down.
    pub fn page_down(&mut self) {
        self.cy = (self.view.rowoff + self.view.rows - 1).min(self.numrows());
        for _ in 0..self.view.rows {
            self.move_cursor(Direction::Down);
        }
    }

    /// Move to 1-based line `line` (clamped), column 0.
    pub fn goto_line(&mut self, line: usize) {
        let last = self.numrows().max(1);
        self.cy = line.clamp(1, last) - 1;
        self.cy = self.cy.min(self.numrows());
        self.cx = 0;
        self.scroll();
    }

    // ---- viewport ------------------------------------------------------------------------------

    /// Recompute `rx` and move the viewport so the cursor is visible.
    pub fn scroll(&mut self) {
        self.rx = match self.rows.get(self.cy) {
            Some(row) => row.cx_to_rx(self.cx, self.tab_stop()),
            None => self.cx,
        };
        let v = &mut self.view;
        if self.options.center {
            v.rowoff = self.cy.saturating_sub(v.rows / 2);
        } else {
            if self.cy < v.rowoff {
                v.rowoff = self.cy;
            }
            if self.cy >= v.rowoff + v.rows {
                v.rowoff = self.cy + 1 - v.rows;
            }
        }
        if self.rx < v.coloff {
            v.coloff = self.rx;
        }
        if self.rx >= v.coloff + v.cols {
            v.coloff = self.rx + 1 - v.cols;
        }
    }

    /// Put the cursor row in the middle of the screen once.
    pub fn center_viewport(&mut self) {
        self.view.rowoff = self.cy.saturating_sub(self.view.rows / 2);
        trace!(target: "state.view", rowoff = self.view.rowoff, cy = self.cy, "center");
    }

    /// Scroll so the cursor row is the first visible row.
    pub fn cursor_row_to_top(&mut self) {
        self.view.rowoff = self.numrows();
        self.scroll();
    }

    // ---- search support ------------------------------------------------------------------------

    /// Class `len` render cells of `row` from `rx` as a match; returns the
    /// classes to restore.
    pub fn mark_match(&mut self, row: usize, rx: usize, len: usize) -> Option<Vec<Highlight>> {
        self.rows.mark_match(row, rx, len)
    }

    pub fn restore_highlight(&mut self, row: usize, saved: Vec<Highlight>) {
        self.rows.restore_highlight(row, saved);
    }

    // ---- persistence ---------------------------------------------------------------------------

    /// Write every row followed by `\n`. Returns bytes written and clears the
    /// dirty counter; on failure the document is left untouched.
    pub fn save(&mut self) -> Result<usize, DocumentError> {
        let path = self.path.clone().ok_or(DocumentError::NoPath)?;
        let text = self.rows.to_text();
        match fs::write(&path, text.as_bytes()) {
            Ok(()) => {
                self.dirty = 0;
                info!(target: "io", path = %path.display(), bytes = text.len(), "file_saved");
                Ok(text.len())
            }
            Err(e) => {
                error!(target: "io", ?e, path = %path.display(), "file_write_error");
                Err(DocumentError::Save { path, source: e })
            }
        }
    }

    /// Copy the file as it is on disk to the backup path. `Ok(None)` when
    /// backups are off or there is nothing on disk yet.
    pub fn write_backup(&self) -> Result<Option<u64>, DocumentError> {
        if !self.options.backup {
            return Ok(None);
        }
        let (Some(path), Some(backup)) = (&self.path, &self.backup_path) else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        match fs::copy(path, backup) {
            Ok(bytes) => {
                info!(target: "io", backup = %backup.display(), bytes, "backup_written");
                Ok(Some(bytes))
            }
            Err(e) => {
                error!(target: "io", ?e, backup = %backup.display(), "backup_write_error");
                Err(DocumentError::Backup {
                    path: backup.clone(),
                    source: e,
                })
            }
        }
    }
}

/// `.<name>.swp` next to `path`.
fn backup_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.swp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCREEN: (usize, usize) = (10, 20);

    fn doc(text: &str) -> Document {
        Document::from_text(text, 4, DocumentOptions::default(), SCREEN)
    }

    fn lines(d: &Document) -> Vec<String> {
        d.rows().iter().map(Row::text).collect()
    }

    #[test]
    fn typing_into_empty_document_appends_row() {
        let mut d = doc("");
        for c in "hello".chars() {
            d.insert_char(c);
        }
        assert_eq!(lines(&d), vec!["hello"]);
        assert_eq!(d.cursor(), (5, 0));
        assert_eq!(d.dirty(), 5);
    }

    #[test]
    fn backspace_at_column_zero_joins_rows() {
        let mut d = doc("one\ntwo\nthree");
        d.set_cursor(0, 2);
        d.delete_char();
        assert_eq!(lines(&d), vec!["one", "twothree"]);
        assert_eq!(d.cursor(), (3, 1));
        assert!(d.is_dirty());
    }

    #[test]
    fn backspace_at_origin_and_phantom_line_is_noop() {
        let mut d = doc("ab");
        d.delete_char();
        d.set_cursor(0, 1);
        d.delete_char();
        assert_eq!(lines(&d), vec!["ab"]);
        assert_eq!(d.dirty(), 0);
    }

    #[test]
    fn forward_delete_removes_char_under_cursor() {
        let mut d = doc("abc");
        d.set_cursor(1, 0);
        d.forward_delete();
        assert_eq!(lines(&d), vec!["ac"]);
        assert_eq!(d.cursor(), (1, 0));
    }

    #[test]
    fn forward_delete_at_end_joins_next_row() {
        let mut d = doc("ab\ncd");
        d.set_cursor(2, 0);
        d.forward_delete();
        assert_eq!(lines(&d), vec!["abcd"]);
        assert_eq!(d.cursor(), (2, 0));
    }

    #[test]
    fn newline_splits_and_copies_indent() {
        let mut d = doc("\t  foo(bar)");
        d.set_cursor(7, 0);
        d.insert_newline();
        assert_eq!(lines(&d), vec!["\t  foo(", "\t  bar)"]);
        assert_eq!(d.cursor(), (3, 1));
    }

    #[test]
    fn newline_without_auto_indent_goes_to_column_zero() {
        let opts = DocumentOptions {
            auto_indent: false,
            ..DocumentOptions::default()
        };
        let mut d = Document::from_text("    x = 1", 4, opts, SCREEN);
        d.set_cursor(5, 0);
        d.insert_newline();
        assert_eq!(lines(&d), vec!["    x", " = 1"]);
        assert_eq!(d.cursor(), (0, 1));
    }

    #[test]
    fn newline_at_column_zero_pushes_row_down() {
        let mut d = doc("  a");
        d.insert_newline();
        assert_eq!(lines(&d), vec!["", "  a"]);
        assert_eq!(d.cursor(), (0, 1));
    }

    #[test]
    fn newline_on_phantom_line_appends_empty_row() {
        let mut d = doc("a");
        d.set_cursor(0, 1);
        d.insert_newline();
        assert_eq!(lines(&d), vec!["a", ""]);
        assert_eq!(d.cursor(), (0, 2));
    }

    #[test]
    fn horizontal_motion_wraps_rows() {
        let mut d = doc("ab\ncd");
        d.set_cursor(0, 1);
        d.move_cursor(Direction::Left);
        assert_eq!(d.cursor(), (2, 0));
        d.move_cursor(Direction::Right);
        assert_eq!(d.cursor(), (0, 1));
    }

    #[test]
    fn vertical_motion_clamps_column() {
        let mut d = doc("long line\nx");
        d.set_cursor(8, 0);
        d.move_cursor(Direction::Down);
        assert_eq!(d.cursor(), (1, 1));
        d.move_cursor(Direction::Down);
        assert_eq!(d.cursor(), (0, 2));
        d.move_cursor(Direction::Down);
        assert_eq!(d.cursor(), (0, 2), "cannot move past the phantom line");
        d.set_cursor(0, 0);
        d.move_cursor(Direction::Up);
        assert_eq!(d.cursor(), (0, 0));
    }

    #[test]
    fn scroll_follows_cursor_through_tabs() {
        let mut d = Document::from_text("\t\t\t\t\t\tx", 4, DocumentOptions::default(), (5, 10));
        d.line_end();
        assert_eq!(d.rx(), 25);
        assert_eq!(d.viewport().coloff, 16);
        d.line_start();
        assert_eq!(d.viewport().coloff, 0);
    }

    #[test]
    fn scroll_keeps_cursor_row_visible() {
        let text: String = (0..30).map(|i| format!("{i}\n")).collect();
        let mut d = Document::from_text(&text, 4, DocumentOptions::default(), (5, 10));
        d.goto_line(20);
        assert_eq!(d.cursor(), (0, 19));
        assert_eq!(d.viewport().rowoff, 15);
        d.goto_line(3);
        assert_eq!(d.viewport().rowoff, 2);
    }

    #[test]
    fn center_option_keeps_row_centred() {
        let text: String = (0..30).map(|i| format!("{i}\n")).collect();
        let opts = DocumentOptions {
            center: true,
            ..DocumentOptions::default()
        };
        let mut d = Document::from_text(&text, 4, opts, (10, 10));
        d.goto_line(16);
        assert_eq!(d.viewport().rowoff, 10);
        d.goto_line(2);
        assert_eq!(d.viewport().rowoff, 0);
    }

    #[test]
    fn paging_moves_a_screenful() {
        let text: String = (0..50).map(|i| format!("{i}\n")).collect();
        let mut d = Document::from_text(&text, 4, DocumentOptions::default(), (10, 10));
        d.page_down();
        assert_eq!(d.cursor().1, 19);
        d.page_up();
        assert_eq!(d.cursor().1, 0);
    }

    #[test]
    fn goto_line_clamps() {
        let mut d = doc("a\nb\nc");
        d.goto_line(0);
        assert_eq!(d.cursor(), (0, 0));
        d.goto_line(99);
        assert_eq!(d.cursor(), (0, 2));
        let mut empty = doc("");
        empty.goto_line(5);
        assert_eq!(empty.cursor(), (0, 0));
    }

    #[test]
    fn cursor_row_to_top_scrolls_match_into_first_row() {
        let text: String = (0..30).map(|i| format!("{i}\n")).collect();
        let mut d = Document::from_text(&text, 4, DocumentOptions::default(), (5, 10));
        d.set_cursor(0, 12);
        d.cursor_row_to_top();
        assert_eq!(d.viewport().rowoff, 12);
    }

    #[test]
    fn delete_row_clamps_cursor() {
        let mut d = doc("long\nx");
        d.set_cursor(3, 0);
        d.delete_row();
        assert_eq!(lines(&d), vec!["x"]);
        assert_eq!(d.cursor(), (1, 0));
        let mut e = doc("");
        e.delete_row();
        assert_eq!(e.dirty(), 0);
    }

    #[test]
    fn open_creates_missing_file_and_selects_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.rs");
        let d = Document::open(&path, 4, SyntaxFlags::all(), DocumentOptions::default(), SCREEN)
            .unwrap();
        assert!(path.exists());
        assert_eq!(d.numrows(), 0);
        assert_eq!(d.syntax().map(|p| p.filetype), Some("rust"));
        assert_eq!(d.backup_path(), Some(dir.path().join(".new.rs.swp").as_path()));
    }

    #[test]
    fn open_strips_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        std::fs::write(&path, "a\r\nb\r\n\r\nc").unwrap();
        let d = Document::open(&path, 4, SyntaxFlags::all(), DocumentOptions::default(), SCREEN)
            .unwrap();
        assert_eq!(lines(&d), vec!["a", "b", "", "c"]);
        assert!(d.syntax().is_none());
    }

    #[test]
    fn open_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("x.c");
        let err = Document::open(&path, 4, SyntaxFlags::all(), DocumentOptions::default(), SCREEN)
            .unwrap_err();
        assert!(matches!(err, DocumentError::Open { .. }));
    }

    #[test]
    fn save_writes_rows_and_clears_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c");
        let mut d =
            Document::open(&path, 4, SyntaxFlags::all(), DocumentOptions::default(), SCREEN)
                .unwrap();
        d.insert_char('x');
        d.insert_newline();
        d.insert_char('y');
        assert!(d.is_dirty());
        let bytes = d.save().unwrap();
        assert_eq!(bytes, 4);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\ny\n");
        assert!(!d.is_dirty());
    }

    #[test]
    fn failed_save_keeps_dirty_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.txt");
        let mut d =
            Document::open(&path, 4, SyntaxFlags::all(), DocumentOptions::default(), SCREEN)
                .unwrap();
        d.insert_char('x');
        // A directory in place of the file makes the write fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        let err = d.save().unwrap_err();
        assert!(matches!(err, DocumentError::Save { .. }));
        assert_eq!(d.dirty(), 1);
        assert_eq!(lines(&d), vec!["x"]);
    }

    #[test]
    fn unnamed_document_cannot_save() {
        let mut d = doc("a");
        assert!(matches!(d.save(), Err(DocumentError::NoPath)));
    }

    #[test]
    fn backup_copies_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.txt");
        std::fs::write(&path, "old\n").unwrap();
        let opts = DocumentOptions {
            backup: true,
            ..DocumentOptions::default()
        };
        let mut d = Document::open(&path, 4, SyntaxFlags::all(), opts, SCREEN).unwrap();
        d.insert_char('n');
        assert_eq!(d.write_backup().unwrap(), Some(4));
        d.save().unwrap();
        let backup = dir.path().join(".b.txt.swp");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "old\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "nold\n");
    }

    #[test]
    fn backup_disabled_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.txt");
        let d = Document::open(&path, 4, SyntaxFlags::all(), DocumentOptions::default(), SCREEN)
            .unwrap();
        assert_eq!(d.write_backup().unwrap(), None);
        assert!(!dir.path().join(".c.txt.swp").exists());
    }
}
