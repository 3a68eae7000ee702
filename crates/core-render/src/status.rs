//! Status bar and message line composition.
//!
//! Two stages, mirroring each other: `compose_status` gathers ordered
//! segments from the workspace, `format_status` lays them out in a fixed
//! width. Layout: `[MODE] <name> - <n> lines (modified)` on the left and
//! `<filetype> | <line>/<lines>` flush right when it fits.

use core_model::Workspace;
use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest file name shown, in chars.
pub const NAME_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Mode(&'static str),
    FileName(Cow<'a, str>),
    LineCount(usize),
    Modified,
    /// Right-hand side starts here.
    FileType(&'static str),
    Position { line_1: usize, total: usize },
}

pub fn compose_status(ws: &Workspace) -> Vec<StatusSegment<'static>> {
    let mut out = Vec::with_capacity(6);
    out.push(StatusSegment::Mode(ws.mode.label()));
    let (name, numrows, dirty, filetype, cy) = match ws.active_doc() {
        Some(doc) => (
            doc.display_name(),
            doc.numrows(),
            doc.is_dirty(),
            doc.syntax().map_or("no ft", |s| s.filetype),
            doc.cursor().1,
        ),
        None => ("[No Name]".to_string(), 0, false, "no ft", 0),
    };
    let name: String = name.chars().take(NAME_LIMIT).collect();
    out.push(StatusSegment::FileName(Cow::Owned(name)));
    out.push(StatusSegment::LineCount(numrows));
    if dirty {
        out.push(StatusSegment::Modified);
    }
    out.push(StatusSegment::FileType(filetype));
    out.push(StatusSegment::Position {
        line_1: cy + 1,
        total: numrows,
    });
    out
}

/// Lay segments out in exactly `cols` columns.
pub fn format_status(segments: &[StatusSegment<'_>], cols: usize) -> String {
    let mut left = String::with_capacity(cols);
    let mut right = String::new();
    for seg in segments {
        match seg {
            StatusSegment::Mode(m) => {
                left.push('[');
                left.push_str(m);
                left.push(']');
            }
            StatusSegment::FileName(name) => {
                left.push(' ');
                left.push_str(name);
            }
            StatusSegment::LineCount(n) => left.push_str(&format!(" - {n} lines")),
            StatusSegment::Modified => left.push_str(" (modified)"),
            StatusSegment::FileType(ft) => right.push_str(ft),
            StatusSegment::Position { line_1, total } => {
                right.push_str(&format!(" | {line_1}/{total}"));
            }
        }
    }
    let mut line = truncate_to_width(&left, cols).to_string();
    let mut used = line.width();
    let right_w = right.width();
    if used + right_w <= cols {
        line.extend(std::iter::repeat_n(' ', cols - used - right_w));
        line.push_str(&right);
        used = cols;
    }
    line.extend(std::iter::repeat_n(' ', cols.saturating_sub(used)));
    line
}

/// Longest prefix of `s` that fits in `cols` terminal columns.
pub fn truncate_to_width(s: &str, cols: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > cols {
            return &s[..i];
        }
        used += w;
    }
    s
}

/// Message line text, if a status message is still live.
pub fn message_line(ws: &Workspace, cols: usize) -> Option<&str> {
    ws.visible_status().map(|m| truncate_to_width(m, cols))
}
