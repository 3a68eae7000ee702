//! Incremental search over the active document's rendered rows.
//!
//! Each prompt keystroke re-runs the match. Arrow keys step to the next or
//! previous hit, wrapping at both ends; anything that edits the query restarts
//! from the top. The hit row is scrolled to the top of the view and its cells
//! are classed `Match` until the next keystroke.

use crate::Io;
use crate::prompt::{PromptFlow, PromptNotify, prompt};
use core_events::{KeyCode, KeyEvent};
use core_model::Workspace;
use core_state::Document;
use core_syntax::Highlight;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    last_match: Option<usize>,
    direction: SearchDirection,
    /// Row and the highlight it had before the match overlay.
    saved: Option<(usize, Vec<Highlight>)>,
    matched: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// True when the most recent attempt found the query.
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// True while a match overlay is applied.
    pub fn has_overlay(&self) -> bool {
        self.saved.is_some()
    }

    /// React to one prompt keystroke with the current `query`.
    pub fn on_key(&mut self, doc: &mut Document, query: &str, key: KeyEvent) {
        if let Some((row, hl)) = self.saved.take() {
            doc.restore_highlight(row, hl);
        }
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
                return;
            }
            KeyCode::Right | KeyCode::Down => self.direction = SearchDirection::Forward,
            KeyCode::Left | KeyCode::Up => self.direction = SearchDirection::Backward,
            _ => {
                self.last_match = None;
                self.matched = false;
                self.direction = SearchDirection::Forward;
            }
        }
        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }
        self.find_next(doc, query);
    }

    fn find_next(&mut self, doc: &mut Document, query: &str) {
        let needle: Vec<char> = query.chars().collect();
        let numrows = doc.numrows();
        if needle.is_empty() || numrows == 0 {
            self.matched = false;
            return;
        }
        let mut current = self.last_match;
        for _ in 0..numrows {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(r), SearchDirection::Forward) => (r + 1) % numrows,
                (Some(0), SearchDirection::Backward) => numrows - 1,
                (Some(r), SearchDirection::Backward) => r - 1,
            };
            current = Some(next);
            let Some(row) = doc.row(next) else { continue };
            let Some(rx) = row
                .render()
                .windows(needle.len())
                .position(|w| w == needle.as_slice())
            else {
                continue;
            };
            let cx = row.rx_to_cx(rx, doc.tab_stop());
            self.last_match = Some(next);
            self.matched = true;
            doc.set_cursor(cx, next);
            doc.cursor_row_to_top();
            if let Some(saved) = doc.mark_match(next, rx, needle.len()) {
                self.saved = Some((next, saved));
            }
            tracing::trace!(target: "actions.search", row = next, rx, "match");
            return;
        }
        tracing::trace!(target: "actions.search", query, "no_match");
    }
}

/// Run the interactive search on the active document. Esc restores the cursor
/// and viewport from before the search.
pub fn search(ws: &mut Workspace, io: &mut Io<'_>) -> anyhow::Result<()> {
    let Some(doc) = ws.active_doc() else {
        return Ok(());
    };
    let (cx, cy) = doc.cursor();
    let view = doc.viewport();
    let mut state = SearchState::new();
    let query = prompt(
        ws,
        io,
        "Search: ",
        PromptNotify::CHANGE | PromptNotify::CANCEL,
        |ws, query, key| {
            if let Some(doc) = ws.active_doc_mut() {
                state.on_key(doc, query, key);
            }
            PromptFlow::Continue
        },
    )?;
    match query {
        None => {
            if let Some(doc) = ws.active_doc_mut() {
                doc.set_cursor(cx, cy);
                doc.scroll();
                doc.set_offsets(view.rowoff, view.coloff);
            }
        }
        Some(_) if !state.matched() => ws.status.set("Not found"),
        Some(_) => {}
    }
    Ok(())
}
