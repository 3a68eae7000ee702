//! Cursor movement. Arrows, Home/End and paging work in both modes; the
//! letter motions (`hjkl`, `0`, `$`) only in Normal mode.

use super::DispatchResult;
use core_events::{KeyCode, KeyEvent};
use core_model::Workspace;
use core_state::{Direction, Document, Mode};

/// `None` when `key` is not a motion in the current mode.
pub(crate) fn handle_motion(key: KeyEvent, ws: &mut Workspace) -> Option<DispatchResult> {
    let letters = ws.mode == Mode::Normal && key.printable().is_some();
    let apply: fn(&mut Document) = match key.code {
        KeyCode::Left => |d| d.move_cursor(Direction::Left),
        KeyCode::Right => |d| d.move_cursor(Direction::Right),
        KeyCode::Up => |d| d.move_cursor(Direction::Up),
        KeyCode::Down => |d| d.move_cursor(Direction::Down),
        KeyCode::Home => Document::line_start,
        KeyCode::End => Document::line_end,
        KeyCode::PageUp => Document::page_up,
        KeyCode::PageDown => Document::page_down,
        KeyCode::Char('h') if letters => |d| d.move_cursor(Direction::Left),
        KeyCode::Char('l') if letters => |d| d.move_cursor(Direction::Right),
        KeyCode::Char('k') if letters => |d| d.move_cursor(Direction::Up),
        KeyCode::Char('j') if letters => |d| d.move_cursor(Direction::Down),
        KeyCode::Char('0') if letters => Document::line_start,
        KeyCode::Char('$') if letters => Document::line_end,
        _ => return None,
    };
    let doc = ws.active_doc_mut()?;
    let before = doc.cursor();
    apply(doc);
    let after = doc.cursor();
    tracing::trace!(target: "actions.dispatch", key = %key, from = ?before, to = ?after, "motion");
    Some(DispatchResult::dirty())
}
