//! Edit mode: text insertion and deletion at the cursor.

use super::{DispatchResult, mode, motion};
use core_events::{KeyCode, KeyEvent};
use core_model::Workspace;

pub(crate) fn handle_edit(key: KeyEvent, ws: &mut Workspace) -> DispatchResult {
    if key.code == KeyCode::Esc {
        return mode::enter_normal(ws);
    }
    if let Some(res) = motion::handle_motion(key, ws) {
        return res;
    }
    let Some(doc) = ws.active_doc_mut() else {
        return DispatchResult::clean();
    };
    let before = doc.cursor();
    let op = match key.code {
        KeyCode::Enter => {
            doc.insert_newline();
            "insert_newline"
        }
        KeyCode::Backspace => {
            doc.delete_char();
            "backspace"
        }
        _ if key.is_ctrl('h') => {
            doc.delete_char();
            "backspace"
        }
        KeyCode::Delete => {
            doc.forward_delete();
            "delete"
        }
        KeyCode::Tab => {
            doc.insert_char('\t');
            "insert_char"
        }
        _ => match key.printable() {
            Some(c) => {
                doc.insert_char(c);
                "insert_char"
            }
            None => return DispatchResult::clean(),
        },
    };
    let (cx, cy) = doc.cursor();
    tracing::trace!(target: "actions.dispatch", op, line = before.1, col = before.0, to_line = cy, to_col = cx, "edit");
    DispatchResult::dirty()
}
