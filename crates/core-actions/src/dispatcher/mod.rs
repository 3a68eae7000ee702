//! Modal key dispatch.
//!
//! Decomposed by concern:
//! * `mode`    - Normal <-> Edit transitions
//! * `motion`  - cursor movement shared by both modes
//! * `edit`    - text mutation in Edit mode
//! * `command` - colon commands and single-key confirmations
//!
//! The only state kept between keys is `Workspace::mode`.

use crate::Io;
use core_events::{KeyCode, KeyEvent};
use core_model::Workspace;
use core_state::Mode;

mod command;
mod command_parser;
mod edit;
mod mode;
mod motion;

pub use command_parser::{CommandParser, ParsedCommand};

/// Result of dispatching a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Something visible changed; repaint.
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply one key to the workspace. Prompts opened by the key read their own
/// follow-up keys from `io` before this returns.
pub fn dispatch(key: KeyEvent, ws: &mut Workspace, io: &mut Io<'_>) -> anyhow::Result<DispatchResult> {
    tracing::trace!(target: "actions.dispatch", key = %key, mode = ws.mode.label(), "key");
    if key.is_ctrl('q') {
        return Ok(DispatchResult::quit());
    }
    if ws.active_doc().is_none() {
        return Ok(DispatchResult::clean());
    }
    match ws.mode {
        Mode::Normal => normal(key, ws, io),
        Mode::Edit => Ok(edit::handle_edit(key, ws)),
    }
}

fn normal(key: KeyEvent, ws: &mut Workspace, io: &mut Io<'_>) -> anyhow::Result<DispatchResult> {
    if let Some(res) = motion::handle_motion(key, ws) {
        return Ok(res);
    }
    if !key.mods.is_empty() && key.printable().is_none() {
        return Ok(DispatchResult::clean());
    }
    let res = match key.code {
        KeyCode::Char('i') => mode::enter_edit(ws),
        KeyCode::Char(':') => command::colon(ws, io)?,
        KeyCode::Char('/') => {
            crate::search::search(ws, io)?;
            DispatchResult::dirty()
        }
        KeyCode::Char('d') => command::confirm_delete_row(ws, io)?,
        KeyCode::Char('z') => command::confirm_center(ws, io)?,
        _ => DispatchResult::clean(),
    };
    Ok(res)
}
