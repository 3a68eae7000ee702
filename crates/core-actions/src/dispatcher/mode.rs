//! Normal <-> Edit transitions. Each change is announced on the status line.

use super::DispatchResult;
use core_model::Workspace;
use core_state::Mode;

pub(crate) fn enter_edit(ws: &mut Workspace) -> DispatchResult {
    set_mode(ws, Mode::Edit)
}

pub(crate) fn enter_normal(ws: &mut Workspace) -> DispatchResult {
    set_mode(ws, Mode::Normal)
}

fn set_mode(ws: &mut Workspace, mode: Mode) -> DispatchResult {
    if ws.mode == mode {
        return DispatchResult::clean();
    }
    tracing::trace!(target: "actions.dispatch", from = ws.mode.label(), to = mode.label(), "mode_change");
    ws.mode = mode;
    ws.status.set(format!("-- {} --", mode.label()));
    DispatchResult::dirty()
}
