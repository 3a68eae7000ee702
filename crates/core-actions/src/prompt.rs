//! Single-line input collected in the status area.

use crate::Io;
use core_events::{KeyCode, KeyEvent};
use core_model::Workspace;

bitflags::bitflags! {
    /// Which extra events reach the prompt callback. Enter with input always does.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PromptNotify: u8 {
        /// Every key other than Enter/Esc, after the input is updated.
        const CHANGE = 0b0000_0001;
        /// Esc, before the prompt returns `None`.
        const CANCEL = 0b0000_0010;
    }
}

/// Callback verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFlow {
    Continue,
    /// Stop now and return the input collected so far.
    Accept,
}

/// Read a line after `label`. Returns `None` on Esc.
///
/// Backspace, Delete and Ctrl-H drop the last char. Enter with empty input
/// is ignored. The callback sees the workspace, the current input and the
/// key that triggered it.
pub fn prompt<F>(
    ws: &mut Workspace,
    io: &mut Io<'_>,
    label: &str,
    notify: PromptNotify,
    mut callback: F,
) -> anyhow::Result<Option<String>>
where
    F: FnMut(&mut Workspace, &str, KeyEvent) -> PromptFlow,
{
    let mut input = String::new();
    loop {
        ws.status.set(format!("{label}{input}"));
        io.render.render(ws)?;
        let key = io.keys.read_key()?;
        match key.code {
            KeyCode::Esc => {
                ws.status.clear();
                if notify.contains(PromptNotify::CANCEL) {
                    callback(ws, &input, key);
                }
                tracing::trace!(target: "actions.prompt", label, "cancel");
                return Ok(None);
            }
            KeyCode::Enter => {
                if input.is_empty() {
                    continue;
                }
                ws.status.clear();
                callback(ws, &input, key);
                tracing::trace!(target: "actions.prompt", label, len = input.len(), "accept");
                return Ok(Some(input));
            }
            KeyCode::Backspace | KeyCode::Delete => {
                input.pop();
            }
            _ if key.is_ctrl('h') => {
                input.pop();
            }
            _ => {
                if let Some(c) = key.printable() {
                    input.push(c);
                }
            }
        }
        if notify.contains(PromptNotify::CHANGE) && callback(ws, &input, key) == PromptFlow::Accept
        {
            ws.status.clear();
            return Ok(Some(input));
        }
    }
}

/// One-key yes/no question; true only for `y`.
pub(crate) fn confirm(ws: &mut Workspace, io: &mut Io<'_>, label: &str) -> anyhow::Result<bool> {
    let answer = prompt(ws, io, label, PromptNotify::CHANGE, |_, _, _| {
        PromptFlow::Accept
    })?;
    Ok(answer.as_deref() == Some("y"))
}
