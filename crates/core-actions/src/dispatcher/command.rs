//! Colon command line and the single-key confirmations (`d`, `z`).

use super::DispatchResult;
use super::command_parser::{CommandParser, ParsedCommand};
use crate::Io;
use crate::io_ops::save_active;
use crate::prompt::{PromptFlow, PromptNotify, confirm, prompt};
use core_model::Workspace;
use core_state::Document;

/// Read a command after `:` and run it. Esc abandons the line.
pub(crate) fn colon(ws: &mut Workspace, io: &mut Io<'_>) -> anyhow::Result<DispatchResult> {
    let Some(line) = prompt(ws, io, ":", PromptNotify::empty(), |_, _, _| {
        PromptFlow::Continue
    })?
    else {
        return Ok(DispatchResult::dirty());
    };
    let parsed = CommandParser::parse(&format!(":{line}"));
    tracing::debug!(target: "actions.command", ?parsed, "command");
    Ok(execute(parsed, ws))
}

fn execute(cmd: ParsedCommand, ws: &mut Workspace) -> DispatchResult {
    match cmd {
        ParsedCommand::Write => {
            save_active(ws);
            DispatchResult::dirty()
        }
        ParsedCommand::Quit => {
            if ws.active_doc().is_some_and(Document::is_dirty) {
                ws.status.set("Unsaved changes (use :q! to discard, :wq to save)");
                DispatchResult::dirty()
            } else {
                DispatchResult::quit()
            }
        }
        ParsedCommand::ForceQuit => DispatchResult::quit(),
        ParsedCommand::WriteQuit => {
            if save_active(ws) {
                DispatchResult::quit()
            } else {
                DispatchResult::dirty()
            }
        }
        ParsedCommand::Goto(line) => {
            if let Some(doc) = ws.active_doc_mut() {
                doc.goto_line(line);
            }
            DispatchResult::dirty()
        }
        ParsedCommand::Theme(None) => {
            let names: Vec<&str> = ws.themes().names().collect();
            let msg = format!("Themes: {} (current: {})", names.join(", "), ws.theme_name());
            ws.status.set(msg);
            DispatchResult::dirty()
        }
        ParsedCommand::Theme(Some(name)) => {
            if ws.set_theme(&name) {
                ws.status.set(format!("Theme: {name}"));
            } else {
                ws.status.set(format!("Unknown theme: {name}"));
            }
            DispatchResult::dirty()
        }
        ParsedCommand::Unknown(s) => {
            ws.status.set(format!("Unknown command: {s}"));
            DispatchResult::dirty()
        }
    }
}

pub(crate) fn confirm_delete_row(ws: &mut Workspace, io: &mut Io<'_>) -> anyhow::Result<DispatchResult> {
    if confirm(ws, io, "Delete line? (y/n) ")?
        && let Some(doc) = ws.active_doc_mut()
    {
        doc.delete_row();
    }
    Ok(DispatchResult::dirty())
}

pub(crate) fn confirm_center(ws: &mut Workspace, io: &mut Io<'_>) -> anyhow::Result<DispatchResult> {
    if confirm(ws, io, "Center view? (y/n) ")?
        && let Some(doc) = ws.active_doc_mut()
    {
        doc.center_viewport();
    }
    Ok(DispatchResult::dirty())
}
