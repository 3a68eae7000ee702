//! Full-frame terminal painter.
//!
//! Every call to [`TerminalRenderer::render`] repaints the whole screen:
//! the text area (document rows, `~` filler or the welcome banner), the
//! reverse-video status bar and the message line, then places the cursor.
//! The frame is assembled as [`writer::Command`]s and flushed once.
//!
//! Layout, for a text area of `rows` x `cols`:
//! - rows `0..rows`: text, scrolled by the active document's viewport
//! - row `rows`: status bar
//! - row `rows + 1`: message line (hidden after the status timeout)
//!
//! Colours come from the workspace theme; highlight classes are mapped to SGR
//! codes through `Theme::color_for`.

use core_config::Theme;
use core_model::{Render, Workspace};
use std::io::Write;

pub mod screen;
pub mod status;
pub mod writer;

use screen::ScreenLine;
use writer::{Command, Writer};

pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn render(&mut self, ws: &Workspace) -> anyhow::Result<()> {
        let frame = build_frame(ws);
        tracing::trace!(target: "render", commands = frame.commands().len(), "frame");
        frame.flush_to(&mut self.out)
    }
}

/// Assemble the commands for one full frame.
pub fn build_frame(ws: &Workspace) -> Writer {
    let (rows, cols) = ws.screen();
    let theme = ws.theme();
    let mut w = Writer::new();
    w.push(Command::HideCursor);
    for (y, line) in screen::compose(ws).into_iter().enumerate() {
        w.move_to(0, to_u16(y));
        begin_line(&mut w, &theme);
        match line {
            ScreenLine::Tilde => w.print("~"),
            ScreenLine::Welcome(text) => w.print(text),
            ScreenLine::Text(spans) => {
                for span in spans {
                    if span.control {
                        w.push(Command::Reverse);
                        w.print(span.text);
                        w.push(Command::Reset);
                        begin_line(&mut w, &theme);
                    } else {
                        w.push(Command::Fg(theme.color_for(span.hl)));
                        w.print(span.text);
                    }
                }
            }
        }
        w.push(Command::ClearLine);
        w.push(Command::Reset);
    }

    w.move_to(0, to_u16(rows));
    w.push(Command::Reverse);
    w.print(status::format_status(&status::compose_status(ws), cols));
    w.push(Command::Reset);

    w.move_to(0, to_u16(rows + 1));
    w.push(Command::ClearLine);
    if let Some(msg) = status::message_line(ws, cols) {
        w.print(msg);
    }

    let (x, y) = cursor_position(ws);
    w.move_to(x, y);
    w.push(Command::ShowCursor);
    w
}

fn begin_line(w: &mut Writer, theme: &Theme) {
    if let Some(bg) = theme.background {
        w.push(Command::Bg(bg));
    }
    w.push(Command::Fg(theme.normal));
}

/// Screen cell of the cursor; the origin when no document is open.
pub fn cursor_position(ws: &Workspace) -> (u16, u16) {
    let Some(doc) = ws.active_doc() else {
        return (0, 0);
    };
    let view = doc.viewport();
    let (_, cy) = doc.cursor();
    (
        to_u16(doc.rx().saturating_sub(view.coloff)),
        to_u16(cy.saturating_sub(view.rowoff)),
    )
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
