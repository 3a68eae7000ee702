//! Buffered terminal commands for one frame.
//!
//! A frame is collected as a list of commands and emitted in order with a
//! single flush at the end; nothing reaches the terminal mid-frame.
//! Positions are absolute with a (0,0) origin.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    MoveTo(u16, u16),
    /// Clear from the cursor to the end of the line.
    ClearLine,
    Print(String),
    /// SGR foreground code (30-37, 90-97, or a 256-colour index).
    Fg(u8),
    /// SGR background code (40-47, 100-107, or a 256-colour index).
    Bg(u8),
    Reverse,
    Reset,
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn push(&mut self, cmd: Command) {
        self.cmds.push(cmd);
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearLine => queue!(out, Clear(ClearType::UntilNewLine))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::Fg(code) => queue!(out, SetForegroundColor(sgr_color(code)))?,
                Command::Bg(code) => {
                    let fg = match code {
                        40..=47 | 100..=107 => code - 10,
                        n => n,
                    };
                    queue!(out, SetBackgroundColor(sgr_color(fg)))?
                }
                Command::Reverse => queue!(out, SetAttribute(Attribute::Reverse))?,
                Command::Reset => queue!(out, SetAttribute(Attribute::Reset), ResetColor)?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Map a classic SGR foreground code onto a crossterm colour. Codes outside
/// the 16-colour ranges are taken as 256-colour palette indices.
pub fn sgr_color(code: u8) -> Color {
    match code {
        30 => Color::Black,
        31 => Color::DarkRed,
        32 => Color::DarkGreen,
        33 => Color::DarkYellow,
        34 => Color::DarkBlue,
        35 => Color::DarkMagenta,
        36 => Color::DarkCyan,
        37 => Color::Grey,
        39 => Color::Reset,
        90 => Color::DarkGrey,
        91 => Color::Red,
        92 => Color::Green,
        93 => Color::Yellow,
        94 => Color::Blue,
        95 => Color::Magenta,
        96 => Color::Cyan,
        97 => Color::White,
        n => Color::AnsiValue(n),
    }
}
