//! Colon command classification.
//!
//! Converts the raw command line (always beginning with ':') into a
//! `ParsedCommand`. Pure: no side effects, unknown input is carried back as
//! `Unknown` for the caller to report.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Write,
    Quit,
    ForceQuit,
    WriteQuit,
    /// 1-based line number.
    Goto(usize),
    /// `:theme` alone lists, `:theme <name>` switches.
    Theme(Option<String>),
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        let s = raw.trim();
        let Some(body) = s.strip_prefix(':') else {
            return ParsedCommand::Unknown(s.to_string());
        };
        let body = body.trim();
        match body {
            "w" => return ParsedCommand::Write,
            "q" => return ParsedCommand::Quit,
            "q!" => return ParsedCommand::ForceQuit,
            "wq" | "x" => return ParsedCommand::WriteQuit,
            "theme" => return ParsedCommand::Theme(None),
            _ => {}
        }
        if let Ok(line) = body.parse::<usize>() {
            return ParsedCommand::Goto(line);
        }
        if let Some(rest) = body.strip_prefix("theme ") {
            let name = rest.trim();
            if !name.is_empty() {
                return ParsedCommand::Theme(Some(name.to_string()));
            }
        }
        ParsedCommand::Unknown(body.to_string())
    }
}
