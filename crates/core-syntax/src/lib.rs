//! Syntax classification for rendered rows.
//!
//! The scanner is deliberately line-local: it receives one row's rendered
//! (tab-expanded) characters plus the block-comment state carried out of the
//! previous row, and produces one [`Highlight`] per cell together with the
//! block-comment state carried into the next row. Propagating that state
//! across rows is the row store's job (`core-text`), which re-runs this scan
//! forward until the carried state stops changing.
//!
//! Precedence per cell (first rule that applies wins):
//! 1. single-line comment prefix: the rest of the row is `Comment`;
//! 2. block-comment delimiters (outside strings) toggle the comment state;
//! 3. quoted strings with `\` escapes (profile flag `STRINGS`);
//! 4. numbers starting at a separator, with at most one embedded `.` (flag `NUMBERS`);
//! 5. keywords starting at a separator and followed by one. A trailing `|` in
//!    the table marks the keyword as a `Type`.
//!
//! Keyword matching is first-match, not longest-match. Built-in tables keep
//! that sound by never listing a keyword that is a separator-terminated prefix
//! of a later one.

mod profiles;

pub use profiles::{HLDB, select_profile};

bitflags::bitflags! {
    /// Feature switches of a [`SyntaxProfile`]. The editor settings can mask
    /// them further at runtime.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SyntaxFlags: u8 {
        const NUMBERS = 0b0000_0001;
        const STRINGS = 0b0000_0010;
    }
}

/// Highlight class of one rendered cell. Colours are a theme concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    BlockComment,
    Keyword,
    Type,
    String,
    Number,
    Match,
}

impl Highlight {
    /// Stable lowercase name, used as the theme key.
    pub fn name(self) -> &'static str {
        match self {
            Highlight::Normal => "normal",
            Highlight::Comment => "comment",
            Highlight::BlockComment => "block_comment",
            Highlight::Keyword => "keyword",
            Highlight::Type => "type",
            Highlight::String => "string",
            Highlight::Number => "number",
            Highlight::Match => "match",
        }
    }
}

/// Static description of one language.
#[derive(Debug)]
pub struct SyntaxProfile {
    pub filetype: &'static str,
    /// Entries starting with `.` match the file extension, others match any
    /// substring of the file name.
    pub filematch: &'static [&'static str],
    /// Keyword table; a trailing `|` classifies the keyword as [`Highlight::Type`].
    pub keywords: &'static [&'static str],
    pub single_line_comment: Option<&'static str>,
    pub block_comment: Option<(&'static str, &'static str)>,
    pub flags: SyntaxFlags,
}

/// Type marker suffix in keyword tables.
pub const TYPE_MARKER: char = '|';

/// Whitespace, end of row (`'\0'`), and the punctuation that may border
/// keywords and numbers.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\0' || ",.()+-/*=~%<>[];".contains(c)
}

/// Number of chars in `pat` if `text[at..]` starts with it.
fn match_at(text: &[char], at: usize, pat: &str) -> Option<usize> {
    let mut n = 0;
    for pc in pat.chars() {
        if text.get(at + n) != Some(&pc) {
            return None;
        }
        n += 1;
    }
    if n == 0 { None } else { Some(n) }
}

fn fill(out: &mut [Highlight], from: usize, len: usize, class: Highlight) {
    let end = (from + len).min(out.len());
    for cell in &mut out[from..end] {
        *cell = class;
    }
}

/// Classify `render` into `out` (resized to `render.len()`).
///
/// `comment_open_before` is the previous row's carried block-comment state.
/// Returns the block-comment state at the end of this row.
pub fn highlight_line(
    render: &[char],
    profile: &SyntaxProfile,
    mask: SyntaxFlags,
    comment_open_before: bool,
    out: &mut Vec<Highlight>,
) -> bool {
    out.clear();
    out.resize(render.len(), Highlight::Normal);

    let flags = profile.flags & mask;
    let scs = profile.single_line_comment.filter(|s| !s.is_empty());
    let block = profile
        .block_comment
        .filter(|(start, end)| !start.is_empty() && !end.is_empty());

    let mut prev_sep = true;
    let mut in_string: Option<char> = None;
    let mut in_comment = comment_open_before && block.is_some();
    let mut number_has_dot = false;

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 { out[i - 1] } else { Highlight::Normal };

        if let Some(prefix) = scs
            && in_string.is_none()
            && !in_comment
            && match_at(render, i, prefix).is_some()
        {
            fill(out, i, render.len() - i, Highlight::Comment);
            break;
        }

        if let Some((start, end)) = block
            && in_string.is_none()
        {
            if in_comment {
                if let Some(n) = match_at(render, i, end) {
                    // The terminator itself stays Normal; only the body is comment.
                    i += n;
                    in_comment = false;
                    prev_sep = true;
                    continue;
                }
                out[i] = Highlight::BlockComment;
                i += 1;
                continue;
            } else if let Some(n) = match_at(render, i, start) {
                fill(out, i, n, Highlight::BlockComment);
                i += n;
                in_comment = true;
                continue;
            }
        }

        if flags.contains(SyntaxFlags::STRINGS) {
            if let Some(quote) = in_string {
                out[i] = Highlight::String;
                if c == '\\' && i + 1 < render.len() {
                    out[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == '"' || c == '\'' {
                in_string = Some(c);
                out[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if flags.contains(SyntaxFlags::NUMBERS) {
            let starts = c.is_ascii_digit() && prev_sep;
            let continues = prev_hl == Highlight::Number
                && (c.is_ascii_digit() || (c == '.' && !number_has_dot));
            if starts || continues {
                if starts {
                    number_has_dot = false;
                }
                if c == '.' {
                    number_has_dot = true;
                }
                out[i] = Highlight::Number;
                i += 1;
                prev_sep = false;
                continue;
            }
        }

        if prev_sep {
            let mut matched = false;
            for kw in profile.keywords {
                let (word, class) = match kw.strip_suffix(TYPE_MARKER) {
                    Some(word) => (word, Highlight::Type),
                    None => (*kw, Highlight::Keyword),
                };
                let Some(n) = match_at(render, i, word) else {
                    continue;
                };
                if render.get(i + n).is_none_or(|next| is_separator(*next)) {
                    fill(out, i, n, class);
                    i += n;
                    matched = true;
                    break;
                }
            }
            if matched {
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    in_comment
}
