//! Text area composition: which glyphs go on each text row and in which
//! highlight class. Kept free of terminal I/O so it can be tested directly.

use core_model::Workspace;
use core_syntax::Highlight;
use core_text::Row;

/// Welcome banner shown when no document is open.
pub const WELCOME: &str = concat!("Marrow editor -- version ", env!("CARGO_PKG_VERSION"));

/// Run of cells sharing one highlight class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub hl: Highlight,
    /// Control characters shown as placeholders, drawn in reverse video.
    pub control: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenLine {
    Text(Vec<Span>),
    /// Row past the end of the document.
    Tilde,
    Welcome(String),
}

/// Visible part of `row` (render cells `coloff..coloff+cols`) grouped by class.
pub fn row_spans(row: &Row, coloff: usize, cols: usize) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let cells = row.render().iter().zip(row.hl()).skip(coloff).take(cols);
    for (&c, &hl) in cells {
        let control = c.is_control();
        let shown = if control { control_glyph(c) } else { c };
        match spans.last_mut() {
            Some(last) if last.hl == hl && last.control == control => last.text.push(shown),
            _ => spans.push(Span {
                text: shown.to_string(),
                hl,
                control,
            }),
        }
    }
    spans
}

fn control_glyph(c: char) -> char {
    match c as u32 {
        n @ 0..=26 => char::from_u32(u32::from(b'@') + n).unwrap_or('?'),
        _ => '?',
    }
}

/// Every text row of the screen, top to bottom.
pub fn compose(ws: &Workspace) -> Vec<ScreenLine> {
    let (rows, cols) = ws.screen();
    let Some(doc) = ws.active_doc() else {
        return (0..rows)
            .map(|y| {
                if y == rows / 2 {
                    ScreenLine::Welcome(welcome_line(cols))
                } else {
                    ScreenLine::Tilde
                }
            })
            .collect();
    };
    let view = doc.viewport();
    (0..rows)
        .map(|y| match doc.row(y + view.rowoff) {
            Some(row) => ScreenLine::Text(row_spans(row, view.coloff, cols)),
            None => ScreenLine::Tilde,
        })
        .collect()
}

/// Centred banner; the left margin starts with `~` like every empty row.
pub fn welcome_line(cols: usize) -> String {
    let msg: String = WELCOME.chars().take(cols).collect();
    let mut padding = (cols - msg.chars().count()) / 2;
    let mut out = String::with_capacity(cols);
    if padding > 0 {
        out.push('~');
        padding -= 1;
    }
    out.extend(std::iter::repeat_n(' ', padding));
    out.push_str(&msg);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::Config;
    use core_state::{Document, DocumentOptions};
    use pretty_assertions::assert_eq;

    fn workspace(screen: (usize, usize)) -> Workspace {
        let cfg = Config::default();
        Workspace::new(cfg.settings(), cfg.themes(), "default".into(), screen)
    }

    #[test]
    fn welcome_centred_on_middle_row() {
        let ws = workspace((5, 60));
        let lines = compose(&ws);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], ScreenLine::Tilde);
        let ScreenLine::Welcome(text) = &lines[2] else {
            panic!("expected welcome on row 2: {lines:?}");
        };
        assert!(text.starts_with('~'));
        assert!(text.trim_start_matches(['~', ' ']).starts_with("Marrow editor -- version"));
        let pad = (60 - WELCOME.len()) / 2;
        assert_eq!(text.find('M'), Some(pad));
    }

    #[test]
    fn welcome_truncated_on_narrow_screen() {
        assert_eq!(welcome_line(6), "Marrow");
    }

    #[test]
    fn rows_past_end_are_tildes() {
        let mut ws = workspace((4, 20));
        ws.push_tab(Document::from_text("a\nb\n", 4, DocumentOptions::default(), (4, 20)));
        let lines = compose(&ws);
        assert!(matches!(lines[0], ScreenLine::Text(_)));
        assert!(matches!(lines[1], ScreenLine::Text(_)));
        assert_eq!(lines[2], ScreenLine::Tilde);
        assert_eq!(lines[3], ScreenLine::Tilde);
    }

    #[test]
    fn spans_clip_to_column_window() {
        let doc = Document::from_text("abcdef\n", 4, DocumentOptions::default(), (4, 20));
        let spans = row_spans(doc.row(0).unwrap(), 2, 3);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "cde");
        assert_eq!(spans[0].hl, Highlight::Normal);
    }

    #[test]
    fn control_chars_get_placeholders() {
        let doc = Document::from_text("a\u{1}b\n", 4, DocumentOptions::default(), (4, 20));
        let spans = row_spans(doc.row(0).unwrap(), 0, 20);
        let texts: Vec<(&str, bool)> = spans.iter().map(|s| (s.text.as_str(), s.control)).collect();
        assert_eq!(texts, vec![("a", false), ("A", true), ("b", false)]);
    }
}
