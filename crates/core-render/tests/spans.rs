use core_render::screen::row_spans;
use core_state::{Document, DocumentOptions};
use proptest::prelude::*;

proptest! {
    // Spans rebuild exactly the visible window of the render text.
    #[test]
    fn spans_cover_visible_window(
        line in "[a-z0-9 \t\"/*]{0,40}",
        coloff in 0usize..20,
        cols in 1usize..30,
    ) {
        let mut doc = Document::from_text(&line, 4, DocumentOptions::default(), (5, 80));
        doc.set_syntax(core_syntax::select_profile("x.c"), core_syntax::SyntaxFlags::all());
        let Some(row) = doc.row(0) else { return Ok(()); };
        let expected: String = row.render().iter().skip(coloff).take(cols).collect();
        let spans = row_spans(row, coloff, cols);
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, expected);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].hl != pair[1].hl || pair[0].control != pair[1].control);
        }
    }
}
