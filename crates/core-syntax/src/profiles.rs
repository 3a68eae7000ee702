//! Built-in language table and file name based selection.

use crate::{SyntaxFlags, SyntaxProfile};

const DEFAULT_FLAGS: SyntaxFlags = SyntaxFlags::NUMBERS.union(SyntaxFlags::STRINGS);

// Primitive specifiers (`int`, `char`, ...) are reserved words and classed as
// keywords; aggregate introducers and library typedefs carry the type marker.
const C_KEYWORDS: &[&str] = &[
    "#define", "#include", "auto", "break", "case", "const", "continue", "default", "double",
    "do", "else", "extern", "for", "goto", "if", "register", "return", "sizeof", "static",
    "switch", "typedef", "volatile", "while", "char", "float", "int", "long", "short", "signed",
    "unsigned", "void", "enum|", "struct|", "union|", "size_t|", "ssize_t|", "FILE|",
];

const ARSON_KEYWORDS: &[&str] = &[
    "burn", "for", "through", "while", "prepmatch", "if", "else", "return", "True|", "False|",
    "int|", "str|", "float|", "bool|",
];

const CSS_KEYWORDS: &[&str] = &["accent-color", "acos", "abs|"];

const JS_KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "finally", "for", "function", "if",
    "implements", "import", "instanceof", "interface", "in", "let", "new", "package", "private",
    "protected", "public", "return", "super", "switch", "static", "this", "throw", "try",
    "typeof", "var", "void", "while", "with", "yield", "false|", "null|", "true|",
];

const PY_KEYWORDS: &[&str] = &[
    "await", "else", "import", "pass", "break", "except", "in", "raise", "class", "finally",
    "is", "return", "and", "continue", "for", "lambda", "try", "as", "def", "from", "nonlocal",
    "while", "assert", "del", "global", "not", "with", "async", "elif", "if", "or", "yield",
    "True|", "False|", "None|", "str|", "int|", "float|", "complex|", "list|", "tuple|",
    "range|", "dict|", "set|", "frozenset|", "bool|", "bytes|", "bytearray|", "memoryview|",
];

// `if let` must precede `if`: with a space as the next char, `if` would
// otherwise win the first-match scan.
const RUST_KEYWORDS: &[&str] = &[
    "as", "use", "extern crate", "break", "const", "continue", "crate", "else", "if let", "if",
    "enum", "extern", "fn", "for", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "static", "struct", "trait", "type", "unsafe", "where",
    "while", "false|", "true|", "Self|", "bool|", "char|", "str|", "String|", "Vec|", "Option|",
    "Result|", "usize|", "isize|", "u8|", "u16|", "u32|", "u64|", "i8|", "i16|", "i32|", "i64|",
    "f32|", "f64|",
];

/// Highlight database, searched in order by [`select_profile`].
pub static HLDB: &[SyntaxProfile] = &[
    SyntaxProfile {
        filetype: "arson",
        filematch: &[".ars"],
        keywords: ARSON_KEYWORDS,
        single_line_comment: Some("#"),
        block_comment: None,
        flags: DEFAULT_FLAGS,
    },
    SyntaxProfile {
        filetype: "c",
        filematch: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: DEFAULT_FLAGS,
    },
    SyntaxProfile {
        filetype: "css",
        filematch: &[".css", ".scss"],
        keywords: CSS_KEYWORDS,
        single_line_comment: None,
        block_comment: Some(("/*", "*/")),
        flags: DEFAULT_FLAGS,
    },
    SyntaxProfile {
        filetype: "html",
        filematch: &[".html", ".ejs"],
        keywords: &[],
        single_line_comment: None,
        block_comment: Some(("<!--", "-->")),
        flags: SyntaxFlags::STRINGS,
    },
    SyntaxProfile {
        filetype: "js",
        filematch: &[".js", ".ts", ".cjs", ".mjs"],
        keywords: JS_KEYWORDS,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: DEFAULT_FLAGS,
    },
    SyntaxProfile {
        filetype: "py",
        filematch: &[".py"],
        keywords: PY_KEYWORDS,
        single_line_comment: Some("#"),
        block_comment: Some(("\"\"\"", "\"\"\"")),
        flags: DEFAULT_FLAGS,
    },
    SyntaxProfile {
        filetype: "rust",
        filematch: &[".rs"],
        keywords: RUST_KEYWORDS,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: DEFAULT_FLAGS,
    },
];

/// Pick the first profile whose extension (entries starting with `.`) equals
/// the file's final extension, or whose other entries occur in the name.
pub fn select_profile(filename: &str) -> Option<&'static SyntaxProfile> {
    let ext = filename.rfind('.').map(|i| &filename[i..]);
    let found = HLDB.iter().find(|profile| {
        profile.filematch.iter().any(|pat| {
            if pat.starts_with('.') {
                ext == Some(*pat)
            } else {
                filename.contains(pat)
            }
        })
    });
    tracing::debug!(target: "syntax", filename, filetype = found.map(|p| p.filetype), "profile_select");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TYPE_MARKER;

    #[test]
    fn selects_by_extension() {
        assert_eq!(select_profile("src/main.rs").map(|p| p.filetype), Some("rust"));
        assert_eq!(select_profile("a/b/x.h").map(|p| p.filetype), Some("c"));
        assert_eq!(select_profile("app.mjs").map(|p| p.filetype), Some("js"));
    }

    #[test]
    fn extension_must_be_final() {
        assert!(select_profile("archive.c.txt").is_none());
        assert!(select_profile("README").is_none());
    }

    #[test]
    fn keyword_tables_have_no_separator_prefix_collisions() {
        // A keyword followed by a separator inside a later keyword would shadow it.
        for profile in HLDB {
            let words: Vec<&str> = profile
                .keywords
                .iter()
                .map(|k| k.strip_suffix(TYPE_MARKER).unwrap_or(k))
                .collect();
            for (i, early) in words.iter().enumerate() {
                for late in &words[i + 1..] {
                    if let Some(rest) = late.strip_prefix(early) {
                        let shadowed = rest.chars().next().is_some_and(crate::is_separator);
                        assert!(
                            !shadowed,
                            "{}: `{early}` shadows `{late}`",
                            profile.filetype
                        );
                    }
                }
            }
        }
    }
}
