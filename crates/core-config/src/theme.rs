//! Highlight class to colour mapping.

use core_syntax::Highlight;
use serde::Deserialize;
use std::collections::BTreeMap;

/// SGR foreground codes per highlight class, plus an optional background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Option<u8>,
    pub normal: u8,
    pub keyword: u8,
    pub type_: u8,
    pub string: u8,
    pub number: u8,
    pub match_: u8,
    pub comment: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: None,
            normal: 37,
            keyword: 33,
            type_: 32,
            string: 35,
            number: 31,
            match_: 34,
            comment: 36,
        }
    }
}

impl Theme {
    pub fn color_for(&self, hl: Highlight) -> u8 {
        match hl {
            Highlight::Comment | Highlight::BlockComment => self.comment,
            Highlight::Keyword => self.keyword,
            Highlight::Type => self.type_,
            Highlight::String => self.string,
            Highlight::Number => self.number,
            Highlight::Match => self.match_,
            Highlight::Normal => self.normal,
        }
    }

    fn overlay(mut self, file: &ThemeFile) -> Self {
        if file.background.is_some() {
            self.background = file.background;
        }
        let slots = [
            (&mut self.normal, file.normal),
            (&mut self.keyword, file.keyword),
            (&mut self.type_, file.type_),
            (&mut self.string, file.string),
            (&mut self.number, file.number),
            (&mut self.match_, file.match_),
            (&mut self.comment, file.comment),
        ];
        for (slot, value) in slots {
            if let Some(v) = value {
                *slot = v;
            }
        }
        self
    }
}

/// One `[themes.<name>]` table; missing entries keep the default palette.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ThemeFile {
    pub background: Option<u8>,
    pub normal: Option<u8>,
    pub keyword: Option<u8>,
    #[serde(rename = "type")]
    pub type_: Option<u8>,
    pub string: Option<u8>,
    pub number: Option<u8>,
    #[serde(rename = "match")]
    pub match_: Option<u8>,
    pub comment: Option<u8>,
}

/// Named themes. Always holds [`ThemeSet::DEFAULT`].
#[derive(Debug, Clone)]
pub struct ThemeSet {
    themes: BTreeMap<String, Theme>,
}

impl Default for ThemeSet {
    fn default() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(Self::DEFAULT.to_string(), Theme::default());
        Self { themes }
    }
}

impl ThemeSet {
    pub const DEFAULT: &'static str = "default";

    pub fn from_files(files: &BTreeMap<String, ThemeFile>) -> Self {
        let mut set = Self::default();
        for (name, file) in files {
            set.themes
                .insert(name.clone(), Theme::default().overlay(file));
        }
        set
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}
