//! Static records shown by the sections. Constant for the process lifetime.

pub mod profile;
pub mod projects;
pub mod skills;
pub mod timeline;

use crate::preferences::Language;

/// A string literal in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub pt: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(pt: &'static str, en: &'static str) -> Self {
        Self { pt, en }
    }

    /// The same text in both languages (proper names, years).
    pub const fn same(text: &'static str) -> Self {
        Self { pt: text, en: text }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Pt => self.pt,
            Language::En => self.en,
        }
    }
}

/// A tag list in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedTags {
    pub pt: &'static [&'static str],
    pub en: &'static [&'static str],
}

impl LocalizedTags {
    pub const fn new(pt: &'static [&'static str], en: &'static [&'static str]) -> Self {
        Self { pt, en }
    }

    pub const fn same(tags: &'static [&'static str]) -> Self {
        Self { pt: tags, en: tags }
    }

    pub fn get(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Pt => self.pt,
            Language::En => self.en,
        }
    }
}
