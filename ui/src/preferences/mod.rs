//! Visitor preferences (color theme and display language).
//!
//! Each preference has a pure store (`ThemeStore`, `LanguageStore`) that owns
//! the value, writes it to durable storage and mirrors it onto the document
//! root. The matching provider component owns the store at the composition root
//! and hands sections a copyable handle through context.

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform::{DocumentRoot, LiveDocument};
use crate::core::storage::{self, PreferenceStorage};

mod language;
mod theme;

pub use language::{
    resolve_initial_language, use_language, LanguageHandle, LanguageProvider, LanguageStore,
};
pub use theme::{resolve_initial_theme, use_theme, ThemeHandle, ThemeProvider, ThemeStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Pt, Language::En];

    pub fn toggled(self) -> Self {
        match self {
            Self::Pt => Self::En,
            Self::En => Self::Pt,
        }
    }

    /// Value persisted under the `language` key and written to `<html lang>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// Locale folder under `i18n/`.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Self::Pt => "pt-BR",
            Self::En => "en-US",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pt" => Some(Self::Pt),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collaborators the preference stores persist to and mirror onto.
///
/// Launchers may provide one through context before the providers render;
/// otherwise the providers use [`PreferenceEnv::platform`].
#[derive(Clone)]
pub struct PreferenceEnv {
    pub storage: Rc<dyn PreferenceStorage>,
    pub document: Rc<dyn DocumentRoot>,
}

impl PreferenceEnv {
    pub fn new(storage: Rc<dyn PreferenceStorage>, document: Rc<dyn DocumentRoot>) -> Self {
        Self { storage, document }
    }

    pub fn platform() -> Self {
        Self::new(storage::platform_storage(), Rc::new(LiveDocument))
    }
}

/// The environment supplied by an ancestor. Without one, the platform default
/// is created here and provided downward, so nested providers share one
/// storage handle.
pub(crate) fn use_preference_env() -> PreferenceEnv {
    use_hook(|| match try_consume_context::<PreferenceEnv>() {
        Some(env) => env,
        None => provide_context(PreferenceEnv::platform()),
    })
}
