//! Platform detection and the document-root seam used by the preference stores.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::preferences::{Language, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// The "prefers dark color scheme" hint. `None` when the platform can't tell.
pub fn prefers_dark_scheme() -> Option<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Receives the document-level side effects of preference changes.
pub trait DocumentRoot {
    /// Drop any `light`/`dark` class from the root element, then add `theme`'s class.
    fn apply_theme(&self, theme: Theme);
    /// Set the root element's `lang` attribute.
    fn apply_language(&self, language: Language);
}

/// The real `<html>` element of the running renderer.
///
/// Must only be used from inside a Dioxus runtime on native targets (script eval).
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveDocument;

#[cfg(target_arch = "wasm32")]
impl LiveDocument {
    fn root_element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

#[cfg(target_arch = "wasm32")]
impl DocumentRoot for LiveDocument {
    fn apply_theme(&self, theme: Theme) {
        let Some(root) = Self::root_element() else {
            tracing::warn!(%theme, "no document element to mark");
            return;
        };
        let classes = root.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
    }

    fn apply_language(&self, language: Language) {
        if let Some(root) = Self::root_element() {
            let _ = root.set_attribute("lang", language.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DocumentRoot for LiveDocument {
    fn apply_theme(&self, theme: Theme) {
        let script = format!(
            "document.documentElement.classList.remove('{light}', '{dark}');\
             document.documentElement.classList.add('{theme}');",
            light = Theme::Light.as_str(),
            dark = Theme::Dark.as_str(),
            theme = theme.as_str(),
        );
        let _ = dioxus::prelude::document::eval(&script);
    }

    fn apply_language(&self, language: Language) {
        let script = format!(
            "document.documentElement.setAttribute('lang', '{}');",
            language.as_str()
        );
        let _ = dioxus::prelude::document::eval(&script);
    }
}

/// An in-memory stand-in for the root element: keeps its class list and `lang`.
#[derive(Debug, Default)]
pub struct DetachedDocument {
    classes: RefCell<BTreeSet<String>>,
    lang: RefCell<Option<String>>,
}

impl DetachedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let doc = Self::default();
        doc.classes
            .borrow_mut()
            .extend(classes.iter().map(|c| c.to_string()));
        doc
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn lang(&self) -> Option<String> {
        self.lang.borrow().clone()
    }
}

impl DocumentRoot for DetachedDocument {
    fn apply_theme(&self, theme: Theme) {
        let mut classes = self.classes.borrow_mut();
        classes.remove(Theme::Light.as_str());
        classes.remove(Theme::Dark.as_str());
        classes.insert(theme.as_str().to_string());
    }

    fn apply_language(&self, language: Language) {
        self.lang.replace(Some(language.as_str().to_string()));
    }
}
