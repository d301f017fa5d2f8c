use dioxus::prelude::*;

use crate::preferences::{use_language, use_theme, Language, Theme};

/// Glyph for the theme the button switches *to*.
pub fn theme_glyph(current: Theme) -> &'static str {
    match current {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    }
}

/// Uppercase code of the active language.
pub fn language_badge(current: Language) -> &'static str {
    match current {
        Language::Pt => "PT",
        Language::En => "EN",
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let strings = use_language().bundle();
    let current = theme.theme();

    rsx! {
        button {
            r#type: "button",
            class: "toggle toggle--theme",
            title: "{strings.nav.toggle_theme}",
            aria_label: "{strings.nav.toggle_theme}",
            onclick: move |_| theme.toggle(),
            span { class: "toggle__icon toggle__icon--{current}", aria_hidden: "true", "{theme_glyph(current)}" }
        }
    }
}

#[component]
pub fn LanguageToggle() -> Element {
    let language = use_language();
    let strings = language.bundle();
    let current = language.language();

    rsx! {
        button {
            r#type: "button",
            class: "toggle toggle--language",
            title: "{strings.nav.toggle_language}",
            aria_label: "{strings.nav.toggle_language}",
            onclick: move |_| language.toggle(),
            span { class: "toggle__badge", "{language_badge(current)}" }
        }
    }
}
