use dioxus::prelude::*;

use crate::preferences::{LanguageProvider, ThemeProvider};

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Composition root shared by the launchers.
///
/// Mounts the global stylesheet and wraps `children` in the theme and
/// language providers, so nothing below renders before both preferences
/// have been read.
#[component]
pub fn SiteShell(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeProvider {
            LanguageProvider {
                {children}
            }
        }
    }
}
