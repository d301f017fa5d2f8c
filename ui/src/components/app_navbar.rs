use dioxus::prelude::*;

use super::observers::use_nav_visibility;
use super::toggles::{LanguageToggle, ThemeToggle};
use crate::content::profile::SITE;
use crate::preferences::use_language;
use crate::sections::SectionId;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Fixed top bar: brand, in-page anchors and the preference toggles.
///
/// Slides out of view while the visitor scrolls down past the threshold and
/// returns on any upward scroll.
#[component]
pub fn AppNavbar() -> Element {
    let strings = use_language().bundle();
    let visibility = use_nav_visibility(SITE.nav_hide_threshold_px as f64);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar {visibility().css_class()}",
            div { class: "navbar__inner glass",
                a { class: "navbar__brand gradient-text", href: "{SectionId::Home.href()}", "{SITE.brand_mark}" }

                nav { class: "navbar__links",
                    for section in SectionId::ALL {
                        a {
                            key: "{section.id()}",
                            class: "navbar__link",
                            href: "{section.href()}",
                            "{section.nav_label(&strings.nav)}"
                        }
                    }
                }

                div { class: "navbar__actions",
                    LanguageToggle {}
                    ThemeToggle {}
                }
            }
        }
    }
}
