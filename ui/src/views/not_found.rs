use dioxus::prelude::*;

use crate::preferences::use_language;

/// Body for unknown routes. `segments` is the unmatched path.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let strings = use_language().bundle();
    let path = format!("/{}", segments.join("/"));
    tracing::info!(%path, "unknown route");

    rsx! {
        document::Title { "{strings.not_found.title}" }
        main { class: "page page-not-found",
            div { class: "not-found glass",
                h1 { class: "not-found__code gradient-text", "404" }
                h2 { class: "not-found__title", "{strings.not_found.title}" }
                p { class: "not-found__body", "{strings.not_found.body}" }
                code { class: "not-found__path", "{path}" }
                a { class: "button button--primary", href: "/", "{strings.not_found.back}" }
            }
        }
    }
}
