use dioxus::prelude::*;
use tracing::trace;

use crate::components::AppNavbar;
use crate::content::profile::SITE;
use crate::preferences::use_language;
use crate::sections::{About, Contact, Hero, Projects, Timeline};

/// The single-page portfolio: navbar over the five stacked sections.
#[component]
pub fn Home() -> Element {
    let language = use_language();
    let strings = language.bundle();
    trace!(language = %language.language(), "home render");

    rsx! {
        document::Title { "{strings.meta.title}" }
        document::Meta { name: "description", content: "{strings.meta.description}" }

        AppNavbar {}
        main { class: "page page-home",
            Hero {}
            About {}
            Projects {}
            Timeline {}
            Contact {}
        }
        footer { class: "footer",
            p { class: "footer__text", "© {SITE.owner}" }
        }
    }
}
