use dioxus::prelude::*;

use super::SectionId;
use crate::components::use_reveal;
use crate::content::profile::SITE;
use crate::preferences::use_language;

#[component]
pub fn Hero() -> Element {
    let strings = use_language().bundle();
    let hero = &strings.hero;
    use_reveal(SectionId::Home.id());

    rsx! {
        section { id: "{SectionId::Home.id()}", class: "section hero",
            div { class: "hero__backdrop", aria_hidden: "true",
                span { class: "hero__orb hero__orb--indigo" }
                span { class: "hero__orb hero__orb--pink" }
            }
            div { class: "hero__content",
                p { class: "hero__greeting", "data-reveal": "true", "{hero.greeting}" }
                h1 { class: "hero__name gradient-text", "data-reveal": "true", "{hero.name}" }
                h2 { class: "hero__role", "data-reveal": "true", "{hero.role}" }
                p { class: "hero__description", "data-reveal": "true", "{hero.description}" }

                div { class: "hero__actions", "data-reveal": "true",
                    a { class: "button button--primary", href: "{SectionId::Projects.href()}", "{hero.cta_projects}" }
                    a { class: "button button--ghost", href: "{SectionId::Contact.href()}", "{hero.cta_contact}" }
                }

                div { class: "hero__social", "data-reveal": "true",
                    a { class: "social-link", href: "{SITE.github_url}", target: "_blank", rel: "noopener noreferrer", aria_label: "GitHub",
                        span { class: "icon icon--github", aria_hidden: "true" }
                    }
                    a { class: "social-link", href: "{SITE.linkedin_url}", target: "_blank", rel: "noopener noreferrer", aria_label: "LinkedIn",
                        span { class: "icon icon--linkedin", aria_hidden: "true" }
                    }
                    a { class: "social-link", href: "{SITE.mailto()}", aria_label: "Email",
                        span { class: "icon icon--mail", aria_hidden: "true" }
                    }
                }
            }
            a { class: "hero__scroll", href: "{SectionId::About.href()}",
                span { "{hero.scroll}" }
                span { class: "icon icon--arrow-down", aria_hidden: "true" }
            }
        }
    }
}
