use dioxus::prelude::*;

use super::SectionId;
use crate::components::use_reveal;
use crate::content::profile::SITE;
use crate::content::projects::{filter_projects, CategoryFilter, ProjectRecord, PROJECTS};
use crate::i18n::TranslationBundle;
use crate::preferences::{use_language, Language};

fn project_card(project: &ProjectRecord, language: Language, strings: &TranslationBundle) -> Element {
    let copy = &strings.projects;
    let (chips, hidden) = project.tech_preview();
    let card_class = if project.featured {
        "project-card project-card--featured glass"
    } else {
        "project-card glass"
    };

    rsx! {
        article { key: "{project.slug}", class: "{card_class}",
            div { class: "project-card__media",
                img { src: "{project.image}", alt: "{project.title.get(language)}", loading: "lazy" }
                if project.featured {
                    span { class: "project-card__badge", "{copy.featured}" }
                }
            }
            div { class: "project-card__body",
                span { class: "project-card__category", "{project.category.label()}" }
                h3 { class: "project-card__title", "{project.title.get(language)}" }
                p { class: "project-card__description", "{project.description.get(language)}" }
                p { class: "project-card__details", "{project.long_description.get(language)}" }
                ul { class: "project-card__tech",
                    for tech in chips.iter() {
                        li { key: "{tech}", class: "chip", "{tech}" }
                    }
                    if hidden > 0 {
                        li { class: "chip chip--more", "+{hidden}" }
                    }
                }
                div { class: "project-card__links",
                    if let Some(url) = project.github {
                        a { class: "button button--ghost", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                            span { class: "icon icon--github", aria_hidden: "true" }
                            "{copy.view_code}"
                        }
                    }
                    if let Some(url) = project.live_url {
                        a { class: "button button--primary", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                            span { class: "icon icon--external", aria_hidden: "true" }
                            "{copy.view_live}"
                        }
                    }
                }
            }
        }
    }
}

/// Filterable project grid. The filter is section-local and starts at `All`.
#[component]
pub fn Projects() -> Element {
    let language = use_language();
    let strings = language.bundle();
    let current_language = language.language();
    let mut selected = use_signal(CategoryFilter::default);
    use_reveal(SectionId::Projects.id());

    let active = selected();
    let visible = filter_projects(PROJECTS, active);

    rsx! {
        section { id: "{SectionId::Projects.id()}", class: "section projects",
            header { class: "section__header", "data-reveal": "true",
                h2 { class: "section__title gradient-text", "{strings.projects.title}" }
                p { class: "section__subtitle", "{strings.projects.subtitle}" }
            }

            div { class: "projects__filters", role: "group", "data-reveal": "true",
                for filter in CategoryFilter::ALL {
                    button {
                        key: "{filter.slug()}",
                        r#type: "button",
                        class: if filter == active { "filter-button filter-button--active" } else { "filter-button" },
                        aria_pressed: "{filter == active}",
                        onclick: move |_| selected.set(filter),
                        "{filter.label(strings)}"
                    }
                }
            }

            // Keyed by filter so the entry animation replays on every change.
            div { key: "{active.slug()}", class: "projects__grid projects__grid--{active.slug()}",
                for project in visible {
                    {project_card(project, current_language, strings)}
                }
            }

            div { class: "projects__more", "data-reveal": "true",
                a { class: "button button--ghost", href: "{SITE.github_url}", target: "_blank", rel: "noopener noreferrer",
                    span { class: "icon icon--github", aria_hidden: "true" }
                    "{strings.projects.more_on_github}"
                }
            }
        }
    }
}
