use dioxus::prelude::*;

use super::SectionId;
use crate::components::use_reveal;
use crate::content::timeline::{Side, TimelineEntry, TimelineKind, TIMELINE};
use crate::i18n::TranslationBundle;
use crate::preferences::{use_language, Language};

pub fn period_label(entry: &TimelineEntry, language: Language) -> String {
    format!("{} - {}", entry.start.get(language), entry.end.get(language))
}

fn timeline_item(
    index: usize,
    entry: &TimelineEntry,
    language: Language,
    strings: &TranslationBundle,
) -> Element {
    let side = Side::for_index(index);
    let period = period_label(entry, language);

    rsx! {
        li { key: "{entry.id}", class: "timeline-item {side.css_class()}", "data-reveal": "true",
            span { class: "timeline-item__dot {entry.kind.accent_class()}",
                span { class: "{entry.kind.icon_class()}", aria_hidden: "true" }
            }
            article { class: "timeline-item__card glass",
                div { class: "timeline-item__meta",
                    span { class: "timeline-item__period", "{period}" }
                    if entry.current {
                        span { class: "timeline-item__current", "{strings.timeline.current}" }
                    }
                }
                h3 { class: "timeline-item__title", "{entry.title.get(language)}" }
                p { class: "timeline-item__organization", "{entry.organization}" }
                p { class: "timeline-item__location",
                    span { class: "icon icon--map-pin", aria_hidden: "true" }
                    "{entry.location.get(language)}"
                }
                p { class: "timeline-item__description", "{entry.description.get(language)}" }
                ul { class: "timeline-item__skills",
                    for skill in entry.skills.get(language).iter() {
                        li { key: "{skill}", class: "chip", "{skill}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Timeline() -> Element {
    let language = use_language();
    let strings = language.bundle();
    let current_language = language.language();
    use_reveal(SectionId::Timeline.id());

    rsx! {
        section { id: "{SectionId::Timeline.id()}", class: "section timeline",
            header { class: "section__header", "data-reveal": "true",
                h2 { class: "section__title gradient-text", "{strings.timeline.title}" }
                p { class: "section__subtitle", "{strings.timeline.subtitle}" }
            }

            ol { class: "timeline__list",
                for (index, entry) in TIMELINE.iter().enumerate() {
                    {timeline_item(index, entry, current_language, strings)}
                }
            }

            ul { class: "timeline__legend", "data-reveal": "true",
                for kind in TimelineKind::ALL {
                    li { key: "{kind.accent_class()}", class: "timeline__legend-item",
                        span { class: "timeline__legend-swatch {kind.accent_class()}", aria_hidden: "true" }
                        "{kind.legend_label(strings)}"
                    }
                }
            }
        }
    }
}
