use dioxus::prelude::*;

use super::SectionId;
use crate::components::use_reveal;
use crate::content::skills::{Differential, SkillRecord, SKILLS};
use crate::preferences::use_language;

fn skill_bar(skill: &SkillRecord) -> Element {
    rsx! {
        div { key: "{skill.name}", class: "skill", "data-reveal": "true",
            div { class: "skill__header",
                span { class: "skill__name",
                    span { class: "{skill.icon.css_class()}", aria_hidden: "true" }
                    "{skill.name}"
                }
                span { class: "skill__level", "{skill.level}%" }
            }
            div { class: "skill__track",
                div { class: "skill__bar {skill.accent.css_class()}", style: "{skill.bar_width()}" }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let strings = use_language().bundle();
    let about = &strings.about;
    use_reveal(SectionId::About.id());

    rsx! {
        section { id: "{SectionId::About.id()}", class: "section about",
            header { class: "section__header", "data-reveal": "true",
                h2 { class: "section__title gradient-text", "{about.title}" }
                p { class: "section__subtitle", "{about.subtitle}" }
            }

            div { class: "about__grid",
                div { class: "about__intro glass", "data-reveal": "true",
                    p { class: "about__description", "{about.description}" }
                }
                div { class: "about__skills glass", "data-reveal": "true",
                    h3 { class: "about__heading", "{about.skills}" }
                    for skill in SKILLS.iter() {
                        {skill_bar(skill)}
                    }
                }
            }

            div { class: "about__differentials",
                h3 { class: "about__heading", "data-reveal": "true", "{about.differential}" }
                div { class: "differentials",
                    for item in Differential::ALL {
                        article { key: "{item.icon_class()}", class: "differential glass", "data-reveal": "true",
                            span { class: "differential__icon {item.icon_class()}", aria_hidden: "true" }
                            h4 { class: "differential__title", "{item.title(strings)}" }
                            p { class: "differential__text", "{item.description(strings)}" }
                        }
                    }
                }
                blockquote { class: "about__quote glass", "data-reveal": "true", "{about.differential_text}" }
            }
        }
    }
}
