use dioxus::prelude::*;
use tracing::debug;

use super::SectionId;
use crate::components::use_reveal;
use crate::contact::{ContactField, ContactForm, ContactService, StatusKind, SubmitStart};
use crate::content::profile::SITE;
use crate::preferences::use_language;

fn status_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::None => "contact-status",
        StatusKind::Success => "contact-status contact-status--success",
        StatusKind::Error => "contact-status contact-status--error",
    }
}

/// Contact details, résumé downloads and the message form.
///
/// The send runs on a spawned task; while it is in flight the submit button is
/// disabled and further submits are refused by [`ContactForm::begin_submit`].
#[component]
pub fn Contact() -> Element {
    let language = use_language();
    let strings = language.bundle();
    let copy = &strings.contact;
    let service = use_hook(|| try_consume_context::<ContactService>().unwrap_or_default());
    let mut form = use_signal(ContactForm::new);
    use_reveal(SectionId::Contact.id());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let copy = &language.bundle().contact;
        let start = form.with_mut(|state| state.begin_submit(copy));
        match start {
            SubmitStart::Started(message) => {
                let service = service.clone();
                spawn(async move {
                    let mut form = form;
                    let outcome = service.send(message).await;
                    form.with_mut(|state| state.finish(outcome, &language.bundle().contact));
                });
            }
            SubmitStart::AlreadySubmitting => debug!("send already in flight"),
            SubmitStart::Invalid => {}
        }
    };

    let snapshot = form.read().clone();
    let submitting = snapshot.is_submitting();
    let button_label = if submitting { &copy.sending } else { &copy.send };

    rsx! {
        section { id: "{SectionId::Contact.id()}", class: "section contact",
            header { class: "section__header", "data-reveal": "true",
                h2 { class: "section__title gradient-text", "{copy.title}" }
                p { class: "section__subtitle", "{copy.subtitle}" }
            }

            div { class: "contact__grid",
                aside { class: "contact__info",
                    div { class: "contact-card glass", "data-reveal": "true",
                        h3 { class: "contact-card__title", "{copy.info_title}" }
                        ul { class: "contact-card__list",
                            li {
                                span { class: "icon icon--mail", aria_hidden: "true" }
                                a { href: "{SITE.mailto()}", "{SITE.email}" }
                            }
                            li {
                                span { class: "icon icon--linkedin", aria_hidden: "true" }
                                a { href: "{SITE.linkedin_url}", target: "_blank", rel: "noopener noreferrer", "{SITE.linkedin_label}" }
                            }
                            li {
                                span { class: "icon icon--github", aria_hidden: "true" }
                                a { href: "{SITE.github_url}", target: "_blank", rel: "noopener noreferrer", "{SITE.github_label}" }
                            }
                        }
                    }
                    div { class: "contact-card glass", "data-reveal": "true",
                        h3 { class: "contact-card__title", "{copy.resume_title}" }
                        p { class: "contact-card__text", "{copy.resume_text}" }
                        div { class: "contact-card__actions",
                            a { class: "button button--ghost", href: "{SITE.resume_pt_href}", download: "true",
                                span { class: "icon icon--download", aria_hidden: "true" }
                                "{copy.resume_pt}"
                            }
                            a { class: "button button--ghost", href: "{SITE.resume_en_href}", download: "true",
                                span { class: "icon icon--download", aria_hidden: "true" }
                                "{copy.resume_en}"
                            }
                        }
                    }
                }

                form { class: "contact-form glass", "data-reveal": "true", novalidate: true, onsubmit,
                    h3 { class: "contact-form__title", "{copy.form_title}" }

                    div { class: "field",
                        label { class: "field__label", r#for: "contact-name", "{copy.name_label}" }
                        input {
                            id: "contact-name",
                            class: "field__input",
                            r#type: "text",
                            name: "name",
                            value: "{snapshot.name}",
                            placeholder: "{copy.name_placeholder}",
                            oninput: move |evt: FormEvent| form.with_mut(|state| state.update(ContactField::Name, evt.value())),
                        }
                    }
                    div { class: "field",
                        label { class: "field__label", r#for: "contact-email", "{copy.email_label}" }
                        input {
                            id: "contact-email",
                            class: "field__input",
                            r#type: "email",
                            name: "email",
                            value: "{snapshot.email}",
                            placeholder: "{copy.email_placeholder}",
                            oninput: move |evt: FormEvent| form.with_mut(|state| state.update(ContactField::Email, evt.value())),
                        }
                    }
                    div { class: "field",
                        label { class: "field__label", r#for: "contact-message", "{copy.message_label}" }
                        textarea {
                            id: "contact-message",
                            class: "field__input field__input--multiline",
                            name: "message",
                            rows: "5",
                            value: "{snapshot.message}",
                            placeholder: "{copy.message_placeholder}",
                            oninput: move |evt: FormEvent| form.with_mut(|state| state.update(ContactField::Message, evt.value())),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "button button--primary contact-form__submit",
                        disabled: submitting,
                        aria_busy: "{submitting}",
                        if submitting {
                            span { class: "spinner", aria_hidden: "true" }
                        } else {
                            span { class: "icon icon--send", aria_hidden: "true" }
                        }
                        "{button_label}"
                    }

                    if let Some(text) = snapshot.status().text() {
                        p { class: "{status_class(snapshot.status().kind())}", role: "status", "{text}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_distinguish_outcomes() {
        assert_eq!(status_class(StatusKind::None), "contact-status");
        assert!(status_class(StatusKind::Success).ends_with("--success"));
        assert!(status_class(StatusKind::Error).ends_with("--error"));
    }
}
