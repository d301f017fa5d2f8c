//! Internationalization for `folio-ui`.
//!
//! Every display string lives in a Fluent file per locale:
//! ```text
//! i18n.toml
//! i18n/
//!   pt-BR/folio_ui.ftl   (fallback/reference)
//!   en-US/folio_ui.ftl
//! ```
//!
//! Sections never look strings up by key at render time. Instead each
//! [`Language`] resolves once into a typed [`TranslationBundle`], so both
//! languages expose the same fields by construction, and `fl!` rejects
//! unknown message IDs at compile time. A message missing from `en-US` falls
//! back to the `pt-BR` text; `tests/i18n_missing_keys.rs` guards against that.
//!
//! Usage:
//! ```ignore
//! let strings = ui::i18n::bundle(Language::En);
//! assert_eq!(strings.nav.home, "Home");
//! ```
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::preferences::Language;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Checked lookup against a specific loader: `t!(loader, "nav-home")`.
#[macro_export]
macro_rules! t {
    ($loader:expr, $key:literal) => {
        $crate::i18n::fl!($loader, $key)
    };
}

/// Fluent domain; the FTL file in every locale folder is `{DOMAIN}.ftl`.
const DOMAIN: &str = "folio_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static PT: Lazy<TranslationBundle> = Lazy::new(|| TranslationBundle::load(Language::Pt));
static EN: Lazy<TranslationBundle> = Lazy::new(|| TranslationBundle::load(Language::En));

/// The complete string bundle for `language`.
pub fn bundle(language: Language) -> &'static TranslationBundle {
    match language {
        Language::Pt => &*PT,
        Language::En => &*EN,
    }
}

/// Embedded locale folder names, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

fn language_id(language: Language) -> LanguageIdentifier {
    language
        .locale_tag()
        .parse()
        .expect("locale tags are valid language identifiers")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBundle {
    pub language: Language,
    pub meta: MetaStrings,
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub differentials: DifferentialStrings,
    pub projects: ProjectsStrings,
    pub timeline: TimelineStrings,
    pub contact: ContactStrings,
    pub not_found: NotFoundStrings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaStrings {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStrings {
    pub home: String,
    pub about: String,
    pub projects: String,
    pub timeline: String,
    pub contact: String,
    pub toggle_theme: String,
    pub toggle_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroStrings {
    pub greeting: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub cta_projects: String,
    pub cta_contact: String,
    pub scroll: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutStrings {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub skills: String,
    pub differential: String,
    pub differential_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferentialStrings {
    pub client_vision: String,
    pub client_vision_text: String,
    pub analyst_thinking: String,
    pub analyst_thinking_text: String,
    pub business_process: String,
    pub business_process_text: String,
    pub communication: String,
    pub communication_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsStrings {
    pub title: String,
    pub subtitle: String,
    pub filter_all: String,
    pub featured: String,
    pub view_code: String,
    pub view_live: String,
    pub more_on_github: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStrings {
    pub title: String,
    pub subtitle: String,
    pub current: String,
    pub legend_work: String,
    pub legend_education: String,
    pub legend_achievement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactStrings {
    pub title: String,
    pub subtitle: String,
    pub info_title: String,
    pub resume_title: String,
    pub resume_text: String,
    pub resume_pt: String,
    pub resume_en: String,
    pub form_title: String,
    pub name_label: String,
    pub name_placeholder: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub message_label: String,
    pub message_placeholder: String,
    pub send: String,
    pub sending: String,
    pub success: String,
    /// Shown when a required field is empty.
    pub error: String,
    /// Shown when the send operation fails.
    pub send_failed: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundStrings {
    pub title: String,
    pub body: String,
    pub back: String,
}

impl TranslationBundle {
    fn load(language: Language) -> Self {
        let loader = FluentLanguageLoader::new(DOMAIN, language_id(Language::Pt));
        if let Err(err) = i18n_embed::select(&loader, &Localizations, &[language_id(language)]) {
            warn!(%err, %language, "failed selecting localization; continuing with fallback");
        }
        Self::from_loader(language, &loader)
    }

    fn from_loader(language: Language, loader: &FluentLanguageLoader) -> Self {
        Self {
            language,
            meta: MetaStrings {
                title: crate::t!(loader, "site-title"),
                description: crate::t!(loader, "site-description"),
            },
            nav: NavStrings {
                home: crate::t!(loader, "nav-home"),
                about: crate::t!(loader, "nav-about"),
                projects: crate::t!(loader, "nav-projects"),
                timeline: crate::t!(loader, "nav-timeline"),
                contact: crate::t!(loader, "nav-contact"),
                toggle_theme: crate::t!(loader, "nav-toggle-theme"),
                toggle_language: crate::t!(loader, "nav-toggle-language"),
            },
            hero: HeroStrings {
                greeting: crate::t!(loader, "hero-greeting"),
                name: crate::t!(loader, "hero-name"),
                role: crate::t!(loader, "hero-role"),
                description: crate::t!(loader, "hero-description"),
                cta_projects: crate::t!(loader, "hero-cta-projects"),
                cta_contact: crate::t!(loader, "hero-cta-contact"),
                scroll: crate::t!(loader, "hero-scroll"),
            },
            about: AboutStrings {
                title: crate::t!(loader, "about-title"),
                subtitle: crate::t!(loader, "about-subtitle"),
                description: crate::t!(loader, "about-description"),
                skills: crate::t!(loader, "about-skills"),
                differential: crate::t!(loader, "about-differential"),
                differential_text: crate::t!(loader, "about-differential-text"),
            },
            differentials: DifferentialStrings {
                client_vision: crate::t!(loader, "diff-client-vision"),
                client_vision_text: crate::t!(loader, "diff-client-vision-text"),
                analyst_thinking: crate::t!(loader, "diff-analyst-thinking"),
                analyst_thinking_text: crate::t!(loader, "diff-analyst-thinking-text"),
                business_process: crate::t!(loader, "diff-business-process"),
                business_process_text: crate::t!(loader, "diff-business-process-text"),
                communication: crate::t!(loader, "diff-communication"),
                communication_text: crate::t!(loader, "diff-communication-text"),
            },
            projects: ProjectsStrings {
                title: crate::t!(loader, "projects-title"),
                subtitle: crate::t!(loader, "projects-subtitle"),
                filter_all: crate::t!(loader, "projects-filter-all"),
                featured: crate::t!(loader, "projects-featured"),
                view_code: crate::t!(loader, "projects-view-code"),
                view_live: crate::t!(loader, "projects-view-live"),
                more_on_github: crate::t!(loader, "projects-more-github"),
            },
            timeline: TimelineStrings {
                title: crate::t!(loader, "timeline-title"),
                subtitle: crate::t!(loader, "timeline-subtitle"),
                current: crate::t!(loader, "timeline-current"),
                legend_work: crate::t!(loader, "timeline-legend-work"),
                legend_education: crate::t!(loader, "timeline-legend-education"),
                legend_achievement: crate::t!(loader, "timeline-legend-achievement"),
            },
            contact: ContactStrings {
                title: crate::t!(loader, "contact-title"),
                subtitle: crate::t!(loader, "contact-subtitle"),
                info_title: crate::t!(loader, "contact-info-title"),
                resume_title: crate::t!(loader, "contact-resume-title"),
                resume_text: crate::t!(loader, "contact-resume-text"),
                resume_pt: crate::t!(loader, "contact-resume-pt"),
                resume_en: crate::t!(loader, "contact-resume-en"),
                form_title: crate::t!(loader, "contact-form-title"),
                name_label: crate::t!(loader, "contact-name-label"),
                name_placeholder: crate::t!(loader, "contact-name-placeholder"),
                email_label: crate::t!(loader, "contact-email-label"),
                email_placeholder: crate::t!(loader, "contact-email-placeholder"),
                message_label: crate::t!(loader, "contact-message-label"),
                message_placeholder: crate::t!(loader, "contact-message-placeholder"),
                send: crate::t!(loader, "contact-send"),
                sending: crate::t!(loader, "contact-sending"),
                success: crate::t!(loader, "contact-success"),
                error: crate::t!(loader, "contact-error"),
                send_failed: crate::t!(loader, "contact-send-failed"),
            },
            not_found: NotFoundStrings {
                title: crate::t!(loader, "not-found-title"),
                body: crate::t!(loader, "not-found-body"),
                back: crate::t!(loader, "not-found-back"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_an_embedded_locale() {
        let available = available_languages();
        for language in Language::ALL {
            assert!(
                available.iter().any(|tag| tag == language.locale_tag()),
                "missing locale folder for {language}"
            );
        }
    }

    #[test]
    fn domain_file_is_named_after_the_crate() {
        assert_eq!(DOMAIN, env!("CARGO_PKG_NAME").replace('-', "_"));
        for language in Language::ALL {
            let path = format!("{}/{DOMAIN}.ftl", language.locale_tag());
            assert!(Localizations::get(&path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn bundles_resolve_their_own_language() {
        assert_eq!(bundle(Language::Pt).nav.home, "Início");
        assert_eq!(bundle(Language::En).nav.home, "Home");
        assert_eq!(bundle(Language::En).language, Language::En);
    }

    #[test]
    fn english_bundle_does_not_leak_fallback_copy() {
        let pt = bundle(Language::Pt);
        let en = bundle(Language::En);
        assert_ne!(pt.contact.success, en.contact.success);
        assert_ne!(pt.projects.filter_all, en.projects.filter_all);
        assert_ne!(pt.timeline.current, en.timeline.current);
    }

    #[test]
    fn bundle_lookup_is_memoized() {
        assert!(std::ptr::eq(bundle(Language::Pt), bundle(Language::Pt)));
    }
}
