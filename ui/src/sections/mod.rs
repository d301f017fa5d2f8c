//! Page sections, in the order the home view stacks them.

use crate::i18n::NavStrings;

mod about;
mod contact;
mod hero;
mod projects;
mod timeline;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::Projects;
pub use timeline::Timeline;

/// Anchor targets shared by the navbar and the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Timeline,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Timeline,
        SectionId::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Timeline => "timeline",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Projects => "#projects",
            Self::Timeline => "#timeline",
            Self::Contact => "#contact",
        }
    }

    pub fn nav_label(self, strings: &NavStrings) -> &str {
        match self {
            Self::Home => &strings.home,
            Self::About => &strings.about,
            Self::Projects => &strings.projects,
            Self::Timeline => &strings.timeline,
            Self::Contact => &strings.contact,
        }
    }
}
