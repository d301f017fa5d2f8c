//! Skill bars and differential cards for the About section.

use crate::i18n::TranslationBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Indigo,
    Purple,
    Pink,
    Amber,
}

impl Accent {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Indigo => "accent--indigo",
            Self::Purple => "accent--purple",
            Self::Pink => "accent--pink",
            Self::Amber => "accent--amber",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Database,
}

impl SkillIcon {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Code => "icon icon--code",
            Self::Database => "icon icon--database",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRecord {
    pub name: &'static str,
    pub icon: SkillIcon,
    /// Proficiency, 0..=100.
    pub level: u8,
    pub accent: Accent,
}

impl SkillRecord {
    pub fn bar_width(&self) -> String {
        format!("width: {}%;", self.level.min(100))
    }
}

pub static SKILLS: &[SkillRecord] = &[
    SkillRecord {
        name: "Python",
        icon: SkillIcon::Code,
        level: 85,
        accent: Accent::Indigo,
    },
    SkillRecord {
        name: "SQL",
        icon: SkillIcon::Database,
        level: 80,
        accent: Accent::Purple,
    },
    SkillRecord {
        name: "Laravel",
        icon: SkillIcon::Code,
        level: 90,
        accent: Accent::Pink,
    },
    SkillRecord {
        name: "JavaScript",
        icon: SkillIcon::Code,
        level: 75,
        accent: Accent::Amber,
    },
];

/// The four "what sets me apart" cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Differential {
    ClientVision,
    AnalystThinking,
    BusinessProcess,
    Communication,
}

impl Differential {
    pub const ALL: [Differential; 4] = [
        Differential::ClientVision,
        Differential::AnalystThinking,
        Differential::BusinessProcess,
        Differential::Communication,
    ];

    pub fn title(self, strings: &TranslationBundle) -> &str {
        let d = &strings.differentials;
        match self {
            Self::ClientVision => &d.client_vision,
            Self::AnalystThinking => &d.analyst_thinking,
            Self::BusinessProcess => &d.business_process,
            Self::Communication => &d.communication,
        }
    }

    pub fn description(self, strings: &TranslationBundle) -> &str {
        let d = &strings.differentials;
        match self {
            Self::ClientVision => &d.client_vision_text,
            Self::AnalystThinking => &d.analyst_thinking_text,
            Self::BusinessProcess => &d.business_process_text,
            Self::Communication => &d.communication_text,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::ClientVision => "icon icon--users",
            Self::AnalystThinking => "icon icon--brain",
            Self::BusinessProcess => "icon icon--trending-up",
            Self::Communication => "icon icon--message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::bundle;
    use crate::preferences::Language;

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|skill| skill.level <= 100));
        assert_eq!(SKILLS[0].bar_width(), "width: 85%;");
    }

    #[test]
    fn differential_copy_is_distinct_per_card() {
        let strings = bundle(Language::En);
        let mut titles: Vec<_> = Differential::ALL
            .iter()
            .map(|d| d.title(strings))
            .collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), Differential::ALL.len());
    }
}
