//! Career and education timeline.

use super::{LocalizedTags, LocalizedText};
use crate::i18n::TranslationBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineKind {
    Work,
    Education,
    Achievement,
}

impl TimelineKind {
    /// Legend order.
    pub const ALL: [TimelineKind; 3] = [
        TimelineKind::Work,
        TimelineKind::Education,
        TimelineKind::Achievement,
    ];

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Work => "icon icon--briefcase",
            Self::Education => "icon icon--graduation-cap",
            Self::Achievement => "icon icon--award",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Work => "timeline-accent--work",
            Self::Education => "timeline-accent--education",
            Self::Achievement => "timeline-accent--achievement",
        }
    }

    pub fn legend_label(self, strings: &TranslationBundle) -> &str {
        match self {
            Self::Work => &strings.timeline.legend_work,
            Self::Education => &strings.timeline.legend_education,
            Self::Achievement => &strings.timeline.legend_achievement,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: u32,
    pub kind: TimelineKind,
    pub title: LocalizedText,
    pub organization: &'static str,
    pub location: LocalizedText,
    pub start: LocalizedText,
    pub end: LocalizedText,
    pub description: LocalizedText,
    pub skills: LocalizedTags,
    pub current: bool,
}

/// Entries alternate sides of the line, starting on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Left => "timeline-item--left",
            Self::Right => "timeline-item--right",
        }
    }
}

const BRAZIL: LocalizedText = LocalizedText::new("Brasil", "Brazil");

pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        id: 1,
        kind: TimelineKind::Work,
        title: LocalizedText::new(
            "Analista de Suporte e Implantação",
            "Support and Implementation Analyst",
        ),
        organization: "Minerion",
        location: BRAZIL,
        start: LocalizedText::new("Dez/2023", "Dec/2023"),
        end: LocalizedText::new("Atual", "Present"),
        description: LocalizedText::new(
            "Responsável pelo suporte técnico ao cliente e implantação de sistemas. Atuo diretamente com usuários finais, compreendendo suas necessidades e traduzindo-as em soluções técnicas, além de apoiar análises com SQL.",
            "Responsible for technical customer support and system implementation. I work directly with end users, understanding their needs and translating them into technical solutions, in addition to supporting analyses with SQL.",
        ),
        skills: LocalizedTags::new(
            &["Suporte Técnico", "Implantação", "Análise de Requisitos", "SQL", "Atendimento ao Cliente"],
            &["Tech Support", "Implementation", "Requirements Analysis", "SQL", "Customer Service"],
        ),
        current: true,
    },
    TimelineEntry {
        id: 2,
        kind: TimelineKind::Education,
        title: LocalizedText::new(
            "Bacharelado em Sistemas de Informação",
            "Bachelor of Information Systems",
        ),
        organization: "Faculdade Impacta",
        location: BRAZIL,
        start: LocalizedText::same("2025"),
        end: LocalizedText::new("Em andamento", "In Progress"),
        description: LocalizedText::new(
            "Formação em desenvolvimento de software, análise de sistemas, banco de dados, engenharia de software e gestão de TI. Foco em análise de dados e desenvolvimento web.",
            "Degree in software development, systems analysis, databases, software engineering, and IT management. Focus on data analysis and web development.",
        ),
        skills: LocalizedTags::new(
            &["Programação", "Banco de Dados", "Engenharia de Software", "Análise de Sistemas"],
            &["Programming", "Databases", "Software Engineering", "Systems Analysis"],
        ),
        current: true,
    },
    TimelineEntry {
        id: 3,
        kind: TimelineKind::Achievement,
        title: LocalizedText::new("Defesa de TCC - StarVault", "Capstone Project - StarVault"),
        organization: "IFMG - Formiga",
        location: BRAZIL,
        start: LocalizedText::same("2022"),
        end: LocalizedText::same("2022"),
        description: LocalizedText::new(
            "Software voltado à educação financeira, com análises de simulações de empréstimos com taxas reais e gráficos interativos. MVC desenvolvido em Laravel e funcionalidades em JavaScript com requisições Ajax.",
            "Financial education software featuring loan simulation analysis with real rates and interactive charts. MVC developed in Laravel and functionality in JavaScript using Ajax requests.",
        ),
        skills: LocalizedTags::same(&["Laravel", "JavaScript", "Bootstrap", "MySQL"]),
        current: false,
    },
    TimelineEntry {
        id: 4,
        kind: TimelineKind::Education,
        title: LocalizedText::new("Técnico em Informática", "IT Technician"),
        organization: "IFMG - Formiga",
        location: BRAZIL,
        start: LocalizedText::same("2021"),
        end: LocalizedText::same("2023"),
        description: LocalizedText::new(
            "Formação técnica completa em informática, incluindo programação, redes, banco de dados, sistemas operacionais e suporte técnico.",
            "Complete technical training in IT, including programming, networking, databases, operating systems, and technical support.",
        ),
        skills: LocalizedTags::new(
            &["Laravel", "JavaScript", "Java", "Redes", "Bootstrap", "MySQL"],
            &["Laravel", "JavaScript", "Java", "Networking", "Bootstrap", "MySQL"],
        ),
        current: false,
    },
];
