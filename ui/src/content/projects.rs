//! Project records and the category filter.

use super::LocalizedText;
use crate::i18n::TranslationBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    Data,
    Backend,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Data => "Data",
            Self::Backend => "Backend",
        }
    }
}

/// Selection in the filter bar. `All` is the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Button order in the filter bar.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(ProjectCategory::Web),
        CategoryFilter::Only(ProjectCategory::Data),
        CategoryFilter::Only(ProjectCategory::Backend),
    ];

    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    pub fn label(self, strings: &TranslationBundle) -> &str {
        match self {
            Self::All => &strings.projects.filter_all,
            Self::Only(category) => category.label(),
        }
    }

    /// Stable key for list diffing and CSS hooks.
    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(ProjectCategory::Web) => "web",
            Self::Only(ProjectCategory::Data) => "data",
            Self::Only(ProjectCategory::Backend) => "backend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub slug: &'static str,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub long_description: LocalizedText,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub github: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub featured: bool,
}

impl ProjectRecord {
    /// Chips shown on the card.
    pub const TECH_PREVIEW: usize = 3;

    /// The first few technologies and how many are left unshown.
    pub fn tech_preview(&self) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(Self::TECH_PREVIEW);
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }
}

/// Projects matching `filter`, in their original order.
pub fn filter_projects(projects: &[ProjectRecord], filter: CategoryFilter) -> Vec<&ProjectRecord> {
    projects
        .iter()
        .filter(|project| filter.matches(project.category))
        .collect()
}

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        slug: "starvault",
        title: LocalizedText::same("StarVault"),
        description: LocalizedText::new(
            "Sistema de Simulações de Crédito para educação financeira.",
            "Credit simulation system for financial education.",
        ),
        long_description: LocalizedText::new(
            "Aplicação web voltada para educação financeira, auxiliando usuários a entenderem o impacto dos empréstimos bancários. Permite simular cenários de crédito com taxas reais e gráficos interativos.",
            "Web application focused on financial education, helping users understand the impact of bank loans. It simulates credit scenarios with real rates and interactive charts.",
        ),
        image: "/projects/starvault.png",
        technologies: &["Laravel", "JavaScript", "Bootstrap", "MySQL", "HTML", "CSS"],
        category: ProjectCategory::Web,
        github: Some("https://github.com/luis-m-sousa/starvault"),
        live_url: None,
        featured: true,
    },
    ProjectRecord {
        id: 2,
        slug: "analise-vendas",
        title: LocalizedText::new("Análise de Vendas", "Sales Analysis"),
        description: LocalizedText::new(
            "Dashboard de análise de vendas com Python e SQL.",
            "Sales analysis dashboard with Python and SQL.",
        ),
        long_description: LocalizedText::new(
            "Projeto de análise de dados utilizando Python, Pandas e SQL para explorar métricas de vendas, ticket médio, sazonalidade e segmentação de clientes, com visualizações claras.",
            "Data analysis project using Python, Pandas and SQL to explore sales metrics, average ticket, seasonality and customer segmentation, with clear visualizations.",
        ),
        image: "/projects/data-sales.png",
        technologies: &["Python", "Pandas", "NumPy", "SQL", "Matplotlib"],
        category: ProjectCategory::Data,
        github: Some("https://github.com/luis-m-sousa/sales-analysis"),
        live_url: None,
        featured: false,
    },
    ProjectRecord {
        id: 3,
        slug: "web-scraping-financeiro",
        title: LocalizedText::new("Web Scraping Financeiro", "Financial Web Scraping"),
        description: LocalizedText::new(
            "Coleta automatizada de dados de taxas e indicadores.",
            "Automated collection of rates and indicators.",
        ),
        long_description: LocalizedText::new(
            "Sistema de web scraping para coletar taxas de juros, índices financeiros e cotações de múltiplas fontes, armazenando os dados em banco para posterior análise.",
            "Web scraping system that collects interest rates, financial indices and quotes from multiple sources, storing the data for later analysis.",
        ),
        image: "/projects/webscraping-finance.png",
        technologies: &["Python", "BeautifulSoup", "Selenium", "PostgreSQL"],
        category: ProjectCategory::Data,
        github: Some("https://github.com/luis-m-sousa/webscraping-financeiro"),
        live_url: None,
        featured: false,
    },
    ProjectRecord {
        id: 4,
        slug: "api-clientes",
        title: LocalizedText::new("API de Clientes", "Clients API"),
        description: LocalizedText::new(
            "API RESTful para gestão de clientes e contratos.",
            "RESTful API for managing clients and contracts.",
        ),
        long_description: LocalizedText::new(
            "API REST com autenticação JWT, documentação Swagger e testes automatizados, focada em operações de CRUD de clientes, contratos e integrações com sistemas internos.",
            "REST API with JWT authentication, Swagger docs and automated tests, focused on CRUD operations for clients, contracts and integrations with internal systems.",
        ),
        image: "/projects/client-api.png",
        technologies: &["Node.js", "Express", "JWT", "MongoDB", "Swagger"],
        category: ProjectCategory::Backend,
        github: Some("https://github.com/luis-m-sousa/client-api"),
        live_url: None,
        featured: false,
    },
    ProjectRecord {
        id: 5,
        slug: "portfolio-data-driven",
        title: LocalizedText::same("Portfolio Data-Driven"),
        description: LocalizedText::new(
            "Protótipo de portfólio com foco em análise de dados.",
            "Portfolio prototype focused on data analysis.",
        ),
        long_description: LocalizedText::new(
            "Protótipo de portfólio voltado para área de dados, com cards de projetos, mini dashboards e seções que destacam habilidades em Python, SQL e storytelling com dados.",
            "Portfolio prototype for the data field, with project cards, mini dashboards and sections highlighting Python, SQL and data storytelling skills.",
        ),
        image: "/projects/portfolio-data.png",
        technologies: &["Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
        category: ProjectCategory::Web,
        github: Some("https://github.com/luis-m-sousa/portfolio-data"),
        live_url: None,
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::bundle;
    use crate::preferences::Language;

    fn record(id: u32, category: ProjectCategory) -> ProjectRecord {
        ProjectRecord {
            id,
            slug: "fixture",
            title: LocalizedText::same("Fixture"),
            description: LocalizedText::same(""),
            long_description: LocalizedText::same(""),
            image: "",
            technologies: &[],
            category,
            github: None,
            live_url: None,
            featured: false,
        }
    }

    fn ids(projects: &[&ProjectRecord]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn data_filter_keeps_relative_order() {
        let projects = [
            record(1, ProjectCategory::Web),
            record(2, ProjectCategory::Data),
            record(3, ProjectCategory::Backend),
            record(4, ProjectCategory::Data),
            record(5, ProjectCategory::Web),
        ];
        let data = filter_projects(&projects, CategoryFilter::Only(ProjectCategory::Data));
        assert_eq!(ids(&data), vec![2, 4]);
    }

    #[test]
    fn wildcard_returns_everything_unchanged() {
        let all = filter_projects(PROJECTS, CategoryFilter::All);
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn every_category_button_has_a_result() {
        for filter in CategoryFilter::ALL {
            assert!(!filter_projects(PROJECTS, filter).is_empty(), "{filter:?}");
        }
    }

    #[test]
    fn tech_preview_counts_overflow() {
        let (shown, hidden) = PROJECTS[0].tech_preview();
        assert_eq!(shown, &["Laravel", "JavaScript", "Bootstrap"]);
        assert_eq!(hidden, 3);

        let sparse = record(9, ProjectCategory::Web);
        assert_eq!(sparse.tech_preview(), (&[][..], 0));
    }

    #[test]
    fn wildcard_label_is_localized() {
        assert_eq!(CategoryFilter::All.label(bundle(Language::Pt)), "Todos");
        assert_eq!(CategoryFilter::All.label(bundle(Language::En)), "All");
        assert_eq!(
            CategoryFilter::Only(ProjectCategory::Backend).label(bundle(Language::En)),
            "Backend"
        );
    }
}
