//! Site owner profile and tunables.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteProfile {
    pub owner: &'static str,
    pub brand_mark: &'static str,
    pub github_url: &'static str,
    pub github_label: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_label: &'static str,
    pub email: &'static str,
    pub resume_pt_href: &'static str,
    pub resume_en_href: &'static str,
    /// Navbar stays visible until the page has scrolled this far (px).
    pub nav_hide_threshold_px: u32,
    /// Delay of the simulated contact send.
    pub contact_send_delay_ms: u64,
}

impl SiteProfile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const SITE: SiteProfile = SiteProfile {
    owner: "Luis Miguel",
    brand_mark: "<Luis/>",
    github_url: "https://github.com/luis-m-sousa/",
    github_label: "github.com/luis-m-sousa",
    linkedin_url: "https://www.linkedin.com/in/luis-miguel-0387892a4/",
    linkedin_label: "linkedin.com/in/luis-miguel-0387892a4",
    email: "luismigueldesousa2707@gmail.com",
    resume_pt_href: "/cv/curriculo-pt.pdf",
    resume_en_href: "/cv/resume-en.pdf",
    nav_hide_threshold_px: 50,
    contact_send_delay_ms: 1000,
};
