pub mod app_navbar;
pub mod observers;
pub mod toggles;

pub use app_navbar::AppNavbar;
pub use observers::{use_nav_visibility, use_reveal};
pub use toggles::{LanguageToggle, ThemeToggle};
