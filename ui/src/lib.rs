//! Shared UI crate for the folio site. Preferences, content, sections and
//! views live here; the `web` and `desktop` crates only launch them.

pub mod components;
pub mod contact;
pub mod content;
pub mod core;
pub mod i18n;
pub mod preferences;
pub mod sections;
pub mod views;

#[cfg(test)]
mod tests;
