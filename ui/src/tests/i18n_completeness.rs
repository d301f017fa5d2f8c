//! Source-level guard: every key the bundle loads exists in each locale, and
//! every key a locale defines is loaded by the bundle.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "folio_ui.ftl";
const I18N_DIR: &str = "i18n";
const FALLBACK_LOCALE: &str = "pt-BR";

/// Message IDs defined in a Fluent file. Terms (`-name`) and attributes are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal keys passed to `t!(<loader>, "...")` anywhere under `src_root`.
fn extract_translation_keys_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("t!(") {
            rest = &rest[pos + 3..];
            let Some(call) = rest.split(')').next() else {
                break;
            };
            let Some((_, literal)) = call.split_once(", \"") else {
                continue;
            };
            if let Some(key) = literal.split('"').next() {
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn parser_skips_comments_terms_and_continuations() {
    let keys = parse_ftl_keys("# note\n-brand = Folio\nnav-home = Home\n    .title = x\n  wrapped = y\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["nav-home"]);
}

#[test]
fn bundle_keys_match_every_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join(FALLBACK_LOCALE).join(FTL_FILENAME);
    let fallback = fs::read_to_string(&fallback_file)
        .unwrap_or_else(|err| panic!("cannot read {fallback_file:?}: {err}"));
    assert!(!parse_ftl_keys(&fallback).is_empty(), "no keys in {fallback_file:?}");

    let referenced = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(!referenced.is_empty(), "no t!(loader, \"...\") calls found");

    let mut report: BTreeMap<String, (Vec<String>, Vec<String>)> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("locale {locale} missing {path:?}: {err}"));
        let defined = parse_ftl_keys(&content);

        let missing: Vec<String> = referenced.difference(&defined).cloned().collect();
        let unused: Vec<String> = defined.difference(&referenced).cloned().collect();
        if !missing.is_empty() || !unused.is_empty() {
            report.insert(locale, (missing, unused));
        }
    }

    if !report.is_empty() {
        let mut text = String::from("Locale files out of sync with TranslationBundle:\n");
        for (locale, (missing, unused)) in &report {
            text.push_str(&format!("  {locale}\n"));
            for key in missing {
                text.push_str(&format!("    missing {key}\n"));
            }
            for key in unused {
                text.push_str(&format!("    unused  {key}\n"));
            }
        }
        panic!("{text}");
    }
}
