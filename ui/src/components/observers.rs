//! Host-side observers owned by a mounted section.
//!
//! Each hook keeps an [`ObserverScope`] for the lifetime of the component that
//! calls it: the first effect run acquires the observers, and `use_drop`
//! releases them when the component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::core::lifecycle::{ObserverScope, Release};
use crate::core::scroll::{NavVisibility, ScrollTracker};

/// A script-installed listener plus the script that removes it.
pub struct ScriptHandle {
    label: String,
    teardown: String,
}

impl ScriptHandle {
    /// Run `install` now; `teardown` runs on release.
    pub fn install(label: impl Into<String>, install: &str, teardown: String) -> (Self, document::Eval) {
        let label = label.into();
        debug!(%label, "observer installed");
        let eval = document::eval(install);
        (Self { label, teardown }, eval)
    }
}

impl Release for ScriptHandle {
    fn release(&mut self) {
        debug!(label = %self.label, "observer released");
        let _ = document::eval(&self.teardown);
    }
}

/// A task reading from a script channel; cancelled on release.
pub struct TaskHandle(pub Task);

impl Release for TaskHandle {
    fn release(&mut self) {
        self.0.cancel();
    }
}

fn use_observer_scope() -> Rc<RefCell<ObserverScope>> {
    let scope = use_hook(|| Rc::new(RefCell::new(ObserverScope::new())));
    use_drop({
        let scope = scope.clone();
        move || scope.borrow_mut().release_all()
    });
    scope
}

fn reveal_install_script(section_id: &str) -> String {
    format!(
        r#"(function() {{
    const registry = window.__folioReveal = window.__folioReveal || {{}};
    const root = document.getElementById('{section_id}');
    if (!root || registry['{section_id}']) return;
    document.documentElement.classList.add('reveal-ready');
    const observer = new IntersectionObserver((entries) => {{
        for (const entry of entries) {{
            if (entry.isIntersecting) {{
                entry.target.classList.add('is-revealed');
                observer.unobserve(entry.target);
            }}
        }}
    }}, {{ rootMargin: '0px 0px -15% 0px' }});
    root.querySelectorAll('[data-reveal]').forEach((el) => observer.observe(el));
    registry['{section_id}'] = observer;
}})();"#
    )
}

fn reveal_teardown_script(section_id: &str) -> String {
    format!(
        r#"(function() {{
    const registry = window.__folioReveal;
    if (registry && registry['{section_id}']) {{
        registry['{section_id}'].disconnect();
        delete registry['{section_id}'];
    }}
}})();"#
    )
}

/// Reveal every `[data-reveal]` element inside `#section_id` as it scrolls into view.
pub fn use_reveal(section_id: &'static str) {
    let scope = use_observer_scope();
    use_effect(move || {
        let mut held = scope.borrow_mut();
        if !held.is_empty() {
            return;
        }
        let (handle, _eval) = ScriptHandle::install(
            format!("reveal:{section_id}"),
            &reveal_install_script(section_id),
            reveal_teardown_script(section_id),
        );
        held.acquire(handle);
    });
}

const SCROLL_INSTALL: &str = r#"
const registry = window.__folioScroll = window.__folioScroll || {};
if (registry.navbar) window.removeEventListener('scroll', registry.navbar);
const handler = () => dioxus.send(window.scrollY);
registry.navbar = handler;
window.addEventListener('scroll', handler, { passive: true });
dioxus.send(window.scrollY);
await new Promise(() => {});
"#;

const SCROLL_TEARDOWN: &str = r#"
const registry = window.__folioScroll;
if (registry && registry.navbar) {
    window.removeEventListener('scroll', registry.navbar);
    delete registry.navbar;
}
"#;

/// Track window scroll and report whether the navbar should be shown.
pub fn use_nav_visibility(threshold_px: f64) -> Signal<NavVisibility> {
    let visibility = use_signal(NavVisibility::default);
    let scope = use_observer_scope();

    use_effect(move || {
        let mut held = scope.borrow_mut();
        if !held.is_empty() {
            return;
        }
        let (handle, mut eval) =
            ScriptHandle::install("scroll:navbar", SCROLL_INSTALL, SCROLL_TEARDOWN.to_string());
        let task = spawn(async move {
            let mut visibility = visibility;
            let mut tracker: Option<ScrollTracker> = None;
            while let Ok(y) = eval.recv::<f64>().await {
                let next = match tracker.as_mut() {
                    Some(tracker) => tracker.sample(y),
                    None => {
                        tracker = Some(ScrollTracker::new(y, threshold_px));
                        NavVisibility::Shown
                    }
                };
                if *visibility.peek() != next {
                    visibility.set(next);
                }
            }
        });
        held.acquire(handle);
        held.acquire(TaskHandle(task));
    });

    visibility
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_scripts_target_the_section() {
        let install = reveal_install_script("about");
        assert!(install.contains("getElementById('about')"));
        assert!(install.contains("[data-reveal]"));
        assert!(install.contains("is-revealed"));

        let teardown = reveal_teardown_script("about");
        assert!(teardown.contains("registry['about'].disconnect()"));
    }

    #[test]
    fn scroll_teardown_removes_the_installed_handler() {
        assert!(SCROLL_INSTALL.contains("addEventListener('scroll', handler"));
        assert!(SCROLL_TEARDOWN.contains("removeEventListener('scroll', registry.navbar)"));
    }
}
