use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use super::{use_preference_env, Theme};
use crate::core::platform::{prefers_dark_scheme, DocumentRoot};
use crate::core::storage::{PreferenceStorage, THEME_KEY};

/// Stored value first, then the system hint, then dark.
pub fn resolve_initial_theme(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    match prefers_dark {
        Some(true) => Theme::Dark,
        Some(false) => Theme::Light,
        None => Theme::default(),
    }
}

pub struct ThemeStore {
    storage: Rc<dyn PreferenceStorage>,
    document: Rc<dyn DocumentRoot>,
    current: Theme,
}

impl ThemeStore {
    /// Read the stored theme once and apply the resolved value.
    pub fn initialize(
        storage: Rc<dyn PreferenceStorage>,
        document: Rc<dyn DocumentRoot>,
        prefers_dark: Option<bool>,
    ) -> Self {
        let stored = storage.read(THEME_KEY);
        if let Some(raw) = stored.as_deref().filter(|raw| Theme::parse(raw).is_none()) {
            warn!(value = raw, "ignoring unrecognised stored theme");
        }
        let theme = resolve_initial_theme(stored.as_deref(), prefers_dark);
        info!(
            %theme,
            from_storage = stored.as_deref().and_then(Theme::parse).is_some(),
            ?prefers_dark,
            "theme initialised"
        );

        let mut store = Self {
            storage,
            document,
            current: theme,
        };
        store.commit(theme);
        store
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.commit(next);
        debug!(theme = %next, "theme toggled");
        next
    }

    fn commit(&mut self, theme: Theme) {
        self.document.apply_theme(theme);
        if let Err(err) = self.storage.write(THEME_KEY, theme.as_str()) {
            warn!(%err, %theme, "failed to persist theme");
        }
        self.current = theme;
    }
}

/// Read access to the active theme plus the toggle, shared through context.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    store: Signal<Option<ThemeStore>>,
}

impl ThemeHandle {
    pub fn theme(&self) -> Theme {
        self.store
            .read()
            .as_ref()
            .map(ThemeStore::current)
            .unwrap_or_default()
    }

    pub fn toggle(&self) {
        let mut store = self.store;
        if let Some(store) = &mut *store.write() {
            store.toggle();
        };
    }
}

/// Theme capability for a section. Panics outside [`ThemeProvider`].
pub fn use_theme() -> ThemeHandle {
    try_use_context::<ThemeHandle>().expect("use_theme must be used within a ThemeProvider")
}

/// Owns the theme store. Renders nothing until the stored theme has been read.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let env = use_preference_env();
    let mut store = use_signal(|| Option::<ThemeStore>::None);
    use_context_provider(|| ThemeHandle { store });

    use_effect(move || {
        if store.peek().is_none() {
            store.set(Some(ThemeStore::initialize(
                env.storage.clone(),
                env.document.clone(),
                prefers_dark_scheme(),
            )));
        }
    });

    if store.read().is_none() {
        return rsx! {};
    }

    rsx! { {children} }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use super::*;
    use crate::core::platform::DetachedDocument;
    use crate::core::storage::MemoryStorage;
    use crate::preferences::PreferenceEnv;

    fn env(storage: MemoryStorage) -> (Rc<MemoryStorage>, Rc<DetachedDocument>) {
        (Rc::new(storage), Rc::new(DetachedDocument::new()))
    }

    #[test]
    fn hint_decides_without_stored_value() {
        assert_eq!(resolve_initial_theme(None, Some(true)), Theme::Dark);
        assert_eq!(resolve_initial_theme(None, Some(false)), Theme::Light);
        assert_eq!(resolve_initial_theme(None, None), Theme::Dark);
    }

    #[test]
    fn stored_value_beats_hint() {
        assert_eq!(resolve_initial_theme(Some("light"), Some(true)), Theme::Light);
        assert_eq!(resolve_initial_theme(Some("dark"), Some(false)), Theme::Dark);
    }

    #[test]
    fn garbage_stored_value_falls_through_to_hint() {
        assert_eq!(resolve_initial_theme(Some("neon"), Some(false)), Theme::Light);
    }

    #[test]
    fn initialization_marks_document_and_persists() {
        let (storage, document) = env(MemoryStorage::new());
        let store = ThemeStore::initialize(storage.clone(), document.clone(), Some(false));

        assert_eq!(store.current(), Theme::Light);
        assert_eq!(document.classes(), vec!["light".to_string()]);
        assert_eq!(storage.read(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_replaces_marker() {
        let storage = Rc::new(MemoryStorage::new());
        let document = Rc::new(DetachedDocument::with_classes(&["antialiased", "light"]));
        let mut store = ThemeStore::initialize(storage.clone(), document.clone(), None);
        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(
            document.classes(),
            vec!["antialiased".to_string(), "dark".to_string()]
        );

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(
            document.classes(),
            vec!["antialiased".to_string(), "light".to_string()]
        );
    }

    #[test]
    fn toggled_theme_survives_reload() {
        let (storage, document) = env(MemoryStorage::new());
        let mut store = ThemeStore::initialize(storage.clone(), document.clone(), Some(true));
        assert_eq!(store.toggle(), Theme::Light);
        drop(store);

        let reloaded = ThemeStore::initialize(storage, document, Some(true));
        assert_eq!(reloaded.current(), Theme::Light);
    }

    type Seen = Rc<RefCell<Vec<(Theme, ThemeHandle)>>>;

    #[component]
    fn ThemeReader() -> Element {
        let seen = use_context::<Seen>();
        let theme = use_theme();
        seen.borrow_mut().push((theme.theme(), theme));
        rsx! {}
    }

    fn themed_app() -> Element {
        rsx! {
            ThemeProvider { ThemeReader {} }
        }
    }

    fn settle(dom: &mut VirtualDom) {
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap()
            .block_on(async {
                let _ = tokio::time::timeout(Duration::from_secs(1), dom.wait_for_work()).await;
            });
        let _ = dom.render_immediate_to_vec();
    }

    #[test]
    fn provider_renders_children_only_after_initialization() {
        let storage = Rc::new(MemoryStorage::with_entry(THEME_KEY, "light"));
        let document = Rc::new(DetachedDocument::new());
        let seen: Seen = Rc::default();
        let mut dom = VirtualDom::new(themed_app)
            .with_root_context(PreferenceEnv::new(storage.clone(), document.clone()))
            .with_root_context(seen.clone());

        dom.rebuild_in_place();
        assert!(seen.borrow().is_empty());

        settle(&mut dom);
        let first = seen.borrow().first().map(|(theme, _)| *theme);
        assert_eq!(first, Some(Theme::Light));
        assert_eq!(document.classes(), vec!["light".to_string()]);

        let handle = seen.borrow()[0].1;
        dom.in_runtime(|| handle.toggle());
        assert_eq!(storage.read(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(document.classes(), vec!["dark".to_string()]);
    }

    #[test]
    #[should_panic(expected = "use_theme must be used within a ThemeProvider")]
    fn theme_hook_outside_provider_panics() {
        fn orphan() -> Element {
            use_theme();
            rsx! {}
        }
        VirtualDom::new(orphan).rebuild_in_place();
    }
}
