use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use super::{use_preference_env, Language};
use crate::core::platform::DocumentRoot;
use crate::core::storage::{PreferenceStorage, LANGUAGE_KEY};
use crate::i18n::{self, TranslationBundle};

/// Stored value when recognised, else `pt`.
pub fn resolve_initial_language(stored: Option<&str>) -> Language {
    stored.and_then(Language::parse).unwrap_or_default()
}

pub struct LanguageStore {
    storage: Rc<dyn PreferenceStorage>,
    document: Rc<dyn DocumentRoot>,
    current: Language,
}

impl LanguageStore {
    pub fn initialize(storage: Rc<dyn PreferenceStorage>, document: Rc<dyn DocumentRoot>) -> Self {
        let stored = storage.read(LANGUAGE_KEY);
        if let Some(raw) = stored.as_deref().filter(|raw| Language::parse(raw).is_none()) {
            warn!(value = raw, "ignoring unrecognised stored language");
        }
        let language = resolve_initial_language(stored.as_deref());
        info!(%language, "language initialised");

        let mut store = Self {
            storage,
            document,
            current: language,
        };
        store.commit(language);
        store
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn toggle(&mut self) -> Language {
        let next = self.current.toggled();
        self.commit(next);
        debug!(language = %next, "language toggled");
        next
    }

    fn commit(&mut self, language: Language) {
        self.document.apply_language(language);
        if let Err(err) = self.storage.write(LANGUAGE_KEY, language.as_str()) {
            warn!(%err, %language, "failed to persist language");
        }
        self.current = language;
    }
}

#[derive(Clone, Copy)]
pub struct LanguageHandle {
    store: Signal<Option<LanguageStore>>,
}

impl LanguageHandle {
    pub fn language(&self) -> Language {
        self.store
            .read()
            .as_ref()
            .map(LanguageStore::current)
            .unwrap_or_default()
    }

    /// Strings for the active language.
    pub fn bundle(&self) -> &'static TranslationBundle {
        i18n::bundle(self.language())
    }

    pub fn toggle(&self) {
        let mut store = self.store;
        if let Some(store) = &mut *store.write() {
            store.toggle();
        };
    }
}

/// Language capability for a section. Panics outside [`LanguageProvider`].
pub fn use_language() -> LanguageHandle {
    try_use_context::<LanguageHandle>()
        .expect("use_language must be used within a LanguageProvider")
}

/// Owns the language store. Renders nothing until the stored language has been read.
#[component]
pub fn LanguageProvider(children: Element) -> Element {
    let env = use_preference_env();
    let mut store = use_signal(|| Option::<LanguageStore>::None);
    use_context_provider(|| LanguageHandle { store });

    use_effect(move || {
        if store.peek().is_none() {
            store.set(Some(LanguageStore::initialize(
                env.storage.clone(),
                env.document.clone(),
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

    #[test]
    fn defaults_to_portuguese() {
        assert_eq!(resolve_initial_language(None), Language::Pt);
        assert_eq!(resolve_initial_language(Some("fr")), Language::Pt);
        assert_eq!(resolve_initial_language(Some("en")), Language::En);
    }

    #[test]
    fn initialization_sets_lang_attribute_and_persists() {
        let storage = Rc::new(MemoryStorage::with_entry(LANGUAGE_KEY, "en"));
        let document = Rc::new(DetachedDocument::new());
        let store = LanguageStore::initialize(storage.clone(), document.clone());

        assert_eq!(store.current(), Language::En);
        assert_eq!(document.lang().as_deref(), Some("en"));
        assert_eq!(storage.read(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn toggled_language_survives_reload() {
        let storage = Rc::new(MemoryStorage::new());
        let document = Rc::new(DetachedDocument::new());
        let mut store = LanguageStore::initialize(storage.clone(), document.clone());
        assert_eq!(store.toggle(), Language::En);
        assert_eq!(document.lang().as_deref(), Some("en"));
        drop(store);

        let reloaded = LanguageStore::initialize(storage, document);
        assert_eq!(reloaded.current(), Language::En);
    }

    type Seen = Rc<RefCell<Vec<(Language, LanguageHandle)>>>;

    #[component]
    fn LanguageReader() -> Element {
        let seen = use_context::<Seen>();
        let language = use_language();
        seen.borrow_mut().push((language.language(), language));
        rsx! {}
    }

    fn localized_app() -> Element {
        rsx! {
            LanguageProvider { LanguageReader {} }
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
        let storage = Rc::new(MemoryStorage::with_entry(LANGUAGE_KEY, "en"));
        let document = Rc::new(DetachedDocument::new());
        let seen: Seen = Rc::default();
        let mut dom = VirtualDom::new(localized_app)
            .with_root_context(PreferenceEnv::new(storage.clone(), document.clone()))
            .with_root_context(seen.clone());

        dom.rebuild_in_place();
        assert!(seen.borrow().is_empty());

        settle(&mut dom);
        let first = seen.borrow().first().map(|(language, _)| *language);
        assert_eq!(first, Some(Language::En));
        assert_eq!(document.lang().as_deref(), Some("en"));

        let handle = seen.borrow()[0].1;
        dom.in_runtime(|| handle.toggle());
        assert_eq!(storage.read(LANGUAGE_KEY).as_deref(), Some("pt"));
        assert_eq!(document.lang().as_deref(), Some("pt"));
        assert_eq!(dom.in_runtime(|| handle.bundle().nav.home.clone()), "Início");
    }

    #[test]
    #[should_panic(expected = "use_language must be used within a LanguageProvider")]
    fn language_hook_outside_provider_panics() {
        fn orphan() -> Element {
            use_language();
            rsx! {}
        }
        VirtualDom::new(orphan).rebuild_in_place();
    }
}
