//! Durable key-value storage for visitor preferences.
//!
//! The browser build persists into `localStorage`; native builds keep a small
//! JSON map in the platform config directory. Both sit behind
//! [`PreferenceStorage`] so the preference stores never see which one is in use.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use thiserror::Error;
use tracing::{info, warn};

use crate::core::platform::Platform;

/// Storage key holding `light` or `dark`.
pub const THEME_KEY: &str = "theme";
/// Storage key holding `pt` or `en`.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("durable storage is unavailable in this environment")]
    Unavailable,

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String-to-string storage that survives reloads.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage. Used when no durable backend can be reached, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(|err| StorageError::Backend(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }
}

/// JSON map on disk. Every write rewrites the whole file; the map holds two keys.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStorage {
    path: std::path::PathBuf,
    cache: RefCell<BTreeMap<String, String>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    const FILE_NAME: &'static str = "preferences.json";

    /// Storage rooted in the per-user config directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("dev", "luis-m-sousa", "folio")
            .ok_or(StorageError::Unavailable)?;
        Self::open_in(dirs.config_dir())
    }

    pub fn open_in(dir: &std::path::Path) -> Result<Self, StorageError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(Self::FILE_NAME);
        let cache = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(%err, path = %path.display(), "discarding unreadable preferences file");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            cache: RefCell::new(cache),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.cache.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cache = self.cache.borrow_mut();
        cache.insert(key.to_string(), value.to_string());
        let encoded = serde_json::to_string_pretty(&*cache)?;
        std::fs::write(&self.path, encoded)?;
        Ok(())
    }
}

/// Pick the durable backend for the running platform, falling back to memory.
pub fn platform_storage() -> Rc<dyn PreferenceStorage> {
    #[cfg(target_arch = "wasm32")]
    let opened = BrowserStorage::open();
    #[cfg(not(target_arch = "wasm32"))]
    let opened = FileStorage::open_default();

    match opened {
        Ok(storage) => {
            info!(backend = backend_name(), "durable preference storage ready");
            Rc::new(storage)
        }
        Err(err) => {
            warn!(%err, "durable storage unavailable; preferences will not survive a reload");
            Rc::new(MemoryStorage::new())
        }
    }
}

fn backend_name() -> &'static str {
    match Platform::current() {
        Platform::Web => "localStorage",
        Platform::Desktop => "config-file",
    }
}
