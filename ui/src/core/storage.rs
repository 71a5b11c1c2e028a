//! Local persistence for small string preferences.
//!
//! - Web: `window.localStorage`
//! - Desktop: `preferences.json` in the platform config directory
//! - Tests: [`MemoryStore`]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("read failed: {0}")]
    Read(String),
    #[error("write failed: {0}")]
    Write(String),
    #[error("malformed preferences: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{PreferenceStore, StorageError};

    fn js_message(err: wasm_bindgen::JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    /// `window.localStorage`.
    pub struct BrowserStore {
        storage: web_sys::Storage,
    }

    impl BrowserStore {
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
            let storage = window
                .local_storage()
                .map_err(|err| StorageError::Unavailable(js_message(err)))?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))?;
            Ok(Self { storage })
        }
    }

    impl PreferenceStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage
                .get_item(key)
                .map_err(|err| StorageError::Read(js_message(err)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|err| StorageError::Write(js_message(err)))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;

    use tracing::warn;

    use super::{PreferenceStore, StorageError};

    const FILE_NAME: &str = "preferences.json";

    /// JSON object of string values on disk.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn open_default() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("com", "Folio", "Folio").ok_or_else(|| {
                StorageError::Unavailable("unable to determine config directory".into())
            })?;
            Ok(Self::at(dirs.config_dir().join(FILE_NAME)))
        }

        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
            if !self.path.exists() {
                return Ok(BTreeMap::new());
            }
            let raw = fs::read_to_string(&self.path)
                .map_err(|err| StorageError::Read(err.to_string()))?;
            if raw.trim().is_empty() {
                return Ok(BTreeMap::new());
            }
            Ok(serde_json::from_str(&raw)?)
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.load()?.remove(key))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.load().unwrap_or_else(|err| {
                warn!(path = %self.path.display(), "{err}; rewriting preferences from scratch");
                BTreeMap::new()
            });
            entries.insert(key.to_string(), value.to_string());
            if let Some(dir) = self.path.parent() {
                fs::create_dir_all(dir).map_err(|err| StorageError::Write(err.to_string()))?;
            }
            let body = serde_json::to_string_pretty(&entries)?;
            fs::write(&self.path, body).map_err(|err| StorageError::Write(err.to_string()))
        }
    }
}

/// The platform's durable store, or an in-memory one if it cannot be opened.
pub fn default_store() -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    let opened = BrowserStore::open().map(|store| Box::new(store) as Box<dyn PreferenceStore>);

    #[cfg(not(target_arch = "wasm32"))]
    let opened = FileStore::open_default().map(|store| Box::new(store) as Box<dyn PreferenceStore>);

    opened.unwrap_or_else(|err| {
        warn!("{err}; preferences will not survive a reload");
        Box::new(MemoryStore::default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let mut store = MemoryStore::default();
        let view = store.clone();
        store.set("theme", "dark").unwrap();
        assert_eq!(view.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(view.get("other").unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut first = FileStore::at(&path);
        assert_eq!(first.get("theme").unwrap(), None);
        first.set("theme", "dark").unwrap();
        first.set("other", "x").unwrap();

        let second = FileStore::at(&path);
        assert_eq!(second.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(second.get("other").unwrap().as_deref(), Some("x"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileStore::at(&path);
        assert!(matches!(store.get("theme"), Err(StorageError::Malformed(_))));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_write_recovers_from_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::at(&path);
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }
}
