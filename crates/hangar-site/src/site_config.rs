//! Shared site configuration document
//!
//! `web/_data/config.json` is a flat JSON object the web front end reads on
//! every render. This store is its only mutator and only ever merges keys
//! in; it never replaces the document wholesale.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, SiteError};

/// Key set exactly once, on the first successful catalog write
pub const KEY_INITIALIZED: &str = "initialized";
/// Public tunnel base URL
pub const KEY_WEB_BASE_URL: &str = "webBaseURL";
/// Local network base URL
pub const KEY_LOCAL_BASE_URL: &str = "localBaseURL";

/// Read-modify-write store over the site configuration document
#[derive(Debug, Clone)]
pub struct SiteConfigStore {
    path: PathBuf,
}

impl SiteConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Shallow-merge `partial` over the current document, last write wins
    /// per key. Safe to call repeatedly with overlapping keys.
    pub fn merge(&self, partial: Map<String, Value>) -> Result<()> {
        let mut current = self.read()?;
        for (key, value) in partial {
            current.insert(key, value);
        }
        debug!(path = %self.path.display(), "writing site configuration");
        std::fs::write(&self.path, serde_json::to_string(&Value::Object(current))?)?;
        Ok(())
    }

    /// Convenience merge of the two base URL keys published at server start.
    pub fn publish_base_urls(&self, web_base_url: &str, local_base_url: &str) -> Result<()> {
        let mut partial = Map::new();
        partial.insert(KEY_WEB_BASE_URL.to_string(), Value::from(web_base_url));
        partial.insert(KEY_LOCAL_BASE_URL.to_string(), Value::from(local_base_url));
        self.merge(partial)
    }

    /// Whether the first catalog write has already happened.
    pub fn is_initialized(&self) -> Result<bool> {
        Ok(self
            .read()?
            .get(KEY_INITIALIZED)
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    fn read(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Err(SiteError::SiteConfigMissing(self.path.clone()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(SiteError::SiteConfigMalformed(self.path.clone())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp: &TempDir) -> SiteConfigStore {
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();
        SiteConfigStore::new(path)
    }

    fn partial(key: &str, value: i64) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key.to_string(), Value::from(value));
        map
    }

    #[test]
    fn test_merge_is_additive() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        store.merge(partial("a", 1)).unwrap();
        store.merge(partial("b", 2)).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], 2);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        store.merge(partial("a", 1)).unwrap();
        let once = std::fs::read_to_string(store.path()).unwrap();
        store.merge(partial("a", 1)).unwrap();
        let twice = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_last_write_wins_per_key() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        store.merge(partial("a", 1)).unwrap();
        store.merge(partial("a", 2)).unwrap();

        let value: Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(value["a"], 2);
    }

    #[test]
    fn test_missing_document_is_fatal() {
        let temp = TempDir::new().unwrap();
        let store = SiteConfigStore::new(temp.path().join("config.json"));
        assert!(matches!(
            store.merge(Map::new()).unwrap_err(),
            SiteError::SiteConfigMissing(_)
        ));
    }

    #[test]
    fn test_publish_base_urls() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store
            .publish_base_urls("https://abc.ngrok.io", "http://10.0.0.2:5000")
            .unwrap();

        let value: Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(value[KEY_WEB_BASE_URL], "https://abc.ngrok.io");
        assert_eq!(value[KEY_LOCAL_BASE_URL], "http://10.0.0.2:5000");
    }
}
