//! Key-value storage for saved games and settings.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use crate::core::config::{Settings, SETTINGS_KEY};

/// String key-value store the host provides (browser storage, a file, ...).
pub trait Storage {
    /// Read a value. `None` if the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Delete a value. Absent keys are not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Load settings saved under `SETTINGS_KEY`.
///
/// `Ok(None)` when nothing is stored; an error when the stored value does not
/// decode.
pub fn load_settings(storage: &impl Storage) -> Result<Option<Settings>> {
    storage
        .get(SETTINGS_KEY)
        .map(|json| serde_json::from_str(&json).context("failed to decode saved settings"))
        .transpose()
}

/// Save settings under `SETTINGS_KEY`.
pub fn save_settings(storage: &mut impl Storage, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string(settings).context("failed to encode settings")?;
    storage.set(SETTINGS_KEY, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CardBack, DrawCount};

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(storage.get("a").is_none());

        storage.set("a", "1".to_owned()).unwrap();
        storage.set("a", "2".to_owned()).unwrap();
        assert_eq!(storage.get("a").as_deref(), Some("2"));
        assert_eq!(storage.len(), 1);

        storage.remove("a").unwrap();
        storage.remove("a").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_settings_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(load_settings(&storage).unwrap().is_none());

        let settings = Settings::default()
            .with_draw_count(DrawCount::Three)
            .with_card_back(CardBack::Modern);
        save_settings(&mut storage, &settings).unwrap();

        assert_eq!(load_settings(&storage).unwrap(), Some(settings));
        assert!(storage.get(SETTINGS_KEY).unwrap().contains("\"drawCount\":3"));
    }

    #[test]
    fn test_corrupt_settings() {
        let mut storage = MemoryStorage::new();
        storage.set(SETTINGS_KEY, "{\"drawCount\":2}".to_owned()).unwrap();
        assert!(load_settings(&storage).is_err());
    }
}
