//! Generic settings persistence coordination.
//!
//! Stores any serializable viewer preference in eframe's persistent storage
//! as a JSON string.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `default` when it is missing or invalid.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if loading fails
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Loads a setting, returning None if it is missing or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring stored setting '{}': {}", key, e);
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_path() {
        let mut storage = MockStorage::new();
        let path = Some(PathBuf::from("/tmp/timeline.json"));

        SettingsCoordinator::save_setting(&mut storage, "last_document", &path);

        let loaded: Option<PathBuf> = SettingsCoordinator::load_setting_or(Some(&storage), "last_document", None);
        assert_eq!(loaded, path);
    }

    #[test]
    fn test_missing_or_invalid_setting_uses_default() {
        let mut storage = MockStorage::new();
        storage.set_string("broken", "{not json".to_string());

        let missing: i32 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 7);
        let broken: i32 = SettingsCoordinator::load_setting_or(Some(&storage), "broken", 7);
        let no_storage: i32 = SettingsCoordinator::load_setting_or(None, "missing", 7);

        assert_eq!(missing, 7);
        assert_eq!(broken, 7);
        assert_eq!(no_storage, 7);
    }
}
