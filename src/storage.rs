use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stopwatch_core::{FlagKey, FlagStore};

use crate::error::{LensError, Result};

/// Boolean flags persisted as a JSON object of `key -> bool`.
pub struct FileFlagStore {
    path: PathBuf,
    flags: BTreeMap<String, bool>,
}

impl FileFlagStore {
    /// Open the store at `path`. A missing or empty file holds no flags.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let flags = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| store_error(&path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(store_error(&path, e)),
        };
        Ok(Self { path, flags })
    }

    fn sync(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.flags).map_err(|e| store_error(&self.path, e))?;
        fs::write(&self.path, data).map_err(|e| store_error(&self.path, e))
    }
}

impl FlagStore for FileFlagStore {
    fn get_bool(&self, key: FlagKey) -> bool {
        self.flags.get(key.as_str()).copied().unwrap_or(false)
    }

    fn put_bool(&mut self, key: FlagKey, value: bool) {
        self.flags.insert(key.as_str().to_string(), value);
        if let Err(e) = self.sync() {
            log::error!("Failed to save {}: {}", key.as_str(), e);
        }
    }
}

fn store_error(path: &Path, e: impl std::fmt::Display) -> LensError {
    LensError::Store {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lens-stopwatch-{}-{}.json", name, std::process::id()));
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn test_missing_file_reads_false() {
        let path = temp_path("missing");
        let store = FileFlagStore::open(&path).unwrap();
        assert!(!store.get_bool(FlagKey::HasBeenRun));
    }

    #[test]
    fn test_flag_persists_across_opens() {
        let path = temp_path("persist");
        let mut store = FileFlagStore::open(&path).unwrap();
        store.put_bool(FlagKey::HasBeenRun, true);

        let reopened = FileFlagStore::open(&path).unwrap();
        assert!(reopened.get_bool(FlagKey::HasBeenRun));
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"hasBeenRun\": true"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_failure_keeps_flag_in_memory() {
        let dir = std::env::temp_dir().join(format!("lens-stopwatch-absent-{}", std::process::id()));
        fs::remove_dir_all(&dir).ok();
        let path = dir.join("flags.json");

        let mut store = FileFlagStore::open(&path).unwrap();
        store.put_bool(FlagKey::HasBeenRun, true);
        assert!(store.get_bool(FlagKey::HasBeenRun));
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_file_reads_false() {
        let path = temp_path("empty");
        fs::write(&path, "").unwrap();
        let store = FileFlagStore::open(&path).unwrap();
        assert!(!store.get_bool(FlagKey::HasBeenRun));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(FileFlagStore::open(&path), Err(LensError::Store { .. })));
        fs::remove_file(&path).ok();
    }
}
