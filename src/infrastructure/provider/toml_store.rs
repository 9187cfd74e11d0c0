//! TOML Provider Store
//!
//! Local emulation of the hosting platform, persisted at
//! `<state_dir>/state.toml`. Every call takes an fs2 lock on
//! `<state_dir>/state.lock`; writes go through a temp file and rename.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;

use crate::domain::entities::{Alias, FunctionConfiguration, FunctionDetails, FunctionVersion};
use crate::domain::ports::{FunctionProvider, ProviderError, ProviderResult};
use crate::domain::services::Page;
use crate::domain::value_objects::VersionId;

use super::state::{ProviderState, DEFAULT_PAGE_SIZE, STATE_FORMAT_VERSION};

const STATE_FILE: &str = "state.toml";
const LOCK_FILE: &str = "state.lock";

pub struct TomlProviderStore {
    dir: PathBuf,
    page_size: usize,
}

impl TomlProviderStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_page_size(dir, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(dir: impl Into<PathBuf>, page_size: usize) -> Self {
        Self {
            dir: dir.into(),
            page_size: page_size.max(1),
        }
    }

    /// Create the state directory if needed and return a store over it
    pub fn open(dir: impl Into<PathBuf>, page_size: usize) -> ProviderResult<Self> {
        let store = Self::with_page_size(dir, page_size);
        fs::create_dir_all(&store.dir).map_err(|e| storage(&store.dir, e))?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(LOCK_FILE)
    }

    fn acquire(&self, exclusive: bool) -> ProviderResult<fs::File> {
        let lock_path = self.lock_path();
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| storage(&lock_path, e))?;
        let locked = if exclusive {
            lock_file.lock_exclusive()
        } else {
            lock_file.lock_shared()
        };
        locked.map_err(|e| storage(&lock_path, e))?;
        Ok(lock_file)
    }

    fn load_from_disk(&self) -> ProviderResult<ProviderState> {
        let path = self.state_path();
        if !path.exists() {
            return Ok(ProviderState::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| storage(&path, e))?;
        let state: ProviderState =
            toml::from_str(&content).map_err(|e| ProviderError::Storage {
                message: format!("state file {} is corrupted: {}", path.display(), e),
            })?;

        if state.version != STATE_FORMAT_VERSION {
            return Err(ProviderError::Storage {
                message: format!(
                    "state file {} has format version {}, expected {}",
                    path.display(),
                    state.version,
                    STATE_FORMAT_VERSION
                ),
            });
        }
        Ok(state)
    }

    fn save_to_disk(&self, state: &ProviderState) -> ProviderResult<()> {
        let content = toml::to_string_pretty(state).map_err(|e| ProviderError::Storage {
            message: format!("failed to serialize provider state: {e}"),
        })?;

        let path = self.state_path();
        let mut temp = tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| storage(&path, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| storage(&path, e))?;
        temp.persist(&path).map_err(|e| storage(&path, e.error))?;
        Ok(())
    }

    fn read<T>(&self, op: impl FnOnce(&ProviderState) -> ProviderResult<T>) -> ProviderResult<T> {
        let _lock = self.acquire(false)?;
        // released when `_lock` is dropped
        self.load_from_disk().and_then(|state| op(&state))
    }

    /// Load, apply `op`, and save only if `op` succeeded.
    fn write<T>(
        &self,
        op: impl FnOnce(&mut ProviderState) -> ProviderResult<T>,
    ) -> ProviderResult<T> {
        let _lock = self.acquire(true)?;
        self.load_from_disk().and_then(|mut state| {
            let value = op(&mut state)?;
            self.save_to_disk(&state)?;
            Ok(value)
        })
    }
}

fn storage(path: &Path, error: std::io::Error) -> ProviderError {
    ProviderError::Storage {
        message: format!("{}: {}", path.display(), error),
    }
}

impl FunctionProvider for TomlProviderStore {
    fn check_connection(&self) -> ProviderResult<()> {
        if !self.dir.is_dir() {
            return Err(ProviderError::Unavailable {
                message: format!("state directory {} does not exist", self.dir.display()),
            });
        }
        self.read(|_| Ok(()))
    }

    fn get_function(&self, name: &str) -> ProviderResult<FunctionDetails> {
        self.read(|state| state.get_function(name))
    }

    fn create_function(
        &self,
        configuration: &FunctionConfiguration,
        code: &[u8],
        publish: bool,
    ) -> ProviderResult<VersionId> {
        self.write(|state| state.create_function(configuration, code, publish, Utc::now()))
    }

    fn update_function_configuration(
        &self,
        configuration: &FunctionConfiguration,
    ) -> ProviderResult<()> {
        self.write(|state| state.update_configuration(configuration, Utc::now()))
    }

    fn update_function_code(
        &self,
        name: &str,
        code: &[u8],
        publish: bool,
    ) -> ProviderResult<VersionId> {
        self.write(|state| state.update_code(name, code, publish, Utc::now()))
    }

    fn delete_function(&self, name: &str, qualifier: Option<&VersionId>) -> ProviderResult<()> {
        self.write(|state| state.delete_function(name, qualifier))
    }

    fn list_versions(
        &self,
        name: &str,
        marker: Option<&str>,
    ) -> ProviderResult<Page<FunctionVersion>> {
        self.read(|state| state.list_versions(name, marker, self.page_size))
    }

    fn list_aliases(&self, name: &str, marker: Option<&str>) -> ProviderResult<Page<Alias>> {
        self.read(|state| state.list_aliases(name, marker, self.page_size))
    }

    fn create_alias(
        &self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias> {
        self.write(|state| state.create_alias(name, alias, version, description))
    }

    fn update_alias(
        &self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias> {
        self.write(|state| state.update_alias(name, alias, version, description))
    }

    fn delete_alias(&self, name: &str, alias: &str) -> ProviderResult<()> {
        self.write(|state| state.delete_alias(name, alias))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Runtime;
    use tempfile::tempdir;

    fn configuration() -> FunctionConfiguration {
        FunctionConfiguration {
            name: "orders".to_string(),
            runtime: Runtime::Java21,
            role: "role".to_string(),
            handler: "example.Handler::handleRequest".to_string(),
            description: "orders".to_string(),
            timeout: 60,
            memory_size: 512,
            network: None,
        }
    }

    #[test]
    fn missing_directory_is_not_connected() {
        let dir = tempdir().unwrap();
        let store = TomlProviderStore::new(dir.path().join("absent"));
        let err = store.check_connection().unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable { .. }));
    }

    #[test]
    fn open_creates_directory() {
        let dir = tempdir().unwrap();
        let store = TomlProviderStore::open(dir.path().join("provider"), 10).unwrap();
        assert!(store.dir().is_dir());
        assert!(store.check_connection().is_ok());
    }

    #[test]
    fn state_persists_across_instances() {
        let dir = tempdir().unwrap();
        let store = TomlProviderStore::open(dir.path(), 10).unwrap();
        store
            .create_function(&configuration(), b"jar", true)
            .unwrap();
        store
            .create_alias("orders", "prod", &VersionId::from("1"), "Production")
            .unwrap();

        let reopened = TomlProviderStore::new(dir.path());
        let details = reopened.get_function("orders").unwrap();
        assert_eq!(details.memory_size, 512);
        let aliases = reopened.list_aliases("orders", None).unwrap();
        assert_eq!(aliases.items.len(), 1);
        assert_eq!(aliases.items[0].version, VersionId::from("1"));
    }

    #[test]
    fn failed_write_leaves_state_unchanged() {
        let dir = tempdir().unwrap();
        let store = TomlProviderStore::open(dir.path(), 10).unwrap();
        store
            .create_function(&configuration(), b"jar", true)
            .unwrap();
        let before = fs::read_to_string(store.state_path()).unwrap();

        let err = store
            .create_alias("orders", "prod", &VersionId::from("9"), "")
            .unwrap_err();
        assert!(matches!(err, ProviderError::VersionNotFound { .. }));
        assert_eq!(fs::read_to_string(store.state_path()).unwrap(), before);
    }

    #[test]
    fn lock_is_released_after_each_call() {
        let dir = tempdir().unwrap();
        let store = TomlProviderStore::open(dir.path(), 10).unwrap();
        store
            .create_function(&configuration(), b"jar", true)
            .unwrap();
        assert!(store.get_function("missing").is_err());

        let lock = fs::File::open(store.lock_path()).unwrap();
        lock.try_lock_exclusive().unwrap();
        lock.unlock().unwrap();
    }

    #[test]
    fn corrupted_state_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let store = TomlProviderStore::open(dir.path(), 10).unwrap();
        fs::write(store.state_path(), "not = [valid").unwrap();

        let err = store.get_function("orders").unwrap_err();
        assert!(matches!(err, ProviderError::Storage { .. }));
        assert!(store.check_connection().is_err());
    }

    #[test]
    fn unknown_format_version_is_rejected() {
        let dir = tempdir().unwrap();
        let store = TomlProviderStore::open(dir.path(), 10).unwrap();
        fs::write(store.state_path(), "version = 99\n").unwrap();

        let err = store.get_function("orders").unwrap_err();
        assert!(err.to_string().contains("format version 99"));
    }

    #[test]
    fn listings_page_with_configured_size() {
        let dir = tempdir().unwrap();
        let store = TomlProviderStore::open(dir.path(), 2).unwrap();
        store
            .create_function(&configuration(), b"1", true)
            .unwrap();
        store.update_function_code("orders", b"2", true).unwrap();

        let first = store.list_versions("orders", None).unwrap();
        assert_eq!(first.items.len(), 2);
        let second = store
            .list_versions("orders", first.next_marker())
            .unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.next_marker(), None);
    }
}
