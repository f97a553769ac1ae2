//! String key-value storage behind the ranking store.
//!
//! The game treats persistence as an abstract store so the logic can be
//! tested against an in-memory map while the binary writes JSON files under
//! a home-directory dot-folder.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Minimal persistent key-value interface.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key` wholesale.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed storage: one file per key under `~/.flappy-rank/`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the default `~/.flappy-rank/` directory, creating
    /// it if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::at(home_dir.join(".flappy-rank"))
    }

    /// Storage rooted at an explicit directory.
    pub fn at(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.dir.join(key), value)
    }
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. with corrupt data for degradation tests.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read("missing"), None);

        storage.write("key", "value").unwrap();
        assert_eq!(storage.read("key").as_deref(), Some("value"));

        storage.write("key", "replaced").unwrap();
        assert_eq!(storage.read("key").as_deref(), Some("replaced"));
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = std::env::temp_dir().join("flappy-rank-storage-test");
        let mut storage = FileStorage::at(dir.clone()).expect("storage dir");

        storage.write("test-key.json", "[1,2,3]").unwrap();
        assert_eq!(storage.read("test-key.json").as_deref(), Some("[1,2,3]"));
        assert_eq!(storage.read("absent.json"), None);

        fs::remove_dir_all(dir).ok();
    }
}
