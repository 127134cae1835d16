use super::files::{atomic_write, read_optional};
use anyhow::{Context, Result};
#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// String-keyed, string-valued synchronous storage
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct DirKvStore {
    dir: PathBuf,
}

impl DirKvStore {
    pub fn open(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            anyhow::bail!("Invalid storage key: {:?}", key);
        }
        Ok(self.dir.join(key))
    }
}

impl KvStore for DirKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.path_for(key)?, value)
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    pub values: HashMap<String, String>,
    /// Keys whose reads fail, to exercise the fallback path
    pub broken_keys: Vec<String>,
}

#[cfg(test)]
impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.broken_keys.iter().any(|k| k == key) {
            anyhow::bail!("storage unavailable for {}", key);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
