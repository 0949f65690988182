//! Backing storage for the config document

use crate::error::Result;
use atomic_write_file::AtomicWriteFile;
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the config document lives
pub trait ConfigStore: Send + Sync {
    /// Read the document; `None` when it does not exist yet
    fn read(&self) -> Result<Option<String>>;

    /// Replace the document
    fn write(&self, document: &str) -> Result<()>;

    /// Human readable location, for log messages
    fn describe(&self) -> String;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    /// Written atomically so a crash never leaves a half-written config
    fn write(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = AtomicWriteFile::open(&self.path)?;
        file.write_all(document.as_bytes())?;
        file.commit()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process document, for embedders without a filesystem and for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
        }
    }

    pub fn document(&self) -> Option<String> {
        self.document.lock().clone()
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.document.lock().clone())
    }

    fn write(&self, document: &str) -> Result<()> {
        *self.document.lock() = Some(document.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
