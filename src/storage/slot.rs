//! Slot backends
//!
//! A slot is a named value overwritten as a whole, the same contract as a
//! browser's local storage entry.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;

/// Named, wholesale-overwritten byte slots
pub trait SlotBackend: Send + Sync {
    /// Read a slot; `None` if it was never written
    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>>;

    /// Replace a slot's content
    fn write(&self, slot: &str, bytes: &[u8]) -> Result<()>;

    /// Remove a slot; returns whether it existed
    fn remove(&self, slot: &str) -> Result<bool>;
}

/// One `{slot}.json` file per slot inside a data directory
#[derive(Debug, Clone)]
pub struct FileSlot {
    data_dir: PathBuf,
}

impl FileSlot {
    /// Open or create the data directory
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    /// File path backing `slot`
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", slot))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl SlotBackend for FileSlot {
    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.slot_path(slot)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> Result<()> {
        fs::write(self.slot_path(slot), bytes)?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<bool> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process slots; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    slots: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot (e.g. with data written elsewhere)
    pub fn with_slot(self, slot: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.slots.lock().insert(slot.to_string(), bytes.into());
        self
    }

    /// Current raw content of a slot
    pub fn raw(&self, slot: &str) -> Option<Vec<u8>> {
        self.slots.lock().get(slot).cloned()
    }
}

impl SlotBackend for MemorySlot {
    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.raw(slot))
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> Result<()> {
        self.slots.lock().insert(slot.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<bool> {
        Ok(self.slots.lock().remove(slot).is_some())
    }
}
