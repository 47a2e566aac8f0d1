//! Store
//!
//! Loads and saves the roster through a slot backend.

use crate::config::{Config, LoadPolicy};
use crate::error::{Result, RosterError};
use crate::member::Member;
use crate::roster::Roster;

use super::{FileSlot, SlotBackend};

/// Owns the durable copy of the roster
pub struct Store {
    /// Where slot bytes live
    backend: Box<dyn SlotBackend>,

    /// Slot holding the roster
    slot: String,
}

impl Store {
    /// Open the file-backed store described by `config`
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        let backend = FileSlot::open(&config.data_dir)?;
        Ok(Self::with_backend(Box::new(backend), config.slot.trim()))
    }

    /// Use an explicit backend
    pub fn with_backend(backend: Box<dyn SlotBackend>, slot: impl Into<String>) -> Self {
        Self {
            backend,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Read the persisted collection
    ///
    /// Returns:
    /// - `Ok(vec![])` — slot absent, empty, or JSON `null`
    /// - `Ok(members)` — well-formed array with unique ids
    /// - `Err(Parse)` — anything else
    pub fn load(&self) -> Result<Vec<Member>> {
        let bytes = match self.backend.read(&self.slot)? {
            Some(bytes) => bytes,
            None => {
                tracing::debug!(slot = %self.slot, "Slot absent, starting empty");
                return Ok(Vec::new());
            }
        };

        let members = Self::decode(&bytes)?;
        // Duplicate ids are as corrupt as bad JSON
        let roster = Roster::from_members(members)?;

        tracing::debug!(slot = %self.slot, count = roster.len(), "Loaded roster");
        Ok(roster.into_members())
    }

    /// Load and apply the configured policy for malformed content
    pub fn load_roster(&self, policy: LoadPolicy) -> Result<Roster> {
        match self.load() {
            Ok(members) => Roster::from_members(members),
            Err(RosterError::Parse(reason)) if policy == LoadPolicy::FallbackEmpty => {
                tracing::warn!(
                    slot = %self.slot,
                    %reason,
                    "Slot content is malformed, starting with an empty roster"
                );
                Ok(Roster::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Serialize and overwrite the slot with the full collection
    pub fn save(&self, members: &[Member]) -> Result<()> {
        let bytes = Self::encode(members)?;
        self.backend.write(&self.slot, &bytes)?;
        tracing::debug!(slot = %self.slot, count = members.len(), bytes = bytes.len(), "Saved roster");
        Ok(())
    }

    /// Remove the slot entirely
    pub fn clear(&self) -> Result<bool> {
        let existed = self.backend.remove(&self.slot)?;
        tracing::info!(slot = %self.slot, existed, "Cleared roster slot");
        Ok(existed)
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Deterministic encoding: pretty JSON in insertion order, trailing newline
    pub fn encode(members: &[Member]) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(members)
            .map_err(|e| RosterError::Serialization(e.to_string()))?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Decode slot bytes; blank content counts as absent
    pub fn decode(bytes: &[u8]) -> Result<Vec<Member>> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let members: Option<Vec<Member>> = serde_json::from_slice(bytes)
            .map_err(|e| RosterError::Parse(format!("roster slot: {}", e)))?;

        Ok(members.unwrap_or_default())
    }
}
