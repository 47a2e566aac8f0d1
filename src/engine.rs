//! Engine Module
//!
//! Coordinates the store, the in-memory roster and the sort toggle, and
//! exposes the hooks a presentation layer calls.
//!
//! ## Responsibilities
//! - Load the roster on startup according to the `LoadPolicy`
//! - Validate → mutate → persist → swap for every change
//! - Own the per-key sort direction state
//! - Notify observers after each committed mutation

use crate::config::Config;
use crate::error::Result;
use crate::intent::{Intent, Outcome};
use crate::member::{IdGenerator, Member, MemberDraft, MemberId, MemberPatch};
use crate::roster::{Direction, Roster, SortKey, SortState, StatusFilter};
use crate::storage::{SlotBackend, Store};
use crate::validate::ValidationRules;

/// Receives the full, canonical roster after every committed change
pub trait RosterObserver {
    fn roster_changed(&self, members: &[Member]);
}

/// The roster engine
///
/// ## Commit Model
///
/// A mutation is computed on a copy of the roster, saved, and only then
/// swapped in. If validation or the save fails, both memory and the slot
/// keep their previous content.
///
/// ## Concurrency
///
/// One logical actor. Methods take `&mut self`; two processes writing the
/// same slot overwrite each other (last save wins).
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Durable slot
    store: Store,

    /// Canonical in-memory roster (mirrors the slot)
    roster: Roster,

    /// Direction last used per sort key
    sort_state: SortState,

    /// Validation policy derived from config
    rules: ValidationRules,

    /// Id minting strategy derived from config
    ids: IdGenerator,

    /// Presentation layers to refresh after mutations
    observers: Vec<Box<dyn RosterObserver>>,
}

impl Engine {
    /// Open the file-backed engine described by `config`
    ///
    /// On startup:
    /// 1. Validate config
    /// 2. Open/create the data directory
    /// 3. Load the roster slot (policy decides what malformed content means)
    pub fn open(config: Config) -> Result<Self> {
        let store = Store::open(&config)?;
        Self::with_store(config, store)
    }

    /// Open over an explicit slot backend
    pub fn with_backend(config: Config, backend: Box<dyn SlotBackend>) -> Result<Self> {
        config.validate()?;
        let store = Store::with_backend(backend, config.slot.trim().to_string());
        Self::with_store(config, store)
    }

    fn with_store(config: Config, store: Store) -> Result<Self> {
        let roster = store.load_roster(config.load_policy)?;

        tracing::info!(
            slot = %store.slot(),
            members = roster.len(),
            "Roster engine ready"
        );

        Ok(Self {
            rules: ValidationRules::from(&config),
            ids: IdGenerator::new(config.id_strategy),
            config,
            store,
            roster,
            sort_state: SortState::new(),
            observers: Vec::new(),
        })
    }

    /// Register a presentation layer
    pub fn subscribe(&mut self, observer: Box<dyn RosterObserver>) {
        self.observers.push(observer);
    }

    /// Execute an intent
    ///
    /// Routes intents to the matching hook. `Help` and `Quit` are handled
    /// by the presentation layer and produce `Outcome::Nothing`.
    pub fn execute(&mut self, intent: Intent) -> Result<Outcome> {
        match intent {
            Intent::List => Ok(Outcome::Listing(self.members().to_vec())),
            Intent::Show { id } => Ok(Outcome::Member(self.on_edit(&id)?.clone())),
            Intent::Submit { draft } => Ok(Outcome::Added(self.on_submit(&draft)?)),
            Intent::Edit { id, patch } => Ok(Outcome::Updated(self.on_update(&id, &patch)?)),
            Intent::Delete { id } => Ok(Outcome::Deleted(self.on_delete(&id)?)),
            Intent::Sort { key } => {
                let (direction, members) = self.on_sort(key);
                Ok(Outcome::Sorted {
                    key,
                    direction,
                    members,
                })
            }
            Intent::Filter { filter } => Ok(Outcome::Listing(self.on_filter(filter))),
            Intent::Help | Intent::Quit => Ok(Outcome::Nothing),
        }
    }

    // =========================================================================
    // Presentation Hooks
    // =========================================================================

    /// The record to prefill an edit form with
    pub fn on_edit(&self, id: &MemberId) -> Result<&Member> {
        self.roster.get(id)
    }

    /// Add a new member from a submitted form
    pub fn on_submit(&mut self, draft: &MemberDraft) -> Result<Member> {
        let (next, member) = self.roster.add(draft, &self.rules, &self.ids)?;
        self.commit(next)?;

        tracing::info!(id = %member.id, "Member added");
        Ok(member)
    }

    /// Apply an edit form to an existing member
    pub fn on_update(&mut self, id: &MemberId, patch: &MemberPatch) -> Result<Member> {
        let (next, member) = self.roster.update(id, patch, &self.rules).inspect_err(|e| {
            tracing::debug!(%id, error = %e, "Update rejected");
        })?;
        self.commit(next)?;

        tracing::info!(%id, "Member updated");
        Ok(member)
    }

    /// Delete a member (caller has obtained confirmation)
    pub fn on_delete(&mut self, id: &MemberId) -> Result<Member> {
        let (next, removed) = self.roster.delete(id).inspect_err(|_| {
            tracing::warn!(%id, "Delete of unknown member ignored");
        })?;
        self.commit(next)?;

        tracing::info!(%id, "Member deleted");
        Ok(removed)
    }

    /// Sort by `key`, toggling direction on each call for the same key
    pub fn on_sort(&mut self, key: SortKey) -> (Direction, Vec<Member>) {
        let direction = self.sort_state.toggle(key);
        tracing::debug!(%key, %direction, "Sorting roster");
        (direction, self.roster.sorted(key, direction))
    }

    /// Members matching `filter`, canonical order
    pub fn on_filter(&self, filter: StatusFilter) -> Vec<Member> {
        self.roster.filtered(filter)
    }

    /// Remove every member and the slot itself
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.roster = Roster::new();
        self.sort_state.reset();
        self.notify();
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Persist `next`, then make it the canonical roster
    fn commit(&mut self, next: Roster) -> Result<()> {
        self.store.save(next.members())?;
        self.roster = next;
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.roster_changed(self.roster.members());
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Canonical members, insertion order
    pub fn members(&self) -> &[Member] {
        self.roster.members()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort_state
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
