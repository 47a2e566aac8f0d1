//! Roster Module
//!
//! Pure operations over the member collection.
//!
//! ## Responsibilities
//! - Add, update and delete records (each returns a new `Roster`)
//! - Stable sort by field with a per-key direction toggle
//! - Filter by membership status
//!
//! ## Invariants
//! - Ids are unique within a roster
//! - Every record in a roster passed validation
//! - Insertion order is canonical; sort and filter work on copies
//!
//! A failed operation returns an error and leaves the source roster
//! untouched, so the caller's state is never partially updated.

mod sort;
mod filter;

pub use sort::{sort_by_key, Direction, SortKey, SortState};
pub use filter::{filter_by_status, StatusFilter};

use std::collections::HashSet;

use crate::error::{Result, RosterError};
use crate::member::{IdGenerator, Member, MemberDraft, MemberId, MemberPatch};
use crate::validate::{validate, ValidationRules};

/// The canonical, insertion-ordered member collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from stored records, rejecting duplicate ids
    ///
    /// `5` and `"5"` count as the same id.
    pub fn from_members(members: Vec<Member>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            if !seen.insert(member.id.to_string()) {
                return Err(RosterError::Parse(format!(
                    "duplicate member id {}",
                    member.id
                )));
            }
        }
        Ok(Self { members })
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Member> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: &MemberId) -> Result<&Member> {
        self.members
            .iter()
            .find(|m| m.id.matches(id))
            .ok_or_else(|| RosterError::NotFound(id.clone()))
    }

    fn position(&self, id: &MemberId) -> Result<usize> {
        self.members
            .iter()
            .position(|m| m.id.matches(id))
            .ok_or_else(|| RosterError::NotFound(id.clone()))
    }

    /// Validate a candidate, give it a fresh id and append it
    ///
    /// Returns the new roster and the committed record.
    pub fn add(
        &self,
        draft: &MemberDraft,
        rules: &ValidationRules,
        ids: &IdGenerator,
    ) -> Result<(Roster, Member)> {
        let valid = validate(draft, rules)?;
        let member = valid.into_member(ids.next_id(&self.members));

        let mut members = self.members.clone();
        members.push(member.clone());

        Ok((Roster { members }, member))
    }

    /// Replace a record's fields with the patched, validated values
    ///
    /// The id and the record's position are preserved.
    pub fn update(
        &self,
        id: &MemberId,
        patch: &MemberPatch,
        rules: &ValidationRules,
    ) -> Result<(Roster, Member)> {
        let index = self.position(id)?;
        let merged = patch.apply_to(&self.members[index]);
        let valid = validate(&merged, rules)?;
        let member = valid.into_member(self.members[index].id.clone());

        let mut members = self.members.clone();
        members[index] = member.clone();

        Ok((Roster { members }, member))
    }

    /// Remove a record
    ///
    /// Returns the new roster and the removed record.
    pub fn delete(&self, id: &MemberId) -> Result<(Roster, Member)> {
        let index = self.position(id)?;

        let mut members = self.members.clone();
        let removed = members.remove(index);

        Ok((Roster { members }, removed))
    }

    /// Sorted copy of the members
    pub fn sorted(&self, key: SortKey, direction: Direction) -> Vec<Member> {
        sort_by_key(&self.members, key, direction)
    }

    /// Filtered copy of the members
    pub fn filtered(&self, filter: StatusFilter) -> Vec<Member> {
        filter_by_status(&self.members, filter)
    }
}
