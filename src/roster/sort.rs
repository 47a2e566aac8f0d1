//! Sorting
//!
//! Stable, copy-returning sort by a named field, plus the direction toggle
//! that flips on each request for the same key.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;
use crate::member::Member;

/// Field a roster can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Email,
    Age,
    Status,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::Age => "age",
            SortKey::Status => "status",
        }
    }

    fn compare(&self, a: &Member, b: &Member) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Email => a.email.cmp(&b.email),
            SortKey::Age => a.age.cmp(&b.age),
            SortKey::Status => a.status.cmp(&b.status),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = RosterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "nama" => Ok(SortKey::Name),
            "email" => Ok(SortKey::Email),
            "age" | "umur" => Ok(SortKey::Age),
            "status" => Ok(SortKey::Status),
            other => Err(RosterError::Intent(format!(
                "unknown sort key {:?} (expected name, email, age or status)",
                other
            ))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("asc"),
            Direction::Descending => f.write_str("desc"),
        }
    }
}

/// Return a sorted copy of `members`
///
/// Stable in both directions: members with equal keys keep their
/// relative order.
pub fn sort_by_key(members: &[Member], key: SortKey, direction: Direction) -> Vec<Member> {
    let mut sorted = members.to_vec();
    match direction {
        Direction::Ascending => sorted.sort_by(|a, b| key.compare(a, b)),
        Direction::Descending => sorted.sort_by(|a, b| key.compare(b, a)),
    }
    sorted
}

/// Last direction used per sort key
///
/// Owned by whoever composes the operations; starts empty.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    directions: HashMap<SortKey, Direction>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the toggle for `key` and return the direction to use
    ///
    /// First request is ascending, each later one inverts the previous.
    pub fn toggle(&mut self, key: SortKey) -> Direction {
        let next = match self.directions.get(&key) {
            Some(previous) => previous.reversed(),
            None => Direction::Ascending,
        };
        self.directions.insert(key, next);
        next
    }

    /// Direction last used for `key`, if any
    pub fn current(&self, key: SortKey) -> Option<Direction> {
        self.directions.get(&key).copied()
    }

    pub fn reset(&mut self) {
        self.directions.clear();
    }
}
