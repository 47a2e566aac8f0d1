//! Member identifiers
//!
//! Ids are either sequential integers or opaque string tokens. Both forms
//! can live in the same slot; JSON numbers decode as `Seq`, strings as `Token`.
//!
//! Lookups compare the textual form, so a stored `"5"` is the same member
//! as `5` typed at the prompt.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::IdStrategy;
use super::Member;

/// Unique, immutable member identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberId {
    /// Sequential integer id
    Seq(u64),

    /// Opaque token (UUID v4 for ids minted here)
    Token(String),
}

impl MemberId {
    /// The integer value, for `Seq` and for tokens written as a canonical integer
    pub fn as_seq(&self) -> Option<u64> {
        match self {
            MemberId::Seq(n) => Some(*n),
            MemberId::Token(t) => t.parse::<u64>().ok().filter(|n| n.to_string() == *t),
        }
    }

    /// Whether both ids name the same member
    pub fn matches(&self, other: &MemberId) -> bool {
        match (self, other) {
            (MemberId::Token(a), MemberId::Token(b)) => a == b,
            _ => self.as_seq().is_some() && self.as_seq() == other.as_seq(),
        }
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberId::Seq(n) => write!(f, "{}", n),
            MemberId::Token(t) => f.write_str(t),
        }
    }
}

impl FromStr for MemberId {
    type Err = std::convert::Infallible;

    /// "42" → Seq(42), anything else (including "042") → Token
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => MemberId::Seq(n),
            _ => MemberId::Token(s.to_string()),
        })
    }
}

impl From<u64> for MemberId {
    fn from(n: u64) -> Self {
        MemberId::Seq(n)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        MemberId::Token(s.to_string())
    }
}

/// Mints ids that are unique within a given collection
#[derive(Debug, Clone, Copy)]
pub struct IdGenerator {
    strategy: IdStrategy,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Produce an id not used by any member in `existing`
    pub fn next_id(&self, existing: &[Member]) -> MemberId {
        match self.strategy {
            IdStrategy::Sequential => {
                // Non-numeric tokens don't participate; 1 for an empty roster
                let max = existing.iter().filter_map(|m| m.id.as_seq()).max().unwrap_or(0);
                match max.checked_add(1) {
                    Some(next) => MemberId::Seq(next),
                    None => MemberId::Seq(lowest_unused(existing)),
                }
            }
            IdStrategy::Uuid => loop {
                let candidate = MemberId::Token(Uuid::new_v4().to_string());
                if !existing.iter().any(|m| m.id.matches(&candidate)) {
                    break candidate;
                }
            },
        }
    }
}

/// Smallest positive integer id not taken; used once `u64::MAX` is in use
fn lowest_unused(existing: &[Member]) -> u64 {
    let used: HashSet<u64> = existing.iter().filter_map(|m| m.id.as_seq()).collect();
    let mut candidate = 1;
    while used.contains(&candidate) {
        candidate += 1;
    }
    candidate
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::Sequential)
    }
}
