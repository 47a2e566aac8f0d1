//! Status filter

use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;
use crate::member::{Member, Status};

/// Which members a listing should include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, member: &Member) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => member.status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = RosterError;

    /// "all" (or the legacy "semua") or a status name
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("semua") {
            return Ok(StatusFilter::All);
        }
        trimmed
            .parse::<Status>()
            .map(StatusFilter::Only)
            .map_err(|e| RosterError::Intent(format!("{} (expected all, Active or Inactive)", e)))
    }
}

/// Members matching `filter`, in their original relative order
pub fn filter_by_status(members: &[Member], filter: StatusFilter) -> Vec<Member> {
    members.iter().filter(|m| filter.matches(m)).cloned().collect()
}
