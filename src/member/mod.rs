//! Member Module
//!
//! The roster's single entity and the payloads used to create and change it.
//!
//! ## Stored Form
//! ```text
//! {"id":1,"name":"Budi","email":"budi@email.com","age":25,"status":"Active"}
//! ```
//!
//! Slots written by older front-ends use `nama`/`umur` and the statuses
//! `Aktif`/`Tidak Aktif`; both are accepted on read and never written.
//! Some of them also stored the age as a string (`"umur":"31"`).

mod id;
mod draft;

pub use id::{IdGenerator, MemberId};
pub use draft::{MemberDraft, MemberPatch};

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::validate::parse_age;

/// A committed member record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Assigned at creation, never changed
    pub id: MemberId,

    #[serde(alias = "nama")]
    pub name: String,

    pub email: String,

    #[serde(alias = "umur", deserialize_with = "deserialize_age")]
    pub age: u32,

    pub status: Status,
}

impl Member {
    /// Render the record back into form values (used to prefill edits)
    pub fn to_draft(&self) -> MemberDraft {
        MemberDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age.to_string(),
            status: self.status.to_string(),
        }
    }
}

/// Accept a JSON number or a numeric string for the stored age
fn deserialize_age<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredAge {
        Number(u32),
        Text(String),
    }

    match StoredAge::deserialize(deserializer)? {
        StoredAge::Number(age) => Ok(age),
        StoredAge::Text(raw) => parse_age(&raw, None)
            .map_err(|problem| de::Error::custom(format!("age {:?}: {:?}", raw, problem))),
    }
}

/// Membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(alias = "Aktif")]
    Active,

    #[serde(alias = "Tidak Aktif")]
    Inactive,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status {:?}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" | "aktif" => Ok(Status::Active),
            "inactive" | "tidak aktif" | "tidakaktif" => Ok(Status::Inactive),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}
