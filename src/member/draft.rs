//! Candidate payloads
//!
//! Drafts carry raw form values; nothing here is validated.

use serde::{Deserialize, Serialize};

use super::Member;

/// A candidate record as entered by the user (add form)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub age: String,
    pub status: String,
}

impl MemberDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
            status: status.into(),
        }
    }
}

/// Partial change to an existing record (edit form)
///
/// Absent fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub status: Option<String>,
}

impl MemberPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none() && self.status.is_none()
    }

    /// Overlay this patch on a stored record's form values
    pub fn apply_to(&self, member: &Member) -> MemberDraft {
        let base = member.to_draft();
        MemberDraft {
            name: self.name.clone().unwrap_or(base.name),
            email: self.email.clone().unwrap_or(base.email),
            age: self.age.clone().unwrap_or(base.age),
            status: self.status.clone().unwrap_or(base.status),
        }
    }
}
