//! Validator Module
//!
//! Side-effect-free checks run before any record is committed.
//!
//! ## Responsibilities
//! - Single-field predicates (name, email, age)
//! - Whole-candidate validation with one message per failing field
//! - Normalisation of accepted values (trimmed text, parsed age and status)
//!
//! Errors come back in field order (name, email, age, status) so a form can
//! route each message to the matching input.

mod fields;

pub use fields::{is_non_empty_name, is_positive_integer, is_valid_email, parse_age, AgeProblem};

use std::fmt;

use crate::config::Config;
use crate::member::{Member, MemberDraft, MemberId, Status};

/// Policy knobs for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Inclusive upper bound for age (None = unbounded)
    pub max_age: Option<u32>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self { max_age: Some(120) }
    }
}

impl From<&Config> for ValidationRules {
    fn from(config: &Config) -> Self {
        Self { max_age: config.max_age }
    }
}

/// Form field a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Age,
    Status,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
            Field::Status => "status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Ordered field-level failures for one candidate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message for one field, if it failed
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A candidate that passed every check, values normalised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMember {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub status: Status,
}

impl ValidMember {
    /// Attach an id, producing a committable record
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            status: self.status,
        }
    }
}

/// Validate a candidate record
///
/// Name and email are trimmed before checking and stored trimmed.
pub fn validate(
    draft: &MemberDraft,
    rules: &ValidationRules,
) -> std::result::Result<ValidMember, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if !is_non_empty_name(name) {
        errors.push(Field::Name, "name must not be empty");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.push(Field::Email, "email must not be empty");
    } else if !is_valid_email(email) {
        errors.push(Field::Email, "email format is invalid");
    }

    let age = match parse_age(&draft.age, rules.max_age) {
        Ok(age) => Some(age),
        Err(AgeProblem::NotANumber) => {
            errors.push(Field::Age, "age must be a number");
            None
        }
        Err(AgeProblem::NotPositiveInteger) => {
            errors.push(Field::Age, "age must be a positive integer");
            None
        }
        Err(AgeProblem::AboveMax(max)) => {
            errors.push(Field::Age, format!("age must be at most {}", max));
            None
        }
    };

    let status = if draft.status.trim().is_empty() {
        errors.push(Field::Status, "status must be selected");
        None
    } else {
        match draft.status.parse::<Status>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push(Field::Status, "status must be Active or Inactive");
                None
            }
        }
    };

    match (age, status) {
        (Some(age), Some(status)) if errors.is_empty() => Ok(ValidMember {
            name: name.to_string(),
            email: email.to_string(),
            age,
            status,
        }),
        _ => Err(errors),
    }
}
