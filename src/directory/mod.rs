//! Directory Module
//!
//! Read-only panel of public accounts fetched from a member-listing
//! endpoint (GitHub's `/users` by default).
//!
//! ## Responsibilities
//! - One blocking GET per `fetch()`; no retry, paging or caching
//! - Map each remote record's `login` / `html_url` / `type` into a row
//! - Report transport failures and non-success statuses as `Network`
//!
//! The directory never touches the roster or its slot.

mod client;

pub use client::DirectoryClient;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// A display row for one remote account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub handle: String,
    pub profile_url: String,
    pub account_type: String,
}

/// Shape of one record in the remote listing (extra fields ignored)
#[derive(Debug, Deserialize)]
struct RemoteAccount {
    login: String,
    html_url: String,
    #[serde(rename = "type")]
    kind: String,
}

impl From<RemoteAccount> for DirectoryEntry {
    fn from(remote: RemoteAccount) -> Self {
        Self {
            handle: remote.login,
            profile_url: remote.html_url,
            account_type: remote.kind,
        }
    }
}

/// Decode a listing body, preserving order
pub fn parse_listing(body: &[u8]) -> Result<Vec<DirectoryEntry>> {
    let accounts: Vec<RemoteAccount> = serde_json::from_slice(body)
        .map_err(|e| RosterError::Parse(format!("directory listing: {}", e)))?;
    Ok(accounts.into_iter().map(DirectoryEntry::from).collect())
}
