//! Intent Module
//!
//! User intents raised by a presentation layer, and their outcomes.
//!
//! ## Line Format (interactive shell)
//!
//! ```text
//! list
//! show   <id>
//! add    name=<v> email=<v> age=<v> status=<v>
//! edit   <id> [name=<v>] [email=<v>] [age=<v>] [status=<v>]
//! delete <id>
//! sort   <name|email|age|status>
//! filter <all|Active|Inactive>
//! help | quit
//! ```
//!
//! Values containing spaces are double-quoted: `name="Ani Putri"`.
//! Inside quotes, `\"` and `\\` escape a quote and a backslash.

mod parser;

pub use parser::{parse_intent, tokenize};

use crate::member::{Member, MemberDraft, MemberId, MemberPatch};
use crate::roster::{Direction, SortKey, StatusFilter};

/// A parsed user intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Show the roster in canonical order
    List,

    /// Show one member (edit form prefill)
    Show { id: MemberId },

    /// Submit a new member
    Submit { draft: MemberDraft },

    /// Change an existing member
    Edit { id: MemberId, patch: MemberPatch },

    /// Delete a member (confirmation already obtained)
    Delete { id: MemberId },

    /// Sort by key, toggling direction
    Sort { key: SortKey },

    /// Filter by status
    Filter { filter: StatusFilter },

    /// Print usage
    Help,

    /// Leave the shell
    Quit,
}

/// Result of executing an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An ordered listing to display
    Listing(Vec<Member>),

    /// A single member to display
    Member(Member),

    Added(Member),

    Updated(Member),

    Deleted(Member),

    /// A sorted listing with the direction that was applied
    Sorted {
        key: SortKey,
        direction: Direction,
        members: Vec<Member>,
    },

    /// Nothing to display
    Nothing,
}
