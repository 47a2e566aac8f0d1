//! # Roster
//!
//! A membership roster manager with:
//! - Validated add / edit / delete of member records
//! - Stable sorting with a per-field direction toggle, and status filtering
//! - Whole-collection persistence to a named JSON storage slot
//! - A read-only directory panel fed by one HTTP fetch
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Presentation (CLI / shell)                   │
//! │        on_submit · on_edit · on_delete · on_sort · ...       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Intent
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │          (validate → mutate copy → save → swap)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┐
//!          │            │            │
//!          ▼            ▼            ▼
//!   ┌───────────┐ ┌───────────┐ ┌───────────┐
//!   │ Validator │ │  Roster   │ │   Store   │
//!   │  (pure)   │ │ (pure ops)│ │  (slot)   │
//!   └───────────┘ └───────────┘ └───────────┘
//!
//!   ┌───────────┐
//!   │ Directory │  one GET, display only
//!   └───────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod member;
pub mod validate;
pub mod roster;
pub mod storage;
pub mod intent;
pub mod engine;
pub mod directory;
pub mod view;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use engine::Engine;
pub use member::{Member, MemberDraft, MemberId, MemberPatch, Status};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Roster
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
