//! Storage Module
//!
//! Durable key-value slots holding the whole roster as one JSON document.
//!
//! ## Responsibilities
//! - Load the roster on startup (absent slot → empty roster)
//! - Overwrite the slot wholesale on every save
//! - Detect malformed content and apply the configured `LoadPolicy`
//!
//! ## Slot Format
//! ```text
//! {data_dir}/{slot}.json
//! [
//!   {
//!     "id": 1,
//!     "name": "Budi",
//!     "email": "budi@email.com",
//!     "age": 25,
//!     "status": "Active"
//!   }
//! ]
//! ```
//!
//! No transactions: a failure between a mutation and its save leaves the
//! slot at the last saved state.

mod slot;
mod store;

pub use slot::{FileSlot, MemorySlot, SlotBackend};
pub use store::Store;
