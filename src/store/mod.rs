//! Local persistence for agents and the live feed.
//!
//! Writes are fire-and-forget from the game's perspective: callers log
//! failures and keep going, so the worst case is a stale record, never a
//! crashed action.

pub mod roster_files;
pub mod snapshot;

pub use roster_files::RosterStore;
pub use snapshot::{load_snapshot, save_snapshot, ClassroomSnapshot};
