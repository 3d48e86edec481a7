//! Domain model for Roster: users, access rights, and error definitions.
//!
//! Foundation crate -- no I/O or logging dependencies.

pub mod error;
pub mod types;

pub use error::{RosterError, RosterResult};
pub use types::{Right, User};
