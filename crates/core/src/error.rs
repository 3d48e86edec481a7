//! Centralized error types for the Roster workspace.

use thiserror::Error;

/// Top-level error enum.
///
/// The transformation operations are total and never produce one of these;
/// errors only arise at the parsing edge of the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RosterError {
    #[error("Unknown right: {0:?}")]
    UnknownRight(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
