//! Domain types for Roster.

use crate::error::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Right
// ---------------------------------------------------------------------------

/// An access right a user may hold.
///
/// Declaration order is significant: the derived `Ord` follows it, so every
/// map keyed by `Right` and every distinct-rights listing comes out as
/// `Create < Read < Update < Delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Right {
    Create = 0,
    Read = 1,
    Update = 2,
    Delete = 3,
}

impl Right {
    /// Every variant, in declaration order.
    pub const ALL: [Right; 4] = [Right::Create, Right::Read, Right::Update, Right::Delete];

    /// Upper-case wire name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Right::Create => "CREATE",
            Right::Read => "READ",
            Right::Update => "UPDATE",
            Right::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Right {
    type Err = RosterError;

    fn from_str(s: &str) -> RosterResult<Self> {
        Right::ALL
            .into_iter()
            .find(|right| right.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RosterError::UnknownRight(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Inline capacity covers a user holding every right without spilling.
pub type Rights = SmallVec<[Right; 4]>;

/// An immutable person record.
///
/// Fields are private and only reachable through accessors; `rights()` hands
/// out a shared slice, so the backing storage cannot be mutated once the
/// user exists. Equality and hashing are structural over all five fields,
/// including the order of `rights`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: Option<i64>,
    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<i32>,
    #[serde(default)]
    rights: Rights,
}

impl User {
    /// Builds a user from all five fields. No validation is performed.
    ///
    /// `rights` is copied into the user's own storage, so the caller's
    /// collection can change afterwards without affecting this value.
    pub fn new<I>(
        id: Option<i64>,
        first_name: Option<String>,
        last_name: Option<String>,
        age: Option<i32>,
        rights: I,
    ) -> Self
    where
        I: IntoIterator<Item = Right>,
    {
        Self {
            id,
            first_name,
            last_name,
            age,
            rights: rights.into_iter().collect(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    /// Rights in the order given at construction, duplicates included.
    pub fn rights(&self) -> &[Right] {
        &self.rights
    }

    #[inline]
    pub fn has_right(&self, right: Right) -> bool {
        self.rights.contains(&right)
    }

    /// Number of rights held, counting duplicates.
    #[inline]
    pub fn right_count(&self) -> usize {
        self.rights.len()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (id=",
            self.first_name().unwrap_or("-"),
            self.last_name().unwrap_or("-")
        )?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => f.write_str("-")?,
        }
        f.write_str(", age=")?;
        match self.age {
            Some(age) => write!(f, "{age}")?,
            None => f.write_str("-")?,
        }
        f.write_str(", rights=[")?;
        for (i, right) in self.rights.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{right}")?;
        }
        f.write_str("])")
    }
}

// Compile-time layout assertions.
const _: () = assert!(std::mem::size_of::<Right>() == 1);
