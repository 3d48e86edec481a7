//! Aggregate statistics over a roster.

use crate::group::last_name_counts;
use roster_core::User;

/// Returned by [`average_age`] when there is nothing to average.
pub const NO_AVERAGE: f64 = -1.0;

/// Arithmetic mean of the ages present in `users`.
///
/// Users without an age are left out of both the sum and the count. Returns
/// exactly [`NO_AVERAGE`] for an empty slice or when no user has an age.
pub fn average_age(users: &[User]) -> f64 {
    let (sum, count) = users
        .iter()
        .filter_map(User::age)
        .fold((0i64, 0u64), |(sum, count), age| (sum + i64::from(age), count + 1));

    if count == 0 {
        tracing::trace!(users = users.len(), "no ages to average");
        return NO_AVERAGE;
    }
    sum as f64 / count as f64
}

/// The last name that strictly dominates the roster.
///
/// Only returned when it occurs at least twice and no other last name shares
/// its count. Names are compared exactly, case included.
pub fn most_frequent_last_name(users: &[User]) -> Option<&str> {
    let mut best: Option<(&str, u64)> = None;
    let mut tied = false;

    for (name, count) in last_name_counts(users) {
        match best {
            Some((_, top)) if count < top => {}
            Some((_, top)) if count == top => tied = true,
            _ => {
                best = Some((name, count));
                tied = false;
            }
        }
    }

    match best {
        Some((name, count)) if count >= 2 && !tied => Some(name),
        Some((_, count)) => {
            tracing::trace!(count, tied, "no dominant last name");
            None
        }
        None => None,
    }
}
