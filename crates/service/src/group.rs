//! Grouping and counting operations.
//!
//! Groupings borrow the users they bucket; bucket contents always keep the
//! input order.

use roster_core::{Right, User};
use std::collections::{BTreeMap, HashMap};

/// Buckets users by how many rights they hold (duplicates counted).
///
/// Keys iterate in ascending order.
pub fn group_by_right_count(users: &[User]) -> BTreeMap<usize, Vec<&User>> {
    let mut groups: BTreeMap<usize, Vec<&User>> = BTreeMap::new();
    for user in users {
        groups.entry(user.right_count()).or_default().push(user);
    }
    groups
}

/// Buckets users under every distinct right they hold.
///
/// A user holding N distinct rights appears in N buckets, once each; a
/// repeated right does not list the same user twice in its bucket.
pub fn group_by_right(users: &[User]) -> BTreeMap<Right, Vec<&User>> {
    let mut groups: BTreeMap<Right, Vec<&User>> = BTreeMap::new();
    for user in users {
        for (i, right) in user.rights().iter().enumerate() {
            if user.rights()[..i].contains(right) {
                continue;
            }
            groups.entry(*right).or_default().push(user);
        }
    }
    groups
}

/// Occurrences of each exact (case-sensitive) last name.
///
/// Users without a last name are not counted.
pub fn last_name_counts(users: &[User]) -> HashMap<&str, u64> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for last_name in users.iter().filter_map(User::last_name) {
        *counts.entry(last_name).or_default() += 1;
    }
    counts
}
