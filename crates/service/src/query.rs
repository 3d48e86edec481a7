//! Ordering and lookup queries.

use roster_core::{Right, User};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// First names sorted descending by natural string order.
///
/// Users without a first name contribute nothing.
pub fn first_names_reverse_sorted(users: &[User]) -> Vec<&str> {
    let mut names: Vec<&str> = users.iter().filter_map(User::first_name).collect();
    names.sort_unstable_by(|a, b| b.cmp(a));
    names
}

/// Sorts by age descending, breaking ties by first name ascending.
///
/// Stable: users equal on both keys keep their input order. An absent age
/// sorts after every present one; an absent first name before every present one.
pub fn sort_by_age_desc_and_name_asc(users: &[User]) -> Vec<&User> {
    let mut sorted: Vec<&User> = users.iter().collect();
    sorted.sort_by(|a, b| by_age_desc(a, b).then_with(|| a.first_name().cmp(&b.first_name())));
    sorted
}

#[inline]
fn by_age_desc(a: &User, b: &User) -> Ordering {
    // `None < Some(_)`, so comparing reversed leaves absent ages last.
    b.age().cmp(&a.age())
}

/// Union of all rights across `users`, each once, in declaration order.
pub fn distinct_rights(users: &[User]) -> Vec<Right> {
    users
        .iter()
        .flat_map(|user| user.rights().iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// First user (in input order) holding [`Right::Update`] whose age is
/// strictly greater than `age`.
pub fn first_update_user_older_than(users: &[User], age: i32) -> Option<&User> {
    users
        .iter()
        .find(|user| user.has_right(Right::Update) && matches!(user.age(), Some(a) if a > age))
}
