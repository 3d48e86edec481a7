//! Predicate filtering and delimited rendering.

use roster_core::User;
use std::borrow::Cow;

/// Keeps the users that satisfy every predicate.
///
/// With no predicates the input slice itself is handed back as
/// [`Cow::Borrowed`]; otherwise the survivors are cloned in input order.
pub fn filter_by<'a>(users: &'a [User], predicates: &[&dyn Fn(&User) -> bool]) -> Cow<'a, [User]> {
    if predicates.is_empty() {
        return Cow::Borrowed(users);
    }

    let kept: Vec<User> = users
        .iter()
        .filter(|&user| predicates.iter().all(|predicate| predicate(user)))
        .cloned()
        .collect();

    tracing::debug!(
        users = users.len(),
        predicates = predicates.len(),
        kept = kept.len(),
        "filtered users"
    );
    Cow::Owned(kept)
}

/// Maps each user with `extract` and joins the results with `delimiter`.
///
/// `extract` may borrow from the user it is given, e.g. `|u| u.last_name().unwrap_or_default()`.
/// No trailing delimiter; an empty slice yields an empty string.
pub fn convert_to<'a, F, S>(users: &'a [User], delimiter: &str, mut extract: F) -> String
where
    F: FnMut(&'a User) -> S,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, user) in users.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(extract(user).as_ref());
    }
    out
}
