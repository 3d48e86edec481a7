//! Roster summary report.
//!
//! Takes a slice of users and produces a summary with age statistics,
//! last-name dominance, and how rights are spread across the roster.
//! Every figure is derived from the transformation operations in this crate.

use crate::group::{group_by_right, group_by_right_count};
use crate::query::distinct_rights;
use crate::stats::{average_age, most_frequent_last_name};
use roster_core::{Right, User};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterReport {
    pub total_users: usize,
    pub users_with_age: usize,
    /// Mean age, or `-1.0` when no user has an age.
    pub average_age: f64,
    pub most_frequent_last_name: Option<String>,
    pub distinct_rights: Vec<Right>,
    pub right_distribution: Vec<RightShare>,
    /// Rights held (duplicates counted) -> number of users holding that many.
    pub right_count_histogram: BTreeMap<usize, usize>,
}

/// How many users hold one right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RightShare {
    pub right: Right,
    pub holders: usize,
    /// `holders / total_users`, rounded to 2 decimals.
    pub share: f64,
}

impl RosterReport {
    /// Build a report from a roster.
    pub fn build(users: &[User]) -> Self {
        let total_users = users.len();
        let users_with_age = users.iter().filter(|u| u.age().is_some()).count();

        // Declaration order, rights nobody holds are omitted.
        let right_distribution: Vec<RightShare> = group_by_right(users)
            .into_iter()
            .map(|(right, holders)| {
                let share = holders.len() as f64 / total_users as f64;
                RightShare {
                    right,
                    holders: holders.len(),
                    share: (share * 100.0).round() / 100.0, // 2 decimal
                }
            })
            .collect();

        let right_count_histogram = group_by_right_count(users)
            .into_iter()
            .map(|(count, group)| (count, group.len()))
            .collect();

        let report = RosterReport {
            total_users,
            users_with_age,
            average_age: average_age(users),
            most_frequent_last_name: most_frequent_last_name(users).map(str::to_string),
            distinct_rights: distinct_rights(users),
            right_distribution,
            right_count_histogram,
        };

        tracing::debug!(
            total_users,
            users_with_age,
            distinct_rights = report.distinct_rights.len(),
            "built roster report"
        );
        report
    }

    /// Render the report as a formatted string.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let average = if self.users_with_age == 0 {
            "n/a".to_string()
        } else {
            format!("{:.2}", self.average_age)
        };
        let last_name = self.most_frequent_last_name.as_deref().unwrap_or("none");

        out.push_str("╔══════════════════════════════════════════════════════════════╗\n");
        out.push_str("║                        ROSTER REPORT                         ║\n");
        out.push_str("╠══════════════════════════════════════════════════════════════╣\n");
        out.push_str(&format!("║  Users:              {:>39} ║\n", self.total_users));
        out.push_str(&format!("║  With age:           {:>39} ║\n", self.users_with_age));
        out.push_str(&format!("║  Average age:        {:>39} ║\n", average));
        out.push_str(&format!("║  Common last name:   {:>39} ║\n", last_name));
        out.push_str("╠══════════════════════════════════════════════════════════════╣\n");

        if self.right_distribution.is_empty() {
            out.push_str("║  No rights granted.                                          ║\n");
        } else {
            out.push_str("║  RIGHTS                                                      ║\n");
            for share in &self.right_distribution {
                out.push_str(&format!(
                    "║    {:<8} {:>6} holders {:>6.0}%{:>26} ║\n",
                    share.right,
                    share.holders,
                    share.share * 100.0,
                    ""
                ));
            }
        }

        out.push_str("╚══════════════════════════════════════════════════════════════╝\n");
        out
    }
}
