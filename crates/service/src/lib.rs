//! Stateless transformation operations over slices of [`User`], plus a roster
//! summary report built on top of them.
//!
//! Every operation is a pure function of its arguments: the input slice is
//! never mutated and results borrow from it wherever they are drawn from it.

pub mod filter;
pub mod group;
pub mod query;
pub mod report;
pub mod stats;

pub use filter::{convert_to, filter_by};
pub use group::{group_by_right, group_by_right_count, last_name_counts};
pub use query::{
    distinct_rights, first_names_reverse_sorted, first_update_user_older_than,
    sort_by_age_desc_and_name_asc,
};
pub use report::{RightShare, RosterReport};
pub use stats::{average_age, most_frequent_last_name};

pub use roster_core::{Right, User};
