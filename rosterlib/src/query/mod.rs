//! Query processing: filter, group and look up records.
//!
//! This module handles the second stage of the pipeline - answering questions
//! about a parsed roster. It provides:
//!
//! - **Options**: Query configuration (`CohortFilter`, `RosterGroup`)
//! - **QuerySet**: Query operations on a loaded [`Roster`](crate::Roster)
//! - **By path**: One-shot entry points that load a file and run one query
//!
//! ## Example
//!
//! ```rust,ignore
//! use rosterlib::query::CohortFilter;
//!
//! let roster = Roster::load("cohort_data.txt")?;
//! let fall = roster.students(&CohortFilter::only("Fall 2015"));
//! let mates = roster.housemates_for("Harry Potter")?;
//! ```

pub mod by_path;
pub mod options;
pub mod queryset;

pub use by_path::{
    all_data, all_houses, all_names_by_house, find_duped_last_names, get_cohort_for,
    get_housemates_for, students_by_cohort,
};
pub use options::{CohortFilter, RosterGroup, ALL_COHORTS};
pub use queryset::{classify, HouseRosters, PersonRow};
