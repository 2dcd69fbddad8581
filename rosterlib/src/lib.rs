//! # rosterlib
//!
//! A query engine for pipe-delimited house roster files.
//!
//! ## Overview
//!
//! A roster file lists one person per line:
//!
//! ```text
//! first_name|last_name|house|advisor|role_or_cohort
//! ```
//!
//! The last field holds a cohort label for students, or `G` / `I` for ghosts
//! and instructors. This library parses the file once into typed records and
//! answers read-only questions about it:
//!
//! - **Houses**: the set of non-empty house names
//! - **Students**: sorted student names, optionally for one cohort
//! - **Grouped rosters**: five houses, ghosts and instructors
//! - **Full table**: `(full_name, house, advisor, role_or_cohort)` per line
//! - **Cohort lookup**: a person's cohort, or `None`
//! - **Duplicate surnames**: last names used more than once
//! - **Housemates**: people sharing house and cohort with someone
//!
//! ## Strict loading
//!
//! Loading is all-or-nothing. Every line must carry exactly five fields, so a
//! single short, long or blank line fails the whole load with
//! [`RosterError::MalformedRecord`], even for queries that never read the
//! missing field (such as [`Roster::houses`]).
//!
//! ## Example
//!
//! ```rust
//! use rosterlib::{CohortFilter, Roster};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("cohort_data.txt");
//! fs::write(&path, "\
//! Harry|Potter|Gryffindor|McGonagall|Fall 2015
//! Ron|Weasley|Gryffindor|McGonagall|Fall 2015
//! Ginny|Weasley|Gryffindor|McGonagall|Spring 2016
//! Severus|Snape|||I
//! ").unwrap();
//!
//! let roster = Roster::load(&path).unwrap();
//!
//! assert_eq!(roster.students(&CohortFilter::All).len(), 3);
//! assert_eq!(roster.cohort_for("Ginny Weasley"), Some("Spring 2016"));
//! assert!(roster.duplicate_last_names().contains("Weasley"));
//!
//! let mates = roster.housemates_for("Harry Potter").unwrap();
//! assert!(mates.contains("Ron Weasley"));
//! assert!(!mates.contains("Ginny Weasley"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;

pub use data::{parse_str, Record, Role, Roster, CANONICAL_HOUSES};
pub use error::RosterError;
pub use output::{RosterTable, TableRow};
pub use query::{
    all_data, all_houses, all_names_by_house, find_duped_last_names, get_cohort_for,
    get_housemates_for, students_by_cohort, CohortFilter, HouseRosters, PersonRow, RosterGroup,
};

/// Result type for rosterlib operations
pub type Result<T> = std::result::Result<T, RosterError>;
