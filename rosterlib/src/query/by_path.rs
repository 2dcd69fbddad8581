//! Path-based entry points.
//!
//! Each function reads and parses the file afresh, runs one query and drops
//! the roster. No state survives between calls. To run several queries over
//! the same file, load a [`Roster`] once and call its methods instead.

use std::collections::BTreeSet;
use std::path::Path;

use crate::data::parser::Roster;
use crate::Result;

use super::options::CohortFilter;
use super::queryset::{HouseRosters, PersonRow};

/// Distinct non-empty house names in the file.
///
/// # Example
///
/// ```rust
/// use rosterlib::all_houses;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("cohort_data.txt");
/// fs::write(&path, "Harry|Potter|Gryffindor|McGonagall|Fall 2015\nNearly Headless|Nick|||G\n").unwrap();
///
/// let houses = all_houses(&path).unwrap();
/// assert_eq!(houses.len(), 1);
/// assert!(houses.contains("Gryffindor"));
/// ```
pub fn all_houses(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(Roster::load(path)?.houses())
}

/// Sorted student full names, optionally limited to one cohort.
pub fn students_by_cohort(path: impl AsRef<Path>, cohort: &CohortFilter) -> Result<Vec<String>> {
    Ok(Roster::load(path)?.students(cohort))
}

/// The seven grouped rosters.
pub fn all_names_by_house(path: impl AsRef<Path>) -> Result<HouseRosters> {
    Ok(Roster::load(path)?.grouped())
}

/// Full projection, one row per line in file order.
pub fn all_data(path: impl AsRef<Path>) -> Result<Vec<PersonRow>> {
    Ok(Roster::load(path)?.full_table())
}

/// Cohort (raw `role_or_cohort`) of the first person with this full name.
pub fn get_cohort_for(path: impl AsRef<Path>, name: &str) -> Result<Option<String>> {
    Ok(Roster::load(path)?.cohort_for(name).map(str::to_string))
}

/// Last names appearing more than once.
pub fn find_duped_last_names(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(Roster::load(path)?.duplicate_last_names())
}

/// Housemates of the named person; fails if the name is not in the file.
///
/// # Example
///
/// ```rust
/// use rosterlib::get_housemates_for;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("cohort_data.txt");
/// fs::write(&path, "\
/// Harry|Potter|Gryffindor|McGonagall|Fall 2015
/// Ron|Weasley|Gryffindor|McGonagall|Fall 2015
/// ").unwrap();
///
/// let mates = get_housemates_for(&path, "Harry Potter").unwrap();
/// assert_eq!(mates.into_iter().collect::<Vec<_>>(), vec!["Ron Weasley"]);
/// assert!(get_housemates_for(&path, "Draco Malfoy").is_err());
/// ```
pub fn get_housemates_for(path: impl AsRef<Path>, name: &str) -> Result<BTreeSet<String>> {
    Roster::load(path)?.housemates_for(name)
}
