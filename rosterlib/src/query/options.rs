//! Input options for roster queries.
//!
//! This module contains the configuration types that control which records a
//! query selects and how grouped results are labelled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::record::CANONICAL_HOUSES;

/// Sentinel that selects every cohort.
pub const ALL_COHORTS: &str = "All";

/// Cohort filter for student listings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CohortFilter {
    /// Every student, whatever the cohort
    #[default]
    All,
    /// Students whose cohort label matches exactly (case and whitespace included)
    Only(String),
}

impl CohortFilter {
    /// Filter on a single cohort label.
    pub fn only(cohort: impl Into<String>) -> Self {
        CohortFilter::Only(cohort.into())
    }

    /// Check a student's cohort label against this filter.
    pub fn matches(&self, cohort: &str) -> bool {
        match self {
            CohortFilter::All => true,
            CohortFilter::Only(wanted) => wanted == cohort,
        }
    }
}

impl FromStr for CohortFilter {
    type Err = std::convert::Infallible;

    /// `"All"` means no filtering; any other text is an exact cohort label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_COHORTS {
            Ok(CohortFilter::All)
        } else {
            Ok(CohortFilter::Only(s.to_string()))
        }
    }
}

impl From<Option<&str>> for CohortFilter {
    fn from(cohort: Option<&str>) -> Self {
        match cohort {
            None | Some(ALL_COHORTS) => CohortFilter::All,
            Some(c) => CohortFilter::Only(c.to_string()),
        }
    }
}

impl fmt::Display for CohortFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CohortFilter::All => f.write_str(ALL_COHORTS),
            CohortFilter::Only(c) => f.write_str(c),
        }
    }
}

/// One of the seven grouped rosters.
///
/// Variants are declared in output order: the five houses, then ghosts,
/// then instructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RosterGroup {
    DumbledoresArmy,
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
    Ghosts,
    Instructors,
}

impl RosterGroup {
    /// All groups in fixed output order.
    pub const ALL: [RosterGroup; 7] = [
        RosterGroup::DumbledoresArmy,
        RosterGroup::Gryffindor,
        RosterGroup::Hufflepuff,
        RosterGroup::Ravenclaw,
        RosterGroup::Slytherin,
        RosterGroup::Ghosts,
        RosterGroup::Instructors,
    ];

    /// House groups, parallel to [`CANONICAL_HOUSES`].
    pub const HOUSES: [RosterGroup; 5] = [
        RosterGroup::DumbledoresArmy,
        RosterGroup::Gryffindor,
        RosterGroup::Hufflepuff,
        RosterGroup::Ravenclaw,
        RosterGroup::Slytherin,
    ];

    /// Position in [`RosterGroup::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// House group for an exact canonical house name.
    pub fn from_house(house: &str) -> Option<Self> {
        CANONICAL_HOUSES
            .iter()
            .position(|h| *h == house)
            .map(|i| Self::HOUSES[i])
    }

    /// Display label (house name, "Ghosts" or "Instructors").
    pub fn label(self) -> &'static str {
        match self {
            RosterGroup::Ghosts => "Ghosts",
            RosterGroup::Instructors => "Instructors",
            house => CANONICAL_HOUSES[house.index()],
        }
    }
}

impl fmt::Display for RosterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohort_filter_default() {
        assert_eq!(CohortFilter::default(), CohortFilter::All);
    }

    #[test]
    fn test_cohort_filter_from_str() {
        assert_eq!(CohortFilter::from_str("All").unwrap(), CohortFilter::All);
        assert_eq!(
            CohortFilter::from_str("Fall 2015").unwrap(),
            CohortFilter::only("Fall 2015")
        );
        // Sentinel is case-sensitive
        assert_eq!(
            CohortFilter::from_str("all").unwrap(),
            CohortFilter::only("all")
        );
    }

    #[test]
    fn test_cohort_filter_from_option() {
        assert_eq!(CohortFilter::from(None), CohortFilter::All);
        assert_eq!(CohortFilter::from(Some("All")), CohortFilter::All);
        assert_eq!(
            CohortFilter::from(Some("Winter 2016")),
            CohortFilter::only("Winter 2016")
        );
    }

    #[test]
    fn test_cohort_filter_matches_exactly() {
        let filter = CohortFilter::only("Fall 2015");
        assert!(filter.matches("Fall 2015"));
        assert!(!filter.matches("fall 2015"));
        assert!(!filter.matches("Fall 2015 "));
        assert!(CohortFilter::All.matches("anything"));
    }

    #[test]
    fn test_cohort_filter_display() {
        assert_eq!(CohortFilter::All.to_string(), "All");
        assert_eq!(CohortFilter::only("Spring 2016").to_string(), "Spring 2016");
    }

    #[test]
    fn test_group_order_and_labels() {
        let labels: Vec<&str> = RosterGroup::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Dumbledore's Army",
                "Gryffindor",
                "Hufflepuff",
                "Ravenclaw",
                "Slytherin",
                "Ghosts",
                "Instructors",
            ]
        );
        for (i, group) in RosterGroup::ALL.iter().enumerate() {
            assert_eq!(group.index(), i);
        }
    }

    #[test]
    fn test_group_from_house() {
        assert_eq!(
            RosterGroup::from_house("Hufflepuff"),
            Some(RosterGroup::Hufflepuff)
        );
        assert_eq!(
            RosterGroup::from_house("Dumbledore's Army"),
            Some(RosterGroup::DumbledoresArmy)
        );
        assert_eq!(RosterGroup::from_house("hufflepuff"), None);
        assert_eq!(RosterGroup::from_house(""), None);
        assert_eq!(RosterGroup::from_house("Ghosts"), None);
    }
}
