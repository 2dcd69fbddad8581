//! Queries over a loaded roster.
//!
//! Every query borrows a [`Roster`] and returns an owned result; nothing is
//! cached or mutated between calls, so the same roster can be queried any
//! number of times with identical answers.
//!
//! Name lookups use the full name (`first last`) as the key. When two records
//! share a full name, the first one in file order wins.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::data::parser::Roster;
use crate::data::record::{Record, Role};
use crate::error::RosterError;
use crate::Result;

use super::options::{CohortFilter, RosterGroup};

/// One row of the full projection: `(full_name, house, advisor, role_or_cohort)`.
pub type PersonRow = (String, String, String, String);

/// The seven grouped rosters, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseRosters {
    pub dumbledores_army: Vec<String>,
    pub gryffindor: Vec<String>,
    pub hufflepuff: Vec<String>,
    pub ravenclaw: Vec<String>,
    pub slytherin: Vec<String>,
    pub ghosts: Vec<String>,
    pub instructors: Vec<String>,
}

impl HouseRosters {
    /// Names in one group.
    pub fn get(&self, group: RosterGroup) -> &[String] {
        match group {
            RosterGroup::DumbledoresArmy => &self.dumbledores_army,
            RosterGroup::Gryffindor => &self.gryffindor,
            RosterGroup::Hufflepuff => &self.hufflepuff,
            RosterGroup::Ravenclaw => &self.ravenclaw,
            RosterGroup::Slytherin => &self.slytherin,
            RosterGroup::Ghosts => &self.ghosts,
            RosterGroup::Instructors => &self.instructors,
        }
    }

    fn get_mut(&mut self, group: RosterGroup) -> &mut Vec<String> {
        match group {
            RosterGroup::DumbledoresArmy => &mut self.dumbledores_army,
            RosterGroup::Gryffindor => &mut self.gryffindor,
            RosterGroup::Hufflepuff => &mut self.hufflepuff,
            RosterGroup::Ravenclaw => &mut self.ravenclaw,
            RosterGroup::Slytherin => &mut self.slytherin,
            RosterGroup::Ghosts => &mut self.ghosts,
            RosterGroup::Instructors => &mut self.instructors,
        }
    }

    /// Iterate `(group, names)` in fixed output order.
    pub fn iter(&self) -> impl Iterator<Item = (RosterGroup, &[String])> + '_ {
        RosterGroup::ALL.into_iter().map(move |g| (g, self.get(g)))
    }

    /// The seven rosters as plain lists, in fixed output order.
    pub fn into_lists(self) -> Vec<Vec<String>> {
        vec![
            self.dumbledores_army,
            self.gryffindor,
            self.hufflepuff,
            self.ravenclaw,
            self.slytherin,
            self.ghosts,
            self.instructors,
        ]
    }

    /// Total number of names across all groups.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, names)| names.len()).sum()
    }
}

/// Group a record belongs to, if any.
///
/// A canonical house wins over the role; only houseless (or non-canonical)
/// records fall through to the ghost and instructor checks. Students without
/// a canonical house land in no group.
pub fn classify(record: &Record) -> Option<RosterGroup> {
    if let Some(group) = RosterGroup::from_house(&record.house) {
        return Some(group);
    }
    match record.role {
        Role::Ghost => Some(RosterGroup::Ghosts),
        Role::Instructor => Some(RosterGroup::Instructors),
        Role::Student { .. } => None,
    }
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

impl Roster {
    /// Distinct non-empty house names.
    pub fn houses(&self) -> BTreeSet<String> {
        tracing::trace!(records = self.len(), "Querying houses");
        self.iter()
            .filter(|r| r.has_house())
            .map(|r| r.house.clone())
            .collect()
    }

    /// Full names of students, optionally limited to one cohort, sorted ascending.
    ///
    /// Ghosts and instructors are never included. An unknown cohort yields an
    /// empty list.
    pub fn students(&self, filter: &CohortFilter) -> Vec<String> {
        tracing::trace!(cohort = %filter, "Querying students");
        sorted(
            self.iter()
                .filter(|r| r.role.cohort().is_some_and(|c| filter.matches(c)))
                .map(Record::full_name)
                .collect(),
        )
    }

    /// The seven grouped rosters: five houses, ghosts, instructors.
    pub fn grouped(&self) -> HouseRosters {
        tracing::trace!(records = self.len(), "Grouping rosters");
        let mut rosters = HouseRosters::default();
        for record in self {
            if let Some(group) = classify(record) {
                rosters.get_mut(group).push(record.full_name());
            }
        }
        for group in RosterGroup::ALL {
            rosters.get_mut(group).sort();
        }
        rosters
    }

    /// One `(full_name, house, advisor, role_or_cohort)` row per record, in file order.
    pub fn full_table(&self) -> Vec<PersonRow> {
        self.iter()
            .map(|r| {
                (
                    r.full_name(),
                    r.house.clone(),
                    r.advisor.clone(),
                    r.role_or_cohort().to_string(),
                )
            })
            .collect()
    }

    /// First record with the given full name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.iter().find(|r| r.has_full_name(name))
    }

    /// Raw `role_or_cohort` of the first person with this full name.
    ///
    /// Returns `None` when nobody matches; a miss is not an error. The value
    /// is returned as-is, so staff and ghosts yield `"I"` and `"G"`.
    pub fn cohort_for(&self, name: &str) -> Option<&str> {
        tracing::trace!(name, "Looking up cohort");
        self.find(name).map(Record::role_or_cohort)
    }

    /// Last names that occur on two or more records.
    pub fn duplicate_last_names(&self) -> BTreeSet<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut dupes = BTreeSet::new();
        for record in self {
            if !seen.insert(record.last_name.as_str()) {
                dupes.insert(record.last_name.clone());
            }
        }
        dupes
    }

    /// Everyone sharing both house and `role_or_cohort` with the named person.
    ///
    /// The person is resolved by full name (first match in file order) and
    /// their own name is excluded from the result. Matching is literal field
    /// equality, so a person with no house gets everyone else with no house
    /// and the same role field.
    ///
    /// # Errors
    ///
    /// [`RosterError::PersonNotFound`] if no record has this full name.
    pub fn housemates_for(&self, name: &str) -> Result<BTreeSet<String>> {
        let person = self
            .find(name)
            .ok_or_else(|| RosterError::PersonNotFound(name.to_string()))?;
        tracing::trace!(name, house = %person.house, "Looking up housemates");

        Ok(self
            .iter()
            .filter(|r| r.house == person.house && r.role == person.role)
            .filter(|r| !r.has_full_name(name))
            .map(Record::full_name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Harry|Potter|Gryffindor|McGonagall|Fall 2015
Ron|Weasley|Gryffindor|McGonagall|Fall 2015
Hermione|Granger|Gryffindor|McGonagall|Fall 2015
Ginny|Weasley|Gryffindor|McGonagall|Spring 2016
Cho|Chang|Ravenclaw|Flitwick|Fall 2015
Draco|Malfoy|Slytherin|Snape|Winter 2016
Hannah|Abbott|Hufflepuff|Sprout|Winter 2016
Neville|Longbottom|Dumbledore's Army|Sprout|Summer 2016
Fred|Weasley|Dumbledore's Army|McGonagall|Summer 2016
Minerva|McGonagall|||I
Severus|Snape|Slytherin||I
Nearly Headless|Nick|||G
The Fat|Friar|Hufflepuff||G
Luna|Lovegood|||Fall 2015
";

    fn sample() -> Roster {
        Roster::parse(SAMPLE).unwrap()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_houses_excludes_empty() {
        let houses = sample().houses();
        assert_eq!(
            houses,
            set(&[
                "Dumbledore's Army",
                "Gryffindor",
                "Hufflepuff",
                "Ravenclaw",
                "Slytherin"
            ])
        );
        assert!(!houses.contains(""));
    }

    #[test]
    fn test_houses_keeps_non_canonical_names() {
        let roster = Roster::parse("A|B|Durmstrang|X|Fall 2015").unwrap();
        assert_eq!(roster.houses(), set(&["Durmstrang"]));
    }

    #[test]
    fn test_students_all() {
        let students = sample().students(&CohortFilter::All);
        assert_eq!(
            students,
            vec![
                "Cho Chang",
                "Draco Malfoy",
                "Fred Weasley",
                "Ginny Weasley",
                "Hannah Abbott",
                "Harry Potter",
                "Hermione Granger",
                "Luna Lovegood",
                "Neville Longbottom",
                "Ron Weasley",
            ]
        );
    }

    #[test]
    fn test_students_by_cohort() {
        let roster = sample();
        assert_eq!(
            roster.students(&CohortFilter::only("Fall 2015")),
            vec![
                "Cho Chang",
                "Harry Potter",
                "Hermione Granger",
                "Luna Lovegood",
                "Ron Weasley"
            ]
        );
        assert_eq!(
            roster.students(&CohortFilter::only("Winter 2016")),
            vec!["Draco Malfoy", "Hannah Abbott"]
        );
    }

    #[test]
    fn test_students_unknown_cohort_is_empty() {
        assert!(sample()
            .students(&CohortFilter::only("fall 2015"))
            .is_empty());
    }

    #[test]
    fn test_students_never_include_staff_markers() {
        // Filtering on a marker still draws only from students
        let roster = sample();
        assert!(roster.students(&CohortFilter::only("I")).is_empty());
        assert!(roster.students(&CohortFilter::only("G")).is_empty());
    }

    #[test]
    fn test_grouped_order_and_sorting() {
        let rosters = sample().grouped();
        assert_eq!(
            rosters.gryffindor,
            vec![
                "Ginny Weasley",
                "Harry Potter",
                "Hermione Granger",
                "Ron Weasley"
            ]
        );
        assert_eq!(
            rosters.dumbledores_army,
            vec!["Fred Weasley", "Neville Longbottom"]
        );
        assert_eq!(rosters.ravenclaw, vec!["Cho Chang"]);
        assert_eq!(rosters.ghosts, vec!["Nearly Headless Nick"]);
        assert_eq!(rosters.instructors, vec!["Minerva McGonagall"]);

        let lists = rosters.into_lists();
        assert_eq!(lists.len(), 7);
        for list in &lists {
            let mut sorted = list.clone();
            sorted.sort();
            assert_eq!(&sorted, list);
        }
    }

    #[test]
    fn test_grouped_house_beats_role() {
        let rosters = sample().grouped();
        // Snape is an instructor with a house, so he is filed under the house
        assert_eq!(rosters.slytherin, vec!["Draco Malfoy", "Severus Snape"]);
        assert!(!rosters.instructors.contains(&"Severus Snape".to_string()));
        // Same for a ghost with a house
        assert_eq!(rosters.hufflepuff, vec!["Hannah Abbott", "The Fat Friar"]);
        assert!(!rosters.ghosts.contains(&"The Fat Friar".to_string()));
    }

    #[test]
    fn test_grouped_houseless_student_in_no_group() {
        let rosters = sample().grouped();
        let luna = "Luna Lovegood".to_string();
        assert!(rosters.iter().all(|(_, names)| !names.contains(&luna)));
        // Everyone else is placed exactly once
        assert_eq!(rosters.total(), sample().len() - 1);
    }

    #[test]
    fn test_grouped_disjoint_and_idempotent() {
        let roster = sample();
        let first = roster.grouped();
        assert_eq!(first, roster.grouped());

        let mut seen = HashSet::new();
        for (_, names) in first.iter() {
            for name in names {
                assert!(seen.insert(name.clone()), "{name} in two rosters");
            }
        }
    }

    #[test]
    fn test_full_table_preserves_order_and_fields() {
        let roster = sample();
        let table = roster.full_table();
        assert_eq!(table.len(), roster.len());
        assert_eq!(
            table[0],
            (
                "Harry Potter".to_string(),
                "Gryffindor".to_string(),
                "McGonagall".to_string(),
                "Fall 2015".to_string()
            )
        );
        assert_eq!(
            table[11],
            (
                "Nearly Headless Nick".to_string(),
                String::new(),
                String::new(),
                "G".to_string()
            )
        );
        assert_eq!(table.last().unwrap().0, "Luna Lovegood");
    }

    #[test]
    fn test_cohort_for() {
        let roster = sample();
        assert_eq!(roster.cohort_for("Harry Potter"), Some("Fall 2015"));
        assert_eq!(roster.cohort_for("Hannah Abbott"), Some("Winter 2016"));
        assert_eq!(roster.cohort_for("Severus Snape"), Some("I"));
        assert_eq!(roster.cohort_for("Someone else"), None);
    }

    #[test]
    fn test_cohort_for_first_match_wins() {
        let roster = Roster::parse(
            "Padma|Patil|Ravenclaw|Flitwick|Fall 2015\nPadma|Patil|Gryffindor|McGonagall|Spring 2016",
        )
        .unwrap();
        assert_eq!(roster.cohort_for("Padma Patil"), Some("Fall 2015"));
    }

    #[test]
    fn test_duplicate_last_names() {
        let input = ["A", "B", "A", "C", "B", "B"]
            .iter()
            .enumerate()
            .map(|(i, last)| format!("P{i}|{last}|||Fall 2015"))
            .collect::<Vec<_>>()
            .join("\n");
        let roster = Roster::parse(&input).unwrap();
        assert_eq!(roster.duplicate_last_names(), set(&["A", "B"]));
    }

    #[test]
    fn test_duplicate_last_names_sample() {
        assert_eq!(sample().duplicate_last_names(), set(&["Weasley"]));
    }

    #[test]
    fn test_housemates_basic() {
        let roster = Roster::parse(
            "Harry|Potter|Gryffindor|McGonagall|Fall 2015\nRon|Weasley|Gryffindor|McGonagall|Fall 2015",
        )
        .unwrap();
        assert_eq!(
            roster.housemates_for("Harry Potter").unwrap(),
            set(&["Ron Weasley"])
        );
    }

    #[test]
    fn test_housemates_same_house_and_cohort_only() {
        let mates = sample().housemates_for("Hermione Granger").unwrap();
        // Ginny is Gryffindor but a different cohort; Cho is the same cohort
        // but a different house
        assert_eq!(mates, set(&["Harry Potter", "Ron Weasley"]));
        assert!(!mates.contains("Hermione Granger"));
    }

    #[test]
    fn test_housemates_symmetric() {
        let roster = sample();
        for record in &roster {
            let name = record.full_name();
            for mate in roster.housemates_for(&name).unwrap() {
                assert!(
                    roster.housemates_for(&mate).unwrap().contains(&name),
                    "{mate} should list {name}"
                );
            }
        }
    }

    #[test]
    fn test_housemates_empty_house_matches_empty_house() {
        let roster = Roster::parse(
            "Luna|Lovegood|||Fall 2015\nXeno|Lovegood|||Fall 2015\nDean|Thomas|||Spring 2016",
        )
        .unwrap();
        assert_eq!(
            roster.housemates_for("Luna Lovegood").unwrap(),
            set(&["Xeno Lovegood"])
        );
    }

    #[test]
    fn test_housemates_first_match_wins() {
        let roster = Roster::parse(
            "\
Padma|Patil|Ravenclaw|Flitwick|Fall 2015
Padma|Patil|Gryffindor|McGonagall|Spring 2016
Cho|Chang|Ravenclaw|Flitwick|Fall 2015
Ginny|Weasley|Gryffindor|McGonagall|Spring 2016
",
        )
        .unwrap();
        let mates = roster.housemates_for("Padma Patil").unwrap();
        // Resolved from the Ravenclaw record, never the later Gryffindor one
        assert_eq!(mates, set(&["Cho Chang"]));
        assert!(!mates.contains("Padma Patil"));
    }

    #[test]
    fn test_housemates_unknown_person() {
        let err = sample().housemates_for("Someone else").unwrap_err();
        match err {
            RosterError::PersonNotFound(name) => assert_eq!(name, "Someone else"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_classify() {
        let houseless_student = Record::new("Luna", "Lovegood", "", "", "Fall 2015");
        let odd_house_ghost = Record::new("Grey", "Lady", "Durmstrang", "", "G");
        assert_eq!(classify(&houseless_student), None);
        assert_eq!(classify(&odd_house_ghost), Some(RosterGroup::Ghosts));
    }
}
