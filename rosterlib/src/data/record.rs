//! Core data structures for roster records.
//!
//! Each line of a roster file describes one person with five fields:
//!
//! ```text
//! first_name|last_name|house|advisor|role_or_cohort
//! ```
//!
//! The last field is overloaded in the file format: it holds a cohort label
//! (e.g. `Fall 2015`) for students, or the markers `G` (ghost) and `I`
//! (instructor) for everyone else. It is classified once, at parse time, into
//! a [`Role`] so that queries match on the variant rather than comparing
//! strings at every call site.

use serde::{Deserialize, Serialize};

/// The five canonical houses, in roster order.
pub const CANONICAL_HOUSES: [&str; 5] = [
    "Dumbledore's Army",
    "Gryffindor",
    "Hufflepuff",
    "Ravenclaw",
    "Slytherin",
];

/// Raw marker for ghosts in the `role_or_cohort` field.
pub const GHOST_MARKER: &str = "G";

/// Raw marker for instructors in the `role_or_cohort` field.
pub const INSTRUCTOR_MARKER: &str = "I";

/// Classification of the `role_or_cohort` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Role {
    /// A student, carrying the exact cohort label from the file
    Student { cohort: String },
    /// Marked `G`
    Ghost,
    /// Marked `I`
    Instructor,
}

impl Role {
    /// Classify a raw `role_or_cohort` value.
    ///
    /// Only the exact markers `G` and `I` are recognised; anything else,
    /// including the empty string, is taken as a cohort label.
    pub fn classify(raw: &str) -> Self {
        match raw {
            GHOST_MARKER => Role::Ghost,
            INSTRUCTOR_MARKER => Role::Instructor,
            cohort => Role::Student {
                cohort: cohort.to_string(),
            },
        }
    }

    /// The raw field text this role was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student { cohort } => cohort,
            Role::Ghost => GHOST_MARKER,
            Role::Instructor => INSTRUCTOR_MARKER,
        }
    }

    /// Cohort label, for students only.
    pub fn cohort(&self) -> Option<&str> {
        match self {
            Role::Student { cohort } => Some(cohort),
            _ => None,
        }
    }

    pub fn is_student(&self) -> bool {
        matches!(self, Role::Student { .. })
    }
}

/// One parsed line of a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    /// House name; empty when the person has no house
    pub house: String,
    pub advisor: String,
    /// Classified `role_or_cohort` field
    pub role: Role,
}

impl Record {
    /// Build a record from its five raw fields, classifying the role.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        house: impl Into<String>,
        advisor: impl Into<String>,
        role_or_cohort: &str,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            house: house.into(),
            advisor: advisor.into(),
            role: Role::classify(role_or_cohort),
        }
    }

    /// `first_name` and `last_name` joined by a single space.
    ///
    /// This is the informal identity key used by name lookups. It is not
    /// guaranteed unique; lookups resolve to the first match in file order.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Compare against a full name without allocating.
    pub fn has_full_name(&self, name: &str) -> bool {
        name.len() == self.first_name.len() + 1 + self.last_name.len()
            && name.starts_with(self.first_name.as_str())
            && name[self.first_name.len()..].starts_with(' ')
            && name.ends_with(self.last_name.as_str())
    }

    /// Raw `role_or_cohort` text as it appeared in the file.
    pub fn role_or_cohort(&self) -> &str {
        self.role.as_str()
    }

    pub fn has_house(&self) -> bool {
        !self.house.is_empty()
    }
}
