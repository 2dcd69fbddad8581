//! Table-ready data structures for roster output.
//!
//! This module provides `RosterTable`, a presentation-ready data structure
//! that can be printed directly or serialized to JSON.
//!
//! The data flow is:
//! 1. Raw Data (Roster)
//! 2. Query results (filtered, grouped, sorted)
//! 3. RosterTable (formatted strings for display)
//!
//! RosterTable is a pure presentation layer - it only formats data, no
//! filtering or sorting logic. All computation happens in the query layer.

use serde::{Deserialize, Serialize};

use crate::query::queryset::{HouseRosters, PersonRow};

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (person name, group name, "Total (N people)", etc.)
    pub label: String,
    /// Values for each remaining column (as strings, ready for display)
    pub values: Vec<String>,
}

/// Table-ready roster data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTable {
    /// Optional title (e.g., "Students: Fall 2015")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers: [label_header, column1, column2, ...]
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<TableRow>,
    /// Summary/footer row
    pub footer: TableRow,
}

impl RosterTable {
    /// Full projection: one row per person.
    pub fn from_people(people: &[PersonRow]) -> Self {
        let rows = people
            .iter()
            .map(|(name, house, advisor, cohort)| TableRow {
                label: name.clone(),
                values: vec![house.clone(), advisor.clone(), cohort.clone()],
            })
            .collect();

        RosterTable {
            title: None,
            headers: vec![
                "Name".to_string(),
                "House".to_string(),
                "Advisor".to_string(),
                "Cohort".to_string(),
            ],
            rows,
            footer: footer(count_label(people.len(), "person", "people"), 3),
        }
    }

    /// Single-column listing of names.
    pub fn from_names<'a>(
        title: impl Into<String>,
        names: impl IntoIterator<Item = &'a String>,
    ) -> Self {
        let rows: Vec<TableRow> = names
            .into_iter()
            .map(|name| TableRow {
                label: name.clone(),
                values: Vec::new(),
            })
            .collect();
        let total = rows.len();

        RosterTable {
            title: Some(title.into()),
            headers: vec!["Name".to_string()],
            rows,
            footer: footer(count_label(total, "name", "names"), 0),
        }
    }

    /// One row per group with its member count.
    pub fn from_groups(rosters: &HouseRosters) -> Self {
        let rows = rosters
            .iter()
            .map(|(group, names)| TableRow {
                label: group.label().to_string(),
                values: vec![names.len().to_string()],
            })
            .collect();

        RosterTable {
            title: None,
            headers: vec!["Group".to_string(), "Members".to_string()],
            rows,
            footer: TableRow {
                label: "Total".to_string(),
                values: vec![rosters.total().to_string()],
            },
        }
    }

    /// Column widths needed to align every cell, label column first.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows.iter().chain(std::iter::once(&self.footer)) {
            let cells = std::iter::once(&row.label).chain(row.values.iter());
            for (i, cell) in cells.enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

/// "Total (N units)" label.
fn count_label(count: usize, singular: &str, plural: &str) -> String {
    let unit = if count == 1 { singular } else { plural };
    format!("Total ({} {})", count, unit)
}

/// Footer row with empty value cells.
fn footer(label: String, value_columns: usize) -> TableRow {
    TableRow {
        label,
        values: vec![String::new(); value_columns],
    }
}
