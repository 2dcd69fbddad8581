//! Template contexts and theme for text output.
//!
//! Handlers hand these contexts to outstanding, which renders them through
//! the minijinja templates under `templates/`. Cells are padded here so the
//! templates only iterate.

use console::Style;
use outstanding::Theme;
use rosterlib::{HouseRosters, RosterTable, TableRow};
use serde::Serialize;

/// Aligned table with a header, separator and footer
pub const ROSTER_TABLE_TEMPLATE: &str = include_str!("../templates/roster_table.jinja");

/// Headed, indented name lists
pub const ROSTER_GROUPS_TEMPLATE: &str = include_str!("../templates/roster_groups.jinja");

/// Single cohort answer, or "NAME: not found"
pub const COHORT_TEMPLATE: &str = include_str!("../templates/cohort.jinja");

/// Gap between table columns
const COLUMN_GAP: &str = "  ";

/// Data context for the table template
#[derive(Debug, Serialize)]
pub struct TableContext {
    /// Optional title above the table
    pub title: Option<String>,
    /// Pre-padded header line
    pub header: String,
    /// Separator line (dashes)
    pub separator: String,
    /// Pre-padded data rows
    pub rows: Vec<String>,
    /// Pre-padded footer row
    pub footer: String,
}

/// One heading and its members
#[derive(Debug, Serialize)]
pub struct GroupContext {
    /// Group label with member count, e.g. "Gryffindor (8)"
    pub heading: String,
    pub names: Vec<String>,
}

/// Data context for the groups template
#[derive(Debug, Serialize)]
pub struct GroupsContext {
    pub groups: Vec<GroupContext>,
    /// "Total (N people)"
    pub total: String,
}

/// Answer to a cohort lookup; `cohort` is `None` when nobody matched
#[derive(Debug, Serialize)]
pub struct CohortContext<'a> {
    pub name: &'a str,
    pub cohort: Option<&'a str>,
}

/// Create the theme with styles
pub fn create_theme() -> Theme {
    Theme::new()
        .add("category", Style::new().bold())
        .add("title", Style::new().bold().underlined())
}

/// Pad every cell of a table to its column width.
pub fn table_context(table: &RosterTable) -> TableContext {
    let widths = table.column_widths();

    let header = format_cells(table.headers.iter().map(String::as_str), &widths);
    let rows = table.rows.iter().map(|row| format_row(row, &widths)).collect();
    let footer = format_row(&table.footer, &widths);

    let separator_width =
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);

    TableContext {
        title: table.title.clone(),
        header,
        separator: "-".repeat(separator_width),
        rows,
        footer,
    }
}

/// Build the headed lists for the seven rosters.
pub fn groups_context(rosters: &HouseRosters) -> GroupsContext {
    let groups = rosters
        .iter()
        .map(|(group, names)| GroupContext {
            heading: format!("{} ({})", group.label(), names.len()),
            names: names.to_vec(),
        })
        .collect();

    let total = rosters.total();
    let unit = if total == 1 { "person" } else { "people" };

    GroupsContext {
        groups,
        total: format!("Total ({} {})", total, unit),
    }
}

fn format_row(row: &TableRow, widths: &[usize]) -> String {
    let cells = std::iter::once(row.label.as_str()).chain(row.values.iter().map(String::as_str));
    format_cells(cells, widths)
}

/// Left-align cells to `widths`, trimming trailing padding.
fn format_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = w))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}
