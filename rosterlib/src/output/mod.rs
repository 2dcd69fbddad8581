//! Output formatting: present query results as tables.
//!
//! This module handles the third and final stage of the pipeline -
//! formatting query results for display. It provides:
//!
//! - **RosterTable**: Table-ready data structure with headers, rows, and footer
//! - **TableRow**: Individual row with label and formatted values
//!
//! ## Example
//!
//! ```rust,ignore
//! use rosterlib::output::RosterTable;
//!
//! let table = RosterTable::from_people(&roster.full_table());
//! // table.headers: ["Name", "House", "Advisor", "Cohort"]
//! // table.footer: TableRow { label: "Total (42 people)", ... }
//! ```

pub mod table;

pub use table::{RosterTable, TableRow};
