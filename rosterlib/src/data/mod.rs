//! Data loading: parse roster files into records.
//!
//! This module handles the first stage of the pipeline - turning raw roster
//! text into an immutable sequence of typed records. It provides:
//!
//! - **Records**: Core data structures (`Record`, `Role`)
//! - **Parsing**: The one shared parser (`parse_str`, `Roster::load`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use rosterlib::data::Roster;
//!
//! let roster = Roster::load("cohort_data.txt")?;
//! println!("{} people on file", roster.len());
//! ```

pub mod parser;
pub mod record;

pub use parser::{parse_line, parse_str, Roster, DELIMITER, FIELD_COUNT};
pub use record::{Record, Role, CANONICAL_HOUSES, GHOST_MARKER, INSTRUCTOR_MARKER};
