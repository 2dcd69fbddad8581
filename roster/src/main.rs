//! # roster
//!
//! A CLI for querying pipe-delimited house roster files.
//!
//! ## Overview
//!
//! roster is built on top of rosterlib. It loads the roster file once per
//! invocation and prints the answer to a single query, either as an aligned
//! text table or as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Houses on file (reads ./cohort_data.txt by default)
//! roster houses
//!
//! # Students in one cohort
//! roster --file data/cohort_data.txt students --cohort "Fall 2015"
//!
//! # Grouped rosters, or just their sizes
//! roster rosters
//! roster counts
//!
//! # Everything, as JSON
//! roster table --output json
//!
//! # Lookups
//! roster cohort "Harry Potter"
//! roster housemates "Hermione Granger"
//! roster dupes
//! ```
//!
//! The roster path comes from `--file`, then `ROSTER_FILE`, then
//! `cohort_data.txt` in the working directory.

mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use rosterlib::{CohortFilter, Roster, RosterTable};
use serde::Serialize;

use render::{COHORT_TEMPLATE, ROSTER_GROUPS_TEMPLATE, ROSTER_TABLE_TEMPLATE};

/// Roster file used when neither `--file` nor `ROSTER_FILE` is set
const DEFAULT_ROSTER_FILE: &str = "cohort_data.txt";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("roster")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Query pipe-delimited house roster files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .env("ROSTER_FILE")
                .default_value(DEFAULT_ROSTER_FILE)
                .global(true)
                .help("Roster file to read"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable debug logging on stderr"),
        )
        .subcommand(Command::new("houses").about("List distinct house names"))
        .subcommand(
            Command::new("students")
                .about("List students, sorted by name")
                .arg(
                    Arg::new("cohort")
                        .short('c')
                        .long("cohort")
                        .default_value(rosterlib::query::ALL_COHORTS)
                        .help("Only students in this cohort (exact match)"),
                ),
        )
        .subcommand(Command::new("rosters").about("Show house, ghost and instructor rosters"))
        .subcommand(Command::new("counts").about("Show the member count of each roster"))
        .subcommand(Command::new("table").about("Show every record"))
        .subcommand(
            Command::new("cohort")
                .about("Show the cohort of a person")
                .arg(Arg::new("name").required(true).help("Full name")),
        )
        .subcommand(Command::new("dupes").about("List last names used more than once"))
        .subcommand(
            Command::new("housemates")
                .about("List people sharing house and cohort with a person")
                .arg(Arg::new("name").required(true).help("Full name")),
        )
}

fn load_roster(matches: &ArgMatches) -> anyhow::Result<Roster> {
    let path = matches
        .get_one::<String>("file")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_FILE));
    Ok(Roster::load(path)?)
}

fn required_name(matches: &ArgMatches) -> anyhow::Result<&str> {
    matches
        .get_one::<String>("name")
        .map(|s| s.as_str())
        .context("missing name argument")
}

/// Raw data for structured output, a padded table otherwise
fn render_table(
    ctx: &CommandContext,
    data: &impl Serialize,
    table: RosterTable,
) -> HandlerResult<serde_json::Value> {
    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(data)?));
    }
    Ok(Output::Render(serde_json::to_value(
        render::table_context(&table),
    )?))
}

/// Handler for houses command
fn houses_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let roster = load_roster(matches)?;
    let houses = roster.houses();
    render_table(ctx, &houses, RosterTable::from_names("Houses", &houses))
}

/// Handler for students command
fn students_handler(
    matches: &ArgMatches,
    ctx: &CommandContext,
) -> HandlerResult<serde_json::Value> {
    let roster = load_roster(matches)?;
    let filter = CohortFilter::from(matches.get_one::<String>("cohort").map(|s| s.as_str()));
    let students = roster.students(&filter);
    let title = format!("Students: {}", filter);
    render_table(ctx, &students, RosterTable::from_names(title, &students))
}

/// Handler for rosters command
fn rosters_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let roster = load_roster(matches)?;
    let rosters = roster.grouped();

    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&rosters)?));
    }
    Ok(Output::Render(serde_json::to_value(
        render::groups_context(&rosters),
    )?))
}

/// Handler for counts command
fn counts_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let roster = load_roster(matches)?;
    let table = RosterTable::from_groups(&roster.grouped());
    render_table(ctx, &table, table.clone())
}

/// Handler for table command
fn table_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let roster = load_roster(matches)?;
    let table = RosterTable::from_people(&roster.full_table());
    render_table(ctx, &table, table.clone())
}

/// Handler for cohort command
///
/// An unknown name is an answer, not an error: `cohort` is null in JSON and
/// the text output reads "NAME: not found".
fn cohort_handler(matches: &ArgMatches, _ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let roster = load_roster(matches)?;
    let name = required_name(matches)?;
    let answer = render::CohortContext {
        name,
        cohort: roster.cohort_for(name),
    };
    Ok(Output::Render(serde_json::to_value(&answer)?))
}

/// Handler for dupes command
fn dupes_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let roster = load_roster(matches)?;
    let dupes = roster.duplicate_last_names();
    render_table(
        ctx,
        &dupes,
        RosterTable::from_names("Duplicate last names", &dupes),
    )
}

/// Handler for housemates command
fn housemates_handler(
    matches: &ArgMatches,
    ctx: &CommandContext,
) -> HandlerResult<serde_json::Value> {
    let roster = load_roster(matches)?;
    let name = required_name(matches)?;
    let mates = roster.housemates_for(name)?;
    let title = format!("Housemates of {}", name);
    render_table(ctx, &mates, RosterTable::from_names(title, &mates))
}

fn main() -> ExitCode {
    // --debug is global, so it may sit on either side of the subcommand
    logging::init(std::env::args().any(|arg| arg == "--debug"));

    let cmd = build_command();
    let theme = render::create_theme();

    let result = App::builder()
        .theme(theme)
        .command("houses", houses_handler, ROSTER_TABLE_TEMPLATE)
        .command("students", students_handler, ROSTER_TABLE_TEMPLATE)
        .command("rosters", rosters_handler, ROSTER_GROUPS_TEMPLATE)
        .command("counts", counts_handler, ROSTER_TABLE_TEMPLATE)
        .command("table", table_handler, ROSTER_TABLE_TEMPLATE)
        .command("cohort", cohort_handler, COHORT_TEMPLATE)
        .command("dupes", dupes_handler, ROSTER_TABLE_TEMPLATE)
        .command("housemates", housemates_handler, ROSTER_TABLE_TEMPLATE)
        .run_to_string(cmd, std::env::args());

    match result {
        RunResult::Handled(output) => {
            if output.starts_with("Error:") {
                tracing::debug!(%output, "Command failed");
                eprintln!("{}", output.trim_end());
                return ExitCode::FAILURE;
            }
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        RunResult::Binary(_, _) => {
            // No command produces binary output
            ExitCode::SUCCESS
        }
        RunResult::NoMatch(_) => {
            eprintln!("Error: no command given; see --help");
            ExitCode::FAILURE
        }
    }
}
