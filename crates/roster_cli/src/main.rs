//! Command-line front end for `roster_core`.
//!
//! # Responsibility
//! - Parse flags/env into a database path and logging configuration.
//! - Run one person/department operation and print its JSON result.
//!
//! # Invariants
//! - Successful results go to stdout as one JSON document.
//! - Failures go to stderr as `error[<kind>]: <message>` with a non-zero exit.

use clap::{Parser, Subcommand};
use log::info;
use roster_core::db::{open_db, DbError};
use roster_core::db::seed::seed_department;
use roster_core::{
    default_log_level, init_logging, insert_person_flat_json, insert_person_json, LogLevel,
    PersonService, SqliteDepartmentRepository, SqlitePersonRepository,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Person/department roster")]
struct Cli {
    /// SQLite database file; created and migrated on first use.
    #[arg(long, env = "ROSTER_DB", default_value = "roster.sqlite3")]
    db: PathBuf,

    /// trace|debug|info|warn|error
    #[arg(long, env = "ROSTER_LOG_LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "ROSTER_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Insert a person from a nested JSON body (`-` reads stdin).
    Insert { body: String },
    /// Insert a person from a flattened JSON body with `departmentId`.
    InsertFlat { body: String },
    /// Print one person by id.
    Get { id: i64 },
    /// Print all persons.
    List,
    /// Print all departments.
    Departments,
    /// Provision or rename a department row.
    AddDepartment { id: i64, name: String },
}

#[derive(Debug)]
struct CliError {
    kind: &'static str,
    message: String,
}

impl CliError {
    fn new(kind: &'static str, err: impl std::fmt::Display) -> Self {
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<roster_core::ServiceError> for CliError {
    fn from(err: roster_core::ServiceError) -> Self {
        Self::new(err.kind(), err)
    }
}

impl From<roster_core::RepoError> for CliError {
    fn from(err: roster_core::RepoError) -> Self {
        Self::from(roster_core::ServiceError::from(err))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error[{}]: {}", err.kind, err.message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.unwrap_or_else(default_log_level);
        init_logging(level, log_dir).map_err(|err| CliError::new("config", err))?;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        roster_core::core_version()
    );

    let conn = open_db(&cli.db).map_err(|err| CliError::new("storage", err))?;
    let service = PersonService::new(
        SqlitePersonRepository::try_new(&conn)?,
        SqliteDepartmentRepository::try_new(&conn)?,
    );

    let output = match cli.command {
        Command::Insert { body } => insert_person_json(&service, &read_body(body)?)?,
        Command::InsertFlat { body } => insert_person_flat_json(&service, &read_body(body)?)?,
        Command::Get { id } => roster_core::api::encode(&service.find_by_id(id)?)?,
        Command::List => roster_core::api::encode(&service.find_all()?)?,
        Command::Departments => roster_core::api::encode(&service.departments()?)?,
        Command::AddDepartment { id, name } => {
            seed_department(&conn, id, &name).map_err(|err| match err {
                invalid @ DbError::InvalidDepartment(_) => CliError::new("validation", invalid),
                other => CliError::new("storage", other),
            })?;
            serde_json::json!({ "id": id, "name": name }).to_string()
        }
    };
    Ok(output)
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value.parse().map_err(|err: roster_core::LoggingError| err.to_string())
}

fn read_body(body: String) -> Result<String, CliError> {
    if body != "-" {
        return Ok(body);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| CliError::new("io", err))?;
    Ok(buffer)
}
