//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Repositories only accept connections migrated to the latest version.

pub mod department_repo;
pub mod person_repo;
mod schema;

use crate::db::DbError;
use crate::model::department::DepartmentId;
use crate::model::person::PersonValidationError;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by department and person storage.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] PersonValidationError),
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("referenced department does not exist: {0}")]
    MissingDepartment(DepartmentId),
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
    #[error(
        "connection schema version {actual_version} does not match expected {expected_version}"
    )]
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    #[error("required table `{0}` is missing")]
    MissingRequiredTable(&'static str),
    #[error("required column `{table}.{column}` is missing")]
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
