//! Read-only department repository.
//!
//! # Responsibility
//! - Resolve department identifiers against the system of record.
//!
//! # Invariants
//! - Every returned `Department` reflects the row as currently stored.
//! - This repository never writes.

use super::schema::{ensure_connection_ready, DEPARTMENTS_TABLE};
use super::{RepoError, RepoResult};
use crate::model::department::{validate_department_name, Department, DepartmentId};
use rusqlite::{Connection, OptionalExtension, Row};

/// Repository interface for department lookups.
pub trait DepartmentRepository {
    /// Loads one department by id, or `None` when no such row exists.
    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Lists all departments ordered by id.
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[DEPARTMENTS_TABLE])?;
        Ok(Self { conn })
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name FROM departments WHERE id = ?1;",
                [id],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        row.map(|(id, name)| parse_department(id, name)).transpose()
    }

    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM departments ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }
        Ok(departments)
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    parse_department(row.get("id")?, row.get("name")?)
}

/// Builds a `Department` from raw column values, rejecting blank names.
pub(crate) fn parse_department(id: DepartmentId, name: String) -> RepoResult<Department> {
    validate_department_name(id, &name)
        .map_err(|err| RepoError::InvalidData(format!("departments.name: {err}")))?;
    Ok(Department::from_storage(id, name))
}
