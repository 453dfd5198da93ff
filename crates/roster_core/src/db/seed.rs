//! Out-of-band provisioning of department reference data.
//!
//! Departments are owned by another system of record; the person insert
//! path only ever reads them. This module exists for operators (CLI) and
//! test fixtures that need rows to reference.

use super::DbResult;
use crate::model::department::{validate_department_name, DepartmentId};
use log::info;
use rusqlite::{params, Connection};

/// Inserts or renames one department row.
///
/// Renaming is allowed so fixtures can model the stored name changing
/// between two person inserts.
///
/// Blank names are rejected before any write, matching the read-side rule.
pub fn seed_department(conn: &Connection, id: DepartmentId, name: &str) -> DbResult<()> {
    validate_department_name(id, name)?;
    conn.execute(
        "INSERT INTO departments (id, name) VALUES (?1, ?2)
         ON CONFLICT (id) DO UPDATE SET name = excluded.name;",
        params![id, name],
    )?;
    info!("event=department_seed module=db status=ok department_id={id}");
    Ok(())
}
