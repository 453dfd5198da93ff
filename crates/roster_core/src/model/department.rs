//! Department reference record.
//!
//! # Invariants
//! - Construction is crate-private: only repository row parsing creates
//!   values, so a `Department` always mirrors a stored row.
//! - Departments are never created or mutated by the person insert path.

use serde::Serialize;

/// Storage-assigned department identifier.
pub type DepartmentId = i64;

/// Department as read from storage; only produced by repository reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Department {
    id: DepartmentId,
    name: String,
}

impl Department {
    pub(crate) fn from_storage(id: DepartmentId, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> DepartmentId {
        self.id
    }

    /// Name as stored at the time this value was read.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Stored department names must be non-blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("department {0} name must not be empty")]
pub struct EmptyDepartmentName(pub DepartmentId);

/// Shared by the provisioning write path and repository row parsing.
pub fn validate_department_name(id: DepartmentId, name: &str) -> Result<(), EmptyDepartmentName> {
    if name.trim().is_empty() {
        return Err(EmptyDepartmentName(id));
    }
    Ok(())
}
