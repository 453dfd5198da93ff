use crate::model::department::{Department, DepartmentId};
use crate::model::person::Person;
use serde::{Deserialize, Serialize};

/// Department view embedded in nested person payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDto {
    pub id: DepartmentId,
    /// Absent on requests; always filled from storage on responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DepartmentDto {
    /// Reference-only view carrying just the identifier.
    pub fn reference(id: DepartmentId) -> Self {
        Self { id, name: None }
    }
}

impl From<&Department> for DepartmentDto {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id(),
            name: Some(department.name().to_string()),
        }
    }
}

impl From<&Person> for DepartmentDto {
    fn from(person: &Person) -> Self {
        Self::from(&person.department)
    }
}
