//! Person records and write-side validation.
//!
//! # Invariants
//! - `name` is non-empty after trimming.
//! - `salary` is finite and non-negative.
//! - `department` was resolved from storage before the person was built.

use super::department::Department;
use serde::Serialize;

/// Storage-assigned person identifier.
pub type PersonId = i64;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PersonValidationError {
    #[error("person name must not be empty")]
    EmptyName,
    #[error("salary must be a finite number, got {0}")]
    NonFiniteSalary(f64),
    #[error("salary must be >= 0, got {0}")]
    NegativeSalary(f64),
}

/// Person that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub salary: f64,
    pub department: Department,
}

impl NewPerson {
    /// Builds a validated person draft attached to a resolved department.
    ///
    /// The name is stored trimmed.
    pub fn new(
        name: impl Into<String>,
        salary: f64,
        department: Department,
    ) -> Result<Self, PersonValidationError> {
        let person = Self {
            name: name.into().trim().to_string(),
            salary,
            department,
        };
        person.validate()?;
        Ok(person)
    }

    /// Checks field-level invariants.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        validate_fields(&self.name, self.salary)
    }
}

/// Persisted person joined with its department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub salary: f64,
    pub department: Department,
}

impl Person {
    pub(crate) fn from_new(id: PersonId, draft: &NewPerson) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            salary: draft.salary,
            department: draft.department.clone(),
        }
    }

    /// Checks field-level invariants on a stored row.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        validate_fields(&self.name, self.salary)
    }
}

/// Checks the scalar person fields without needing a department.
pub fn validate_fields(name: &str, salary: f64) -> Result<(), PersonValidationError> {
    if name.trim().is_empty() {
        return Err(PersonValidationError::EmptyName);
    }
    if !salary.is_finite() {
        return Err(PersonValidationError::NonFiniteSalary(salary));
    }
    if salary < 0.0 {
        return Err(PersonValidationError::NegativeSalary(salary));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{NewPerson, PersonValidationError};
    use crate::model::department::Department;

    fn it_department() -> Department {
        Department::from_storage(1, "IT".to_string())
    }

    #[test]
    fn new_person_trims_name() {
        let person = NewPerson::new("  Ana ", 3000.0, it_department()).unwrap();
        assert_eq!(person.name, "Ana");
        assert_eq!(person.department.name(), "IT");
    }

    #[test]
    fn new_person_rejects_blank_name() {
        let err = NewPerson::new("   ", 10.0, it_department()).unwrap_err();
        assert_eq!(err, PersonValidationError::EmptyName);
    }

    #[test]
    fn new_person_rejects_bad_salary() {
        let err = NewPerson::new("Ana", f64::NAN, it_department()).unwrap_err();
        assert!(matches!(err, PersonValidationError::NonFiniteSalary(_)));

        let err = NewPerson::new("Ana", -1.5, it_department()).unwrap_err();
        assert_eq!(err, PersonValidationError::NegativeSalary(-1.5));
    }

    #[test]
    fn zero_salary_is_allowed() {
        assert!(NewPerson::new("Intern", 0.0, it_department()).is_ok());
    }
}
