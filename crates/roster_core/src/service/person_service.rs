//! Person use-case service.
//!
//! # Responsibility
//! - Turn incoming transmission shapes into persisted persons.
//! - Attach departments by resolving their id against storage.
//! - Translate persisted persons back into transmission shapes.
//!
//! # Invariants
//! - A department is never rebuilt from caller input; the stored row is
//!   the only source of its name.
//! - Any error leaves storage unchanged.
//! - Person names and salaries are never written to logs.

use crate::dto::{DepartmentDto, PersonDepartmentDto, PersonDto};
use crate::model::department::{Department, DepartmentId};
use crate::model::person::{validate_fields, NewPerson, Person, PersonId};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::person_repo::PersonRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::time::Instant;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error surfaced to callers of person use-cases.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Missing or malformed input field.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Referenced department does not exist in storage.
    #[error("department not found: {0}")]
    DepartmentNotFound(DepartmentId),
    /// Requested person does not exist.
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),
    /// Persistence-layer failure.
    #[error(transparent)]
    Repo(RepoError),
    /// Response could not be serialized.
    #[error("response encoding failed: {0}")]
    Encode(String),
}

impl ServiceError {
    /// Stable machine-readable error category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::DepartmentNotFound(_) | Self::PersonNotFound(_) => "not_found",
            Self::Repo(_) => "storage",
            Self::Encode(_) => "internal",
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::MissingDepartment(id) => Self::DepartmentNotFound(id),
            RepoError::Validation(err) => Self::Validation(err.to_string()),
            other => Self::Repo(other),
        }
    }
}

/// Person service facade over repository implementations.
pub struct PersonService<P: PersonRepository, D: DepartmentRepository> {
    persons: P,
    departments: D,
}

impl<P: PersonRepository, D: DepartmentRepository> PersonService<P, D> {
    /// Creates a service using the provided repository implementations.
    pub fn new(persons: P, departments: D) -> Self {
        Self {
            persons,
            departments,
        }
    }

    /// Inserts a person from the nested shape.
    ///
    /// # Contract
    /// - Only `department.id` is read from the request's department.
    /// - The response embeds the department's stored name.
    /// - Returns `DepartmentNotFound` without writing when the id is unknown.
    pub fn insert(&self, dto: &PersonDepartmentDto) -> ServiceResult<PersonDepartmentDto> {
        let person = self.insert_person(&dto.name, dto.salary, dto.department.id)?;
        Ok(PersonDepartmentDto::from(&person))
    }

    /// Inserts a person from the flattened shape carrying `departmentId`.
    pub fn insert_flat(&self, dto: &PersonDto) -> ServiceResult<PersonDto> {
        let person = self.insert_person(&dto.name, dto.salary, dto.department_id)?;
        Ok(PersonDto::from(&person))
    }

    /// Loads one person in nested shape.
    pub fn find_by_id(&self, id: PersonId) -> ServiceResult<PersonDepartmentDto> {
        self.persons
            .get_person(id)?
            .map(|person| PersonDepartmentDto::from(&person))
            .ok_or(ServiceError::PersonNotFound(id))
    }

    /// Lists all persons in nested shape, ordered by id.
    pub fn find_all(&self) -> ServiceResult<Vec<PersonDepartmentDto>> {
        Ok(self
            .persons
            .list_persons()?
            .iter()
            .map(PersonDepartmentDto::from)
            .collect())
    }

    /// Lists all known departments, ordered by id.
    pub fn departments(&self) -> ServiceResult<Vec<DepartmentDto>> {
        Ok(self
            .departments
            .list_departments()?
            .iter()
            .map(DepartmentDto::from)
            .collect())
    }

    fn insert_person(
        &self,
        name: &str,
        salary: f64,
        department_id: DepartmentId,
    ) -> ServiceResult<Person> {
        let started_at = Instant::now();
        let result = validate_fields(name, salary)
            .map_err(|err| ServiceError::Validation(err.to_string()))
            .and_then(|()| self.resolve_department(department_id))
            .and_then(|department| {
                NewPerson::new(name, salary, department)
                    .map_err(|err| ServiceError::Validation(err.to_string()))
            })
            .and_then(|draft| {
                self.persons
                    .create_person(&draft)
                    .map_err(ServiceError::from)
            });

        match &result {
            Ok(person) => info!(
                "event=person_insert module=service status=ok person_id={} department_id={} duration_ms={}",
                person.id,
                department_id,
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=person_insert module=service status=error department_id={} duration_ms={} error_code={}",
                department_id,
                started_at.elapsed().as_millis(),
                err.kind()
            ),
        }
        result
    }

    fn resolve_department(&self, id: DepartmentId) -> ServiceResult<Department> {
        self.departments
            .get_department(id)?
            .ok_or(ServiceError::DepartmentNotFound(id))
    }
}
