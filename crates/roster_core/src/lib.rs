//! Core domain logic for the roster service.
//! This crate is the single source of truth for person/department invariants.

pub mod api;
pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use api::{insert_person_flat_json, insert_person_json};
pub use dto::{DepartmentDto, PersonDepartmentDto, PersonDto};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::department::{
    validate_department_name, Department, DepartmentId, EmptyDepartmentName,
};
pub use model::person::{NewPerson, Person, PersonId, PersonValidationError};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::person_repo::{PersonRepository, SqlitePersonRepository};
pub use repo::{RepoError, RepoResult};
pub use service::person_service::{PersonService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
