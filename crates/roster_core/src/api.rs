//! JSON boundary for person use-cases.
//!
//! # Responsibility
//! - Decode request bodies into transmission shapes.
//! - Encode service results back into JSON text.
//!
//! # Invariants
//! - Any body that fails to decode is a `ServiceError::Validation`; the
//!   service is not called and storage is untouched.

use crate::dto::{PersonDepartmentDto, PersonDto};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::person_repo::PersonRepository;
use crate::service::person_service::{PersonService, ServiceError, ServiceResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Inserts a person from a nested JSON body.
///
/// Expects `{"name": string, "salary": number, "department": {"id": integer}}`
/// and returns the nested response with the stored department name.
pub fn insert_person_json<P, D>(service: &PersonService<P, D>, body: &str) -> ServiceResult<String>
where
    P: PersonRepository,
    D: DepartmentRepository,
{
    let request: PersonDepartmentDto = decode(body)?;
    encode(&service.insert(&request)?)
}

/// Inserts a person from a flattened JSON body carrying `departmentId`.
pub fn insert_person_flat_json<P, D>(
    service: &PersonService<P, D>,
    body: &str,
) -> ServiceResult<String>
where
    P: PersonRepository,
    D: DepartmentRepository,
{
    let request: PersonDto = decode(body)?;
    encode(&service.insert_flat(&request)?)
}

fn decode<T: DeserializeOwned>(body: &str) -> ServiceResult<T> {
    serde_json::from_str(body).map_err(|err| ServiceError::Validation(err.to_string()))
}

/// Serializes a response value as compact JSON.
pub fn encode<T: Serialize>(value: &T) -> ServiceResult<String> {
    serde_json::to_string(value).map_err(|err| ServiceError::Encode(err.to_string()))
}
