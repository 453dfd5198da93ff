//! Transmission shapes for JSON input/output.
//!
//! # Responsibility
//! - Shape persisted records for transport (flattened and nested views).
//! - Accept request bodies without trusting any of their reference data.
//!
//! # Invariants
//! - Shapes are ephemeral and never persisted directly.
//! - Output shapes are built from persisted records only.
//! - A department `name` on input is accepted but never used.

mod department_dto;
mod person_dto;

pub use department_dto::DepartmentDto;
pub use person_dto::{PersonDepartmentDto, PersonDto};
