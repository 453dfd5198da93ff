//! Domain model for people and the departments they belong to.
//!
//! # Responsibility
//! - Define canonical records used by core business logic.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - A `Department` value can only originate from storage reads.
//! - Every `Person` and `NewPerson` holds exactly one resolved `Department`.

pub mod department;
pub mod person;
