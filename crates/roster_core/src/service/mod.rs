//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep CLI/JSON layers decoupled from storage details.

pub mod person_service;
