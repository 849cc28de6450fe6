//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define owner-scoped data access contracts for lists.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Repository writes validate input before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod assignments;
pub mod list_repo;
