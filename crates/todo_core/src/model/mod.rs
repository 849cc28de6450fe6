//! Domain model for owner-scoped todo lists.
//!
//! # Responsibility
//! - Define the list record and the partial-update patch shape.
//! - Own field-level validation shared by store and service.
//!
//! # Invariants
//! - Lists never carry an owner field; ownership lives in `users_lists`.
//! - A patch with no present fields is never valid.

pub mod list;
