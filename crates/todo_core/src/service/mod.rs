//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Reject invalid input before it reaches storage.

pub mod list_service;
