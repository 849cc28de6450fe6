//! Todo list domain model.
//!
//! # Responsibility
//! - Define the persisted list record and its update patch.
//! - Validate title and patch invariants before any SQL is issued.
//!
//! # Invariants
//! - `id` is assigned by the store; unsaved lists carry `0`.
//! - `title` is non-empty after trimming.
//! - An `UpdateListInput` must have at least one present field.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-generated list identifier.
pub type ListId = i64;

/// Authenticated principal id supplied by the caller.
pub type OwnerId = i64;

/// Validation failures for lists and update patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
    /// Update patch has no fields present.
    EmptyPatch,
}

impl Display for ListValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "list title must not be empty"),
            Self::EmptyPatch => write!(f, "update structure has no values"),
        }
    }
}

impl Error for ListValidationError {}

/// One todo list as stored in `todo_lists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    #[serde(default)]
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl TodoList {
    /// Creates an unsaved list with empty description and `done = false`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: String::new(),
            done: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Checks invariants required before persistence.
    pub fn validate(&self) -> Result<(), ListValidationError> {
        validate_title(&self.title)
    }
}

/// Partial update for a list. `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateListInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl UpdateListInput {
    /// Returns whether no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }

    /// Rejects empty patches and patches that would blank the title.
    pub fn validate(&self) -> Result<(), ListValidationError> {
        if self.is_empty() {
            return Err(ListValidationError::EmptyPatch);
        }
        if let Some(title) = self.title.as_deref() {
            validate_title(title)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), ListValidationError> {
    if title.trim().is_empty() {
        return Err(ListValidationError::EmptyTitle);
    }
    Ok(())
}
