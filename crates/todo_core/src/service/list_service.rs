//! Todo list use-case service.
//!
//! # Responsibility
//! - Provide owner-scoped list entry points for transport callers.
//! - Validate update patches before delegating to the repository.
//!
//! # Invariants
//! - An empty patch never reaches the repository.
//! - Service layer remains storage-agnostic.

use crate::model::list::{ListId, OwnerId, TodoList, UpdateListInput};
use crate::repo::list_repo::{RepoResult, TodoListRepository};

/// Use-case service wrapper for list operations.
pub struct TodoListService<R: TodoListRepository> {
    repo: R,
}

impl<R: TodoListRepository> TodoListService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a list owned by `owner_id` and returns its id.
    pub fn create(&self, owner_id: OwnerId, list: &TodoList) -> RepoResult<ListId> {
        self.repo.create(owner_id, list)
    }

    pub fn get_all(&self, owner_id: OwnerId) -> RepoResult<Vec<TodoList>> {
        self.repo.get_all(owner_id)
    }

    /// Returns `RepoError::NotFound` both for missing and foreign lists.
    pub fn get_by_id(&self, owner_id: OwnerId, list_id: ListId) -> RepoResult<TodoList> {
        self.repo.get_by_id(owner_id, list_id)
    }

    /// Succeeds even when nothing matched; callers re-read to detect absence.
    pub fn delete(&self, owner_id: OwnerId, list_id: ListId) -> RepoResult<()> {
        self.repo.delete(owner_id, list_id)
    }

    /// Applies a partial update after validating the patch.
    ///
    /// # Errors
    /// - `RepoError::Validation` when the patch has no present fields or
    ///   would blank the title. The repository is not called.
    /// - Repository errors unchanged otherwise.
    pub fn update(
        &self,
        owner_id: OwnerId,
        list_id: ListId,
        input: &UpdateListInput,
    ) -> RepoResult<()> {
        input.validate()?;
        self.repo.update(owner_id, list_id, input)
    }
}
