//! Owner-scoped todo list persistence core.
//! Lists are created with their ownership link atomically, and every read or
//! write is filtered through that link.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, StoreConfig};
pub use db::{open_pool, open_pool_in_memory, DbError, DbPool};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::list::{ListId, ListValidationError, OwnerId, TodoList, UpdateListInput};
pub use repo::list_repo::{RepoError, RepoResult, SqliteTodoListRepository, TodoListRepository};
pub use service::list_service::TodoListService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
