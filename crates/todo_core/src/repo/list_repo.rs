//! Todo list repository contract and pooled SQLite implementation.
//!
//! # Responsibility
//! - Provide owner-scoped CRUD over `todo_lists`.
//! - Create each list and its ownership link in one transaction.
//!
//! # Invariants
//! - Every read and write filters through `users_lists` on the owner id.
//! - A list row is never visible without the link created alongside it.
//! - Scoped writes that match nothing succeed without effect.
//! - Connections are taken from the pool per call and released on return.

use crate::db::{DbError, DbPool};
use crate::model::list::{ListId, ListValidationError, OwnerId, TodoList, UpdateListInput};
use crate::repo::assignments::UpdateAssignments;
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, OptionalExtension, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SCOPED_SELECT_SQL: &str = "SELECT
    tl.id AS id,
    tl.title AS title,
    tl.description AS description,
    tl.done AS done
FROM todo_lists tl
INNER JOIN users_lists ul ON tl.id = ul.list_id";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for list persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ListValidationError),
    Db(DbError),
    /// No list with this id is visible to the requesting owner.
    NotFound(ListId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "list not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ListValidationError> for RepoError {
    fn from(value: ListValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<r2d2::Error> for RepoError {
    fn from(value: r2d2::Error) -> Self {
        Self::Db(DbError::Pool(value))
    }
}

/// Owner-scoped list storage.
pub trait TodoListRepository {
    /// Persists `list` and links it to `owner_id`; returns the new id.
    fn create(&self, owner_id: OwnerId, list: &TodoList) -> RepoResult<ListId>;
    /// Returns every list linked to `owner_id`.
    fn get_all(&self, owner_id: OwnerId) -> RepoResult<Vec<TodoList>>;
    /// Returns one list if `owner_id` is linked to it.
    fn get_by_id(&self, owner_id: OwnerId, list_id: ListId) -> RepoResult<TodoList>;
    /// Deletes one list if `owner_id` is linked to it.
    fn delete(&self, owner_id: OwnerId, list_id: ListId) -> RepoResult<()>;
    /// Applies the present fields of `input` if `owner_id` is linked to the list.
    fn update(
        &self,
        owner_id: OwnerId,
        list_id: ListId,
        input: &UpdateListInput,
    ) -> RepoResult<()>;
}

/// Pool-backed SQLite list repository.
#[derive(Clone)]
pub struct SqliteTodoListRepository {
    pool: DbPool,
}

impl SqliteTodoListRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TodoListRepository for SqliteTodoListRepository {
    fn create(&self, owner_id: OwnerId, list: &TodoList) -> RepoResult<ListId> {
        list.validate()?;

        let mut conn = self.pool.get()?;
        // Dropping `tx` on any early return rolls back both inserts.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO todo_lists (title, description, done) VALUES (?1, ?2, ?3);",
            params![list.title.as_str(), list.description.as_str(), list.done],
        )?;
        let list_id = tx.last_insert_rowid();

        tx.execute(
            "INSERT INTO users_lists (user_id, list_id) VALUES (?1, ?2);",
            params![owner_id, list_id],
        )?;

        tx.commit()?;
        debug!("event=list_create module=repo status=ok list_id={list_id}");
        Ok(list_id)
    }

    fn get_all(&self, owner_id: OwnerId) -> RepoResult<Vec<TodoList>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "{SCOPED_SELECT_SQL}
             WHERE ul.user_id = ?1
             ORDER BY tl.id;"
        ))?;

        let lists = stmt
            .query_map([owner_id], parse_list_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(lists)
    }

    fn get_by_id(&self, owner_id: OwnerId, list_id: ListId) -> RepoResult<TodoList> {
        let conn = self.pool.get()?;
        let list = conn
            .query_row(
                &format!(
                    "{SCOPED_SELECT_SQL}
                     WHERE ul.user_id = ?1
                       AND ul.list_id = ?2;"
                ),
                params![owner_id, list_id],
                parse_list_row,
            )
            .optional()?;

        list.ok_or(RepoError::NotFound(list_id))
    }

    fn delete(&self, owner_id: OwnerId, list_id: ListId) -> RepoResult<()> {
        let conn = self.pool.get()?;
        let changed = conn.execute(
            "DELETE FROM todo_lists
             WHERE id IN (
                SELECT list_id
                FROM users_lists
                WHERE user_id = ?1
                  AND list_id = ?2
             );",
            params![owner_id, list_id],
        )?;

        debug!("event=list_delete module=repo status=ok list_id={list_id} changed={changed}");
        Ok(())
    }

    fn update(
        &self,
        owner_id: OwnerId,
        list_id: ListId,
        input: &UpdateListInput,
    ) -> RepoResult<()> {
        input.validate()?;

        let mut assignments = UpdateAssignments::new();
        assignments.push_opt("title", input.title.clone());
        assignments.push_opt("description", input.description.clone());
        assignments.push_opt("done", input.done);

        let Some(rendered) = assignments.render() else {
            return Err(RepoError::Validation(ListValidationError::EmptyPatch));
        };

        let owner_slot = rendered.next_placeholder;
        let list_slot = owner_slot + 1;
        let sql = format!(
            "UPDATE todo_lists
             SET {}
             WHERE id IN (
                SELECT list_id
                FROM users_lists
                WHERE user_id = ?{owner_slot}
                  AND list_id = ?{list_slot}
             );",
            rendered.clause
        );

        let mut bind_values = rendered.values;
        bind_values.push(Value::Integer(owner_id));
        bind_values.push(Value::Integer(list_id));

        let conn = self.pool.get()?;
        let changed = conn.execute(&sql, params_from_iter(bind_values))?;

        debug!("event=list_update module=repo status=ok list_id={list_id} changed={changed}");
        Ok(())
    }
}

fn parse_list_row(row: &Row<'_>) -> rusqlite::Result<TodoList> {
    Ok(TodoList {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        done: row.get("done")?,
    })
}
