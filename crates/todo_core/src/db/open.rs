//! Pool bootstrap utilities.
//!
//! # Responsibility
//! - Build file-backed or in-memory pools.
//! - Configure per-connection pragmas and ensure the schema exists.
//!
//! # Invariants
//! - Returned pools hand out connections with `foreign_keys=ON`.
//! - Returned pools point at a database with both relations present.

use super::{DbError, DbPool, DbResult};
use crate::config::StoreConfig;
use log::{error, info};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::time::{Duration, Instant};

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Opens a pooled SQLite database described by `config`.
///
/// # Side effects
/// - Creates the database file and relations when missing.
/// - Emits `db_open` logging events with duration and status.
pub fn open_pool(config: &StoreConfig) -> DbResult<DbPool> {
    let started_at = Instant::now();
    info!(
        "event=db_open module=db status=start mode=file max_connections={}",
        config.max_connections
    );

    if let Err(err) = config.validate() {
        return log_outcome("file", started_at, Err(err.into()));
    }

    let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
    let manager = SqliteConnectionManager::file(&config.path)
        .with_init(move |conn| init_connection(conn, busy_timeout));
    let result = r2d2::Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
        .map_err(DbError::from)
        .and_then(|pool| ensure_schema(&pool).map(|()| pool));

    log_outcome("file", started_at, result)
}

/// Opens a single-connection in-memory database.
///
/// The pool is capped at one connection that is never recycled, so every
/// caller sees the same database for the lifetime of the pool.
pub fn open_pool_in_memory() -> DbResult<DbPool> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let manager = SqliteConnectionManager::memory()
        .with_init(|conn| init_connection(conn, Duration::from_secs(5)));
    let result = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .map_err(DbError::from)
        .and_then(|pool| ensure_schema(&pool).map(|()| pool));

    log_outcome("memory", started_at, result)
}

fn init_connection(conn: &mut Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(busy_timeout)
}

fn ensure_schema(pool: &DbPool) -> DbResult<()> {
    let conn = pool.get()?;
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

fn log_outcome(mode: &str, started_at: Instant, result: DbResult<DbPool>) -> DbResult<DbPool> {
    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={} duration_ms={}",
            mode,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}
