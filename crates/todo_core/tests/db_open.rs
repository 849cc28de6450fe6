use std::thread;
use todo_core::{
    open_pool, open_pool_in_memory, ConfigError, DbError, DbPool, SqliteTodoListRepository,
    StoreConfig, TodoList, TodoListRepository,
};

#[test]
fn open_pool_in_memory_creates_relations() {
    let pool = open_pool_in_memory().unwrap();

    assert_table_exists(&pool, "todo_lists");
    assert_table_exists(&pool, "users_lists");
}

#[test]
fn pooled_connections_enforce_foreign_keys() {
    let pool = open_pool_in_memory().unwrap();
    let conn = pool.get().unwrap();

    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);

    let orphan = conn.execute(
        "INSERT INTO users_lists (user_id, list_id) VALUES (1, 12345);",
        [],
    );
    assert!(orphan.is_err());
}

#[test]
fn reopening_file_store_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("todo.db"));

    let id = {
        let repo = SqliteTodoListRepository::new(open_pool(&config).unwrap());
        repo.create(1, &TodoList::new("persisted")).unwrap()
    };

    let repo = SqliteTodoListRepository::new(open_pool(&config).unwrap());
    assert_eq!(repo.get_by_id(1, id).unwrap().title, "persisted");
}

#[test]
fn zero_connection_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        max_connections: 0,
        ..StoreConfig::new(dir.path().join("todo.db"))
    };

    let err = open_pool(&config).unwrap_err();
    assert!(matches!(err, DbError::Config(ConfigError::ZeroConnections)));
}

#[test]
fn concurrent_creates_share_one_pool() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        max_connections: 4,
        ..StoreConfig::new(dir.path().join("todo.db"))
    };
    let repo = SqliteTodoListRepository::new(open_pool(&config).unwrap());

    let handles: Vec<_> = (1..=4)
        .map(|owner_id| {
            let repo = repo.clone();
            thread::spawn(move || {
                for index in 0..5 {
                    repo.create(owner_id, &TodoList::new(format!("list {index}")))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for owner_id in 1..=4 {
        assert_eq!(repo.get_all(owner_id).unwrap().len(), 5);
    }
}

#[test]
fn store_config_deserializes_with_defaults() {
    let config: StoreConfig = serde_json::from_str(r#"{"path": "/data/lists.db"}"#).unwrap();

    assert_eq!(config.path.to_str(), Some("/data/lists.db"));
    assert_eq!(config.max_connections, 8);
    assert_eq!(config.busy_timeout_ms, 5_000);
}

fn assert_table_exists(pool: &DbPool, table_name: &str) {
    let conn = pool.get().unwrap();
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
