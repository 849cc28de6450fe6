//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `todo_core` linkage.
//! - Optionally open a store and report an owner's list count.

use std::process::ExitCode;
use todo_core::{open_pool, SqliteTodoListRepository, StoreConfig, TodoListService};

fn main() -> ExitCode {
    println!("todo_core version={}", todo_core::core_version());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path, owner] = args.as_slice() else {
        return ExitCode::SUCCESS;
    };

    let owner_id = match owner.parse::<i64>() {
        Ok(id) => id,
        Err(err) => {
            eprintln!("invalid owner id `{owner}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = open_pool(&StoreConfig::new(path))
        .map_err(|err| err.to_string())
        .and_then(|pool| {
            TodoListService::new(SqliteTodoListRepository::new(pool))
                .get_all(owner_id)
                .map_err(|err| err.to_string())
        });

    match result {
        Ok(lists) => {
            println!("owner={owner_id} lists={}", lists.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to read lists: {err}");
            ExitCode::FAILURE
        }
    }
}
