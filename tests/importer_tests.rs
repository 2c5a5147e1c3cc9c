// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use rusqlite::Connection;
use tempfile::NamedTempFile;

use tallybook::backend::SqliteBackend;
use tallybook::category::Category;
use tallybook::store::ItemStore;
use tallybook::{cli, commands::importer};

fn setup() -> ItemStore {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE items(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            value TEXT NOT NULL,
            type TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        CREATE TABLE monthly_budgets(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            month TEXT NOT NULL UNIQUE,
            budget_amount TEXT NOT NULL
        );
        "#,
    )
    .unwrap();
    ItemStore::new(Box::new(SqliteBackend::new(conn)))
}

fn run_import(store: &ItemStore, path: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["tallybook", "import", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(store, import_m)
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn imports_a_json_array_of_items() {
    let store = setup();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 7, "name": "Lunch", "value": 12.5, "type": "Food", "created_at": "2024-05-20T12:34:56"}},
            {{"name": "Bus", "value": "2.40", "type": "Transport", "created_at": "2024-05-21"}}
        ]"#
    )
    .unwrap();

    run_import(&store, file.path().to_str().unwrap()).unwrap();

    let items = store.list().unwrap();
    assert_eq!(items.len(), 2);
    // Exported ids are ignored; the backend assigned fresh ones.
    let lunch = items.iter().find(|i| i.name == "Lunch").unwrap();
    assert_ne!(lunch.id, 7);
    assert_eq!(lunch.category, Category::Food);
    assert_eq!(lunch.created_at, "2024-05-20");
}

#[test]
fn unknown_category_fails_the_whole_import() {
    let store = setup();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Lunch", "value": 12.5, "type": "Food", "created_at": "2024-05-20"}},
            {{"name": "Mystery", "value": 3, "type": "Snacks", "created_at": "2024-05-20"}}
        ]"#
    )
    .unwrap();

    assert!(run_import(&store, file.path().to_str().unwrap()).is_err());
    // Validation runs over the whole payload before anything is written.
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn bad_timestamp_fails_the_whole_import() {
    let store = setup();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Lunch", "value": 12.5, "type": "Food", "created_at": "someday"}}
        ]"#
    )
    .unwrap();

    assert!(run_import(&store, file.path().to_str().unwrap()).is_err());
    assert!(store.list().unwrap().is_empty());
}
