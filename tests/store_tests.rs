// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use tallybook::backend::SqliteBackend;
use tallybook::category::Category;
use tallybook::error::LedgerError;
use tallybook::store::ItemStore;

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

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn add_then_list_round_trips_with_normalized_date() {
    let store = setup();
    let added = store
        .add("Lunch", dec("12.50"), Category::Food, "2024-05-20T12:34:56")
        .unwrap();
    assert!(added.id > 0);
    assert_eq!(added.created_at, "2024-05-20");

    let items = store.list().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, added.id);
    assert_eq!(items[0].name, "Lunch");
    assert_eq!(items[0].value, dec("12.50"));
    assert_eq!(items[0].category, Category::Food);
    assert_eq!(items[0].created_at, "2024-05-20");
}

#[test]
fn backend_assigns_unique_ids() {
    let store = setup();
    let mut ids = Vec::new();
    for i in 0..3 {
        let item = store
            .add(
                &format!("Item {}", i),
                dec("1"),
                Category::Other,
                "2024-05-20T08:00:00",
            )
            .unwrap();
        ids.push(item.id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn empty_store_lists_nothing() {
    let store = setup();
    assert!(store.list().unwrap().is_empty());
    assert!(store.daily_summaries().unwrap().is_empty());
}

#[test]
fn add_rejects_empty_name_before_writing() {
    let store = setup();
    let err = store
        .add("   ", dec("5"), Category::Food, "2024-05-20")
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn add_rejects_unparseable_timestamp_before_writing() {
    let store = setup();
    let err = store
        .add("Lunch", dec("5"), Category::Food, "yesterday")
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn update_replaces_every_field() {
    let store = setup();
    let added = store
        .add("Lunch", dec("12.50"), Category::Food, "2024-05-20T12:00:00")
        .unwrap();

    let updated = store
        .update(
            added.id,
            "Dinner",
            dec("30"),
            Category::Entertainment,
            "2024-05-21T19:00:00",
        )
        .unwrap();
    assert_eq!(updated.id, added.id);
    assert_eq!(updated.created_at, "2024-05-21");

    let items = store.list().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Dinner");
    assert_eq!(items[0].value, dec("30"));
    assert_eq!(items[0].category, Category::Entertainment);
    assert_eq!(items[0].created_at, "2024-05-21");
}

#[test]
fn update_of_dead_id_is_not_found() {
    let store = setup();
    let err = store
        .update(999, "Ghost", dec("1"), Category::Other, "2024-05-20")
        .unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(999)));

    let err = store.delete(999).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(999)));
}

#[test]
fn second_delete_of_same_id_is_not_found() {
    let store = setup();
    let added = store
        .add("Lunch", dec("5"), Category::Food, "2024-05-20")
        .unwrap();

    store.delete(added.id).unwrap();
    let err = store.delete(added.id).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(id) if id == added.id));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn update_validation_runs_before_the_backend_call() {
    let store = setup();
    let added = store
        .add("Lunch", dec("5"), Category::Food, "2024-05-20")
        .unwrap();

    // Invalid input on a live id must fail validation, not touch the row.
    let err = store
        .update(added.id, "", dec("9"), Category::Food, "2024-05-20")
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert_eq!(store.list().unwrap()[0].name, "Lunch");
}
