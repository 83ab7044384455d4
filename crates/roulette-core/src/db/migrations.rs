//! Database migrations

use std::collections::HashSet;

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::normalize::normalize;

/// Current schema version
const CURRENT_VERSION: i32 = 2;

/// Run all pending migrations
pub fn run(conn: &Connection) -> Result<()> {
    let version = get_version(conn)?;

    if version < 1 {
        migrate_v1(conn)?;
    }
    if version < 2 {
        migrate_v2(conn)?;
    }

    Ok(())
}

/// Get the current schema version
fn get_version(conn: &Connection) -> Result<i32> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    Ok(version)
}

/// Migration to version 1: initial flat schema
fn migrate_v1(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );
        CREATE TABLE IF NOT EXISTS resolutions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT NOT NULL,
            text TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_resolutions_category ON resolutions(category);
        INSERT INTO schema_version (version) VALUES (1);",
    )?;

    tx.commit()?;
    tracing::info!("Migrated database to version 1");
    Ok(())
}

/// Migration to version 2: normalized uniqueness keys
///
/// Backfills `text_key` for existing rows, removes rows that collide under
/// the current normalizer (first id wins), then enforces uniqueness with an
/// index so the insert-time duplicate check cannot race.
fn migrate_v2(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch("ALTER TABLE resolutions ADD COLUMN text_key TEXT NOT NULL DEFAULT ''")?;

    let rows: Vec<(i64, String, String)> = {
        let mut stmt = tx.prepare("SELECT id, category, text FROM resolutions ORDER BY id")?;
        let mapped = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;
        mapped.collect::<rusqlite::Result<Vec<_>>>()?
    };

    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for (id, category, text) in rows {
        let key = normalize(&text);
        if seen.insert((category, key.clone())) {
            tx.execute(
                "UPDATE resolutions SET text_key = ?1 WHERE id = ?2",
                params![key, id],
            )?;
        } else {
            duplicates.push(id);
        }
    }

    for id in &duplicates {
        tx.execute("DELETE FROM resolutions WHERE id = ?1", params![id])?;
    }

    tx.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_resolutions_category_key
            ON resolutions(category, text_key);
        INSERT INTO schema_version (version) VALUES (2);",
    )?;

    tx.commit()?;

    if duplicates.is_empty() {
        tracing::info!("Migrated database to version {CURRENT_VERSION}");
    } else {
        tracing::info!(
            removed = duplicates.len(),
            "Migrated database to version {CURRENT_VERSION}, removed colliding rows"
        );
    }
    Ok(())
}
