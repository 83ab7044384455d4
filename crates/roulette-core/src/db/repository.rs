//! Resolution repository implementation

use std::collections::HashSet;

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::models::{Resolution, ResolutionId};
use crate::normalize::normalize;
use crate::seed;

/// Outcome of a bulk import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    /// Lines inserted as new rows
    pub added: usize,
    /// Lines rejected as duplicates of existing rows
    pub skipped: usize,
}

/// Trait for resolution storage operations
pub trait ResolutionRepository {
    /// Insert a suggestion; returns false when a normalized duplicate
    /// already exists in the category
    fn insert(&self, category: &str, text: &str) -> Result<bool>;

    /// Import raw `category,text` lines; malformed lines are ignored
    fn bulk_insert(&self, lines: &[&str]) -> Result<BulkOutcome>;

    /// List every stored resolution, sorted by category then text
    fn list_all(&self) -> Result<Vec<Resolution>>;

    /// Suggestions for a category: seed entries first, then stored texts
    fn list_by_category(&self, category: &str) -> Result<Vec<String>>;

    /// Seeded and stored category labels, sorted and deduplicated
    fn categories(&self) -> Result<Vec<String>>;

    /// Delete a row by id; returns false when no row has that id
    fn delete_by_id(&self, id: ResolutionId) -> Result<bool>;

    /// Remove rows that duplicate an earlier row under normalization
    fn remove_duplicates(&self) -> Result<usize>;
}

/// `SQLite` implementation of `ResolutionRepository`
pub struct SqliteResolutionRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteResolutionRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a resolution from a database row
    fn parse_resolution(row: &rusqlite::Row<'_>) -> rusqlite::Result<Resolution> {
        Ok(Resolution {
            id: ResolutionId::new(row.get(0)?),
            category: row.get(1)?,
            text: row.get(2)?,
        })
    }
}

impl ResolutionRepository for SqliteResolutionRepository<'_> {
    fn insert(&self, category: &str, text: &str) -> Result<bool> {
        // The unique index on (category, text_key) is the duplicate check;
        // a suppressed row is a normal outcome, not an error.
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO resolutions (category, text, text_key) VALUES (?1, ?2, ?3)",
            params![category, text, normalize(text)],
        )?;

        Ok(inserted > 0)
    }

    fn bulk_insert(&self, lines: &[&str]) -> Result<BulkOutcome> {
        let mut outcome = BulkOutcome::default();

        for line in lines {
            // Split on the first comma only; text may itself contain commas
            let Some((category, text)) = line.split_once(',') else {
                continue;
            };
            let category = category.trim();
            let text = text.trim();
            if category.is_empty() || text.is_empty() {
                continue;
            }

            if self.insert(category, text)? {
                outcome.added += 1;
            } else {
                outcome.skipped += 1;
            }
        }

        Ok(outcome)
    }

    fn list_all(&self) -> Result<Vec<Resolution>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, category, text FROM resolutions ORDER BY category, text")?;

        let resolutions = stmt
            .query_map([], Self::parse_resolution)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(resolutions)
    }

    fn list_by_category(&self, category: &str) -> Result<Vec<String>> {
        let mut merged: Vec<String> = seed::suggestions(category)
            .iter()
            .map(|entry| (*entry).to_string())
            .collect();

        let mut stmt = self
            .conn
            .prepare("SELECT text FROM resolutions WHERE category = ?1 ORDER BY id")?;
        let stored = stmt.query_map(params![category], |row| row.get::<_, String>(0))?;

        // Exact-match merge: a stored text that differs from a seed only in
        // case or trailing punctuation still appears alongside it.
        for text in stored {
            let text = text?;
            if !merged.contains(&text) {
                merged.push(text);
            }
        }

        Ok(merged)
    }

    fn categories(&self) -> Result<Vec<String>> {
        let mut categories: Vec<String> = seed::categories().map(ToString::to_string).collect();

        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT category FROM resolutions")?;
        let stored = stmt.query_map([], |row| row.get::<_, String>(0))?;

        for category in stored {
            let category = category?;
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        categories.sort();
        Ok(categories)
    }

    fn delete_by_id(&self, id: ResolutionId) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM resolutions WHERE id = ?1",
            params![id.as_i64()],
        )?;

        Ok(removed > 0)
    }

    fn remove_duplicates(&self) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;

        // Recompute keys instead of trusting text_key: stored keys can
        // predate the current normalizer (v1 rows, external writers).
        let rows: Vec<(i64, String, String)> = {
            let mut stmt = tx.prepare("SELECT id, category, text FROM resolutions ORDER BY id")?;
            let mapped = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;
            mapped.collect::<rusqlite::Result<Vec<_>>>()?
        };

        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for (id, category, text) in rows {
            if !seen.insert((category, normalize(&text))) {
                duplicates.push(id);
            }
        }

        for id in &duplicates {
            tx.execute("DELETE FROM resolutions WHERE id = ?1", params![id])?;
        }

        tx.commit()?;

        let removed = duplicates.len();
        if removed > 0 {
            tracing::info!(removed, "Removed duplicate resolutions");
        }
        Ok(removed)
    }
}
