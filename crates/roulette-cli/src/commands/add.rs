use std::path::Path;

use roulette_core::db::{ResolutionRepository, SqliteResolutionRepository};

use crate::commands::common::{normalize_category, open_database, resolve_resolution_text};
use crate::error::CliError;

pub fn run_add(category: &str, text_parts: &[String], db_path: &Path) -> Result<(), CliError> {
    let category = normalize_category(category)?;
    let text = resolve_resolution_text(text_parts)?;

    let db = open_database(db_path)?;
    let repo = SqliteResolutionRepository::new(db.connection());

    // A duplicate is a normal outcome, reported rather than raised
    if repo.insert(&category, &text)? {
        println!("Added to {category}: {text}");
    } else {
        println!("Already in {category}: {text}");
    }
    Ok(())
}
