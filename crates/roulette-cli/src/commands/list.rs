use std::collections::BTreeMap;
use std::path::Path;

use roulette_core::db::{ResolutionRepository, SqliteResolutionRepository};

use crate::commands::common::{normalize_category, open_database};
use crate::error::CliError;

pub fn run_list(category: Option<&str>, as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let repo = SqliteResolutionRepository::new(db.connection());

    if let Some(category) = category {
        let category = normalize_category(category)?;
        let suggestions = repo.list_by_category(&category)?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        } else {
            for suggestion in &suggestions {
                println!("{suggestion}");
            }
        }
        return Ok(());
    }

    let mut by_category = BTreeMap::new();
    for category in repo.categories()? {
        let suggestions = repo.list_by_category(&category)?;
        by_category.insert(category, suggestions);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&by_category)?);
    } else {
        for (category, suggestions) in &by_category {
            println!("{category}:");
            for suggestion in suggestions {
                println!("  {suggestion}");
            }
        }
    }
    Ok(())
}

pub fn run_categories(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let repo = SqliteResolutionRepository::new(db.connection());
    let categories = repo.categories()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        for category in &categories {
            println!("{category}");
        }
    }
    Ok(())
}
