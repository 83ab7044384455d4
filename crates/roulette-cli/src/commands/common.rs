use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use roulette_core::db::Database;

use crate::error::CliError;

/// Environment variable overriding the database location
pub const DB_PATH_ENV: &str = "ROULETTE_DB_PATH";

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os(DB_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roulette")
        .join("roulette.db")
}

pub fn open_database(path: &Path) -> Result<Database, CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::debug!("Opening database at {}", path.display());
    Ok(Database::open(path)?)
}

pub fn normalize_category(category: &str) -> Result<String, CliError> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyCategory)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn resolve_resolution_text(text_parts: &[String]) -> Result<String, CliError> {
    let joined = text_parts.join(" ");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyText)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(buffer))
    }
}
