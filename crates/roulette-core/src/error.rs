//! Error types for roulette-core

use thiserror::Error;

/// Result type alias using roulette-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in roulette-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
