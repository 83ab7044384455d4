//! Database layer for Resolution Roulette

mod connection;
mod migrations;
mod repository;

pub use connection::Database;
pub use repository::{BulkOutcome, ResolutionRepository, SqliteResolutionRepository};
