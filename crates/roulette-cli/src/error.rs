use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] roulette_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Resolution text cannot be empty")]
    EmptyText,
    #[error("Invalid resolution id: '{0}'")]
    InvalidResolutionId(String),
    #[error("No suggestions available for category '{0}'")]
    EmptyPool(String),
    #[error("No import lines provided")]
    EmptyImport,
    #[error(
        "Admin access is not configured. Set ROULETTE_ADMIN_PASSWORD_SHA256 to the hex SHA-256 digest of the admin password."
    )]
    AdminNotConfigured,
    #[error("Admin password rejected")]
    AdminRejected,
}
