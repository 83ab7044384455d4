//! Resolution Roulette CLI - spin for a resolution from the terminal
//!
//! Pick a category, spin for a random suggestion, contribute your own, and
//! curate the shared pool behind the admin gate.

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roulette_core=info".parse().unwrap())
                .add_directive("roulette_cli=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let db_path = commands::common::resolve_db_path(cli.db_path);

    match cli.command {
        Commands::Spin { category } => commands::spin::run_spin(&category, &db_path),
        Commands::Add { category, text } => commands::add::run_add(&category, &text, &db_path),
        Commands::List { category, json } => {
            commands::list::run_list(category.as_deref(), json, &db_path)
        }
        Commands::Categories { json } => commands::list::run_categories(json, &db_path),
        Commands::Admin { password, command } => {
            commands::admin::run_admin(&password, command, &db_path)
        }
        Commands::Completions { shell, output } => {
            commands::completions::run_completions(shell, output.as_deref())
        }
    }
}
