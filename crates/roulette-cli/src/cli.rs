use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "roulette")]
#[command(about = "Spin for a New Year's resolution from a shared suggestion pool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spin the wheel for a random resolution
    Spin {
        /// Category to draw from
        category: String,
    },
    /// Add a resolution to a category
    Add {
        /// Category for the resolution
        category: String,
        /// Resolution text
        text: Vec<String>,
    },
    /// Show suggestions for a category, or every category when omitted
    List {
        /// Category to show
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Curate the shared pool (requires the admin password)
    Admin {
        /// Admin password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
        #[command(subcommand)]
        command: AdminCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List every stored resolution with its id
    Audit {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Bulk-import resolutions from `category,text` lines
    Import {
        /// Input file (piped stdin when omitted)
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,
    },
    /// Delete a resolution by id
    Delete {
        /// Resolution id (see `admin audit`)
        id: String,
    },
    /// Remove duplicate resolutions
    Dedupe,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
