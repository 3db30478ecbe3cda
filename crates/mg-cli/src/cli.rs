//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// migraph - apply graph-routed schema migrations to a DuckDB database
#[derive(Parser, Debug)]
#[command(name = "migraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// DuckDB database file (`:memory:` for a throwaway database)
    #[arg(
        short,
        long,
        global = true,
        env = "MIGRAPH_DATABASE",
        default_value = "migraph.duckdb"
    )]
    pub database: String,

    /// Migration manifest file, or a directory containing migrations.yml
    #[arg(
        short,
        long,
        global = true,
        env = "MIGRAPH_MANIFEST",
        default_value = "."
    )]
    pub manifest: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bring the database to the target schema in one transaction
    Migrate(MigrateArgs),

    /// Show the database's current schema
    Status(StatusArgs),

    /// Show the migrations that would be applied, without applying them
    Path(PathArgs),

    /// Validate the manifest's migration graph offline
    Check(CheckArgs),
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Target schema (defaults to the manifest's `target`)
    #[arg(short, long)]
    pub target: Option<String>,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the path command
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Target schema (defaults to the manifest's `target`)
    #[arg(short, long)]
    pub to: Option<String>,

    /// Starting schema (defaults to the database's current schema)
    #[arg(short, long)]
    pub from: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Target schema (defaults to the manifest's `target`)
    #[arg(short, long)]
    pub target: Option<String>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
