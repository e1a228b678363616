//! CLI argument definitions for the journalkeep binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// SQLite database (default)
    Sqlite,
    /// In-memory with JSON persistence
    Inmemory,
}

/// Per-user journal storage
#[derive(Parser, Debug)]
#[command(name = "journalkeep")]
#[command(about = "journalkeep: per-user journal storage over a key-value store")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub backend_config: BackendArgs,

    /// Print JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how data is stored
#[derive(clap::Args, Debug, Clone)]
pub struct BackendArgs {
    /// Storage backend to use
    #[arg(short, long, default_value = "sqlite", env = "JOURNALKEEP_BACKEND", global = true)]
    pub backend: Backend,

    /// Data directory for storage files.
    /// For SQLite: stores journalkeep.db
    /// For InMemory: stores journalkeep.json
    #[arg(short = 'D', long, env = "JOURNALKEEP_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new user
    Register(RegisterArgs),
    /// Log in and make the user current
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the current user
    Whoami,
    /// List registered users
    Users,
    /// Store a JSON value in a user's keyspace
    Put(PutArgs),
    /// Print a JSON value from a user's keyspace
    Get(GetArgs),
    /// Show entry and goal counts for a user
    Stats(UserArg),
}

#[derive(clap::Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub name: String,
}

#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    /// Accepted but not checked
    #[arg(long, default_value = "")]
    pub password: String,
}

/// Selects a user by id; defaults to the current session user
#[derive(clap::Args, Debug)]
pub struct UserArg {
    #[arg(long = "user")]
    pub user_id: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct PutArgs {
    /// Data type, e.g. `entries` or `goals`
    #[arg(long = "type")]
    pub data_type: String,

    #[command(flatten)]
    pub user: UserArg,

    /// The value to store, as JSON
    pub value: String,
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Data type, e.g. `entries` or `goals`
    #[arg(long = "type")]
    pub data_type: String,

    #[command(flatten)]
    pub user: UserArg,
}
