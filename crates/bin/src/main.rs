use clap::Parser;
use journalkeep::Vault;
use tracing_subscriber::EnvFilter;

mod backend;
mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("journalkeep=info".parse()?),
        )
        .init();

    let format = OutputFormat::from_flag(cli.json);
    let backend = backend::create_backend(&cli.backend_config).await?;
    tracing::debug!("Opened {}", backend::backend_label(&cli.backend_config));
    let vault = Vault::open(backend);

    let result = match &cli.command {
        Commands::Register(args) => commands::user::register(&vault, args, format).await,
        Commands::Login(args) => commands::user::login(&vault, args, format).await,
        Commands::Logout => commands::user::logout(&vault, format).await,
        Commands::Whoami => commands::user::whoami(&vault, format).await,
        Commands::Users => commands::user::list(&vault, format).await,
        Commands::Put(args) => commands::data::put(&vault, args, format).await,
        Commands::Get(args) => commands::data::get(&vault, args, format).await,
        Commands::Stats(args) => commands::data::stats(&vault, args, format).await,
    };

    // Persist whatever was written, even if the command itself failed
    backend::persist(&vault, &cli.backend_config).await?;
    result
}
