pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod entities;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    // RUST_LOG wins over the configured level.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Seed { dry_run }) => cli::cmd_seed(&config, dry_run).await,

        Some(Commands::Verify) => cli::cmd_verify(&config).await,

        Some(Commands::List { category }) => {
            cli::cmd_list(&config, category.as_deref()).await
        }

        Some(Commands::Search { query, category }) => {
            let query = query.join(" ");
            cli::cmd_search(&config, &query, category.as_deref()).await
        }

        Some(Commands::Init) => cli::cmd_init(),

        None => {
            print_help();
            Ok(())
        }
    }
}

fn print_help() {
    println!("pricedex - product catalog seeder for the price checker");
    println!();
    println!("Usage: pricedex <command>");
    println!();
    println!("Commands:");
    println!("  seed [--dry-run]              Insert the embedded catalog (idempotent)");
    println!("  verify                        Compare row counts against the expected expansion");
    println!("  list [category]               List catalog rows");
    println!("  search <query> [--category]   Search catalog rows by name");
    println!("  init                          Create a default config file");
}
