mod search;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use prospector_core::{DEFAULT_CITY, DEFAULT_LIMIT, DEFAULT_QUERY};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prospector")]
#[command(about = "Find local businesses and prepare outreach for them")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for businesses and export them as CSV
    Search {
        /// Kind of business to look for
        #[arg(long, default_value = DEFAULT_QUERY)]
        query: String,

        /// City to search in
        #[arg(long, default_value = DEFAULT_CITY)]
        city: String,

        /// Number of businesses to ask for (1-50)
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// CSV destination (defaults to `leads-<city>.csv`)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the results without writing a CSV file
        #[arg(long)]
        no_export: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = prospector_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    match command {
        Commands::Search {
            query,
            city,
            limit,
            output,
            no_export,
        } => {
            search::run_search_command(
                &config,
                &search::SearchArgs {
                    query,
                    city,
                    limit,
                    output,
                    no_export,
                },
            )
            .await?;
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
