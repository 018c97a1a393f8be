//! eurofx CLI - ECB euro reference-rate history.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "eurofx")]
#[command(about = "Keeps and queries a local history of ECB euro reference rates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Database file. Defaults to the platform data directory.
    #[arg(long, env = "EUROFX_DATABASE", global = true)]
    database: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the ECB feed and store new dates
    Scrape {
        /// Override the full-history feed URL
        #[arg(long)]
        history_url: Option<String>,

        /// Override the recent-window feed URL
        #[arg(long)]
        recent_url: Option<String>,

        /// Feed request timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },

    /// Show the most recently stored rates
    Latest {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the rates published on a date
    Date {
        /// Date (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the rates for every stored date in a range (inclusive)
    History {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// End date (YYYY-MM-DD)
        end: String,

        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delete every stored rate set
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Re-basing and filtering options shared by the query commands.
#[derive(Args)]
struct QueryArgs {
    /// Currency to express rates against (default: EUR)
    #[arg(short, long)]
    base: Option<String>,

    /// Comma-separated currencies to show, in order (e.g., USD,BRL)
    #[arg(short, long, value_delimiter = ',')]
    symbols: Option<Vec<String>>,
}

/// Output options shared by the query commands.
#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    display::init_logging(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let database = cli.database;
    match command {
        Commands::Scrape {
            history_url,
            recent_url,
            timeout,
        } => {
            commands::scrape::scrape(
                database,
                history_url,
                recent_url,
                timeout,
                cli.quiet,
            )
            .await
        }
        Commands::Latest { query, output } => commands::query::latest(
            database,
            &query.into_rate_query(),
            output.format,
            output.output.as_deref(),
        ),
        Commands::Date {
            date,
            query,
            output,
        } => commands::query::on_date(
            database,
            &date,
            &query.into_rate_query(),
            output.format,
            output.output.as_deref(),
        ),
        Commands::History {
            start,
            end,
            query,
            output,
        } => commands::query::history(
            database,
            &start,
            &end,
            &query.into_rate_query(),
            output.format,
            output.output.as_deref(),
        ),
        Commands::Reset { yes } => commands::reset::reset(database, yes),
    }
}

impl QueryArgs {
    fn into_rate_query(self) -> eurofx_lib::RateQuery {
        let mut query = eurofx_lib::RateQuery::new();
        if let Some(base) = self.base {
            query = query.with_base(base.trim().to_uppercase());
        }
        if let Some(symbols) = self.symbols {
            query = query.with_symbols(
                symbols
                    .iter()
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty()),
            );
        }
        query
    }
}
