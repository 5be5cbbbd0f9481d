mod commands;
mod output;

use capbudg_core::error::CapBudgError;
use capbudg_core::extraction::{layout, ExtractOptions, WorkbookFile};
use capbudg_core::query::QueryEngine;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "capbudg",
    version,
    about = "Query tables extracted from a capital budgeting worksheet"
)]
struct Cli {
    /// Path to the capital budgeting workbook (.xls or .xlsx)
    #[arg(short, long, global = true, default_value = "Data/capbudg.xls")]
    file: PathBuf,

    /// Worksheet holding the template
    #[arg(long, global = true, default_value = layout::SHEET_NAME)]
    sheet: String,

    /// Output format: table (default) or json
    #[arg(short, long, global = true, default_value = "table")]
    output: String,

    /// Log extraction and query details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every table extracted from the worksheet
    Tables,
    /// Show the row names of a table
    Describe {
        /// Table name (case-sensitive), e.g. "INITIAL INVESTMENT"
        table_name: String,
    },
    /// Sum every numeric value in a row
    Sum {
        /// Table name (case-sensitive)
        table_name: String,
        /// Row name, e.g. "Tax Credit (if any)"
        row_name: String,
    },
    /// Print the whole extracted collection as JSON
    Dump,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = WorkbookFile::new(&cli.file);
    let options = ExtractOptions {
        sheet_name: cli.sheet,
    };
    let (engine, startup_error) = capbudg_core::open_engine(&source, &options);
    debug!(tables = engine.collection().len(), "engine ready");

    let result = execute(cli.command, &engine, &cli.output)
        .map_err(|e| explain_failure(e, startup_error));

    if let Err(e) = result {
        match cli.output.as_str() {
            "json" => output::json::print_error(&e),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}

fn execute(
    command: Commands,
    engine: &QueryEngine,
    output_format: &str,
) -> Result<(), CapBudgError> {
    match command {
        Commands::Tables => commands::query::tables(engine, output_format),
        Commands::Describe { table_name } => {
            commands::query::describe(engine, &table_name, output_format)
        }
        Commands::Sum {
            table_name,
            row_name,
        } => commands::query::sum(engine, &table_name, &row_name, output_format),
        Commands::Dump => commands::dump::run(engine),
    }
}

/// A query against an empty collection reports why extraction failed
/// instead of the bare "no data" error.
fn explain_failure(err: CapBudgError, startup_error: Option<CapBudgError>) -> CapBudgError {
    match (err, startup_error) {
        (CapBudgError::CollectionUnavailable, Some(cause)) => cause,
        (err, _) => err,
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
