use clap::{Parser, Subcommand};
use oilfeed::cli;
use oilfeed::error::FeedResult;
use oilfeed::types::Template;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oilfeed")]
#[command(about = "Motor-oil catalog to eBay bulk-listing feed converter.")]
#[command(long_about = "OilFeed - Excel catalog in, eBay File Exchange workbook out.

Reads a motor-oil catalog (.xlsx, first sheet, header row), matches columns
case- and accent-insensitively, and derives the eBay listing columns:
title, prices, HTML description, item specifics (C:*), manufacturer and
responsible-person data.

COMMANDS:
  convert    - Catalog (.xlsx) to eBay feed (.xlsx)
  preview    - Render the HTML descriptions only
  columns    - Show detected (normalized) columns
  check      - Verify required columns are present
  constants  - Print the built-in catalog constants as YAML

REQUIRED COLUMNS:
  sku, formato (l), nome olio, viscosita, tipologia, acea, marca,
  prezzo marketplace, codice prodotto, utilizzo
OPTIONAL:
  descrizione, img* (photo URLs)

EXAMPLES:
  oilfeed convert catalogo.xlsx ebay_output.xlsx
  oilfeed convert catalogo.xlsx ebay.xlsx --template minimal --preview anteprima.html
  oilfeed constants -o constants.yaml")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert a catalog to an eBay bulk-listing workbook.

Writes a single sheet named 'eBay' with one listing per catalog row.
Nothing is written when required columns are missing.

TEMPLATES:
  full     - Every column, including photos and GPSR manufacturer data (default)
  minimal  - Core listing columns only

CONSTANTS:
  Quantity, VAT, location, return policy and manufacturer data come from
  built-in defaults. Override any of them with --constants file.yaml
  (see 'oilfeed constants').")]
    /// Convert a catalog to an eBay feed
    Convert {
        /// Path to catalog Excel file (.xlsx)
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        output: PathBuf,

        /// Output column template
        #[arg(short, long, value_enum, default_value_t = Template::Full)]
        template: Template,

        /// YAML file overriding the catalog constants
        #[arg(short, long, env = "OILFEED_CONSTANTS")]
        constants: Option<PathBuf>,

        /// Also write an HTML preview of the descriptions
        #[arg(short, long)]
        preview: Option<PathBuf>,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render the HTML description preview
    Preview {
        /// Path to catalog Excel file (.xlsx)
        input: PathBuf,

        /// Output HTML file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML file overriding the catalog constants
        #[arg(short, long, env = "OILFEED_CONSTANTS")]
        constants: Option<PathBuf>,
    },

    /// Show detected columns after normalization
    Columns {
        /// Path to catalog Excel file (.xlsx)
        input: PathBuf,
    },

    /// Check that every required column is present
    Check {
        /// Path to catalog Excel file (.xlsx)
        input: PathBuf,
    },

    /// Print the built-in catalog constants as YAML
    Constants {
        /// Output YAML file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "oilfeed=debug" } else { "oilfeed=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> FeedResult<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Convert { verbose: true, .. });
    init_tracing(verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            template,
            constants,
            preview,
            verbose,
        } => cli::convert(input, output, template, constants, preview, verbose),

        Commands::Preview {
            input,
            output,
            constants,
        } => cli::preview(input, output, constants),

        Commands::Columns { input } => cli::columns(input),

        Commands::Check { input } => cli::check(input),

        Commands::Constants { output } => cli::constants(output),
    }
}
