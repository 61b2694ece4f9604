//! wxls CLI - spreadsheet address tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wxls::prelude::*;

#[derive(Parser)]
#[command(name = "wxls")]
#[command(author, version, about = "Spreadsheet cell and range address tool")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the address of a cell given 0-based indices
    Cell {
        /// Column index (0 = A)
        #[arg(allow_negative_numbers = true)]
        column: i64,

        /// Row index (0 = row 1)
        #[arg(allow_negative_numbers = true)]
        row: i64,

        /// Sheet name prefix
        #[arg(short, long)]
        sheet: Option<String>,

        /// Absolute markers to write
        #[arg(short, long, value_enum, default_value_t = Anchor::None)]
        anchor: Anchor,
    },

    /// Build a range from two cell addresses and print it
    Range {
        /// Start cell (e.g. A1, Sheet1!$B$2)
        start: String,

        /// End cell
        end: String,

        /// Sheet consistency check
        #[arg(long, value_enum, default_value_t = Sheets::Unchecked)]
        sheet_policy: Sheets,

        /// Handling of reversed ranges
        #[arg(long, value_enum, default_value_t = Order::AsGiven)]
        order: Order,
    },

    /// Parse a cell or range address and describe it
    Parse {
        /// Address such as B2, Sheet1!A1 or A1:C3
        address: String,
    },

    /// Print the cells and range from the demo page
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum Anchor {
    None,
    Row,
    Column,
    All,
}

impl From<Anchor> for AnchorStyle {
    fn from(anchor: Anchor) -> Self {
        match anchor {
            Anchor::None => AnchorStyle::None,
            Anchor::Row => AnchorStyle::Row,
            Anchor::Column => AnchorStyle::Column,
            Anchor::All => AnchorStyle::All,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Sheets {
    Unchecked,
    Consistent,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    AsGiven,
    Normalize,
    Reject,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Cell {
            column,
            row,
            sheet,
            anchor,
        } => print_cell(column, row, sheet.as_deref(), anchor.into()),
        Commands::Range {
            start,
            end,
            sheet_policy,
            order,
        } => print_range(&start, &end, policy_from_args(sheet_policy, order)),
        Commands::Parse { address } => describe(&address),
        Commands::Demo => demo(),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn policy_from_args(sheets: Sheets, order: Order) -> RangePolicy {
    RangePolicy {
        sheets: match sheets {
            Sheets::Unchecked => SheetPolicy::Unchecked,
            Sheets::Consistent => SheetPolicy::Consistent,
        },
        order: match order {
            Order::AsGiven => OrderPolicy::AsGiven,
            Order::Normalize => OrderPolicy::Normalize,
            Order::Reject => OrderPolicy::Reject,
        },
    }
}

fn print_cell(column: i64, row: i64, sheet: Option<&str>, anchor: AnchorStyle) -> Result<()> {
    let cell = Cell::new(column, row, sheet)
        .with_context(|| format!("Cannot build cell at column {}, row {}", column, row))?
        .anchored(anchor);

    println!("{}", cell.to_str_address());
    Ok(())
}

fn print_range(start: &str, end: &str, policy: RangePolicy) -> Result<()> {
    let start_cell: Cell = start
        .parse()
        .with_context(|| format!("Invalid start cell '{}'", start))?;
    let end_cell: Cell = end
        .parse()
        .with_context(|| format!("Invalid end cell '{}'", end))?;

    tracing::debug!(?policy, "building range");
    let range = Range::with_policy(start_cell, end_cell, &policy)
        .with_context(|| format!("Cannot build range from '{}' to '{}'", start, end))?;

    println!("{}", range.to_str_address());
    Ok(())
}

fn describe(address: &str) -> Result<()> {
    if address.contains(':') {
        let range: Range = address
            .parse()
            .with_context(|| format!("Invalid range '{}'", address))?;

        println!("Range: {}", range);
        println!("Start: {}", range.start());
        println!("End: {}", range.end());
        println!(
            "Size: {} rows x {} columns ({} cells)",
            range.row_count(),
            range.col_count(),
            range.cell_count()
        );
        if range.is_reversed() {
            println!("Note: end lies before start");
        }
    } else {
        let cell: Cell = address
            .parse()
            .with_context(|| format!("Invalid cell '{}'", address))?;

        println!("Cell: {}", cell);
        println!("Sheet: {}", cell.sheet().unwrap_or("(none)"));
        println!("Column: {}", cell.column());
        println!("Row: {}", cell.row());
    }

    Ok(())
}

fn demo() -> Result<()> {
    let cell11 = Cell::new(0, 0, None)?;
    let cell12 = Cell::new(12, 12, None)?;
    println!(
        "Defined 2 different cells {} and {}",
        cell11.to_str_address(),
        cell12.to_str_address()
    );

    let cell21 = Cell::new(1, 1, Some("Sheet1"))?;
    let cell22 = Cell::new(100, 100, Some("Sheet1"))?;
    println!(
        "Defined 2 different cells with sheet: {} and {}",
        cell21.to_str_address(),
        cell22.to_str_address()
    );

    let range = Range::new(cell11, cell12);
    println!(
        "Defined a single range with cells. {}",
        range.to_str_address()
    );

    Ok(())
}
