//! ORPflow - Order Book Snapshot Viewer
//!
//! Loads a simulation CSV and shows the order book at a chosen time, either
//! interactively or as a one-shot text/JSON rendering.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use book_viewer::config::{Config, LogFormat};
use book_viewer::dataset::Preview;
use book_viewer::render;
use book_viewer::{viewer, Dataset, ViewerError};

#[derive(Parser)]
#[command(
    name = "book-viewer",
    version,
    about = "Visualize simulated order book snapshots from a CSV export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrub through the dataset in an interactive terminal view
    View {
        /// Simulation CSV file
        file: PathBuf,
    },
    /// Print the order book nearest to a time
    Show {
        /// Simulation CSV file
        file: PathBuf,

        /// Requested time (defaults to the first timestamp)
        #[arg(long, allow_negative_numbers = true)]
        time: Option<f64>,

        /// Emit JSON instead of a text chart
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Width of the longest bar (overrides VIEWER_BAR_WIDTH)
        #[arg(long)]
        width: Option<usize>,
    },
    /// Print the selectable time range
    Range {
        /// Simulation CSV file
        file: PathBuf,
    },
    /// Print the first rows of the file, before sorting
    Preview {
        /// Simulation CSV file
        file: PathBuf,

        /// Number of rows (overrides VIEWER_PREVIEW_ROWS)
        #[arg(long)]
        rows: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    // The interactive view owns the terminal, log lines would corrupt it
    if !matches!(cli.command, Commands::View { .. }) {
        init_logging(config.log_format);
    }

    match cli.command {
        Commands::View { file } => {
            let dataset = load(&file)?;
            if dataset.is_empty() {
                warn_empty(&file);
                return Ok(());
            }
            viewer::run(dataset, &config)?;
        }
        Commands::Show {
            file,
            time,
            json,
            width,
        } => {
            let dataset = load(&file)?;
            let range = match dataset.range() {
                Ok(range) => range,
                Err(ViewerError::EmptyDataset) => {
                    warn_empty(&file);
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            let snapshot = dataset.select(time.unwrap_or(range.min))?;
            if json {
                println!("{}", render::json::render(&snapshot)?);
            } else {
                let width = width.unwrap_or(config.bar_width).max(1);
                print!("{}", render::text::render(&snapshot, width));
            }
        }
        Commands::Range { file } => {
            let dataset = load(&file)?;
            match dataset.range() {
                Ok(range) => {
                    println!("min:  {}", range.min);
                    println!("max:  {}", range.max);
                    println!("step: {}", range.step);
                    println!("rows: {}", range.rows);
                }
                Err(ViewerError::EmptyDataset) => warn_empty(&file),
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Preview { file, rows } => {
            let dataset = load(&file)?;
            if dataset.is_empty() {
                warn_empty(&file);
                return Ok(());
            }
            let preview = Preview::from_path(&file, rows.unwrap_or(config.preview_rows))?;
            print!("{}", render::text::preview_table(&preview));
        }
    }

    Ok(())
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn load(file: &Path) -> anyhow::Result<Dataset> {
    let dataset = Dataset::from_path(file).map_err(|e| match e {
        ViewerError::ParseError(msg) => anyhow::anyhow!(
            "{} is not a valid simulation CSV ({msg}); please provide a valid file",
            file.display()
        ),
        other => other.into(),
    })?;
    info!(path = %file.display(), rows = dataset.len(), "Dataset loaded");
    Ok(dataset)
}

fn warn_empty(file: &Path) {
    warn!(path = %file.display(), "Dataset is empty");
    eprintln!(
        "warning: {} contains no rows; nothing to display",
        file.display()
    );
}
