//! Command-line interface for the cat record parser.

use clap::{Parser, ValueEnum};
use recordkit::get_cats_info;
use recordkit::output::{self, OutputFormat};
use std::path::PathBuf;
use std::process::exit;

/// cat-info — parse an Id,Name,Age file into records
#[derive(Parser)]
#[command(name = "cat-info", version, about, long_about = None)]
struct Cli {
    /// Cat file, one `Id,Name,Age` per line
    #[arg(default_value = "cats.txt")]
    path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Write the records to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);

    let cats = match get_cats_info(&cli.path) {
        Ok(cats) => cats,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    #[cfg(feature = "logging")]
    tracing::info!("Parsed {} cat records", cats.len());

    let rendered = output::format_cats(&cats, cli.format.into(), cli.pretty).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        exit(1);
    });
    match cli.output {
        Some(path) => {
            if let Err(e) = output::write_to_file(&rendered, &path) {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
        None => print!("{}", rendered),
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
}
