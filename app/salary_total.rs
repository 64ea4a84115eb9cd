//! Command-line interface for the salary aggregator.
//!
//! Reads a `Name,Salary` file and prints the total and average salary.

use clap::{Parser, ValueEnum};
use recordkit::output::{self, OutputFormat};
use recordkit::{Emit, Style, Terminal, summarize_salaries, total_salary};
use std::path::{Path, PathBuf};
use std::process::exit;

/// salary-total — sum and average of a Name,Salary file
#[derive(Parser)]
#[command(name = "salary-total", version, about, long_about = None)]
struct Cli {
    /// Salary file, one `Name,Salary` per line
    #[arg(default_value = "salary_file.txt")]
    path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail with a non-zero exit code if the file is missing or unreadable
    #[arg(long)]
    strict: bool,

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

    let (total, average) = if cli.strict {
        match summarize_salaries(&cli.path) {
            Ok(summary) => {
                let mut term = Terminal::stdout(false);
                for skip in &summary.skipped {
                    let _ = term.emit(&skip.warning(), Style::Warning);
                }
                summary.totals()
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
    } else {
        total_salary(&cli.path)
    };

    let rendered = match output::format_salary(total, average, cli.format.into(), cli.pretty) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    emit_result(&rendered, cli.output.as_deref());
}

fn emit_result(rendered: &str, output_path: Option<&Path>) {
    match output_path {
        Some(path) => {
            if let Err(e) = output::write_to_file(rendered, path) {
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
