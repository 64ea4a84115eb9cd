//! Command-line interface for the directory tree printer.
//!
//! Prints the given directory and everything below it, directories in blue
//! with a trailing `/` and files in green.

use clap::{ArgAction, Parser, ValueEnum};
use recordkit::{Emit, RecordkitError, Style, Terminal, TreeBuilder, TreeOptions, print_tree};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::exit;

/// dirtree — print a directory as a colored tree
#[derive(Parser)]
#[command(name = "dirtree", version, about, long_about = None)]
struct Cli {
    /// Directory to print
    path: PathBuf,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Skip hidden entries
    #[arg(long = "no-hidden", action = ArgAction::SetFalse)]
    hidden: bool,

    /// Honor .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// List symlinked directories without descending into them
    #[arg(long = "no-follow-links", action = ArgAction::SetFalse)]
    follow_links: bool,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl Cli {
    fn into_options(self) -> (TreeOptions, bool) {
        let mut builder = TreeBuilder::new(self.path)
            .include_hidden(self.hidden)
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links)
            .ignore_patterns(self.ignore_patterns);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.color.enabled())
    }
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);
    let (options, color) = cli.into_options();
    let mut term = Terminal::stdout(color);

    if let Err(e) = run(&options, &mut term) {
        let _ = term.emit(&format!("Error: {}", e), Style::Error);
        exit(1);
    }
}

fn run<E: Emit>(options: &TreeOptions, term: &mut E) -> Result<(), RecordkitError> {
    recordkit::validate_root(&options.root)?;
    term.emit(
        &format!("Directory tree for: {}", options.root.display()),
        Style::Header,
    )
    .map_err(RecordkitError::Output)?;
    term.emit("", Style::Plain).map_err(RecordkitError::Output)?;
    print_tree(options, term)
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
