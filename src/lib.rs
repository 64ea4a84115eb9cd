//! # Recordkit
//!
//! `recordkit` bundles three small, independent file utilities:
//!
//! - [`total_salary`] / [`summarize_salaries`]: totals and averages a
//!   `Name,Salary` file, skipping malformed lines.
//! - [`get_cats_info`]: parses an `Id,Name,Age` file into [`CatRecord`]s,
//!   failing on the first malformed line.
//! - [`print_tree`]: walks a directory and prints it as an indented tree
//!   through an [`Emit`] sink, with names sorted at every level.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use recordkit::{Terminal, TreeBuilder, get_cats_info, print_tree, total_salary};
//!
//! let (total, average) = total_salary("salary_file.txt");
//! println!("total {} average {}", total, average);
//!
//! for cat in get_cats_info("cats.txt").expect("Failed to read cats") {
//!     println!("{} is {}", cat.name, cat.age);
//! }
//!
//! let options = TreeBuilder::new(".").max_depth(2).build();
//! print_tree(&options, Terminal::stdout(true)).expect("Failed to print tree");
//! ```

mod cats;
mod emit;
mod error;
mod options;
pub mod output;
mod salary;
mod tree;
mod types;

pub use cats::{get_cats_info, parse_cats};
pub use emit::{Emit, Recorder, Style, Terminal};
pub use error::RecordkitError;
pub use options::{TreeBuilder, TreeOptions};
pub use salary::{summarize_salaries, total_salary, total_salary_to};
pub use tree::{entry_line, print_tree, root_name, validate_root, walk_tree};
pub use types::{CatRecord, EntryKind, SalarySummary, SkippedLine, TreeEntry};
