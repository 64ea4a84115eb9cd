//! Recursive directory listing.
//!
//! Entries come out in pre-order: a directory is yielded before its children,
//! and siblings are sorted byte-wise by name with files and directories mixed.

use crate::emit::{Emit, Style};
use crate::error::RecordkitError;
use crate::options::TreeOptions;
use crate::types::{EntryKind, TreeEntry};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
}
impl Walker {
    fn new(options: &TreeOptions) -> Result<Self, RecordkitError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .hidden(!options.include_hidden)
            .git_ignore(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .parents(options.respect_gitignore)
            .require_git(false)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    RecordkitError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| RecordkitError::Walk(format!("Failed to build glob set: {}", e)))?;
            builder.filter_entry(move |entry| {
                entry.depth() == 0
                    || !(matcher.is_match(entry.path()) || matcher.is_match(entry.file_name()))
            });
        }
        Ok(Self {
            inner: builder.build(),
            root: options.root.clone(),
        })
    }
    fn into_iter(self) -> impl Iterator<Item = Result<TreeEntry, RecordkitError>> {
        let root = self.root;
        self.inner.filter_map(move |result| match result {
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => Some(Ok(to_tree_entry(entry.path(), entry.depth()))),
            Err(e) => match dangling_link(&e) {
                Some(path) => {
                    let depth = path.strip_prefix(&root).map_or(1, |rel| rel.components().count());
                    Some(Ok(to_tree_entry(&path, depth)))
                }
                None => Some(Err(RecordkitError::Walk(e.to_string()))),
            },
        })
    }
}

/// Path of a symlink whose target is gone.
///
/// Following links makes the walker stat every link target, so a dangling link
/// shows up as an error. It is still an entry and gets listed as a file.
fn dangling_link(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithDepth { err, .. } => dangling_link(err),
        ignore::Error::WithPath { path, .. } => {
            let is_link = path
                .symlink_metadata()
                .is_ok_and(|m| m.file_type().is_symlink());
            (is_link && !path.exists()).then(|| path.clone())
        }
        _ => None,
    }
}

fn to_tree_entry(path: &Path, depth: usize) -> TreeEntry {
    // `is_dir` follows symlinks, so a link to a directory is listed as one
    // even when the walk does not descend into it.
    let kind = if path.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    TreeEntry {
        path: path.to_path_buf(),
        name,
        kind,
        depth,
    }
}

/// Checks that `path` exists and is a directory.
pub fn validate_root(path: impl AsRef<Path>) -> Result<(), RecordkitError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RecordkitError::MissingPath(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(RecordkitError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Display name for the root line.
///
/// Paths without a final component (`.`, `..`, `/`) fall back to the final
/// component of the canonical path, then to the path as given.
pub fn root_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    path.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Collects every entry below `options.root`, excluding the root itself.
///
/// # Errors
///
/// Fails on an invalid root, a bad ignore pattern, or the first unreadable
/// directory encountered.
pub fn walk_tree(options: &TreeOptions) -> Result<Vec<TreeEntry>, RecordkitError> {
    validate_root(&options.root)?;
    Walker::new(options)?.into_iter().collect()
}

/// Formats an entry as it appears in the printed tree, without color.
pub fn entry_line(entry: &TreeEntry, indent: &str) -> String {
    let prefix = indent.repeat(entry.depth);
    match entry.kind {
        EntryKind::Directory => format!("{}{}/", prefix, entry.name),
        EntryKind::File => format!("{}{}", prefix, entry.name),
    }
}

/// Prints the tree rooted at `options.root` to `emitter`.
///
/// The root line (`<name>/`) always comes first, followed by each entry as it
/// is walked. Directories use [`Style::Directory`], files [`Style::File`].
pub fn print_tree<E: Emit>(options: &TreeOptions, mut emitter: E) -> Result<(), RecordkitError> {
    validate_root(&options.root)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Printing tree for {}", options.root.display());
    let walker = Walker::new(options)?;
    emitter
        .emit(&format!("{}/", root_name(&options.root)), Style::Directory)
        .map_err(RecordkitError::Output)?;
    for entry in walker.into_iter() {
        let entry = entry?;
        let style = match entry.kind {
            EntryKind::Directory => Style::Directory,
            EntryKind::File => Style::File,
        };
        emitter
            .emit(&entry_line(&entry, &options.indent), style)
            .map_err(RecordkitError::Output)?;
    }
    Ok(())
}

