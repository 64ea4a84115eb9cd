use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeOptions {
    pub root: PathBuf,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
    pub indent: String,
}
impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: None,
            include_hidden: true,
            respect_gitignore: false,
            follow_links: true,
            ignore_patterns: Vec::new(),
            indent: "    ".to_string(),
        }
    }
}
#[derive(Debug, Default)]
pub struct TreeBuilder {
    options: TreeOptions,
}
impl TreeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TreeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.options.indent = indent.into();
        self
    }
    pub fn build(self) -> TreeOptions {
        self.options
    }
}
