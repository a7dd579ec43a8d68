//! lse - a directory lister with colors, icons and trees

pub mod collect;
pub mod config;
pub mod decorate;
pub mod entry;
pub mod error;
pub mod listing;
pub mod output;
pub mod sort;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use collect::{DirBlock, collect_entries, collect_paths, dir_size, list_directory, recurse_scan};
pub use config::{Config, expand_tilde};
pub use decorate::Decorator;
pub use entry::{Entry, EntryKind, Mode};
pub use error::{ConfigError, LseError};
pub use listing::{ListOptions, Lister};
pub use output::{Row, TableLayout, render_table, visible_length};
pub use sort::sort_entries;
pub use tree::{TreeBuilder, TreeRow};
