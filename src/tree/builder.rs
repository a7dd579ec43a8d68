//! Depth-first tree flattening

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collect::{RECURSIVE_MARKER, collect_entries, list_directory};
use crate::entry::Entry;
use crate::error::LseError;
use crate::sort::sort_entries;

use super::prefix::tree_prefix;

/// One printed line of a tree: the entry and its box-drawing prefix.
#[derive(Debug, Clone)]
pub struct TreeRow {
    pub entry: Entry,
    pub prefix: String,
    pub is_last: bool,
}

/// Builds the pre-order row sequence of a tree listing.
pub struct TreeBuilder {
    show_all: bool,
    dirs_first: bool,
}

impl TreeBuilder {
    pub fn new(show_all: bool, dirs_first: bool) -> Self {
        Self {
            show_all,
            dirs_first,
        }
    }

    /// Rows for everything below `pattern`, children right after their parent.
    ///
    /// The pattern's own matches form the first level. Directories among
    /// them (and below) are descended; symlinks to directories are not.
    /// A `**` pattern matches at every depth, so only matches with no
    /// matched ancestor are kept as roots.
    pub fn build(&self, pattern: &str) -> Result<Vec<TreeRow>, LseError> {
        let mut top = collect_entries(pattern, self.show_all)?;
        if pattern.contains(RECURSIVE_MARKER) {
            retain_topmost(&mut top);
        }
        let mut rows = Vec::new();
        self.push_level(top, &[], &mut rows);
        Ok(rows)
    }

    fn walk_dir(&self, dir: &Path, ancestors: &[bool], rows: &mut Vec<TreeRow>) {
        let entries = list_directory(dir, self.show_all).unwrap_or_else(|e| {
            debug!("{}", e);
            Vec::new()
        });
        self.push_level(entries, ancestors, rows);
    }

    fn push_level(&self, mut entries: Vec<Entry>, ancestors: &[bool], rows: &mut Vec<TreeRow>) {
        sort_entries(&mut entries, self.dirs_first);

        let count = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == count;
            let descend = entry.is_dir().then(|| entry.path.clone());

            rows.push(TreeRow {
                prefix: tree_prefix(ancestors, is_last),
                entry,
                is_last,
            });

            if let Some(dir) = descend {
                // each subtree gets its own copy of the flags
                let child_ancestors = [ancestors, &[is_last]].concat();
                self.walk_dir(&dir, &child_ancestors, rows);
            }
        }
    }
}

/// Drop entries lying below another entry of the same batch.
fn retain_topmost(entries: &mut Vec<Entry>) {
    let matched: BTreeSet<PathBuf> = entries.iter().map(|e| e.path.clone()).collect();
    entries.retain(|e| !e.path.ancestors().skip(1).any(|a| matched.contains(a)));
}
