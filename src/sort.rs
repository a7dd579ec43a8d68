//! Entry ordering

use std::cmp::Ordering;

use crate::entry::Entry;

/// Stable sort by case-folded name, optionally with directories first.
///
/// Entries that compare equal keep their collection order.
pub fn sort_entries(entries: &mut [Entry], dirs_first: bool) {
    entries.sort_by(|a, b| compare_entries(a, b, dirs_first));
}

fn compare_entries(a: &Entry, b: &Entry, dirs_first: bool) -> Ordering {
    let by_kind = if dirs_first {
        b.is_dir().cmp(&a.is_dir())
    } else {
        Ordering::Equal
    };
    by_kind.then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::SystemTime;

    use super::*;
    use crate::entry::{EntryKind, Mode};

    fn entry(name: &str, kind: EntryKind) -> Entry {
        Entry {
            path: PathBuf::from(name),
            name: name.to_string(),
            kind,
            mode: Mode::new(0o644),
            size: 0,
            modified: SystemTime::UNIX_EPOCH,
            link_target: None,
        }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("zeta.txt", EntryKind::Regular),
            entry("Beta", EntryKind::Directory),
            entry("alpha.rs", EntryKind::Regular),
            entry("docs", EntryKind::Directory),
            entry("Cargo.toml", EntryKind::Regular),
        ]
    }

    #[test]
    fn test_case_insensitive_name_order() {
        let mut entries = sample();
        sort_entries(&mut entries, false);
        assert_eq!(
            names(&entries),
            vec!["alpha.rs", "Beta", "Cargo.toml", "docs", "zeta.txt"]
        );
    }

    #[test]
    fn test_dirs_first_partition() {
        let mut entries = sample();
        sort_entries(&mut entries, true);
        assert_eq!(
            names(&entries),
            vec!["Beta", "docs", "alpha.rs", "Cargo.toml", "zeta.txt"]
        );

        let split = entries.iter().position(|e| !e.is_dir()).unwrap();
        assert!(entries[..split].iter().all(Entry::is_dir));
        assert!(entries[split..].iter().all(|e| !e.is_dir()));
    }

    #[test]
    fn test_symlink_is_not_a_directory() {
        let mut entries = vec![
            entry("link", EntryKind::Symlink),
            entry("zdir", EntryKind::Directory),
        ];
        sort_entries(&mut entries, true);
        assert_eq!(names(&entries), vec!["zdir", "link"]);
    }

    #[test]
    fn test_equal_keys_keep_collection_order() {
        let mut entries = vec![
            entry("README", EntryKind::Regular),
            entry("readme", EntryKind::Regular),
            entry("ReadMe", EntryKind::Regular),
        ];
        sort_entries(&mut entries, false);
        assert_eq!(names(&entries), vec!["README", "readme", "ReadMe"]);
    }
}
