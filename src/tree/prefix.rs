//! Box-drawing prefixes

pub const TEE: &str = "├── ";
pub const CORNER: &str = "└── ";
pub const PIPE: &str = "│   ";
pub const BLANK: &str = "    ";

/// Prefix for an entry whose ancestors had the given last-sibling flags.
///
/// Each ancestor contributes a 4-column segment: blank when it was the last
/// of its siblings, a continuation line otherwise. The entry itself gets a
/// corner or a tee.
pub fn tree_prefix(ancestors: &[bool], is_last: bool) -> String {
    let mut prefix = String::with_capacity((ancestors.len() + 1) * CORNER.len());
    for &ancestor_last in ancestors {
        prefix.push_str(if ancestor_last { BLANK } else { PIPE });
    }
    prefix.push_str(if is_last { CORNER } else { TEE });
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level() {
        assert_eq!(tree_prefix(&[], false), "├── ");
        assert_eq!(tree_prefix(&[], true), "└── ");
    }

    #[test]
    fn test_nested() {
        assert_eq!(tree_prefix(&[false], true), "│   └── ");
        assert_eq!(tree_prefix(&[true], false), "    ├── ");
        assert_eq!(tree_prefix(&[false, true, false], true), "│       │   └── ");
    }
}
