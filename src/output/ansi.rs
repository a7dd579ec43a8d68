//! Escape-sequence aware string measurement

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// CSI sequences: `ESC [`, parameter bytes, intermediate bytes, one final byte.
static ESCAPE_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]").expect("ESCAPE_SEQUENCE regex is invalid")
});

/// Remove every escape sequence from `s`.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    ESCAPE_SEQUENCE.replace_all(s, "")
}

/// Number of characters a terminal would draw for `s`.
pub fn visible_length(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/// Right-pad `s` with spaces until its visible length reaches `width`.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_length(s));
    let mut padded = String::with_capacity(s.len() + pad);
    padded.push_str(s);
    padded.extend(std::iter::repeat_n(' ', pad));
    padded
}
