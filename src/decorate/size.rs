//! Size column

use crate::config::{RESET, SizeColors};

pub const KIB: u64 = 1024;
pub const MIB: u64 = KIB * 1024;
pub const GIB: u64 = MIB * 1024;

/// Color class of a byte count: `< 1 KiB`, `< 1 MiB`, `< 1 GiB`, the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
    Huge,
}

impl SizeBucket {
    pub fn of(bytes: u64) -> Self {
        if bytes < KIB {
            SizeBucket::Small
        } else if bytes < MIB {
            SizeBucket::Medium
        } else if bytes < GIB {
            SizeBucket::Large
        } else {
            SizeBucket::Huge
        }
    }

    pub fn color(self, colors: &SizeColors) -> &str {
        match self {
            SizeBucket::Small => &colors.small,
            SizeBucket::Medium => &colors.medium,
            SizeBucket::Large => &colors.large,
            SizeBucket::Huge => &colors.huge,
        }
    }
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.1}G", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1}M", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1}K", bytes as f64 / KIB as f64)
    } else {
        format!("{}B", bytes)
    }
}

pub fn size_fragment(bytes: u64, colors: &SizeColors) -> String {
    format!("{}{}{}", SizeBucket::of(bytes).color(colors), format_size(bytes), RESET)
}
