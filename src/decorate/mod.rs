//! Entry decoration
//!
//! Turns an [`Entry`] into colored text fragments. Every fragment is plain
//! text interleaved with escape sequences taken from the [`Config`]; the
//! renderer measures them with [`crate::output::visible_length`].
//!
//! - `permissions` - ls-style mode string
//! - `size` - human readable size, bucketed by magnitude
//! - `date` - modification time, bucketed by age
//! - `name` - icon + name (+ link target)
//! - `icons` - filename / extension icon tables

mod date;
pub mod icons;
mod name;
mod permissions;
mod size;

use std::path::Path;
use std::time::SystemTime;

use crate::collect::dir_size;
use crate::config::{Config, RESET};
use crate::entry::Entry;
use crate::output::Row;

pub use date::{AgeBucket, DATE_FORMAT, age, date_fragment, format_date};
pub use name::{color_for, icon_for, name_fragment};
pub use permissions::permissions_fragment;
pub use size::{GIB, KIB, MIB, SizeBucket, format_size, size_fragment};

/// Maps entries to decorated fragments for one render pass.
pub struct Decorator<'a> {
    config: &'a Config,
    now: SystemTime,
    real_dir_size: bool,
}

impl<'a> Decorator<'a> {
    /// `now` is the reference point for age buckets.
    pub fn new(config: &'a Config, now: SystemTime, real_dir_size: bool) -> Self {
        Self {
            config,
            now,
            real_dir_size,
        }
    }

    pub fn permissions(&self, entry: &Entry) -> String {
        permissions_fragment(entry, &self.config.permissions, &self.config.file_types)
    }

    /// Size in bytes as displayed: directories report their recursive size
    /// when real directory sizes are enabled.
    pub fn display_size(&self, entry: &Entry) -> u64 {
        if entry.is_dir() && self.real_dir_size {
            dir_size(&entry.path)
        } else {
            entry.size
        }
    }

    pub fn size(&self, entry: &Entry) -> String {
        size_fragment(self.display_size(entry), &self.config.size)
    }

    pub fn date(&self, entry: &Entry) -> String {
        date_fragment(entry.modified, self.now, &self.config.date)
    }

    pub fn name(&self, entry: &Entry) -> String {
        name_fragment(entry, self.config)
    }

    /// The four columns of a flat listing.
    pub fn row(&self, entry: &Entry) -> Row {
        vec![
            self.permissions(entry),
            self.size(entry),
            self.date(entry),
            self.name(entry),
        ]
    }

    /// Header line introducing a directory block in recursive listings.
    pub fn directory_header(&self, path: &Path) -> String {
        format!(
            "{}{} {}/{}",
            self.config.file_types.directory,
            self.config.icons.directory,
            path.display(),
            RESET
        )
    }
}
