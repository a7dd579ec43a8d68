//! Name column: icon, name and, for links, the target

use crate::config::{Config, RESET};
use crate::entry::{Entry, EntryKind};

use super::icons::regular_file_icon;

pub fn icon_for<'a>(entry: &Entry, config: &'a Config) -> &'a str {
    let icons = &config.icons;
    match entry.kind {
        EntryKind::Directory => &icons.directory,
        EntryKind::Symlink => &icons.symlink,
        EntryKind::Socket => &icons.socket,
        EntryKind::Pipe => &icons.pipe,
        EntryKind::BlockDevice => &icons.block_dev,
        EntryKind::CharDevice => &icons.char_dev,
        EntryKind::Orphan => &icons.orphan,
        EntryKind::Regular => regular_file_icon(&entry.name, entry.is_executable(), icons),
    }
}

pub fn color_for<'a>(entry: &Entry, config: &'a Config) -> &'a str {
    let colors = &config.file_types;
    match entry.kind {
        EntryKind::Directory => &colors.directory,
        EntryKind::Symlink => &colors.symlink,
        EntryKind::Socket => &colors.socket,
        EntryKind::Pipe => &colors.pipe,
        EntryKind::BlockDevice => &colors.block_dev,
        EntryKind::CharDevice => &colors.char_dev,
        EntryKind::Orphan => &colors.orphan,
        EntryKind::Regular if entry.is_executable() => &colors.exec,
        EntryKind::Regular => &colors.regular,
    }
}

pub fn name_fragment(entry: &Entry, config: &Config) -> String {
    let mut out = format!(
        "{}{} {}{}",
        color_for(entry, config),
        icon_for(entry, config),
        entry.name,
        RESET
    );

    if let Some(target) = &entry.link_target {
        // a dangling target is shown in the orphan color
        if entry.kind == EntryKind::Orphan {
            out.push_str(&format!(
                " -> {}{}{}",
                config.file_types.orphan,
                target.display(),
                RESET
            ));
        } else {
            out.push_str(&format!(" -> {}", target.display()));
        }
    }
    out
}
