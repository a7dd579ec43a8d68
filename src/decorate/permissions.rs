//! Permission column

use crate::config::{FileTypeColors, PermissionColors, RESET};
use crate::entry::{Entry, EntryKind, Mode};

/// One rwx triad and the special bit that shares its execute slot.
struct Triad {
    read: u32,
    write: u32,
    exec: u32,
    special: u32,
}

const TRIADS: [Triad; 3] = [
    Triad { read: 0o400, write: 0o200, exec: 0o100, special: Mode::SETUID },
    Triad { read: 0o040, write: 0o020, exec: 0o010, special: Mode::SETGID },
    Triad { read: 0o004, write: 0o002, exec: 0o001, special: Mode::STICKY },
];

fn paint(out: &mut String, color: &str, ch: char) {
    out.push_str(color);
    out.push(ch);
    out.push_str(RESET);
}

fn type_color<'a>(kind: EntryKind, perms: &'a PermissionColors, types: &'a FileTypeColors) -> &'a str {
    match kind {
        EntryKind::Directory => &perms.dir,
        EntryKind::Regular => &perms.no_access,
        EntryKind::Symlink => &types.symlink,
        EntryKind::Orphan => &types.orphan,
        EntryKind::BlockDevice => &types.block_dev,
        EntryKind::CharDevice => &types.char_dev,
        EntryKind::Socket => &types.socket,
        EntryKind::Pipe => &types.pipe,
    }
}

/// `ls -l` style mode string, ten visible characters, each colored by its class.
pub fn permissions_fragment(
    entry: &Entry,
    perms: &PermissionColors,
    types: &FileTypeColors,
) -> String {
    let mode = entry.mode;
    let mut out = String::new();

    paint(&mut out, type_color(entry.kind, perms, types), entry.kind.type_char());

    for triad in &TRIADS {
        if mode.has(triad.read) {
            paint(&mut out, &perms.read, 'r');
        } else {
            paint(&mut out, &perms.no_access, '-');
        }
        if mode.has(triad.write) {
            paint(&mut out, &perms.write, 'w');
        } else {
            paint(&mut out, &perms.no_access, '-');
        }

        let exec = mode.has(triad.exec);
        if mode.has(triad.special) {
            let (color, ch) = match (triad.special, exec) {
                (Mode::SETUID, true) => (&perms.suid, 's'),
                (Mode::SETUID, false) => (&perms.suid, 'S'),
                (Mode::SETGID, true) => (&perms.sgid, 's'),
                (Mode::SETGID, false) => (&perms.sgid, 'S'),
                (_, true) => (&perms.exec_sticky, 't'),
                (_, false) => (&perms.sticky, 'T'),
            };
            paint(&mut out, color, ch);
        } else if exec {
            paint(&mut out, &perms.exec, 'x');
        } else {
            paint(&mut out, &perms.no_access, '-');
        }
    }

    out
}
