//! Built-in colors and icons

use std::collections::BTreeMap;

use super::{DateColors, FileTypeColors, Icons, PermissionColors, SizeColors, UserGroupColors};

fn s(v: &str) -> String {
    v.to_string()
}

impl Default for PermissionColors {
    fn default() -> Self {
        Self {
            dir: s("\x1b[34m"), // blue
            read: s("\x1b[32m"), // green
            write: s("\x1b[33m"), // yellow
            exec: s("\x1b[31m"), // red
            exec_sticky: s("\x1b[35m"), // magenta
            no_access: s("\x1b[90m"), // gray
            octal: s("\x1b[36m"),
            acl: s("\x1b[34m"),
            context: s("\x1b[37m"),
            suid: s("\x1b[41m"), // red background
            sgid: s("\x1b[42m"), // green background
            sticky: s("\x1b[44m"), // blue background
        }
    }
}

impl Default for DateColors {
    fn default() -> Self {
        Self {
            seconds: s("\x1b[1;31m"),
            hours: s("\x1b[31m"),
            days: s("\x1b[36m"),
            weeks: s("\x1b[32m"),
        }
    }
}

impl Default for FileTypeColors {
    fn default() -> Self {
        Self {
            directory: s("\x1b[34m"),
            regular: s("\x1b[0m"),
            symlink: s("\x1b[36m"),
            block_dev: s("\x1b[93m"),
            char_dev: s("\x1b[95m"),
            socket: s("\x1b[35m"),
            pipe: s("\x1b[33m"),
            orphan: s("\x1b[31m"),
            exec: s("\x1b[1;31m"),
        }
    }
}

impl Default for SizeColors {
    fn default() -> Self {
        Self {
            small: s("\x1b[32m"),
            medium: s("\x1b[33m"),
            large: s("\x1b[31m"),
            huge: s("\x1b[1;35m"),
        }
    }
}

impl Default for UserGroupColors {
    fn default() -> Self {
        Self {
            user: s("\x1b[36m"),
            group: s("\x1b[35m"),
            other: s("\x1b[90m"),
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            directory: s("\u{f07b}"),
            file: s("\u{f016}"),
            symlink: s("\u{f481}"),
            exec: s("\u{f471}"),
            socket: s("\u{f1eb}"),
            pipe: s("\u{f0232}"),
            block_dev: s("\u{f0a0}"),
            char_dev: s("\u{f140b}"),
            orphan: s("\u{f071}"),
            image: s("\u{f03e}"),
            video: s("\u{f03d}"),
            audio: s("\u{f001}"),
            archive: s("\u{f1c6}"),
            code: s("\u{f121}"),
            license: s("\u{e60a}"),

            lock: s("\u{f023}"),
            golang: s("\u{e627}"),
            typescript: s("\u{e628}"),
            javascript: s("\u{e60c}"),
            nix: s("\u{f1105}"),
            rust: s("\u{e7a8}"),
            python: s("\u{e606}"),
            java: s("\u{e738}"),
            c_sharp: s("\u{f031b}"),
            cpp: s("\u{e61d}"),
            c: s("\u{e61e}"),
            haskell: s("\u{e61f}"),
            lua: s("\u{e620}"),
            ruby: s("\u{e791}"),
            php: s("\u{e608}"),
            html: s("\u{e60e}"),
            css: s("\u{e614}"),
            markdown: s("\u{e609}"),
            json: s("\u{e60b}"),
            yaml: s("\u{e615}"),
            toml: s("\u{e615}"),
            shell: s("\u{e795}"),
            docker: s("\u{f0868}"),
            kubernetes: s("\u{f10fe}"),
            sql: s("\u{e706}"),

            extensions: BTreeMap::new(),
            filenames: BTreeMap::new(),
        }
    }
}
