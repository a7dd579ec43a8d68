//! Color and icon configuration
//!
//! The configuration is a JSON document whose shape mirrors these structs,
//! with PascalCase keys (`Permissions`, `FileTypes`, `BlockDev`, `SUID`, ...).
//! Every color value is a raw escape sequence such as `"\u001b[34m"`.
//!
//! Loading is all-or-nothing with respect to syntax: a document that fails
//! to parse is discarded in favor of the built-in defaults. Fields missing
//! from an otherwise valid document take their default individually.

mod defaults;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Where the configuration is looked for when `-cfg` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/lse.json";

/// Escape sequence that ends every colored fragment.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    pub permissions: PermissionColors,
    pub date: DateColors,
    pub file_types: FileTypeColors,
    pub size: SizeColors,
    /// Accepted for compatibility with existing config files; not rendered.
    pub user_group: UserGroupColors,
    pub icons: Icons,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FileTypeColors {
    pub directory: String,
    pub regular: String,
    pub symlink: String,
    pub block_dev: String,
    pub char_dev: String,
    pub socket: String,
    pub pipe: String,
    pub orphan: String,
    pub exec: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SizeColors {
    pub small: String,
    pub medium: String,
    pub large: String,
    pub huge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserGroupColors {
    pub user: String,
    pub group: String,
    pub other: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PermissionColors {
    pub dir: String,
    pub read: String,
    pub write: String,
    pub exec: String,
    pub exec_sticky: String,
    pub no_access: String,
    pub octal: String,
    pub acl: String,
    pub context: String,
    #[serde(rename = "SUID")]
    pub suid: String,
    #[serde(rename = "SGID")]
    pub sgid: String,
    pub sticky: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DateColors {
    pub seconds: String,
    pub hours: String,
    pub days: String,
    pub weeks: String,
}

/// Icon glyphs (Nerd Font code points by default).
///
/// `Extensions` and `Filenames` take precedence over the built-in lookup
/// tables in [`crate::decorate::icons`]. Names are compared lowercased, so
/// [`Config::load`] lowercases the keys of both maps and strips a leading
/// dot from extension keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Icons {
    pub directory: String,
    pub file: String,
    pub symlink: String,
    pub exec: String,
    pub socket: String,
    pub pipe: String,
    pub block_dev: String,
    pub char_dev: String,
    pub orphan: String,
    pub image: String,
    pub video: String,
    pub audio: String,
    pub archive: String,
    pub code: String,
    pub license: String,

    pub lock: String,
    pub golang: String,
    pub typescript: String,
    pub javascript: String,
    pub nix: String,
    pub rust: String,
    pub python: String,
    pub java: String,
    pub c_sharp: String,
    pub cpp: String,
    pub c: String,
    pub haskell: String,
    pub lua: String,
    pub ruby: String,
    #[serde(rename = "PHP")]
    pub php: String,
    #[serde(rename = "HTML")]
    pub html: String,
    #[serde(rename = "CSS")]
    pub css: String,
    pub markdown: String,
    pub json: String,
    #[serde(rename = "YAML")]
    pub yaml: String,
    #[serde(rename = "TOML")]
    pub toml: String,
    pub shell: String,
    pub docker: String,
    pub kubernetes: String,
    #[serde(rename = "SQL")]
    pub sql: String,

    pub extensions: BTreeMap<String, String>,
    pub filenames: BTreeMap<String, String>,
}

impl Config {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.icons.normalize_keys();
        Ok(config)
    }

    /// Load `path`, falling back to the defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) if e.is_not_found() => {
                debug!("{}; using defaults", e);
                Self::default()
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

impl Icons {
    /// Bring user map keys into the form they are looked up in.
    pub fn normalize_keys(&mut self) {
        self.filenames = std::mem::take(&mut self.filenames)
            .into_iter()
            .map(|(name, glyph)| (name.to_lowercase(), glyph))
            .collect();
        self.extensions = std::mem::take(&mut self.extensions)
            .into_iter()
            .map(|(ext, glyph)| (ext.trim_start_matches('.').to_lowercase(), glyph))
            .collect();
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
