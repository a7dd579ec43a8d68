//! CLI entry point for lse

use std::ffi::OsString;
use std::io::{IsTerminal, Write};
use std::time::SystemTime;

use clap::{Parser, ValueEnum};
use lse::config::{Config, DEFAULT_CONFIG_PATH, expand_tilde};
use lse::{ListOptions, Lister};
use termcolor::{ColorChoice, StandardStream};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `LSE_LOG=debug`).
const LOG_ENV: &str = "LSE_LOG";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Pick the termcolor choice for stdout.
fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return ColorChoice::Never;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return ColorChoice::Always;
            }
            if !std::io::stdout().is_terminal() {
                return ColorChoice::Never;
            }
            // termcolor still checks TERM (e.g. TERM=dumb)
            ColorChoice::Auto
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lse")]
#[command(about = "List directory contents with colors, icons and trees")]
#[command(version)]
struct Args {
    /// Path or glob pattern to list (`**` matches any depth)
    #[arg(default_value = ".")]
    pattern: String,

    /// Configuration file (JSON); `-cfg` is accepted as well
    #[arg(long = "cfg", value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    cfg: String,

    /// Show directories before files
    #[arg(short = 'd', long = "dirs-first")]
    dirs_first: bool,

    /// Show hidden (dot) files
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Show the real, recursive size of directories
    #[arg(short = 's', long = "size")]
    real_dir_size: bool,

    /// List the contents of every subdirectory, grouped by directory
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Show a tree instead of a table
    #[arg(short = 't', long = "tree")]
    tree: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config")]
    print_config: bool,
}

/// Rewrite the single-dash `-cfg` spelling to `--cfg` so clap can parse it.
fn normalize_legacy_flags<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some("-cfg") => Some(OsString::from("--cfg")),
            Some(s) if s.starts_with("-cfg=") => Some(OsString::from(format!("-{}", s))),
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_config(config: &Config) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)
}

fn main() {
    init_logging();

    let args = Args::parse_from(normalize_legacy_flags(std::env::args_os()));

    let config_path = expand_tilde(&args.cfg);
    let config = Config::load_or_default(&config_path);
    debug!("configuration from {}", config_path.display());

    if args.print_config {
        if let Err(e) = print_config(&config) {
            debug!("error writing output: {}", e);
        }
        return;
    }

    let options = ListOptions {
        dirs_first: args.dirs_first,
        show_all: args.all,
        real_dir_size: args.real_dir_size,
        recursive: args.recursive,
        tree: args.tree,
    };

    let stdout = StandardStream::stdout(color_choice(args.color));
    let mut out = stdout.lock();
    let lister = Lister::new(&config, &options, SystemTime::now());

    // Listing failures already degrade to empty output; a failed write
    // (e.g. a closed pipe) is not worth a nonzero exit either.
    if let Err(e) = lister.render(&args.pattern, &mut out) {
        debug!("error writing output: {}", e);
    }
}
