//! Listing driver: flat, grouped recursive and tree output

use std::io::{self, Write};
use std::time::SystemTime;

use termcolor::{Color, ColorSpec, WriteColor};
use tracing::debug;

use crate::collect::{collect_entries, recurse_scan};
use crate::config::Config;
use crate::decorate::Decorator;
use crate::entry::Entry;
use crate::output::{Row, TableLayout, render_table, strip_ansi};
use crate::sort::sort_entries;
use crate::tree::TreeBuilder;

/// Shown instead of a tree when the root has nothing to display.
pub const NO_ENTRIES: &str = "no entries found";

/// Options fixed for the whole invocation.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub dirs_first: bool,
    pub show_all: bool,
    pub real_dir_size: bool,
    /// Follow the listing with one grouped block per subdirectory.
    pub recursive: bool,
    /// Render a single connected tree; takes precedence over `recursive`.
    pub tree: bool,
}

pub struct Lister<'a> {
    options: &'a ListOptions,
    decorator: Decorator<'a>,
}

impl<'a> Lister<'a> {
    pub fn new(config: &'a Config, options: &'a ListOptions, now: SystemTime) -> Self {
        Self {
            options,
            decorator: Decorator::new(config, now, options.real_dir_size),
        }
    }

    /// Render `pattern` to `out` in the mode selected by the options.
    ///
    /// Collection failures are logged and shown as empty listings; only
    /// write errors are returned.
    pub fn render<W: WriteColor>(&self, pattern: &str, out: &mut W) -> io::Result<()> {
        if self.options.tree {
            return self.render_tree(pattern, out);
        }

        let entries = collect_entries(pattern, self.options.show_all).unwrap_or_else(|e| {
            debug!("{}", e);
            Vec::new()
        });
        self.render_entries(entries, TableLayout::Flat, out)?;

        if self.options.recursive {
            self.render_blocks(pattern, out)?;
        }
        Ok(())
    }

    fn render_entries<W: WriteColor>(
        &self,
        mut entries: Vec<Entry>,
        layout: TableLayout,
        out: &mut W,
    ) -> io::Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        sort_entries(&mut entries, self.options.dirs_first);
        let rows: Vec<Row> = entries.iter().map(|e| self.decorator.row(e)).collect();
        render_table(out, &rows, layout)
    }

    fn render_blocks<W: WriteColor>(&self, pattern: &str, out: &mut W) -> io::Result<()> {
        writeln!(out)?;

        let blocks = recurse_scan(pattern, self.options.show_all, self.options.dirs_first)
            .unwrap_or_else(|e| {
                debug!("{}", e);
                Vec::new()
            });

        for block in blocks {
            let header = self.decorator.directory_header(&block.path);
            if out.supports_color() {
                writeln!(out, " {}", header)?;
            } else {
                writeln!(out, " {}", strip_ansi(&header))?;
            }
            self.render_entries(block.entries, TableLayout::Grouped, out)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_tree<W: WriteColor>(&self, pattern: &str, out: &mut W) -> io::Result<()> {
        let rows = TreeBuilder::new(self.options.show_all, self.options.dirs_first)
            .build(pattern)
            .unwrap_or_else(|e| {
                debug!("{}", e);
                Vec::new()
            });

        if rows.is_empty() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "{}", NO_ENTRIES)?;
            out.reset()?;
            writeln!(out)?;
            return Ok(());
        }

        writeln!(out, "{}", pattern)?;
        let table: Vec<Row> = rows
            .iter()
            .map(|r| vec![format!("{}{}", r.prefix, self.decorator.name(&r.entry))])
            .collect();
        render_table(out, &table, TableLayout::Tree)
    }
}

#[cfg(test)]
mod tests {
    use termcolor::{Ansi, NoColor};

    use super::*;
    use crate::test_utils::TestDir;

    fn render_plain(dir: &TestDir, pattern: &str, options: &ListOptions) -> String {
        let config = Config::default();
        let lister = Lister::new(&config, options, SystemTime::now());
        let mut out = NoColor::new(Vec::new());
        lister.render(&dir.pattern(pattern), &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    fn last_column(line: &str) -> &str {
        line.rsplit(' ').next().unwrap_or_default().trim_end()
    }

    fn names(output: &str) -> Vec<String> {
        output
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| last_column(l.trim_end()).to_string())
            .collect()
    }

    #[test]
    fn test_flat_listing() {
        let dir = TestDir::new();
        dir.add_file("b.txt", "bb");
        dir.add_file("A.txt", "a");
        dir.add_dir("zdir");

        let output = render_plain(&dir, "", &ListOptions::default());
        assert_eq!(names(&output), vec!["A.txt", "b.txt", "zdir"]);

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("-rw"));
        assert!(lines[2].starts_with('d'));
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn test_dirs_first() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "");
        dir.add_dir("zdir");

        let options = ListOptions {
            dirs_first: true,
            ..Default::default()
        };
        assert_eq!(names(&render_plain(&dir, "", &options)), vec!["zdir", "a.txt"]);
    }

    #[test]
    fn test_empty_flat_listing_prints_nothing() {
        let dir = TestDir::new();
        assert_eq!(render_plain(&dir, "", &ListOptions::default()), "");
    }

    #[test]
    fn test_recursive_blocks() {
        let dir = TestDir::new();
        dir.add_file("top.txt", "");
        dir.add_file("sub/inner.txt", "");

        let options = ListOptions {
            recursive: true,
            ..Default::default()
        };
        let output = render_plain(&dir, "", &options);
        let sub = dir.path().join("sub");

        assert!(output.contains(&format!(" {}/\n", sub.display())));
        let inner_line = output.lines().find(|l| l.contains("inner.txt")).unwrap();
        assert!(inner_line.starts_with(" -rw"), "grouped rows are indented: {inner_line:?}");
        assert!(output.ends_with("inner.txt\n\n"), "blocks end with a blank line");
    }

    #[test]
    fn test_tree_output() {
        let dir = TestDir::new();
        dir.add_file("child1", "");
        dir.add_file("child2", "");
        dir.add_file("child3/file1", "");
        dir.add_file("child3/file2", "");

        let options = ListOptions {
            tree: true,
            ..Default::default()
        };
        let output = render_plain(&dir, "", &options);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], dir.pattern(""));
        assert!(lines[1].starts_with("├── ") && lines[1].ends_with(" child1"));
        assert!(lines[3].starts_with("└── ") && lines[3].ends_with(" child3"));
        assert!(lines[4].starts_with("    ├── ") && lines[4].ends_with(" file1"));
        assert!(lines[5].starts_with("    └── ") && lines[5].ends_with(" file2"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_tree_empty_root() {
        let dir = TestDir::new();
        let options = ListOptions {
            tree: true,
            ..Default::default()
        };
        assert_eq!(render_plain(&dir, "", &options), format!("{}\n", NO_ENTRIES));
    }

    #[test]
    fn test_tree_wins_over_recursive() {
        let dir = TestDir::new();
        dir.add_file("sub/x", "");
        let options = ListOptions {
            tree: true,
            recursive: true,
            ..Default::default()
        };
        let output = render_plain(&dir, "", &options);
        assert!(output.contains("└── "));
        assert!(!output.contains(" -rw"));
    }

    #[test]
    fn test_color_output_keeps_escapes() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "");

        let config = Config::default();
        let options = ListOptions::default();
        let lister = Lister::new(&config, &options, SystemTime::now());
        let mut out = Ansi::new(Vec::new());
        lister.render(&dir.pattern(""), &mut out).unwrap();
        let output = String::from_utf8(out.into_inner()).unwrap();

        assert!(output.contains(&config.permissions.read));
        assert!(output.contains(&config.icons.file));
    }

    #[test]
    fn test_same_snapshot_renders_identically() {
        let dir = TestDir::new();
        dir.add_file("a.rs", "fn a() {}");
        dir.add_file("lib/b.rs", "fn b() {}");

        let config = Config::default();
        let now = SystemTime::now();
        for options in [
            ListOptions::default(),
            ListOptions { recursive: true, ..Default::default() },
            ListOptions { tree: true, ..Default::default() },
        ] {
            let lister = Lister::new(&config, &options, now);
            let mut first = Ansi::new(Vec::new());
            let mut second = Ansi::new(Vec::new());
            lister.render(&dir.pattern(""), &mut first).unwrap();
            lister.render(&dir.pattern(""), &mut second).unwrap();
            assert_eq!(first.into_inner(), second.into_inner());
        }
    }
}
