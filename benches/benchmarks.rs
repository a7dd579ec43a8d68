//! Performance benchmarks for lse

use std::time::SystemTime;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lse::test_utils::TestDir;
use lse::{Config, Entry, ListOptions, Lister, TreeBuilder, sort_entries, visible_length};
use termcolor::NoColor;

/// A fixture with `dirs` directories of `files` files each.
fn fixture(dirs: usize, files: usize) -> TestDir {
    let dir = TestDir::new();
    for d in 0..dirs {
        for f in 0..files {
            dir.add_file(&format!("dir{d}/nested/file{f}.rs"), "fn main() {}");
        }
        dir.add_file(&format!("File{d}.md"), "# readme");
    }
    dir
}

fn bench_visible_length(c: &mut Criterion) {
    let plain = "├── src/main.rs";
    let colored = "\x1b[34m\u{f07b} src\x1b[0m \x1b[32m4.0K\x1b[0m \x1b[1;31mx\x1b[0m";

    let mut group = c.benchmark_group("visible_length");
    group.bench_function("plain", |b| b.iter(|| visible_length(black_box(plain))));
    group.bench_function("colored", |b| b.iter(|| visible_length(black_box(colored))));
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let dir = fixture(50, 1);
    let entries = lse::collect_entries(&dir.pattern(""), true).unwrap();

    c.bench_function("sort_entries_dirs_first", |b| {
        b.iter(|| {
            let mut batch: Vec<Entry> = entries.clone();
            sort_entries(black_box(&mut batch), true);
            batch
        })
    });
}

fn bench_tree(c: &mut Criterion) {
    let dir = fixture(20, 10);
    let pattern = dir.pattern("");

    c.bench_function("tree_builder", |b| {
        b.iter(|| TreeBuilder::new(false, false).build(black_box(&pattern)))
    });
}

fn bench_render(c: &mut Criterion) {
    let dir = fixture(20, 10);
    let pattern = dir.pattern("");
    let config = Config::default();
    let now = SystemTime::now();

    let mut group = c.benchmark_group("render");
    for (name, options) in [
        ("flat", ListOptions::default()),
        ("recursive", ListOptions { recursive: true, ..Default::default() }),
        ("tree", ListOptions { tree: true, ..Default::default() }),
    ] {
        group.bench_function(name, |b| {
            let lister = Lister::new(&config, &options, now);
            b.iter(|| {
                let mut out = NoColor::new(Vec::new());
                lister.render(black_box(&pattern), &mut out).unwrap();
                out.into_inner()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visible_length, bench_sort, bench_tree, bench_render);
criterion_main!(benches);
