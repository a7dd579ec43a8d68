//! Filename and extension lookup tables for regular-file icons
//!
//! Classes resolve to a glyph through [`Icons`], so a config file can
//! restyle a whole class at once. Individual names or extensions can be
//! re-mapped with `Icons.Filenames` / `Icons.Extensions`.

use std::path::Path;

use crate::config::Icons;

/// Icon categories for regular files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconClass {
    File,
    Exec,
    Image,
    Video,
    Audio,
    Archive,
    Code,
    License,
    Lock,
    Golang,
    TypeScript,
    JavaScript,
    Nix,
    Rust,
    Python,
    Java,
    CSharp,
    Cpp,
    C,
    Haskell,
    Lua,
    Ruby,
    Php,
    Html,
    Css,
    Markdown,
    Json,
    Yaml,
    Toml,
    Shell,
    Docker,
    Kubernetes,
    Sql,
}

impl IconClass {
    pub fn glyph(self, icons: &Icons) -> &str {
        match self {
            IconClass::File => &icons.file,
            IconClass::Exec => &icons.exec,
            IconClass::Image => &icons.image,
            IconClass::Video => &icons.video,
            IconClass::Audio => &icons.audio,
            IconClass::Archive => &icons.archive,
            IconClass::Code => &icons.code,
            IconClass::License => &icons.license,
            IconClass::Lock => &icons.lock,
            IconClass::Golang => &icons.golang,
            IconClass::TypeScript => &icons.typescript,
            IconClass::JavaScript => &icons.javascript,
            IconClass::Nix => &icons.nix,
            IconClass::Rust => &icons.rust,
            IconClass::Python => &icons.python,
            IconClass::Java => &icons.java,
            IconClass::CSharp => &icons.c_sharp,
            IconClass::Cpp => &icons.cpp,
            IconClass::C => &icons.c,
            IconClass::Haskell => &icons.haskell,
            IconClass::Lua => &icons.lua,
            IconClass::Ruby => &icons.ruby,
            IconClass::Php => &icons.php,
            IconClass::Html => &icons.html,
            IconClass::Css => &icons.css,
            IconClass::Markdown => &icons.markdown,
            IconClass::Json => &icons.json,
            IconClass::Yaml => &icons.yaml,
            IconClass::Toml => &icons.toml,
            IconClass::Shell => &icons.shell,
            IconClass::Docker => &icons.docker,
            IconClass::Kubernetes => &icons.kubernetes,
            IconClass::Sql => &icons.sql,
        }
    }

    /// Whole-name matches, checked before the extension. `name` must be lowercase.
    pub fn from_filename(name: &str) -> Option<Self> {
        let class = match name {
            "cargo.lock" | "package-lock.json" | "yarn.lock" | "pnpm-lock.yaml" | "poetry.lock"
            | "gemfile.lock" | "composer.lock" | "flake.lock" | "go.sum" | "uv.lock" => {
                IconClass::Lock
            }
            "license" | "license.md" | "license.txt" | "licence" | "copying" | "unlicense"
            | "license-mit" | "license-apache" => IconClass::License,
            "dockerfile" | "containerfile" | "docker-compose.yml" | "docker-compose.yaml"
            | "compose.yml" | "compose.yaml" | ".dockerignore" => IconClass::Docker,
            "kustomization.yaml" | "kustomization.yml" | "chart.yaml" | "helmfile.yaml" => {
                IconClass::Kubernetes
            }
            "go.mod" | "go.work" => IconClass::Golang,
            "gemfile" | "rakefile" => IconClass::Ruby,
            "makefile" | "cmakelists.txt" | "justfile" => IconClass::Code,
            ".bashrc" | ".zshrc" | ".profile" | ".bash_profile" => IconClass::Shell,
            _ => return None,
        };
        Some(class)
    }

    /// `ext` must be lowercase and without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let class = match ext {
            "go" => IconClass::Golang,
            "ts" | "tsx" | "mts" | "cts" => IconClass::TypeScript,
            "js" | "jsx" | "mjs" | "cjs" => IconClass::JavaScript,
            "nix" => IconClass::Nix,
            "rs" => IconClass::Rust,
            "py" | "pyw" | "pyi" => IconClass::Python,
            "java" | "jar" => IconClass::Java,
            "cs" | "csx" => IconClass::CSharp,
            "cpp" | "cxx" | "cc" | "hpp" | "hxx" | "hh" => IconClass::Cpp,
            "c" | "h" => IconClass::C,
            "hs" | "lhs" => IconClass::Haskell,
            "lua" => IconClass::Lua,
            "rb" | "gemspec" => IconClass::Ruby,
            "php" => IconClass::Php,
            "html" | "htm" | "xhtml" => IconClass::Html,
            "css" | "scss" | "sass" | "less" => IconClass::Css,
            "md" | "markdown" | "mdx" => IconClass::Markdown,
            "json" | "jsonc" | "json5" => IconClass::Json,
            "yaml" | "yml" => IconClass::Yaml,
            "toml" => IconClass::Toml,
            "sh" | "bash" | "zsh" | "fish" => IconClass::Shell,
            "sql" | "sqlite" | "db" => IconClass::Sql,
            "lock" => IconClass::Lock,
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp" | "ico" | "tif" | "tiff"
            | "avif" => IconClass::Image,
            "mp4" | "mkv" | "webm" | "avi" | "mov" | "wmv" | "flv" => IconClass::Video,
            "mp3" | "flac" | "wav" | "ogg" | "m4a" | "opus" | "aac" => IconClass::Audio,
            "zip" | "tar" | "gz" | "tgz" | "bz2" | "xz" | "zst" | "7z" | "rar" | "deb" | "rpm" => {
                IconClass::Archive
            }
            "kt" | "kts" | "swift" | "scala" | "ex" | "exs" | "erl" | "zig" | "dart" | "vue"
            | "svelte" | "r" | "jl" | "ml" | "clj" | "pl" | "vim" | "el" => IconClass::Code,
            _ => return None,
        };
        Some(class)
    }
}

/// Glyph for a regular file.
///
/// Priority: user filename map, built-in filename table, user extension
/// map, built-in extension table, then the exec or generic file icon.
pub fn regular_file_icon<'a>(name: &str, executable: bool, icons: &'a Icons) -> &'a str {
    let lower = name.to_lowercase();

    if let Some(glyph) = icons.filenames.get(&lower) {
        return glyph;
    }
    if let Some(class) = IconClass::from_filename(&lower) {
        return class.glyph(icons);
    }

    if let Some(ext) = Path::new(&lower).extension().and_then(|e| e.to_str()) {
        if let Some(glyph) = icons.extensions.get(ext) {
            return glyph;
        }
        if let Some(class) = IconClass::from_extension(ext) {
            return class.glyph(icons);
        }
    }

    if executable {
        IconClass::Exec.glyph(icons)
    } else {
        IconClass::File.glyph(icons)
    }
}
