//! File categories by name and extension, used as descriptive prompt context.

use std::fmt;
use std::path::Path;

/// What kind of file a path looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Source code, with the language family.
    Source(&'static str),
    Documentation,
    Config,
    BuildScript,
    Unknown,
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileCategory::Source(lang) => write!(f, "{lang} source"),
            FileCategory::Documentation => f.write_str("documentation"),
            FileCategory::Config => f.write_str("configuration"),
            FileCategory::BuildScript => f.write_str("build script"),
            FileCategory::Unknown => f.write_str("unknown type"),
        }
    }
}

/// Well-known file names, checked before extensions.
const BUILD_FILE_NAMES: &[&str] = &[
    "makefile",
    "dockerfile",
    "justfile",
    "rakefile",
    "gemfile",
    "build.gradle",
    "build.rs",
    "cmakelists.txt",
    "meson.build",
    "pom.xml",
];

const DOC_FILE_NAMES: &[&str] = &["readme", "license", "changelog", "contributing", "authors"];

const SOURCE_EXTENSIONS: &[(&str, &str)] = &[
    ("rs", "Rust"),
    ("go", "Go"),
    ("py", "Python"),
    ("js", "JavaScript"),
    ("jsx", "JavaScript"),
    ("mjs", "JavaScript"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("java", "Java"),
    ("kt", "Kotlin"),
    ("c", "C"),
    ("h", "C"),
    ("cc", "C++"),
    ("cpp", "C++"),
    ("hpp", "C++"),
    ("cs", "C#"),
    ("rb", "Ruby"),
    ("php", "PHP"),
    ("swift", "Swift"),
    ("scala", "Scala"),
    ("sh", "Shell"),
    ("bash", "Shell"),
    ("sql", "SQL"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("scss", "CSS"),
    ("lua", "Lua"),
    ("zig", "Zig"),
];

const DOC_EXTENSIONS: &[&str] = &["md", "markdown", "rst", "txt", "adoc", "org"];

const CONFIG_EXTENSIONS: &[&str] = &[
    "toml", "yaml", "yml", "json", "ini", "cfg", "conf", "xml", "env", "properties",
];

const BUILD_EXTENSIONS: &[&str] = &["mk", "cmake", "gradle", "bazel", "bzl", "nix"];

/// Classify a repository-relative path.
pub fn classify_path(path: &str) -> FileCategory {
    let file_name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if BUILD_FILE_NAMES.contains(&file_name.as_str()) {
        return FileCategory::BuildScript;
    }

    let stem = file_name.split('.').next().unwrap_or_default();
    if DOC_FILE_NAMES.contains(&stem) {
        return FileCategory::Documentation;
    }

    let Some(ext) = Path::new(&file_name)
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
    else {
        return FileCategory::Unknown;
    };

    if let Some((_, lang)) = SOURCE_EXTENSIONS.iter().find(|(e, _)| *e == ext) {
        return FileCategory::Source(*lang);
    }
    if DOC_EXTENSIONS.contains(&ext.as_str()) {
        return FileCategory::Documentation;
    }
    if CONFIG_EXTENSIONS.contains(&ext.as_str()) {
        return FileCategory::Config;
    }
    if BUILD_EXTENSIONS.contains(&ext.as_str()) {
        return FileCategory::BuildScript;
    }

    FileCategory::Unknown
}
