//! File discovery for tool adapters
//!
//! Adapters decide whether they have anything to check by walking the target
//! path with include globs. Dependency and VCS directories are never entered.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

/// File extensions treated as PHP source
pub const PHP_EXTENSIONS: &[&str] = &[
    "php", "module", "theme", "inc", "install", "profile", "engine", "test",
];

const DEFAULT_EXCLUDE_GLOBS: &[&str] = &["**/.git", "**/vendor", "**/node_modules"];

pub fn php_globs() -> Vec<String> {
    vec![format!("**/*.{{{}}}", PHP_EXTENSIONS.join(","))]
}

pub fn yaml_globs() -> Vec<String> {
    vec!["**/*.{yml,yaml}".to_string()]
}

fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_default()
}

/// Find files under `root` matching any of `includes`, sorted.
///
/// `root` may itself be a file, in which case it is matched by name. Links to
/// directories below `root` are not followed; links to files are matched like
/// files.
pub fn find_files(root: &Path, includes: &[String]) -> Vec<PathBuf> {
    let include_set = build_glob_set(includes);
    let exclude_set = build_glob_set(
        &DEFAULT_EXCLUDE_GLOBS
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
    );

    if root.is_file() {
        let name = root.file_name().map(Path::new).unwrap_or(root);
        return if include_set.is_match(name) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        };
    }

    let mut found = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(root.to_path_buf());

    while let Some(current_dir) = queue.pop_front() {
        if let Ok(entries) = std::fs::read_dir(&current_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                let relative_path = path.strip_prefix(root).unwrap_or(&path);

                if exclude_set.is_match(relative_path) {
                    continue;
                }

                // `DirEntry::file_type` does not follow links
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };

                if file_type.is_dir() {
                    queue.push_back(path);
                } else if file_type.is_symlink() && path.is_dir() {
                    debug!(link = %path.display(), "not following directory link");
                } else if include_set.is_match(relative_path) {
                    found.push(path);
                }
            }
        }
    }

    found.sort();
    found
}

/// Directory external tools should run in for `path`
pub fn working_dir(path: &Path) -> &Path {
    if path.is_file() {
        path.parent().unwrap_or(path)
    } else {
        path
    }
}
