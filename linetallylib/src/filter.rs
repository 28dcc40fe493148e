//! File filtering and discovery with glob pattern support.
//!
//! This module handles the first stage of the pipeline - deciding which
//! files under the scan root qualify. A path qualifies when it matches the
//! include pattern and matches no exclude pattern, where the exclude set is
//! the union of caller-supplied patterns and a built-in artifact list that
//! is always applied.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::error::LinetallyError;
use crate::Result;

/// Directory names pruned during the walk, in addition to every hidden
/// directory (covers `.git`, `.svn`, `.hg`, `.idea`, `.vscode`, `.cache`).
const SKIP_DIR_NAMES: &[&str] = &[
    "node_modules",
    "target",
    "bin",
    "obj",
    "build",
    "dist",
    "out",
    "__pycache__",
];

/// Built-in file exclusions, matched against the file name. Caller excludes
/// are additive; these always apply.
const BUILTIN_EXCLUDE_FILES: &[&str] = &[
    // minified / generated / source maps
    "*.min.js",
    "*.min.css",
    "*.map",
    "*.generated.*",
    // caches, locks, local databases
    "*.lock",
    "*.cache",
    "*.db",
    "*.sqlite",
    "*.sqlite3",
    // compiled artifacts
    "*.exe",
    "*.dll",
    "*.so",
    "*.dylib",
    "*.a",
    "*.o",
    "*.obj",
    "*.class",
    "*.pyc",
    "*.pdb",
    "*.bin",
    // media
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.bmp",
    "*.ico",
    "*.pdf",
    "*.mp3",
    "*.mp4",
    "*.avi",
    "*.mov",
    // archives
    "*.zip",
    "*.tar",
    "*.gz",
    "*.bz2",
    "*.xz",
    "*.7z",
    "*.rar",
];

fn builtin_file_excludes() -> &'static [Pattern] {
    static PATTERNS: OnceLock<Vec<Pattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        BUILTIN_EXCLUDE_FILES
            .iter()
            .map(|p| Pattern::new(p).expect("built-in patterns are valid globs"))
            .collect()
    })
}

/// Match options for caller patterns: `*` stays within a path segment,
/// `**` crosses separators.
fn match_options() -> MatchOptions {
    MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    }
}

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include pattern (if unset, include everything)
    pub include: Option<Pattern>,
    /// Caller-supplied exclude patterns, applied on top of the built-ins
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes every file the built-in
    /// exclusions allow).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| LinetallyError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.include = Some(pat);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| LinetallyError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check if a path (relative to the scan root) passes the filter.
    ///
    /// A path passes if:
    /// 1. Its file name matches none of the built-in artifact patterns
    /// 2. It matches none of the caller exclude patterns
    /// 3. It matches the include pattern (or no include pattern is set)
    pub fn matches(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        for pattern in builtin_file_excludes() {
            if pattern.matches(&name) {
                return false;
            }
        }

        let opts = match_options();
        let path_str = path.to_string_lossy();
        for pattern in &self.exclude {
            if pattern.matches_with(&path_str, opts) {
                return false;
            }
        }

        match &self.include {
            Some(pattern) => pattern.matches_with(&path_str, opts),
            None => true,
        }
    }
}

/// Check if a directory should be pruned from the traversal.
fn should_skip_dir(name: &str) -> bool {
    name.starts_with('.') || SKIP_DIR_NAMES.contains(&name)
}

/// Result of file discovery: the qualifying paths plus any subtrees that
/// could not be read. Walk errors never abort the scan.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Files that passed the filter
    pub files: Vec<PathBuf>,
    /// Unreadable entries encountered during the walk
    pub errors: Vec<LinetallyError>,
}

/// Discover files under a root that pass the filter.
///
/// Walks the tree, pruning built-in excluded directories, and matches each
/// file's root-relative path against the filter. Unreadable subtrees
/// (permission failures, directories that vanish mid-walk) are recorded in
/// `Discovery::errors` and skipped. Fails only when the root itself does
/// not exist.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Discovery> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(LinetallyError::PathNotFound(root.to_path_buf()));
    }

    let mut discovery = Discovery::default();

    if root.is_file() {
        if let Some(name) = root.file_name() {
            if filter.matches(Path::new(name)) {
                discovery.files.push(root.to_path_buf());
            }
        }
        return Ok(discovery);
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !should_skip_dir(name);
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                discovery.errors.push(LinetallyError::Walk(e.to_string()));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path);
        if filter.matches(rel) {
            discovery.files.push(path.to_path_buf());
        }
    }

    // Walk order is not part of the contract; sort for reproducible output
    discovery.files.sort();

    Ok(discovery)
}
