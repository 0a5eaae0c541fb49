//! File-enumeration policy for the CLI.
//!
//! The engine has no opinion on which files qualify; this module does.
//! It walks a directory, prunes hidden and vendored subtrees, filters
//! by extension, and reads file content with a lossy fallback for
//! non-UTF-8 bytes.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into, on top of dot-prefixed ones.
const SKIP_DIRS: &[&str] = &["target", "node_modules", "__pycache__", "venv"];

/// Extensions indexed when the config provides none.
pub const DEFAULT_EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "md", "txt"];

pub struct WalkPolicy {
    extensions: Vec<String>,
}

impl WalkPolicy {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    /// Files under `root` that pass the policy, in sorted order so
    /// ingestion (and therefore tie-breaking) is deterministic.
    pub fn collect(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !excluded(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| self.matches_extension(p))
            .collect();
        files.sort();
        files
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }
}

impl Default for WalkPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect())
    }
}

fn excluded(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.file_type().is_dir() && SKIP_DIRS.contains(&name.as_ref()))
}

/// Reads a file as UTF-8, falling back to a lossy conversion so odd
/// bytes degrade to replacement characters instead of skipping the
/// whole file.
pub fn read_content(path: &Path) -> std::io::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(path)?).to_string()),
    }
}
