//! Loading style definitions from YAML and JSON documents.
//!
//! Style files map style keys to definitions, in the same shape the
//! registry uses:
//!
//! ```yaml
//! dark:
//!   name: Dark
//!   variables:
//!     "--bg": "#000"
//!   selectors:
//!     ".card":
//!       color: "#fff"
//! ```
//!
//! Entries may omit `variables`, `selectors` or even `name`; missing
//! collections load as empty. Document order is preserved.
//!
//! # Directories
//!
//! [`load_style_dir`] reads every `.yaml`, `.yml` and `.json` file in a
//! directory (not recursively) in file-name order and merges them. A key
//! defined in two files is a configuration mistake and fails the load
//! rather than letting one file silently win.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::LoadError;
use super::registry::StyleMap;

/// Recognized style file extensions.
pub const STYLE_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Parses YAML style definitions.
pub fn parse_styles_yaml(source: &str) -> Result<StyleMap, LoadError> {
    Ok(serde_yaml::from_str(source)?)
}

/// Parses JSON style definitions.
pub fn parse_styles_json(source: &str) -> Result<StyleMap, LoadError> {
    Ok(serde_json::from_str(source)?)
}

/// Loads a single style file, choosing the format by extension.
pub fn load_styles_file(path: impl AsRef<Path>) -> Result<StyleMap, LoadError> {
    let path = path.as_ref();
    let extension = style_extension(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let styles = match extension {
        "json" => parse_styles_json(&source)?,
        _ => parse_styles_yaml(&source)?,
    };
    debug!(path = %path.display(), styles = styles.len(), "loaded style file");
    Ok(styles)
}

/// Loads and merges every style file in a directory.
///
/// Files are read in file-name order, so the merged map lists styles in a
/// stable order regardless of how the filesystem enumerates entries.
pub fn load_style_dir(dir: impl AsRef<Path>) -> Result<StyleMap, LoadError> {
    let dir = dir.as_ref();
    let read_error = |source| LoadError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && style_extension(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();

    let mut merged = StyleMap::new();
    let mut origins: HashMap<String, PathBuf> = HashMap::new();

    for file in files {
        for (key, definition) in load_styles_file(&file)? {
            if let Some(existing) = origins.get(&key) {
                return Err(LoadError::Collision {
                    key,
                    existing: existing.clone(),
                    conflicting: file,
                });
            }
            origins.insert(key.clone(), file.clone());
            merged.insert(key, definition);
        }
    }

    Ok(merged)
}

fn style_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    STYLE_EXTENSIONS
        .iter()
        .copied()
        .find(|known| *known == extension)
}
