//! Style loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when style definitions cannot be loaded from configuration.
///
/// Only the loaders produce this; resolution and rendering never fail.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A style file or directory could not be read.
    #[error("failed to read styles from \"{}\": {source}", .path.display())]
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML style definitions.
    #[error("invalid YAML style definitions: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON style definitions.
    #[error("invalid JSON style definitions: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not one of the recognized style formats.
    #[error("unsupported style file \"{}\": expected .yaml, .yml or .json", .path.display())]
    UnsupportedFormat {
        /// The offending path
        path: PathBuf,
    },

    /// Two files in the same directory define the same style key.
    #[error(
        "style \"{key}\" is defined more than once:\n  - {}\n  - {}",
        .existing.display(),
        .conflicting.display()
    )]
    Collision {
        /// The duplicated style key
        key: String,
        /// File that defined the key first
        existing: PathBuf,
        /// File that defined it again
        conflicting: PathBuf,
    },
}
