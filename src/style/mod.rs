//! Style definitions and the registry that holds them.
//!
//! - [`StyleDefinition`]: a named bundle of CSS variables and selector rules
//! - [`StyleRegistry`]: an immutable, ordered snapshot of named styles
//! - [`StyleRegistryBuilder`]: folds registered [`StyleTransform`]s over a base set
//! - Loaders for YAML and JSON style files, failing with [`LoadError`]

mod definition;
mod error;
mod loader;
mod registry;

pub use definition::{Declarations, StyleDefinition};
pub use error::LoadError;
pub use loader::{
    load_style_dir, load_styles_file, parse_styles_json, parse_styles_yaml, STYLE_EXTENSIONS,
};
pub use registry::{
    default_styles, StyleMap, StyleRegistry, StyleRegistryBuilder, StyleTransform, INHERIT,
};
