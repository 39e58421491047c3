//! # Page Style Inheritance
//!
//! Hierarchical pages inherit a named visual style from the nearest ancestor
//! that has one explicitly set. This crate resolves that style and renders it
//! as CSS for the document head plus a stable class name for the page body.
//!
//! The crate is organized in three layers:
//!
//! - [`style`]: the [`StyleRegistry`] of named [`StyleDefinition`]s, built by
//!   folding registered [`StyleTransform`]s over a built-in default set
//! - [`page`]: the [`PageStore`] collaborator contract and [`resolve`], which
//!   walks a page's ancestor chain (self first, nearest wins)
//! - [`render`]: [`class_name_for`], [`css_for`] and the [`PageStyle`] bundle
//!   the host injects into its head and body-class list
//!
//! The registry is passed explicitly to every call; there is no global state.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_style_inheritance::{MemoryPageStore, PageStyle, StyleDefinition, StyleRegistry};
//!
//! let registry = StyleRegistry::builder()
//!     .style(
//!         "dark",
//!         StyleDefinition::new("Dark")
//!             .variable("--bg", "#000")
//!             .declare(".card", "color", "#fff"),
//!     )
//!     .build();
//!
//! let mut pages = MemoryPageStore::new();
//! pages.insert(1, None, "dark");
//! pages.insert(2, Some(1), "");
//!
//! let style = PageStyle::for_page(&pages, &2, &registry);
//! assert_eq!(style.key(), "dark");
//! assert_eq!(style.body_class(), Some("has-inherited-style-dark"));
//! assert_eq!(style.css(), Some(":root { --bg: #000; } .card { color: #fff; }"));
//! ```
//!
//! ## Extending the Registry
//!
//! External code extends or overrides the available styles by registering
//! transforms. Each transform receives the full ordered [`StyleMap`] and
//! returns the replacement; transforms run in registration order.
//!
//! ```rust
//! use page_style_inheritance::{StyleDefinition, StyleMap, StyleRegistry};
//!
//! let registry = StyleRegistry::builder()
//!     .transform(|mut styles: StyleMap| {
//!         styles.shift_remove("example");
//!         styles.insert("brand".into(), StyleDefinition::new("Brand").variable("--accent", "teal"));
//!         styles
//!     })
//!     .build();
//!
//! assert!(!registry.contains("example"));
//! assert!(registry.contains("brand"));
//! ```
//!
//! ## Failure Model
//!
//! Nothing in resolution or rendering fails. A page without a valid style
//! anywhere in its chain renders nothing, stale keys are skipped, missing
//! collections are empty, and hostile strings are escaped rather than
//! rejected. Only [`style::load_styles_file`] and friends return errors,
//! because reading configuration from disk can.

pub mod admin;
pub mod page;
pub mod render;
pub mod style;
mod util;

pub use admin::{current_value, selection_options, selection_options_json, StyleOption};
pub use page::{resolve, resolve_with, MemoryPageStore, PageNode, PageStore};
pub use render::{
    class_name_for, css_for, register_filters, PageStyle, BODY_CLASS_PREFIX, STYLE_ELEMENT_ID,
};
pub use style::{
    default_styles, load_style_dir, load_styles_file, parse_styles_json, parse_styles_yaml,
    Declarations, LoadError, StyleDefinition, StyleMap, StyleRegistry, StyleRegistryBuilder,
    StyleTransform, INHERIT,
};
pub use util::{escape_css_token, sanitize_key};
