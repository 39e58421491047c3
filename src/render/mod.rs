//! Rendering resolved styles into body classes and head CSS.
//!
//! - [`class_name_for`]: the sanitized body class for a key
//! - [`css_for`]: the escaped CSS text for a key
//! - [`PageStyle`]: both outputs for one page, plus helpers to inject them
//! - [`register_filters`]: the same outputs as minijinja filters
//!
//! Every entry point treats the sentinel and unregistered keys the same
//! way: no class, no CSS.

mod class;
mod css;
mod filters;
mod page;

pub use class::{class_name_for, BODY_CLASS_PREFIX};
pub use css::css_for;
pub use filters::register_filters;
pub use page::{PageStyle, STYLE_ELEMENT_ID};
