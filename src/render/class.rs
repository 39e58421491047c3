//! Body class names for resolved styles.

use crate::style::StyleRegistry;
use crate::util::sanitize_key;

/// Prefix shared by every inherited-style body class.
pub const BODY_CLASS_PREFIX: &str = "has-inherited-style-";

/// Returns the body class for a resolved style key.
///
/// `None` when `key` is the sentinel or not registered. Only the key is
/// sanitized; the prefix is fixed.
///
/// # Example
///
/// ```rust
/// use page_style_inheritance::{class_name_for, StyleDefinition, StyleRegistry};
///
/// let registry = StyleRegistry::builder()
///     .style("My Key!", StyleDefinition::new("Mine"))
///     .build();
///
/// assert_eq!(
///     class_name_for("My Key!", &registry).as_deref(),
///     Some("has-inherited-style-my-key-")
/// );
/// assert_eq!(class_name_for("", &registry), None);
/// ```
pub fn class_name_for(key: &str, registry: &StyleRegistry) -> Option<String> {
    registry.selectable(key)?;
    Some(format!("{BODY_CLASS_PREFIX}{}", sanitize_key(key)))
}
