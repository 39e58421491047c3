//! Data for the style selection control in the page editor.
//!
//! The editor needs two things: the list of selectable styles in registry
//! order, and the raw key currently stored on the page being edited.

use serde::{Deserialize, Serialize};

use crate::page::PageStore;
use crate::style::StyleRegistry;

/// One entry in the style selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOption {
    /// Display label.
    pub label: String,
    /// Style key to store when chosen.
    pub value: String,
}

/// Lists every registry entry as a selection option, in registry order.
///
/// The sentinel is included so editors can switch a page back to inheriting.
pub fn selection_options(registry: &StyleRegistry) -> Vec<StyleOption> {
    registry
        .iter()
        .map(|definition| StyleOption {
            label: definition.label().to_string(),
            value: definition.key().to_string(),
        })
        .collect()
}

/// The selection options serialized as a JSON array for the editor script.
///
/// # Example
///
/// ```rust
/// use page_style_inheritance::{selection_options_json, StyleRegistry};
///
/// let json = selection_options_json(&StyleRegistry::build()).unwrap();
/// assert_eq!(
///     json,
///     r#"[{"label":"Inherit parent style","value":""},{"label":"Example","value":"example"}]"#
/// );
/// ```
pub fn selection_options_json(registry: &StyleRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string(&selection_options(registry))
}

/// The raw key stored on `page`, used to pre-select the control.
///
/// This is the stored value, not the resolved one; a page that inherits
/// returns the sentinel even if an ancestor is styled.
pub fn current_value<S: PageStore + ?Sized>(store: &S, page: &S::PageId) -> String {
    store.style_key(page)
}
