//! CSS generation for resolved styles.

use crate::style::{Declarations, StyleDefinition, StyleRegistry};
use crate::util::escape_css_token;

/// Returns the CSS for a resolved style key.
///
/// `None` when `key` is the sentinel or not registered. Otherwise the text
/// holds a `:root` block with the definition's variables (omitted when there
/// are none) followed by one block per selector, all in definition order.
/// Blocks are separated by a single space and declarations are written as
/// `property: value;`.
///
/// Selector text, property names and values are passed through
/// [`escape_css_token`], so no string in a definition can end its block or
/// the surrounding `<style>` element. CSS syntax is otherwise not checked.
///
/// # Example
///
/// ```rust
/// use page_style_inheritance::{css_for, StyleDefinition, StyleRegistry};
///
/// let registry = StyleRegistry::builder()
///     .style(
///         "dark",
///         StyleDefinition::new("Dark")
///             .variable("--bg", "#000")
///             .declare(".card", "color", "#fff"),
///     )
///     .build();
///
/// assert_eq!(
///     css_for("dark", &registry).as_deref(),
///     Some(":root { --bg: #000; } .card { color: #fff; }")
/// );
/// ```
pub fn css_for(key: &str, registry: &StyleRegistry) -> Option<String> {
    registry.selectable(key).map(stylesheet)
}

fn stylesheet(definition: &StyleDefinition) -> String {
    let mut blocks = Vec::with_capacity(definition.selectors.len() + 1);

    if !definition.variables.is_empty() {
        blocks.push(rule_block(":root", &definition.variables));
    }

    for (selector, declarations) in &definition.selectors {
        blocks.push(rule_block(&escape_css_token(selector), declarations));
    }

    blocks.join(" ")
}

fn rule_block(selector: &str, declarations: &Declarations) -> String {
    let mut block = format!("{selector} {{");
    for (property, value) in declarations {
        block.push_str(&format!(
            " {}: {};",
            escape_css_token(property),
            escape_css_token(value)
        ));
    }
    block.push_str(" }");
    block
}
