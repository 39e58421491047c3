//! Named style definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered CSS declarations: property name to value.
pub type Declarations = IndexMap<String, String>;

/// A named bundle of CSS custom properties and selector-scoped rules.
///
/// Both collections are always present and may be empty. When a definition
/// is deserialized from a document that omits `variables` or `selectors`,
/// the missing collection is simply empty.
///
/// Equality compares the name and declarations only, so a definition read
/// back out of a registry equals the one that was put in.
///
/// # Example
///
/// ```rust
/// use page_style_inheritance::StyleDefinition;
///
/// let dark = StyleDefinition::new("Dark")
///     .variable("--bg", "#000")
///     .rule(".card", [("color", "#fff"), ("border-color", "#333")]);
///
/// assert_eq!(dark.variables["--bg"], "#000");
/// assert_eq!(dark.selectors[".card"].len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleDefinition {
    /// Registry key, filled in when the definition enters a registry.
    #[serde(skip)]
    pub(crate) key: String,
    /// Display label shown in selection controls.
    #[serde(default)]
    pub name: String,
    /// CSS custom properties emitted inside `:root`.
    #[serde(default)]
    pub variables: Declarations,
    /// Rule blocks keyed by selector text.
    #[serde(default)]
    pub selectors: IndexMap<String, Declarations>,
}

impl StyleDefinition {
    /// Creates a definition with a display name and no declarations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a custom property, replacing any earlier value for the same name.
    pub fn variable(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(property.into(), value.into());
        self
    }

    /// Adds declarations to the block for `selector`, creating it if needed.
    pub fn rule<I, P, V>(mut self, selector: impl Into<String>, declarations: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
        V: Into<String>,
    {
        self.selectors.entry(selector.into()).or_default().extend(
            declarations
                .into_iter()
                .map(|(property, value)| (property.into(), value.into())),
        );
        self
    }

    /// Adds a single declaration to the block for `selector`.
    pub fn declare(
        self,
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let declaration: (String, String) = (property.into(), value.into());
        self.rule(selector, [declaration])
    }

    /// The key this definition is registered under.
    ///
    /// Empty until the definition is part of a [`StyleRegistry`](super::StyleRegistry).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Label for selection controls, falling back to the key when unnamed.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.key
        } else {
            &self.name
        }
    }

    /// Returns true if the definition would render no CSS.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.selectors.is_empty()
    }
}

impl PartialEq for StyleDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.variables == other.variables
            && self.selectors == other.selectors
    }
}

impl Eq for StyleDefinition {}
