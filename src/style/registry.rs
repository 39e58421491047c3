//! Style registry and transform pipeline.
//!
//! A [`StyleRegistry`] is an immutable, ordered snapshot of the styles pages
//! may select. It is produced by [`StyleRegistryBuilder::build`], which
//! starts from a base set (the built-in defaults unless told otherwise) and
//! folds every registered [`StyleTransform`] over it in registration order.
//!
//! The registry always holds exactly one sentinel entry under the empty key
//! ([`INHERIT`]), meaning "no explicit style, keep inheriting". If a
//! transform drops it, the build puts it back at the front.

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::debug;

use super::definition::StyleDefinition;

/// The sentinel style key: no explicit style, keep inheriting.
pub const INHERIT: &str = "";

/// Ordered mapping from style key to definition.
pub type StyleMap = IndexMap<String, StyleDefinition>;

static DEFAULT_STYLES: Lazy<StyleMap> = Lazy::new(|| {
    let mut styles = StyleMap::new();
    styles.insert(INHERIT.to_string(), inherit_definition());
    styles.insert(
        "example".to_string(),
        StyleDefinition::new("Example")
            .variable("--page-style-color", "#132324")
            .rule(
                ".example-selector",
                [
                    ("color", "var(--wp--preset--color--primary)"),
                    ("background-color", "var(--wp--preset--color--secondary)"),
                ],
            ),
    );
    styles
});

fn inherit_definition() -> StyleDefinition {
    StyleDefinition::new("Inherit parent style")
}

/// Puts the sentinel at the front of `styles` unless it is already present.
fn with_sentinel(styles: StyleMap) -> StyleMap {
    if styles.contains_key(INHERIT) {
        return styles;
    }
    let mut seeded = StyleMap::with_capacity(styles.len() + 1);
    seeded.insert(INHERIT.to_string(), inherit_definition());
    seeded.extend(styles);
    seeded
}

/// Returns the built-in default styles: the sentinel plus a demo entry.
pub fn default_styles() -> StyleMap {
    DEFAULT_STYLES.clone()
}

/// A function that receives the full style set and returns the replacement.
///
/// Implemented for any `Fn(StyleMap) -> StyleMap`, so closures can be
/// registered directly. Closures need their parameter type spelled out:
///
/// ```rust
/// use page_style_inheritance::{StyleMap, StyleRegistry};
///
/// let registry = StyleRegistry::builder()
///     .transform(|mut styles: StyleMap| {
///         styles.retain(|key, _| key != "example");
///         styles
///     })
///     .build();
///
/// assert_eq!(registry.len(), 1);
/// ```
pub trait StyleTransform: Send + Sync {
    /// Produces the new style set from the current one.
    fn apply(&self, styles: StyleMap) -> StyleMap;
}

impl<F> StyleTransform for F
where
    F: Fn(StyleMap) -> StyleMap + Send + Sync,
{
    fn apply(&self, styles: StyleMap) -> StyleMap {
        self(styles)
    }
}

/// Registration point for style transforms.
///
/// Keep one builder for the lifetime of the host and call
/// [`build`](Self::build) whenever a fresh registry is needed; building is
/// pure and leaves the builder untouched.
pub struct StyleRegistryBuilder {
    base: StyleMap,
    transforms: Vec<Box<dyn StyleTransform>>,
}

impl StyleRegistryBuilder {
    /// Creates a builder seeded with [`default_styles`].
    pub fn new() -> Self {
        Self::from_base(default_styles())
    }

    /// Creates a builder seeded with only the sentinel entry.
    pub fn empty() -> Self {
        Self::from_base(StyleMap::new())
    }

    /// Creates a builder seeded with an explicit base set.
    ///
    /// The sentinel is added at the front if `base` lacks it, so the first
    /// transform already sees it.
    pub fn from_base(base: StyleMap) -> Self {
        Self {
            base: with_sentinel(base),
            transforms: Vec::new(),
        }
    }

    /// Registers a transform, returning the builder for chaining.
    pub fn transform<T: StyleTransform + 'static>(mut self, transform: T) -> Self {
        self.register_transform(transform);
        self
    }

    /// Registers a transform on a builder held by reference.
    pub fn register_transform<T: StyleTransform + 'static>(&mut self, transform: T) -> &mut Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Registers a transform that adds or replaces a single style.
    pub fn style(self, key: impl Into<String>, definition: StyleDefinition) -> Self {
        let key = key.into();
        self.transform(move |mut styles: StyleMap| {
            styles.insert(key.clone(), definition.clone());
            styles
        })
    }

    /// Registers a transform that merges a loaded style set.
    ///
    /// Entries with existing keys replace the earlier definition in place;
    /// new keys are appended.
    pub fn styles(self, loaded: StyleMap) -> Self {
        self.transform(move |mut styles: StyleMap| {
            styles.extend(loaded.iter().map(|(k, v)| (k.clone(), v.clone())));
            styles
        })
    }

    /// Number of registered transforms.
    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }

    /// Folds every transform over the base set and snapshots the result.
    pub fn build(&self) -> StyleRegistry {
        let styles = self
            .transforms
            .iter()
            .fold(self.base.clone(), |styles, transform| transform.apply(styles));

        let registry = StyleRegistry::from_styles(styles);
        debug!(
            transforms = self.transforms.len(),
            styles = registry.len(),
            "built style registry"
        );
        registry
    }
}

impl Default for StyleRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StyleRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRegistryBuilder")
            .field("base", &self.base.keys().collect::<Vec<_>>())
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

/// An immutable, ordered collection of named styles.
///
/// # Example
///
/// ```rust
/// use page_style_inheritance::{StyleRegistry, INHERIT};
///
/// let registry = StyleRegistry::build();
/// assert!(registry.contains(INHERIT));
/// assert!(registry.contains("example"));
///
/// // The sentinel is registered but never selectable.
/// assert!(registry.selectable(INHERIT).is_none());
/// assert!(registry.selectable("example").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: StyleMap,
}

impl StyleRegistry {
    /// Builds the default registry with no transforms applied.
    pub fn build() -> Self {
        StyleRegistryBuilder::new().build()
    }

    /// Starts a builder seeded with the default styles.
    pub fn builder() -> StyleRegistryBuilder {
        StyleRegistryBuilder::new()
    }

    /// Snapshots a style set, restoring the sentinel if it is missing.
    pub fn from_styles(styles: StyleMap) -> Self {
        let mut styles = with_sentinel(styles);
        for (key, definition) in styles.iter_mut() {
            definition.key.clone_from(key);
        }

        Self { styles }
    }

    /// Looks up a definition by key, including the sentinel.
    pub fn get(&self, key: &str) -> Option<&StyleDefinition> {
        self.styles.get(key)
    }

    /// Returns true if `key` is registered, including the sentinel.
    pub fn contains(&self, key: &str) -> bool {
        self.styles.contains_key(key)
    }

    /// Looks up a definition a page can actually resolve to.
    ///
    /// Returns `None` for the sentinel and for unknown keys.
    pub fn selectable(&self, key: &str) -> Option<&StyleDefinition> {
        if key == INHERIT {
            return None;
        }
        self.styles.get(key)
    }

    /// Number of entries, sentinel included.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Always false: the sentinel is always present.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Keys in registry order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Definitions in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.values()
    }

    /// The underlying ordered map.
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::from_styles(StyleMap::new())
    }
}
