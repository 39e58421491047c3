//! Per-render output bundle for a page.

use tracing::debug;

use super::class::class_name_for;
use super::css::css_for;
use crate::page::{resolve, PageStore};
use crate::style::StyleRegistry;

/// `id` attribute of the `<style>` element produced by [`PageStyle::style_element`].
pub const STYLE_ELEMENT_ID: &str = "page-style-inheritance-css";

/// The resolved style of one page and everything the host needs to emit.
///
/// Computed per render and never persisted. When no style applies, the
/// key is the sentinel and both outputs are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStyle {
    key: String,
    body_class: Option<String>,
    css: Option<String>,
}

impl PageStyle {
    /// Resolves `page` against `registry` and renders the result.
    pub fn for_page<S: PageStore + ?Sized>(
        store: &S,
        page: &S::PageId,
        registry: &StyleRegistry,
    ) -> Self {
        Self::for_key(resolve(page, registry, store), registry)
    }

    /// Renders an already-resolved key.
    pub fn for_key(key: impl Into<String>, registry: &StyleRegistry) -> Self {
        let key = key.into();
        let body_class = class_name_for(&key, registry);
        let css = css_for(&key, registry);
        debug!(key = %key, styled = body_class.is_some(), "rendered page style");
        Self {
            key,
            body_class,
            css,
        }
    }

    /// The resolved key, empty when the page inherits nothing.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true if a style applies to the page.
    pub fn is_styled(&self) -> bool {
        self.body_class.is_some()
    }

    /// Class to add to the page body, if any.
    pub fn body_class(&self) -> Option<&str> {
        self.body_class.as_deref()
    }

    /// CSS for the document head, if any.
    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    /// Appends the body class to an existing class list.
    ///
    /// Leaves the list untouched when no style applies or the class is
    /// already present.
    pub fn apply_body_class(&self, classes: &mut Vec<String>) {
        if let Some(class) = &self.body_class {
            if !classes.iter().any(|existing| existing == class) {
                classes.push(class.clone());
            }
        }
    }

    /// The CSS wrapped in a `<style>` element for the document head.
    ///
    /// The host should emit it after its other head output so these rules
    /// override earlier declarations. `None` when there is no CSS to emit.
    pub fn style_element(&self) -> Option<String> {
        let css = self.css.as_deref().filter(|css| !css.is_empty())?;
        Some(format!(r#"<style id="{STYLE_ELEMENT_ID}">{css}</style>"#))
    }
}
