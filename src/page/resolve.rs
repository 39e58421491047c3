//! Ancestor-chain style resolution.

use tracing::{debug, trace};

use super::PageStore;
use crate::style::{StyleRegistry, INHERIT};

/// Resolves the style for `page` using a [`PageStore`].
///
/// See [`resolve_with`] for the rules.
pub fn resolve<S: PageStore + ?Sized>(
    page: &S::PageId,
    registry: &StyleRegistry,
    store: &S,
) -> String {
    resolve_with(
        page.clone(),
        registry,
        |page| store.ancestors(page),
        |page| store.style_key(page),
    )
}

/// Resolves the style for `page` from two lookup functions.
///
/// The candidate chain is `page` followed by `ancestors(page)`, nearest
/// first. The first candidate whose stored key is non-empty and registered
/// in `registry` wins. A key that is no longer registered is skipped and the
/// walk continues upward. If nothing matches, the sentinel ([`INHERIT`]) is
/// returned.
///
/// Keys are checked against the registry passed in, not the one that was
/// current when the key was stored.
///
/// # Example
///
/// ```rust
/// use page_style_inheritance::{resolve_with, StyleDefinition, StyleRegistry};
///
/// let registry = StyleRegistry::builder()
///     .style("y", StyleDefinition::new("Y"))
///     .build();
///
/// // Page "a" stores a key that is not registered; its parent "b" stores "y".
/// let resolved = resolve_with(
///     "a",
///     &registry,
///     |_| vec!["b"],
///     |page| if *page == "a" { "x".into() } else { "y".into() },
/// );
/// assert_eq!(resolved, "y");
/// ```
pub fn resolve_with<I, A, K>(
    page: I,
    registry: &StyleRegistry,
    ancestors: A,
    mut style_key: K,
) -> String
where
    A: FnOnce(&I) -> Vec<I>,
    K: FnMut(&I) -> String,
{
    let ancestors = ancestors(&page);

    for (depth, candidate) in std::iter::once(page).chain(ancestors).enumerate() {
        let key = style_key(&candidate);
        if key == INHERIT {
            continue;
        }

        if registry.contains(&key) {
            trace!(depth, key = %key, "resolved page style");
            return key;
        }

        debug!(depth, key = %key, "skipping unregistered page style");
    }

    trace!("no page style in ancestor chain");
    INHERIT.to_string()
}
