//! In-memory page hierarchy.

use std::collections::HashMap;
use std::hash::Hash;

use super::PageStore;
use crate::style::INHERIT;

/// A page as seen by style resolution: an optional parent and a stored key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageNode<Id> {
    /// Parent page, `None` for a root.
    pub parent: Option<Id>,
    /// Raw stored style key; empty means inherit.
    pub style_key: String,
}

/// A [`PageStore`] backed by a hash map.
///
/// Parents that are not in the store end the ancestor chain, as if the page
/// were a root. Chains are capped at the number of stored pages, so a
/// cyclic parent link cannot make [`ancestors`](PageStore::ancestors) loop.
///
/// # Example
///
/// ```rust
/// use page_style_inheritance::{MemoryPageStore, PageStore};
///
/// let mut pages = MemoryPageStore::new();
/// pages.insert("about", None, "dark");
/// pages.insert("team", Some("about"), "");
/// pages.insert("alice", Some("team"), "");
///
/// assert_eq!(pages.ancestors(&"alice"), vec!["team", "about"]);
/// assert_eq!(pages.style_key(&"about"), "dark");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryPageStore<Id> {
    pages: HashMap<Id, PageNode<Id>>,
}

impl<Id: Eq + Hash + Clone> MemoryPageStore<Id> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    /// Adds or replaces a page.
    pub fn insert(&mut self, id: Id, parent: Option<Id>, style_key: impl Into<String>) {
        self.pages.insert(
            id,
            PageNode {
                parent,
                style_key: style_key.into(),
            },
        );
    }

    /// Stores a new style key on an existing page.
    ///
    /// Returns false if the page is unknown.
    pub fn set_style_key(&mut self, id: &Id, style_key: impl Into<String>) -> bool {
        match self.pages.get_mut(id) {
            Some(node) => {
                node.style_key = style_key.into();
                true
            }
            None => false,
        }
    }

    /// Resets a page to the sentinel key so it inherits again.
    pub fn clear_style_key(&mut self, id: &Id) -> bool {
        self.set_style_key(id, INHERIT)
    }

    /// Looks up a page.
    pub fn get(&self, id: &Id) -> Option<&PageNode<Id>> {
        self.pages.get(id)
    }

    /// Number of stored pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if no pages are stored.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl<Id: Eq + Hash + Clone> Default for MemoryPageStore<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Eq + Hash + Clone> PageStore for MemoryPageStore<Id> {
    type PageId = Id;

    fn ancestors(&self, page: &Id) -> Vec<Id> {
        let mut chain = Vec::new();
        let mut current = self.pages.get(page).and_then(|node| node.parent.as_ref());

        while let Some(parent) = current {
            if chain.len() >= self.pages.len() {
                break;
            }
            let Some(node) = self.pages.get(parent) else {
                break;
            };
            chain.push(parent.clone());
            current = node.parent.as_ref();
        }

        chain
    }

    fn style_key(&self, page: &Id) -> String {
        self.pages
            .get(page)
            .map(|node| node.style_key.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hierarchy() -> MemoryPageStore<u32> {
        let mut pages = MemoryPageStore::new();
        pages.insert(1, None, "dark");
        pages.insert(2, Some(1), "");
        pages.insert(3, Some(2), "light");
        pages.insert(4, Some(3), "");
        pages
    }

    #[test]
    fn test_ancestors_nearest_first() {
        assert_eq!(hierarchy().ancestors(&4), vec![3, 2, 1]);
    }

    #[test]
    fn test_ancestors_of_root_is_empty() {
        assert!(hierarchy().ancestors(&1).is_empty());
    }

    #[test]
    fn test_ancestors_of_unknown_page_is_empty() {
        assert!(hierarchy().ancestors(&99).is_empty());
    }

    #[test]
    fn test_ancestors_stop_at_missing_parent() {
        let mut pages = MemoryPageStore::new();
        pages.insert(2, Some(1), "");
        pages.insert(3, Some(2), "");
        assert_eq!(pages.ancestors(&3), vec![2]);
    }

    #[test]
    fn test_ancestors_cycle_is_bounded() {
        let mut pages = MemoryPageStore::new();
        pages.insert(1, Some(2), "");
        pages.insert(2, Some(1), "");
        assert_eq!(pages.ancestors(&1).len(), 2);
    }

    #[test]
    fn test_style_key_defaults_to_sentinel() {
        assert_eq!(hierarchy().style_key(&99), INHERIT);
        assert_eq!(hierarchy().style_key(&2), INHERIT);
    }

    #[test]
    fn test_set_and_clear_style_key() {
        let mut pages = hierarchy();
        assert!(pages.set_style_key(&2, "light"));
        assert_eq!(pages.style_key(&2), "light");

        assert!(pages.clear_style_key(&2));
        assert_eq!(pages.get(&2).unwrap().style_key, INHERIT);

        assert!(!pages.set_style_key(&42, "dark"));
        assert_eq!(pages.len(), 4);
    }
}
