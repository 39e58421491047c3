//! Page hierarchy access and style resolution.
//!
//! Pages are owned by a host content store. This module only needs two
//! read operations from it, captured by [`PageStore`]. [`MemoryPageStore`]
//! is a simple in-memory implementation for hosts and tests.

mod memory;
mod resolve;

pub use memory::{MemoryPageStore, PageNode};
pub use resolve::{resolve, resolve_with};

/// Read access to a page hierarchy.
///
/// Implementations must return finite, cycle-free ancestor chains that end
/// at a root page. Resolution does not detect cycles.
pub trait PageStore {
    /// Opaque page identifier.
    type PageId: Clone;

    /// Ancestors of `page`, nearest first, root last.
    ///
    /// Including `page` itself is allowed but unnecessary; resolution
    /// always checks the page before its ancestors.
    fn ancestors(&self, page: &Self::PageId) -> Vec<Self::PageId>;

    /// The raw style key stored on `page`, or an empty string if unset.
    fn style_key(&self, page: &Self::PageId) -> String;
}
