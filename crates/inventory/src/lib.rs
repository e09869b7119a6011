//! Inventory domain module.
//!
//! An in-memory registry of stored items, indexed by id (unique) and by
//! description (ordered). Pure domain logic: no IO, no storage, no locking.

pub mod item;
pub mod listing;
pub mod registry;

pub use item::{Item, ItemId};
pub use listing::{Listing, ListingEntry};
pub use registry::Registry;
