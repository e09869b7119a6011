//! Entity trait: records identified by key rather than by value.

/// A domain record whose identity is its key.
///
/// Two entities with the same id are the same record even if their other
/// fields differ; registries use the id as their uniqueness authority.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether `other` refers to the same record.
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
