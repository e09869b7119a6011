//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a rejected operation on an otherwise healthy registry;
/// none of them is fatal. Each carries the offending identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An insertion used an id that is already present.
    #[error("Item with ID {id} already exists!")]
    DuplicateItem { id: String },

    /// A lookup or removal used an id that is not present.
    #[error("Item with ID {id} not found!")]
    ItemNotFound { id: String },
}

impl DomainError {
    pub fn duplicate_item(id: impl Into<String>) -> Self {
        Self::DuplicateItem { id: id.into() }
    }

    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound { id: id.into() }
    }

    /// The identifier that caused the failure.
    pub fn id(&self) -> &str {
        match self {
            Self::DuplicateItem { id } | Self::ItemNotFound { id } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_id() {
        let dup = DomainError::duplicate_item("ITEM001");
        assert_eq!(dup.to_string(), "Item with ID ITEM001 already exists!");

        let missing = DomainError::item_not_found("ITEM003");
        assert_eq!(missing.to_string(), "Item with ID ITEM003 not found!");
    }

    #[test]
    fn id_accessor_covers_both_kinds() {
        assert_eq!(DomainError::duplicate_item("A").id(), "A");
        assert_eq!(DomainError::item_not_found("B").id(), "B");
    }
}
