//! `storekeep-core`: shared domain vocabulary.
//!
//! The identity trait plus the error taxonomy used by the inventory
//! registry. No IO and no infrastructure concerns.

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
