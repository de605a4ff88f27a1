//! Registry errors.
//!
//! Member queries themselves are total and never fail; only registry
//! construction can.

use thiserror::Error;

use crate::registry::ClassId;

/// Errors that can occur while populating a class registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A class with the same name is already registered
    #[error("Duplicate class name: {name}")]
    DuplicateClassName {
        /// The conflicting name
        name: String,
    },

    /// A class ID does not refer to a registered class
    #[error("Unknown class: {id}")]
    UnknownClass {
        /// The unresolved ID
        id: ClassId,
    },
}
