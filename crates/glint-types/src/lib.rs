//! Glint Type Model
//!
//! Class and member metadata for the glint member-query engine.
//! Provides the binding-flag masks, per-kind member descriptors, and
//! the class registry that realizes the host-type-system boundary
//! (declared members plus base-class traversal).

#![warn(missing_docs)]

pub mod binding;
pub mod error;
pub mod member;
pub mod registry;

pub use binding::BindingFlags;
pub use error::RegistryError;
pub use member::{
    ConstructorDef, EventDef, FieldDef, MemberAttributes, MemberKind, MethodDef, PropertyDef,
    Visibility,
};
pub use registry::{ClassDef, ClassId, ClassRegistry, TypeHierarchy};
