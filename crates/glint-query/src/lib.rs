//! Glint Member Query Engine
//!
//! Resolves the members of a class and its base-class chain into a
//! flat, cacheable list. Each entry carries the minimal
//! [`BindingFlags`](glint_types::BindingFlags) mask a caller's
//! selection criteria must contain for the entry to be selected, so a
//! single query result answers every flag combination without
//! re-walking the hierarchy.
//!
//! Entries are ordered most-derived first. Name hiding and visibility
//! hiding are applied during a single derived-to-base walk, driven by
//! a per-member-kind [`MemberPolicy`].

#![warn(missing_docs)]

pub mod cache;
pub mod filter;
pub mod list;
pub mod policies;
pub mod policy;

pub use cache::{CaseMode, QueryCache, QueryKey};
pub use filter::NameFilter;
pub use list::QueriedMemberList;
pub use policies::{ConstructorPolicy, EventPolicy, FieldPolicy, MethodPolicy, PropertyPolicy};
pub use policy::MemberPolicy;
