//! Per-kind member policy contract.

use glint_types::{MemberAttributes, MemberKind};

use crate::filter::NameFilter;

/// Capability contract for one member kind.
///
/// The hierarchy walk is written once, generic over this trait; one
/// implementation exists per kind (method, field, property, event,
/// constructor). Each implementation decides which members a class
/// declares, how their modifiers read, and when a member collected
/// from a more derived class hides a base candidate.
pub trait MemberPolicy {
    /// Class handle of the backing type system.
    type Type: Copy + Eq;
    /// Borrowed member handle.
    type Member: Copy;

    /// Members declared directly on `ty`, pre-filtered by name.
    ///
    /// `reflected` is the originally queried class, passed through for
    /// policies that need it distinct from the class being walked.
    fn declared_members(
        &self,
        ty: Self::Type,
        name_filter: Option<&NameFilter>,
        reflected: Self::Type,
    ) -> Vec<Self::Member>;

    /// Modifier attributes of a member.
    fn attributes_of(&self, member: &Self::Member) -> MemberAttributes;

    /// Whether a member already collected from a strictly more derived
    /// class hides `candidate`. Only such members are passed in
    /// `collected_in_derived`.
    fn is_suppressed_by_more_derived(
        &self,
        candidate: &Self::Member,
        collected_in_derived: &[Self::Member],
    ) -> bool;

    /// Whether the walk never proceeds past the queried class.
    fn always_declared_only(&self) -> bool {
        false
    }

    /// The member kind this policy serves.
    fn kind(&self) -> MemberKind;
}
