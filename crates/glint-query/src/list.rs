//! Queried member lists and the hierarchy walker.

use glint_types::{BindingFlags, TypeHierarchy, Visibility};

use crate::filter::NameFilter;
use crate::policy::MemberPolicy;

/// Fixed capacity increment for the parallel buffers.
const GROW: usize = 64;

/// Result of a member query over a class hierarchy.
///
/// Holds the members visible from the queried class as if selected
/// with every criteria flag set, ordered most-derived first. Each
/// entry stores the minimal [`BindingFlags`] mask a request must
/// contain for the entry to be selected, so one list answers every
/// flag combination via [`matches`](Self::matches).
///
/// A finished list is immutable (apart from the observably-neutral
/// [`compact`](Self::compact)) and safe for unsynchronized concurrent
/// reads, which makes it a good candidate for long-term caching.
#[derive(Debug, Clone)]
pub struct QueriedMemberList<M> {
    /// Index-aligned with `masks`.
    members: Vec<M>,
    masks: Vec<BindingFlags>,
    /// Prefix length of entries declared on the queried class itself.
    declared_only_count: usize,
}

impl<M: Copy> QueriedMemberList<M> {
    fn empty() -> Self {
        Self {
            members: Vec::with_capacity(GROW),
            masks: Vec::with_capacity(GROW),
            declared_only_count: 0,
        }
    }

    /// Walk `leaf` and its base classes, collecting every member of
    /// the policy's kind that matches `name` (all members when `name`
    /// is `None`), with name hiding and visibility hiding applied.
    pub fn create<P, H>(
        policy: &P,
        hierarchy: &H,
        leaf: H::Type,
        name: Option<&str>,
        ignore_case: bool,
    ) -> Self
    where
        P: MemberPolicy<Type = H::Type, Member = M>,
        H: TypeHierarchy,
    {
        let name_filter = name.map(|n| NameFilter::new(n, ignore_case));

        let mut list = Self::empty();
        let mut in_base_class = false;
        let mut current = Some(leaf);

        while let Some(ty) = current {
            // Everything collected so far came from strictly more
            // derived classes; only those may suppress this batch.
            let candidates_in_derived = list.members.len();

            for member in policy.declared_members(ty, name_filter.as_ref(), leaf) {
                let attrs = policy.attributes_of(&member);

                if in_base_class && attrs.visibility == Visibility::Private {
                    continue;
                }

                if candidates_in_derived != 0
                    && policy.is_suppressed_by_more_derived(
                        &member,
                        &list.members[..candidates_in_derived],
                    )
                {
                    continue;
                }

                let mut mask = if attrs.is_static {
                    BindingFlags::STATIC
                } else {
                    BindingFlags::INSTANCE
                };
                if attrs.is_static && in_base_class {
                    mask = mask.union(BindingFlags::FLATTEN_HIERARCHY);
                }
                mask = mask.union(if attrs.visibility.is_public() {
                    BindingFlags::PUBLIC
                } else {
                    BindingFlags::NON_PUBLIC
                });

                list.push(member, mask);
            }

            if !in_base_class {
                list.declared_only_count = list.members.len();
                if policy.always_declared_only() {
                    break;
                }
                in_base_class = true;
            }

            current = hierarchy.base_of(ty);
        }

        tracing::trace!(
            kind = %policy.kind(),
            total = list.total_count(),
            declared_only = list.declared_only_count,
            "member query complete"
        );
        list
    }

    /// Number of entries visible across the full hierarchy.
    pub fn total_count(&self) -> usize {
        self.members.len()
    }

    /// Number of entries declared on the queried class itself; these
    /// form the first `declared_only_count()` entries.
    pub fn declared_only_count(&self) -> usize {
        self.declared_only_count
    }

    /// The member at `index`. Out-of-range indices are a programmer
    /// error.
    pub fn get(&self, index: usize) -> M {
        debug_assert!(index < self.members.len());
        self.members[index]
    }

    /// Whether the entry at `index` is selected by `requested`: every
    /// flag the entry mandates must be present in the request.
    pub fn matches(&self, index: usize, requested: BindingFlags) -> bool {
        debug_assert!(index < self.masks.len());
        requested.contains(self.masks[index])
    }

    /// Iterate over the members in list order.
    pub fn iter(&self) -> impl Iterator<Item = M> + '_ {
        self.members.iter().copied()
    }

    /// Derive a new list keeping only entries for which `predicate`
    /// holds, preserving order and masks. The receiver is unchanged.
    pub fn filter(&self, predicate: impl Fn(&M) -> bool) -> Self {
        let mut members = Vec::with_capacity(self.members.len());
        let mut masks = Vec::with_capacity(self.members.len());
        let mut declared_only_count = 0;

        for (i, member) in self.members.iter().enumerate() {
            if predicate(member) {
                members.push(*member);
                masks.push(self.masks[i]);
                if i < self.declared_only_count {
                    declared_only_count += 1;
                }
            }
        }

        Self {
            members,
            masks,
            declared_only_count,
        }
    }

    /// Shed unused buffer capacity. Contents are unaffected; intended
    /// before long-term caching.
    pub fn compact(&mut self) {
        self.members.shrink_to_fit();
        self.masks.shrink_to_fit();
    }

    fn push(&mut self, member: M, mask: BindingFlags) {
        debug_assert!(mask.is_valid_entry_mask(), "malformed entry mask: {mask}");

        // Grow by a fixed increment rather than the allocator default.
        if self.members.len() == self.members.capacity() {
            self.members.reserve_exact(GROW);
            self.masks.reserve_exact(GROW);
        }
        self.members.push(member);
        self.masks.push(mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_types::{ClassId, MemberAttributes, MemberKind, Visibility};

    // A policy over a flat slice of (name, attributes) pairs on a
    // single class, hiding by name. Exercises the walker without a
    // registry.
    struct FlatPolicy<'a> {
        members: &'a [(&'a str, MemberAttributes)],
    }

    struct NoHierarchy;

    impl TypeHierarchy for NoHierarchy {
        type Type = ClassId;

        fn base_of(&self, _ty: ClassId) -> Option<ClassId> {
            None
        }
    }

    impl<'a> MemberPolicy for FlatPolicy<'a> {
        type Type = ClassId;
        type Member = &'a (&'a str, MemberAttributes);

        fn declared_members(
            &self,
            _ty: ClassId,
            name_filter: Option<&NameFilter>,
            _reflected: ClassId,
        ) -> Vec<Self::Member> {
            self.members
                .iter()
                .filter(|(name, _)| name_filter.map_or(true, |f| f.matches(name)))
                .collect()
        }

        fn attributes_of(&self, member: &Self::Member) -> MemberAttributes {
            member.1
        }

        fn is_suppressed_by_more_derived(
            &self,
            candidate: &Self::Member,
            collected: &[Self::Member],
        ) -> bool {
            collected.iter().any(|prior| prior.0 == candidate.0)
        }

        fn kind(&self) -> MemberKind {
            MemberKind::Field
        }
    }

    #[test]
    fn test_push_growth_is_fixed_increment() {
        let members: Vec<(&str, MemberAttributes)> = vec![];
        let policy = FlatPolicy { members: &members };
        let list = QueriedMemberList::create(
            &policy,
            &NoHierarchy,
            ClassId::from_index(0),
            None,
            false,
        );
        assert_eq!(list.members.capacity(), GROW);
        assert_eq!(list.total_count(), 0);
        assert_eq!(list.declared_only_count(), 0);
    }

    #[test]
    fn test_compact_sheds_capacity_only() {
        let members = vec![
            ("a", MemberAttributes::instance(Visibility::Public)),
            ("b", MemberAttributes::static_member(Visibility::Private)),
        ];
        let policy = FlatPolicy { members: &members };
        let mut list = QueriedMemberList::create(
            &policy,
            &NoHierarchy,
            ClassId::from_index(0),
            None,
            false,
        );

        assert_eq!(list.total_count(), 2);
        let before: Vec<_> = list.iter().map(|m| m.0).collect();
        list.compact();
        assert_eq!(list.members.capacity(), 2);
        assert_eq!(list.total_count(), 2);
        assert_eq!(list.declared_only_count(), 2);
        let after: Vec<_> = list.iter().map(|m| m.0).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_same_batch_members_never_suppress_each_other() {
        // FlatPolicy hides by name; two same-name members in one
        // class's batch must both survive, because the suppression
        // window covers only entries collected before the batch.
        let members = vec![
            ("dup", MemberAttributes::instance(Visibility::Public)),
            ("dup", MemberAttributes::static_member(Visibility::Public)),
        ];
        let policy = FlatPolicy { members: &members };
        let list = QueriedMemberList::create(
            &policy,
            &NoHierarchy,
            ClassId::from_index(0),
            None,
            false,
        );

        assert_eq!(list.total_count(), 2);
        assert_eq!(list.declared_only_count(), 2);
    }

    #[test]
    fn test_filter_always_true_is_identity() {
        let members = vec![
            ("a", MemberAttributes::instance(Visibility::Public)),
            ("b", MemberAttributes::static_member(Visibility::Protected)),
            ("c", MemberAttributes::instance(Visibility::Private)),
        ];
        let policy = FlatPolicy { members: &members };
        let list = QueriedMemberList::create(
            &policy,
            &NoHierarchy,
            ClassId::from_index(0),
            None,
            false,
        );

        let kept = list.filter(|_| true);
        assert_eq!(kept.total_count(), list.total_count());
        assert_eq!(kept.declared_only_count(), list.declared_only_count());
        for i in 0..list.total_count() {
            assert_eq!(kept.get(i).0, list.get(i).0);
            assert_eq!(kept.masks[i], list.masks[i]);
        }
    }
}
