//! Concrete member policies over a [`ClassRegistry`], one per kind.
//!
//! Hiding rules:
//! - methods hide by signature: a virtual base method is suppressed
//!   when a more derived method overrides its slot (same name and
//!   parameter list, virtual, not new-slot);
//! - fields, properties, and events hide by name;
//! - constructors are never inherited and ignore the name filter.

use glint_types::{
    ClassId, ClassRegistry, ConstructorDef, EventDef, FieldDef, MemberAttributes, MemberKind,
    MethodDef, PropertyDef,
};

use crate::filter::NameFilter;
use crate::policy::MemberPolicy;

fn name_matches(filter: Option<&NameFilter>, name: &str) -> bool {
    filter.map_or(true, |f| f.matches(name))
}

/// Policy for method queries.
#[derive(Debug, Clone, Copy)]
pub struct MethodPolicy<'ts> {
    registry: &'ts ClassRegistry,
}

impl<'ts> MethodPolicy<'ts> {
    /// Create a method policy over `registry`.
    pub fn new(registry: &'ts ClassRegistry) -> Self {
        Self { registry }
    }
}

impl<'ts> MemberPolicy for MethodPolicy<'ts> {
    type Type = ClassId;
    type Member = &'ts MethodDef;

    fn declared_members(
        &self,
        ty: ClassId,
        name_filter: Option<&NameFilter>,
        _reflected: ClassId,
    ) -> Vec<&'ts MethodDef> {
        let Some(class) = self.registry.get(ty) else {
            return Vec::new();
        };
        class
            .methods
            .iter()
            .filter(|m| name_matches(name_filter, &m.name))
            .collect()
    }

    fn attributes_of(&self, member: &&'ts MethodDef) -> MemberAttributes {
        member.attributes
    }

    fn is_suppressed_by_more_derived(
        &self,
        candidate: &&'ts MethodDef,
        collected_in_derived: &[&'ts MethodDef],
    ) -> bool {
        // Only overridable slots can be hidden; non-virtual methods
        // with identical signatures coexist in the result.
        if !candidate.attributes.is_virtual {
            return false;
        }
        collected_in_derived.iter().any(|prior| {
            prior.has_same_signature(candidate)
                && prior.attributes.is_virtual
                && !prior.attributes.is_new_slot
        })
    }

    fn kind(&self) -> MemberKind {
        MemberKind::Method
    }
}

/// Policy for field queries.
#[derive(Debug, Clone, Copy)]
pub struct FieldPolicy<'ts> {
    registry: &'ts ClassRegistry,
}

impl<'ts> FieldPolicy<'ts> {
    /// Create a field policy over `registry`.
    pub fn new(registry: &'ts ClassRegistry) -> Self {
        Self { registry }
    }
}

impl<'ts> MemberPolicy for FieldPolicy<'ts> {
    type Type = ClassId;
    type Member = &'ts FieldDef;

    fn declared_members(
        &self,
        ty: ClassId,
        name_filter: Option<&NameFilter>,
        _reflected: ClassId,
    ) -> Vec<&'ts FieldDef> {
        let Some(class) = self.registry.get(ty) else {
            return Vec::new();
        };
        class
            .fields
            .iter()
            .filter(|f| name_matches(name_filter, &f.name))
            .collect()
    }

    fn attributes_of(&self, member: &&'ts FieldDef) -> MemberAttributes {
        member.attributes
    }

    fn is_suppressed_by_more_derived(
        &self,
        candidate: &&'ts FieldDef,
        collected_in_derived: &[&'ts FieldDef],
    ) -> bool {
        collected_in_derived
            .iter()
            .any(|prior| prior.name == candidate.name)
    }

    fn kind(&self) -> MemberKind {
        MemberKind::Field
    }
}

/// Policy for property queries.
#[derive(Debug, Clone, Copy)]
pub struct PropertyPolicy<'ts> {
    registry: &'ts ClassRegistry,
}

impl<'ts> PropertyPolicy<'ts> {
    /// Create a property policy over `registry`.
    pub fn new(registry: &'ts ClassRegistry) -> Self {
        Self { registry }
    }
}

impl<'ts> MemberPolicy for PropertyPolicy<'ts> {
    type Type = ClassId;
    type Member = &'ts PropertyDef;

    fn declared_members(
        &self,
        ty: ClassId,
        name_filter: Option<&NameFilter>,
        _reflected: ClassId,
    ) -> Vec<&'ts PropertyDef> {
        let Some(class) = self.registry.get(ty) else {
            return Vec::new();
        };
        class
            .properties
            .iter()
            .filter(|p| name_matches(name_filter, &p.name))
            .collect()
    }

    fn attributes_of(&self, member: &&'ts PropertyDef) -> MemberAttributes {
        member.attributes
    }

    fn is_suppressed_by_more_derived(
        &self,
        candidate: &&'ts PropertyDef,
        collected_in_derived: &[&'ts PropertyDef],
    ) -> bool {
        collected_in_derived
            .iter()
            .any(|prior| prior.name == candidate.name)
    }

    fn kind(&self) -> MemberKind {
        MemberKind::Property
    }
}

/// Policy for event queries.
#[derive(Debug, Clone, Copy)]
pub struct EventPolicy<'ts> {
    registry: &'ts ClassRegistry,
}

impl<'ts> EventPolicy<'ts> {
    /// Create an event policy over `registry`.
    pub fn new(registry: &'ts ClassRegistry) -> Self {
        Self { registry }
    }
}

impl<'ts> MemberPolicy for EventPolicy<'ts> {
    type Type = ClassId;
    type Member = &'ts EventDef;

    fn declared_members(
        &self,
        ty: ClassId,
        name_filter: Option<&NameFilter>,
        _reflected: ClassId,
    ) -> Vec<&'ts EventDef> {
        let Some(class) = self.registry.get(ty) else {
            return Vec::new();
        };
        class
            .events
            .iter()
            .filter(|e| name_matches(name_filter, &e.name))
            .collect()
    }

    fn attributes_of(&self, member: &&'ts EventDef) -> MemberAttributes {
        member.attributes
    }

    fn is_suppressed_by_more_derived(
        &self,
        candidate: &&'ts EventDef,
        collected_in_derived: &[&'ts EventDef],
    ) -> bool {
        collected_in_derived
            .iter()
            .any(|prior| prior.name == candidate.name)
    }

    fn kind(&self) -> MemberKind {
        MemberKind::Event
    }
}

/// Policy for constructor queries. Constructors are unnamed and never
/// inherited, so the walk stops at the queried class.
#[derive(Debug, Clone, Copy)]
pub struct ConstructorPolicy<'ts> {
    registry: &'ts ClassRegistry,
}

impl<'ts> ConstructorPolicy<'ts> {
    /// Create a constructor policy over `registry`.
    pub fn new(registry: &'ts ClassRegistry) -> Self {
        Self { registry }
    }
}

impl<'ts> MemberPolicy for ConstructorPolicy<'ts> {
    type Type = ClassId;
    type Member = &'ts ConstructorDef;

    fn declared_members(
        &self,
        ty: ClassId,
        _name_filter: Option<&NameFilter>,
        _reflected: ClassId,
    ) -> Vec<&'ts ConstructorDef> {
        let Some(class) = self.registry.get(ty) else {
            return Vec::new();
        };
        class.constructors.iter().collect()
    }

    fn attributes_of(&self, member: &&'ts ConstructorDef) -> MemberAttributes {
        member.attributes
    }

    fn is_suppressed_by_more_derived(
        &self,
        _candidate: &&'ts ConstructorDef,
        _collected_in_derived: &[&'ts ConstructorDef],
    ) -> bool {
        false
    }

    fn always_declared_only(&self) -> bool {
        true
    }

    fn kind(&self) -> MemberKind {
        MemberKind::Constructor
    }
}
