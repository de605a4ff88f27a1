//! Member descriptors and modifier attributes.
//!
//! One descriptor struct per member kind. Descriptors are owned by the
//! class registry; queries hand out borrowed references to them.

use std::fmt;

use crate::registry::ClassId;

/// Kinds of class members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Instance or static methods
    Method,
    /// Instance or static fields
    Field,
    /// Properties (getter/setter pairs)
    Property,
    /// Events
    Event,
    /// Constructors
    Constructor,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Method => write!(f, "method"),
            MemberKind::Field => write!(f, "field"),
            MemberKind::Property => write!(f, "property"),
            MemberKind::Event => write!(f, "event"),
            MemberKind::Constructor => write!(f, "constructor"),
        }
    }
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible everywhere
    Public,
    /// Visible to the declaring class and subclasses
    Protected,
    /// Visible to the declaring class only; never inherited
    Private,
}

impl Visibility {
    /// Whether this is public visibility.
    pub const fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Modifier attributes for a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberAttributes {
    /// Member visibility
    pub visibility: Visibility,
    /// Whether the member is static (class-level)
    pub is_static: bool,
    /// Whether the member participates in virtual dispatch
    pub is_virtual: bool,
    /// Whether a virtual member introduces a new slot instead of
    /// overriding an inherited one
    pub is_new_slot: bool,
}

impl MemberAttributes {
    /// Non-virtual instance member.
    pub const fn instance(visibility: Visibility) -> Self {
        Self {
            visibility,
            is_static: false,
            is_virtual: false,
            is_new_slot: false,
        }
    }

    /// Static member.
    pub const fn static_member(visibility: Visibility) -> Self {
        Self {
            visibility,
            is_static: true,
            is_virtual: false,
            is_new_slot: false,
        }
    }

    /// Mark as virtual.
    pub const fn with_virtual(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Mark as a new-slot virtual (shadows instead of overriding).
    pub const fn with_new_slot(mut self) -> Self {
        self.is_new_slot = true;
        self
    }
}

/// A method declared on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    /// Method name
    pub name: String,
    /// Modifier attributes
    pub attributes: MemberAttributes,
    /// Parameter type names, used for signature comparison
    pub param_types: Vec<String>,
    /// Class the method is declared on
    pub declaring_class: ClassId,
}

impl MethodDef {
    /// Whether two methods have the same name and parameter list.
    pub fn has_same_signature(&self, other: &MethodDef) -> bool {
        self.name == other.name && self.param_types == other.param_types
    }
}

/// A field declared on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name
    pub name: String,
    /// Field type name
    pub type_name: String,
    /// Modifier attributes
    pub attributes: MemberAttributes,
    /// Class the field is declared on
    pub declaring_class: ClassId,
}

/// A property declared on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    /// Property name
    pub name: String,
    /// Property type name
    pub type_name: String,
    /// Modifier attributes
    pub attributes: MemberAttributes,
    /// Class the property is declared on
    pub declaring_class: ClassId,
}

/// An event declared on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDef {
    /// Event name
    pub name: String,
    /// Handler type name
    pub handler_type: String,
    /// Modifier attributes
    pub attributes: MemberAttributes,
    /// Class the event is declared on
    pub declaring_class: ClassId,
}

/// A constructor declared on a class. Constructors are unnamed and
/// never inherited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDef {
    /// Modifier attributes
    pub attributes: MemberAttributes,
    /// Parameter type names
    pub param_types: Vec<String>,
    /// Class the constructor is declared on
    pub declaring_class: ClassId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_builders() {
        let attrs = MemberAttributes::instance(Visibility::Public).with_virtual();
        assert!(attrs.is_virtual);
        assert!(!attrs.is_static);
        assert!(!attrs.is_new_slot);

        let attrs = MemberAttributes::static_member(Visibility::Private);
        assert!(attrs.is_static);
        assert!(!attrs.visibility.is_public());
    }

    #[test]
    fn test_method_signature_equality() {
        let a = MethodDef {
            name: "resize".to_string(),
            attributes: MemberAttributes::instance(Visibility::Public),
            param_types: vec!["number".to_string(), "number".to_string()],
            declaring_class: ClassId::from_index(0),
        };
        let mut b = a.clone();
        b.attributes = MemberAttributes::instance(Visibility::Protected).with_virtual();
        assert!(a.has_same_signature(&b));

        b.param_types.pop();
        assert!(!a.has_same_signature(&b));
    }
}
