//! Class registry and base-class traversal.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::error::RegistryError;
use crate::member::{
    ConstructorDef, EventDef, FieldDef, MemberAttributes, MethodDef, PropertyDef,
};

/// Unique identifier for a class within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(u32);

impl ClassId {
    /// Create from a registry slot index.
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// The registry slot index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// Base-class traversal supplied by the host type system.
///
/// Implementations must guarantee a finite, acyclic chain; the member
/// query walk does not detect cycles.
pub trait TypeHierarchy {
    /// Class handle type.
    type Type: Copy + Eq;

    /// The base class of `ty`, or `None` for root classes.
    fn base_of(&self, ty: Self::Type) -> Option<Self::Type>;
}

/// Declared members and identity of a single class.
#[derive(Debug, Clone)]
pub struct ClassDef {
    /// Class ID
    pub id: ClassId,
    /// Class name
    pub name: String,
    /// Parent class ID (None for root classes)
    pub parent: Option<ClassId>,
    /// Methods declared directly on this class
    pub methods: Vec<MethodDef>,
    /// Fields declared directly on this class
    pub fields: Vec<FieldDef>,
    /// Properties declared directly on this class
    pub properties: Vec<PropertyDef>,
    /// Events declared directly on this class
    pub events: Vec<EventDef>,
    /// Constructors declared directly on this class
    pub constructors: Vec<ConstructorDef>,
}

/// Registry of classes and their declared members.
///
/// The in-memory realization of the type-system boundary the query
/// engine consumes: declared-member enumeration per class plus
/// [`TypeHierarchy`] traversal.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    /// Classes indexed by ID
    classes: Vec<ClassDef>,
    /// Class name to ID mapping
    name_to_id: FxHashMap<String, ClassId>,
}

impl ClassRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new class and return its ID.
    pub fn register_class(
        &mut self,
        name: &str,
        parent: Option<ClassId>,
    ) -> Result<ClassId, RegistryError> {
        if self.name_to_id.contains_key(name) {
            return Err(RegistryError::DuplicateClassName {
                name: name.to_string(),
            });
        }
        if let Some(parent) = parent {
            self.check_class(parent)?;
        }

        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassDef {
            id,
            name: name.to_string(),
            parent,
            methods: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
            constructors: Vec::new(),
        });
        self.name_to_id.insert(name.to_string(), id);

        Ok(id)
    }

    /// Add a method to a registered class.
    pub fn add_method(
        &mut self,
        class: ClassId,
        name: &str,
        attributes: MemberAttributes,
        param_types: &[&str],
    ) -> Result<(), RegistryError> {
        self.check_class(class)?;
        self.classes[class.index()].methods.push(MethodDef {
            name: name.to_string(),
            attributes,
            param_types: param_types.iter().map(|t| t.to_string()).collect(),
            declaring_class: class,
        });
        Ok(())
    }

    /// Add a field to a registered class.
    pub fn add_field(
        &mut self,
        class: ClassId,
        name: &str,
        type_name: &str,
        attributes: MemberAttributes,
    ) -> Result<(), RegistryError> {
        self.check_class(class)?;
        self.classes[class.index()].fields.push(FieldDef {
            name: name.to_string(),
            type_name: type_name.to_string(),
            attributes,
            declaring_class: class,
        });
        Ok(())
    }

    /// Add a property to a registered class.
    pub fn add_property(
        &mut self,
        class: ClassId,
        name: &str,
        type_name: &str,
        attributes: MemberAttributes,
    ) -> Result<(), RegistryError> {
        self.check_class(class)?;
        self.classes[class.index()].properties.push(PropertyDef {
            name: name.to_string(),
            type_name: type_name.to_string(),
            attributes,
            declaring_class: class,
        });
        Ok(())
    }

    /// Add an event to a registered class.
    pub fn add_event(
        &mut self,
        class: ClassId,
        name: &str,
        handler_type: &str,
        attributes: MemberAttributes,
    ) -> Result<(), RegistryError> {
        self.check_class(class)?;
        self.classes[class.index()].events.push(EventDef {
            name: name.to_string(),
            handler_type: handler_type.to_string(),
            attributes,
            declaring_class: class,
        });
        Ok(())
    }

    /// Add a constructor to a registered class.
    pub fn add_constructor(
        &mut self,
        class: ClassId,
        attributes: MemberAttributes,
        param_types: &[&str],
    ) -> Result<(), RegistryError> {
        self.check_class(class)?;
        self.classes[class.index()].constructors.push(ConstructorDef {
            attributes,
            param_types: param_types.iter().map(|t| t.to_string()).collect(),
            declaring_class: class,
        });
        Ok(())
    }

    /// Get class by ID.
    pub fn get(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.index())
    }

    /// Get class by name.
    pub fn get_by_name(&self, name: &str) -> Option<&ClassDef> {
        self.name_to_id.get(name).and_then(|id| self.get(*id))
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over all classes.
    pub fn iter(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.iter()
    }

    fn check_class(&self, id: ClassId) -> Result<(), RegistryError> {
        if id.index() < self.classes.len() {
            Ok(())
        } else {
            Err(RegistryError::UnknownClass { id })
        }
    }
}

impl TypeHierarchy for ClassRegistry {
    type Type = ClassId;

    fn base_of(&self, ty: ClassId) -> Option<ClassId> {
        self.get(ty).and_then(|class| class.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Visibility;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ClassRegistry::new();
        let id = registry.register_class("Control", None).unwrap();

        assert_eq!(registry.get(id).unwrap().name, "Control");
        assert_eq!(registry.get_by_name("Control").unwrap().id, id);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_class_name() {
        let mut registry = ClassRegistry::new();
        registry.register_class("Control", None).unwrap();

        let err = registry.register_class("Control", None).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateClassName {
                name: "Control".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_parent() {
        let mut registry = ClassRegistry::new();
        let err = registry
            .register_class("Button", Some(ClassId::from_index(7)))
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownClass { .. }));
    }

    #[test]
    fn test_base_of_chain() {
        let mut registry = ClassRegistry::new();
        let control = registry.register_class("Control", None).unwrap();
        let button = registry.register_class("Button", Some(control)).unwrap();
        let icon_button = registry.register_class("IconButton", Some(button)).unwrap();

        assert_eq!(registry.base_of(icon_button), Some(button));
        assert_eq!(registry.base_of(button), Some(control));
        assert_eq!(registry.base_of(control), None);
    }

    #[test]
    fn test_members_stamped_with_declaring_class() {
        let mut registry = ClassRegistry::new();
        let control = registry.register_class("Control", None).unwrap();
        registry
            .add_field(
                control,
                "width",
                "number",
                MemberAttributes::instance(Visibility::Public),
            )
            .unwrap();

        let class = registry.get(control).unwrap();
        assert_eq!(class.fields.len(), 1);
        assert_eq!(class.fields[0].declaring_class, control);
    }
}
