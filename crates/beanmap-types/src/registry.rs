//! Declared types and the in-memory type registry
//!
//! [`TypeRegistry`] stores [`TypeDecl`]s the way a code generator would emit
//! them and serves two roles: it answers assignability questions
//! ([`TypeHierarchy`]) and builds [`ReflectedType`]s on request
//! ([`ReflectedTypeProvider`]).

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::class_info::ReflectedType;
use crate::error::RegistryError;
use crate::member::{ConstructorInfo, DecoratorInfo, FieldInfo, MethodInfo};
use crate::ty::{QualifiedName, TypeRef};

/// Decides which members a provider leaves out of a [`ReflectedType`]
pub trait MemberFilter {
    /// Whether a method should be dropped
    fn is_ignorable_method(&self, _method: &MethodInfo) -> bool {
        false
    }

    /// Whether a field should be dropped
    fn is_ignorable_field(&self, _field: &FieldInfo) -> bool {
        false
    }

    /// Whether a constructor should be dropped
    fn is_ignorable_constructor(&self, _ctor: &ConstructorInfo) -> bool {
        false
    }
}

/// Filter that keeps everything
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl MemberFilter for KeepAll {}

/// Supplies reflected metadata for named types
pub trait ReflectedTypeProvider {
    /// Reflect `name`, or `None` if the type is unknown
    fn reflect(&self, name: &str, filter: &dyn MemberFilter) -> Option<ReflectedType>;
}

/// Answers assignability questions between type references
pub trait TypeHierarchy {
    /// Whether a value of type `source` may be used where `target` is expected
    fn is_assignable(&self, target: &TypeRef, source: &TypeRef) -> bool;
}

/// Declaration of a class or interface
#[derive(Debug, Clone)]
pub struct TypeDecl {
    /// Type name
    pub name: QualifiedName,
    /// Direct supertypes (parent class first, then interfaces)
    pub supertypes: Vec<QualifiedName>,
    /// Decorators attached to the type
    pub decorators: Vec<DecoratorInfo>,
    /// Declared methods, static and instance
    pub methods: Vec<MethodInfo>,
    /// Declared fields, static and instance
    pub fields: Vec<FieldInfo>,
    /// Declared constructors
    pub constructors: Vec<ConstructorInfo>,
}

impl TypeDecl {
    /// Create an empty declaration
    pub fn new(name: impl Into<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
            decorators: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Add a direct supertype
    pub fn extends(mut self, name: impl Into<QualifiedName>) -> Self {
        self.supertypes.push(name.into());
        self
    }

    /// Attach a decorator to the type
    pub fn decorated(mut self, decorator: DecoratorInfo) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Add a method
    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a field
    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a constructor
    pub fn with_constructor(mut self, ctor: ConstructorInfo) -> Self {
        self.constructors.push(ctor);
        self
    }
}

/// Registry of declared types
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: Vec<TypeDecl>,
    name_to_id: FxHashMap<QualifiedName, usize>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration
    pub fn register(&mut self, decl: TypeDecl) -> Result<usize, RegistryError> {
        if self.name_to_id.contains_key(&decl.name) {
            return Err(RegistryError::DuplicateType {
                name: decl.name.to_string(),
            });
        }
        let id = self.types.len();
        self.name_to_id.insert(decl.name.clone(), id);
        self.types.push(decl);
        Ok(id)
    }

    /// Get a declaration by name
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.name_to_id
            .get(&QualifiedName::new(name))
            .and_then(|&id| self.types.get(id))
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all declarations in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.iter()
    }

    /// All known supertypes of `name`, nearest first, each once
    ///
    /// Supertypes that are not registered are skipped.
    pub fn ancestors(&self, name: &QualifiedName) -> Vec<&TypeDecl> {
        let mut result = Vec::new();
        let mut visited = FxHashSet::default();
        visited.insert(name.clone());

        let mut queue: VecDeque<&QualifiedName> = VecDeque::new();
        if let Some(decl) = self.get(name.as_str()) {
            queue.extend(decl.supertypes.iter());
        }

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(decl) = self.get(current.as_str()) {
                result.push(decl);
                queue.extend(decl.supertypes.iter());
            }
        }

        result
    }

    /// Check if `sub` is `sup` or one of its descendants
    pub fn is_subtype_of(&self, sub: &QualifiedName, sup: &QualifiedName) -> bool {
        if sub == sup {
            return true;
        }
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::from([sub]);
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            let Some(decl) = self.get(current.as_str()) else {
                continue;
            };
            for parent in &decl.supertypes {
                if parent == sup {
                    return true;
                }
                queue.push_back(parent);
            }
        }
        false
    }
}

impl TypeHierarchy for TypeRegistry {
    fn is_assignable(&self, target: &TypeRef, source: &TypeRef) -> bool {
        if target == source {
            return true;
        }
        match (target, source) {
            // Everything but primitives and void is an object
            (TypeRef::Object, s) => !s.is_primitive() && !s.is_void(),
            (TypeRef::Named(t), TypeRef::Named(s)) => self.is_subtype_of(s, t),
            // Reference arrays are covariant; primitive arrays only match exactly
            (TypeRef::Array(t), TypeRef::Array(s)) => {
                !t.is_primitive() && !s.is_primitive() && self.is_assignable(t, s)
            }
            _ => false,
        }
    }
}

impl ReflectedTypeProvider for TypeRegistry {
    fn reflect(&self, name: &str, filter: &dyn MemberFilter) -> Option<ReflectedType> {
        let decl = self.get(name)?;
        let ancestors = self.ancestors(&decl.name);

        let mut reflected = ReflectedType::new(decl.name.clone());
        reflected.decorators = decl.decorators.clone();

        // Own methods first; an inherited method is hidden by any override,
        // including one that is itself ignored
        let mut seen: FxHashSet<(&str, Vec<&TypeRef>)> = FxHashSet::default();
        for source in std::iter::once(decl).chain(ancestors.iter().copied()) {
            for method in source.methods.iter().filter(|m| !m.is_static()) {
                let key = (
                    method.name.as_str(),
                    method.parameters.iter().map(|p| &p.type_ref).collect(),
                );
                if !seen.insert(key) || filter.is_ignorable_method(method) {
                    continue;
                }
                reflected.add_member_method(method.clone());
            }
        }

        // Fields from the root of the hierarchy down
        for source in ancestors.iter().rev().copied().chain(std::iter::once(decl)) {
            for field in &source.fields {
                if field.modifiers.is_static
                    || field.modifiers.is_transient
                    || filter.is_ignorable_field(field)
                {
                    continue;
                }
                reflected.add_field(field.clone());
            }
        }

        for ctor in &decl.constructors {
            if !filter.is_ignorable_constructor(ctor) {
                reflected.add_constructor(ctor.clone());
            }
        }

        for method in decl.methods.iter().filter(|m| m.is_static()) {
            if !filter.is_ignorable_method(method) {
                reflected.add_static_method(method.clone());
            }
        }

        Some(reflected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::PrimitiveType;

    fn hierarchy() -> TypeRegistry {
        // Animal <- Dog <- Labrador, Dog also implements Pet
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::new("zoo.Animal")).unwrap();
        registry.register(TypeDecl::new("zoo.Pet")).unwrap();
        registry
            .register(TypeDecl::new("zoo.Dog").extends("zoo.Animal").extends("zoo.Pet"))
            .unwrap();
        registry
            .register(TypeDecl::new("zoo.Labrador").extends("zoo.Dog"))
            .unwrap();
        registry
    }

    #[test]
    fn test_register_duplicate() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::new("a.A")).unwrap();
        let err = registry.register(TypeDecl::new("a.A")).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateType {
                name: "a.A".to_string()
            }
        );
    }

    #[test]
    fn test_is_subtype_of() {
        let registry = hierarchy();
        let lab = QualifiedName::new("zoo.Labrador");
        assert!(registry.is_subtype_of(&lab, &QualifiedName::new("zoo.Animal")));
        assert!(registry.is_subtype_of(&lab, &QualifiedName::new("zoo.Pet")));
        assert!(registry.is_subtype_of(&lab, &lab));
        assert!(!registry.is_subtype_of(&QualifiedName::new("zoo.Animal"), &lab));
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let registry = hierarchy();
        let names: Vec<_> = registry
            .ancestors(&QualifiedName::new("zoo.Labrador"))
            .iter()
            .map(|d| d.name.to_string())
            .collect();
        assert_eq!(names, vec!["zoo.Dog", "zoo.Animal", "zoo.Pet"]);
    }

    #[test]
    fn test_cyclic_supertypes_terminate() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::new("a.X").extends("a.Y")).unwrap();
        registry.register(TypeDecl::new("a.Y").extends("a.X")).unwrap();
        assert!(!registry.is_subtype_of(&QualifiedName::new("a.X"), &QualifiedName::new("a.Z")));
        assert_eq!(registry.ancestors(&QualifiedName::new("a.X")).len(), 1);
    }

    #[test]
    fn test_assignability() {
        let registry = hierarchy();
        let animal = TypeRef::named("zoo.Animal");
        let dog = TypeRef::named("zoo.Dog");
        let int = TypeRef::Primitive(PrimitiveType::Int);

        assert!(registry.is_assignable(&animal, &dog));
        assert!(!registry.is_assignable(&dog, &animal));
        assert!(registry.is_assignable(&TypeRef::Object, &TypeRef::String));
        assert!(registry.is_assignable(&TypeRef::Object, &TypeRef::Boxed(PrimitiveType::Int)));
        assert!(!registry.is_assignable(&TypeRef::Object, &int));
        assert!(registry.is_assignable(&int, &int));
        assert!(!registry.is_assignable(&TypeRef::String, &TypeRef::Object));
    }

    #[test]
    fn test_array_assignability() {
        let registry = hierarchy();
        let animals = TypeRef::array(TypeRef::named("zoo.Animal"));
        let dogs = TypeRef::array(TypeRef::named("zoo.Dog"));
        let ints = TypeRef::array(TypeRef::Primitive(PrimitiveType::Int));
        let longs = TypeRef::array(TypeRef::Primitive(PrimitiveType::Long));

        assert!(registry.is_assignable(&animals, &dogs));
        assert!(!registry.is_assignable(&dogs, &animals));
        assert!(registry.is_assignable(&TypeRef::Object, &ints));
        assert!(!registry.is_assignable(&longs, &ints));
        assert!(!registry.is_assignable(&TypeRef::array(TypeRef::Object), &ints));
    }
}
