//! Reflected view of a single type
//!
//! A [`ReflectedType`] is what a provider hands to introspection: the member
//! methods, fields, and constructors of one type after provider-side
//! filtering (static, transient, and ignorable members already removed).

use crate::member::{ConstructorInfo, DecoratorInfo, FieldInfo, MethodInfo};
use crate::ty::{QualifiedName, TypeRef};

/// Reflected metadata for a single type
#[derive(Debug, Clone)]
pub struct ReflectedType {
    /// Canonical type name
    pub name: QualifiedName,
    /// Decorators attached to the type itself
    pub decorators: Vec<DecoratorInfo>,
    member_methods: Vec<MethodInfo>,
    fields: Vec<FieldInfo>,
    constructors: Vec<ConstructorInfo>,
    default_constructor: Option<ConstructorInfo>,
    single_arg_constructors: Vec<ConstructorInfo>,
    single_arg_static_methods: Vec<MethodInfo>,
}

impl ReflectedType {
    /// Create an empty reflected type
    pub fn new(name: impl Into<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            decorators: Vec::new(),
            member_methods: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            default_constructor: None,
            single_arg_constructors: Vec::new(),
            single_arg_static_methods: Vec::new(),
        }
    }

    /// Add a member (instance) method
    pub fn add_member_method(&mut self, method: MethodInfo) {
        self.member_methods.push(method);
    }

    /// Add a field
    pub fn add_field(&mut self, field: FieldInfo) {
        self.fields.push(field);
    }

    /// Add a constructor; no-arg and single-arg constructors are also indexed
    pub fn add_constructor(&mut self, ctor: ConstructorInfo) {
        match ctor.parameter_count() {
            0 => self.default_constructor = Some(ctor.clone()),
            1 => self.single_arg_constructors.push(ctor.clone()),
            _ => {}
        }
        self.constructors.push(ctor);
    }

    /// Add a static method; only single-argument ones are kept
    pub fn add_static_method(&mut self, method: MethodInfo) {
        if method.parameter_count() == 1 {
            self.single_arg_static_methods.push(method);
        }
    }

    /// This type as a type reference
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::Named(self.name.clone())
    }

    /// Member methods in declaration order
    pub fn member_methods(&self) -> &[MethodInfo] {
        &self.member_methods
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// All declared constructors
    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    /// The no-arg constructor, if any
    pub fn default_constructor(&self) -> Option<&ConstructorInfo> {
        self.default_constructor.as_ref()
    }

    /// Constructors taking exactly one argument
    pub fn single_arg_constructors(&self) -> &[ConstructorInfo] {
        &self.single_arg_constructors
    }

    /// Static methods taking exactly one argument
    pub fn single_arg_static_methods(&self) -> &[MethodInfo] {
        &self.single_arg_static_methods
    }

    /// Find a member method by name and exact parameter types
    pub fn find_method(&self, name: &str, param_types: &[TypeRef]) -> Option<&MethodInfo> {
        self.member_methods
            .iter()
            .find(|m| m.matches_signature(name, param_types))
    }
}
