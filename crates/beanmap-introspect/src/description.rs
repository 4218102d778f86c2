//! Bean description facade
//!
//! [`BeanDescription`] answers every property and creator question for one
//! reflected type. Results borrow from the description and are built fresh
//! on each call.

use beanmap_types::{
    ConstructorInfo, FieldInfo, Instance, MethodInfo, ReflectedType, TypeHierarchy, TypeRef,
};

use crate::annotations::{AnnotationIntrospector, Inclusion};
use crate::classifier;
use crate::collector::{self, IgnoredNames, PropertyMap};
use crate::config::IntrospectionConfig;
use crate::creators::CreatorResolver;
use crate::error::IntrospectResult;

/// Introspected view of one bean type
pub struct BeanDescription<'a> {
    class_info: ReflectedType,
    introspector: &'a dyn AnnotationIntrospector,
    hierarchy: &'a dyn TypeHierarchy,
}

/// Everything needed to write a bean
#[derive(Debug)]
pub struct SerializationView<'b> {
    /// Getter properties
    pub getters: PropertyMap<'b, MethodInfo>,
    /// Field properties
    pub fields: PropertyMap<'b, FieldInfo>,
    /// Method replacing the whole bean with a single value
    pub as_value: Option<&'b MethodInfo>,
    /// Inclusion policy
    pub inclusion: Inclusion,
}

/// Everything needed to read a bean
#[derive(Debug)]
pub struct DeserializationView<'b> {
    /// Setter properties
    pub setters: PropertyMap<'b, MethodInfo>,
    /// Field properties
    pub fields: PropertyMap<'b, FieldInfo>,
    /// Catch-all setter for unknown properties
    pub any_setter: Option<&'b MethodInfo>,
    /// Zero-argument constructor
    pub default_constructor: Option<&'b ConstructorInfo>,
    /// Single-argument constructors
    pub single_arg_constructors: &'b [ConstructorInfo],
    /// Static factory methods
    pub factory_methods: Vec<&'b MethodInfo>,
}

impl<'a> BeanDescription<'a> {
    /// Describe `class_info` using the given annotation and type hierarchy sources
    pub fn new(
        class_info: ReflectedType,
        introspector: &'a dyn AnnotationIntrospector,
        hierarchy: &'a dyn TypeHierarchy,
    ) -> Self {
        Self {
            class_info,
            introspector,
            hierarchy,
        }
    }

    /// The reflected type
    pub fn class_info(&self) -> &ReflectedType {
        &self.class_info
    }

    /// The bean type as a type reference
    pub fn bean_type(&self) -> TypeRef {
        self.class_info.type_ref()
    }

    /// Member method by exact name and parameter types
    pub fn find_method(&self, name: &str, param_types: &[TypeRef]) -> Option<&MethodInfo> {
        self.class_info.find_method(name, param_types)
    }

    fn creators(&self) -> CreatorResolver<'_> {
        CreatorResolver::new(&self.class_info, self.introspector, self.hierarchy)
    }

    // ===== Serialization =====

    /// Getter properties in declaration order
    pub fn find_getters(
        &self,
        auto_detect: bool,
        ignored: Option<&IgnoredNames>,
    ) -> IntrospectResult<PropertyMap<'_, MethodInfo>> {
        collector::collect_getters(&self.class_info, self.introspector, auto_detect, ignored)
    }

    /// Field properties read during serialization
    pub fn find_serializable_fields(
        &self,
        auto_detect: bool,
        ignored: Option<&IgnoredNames>,
    ) -> IntrospectResult<PropertyMap<'_, FieldInfo>> {
        collector::collect_fields(&self.class_info, self.introspector, auto_detect, ignored, true)
    }

    /// The as-value method, if any
    pub fn find_as_value_method(&self) -> IntrospectResult<Option<&MethodInfo>> {
        classifier::find_as_value_method(self.class_info.member_methods(), self.introspector)
    }

    /// Inclusion policy declared on the class, else `default`
    pub fn find_serialization_inclusion(&self, default: Inclusion) -> Inclusion {
        self.introspector
            .find_serialization_inclusion(&self.class_info, default)
    }

    /// All serialization-side answers under `config`
    pub fn serialization_view(
        &self,
        config: &IntrospectionConfig,
    ) -> IntrospectResult<SerializationView<'_>> {
        let ignored = config.serialization.ignored();
        Ok(SerializationView {
            getters: self.find_getters(config.auto_detect.getters, Some(&ignored))?,
            fields: self.find_serializable_fields(config.auto_detect.fields, Some(&ignored))?,
            as_value: self.find_as_value_method()?,
            inclusion: self.find_serialization_inclusion(config.serialization.inclusion),
        })
    }

    // ===== Deserialization =====

    /// Setter properties in declaration order
    pub fn find_setters(&self, auto_detect: bool) -> IntrospectResult<PropertyMap<'_, MethodInfo>> {
        collector::collect_setters(&self.class_info, self.introspector, auto_detect)
    }

    /// Field properties written during deserialization
    pub fn find_deserializable_fields(
        &self,
        auto_detect: bool,
        ignored: Option<&IgnoredNames>,
    ) -> IntrospectResult<PropertyMap<'_, FieldInfo>> {
        collector::collect_fields(&self.class_info, self.introspector, auto_detect, ignored, false)
    }

    /// The any-setter method, if any
    pub fn find_any_setter(&self) -> IntrospectResult<Option<&MethodInfo>> {
        classifier::find_any_setter(self.class_info.member_methods(), self.introspector)
    }

    /// All deserialization-side answers under `config`
    ///
    /// Setters have no ignore list of their own; ignored names apply to fields.
    pub fn deserialization_view(
        &self,
        config: &IntrospectionConfig,
    ) -> IntrospectResult<DeserializationView<'_>> {
        let ignored = config.deserialization.ignored();
        Ok(DeserializationView {
            setters: self.find_setters(config.auto_detect.setters)?,
            fields: self.find_deserializable_fields(config.auto_detect.fields, Some(&ignored))?,
            any_setter: self.find_any_setter()?,
            default_constructor: self.find_default_constructor(),
            single_arg_constructors: self.single_arg_constructors(),
            factory_methods: self.factory_methods(),
        })
    }

    // ===== Creators =====

    /// The zero-argument constructor, if declared
    pub fn find_default_constructor(&self) -> Option<&ConstructorInfo> {
        self.class_info.default_constructor()
    }

    /// Create an instance through the default constructor
    pub fn instantiate_bean(&self, force_access: bool) -> IntrospectResult<Option<Instance>> {
        self.creators().instantiate(force_access)
    }

    /// Create an instance as configured by `[deserialization] force_access`
    pub fn instantiate_with(
        &self,
        config: &IntrospectionConfig,
    ) -> IntrospectResult<Option<Instance>> {
        self.instantiate_bean(config.deserialization.force_access)
    }

    /// Constructors taking exactly one argument
    pub fn single_arg_constructors(&self) -> &[ConstructorInfo] {
        self.class_info.single_arg_constructors()
    }

    /// Single-argument constructor taking exactly one of `arg_types`
    pub fn find_single_arg_constructor(&self, arg_types: &[TypeRef]) -> Option<&ConstructorInfo> {
        self.creators().find_single_arg_constructor(arg_types)
    }

    /// Static factory methods for this type
    pub fn factory_methods(&self) -> Vec<&MethodInfo> {
        self.creators().factory_methods()
    }

    /// Factory method accepting a value of one of `arg_types`
    pub fn find_factory_method(&self, arg_types: &[TypeRef]) -> Option<&MethodInfo> {
        self.creators().find_factory_method(arg_types)
    }
}
