//! Creator resolution: default constructor, single-argument constructors,
//! and static factory methods

use beanmap_types::{ConstructorInfo, Instance, MethodInfo, ReflectedType, TypeHierarchy, TypeRef};

use crate::annotations::AnnotationIntrospector;
use crate::error::{ConfigurationError, IntrospectResult};

/// Name that marks a static method as a factory without any annotation
const VALUE_OF: &str = "valueOf";

/// Locates the ways a bean type can be created
pub struct CreatorResolver<'a> {
    class_info: &'a ReflectedType,
    introspector: &'a dyn AnnotationIntrospector,
    hierarchy: &'a dyn TypeHierarchy,
}

impl<'a> CreatorResolver<'a> {
    /// Create a resolver over `class_info`
    pub fn new(
        class_info: &'a ReflectedType,
        introspector: &'a dyn AnnotationIntrospector,
        hierarchy: &'a dyn TypeHierarchy,
    ) -> Self {
        Self {
            class_info,
            introspector,
            hierarchy,
        }
    }

    /// The zero-argument constructor, if declared
    pub fn default_constructor(&self) -> Option<&'a ConstructorInfo> {
        self.class_info.default_constructor()
    }

    /// Create an instance through the default constructor
    ///
    /// Returns `Ok(None)` when there is no default constructor. With
    /// `force_access` a non-public constructor is invoked anyway. A runtime
    /// fault at the bottom of the failure chain is returned as
    /// [`ConfigurationError::RuntimeFault`]; any other failure is wrapped.
    pub fn instantiate(&self, force_access: bool) -> IntrospectResult<Option<Instance>> {
        let Some(ctor) = self.default_constructor() else {
            return Ok(None);
        };
        let grant = force_access.then(|| ctor.request_access());

        match ctor.invoke(Vec::new(), grant.as_ref()) {
            Ok(instance) => Ok(Some(instance)),
            Err(failure) => {
                let root = failure.root_cause();
                log::debug!(
                    "instantiating {} failed: {} (root cause: {})",
                    self.class_info.name,
                    failure,
                    root
                );
                if root.is_fault() {
                    return Err(ConfigurationError::RuntimeFault(root.clone()));
                }
                Err(ConfigurationError::InstantiationFailed {
                    type_name: self.class_info.name.to_string(),
                    cause_type: root.type_name.clone(),
                    message: root.message.clone(),
                })
            }
        }
    }

    /// Constructors taking exactly one argument, in declaration order
    pub fn single_arg_constructors(&self) -> &'a [ConstructorInfo] {
        self.class_info.single_arg_constructors()
    }

    /// First single-argument constructor whose parameter type is exactly one
    /// of `arg_types`
    pub fn find_single_arg_constructor(
        &self,
        arg_types: &[TypeRef],
    ) -> Option<&'a ConstructorInfo> {
        self.single_arg_constructors().iter().find(|ctor| {
            ctor.parameter_type(0)
                .is_some_and(|actual| arg_types.iter().any(|expected| expected == actual))
        })
    }

    /// Whether a single-argument static method can act as a factory
    ///
    /// It must return the bean type (or a subtype) and be either annotated
    /// as a creator or named `valueOf`. Visibility is not checked.
    pub fn is_factory_method(&self, method: &MethodInfo) -> bool {
        let bean_type = self.class_info.type_ref();
        if !self.hierarchy.is_assignable(&bean_type, &method.return_type) {
            return false;
        }
        self.introspector.has_creator_annotation(method) || method.name == VALUE_OF
    }

    /// Single-argument static methods that pass [`Self::is_factory_method`]
    pub fn factory_methods(&self) -> Vec<&'a MethodInfo> {
        self.class_info
            .single_arg_static_methods()
            .iter()
            .filter(|m| self.is_factory_method(m))
            .collect()
    }

    /// First factory method whose parameter accepts a value of one of
    /// `arg_types`
    pub fn find_factory_method(&self, arg_types: &[TypeRef]) -> Option<&'a MethodInfo> {
        self.class_info
            .single_arg_static_methods()
            .iter()
            .filter(|m| self.is_factory_method(m))
            .find(|m| {
                m.parameter_type(0).is_some_and(|actual| {
                    arg_types
                        .iter()
                        .any(|expected| self.hierarchy.is_assignable(actual, expected))
                })
            })
    }
}
