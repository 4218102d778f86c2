//! Entry point tying a type provider, a type hierarchy, and an annotation
//! introspector together

use beanmap_types::{Instance, ReflectedTypeProvider, TypeHierarchy};

use crate::annotations::{AnnotationIntrospector, IgnoralFilter};
use crate::config::IntrospectionConfig;
use crate::description::BeanDescription;
use crate::error::IntrospectResult;

/// Produces [`BeanDescription`]s for named types
pub struct BeanIntrospector<'a> {
    provider: &'a dyn ReflectedTypeProvider,
    hierarchy: &'a dyn TypeHierarchy,
    annotations: &'a dyn AnnotationIntrospector,
    config: IntrospectionConfig,
}

impl<'a> BeanIntrospector<'a> {
    /// Create an introspector with default configuration
    pub fn new(
        provider: &'a dyn ReflectedTypeProvider,
        hierarchy: &'a dyn TypeHierarchy,
        annotations: &'a dyn AnnotationIntrospector,
    ) -> Self {
        Self {
            provider,
            hierarchy,
            annotations,
            config: IntrospectionConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: IntrospectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &IntrospectionConfig {
        &self.config
    }

    /// Describe the type named `type_name`
    ///
    /// Members the annotation introspector marks ignorable are filtered out
    /// before classification. Returns `None` for unknown types.
    pub fn describe(&self, type_name: &str) -> Option<BeanDescription<'a>> {
        let filter = IgnoralFilter(self.annotations);
        let Some(class_info) = self.provider.reflect(type_name, &filter) else {
            log::debug!("no reflected type named {}", type_name);
            return None;
        };
        log::debug!(
            "describing {}: {} member methods, {} fields, {} constructors",
            class_info.name,
            class_info.member_methods().len(),
            class_info.fields().len(),
            class_info.constructors().len()
        );
        Some(BeanDescription::new(class_info, self.annotations, self.hierarchy))
    }

    /// Create an instance of `type_name` through its default constructor
    ///
    /// Non-public constructors are only invoked when
    /// `[deserialization] force_access` is set. Unknown types yield `Ok(None)`.
    pub fn instantiate(&self, type_name: &str) -> IntrospectResult<Option<Instance>> {
        match self.describe(type_name) {
            Some(desc) => desc.instantiate_with(&self.config),
            None => Ok(None),
        }
    }
}
