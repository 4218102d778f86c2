//! Annotation introspection
//!
//! The engine never looks at annotations directly; every signal comes from an
//! [`AnnotationIntrospector`]. All queries have neutral defaults, so an
//! implementation only overrides what its annotation system supports.

use beanmap_types::{ConstructorInfo, FieldInfo, MemberFilter, MethodInfo, ReflectedType};
use serde::{Deserialize, Serialize};

/// Explicit-name signal for a single member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSignal {
    /// Annotated with a non-empty explicit name
    Explicit(String),
    /// Annotated, but without a name
    ExplicitNoName,
    /// Not annotated
    NotAnnotated,
}

impl NameSignal {
    /// Signal for an annotation carrying `name`; empty names mean "no name"
    pub fn explicit(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            NameSignal::ExplicitNoName
        } else {
            NameSignal::Explicit(name)
        }
    }

    /// Whether any annotation was present
    pub fn is_annotated(&self) -> bool {
        !matches!(self, NameSignal::NotAnnotated)
    }
}

/// Which property values get written during serialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    /// Write every property
    #[default]
    Always,
    /// Skip properties whose value is null
    NonNull,
}

impl Inclusion {
    /// Parse the lowercase name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "always" => Some(Inclusion::Always),
            "non_null" => Some(Inclusion::NonNull),
            _ => None,
        }
    }
}

/// Source of annotation-derived signals
pub trait AnnotationIntrospector {
    // ===== Class-level auto-detection overrides =====

    /// Class override for getter auto-detection
    fn find_getter_auto_detection(&self, _class_info: &ReflectedType) -> Option<bool> {
        None
    }

    /// Class override for setter auto-detection
    fn find_setter_auto_detection(&self, _class_info: &ReflectedType) -> Option<bool> {
        None
    }

    /// Class override for field auto-detection
    fn find_field_auto_detection(&self, _class_info: &ReflectedType) -> Option<bool> {
        None
    }

    // ===== Explicit names =====

    /// Explicit property name for a getter
    fn find_gettable_property_name(&self, _method: &MethodInfo) -> NameSignal {
        NameSignal::NotAnnotated
    }

    /// Explicit property name for a setter
    fn find_settable_property_name(&self, _method: &MethodInfo) -> NameSignal {
        NameSignal::NotAnnotated
    }

    /// Explicit property name for a field used in serialization
    fn find_serializable_property_name(&self, _field: &FieldInfo) -> NameSignal {
        NameSignal::NotAnnotated
    }

    /// Explicit property name for a field used in deserialization
    fn find_deserializable_property_name(&self, _field: &FieldInfo) -> NameSignal {
        NameSignal::NotAnnotated
    }

    // ===== Marker predicates =====

    /// Whether the method is marked as the any-setter
    fn has_any_setter_annotation(&self, _method: &MethodInfo) -> bool {
        false
    }

    /// Whether the method is marked as the as-value accessor
    fn has_as_value_annotation(&self, _method: &MethodInfo) -> bool {
        false
    }

    /// Whether the method is marked as a creator
    fn has_creator_annotation(&self, _method: &MethodInfo) -> bool {
        false
    }

    // ===== Ignorals =====

    /// Whether the method is excluded from introspection entirely
    fn is_ignorable_method(&self, _method: &MethodInfo) -> bool {
        false
    }

    /// Whether the field is excluded from introspection entirely
    fn is_ignorable_field(&self, _field: &FieldInfo) -> bool {
        false
    }

    /// Whether the constructor is excluded from introspection entirely
    fn is_ignorable_constructor(&self, _ctor: &ConstructorInfo) -> bool {
        false
    }

    // ===== Serialization settings =====

    /// Inclusion policy for the class, falling back to `default`
    fn find_serialization_inclusion(
        &self,
        _class_info: &ReflectedType,
        default: Inclusion,
    ) -> Inclusion {
        default
    }
}

/// Introspector that reports no annotations at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NopAnnotationIntrospector;

impl AnnotationIntrospector for NopAnnotationIntrospector {}

/// Two introspectors combined; `primary` wins, `secondary` fills gaps
pub struct IntrospectorPair<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> IntrospectorPair<P, S>
where
    P: AnnotationIntrospector,
    S: AnnotationIntrospector,
{
    /// Combine two introspectors
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    fn pick_name(primary: NameSignal, secondary: impl FnOnce() -> NameSignal) -> NameSignal {
        match primary {
            NameSignal::Explicit(name) => NameSignal::Explicit(name),
            // Secondary may still supply the name the primary left out
            NameSignal::ExplicitNoName => match secondary() {
                NameSignal::NotAnnotated => NameSignal::ExplicitNoName,
                other => other,
            },
            NameSignal::NotAnnotated => secondary(),
        }
    }
}

impl<P, S> AnnotationIntrospector for IntrospectorPair<P, S>
where
    P: AnnotationIntrospector,
    S: AnnotationIntrospector,
{
    fn find_getter_auto_detection(&self, class_info: &ReflectedType) -> Option<bool> {
        self.primary
            .find_getter_auto_detection(class_info)
            .or_else(|| self.secondary.find_getter_auto_detection(class_info))
    }

    fn find_setter_auto_detection(&self, class_info: &ReflectedType) -> Option<bool> {
        self.primary
            .find_setter_auto_detection(class_info)
            .or_else(|| self.secondary.find_setter_auto_detection(class_info))
    }

    fn find_field_auto_detection(&self, class_info: &ReflectedType) -> Option<bool> {
        self.primary
            .find_field_auto_detection(class_info)
            .or_else(|| self.secondary.find_field_auto_detection(class_info))
    }

    fn find_gettable_property_name(&self, method: &MethodInfo) -> NameSignal {
        Self::pick_name(self.primary.find_gettable_property_name(method), || {
            self.secondary.find_gettable_property_name(method)
        })
    }

    fn find_settable_property_name(&self, method: &MethodInfo) -> NameSignal {
        Self::pick_name(self.primary.find_settable_property_name(method), || {
            self.secondary.find_settable_property_name(method)
        })
    }

    fn find_serializable_property_name(&self, field: &FieldInfo) -> NameSignal {
        Self::pick_name(self.primary.find_serializable_property_name(field), || {
            self.secondary.find_serializable_property_name(field)
        })
    }

    fn find_deserializable_property_name(&self, field: &FieldInfo) -> NameSignal {
        Self::pick_name(self.primary.find_deserializable_property_name(field), || {
            self.secondary.find_deserializable_property_name(field)
        })
    }

    fn has_any_setter_annotation(&self, method: &MethodInfo) -> bool {
        self.primary.has_any_setter_annotation(method)
            || self.secondary.has_any_setter_annotation(method)
    }

    fn has_as_value_annotation(&self, method: &MethodInfo) -> bool {
        self.primary.has_as_value_annotation(method)
            || self.secondary.has_as_value_annotation(method)
    }

    fn has_creator_annotation(&self, method: &MethodInfo) -> bool {
        self.primary.has_creator_annotation(method) || self.secondary.has_creator_annotation(method)
    }

    fn is_ignorable_method(&self, method: &MethodInfo) -> bool {
        self.primary.is_ignorable_method(method) || self.secondary.is_ignorable_method(method)
    }

    fn is_ignorable_field(&self, field: &FieldInfo) -> bool {
        self.primary.is_ignorable_field(field) || self.secondary.is_ignorable_field(field)
    }

    fn is_ignorable_constructor(&self, ctor: &ConstructorInfo) -> bool {
        self.primary.is_ignorable_constructor(ctor) || self.secondary.is_ignorable_constructor(ctor)
    }

    fn find_serialization_inclusion(
        &self,
        class_info: &ReflectedType,
        default: Inclusion,
    ) -> Inclusion {
        let fallback = self.secondary.find_serialization_inclusion(class_info, default);
        self.primary.find_serialization_inclusion(class_info, fallback)
    }
}

/// Adapts an introspector's ignoral queries to a provider [`MemberFilter`]
pub struct IgnoralFilter<'a>(pub &'a dyn AnnotationIntrospector);

impl MemberFilter for IgnoralFilter<'_> {
    fn is_ignorable_method(&self, method: &MethodInfo) -> bool {
        self.0.is_ignorable_method(method)
    }

    fn is_ignorable_field(&self, field: &FieldInfo) -> bool {
        self.0.is_ignorable_field(field)
    }

    fn is_ignorable_constructor(&self, ctor: &ConstructorInfo) -> bool {
        self.0.is_ignorable_constructor(ctor)
    }
}
