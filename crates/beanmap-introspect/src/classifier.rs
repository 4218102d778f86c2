//! Member classification
//!
//! Decides, one member at a time, which logical property (if any) a method or
//! field stands for, and locates the single as-value and any-setter methods.

use beanmap_types::{FieldInfo, MethodInfo, TypeRef};

use crate::annotations::{AnnotationIntrospector, NameSignal};
use crate::error::{ConfigurationError, IntrospectResult};
use crate::naming::{ok_name_for_getter, ok_name_for_setter};

/// Property name a getter candidate stands for
///
/// Only zero-parameter methods qualify, annotated or not. Unannotated methods
/// additionally need auto-detection and public visibility.
pub fn getter_property_name(
    method: &MethodInfo,
    introspector: &dyn AnnotationIntrospector,
    auto_detect: bool,
) -> Option<String> {
    if method.parameter_count() != 0 {
        return None;
    }
    match introspector.find_gettable_property_name(method) {
        NameSignal::Explicit(name) => Some(name),
        NameSignal::ExplicitNoName => {
            Some(ok_name_for_getter(method).unwrap_or_else(|| method.name.clone()))
        }
        NameSignal::NotAnnotated => {
            if !auto_detect || !method.is_public() {
                return None;
            }
            ok_name_for_getter(method)
        }
    }
}

/// Property name a setter candidate stands for
///
/// Only one-parameter methods qualify. Auto-detected setters need not be public.
pub fn setter_property_name(
    method: &MethodInfo,
    introspector: &dyn AnnotationIntrospector,
    auto_detect: bool,
) -> Option<String> {
    if method.parameter_count() != 1 {
        return None;
    }
    match introspector.find_settable_property_name(method) {
        NameSignal::Explicit(name) => Some(name),
        NameSignal::ExplicitNoName => {
            Some(ok_name_for_setter(method).unwrap_or_else(|| method.name.clone()))
        }
        NameSignal::NotAnnotated => {
            if !auto_detect {
                return None;
            }
            ok_name_for_setter(method)
        }
    }
}

/// Property name a field stands for; field names are used verbatim
pub fn field_property_name(
    field: &FieldInfo,
    introspector: &dyn AnnotationIntrospector,
    auto_detect: bool,
    for_serialization: bool,
) -> Option<String> {
    let signal = if for_serialization {
        introspector.find_serializable_property_name(field)
    } else {
        introspector.find_deserializable_property_name(field)
    };
    match signal {
        NameSignal::Explicit(name) => Some(name),
        NameSignal::ExplicitNoName => Some(field.name.clone()),
        NameSignal::NotAnnotated => {
            if !auto_detect || !field.is_public() {
                return None;
            }
            Some(field.name.clone())
        }
    }
}

/// The single method annotated as-value, if any
pub fn find_as_value_method<'a>(
    methods: &'a [MethodInfo],
    introspector: &dyn AnnotationIntrospector,
) -> IntrospectResult<Option<&'a MethodInfo>> {
    let mut found: Option<&'a MethodInfo> = None;
    for method in methods {
        if !introspector.has_as_value_annotation(method) {
            continue;
        }
        if let Some(first) = found {
            return Err(ConfigurationError::MultipleAsValueMethods {
                first: first.full_name(),
                second: method.full_name(),
            });
        }
        if !method.has_getter_signature() {
            return Err(ConfigurationError::InvalidAsValueSignature {
                method: method.full_name(),
            });
        }
        found = Some(method);
    }
    Ok(found)
}

/// The single method annotated any-setter, if any
///
/// It must take two parameters, the first exactly `String` or `Object`.
pub fn find_any_setter<'a>(
    methods: &'a [MethodInfo],
    introspector: &dyn AnnotationIntrospector,
) -> IntrospectResult<Option<&'a MethodInfo>> {
    let mut found: Option<&'a MethodInfo> = None;
    for method in methods {
        if !introspector.has_any_setter_annotation(method) {
            continue;
        }
        if let Some(first) = found {
            return Err(ConfigurationError::MultipleAnySetters {
                first: first.full_name(),
                second: method.full_name(),
            });
        }
        let count = method.parameter_count();
        if count != 2 {
            return Err(ConfigurationError::AnySetterArity {
                method: method.full_name(),
                count,
            });
        }
        match method.parameter_type(0) {
            Some(TypeRef::String) | Some(TypeRef::Object) => {}
            other => {
                return Err(ConfigurationError::AnySetterKeyType {
                    method: method.full_name(),
                    found: other.map(ToString::to_string).unwrap_or_default(),
                });
            }
        }
        found = Some(method);
    }
    Ok(found)
}
