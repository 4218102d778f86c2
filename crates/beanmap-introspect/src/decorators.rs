//! Decorator-driven annotation introspector
//!
//! Reads the [`DecoratorInfo`]s a provider attaches to types and members.
//!
//! | Decorator                               | Applies to       | Meaning                               |
//! |-----------------------------------------|------------------|---------------------------------------|
//! | `property(name?)`                       | methods, fields  | explicit property, optional name      |
//! | `getter(name?)`                         | methods          | explicit getter, optional name        |
//! | `setter(name?)`                         | methods          | explicit setter, optional name        |
//! | `any_setter`                            | methods          | catch-all setter                      |
//! | `as_value`                              | methods          | serialize the bean as this value      |
//! | `creator`                               | static methods   | factory usable for deserialization    |
//! | `ignore(false?)`                        | any member       | drop the member from introspection    |
//! | `auto_detect(getters=, setters=, fields=)` | types         | class-level auto-detection overrides  |
//! | `include(always \| non_null)`           | types            | serialization inclusion               |

use beanmap_types::{ConstructorInfo, DecoratorInfo, FieldInfo, MethodInfo, ReflectedType};

use crate::annotations::{AnnotationIntrospector, Inclusion, NameSignal};

/// `property(name?)`
pub const PROPERTY: &str = "property";
/// `getter(name?)`
pub const GETTER: &str = "getter";
/// `setter(name?)`
pub const SETTER: &str = "setter";
/// `any_setter`
pub const ANY_SETTER: &str = "any_setter";
/// `as_value`
pub const AS_VALUE: &str = "as_value";
/// `creator`
pub const CREATOR: &str = "creator";
/// `ignore`
pub const IGNORE: &str = "ignore";
/// `auto_detect(...)`
pub const AUTO_DETECT: &str = "auto_detect";
/// `include(...)`
pub const INCLUDE: &str = "include";

fn find<'d>(decorators: &'d [DecoratorInfo], name: &str) -> Option<&'d DecoratorInfo> {
    decorators.iter().find(|d| d.name == name)
}

fn has(decorators: &[DecoratorInfo], name: &str) -> bool {
    find(decorators, name).is_some()
}

/// First of `names` present wins
fn name_signal(decorators: &[DecoratorInfo], names: &[&str]) -> NameSignal {
    names
        .iter()
        .find_map(|name| find(decorators, name))
        .map(|d| NameSignal::explicit(d.positional().unwrap_or_default()))
        .unwrap_or(NameSignal::NotAnnotated)
}

fn is_ignored(decorators: &[DecoratorInfo]) -> bool {
    find(decorators, IGNORE).is_some_and(|d| d.positional() != Some("false"))
}

fn auto_detect_flag(class_info: &ReflectedType, key: &str) -> Option<bool> {
    let value = find(&class_info.decorators, AUTO_DETECT)?.named(key)?;
    match value.parse::<bool>() {
        Ok(flag) => Some(flag),
        Err(_) => {
            log::warn!(
                "ignoring auto_detect({} = {:?}) on {}: not a boolean",
                key,
                value,
                class_info.name
            );
            None
        }
    }
}

/// Introspector backed by member and type decorators
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratorIntrospector;

impl AnnotationIntrospector for DecoratorIntrospector {
    fn find_getter_auto_detection(&self, class_info: &ReflectedType) -> Option<bool> {
        auto_detect_flag(class_info, "getters")
    }

    fn find_setter_auto_detection(&self, class_info: &ReflectedType) -> Option<bool> {
        auto_detect_flag(class_info, "setters")
    }

    fn find_field_auto_detection(&self, class_info: &ReflectedType) -> Option<bool> {
        auto_detect_flag(class_info, "fields")
    }

    fn find_gettable_property_name(&self, method: &MethodInfo) -> NameSignal {
        name_signal(&method.decorators, &[GETTER, PROPERTY])
    }

    fn find_settable_property_name(&self, method: &MethodInfo) -> NameSignal {
        name_signal(&method.decorators, &[SETTER, PROPERTY])
    }

    fn find_serializable_property_name(&self, field: &FieldInfo) -> NameSignal {
        name_signal(&field.decorators, &[PROPERTY])
    }

    fn find_deserializable_property_name(&self, field: &FieldInfo) -> NameSignal {
        name_signal(&field.decorators, &[PROPERTY])
    }

    fn has_any_setter_annotation(&self, method: &MethodInfo) -> bool {
        has(&method.decorators, ANY_SETTER)
    }

    fn has_as_value_annotation(&self, method: &MethodInfo) -> bool {
        has(&method.decorators, AS_VALUE)
    }

    fn has_creator_annotation(&self, method: &MethodInfo) -> bool {
        has(&method.decorators, CREATOR)
    }

    fn is_ignorable_method(&self, method: &MethodInfo) -> bool {
        is_ignored(&method.decorators)
    }

    fn is_ignorable_field(&self, field: &FieldInfo) -> bool {
        is_ignored(&field.decorators)
    }

    fn is_ignorable_constructor(&self, ctor: &ConstructorInfo) -> bool {
        is_ignored(&ctor.decorators)
    }

    fn find_serialization_inclusion(
        &self,
        class_info: &ReflectedType,
        default: Inclusion,
    ) -> Inclusion {
        find(&class_info.decorators, INCLUDE)
            .and_then(|d| d.positional())
            .and_then(Inclusion::parse)
            .unwrap_or(default)
    }
}
