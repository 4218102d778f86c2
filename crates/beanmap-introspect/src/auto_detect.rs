//! Auto-detection policy
//!
//! A baseline flag from configuration may be overridden per class by the
//! annotation layer, independently for getters, setters, and fields.

use beanmap_types::ReflectedType;

use crate::annotations::AnnotationIntrospector;
use crate::error::PropertyKind;

/// Class override if present, else the baseline
pub fn resolve(baseline: bool, class_override: Option<bool>) -> bool {
    class_override.unwrap_or(baseline)
}

/// Effective auto-detection flag for `kind` on `class_info`
pub fn effective(
    kind: PropertyKind,
    baseline: bool,
    class_info: &ReflectedType,
    introspector: &dyn AnnotationIntrospector,
) -> bool {
    let class_override = match kind {
        PropertyKind::Getter => introspector.find_getter_auto_detection(class_info),
        PropertyKind::Setter => introspector.find_setter_auto_detection(class_info),
        PropertyKind::SerializableField | PropertyKind::DeserializableField => {
            introspector.find_field_auto_detection(class_info)
        }
    };
    resolve(baseline, class_override)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SettersOff;

    impl AnnotationIntrospector for SettersOff {
        fn find_setter_auto_detection(&self, _: &ReflectedType) -> Option<bool> {
            Some(false)
        }
    }

    #[test]
    fn test_resolve() {
        assert!(resolve(true, None));
        assert!(!resolve(false, None));
        assert!(!resolve(true, Some(false)));
        assert!(resolve(false, Some(true)));
    }

    #[test]
    fn test_effective_per_kind() {
        let ty = ReflectedType::new("A");
        assert!(effective(PropertyKind::Getter, true, &ty, &SettersOff));
        assert!(!effective(PropertyKind::Setter, true, &ty, &SettersOff));
        assert!(effective(PropertyKind::SerializableField, true, &ty, &SettersOff));
        assert!(!effective(PropertyKind::DeserializableField, false, &ty, &SettersOff));
    }
}
