//! Property collection
//!
//! One pass per property kind: classify each member in declaration order,
//! drop rejected and ignored names, and build an ordered [`PropertyMap`].

use beanmap_types::{FieldInfo, MethodInfo, ReflectedType};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::annotations::AnnotationIntrospector;
use crate::auto_detect;
use crate::classifier;
use crate::describe::PropertyMember;
use crate::error::{ConfigurationError, IntrospectResult, PropertyKind};

/// Property names excluded from a collection pass
pub type IgnoredNames = FxHashSet<String>;

/// Ordered mapping from logical property name to the member that provides it
///
/// Iteration follows insertion order. A name is never overwritten.
#[derive(Debug)]
pub struct PropertyMap<'a, M> {
    entries: IndexMap<String, &'a M>,
}

impl<'a, M> PropertyMap<'a, M> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no properties were found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Member providing `name`
    pub fn get(&self, name: &str) -> Option<&'a M> {
        self.entries.get(name).copied()
    }

    /// Whether `name` is present
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Property names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, member)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a M)> + '_ {
        self.entries.iter().map(|(name, member)| (name.as_str(), *member))
    }

    /// Insert a new property
    ///
    /// On a duplicate name the map is left unchanged and the member already
    /// holding the name is returned.
    pub fn insert(&mut self, name: String, member: &'a M) -> Result<(), &'a M> {
        match self.entries.get(&name) {
            Some(existing) => Err(*existing),
            None => {
                self.entries.insert(name, member);
                Ok(())
            }
        }
    }
}

impl<M> Default for PropertyMap<'_, M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Generic collection pass
///
/// `classify` receives each member and the effective auto-detect flag and
/// returns the property name it stands for, if any.
pub fn collect<'a, M, F>(
    members: &'a [M],
    kind: PropertyKind,
    auto_detect: bool,
    ignored: Option<&IgnoredNames>,
    mut classify: F,
) -> IntrospectResult<PropertyMap<'a, M>>
where
    M: PropertyMember,
    F: FnMut(&M, bool) -> Option<String>,
{
    log::debug!(
        "collecting {} properties over {} members (auto-detect: {})",
        kind,
        members.len(),
        auto_detect
    );

    let mut map = PropertyMap::new();
    for member in members {
        let Some(name) = classify(member, auto_detect) else {
            log::trace!("{} is not a {}", member.full_name(), kind);
            continue;
        };
        if ignored.is_some_and(|set| set.contains(&name)) {
            log::trace!("skipping ignored property \"{}\" ({})", name, member.full_name());
            continue;
        }
        if let Err(existing) = map.insert(name.clone(), member) {
            let existing = existing.full_name();
            let conflicting = member.full_name();
            return Err(if kind.is_field() {
                ConfigurationError::ConflictingFields {
                    property: name,
                    existing,
                    conflicting,
                }
            } else {
                ConfigurationError::ConflictingAccessors {
                    kind,
                    property: name,
                    existing,
                    conflicting,
                }
            });
        }
        log::debug!("{} property \"{}\" <- {}", kind, name, member.full_name());
    }
    Ok(map)
}

/// Collect getter properties of `class_info`
pub fn collect_getters<'a>(
    class_info: &'a ReflectedType,
    introspector: &dyn AnnotationIntrospector,
    auto_detect: bool,
    ignored: Option<&IgnoredNames>,
) -> IntrospectResult<PropertyMap<'a, MethodInfo>> {
    let kind = PropertyKind::Getter;
    let auto_detect = auto_detect::effective(kind, auto_detect, class_info, introspector);
    collect(
        class_info.member_methods(),
        kind,
        auto_detect,
        ignored,
        |method, auto| classifier::getter_property_name(method, introspector, auto),
    )
}

/// Collect setter properties of `class_info`
pub fn collect_setters<'a>(
    class_info: &'a ReflectedType,
    introspector: &dyn AnnotationIntrospector,
    auto_detect: bool,
) -> IntrospectResult<PropertyMap<'a, MethodInfo>> {
    let kind = PropertyKind::Setter;
    let auto_detect = auto_detect::effective(kind, auto_detect, class_info, introspector);
    collect(
        class_info.member_methods(),
        kind,
        auto_detect,
        None,
        |method, auto| classifier::setter_property_name(method, introspector, auto),
    )
}

/// Collect field properties of `class_info` for one direction
pub fn collect_fields<'a>(
    class_info: &'a ReflectedType,
    introspector: &dyn AnnotationIntrospector,
    auto_detect: bool,
    ignored: Option<&IgnoredNames>,
    for_serialization: bool,
) -> IntrospectResult<PropertyMap<'a, FieldInfo>> {
    let kind = if for_serialization {
        PropertyKind::SerializableField
    } else {
        PropertyKind::DeserializableField
    };
    let auto_detect = auto_detect::effective(kind, auto_detect, class_info, introspector);
    collect(class_info.fields(), kind, auto_detect, ignored, |field, auto| {
        classifier::field_property_name(field, introspector, auto, for_serialization)
    })
}
