//! Accessor naming conventions
//!
//! `getFoo`/`isFoo` name getters and `setFoo` names setters; the part after
//! the prefix is mangled into the property name.

use std::borrow::Cow;

use beanmap_types::MethodInfo;

/// Namespace of proxy-generated callback types (`getCallbacks()`)
const PROXY_CALLBACK_NAMESPACE: &str = "net.sf.cglib";

/// Namespace of dynamic-language meta types (`getMetaClass()`)
const DYNAMIC_META_NAMESPACE: &str = "groovy.lang";

/// Derive a property name from an accessor suffix
///
/// Lower-cases the leading run of characters that change when lower-cased,
/// stopping at the first one that does not. `"URL"` becomes `"url"`,
/// `"URLs"` becomes `"urls"`, `"X1Y"` becomes `"x1Y"`. Returns `None` for an
/// empty suffix; borrows when nothing changes.
pub fn mangle_property_name(basename: &str) -> Option<Cow<'_, str>> {
    if basename.is_empty() {
        return None;
    }

    let end = basename
        .char_indices()
        .find(|&(_, c)| lower_char(c) == c)
        .map_or(basename.len(), |(idx, _)| idx);

    if end == 0 {
        return Some(Cow::Borrowed(basename));
    }

    let mut mangled: String = basename[..end].chars().map(lower_char).collect();
    mangled.push_str(&basename[end..]);
    Some(Cow::Owned(mangled))
}

/// Single-character lower-case mapping; multi-character expansions keep
/// only their first character
fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Property name for a getter-shaped method, or `None` if the name does not
/// follow the getter convention
pub(crate) fn ok_name_for_getter(method: &MethodInfo) -> Option<String> {
    let name = method.name.as_str();

    if let Some(suffix) = name.strip_prefix("get") {
        if name == "getCallbacks" {
            if is_proxy_get_callbacks(method) {
                return None;
            }
        } else if name == "getMetaClass" && is_dynamic_meta_class(method) {
            return None;
        }
        return mangle_property_name(suffix).map(Cow::into_owned);
    }

    if let Some(suffix) = name.strip_prefix("is") {
        if !method.return_type.is_boolean() {
            return None;
        }
        return mangle_property_name(suffix).map(Cow::into_owned);
    }

    None
}

/// Property name for a setter-shaped method; plain `set` is rejected
pub(crate) fn ok_name_for_setter(method: &MethodInfo) -> Option<String> {
    method
        .name
        .strip_prefix("set")
        .and_then(mangle_property_name)
        .map(Cow::into_owned)
}

/// `getCallbacks()` injected by proxy generation returns an array of
/// callback types
fn is_proxy_get_callbacks(method: &MethodInfo) -> bool {
    method
        .return_type
        .component_type()
        .and_then(|component| component.namespace())
        .is_some_and(|ns| ns.starts_with(PROXY_CALLBACK_NAMESPACE))
}

/// `getMetaClass()` injected by the dynamic runtime is a cyclic reference
fn is_dynamic_meta_class(method: &MethodInfo) -> bool {
    let rt = &method.return_type;
    !rt.is_array()
        && rt
            .namespace()
            .is_some_and(|ns| ns.starts_with(DYNAMIC_META_NAMESPACE))
}
