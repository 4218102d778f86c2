//! Integration tests for property discovery
//!
//! Types are declared in a `TypeRegistry` and introspected end to end
//! through `BeanIntrospector` with decorator-driven annotations.

use beanmap_introspect::decorators::{
    ANY_SETTER, AS_VALUE, AUTO_DETECT, GETTER, IGNORE, INCLUDE, PROPERTY, SETTER,
};
use beanmap_introspect::{
    AnnotationIntrospector, BeanIntrospector, ConfigurationError, DecoratorIntrospector,
    IgnoredNames, Inclusion, IntrospectionConfig, IntrospectorPair, NameSignal,
    NopAnnotationIntrospector, PropertyKind,
};
use beanmap_types::{
    DecoratorInfo, FieldInfo, MethodInfo, PrimitiveType, TypeDecl, TypeRef, TypeRegistry,
};

fn getter(name: &str, decl: &str, returns: TypeRef) -> MethodInfo {
    MethodInfo::new(name, decl).public().returns(returns)
}

fn setter(name: &str, decl: &str, param: TypeRef) -> MethodInfo {
    MethodInfo::new(name, decl).public().with_param("value", param)
}

fn registry_with(decls: Vec<TypeDecl>) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    for decl in decls {
        registry.register(decl).unwrap();
    }
    registry
}

fn getter_names(registry: &TypeRegistry, ty: &str) -> Vec<String> {
    let introspector = BeanIntrospector::new(registry, registry, &DecoratorIntrospector);
    let desc = introspector.describe(ty).unwrap();
    let getters = desc.find_getters(true, None).unwrap();
    getters.names().map(str::to_string).collect()
}

#[test]
fn test_getters_in_declaration_order() {
    let registry = registry_with(vec![TypeDecl::new("app.Account")
        .with_method(getter("getName", "app.Account", TypeRef::String))
        .with_method(getter(
            "isActive",
            "app.Account",
            TypeRef::Primitive(PrimitiveType::Boolean),
        ))]);

    assert_eq!(getter_names(&registry, "app.Account"), vec!["name", "active"]);
}

#[test]
fn test_is_prefix_requires_boolean() {
    let registry = registry_with(vec![TypeDecl::new("app.Account")
        .with_method(getter("isActive", "app.Account", TypeRef::Boxed(PrimitiveType::Int)))
        .with_method(getter(
            "isEnabled",
            "app.Account",
            TypeRef::Boxed(PrimitiveType::Boolean),
        ))]);

    assert_eq!(getter_names(&registry, "app.Account"), vec!["enabled"]);
}

#[test]
fn test_proxy_callbacks_excluded() {
    let registry = registry_with(vec![TypeDecl::new("app.Proxied")
        .with_method(getter(
            "getCallbacks",
            "app.Proxied",
            TypeRef::array(TypeRef::named("net.sf.cglib.proxy.Callback")),
        ))
        .with_method(getter("getId", "app.Proxied", TypeRef::Primitive(PrimitiveType::Long)))]);

    assert_eq!(getter_names(&registry, "app.Proxied"), vec!["id"]);
}

#[test]
fn test_dynamic_meta_class_excluded() {
    let registry = registry_with(vec![TypeDecl::new("app.Scripted").with_method(getter(
        "getMetaClass",
        "app.Scripted",
        TypeRef::named("groovy.lang.MetaClass"),
    ))]);

    assert!(getter_names(&registry, "app.Scripted").is_empty());
}

#[test]
fn test_conflicting_getters_name_both_members() {
    let registry = registry_with(vec![TypeDecl::new("app.Point")
        .with_method(getter("getX", "app.Point", TypeRef::Primitive(PrimitiveType::Int)))
        .with_method(
            getter("getXValue", "app.Point", TypeRef::Primitive(PrimitiveType::Int))
                .decorated(DecoratorInfo::new(GETTER).with_arg("x")),
        )]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.Point").unwrap();
    let err = desc.find_getters(true, None).unwrap_err();

    assert_eq!(
        err,
        ConfigurationError::ConflictingAccessors {
            kind: PropertyKind::Getter,
            property: "x".to_string(),
            existing: "app.Point#getX(0 params)".to_string(),
            conflicting: "app.Point#getXValue(0 params)".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Conflicting getter definitions for property \"x\": app.Point#getX(0 params) vs app.Point#getXValue(0 params)"
    );
}

#[test]
fn test_conflicting_setters() {
    let registry = registry_with(vec![TypeDecl::new("app.Point")
        .with_method(setter("setX", "app.Point", TypeRef::Primitive(PrimitiveType::Int)))
        .with_method(
            setter("assignX", "app.Point", TypeRef::String)
                .decorated(DecoratorInfo::new(SETTER).with_arg("x")),
        )]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.Point").unwrap();
    assert!(matches!(
        desc.find_setters(true),
        Err(ConfigurationError::ConflictingAccessors {
            kind: PropertyKind::Setter,
            ..
        })
    ));
}

#[test]
fn test_annotated_getter_with_params_rejected() {
    let registry = registry_with(vec![TypeDecl::new("app.List").with_method(
        getter("getItem", "app.List", TypeRef::Object)
            .with_param("index", TypeRef::Primitive(PrimitiveType::Int))
            .decorated(DecoratorInfo::new(PROPERTY).with_arg("item")),
    )]);

    assert!(getter_names(&registry, "app.List").is_empty());
}

#[test]
fn test_explicit_no_name_uses_raw_name_when_unmangleable() {
    let registry = registry_with(vec![TypeDecl::new("app.Thing").with_method(
        MethodInfo::new("describe", "app.Thing")
            .returns(TypeRef::String)
            .decorated(DecoratorInfo::new(PROPERTY)),
    )]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.Thing").unwrap();
    let getters = desc.find_getters(false, None).unwrap();
    assert_eq!(
        getters.get("describe").map(|m| m.name.as_str()),
        Some("describe")
    );
}

#[test]
fn test_setter_auto_detection_admits_non_public() {
    let registry = registry_with(vec![TypeDecl::new("app.Bean")
        .with_method(MethodInfo::new("setSecret", "app.Bean").with_param("v", TypeRef::String))
        .with_method(MethodInfo::new("getSecret", "app.Bean").returns(TypeRef::String))]);

    let introspector = BeanIntrospector::new(&registry, &registry, &NopAnnotationIntrospector);
    let desc = introspector.describe("app.Bean").unwrap();

    assert!(desc.find_setters(true).unwrap().contains_key("secret"));
    assert!(desc.find_getters(true, None).unwrap().is_empty());
}

#[test]
fn test_ignored_property_names() {
    let registry = registry_with(vec![TypeDecl::new("app.User")
        .with_method(getter("getLogin", "app.User", TypeRef::String))
        .with_method(getter("getPassword", "app.User", TypeRef::String))
        .with_field(FieldInfo::new("password", "app.User", TypeRef::String).public())]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.User").unwrap();
    let ignored: IgnoredNames = ["password".to_string()].into_iter().collect();

    let getters = desc.find_getters(true, Some(&ignored)).unwrap();
    assert_eq!(getters.names().collect::<Vec<_>>(), vec!["login"]);
    assert!(desc
        .find_serializable_fields(true, Some(&ignored))
        .unwrap()
        .is_empty());
    assert!(desc
        .find_deserializable_fields(true, None)
        .unwrap()
        .contains_key("password"));
}

#[test]
fn test_class_override_beats_baseline() {
    let registry = registry_with(vec![TypeDecl::new("app.Quiet")
        .decorated(DecoratorInfo::new(AUTO_DETECT).with_named_arg("getters", "false"))
        .with_method(getter("getHidden", "app.Quiet", TypeRef::String))
        .with_method(
            getter("getShown", "app.Quiet", TypeRef::String)
                .decorated(DecoratorInfo::new(PROPERTY)),
        )
        .with_field(FieldInfo::new("count", "app.Quiet", TypeRef::Object).public())]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.Quiet").unwrap();

    let getters = desc.find_getters(true, None).unwrap();
    assert_eq!(getters.names().collect::<Vec<_>>(), vec!["shown"]);
    // only getters are overridden
    assert!(desc.find_serializable_fields(true, None).unwrap().contains_key("count"));
}

#[test]
fn test_ignored_members_are_dropped() {
    let registry = registry_with(vec![
        TypeDecl::new("app.Base")
            .with_method(getter("getToken", "app.Base", TypeRef::String))
            .with_method(getter("getId", "app.Base", TypeRef::String)),
        TypeDecl::new("app.Derived")
            .extends("app.Base")
            .with_method(
                getter("getToken", "app.Derived", TypeRef::String)
                    .decorated(DecoratorInfo::new(IGNORE)),
            )
            .with_method(
                getter("getName", "app.Derived", TypeRef::String)
                    .decorated(DecoratorInfo::new(IGNORE).with_arg("false")),
            ),
    ]);

    assert_eq!(getter_names(&registry, "app.Derived"), vec!["name", "id"]);
}

#[test]
fn test_fields_in_hierarchy_order() {
    let registry = registry_with(vec![
        TypeDecl::new("app.Base")
            .with_field(
                FieldInfo::new("id", "app.Base", TypeRef::Primitive(PrimitiveType::Long)).public(),
            ),
        TypeDecl::new("app.Derived")
            .extends("app.Base")
            .with_field(FieldInfo::new("name", "app.Derived", TypeRef::String).public())
            .with_field(
                FieldInfo::new("cache", "app.Derived", TypeRef::Object)
                    .public()
                    .as_transient(),
            )
            .with_field(
                FieldInfo::new("COUNT", "app.Derived", TypeRef::Object)
                    .public()
                    .as_static(),
            ),
    ]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.Derived").unwrap();
    let fields = desc.find_serializable_fields(true, None).unwrap();
    assert_eq!(fields.names().collect::<Vec<_>>(), vec!["id", "name"]);
}

#[test]
fn test_shadowed_field_is_a_conflict() {
    let registry = registry_with(vec![
        TypeDecl::new("app.Base")
            .with_field(FieldInfo::new("value", "app.Base", TypeRef::Object).public()),
        TypeDecl::new("app.Derived")
            .extends("app.Base")
            .with_field(FieldInfo::new("value", "app.Derived", TypeRef::String).public()),
    ]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.Derived").unwrap();
    let err = desc.find_deserializable_fields(true, None).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::ConflictingFields {
            property: "value".to_string(),
            existing: "app.Base#value".to_string(),
            conflicting: "app.Derived#value".to_string(),
        }
    );
}

#[test]
fn test_as_value_and_any_setter_through_description() {
    let registry = registry_with(vec![TypeDecl::new("app.Wrapper")
        .with_method(
            getter("toJson", "app.Wrapper", TypeRef::String)
                .decorated(DecoratorInfo::new(AS_VALUE)),
        )
        .with_method(
            MethodInfo::new("put", "app.Wrapper")
                .with_param("key", TypeRef::String)
                .with_param("value", TypeRef::Object)
                .decorated(DecoratorInfo::new(ANY_SETTER)),
        )]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.Wrapper").unwrap();

    assert_eq!(
        desc.find_as_value_method().unwrap().map(|m| m.name.as_str()),
        Some("toJson")
    );
    assert_eq!(
        desc.find_any_setter().unwrap().map(|m| m.name.as_str()),
        Some("put")
    );
    assert!(desc
        .find_method("put", &[TypeRef::String, TypeRef::Object])
        .is_some());
    assert!(desc.find_method("put", &[TypeRef::String]).is_none());
}

#[test]
fn test_any_setter_with_three_params() {
    let registry = registry_with(vec![TypeDecl::new("app.Wrapper").with_method(
        MethodInfo::new("put", "app.Wrapper")
            .with_param("key", TypeRef::String)
            .with_param("value", TypeRef::Object)
            .with_param("extra", TypeRef::Object)
            .decorated(DecoratorInfo::new(ANY_SETTER)),
    )]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.Wrapper").unwrap();
    assert_eq!(
        desc.find_any_setter().unwrap_err().to_string(),
        "Invalid 'any-setter' annotation on method app.Wrapper#put(3 params): takes 3 parameters, should take 2"
    );
}

#[test]
fn test_serialization_view_from_config() {
    let registry = registry_with(vec![TypeDecl::new("app.Profile")
        .decorated(DecoratorInfo::new(INCLUDE).with_arg("non_null"))
        .with_method(getter("getEmail", "app.Profile", TypeRef::String))
        .with_method(getter("getPassword", "app.Profile", TypeRef::String))
        .with_field(FieldInfo::new("nickname", "app.Profile", TypeRef::String).public())]);

    let config = IntrospectionConfig::from_str(
        r#"
[auto_detect]
fields = false

[serialization]
ignored_properties = ["password"]
"#,
    )
    .unwrap();

    let introspector =
        BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector).with_config(config);
    let desc = introspector.describe("app.Profile").unwrap();
    let view = desc.serialization_view(introspector.config()).unwrap();

    assert_eq!(view.getters.names().collect::<Vec<_>>(), vec!["email"]);
    assert!(view.fields.is_empty());
    assert!(view.as_value.is_none());
    assert_eq!(view.inclusion, Inclusion::NonNull);
}

#[test]
fn test_deserialization_view_defaults() {
    let registry = registry_with(vec![TypeDecl::new("app.Profile")
        .with_method(setter("setEmail", "app.Profile", TypeRef::String))
        .with_field(FieldInfo::new("nickname", "app.Profile", TypeRef::String).public())
        .with_constructor(beanmap_types::ConstructorInfo::new("app.Profile").public())]);

    let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
    let desc = introspector.describe("app.Profile").unwrap();
    let view = desc.deserialization_view(introspector.config()).unwrap();

    assert_eq!(view.setters.names().collect::<Vec<_>>(), vec!["email"]);
    assert_eq!(view.fields.names().collect::<Vec<_>>(), vec!["nickname"]);
    assert!(view.any_setter.is_none());
    assert!(view.default_constructor.is_some());
    assert!(view.single_arg_constructors.is_empty());
    assert!(view.factory_methods.is_empty());
}

struct RenameEmail;

impl AnnotationIntrospector for RenameEmail {
    fn find_gettable_property_name(&self, method: &MethodInfo) -> NameSignal {
        if method.name == "getEmail" {
            NameSignal::explicit("mail")
        } else {
            NameSignal::NotAnnotated
        }
    }
}

#[test]
fn test_introspector_pair_primary_wins() {
    let registry = registry_with(vec![TypeDecl::new("app.Contact")
        .with_method(
            getter("getEmail", "app.Contact", TypeRef::String)
                .decorated(DecoratorInfo::new(PROPERTY).with_arg("address")),
        )
        .with_method(
            getter("getPhone", "app.Contact", TypeRef::String)
                .decorated(DecoratorInfo::new(PROPERTY).with_arg("tel")),
        )]);

    let pair = IntrospectorPair::new(RenameEmail, DecoratorIntrospector);
    let introspector = BeanIntrospector::new(&registry, &registry, &pair);
    let desc = introspector.describe("app.Contact").unwrap();
    let getters = desc.find_getters(true, None).unwrap();
    assert_eq!(getters.names().collect::<Vec<_>>(), vec!["mail", "tel"]);
}

#[test]
fn test_unknown_type() {
    let registry = TypeRegistry::new();
    let introspector = BeanIntrospector::new(&registry, &registry, &NopAnnotationIntrospector);
    assert!(introspector.describe("app.Missing").is_none());
}
