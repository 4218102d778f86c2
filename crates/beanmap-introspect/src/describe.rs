//! Human-readable member descriptions for diagnostics

use beanmap_types::{ConstructorInfo, FieldInfo, MethodInfo, ReflectedType};

/// Anything that can be described in a diagnostic
#[derive(Debug, Clone, Copy)]
pub enum MemberRef<'a> {
    /// A whole type
    Type(&'a ReflectedType),
    /// A method
    Method(&'a MethodInfo),
    /// A field
    Field(&'a FieldInfo),
    /// A constructor
    Constructor(&'a ConstructorInfo),
}

impl<'a> From<&'a ReflectedType> for MemberRef<'a> {
    fn from(ty: &'a ReflectedType) -> Self {
        MemberRef::Type(ty)
    }
}

impl<'a> From<&'a MethodInfo> for MemberRef<'a> {
    fn from(method: &'a MethodInfo) -> Self {
        MemberRef::Method(method)
    }
}

impl<'a> From<&'a FieldInfo> for MemberRef<'a> {
    fn from(field: &'a FieldInfo) -> Self {
        MemberRef::Field(field)
    }
}

impl<'a> From<&'a ConstructorInfo> for MemberRef<'a> {
    fn from(ctor: &'a ConstructorInfo) -> Self {
        MemberRef::Constructor(ctor)
    }
}

/// Describe a member, e.g. `method getName (from class com.example.Person)`
pub fn describe_member<'a>(member: impl Into<MemberRef<'a>>) -> String {
    match member.into() {
        MemberRef::Type(ty) => format!("class {}", ty.name),
        MemberRef::Method(m) => format!("method {} (from class {})", m.name, m.declaring_type),
        MemberRef::Field(f) => format!("field {} (from class {})", f.name, f.declaring_type),
        MemberRef::Constructor(c) => format!(
            "constructor({} params) (from class {})",
            c.parameter_count(),
            c.declaring_type
        ),
    }
}

/// Members that a property map can hold
pub trait PropertyMember {
    /// Full descriptor used in conflict reports
    fn full_name(&self) -> String;
}

impl PropertyMember for MethodInfo {
    fn full_name(&self) -> String {
        MethodInfo::full_name(self)
    }
}

impl PropertyMember for FieldInfo {
    fn full_name(&self) -> String {
        FieldInfo::full_name(self)
    }
}
