//! beanmap reflected type model
//!
//! Types, members, and the registry that plays the role of a reflected type
//! provider for bean introspection.

#![warn(missing_docs)]

pub mod class_info;
pub mod error;
pub mod member;
pub mod registry;
pub mod ty;

pub use class_info::ReflectedType;
pub use error::{FailureKind, InvocationFailure, RegistryError};
pub use member::{
    AccessGrant, ConstructorInfo, DecoratorArg, DecoratorInfo, FieldInfo, Instance, Invoker,
    MethodInfo, Modifiers, ParameterInfo,
};
pub use registry::{
    KeepAll, MemberFilter, ReflectedTypeProvider, TypeDecl, TypeHierarchy, TypeRegistry,
};
pub use ty::{PrimitiveType, QualifiedName, TypeRef};
