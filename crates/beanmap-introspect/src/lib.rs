//! beanmap bean introspection
//!
//! Discovers the logical properties of a reflected type (getters, setters,
//! and fields, in each direction) together with the ways to create it:
//! default constructor, single-argument constructors, and static factories.
//!
//! ```ignore
//! let registry: TypeRegistry = /* declared types */;
//! let introspector = BeanIntrospector::new(&registry, &registry, &DecoratorIntrospector);
//! let desc = introspector.describe("com.example.Person").unwrap();
//! for (name, getter) in desc.find_getters(true, None)?.iter() {
//!     println!("{} <- {}", name, getter.full_name());
//! }
//! ```

#![warn(missing_docs)]

pub mod annotations;
pub mod auto_detect;
pub mod classifier;
pub mod collector;
pub mod config;
pub mod creators;
pub mod decorators;
pub mod describe;
pub mod description;
pub mod error;
pub mod introspector;
pub mod naming;

pub use annotations::{
    AnnotationIntrospector, IgnoralFilter, Inclusion, IntrospectorPair, NameSignal,
    NopAnnotationIntrospector,
};
pub use collector::{IgnoredNames, PropertyMap};
pub use config::{
    AutoDetectConfig, ConfigError, DeserializationConfig, IntrospectionConfig, SerializationConfig,
};
pub use creators::CreatorResolver;
pub use decorators::DecoratorIntrospector;
pub use describe::{describe_member, MemberRef, PropertyMember};
pub use description::{BeanDescription, DeserializationView, SerializationView};
pub use error::{ConfigurationError, IntrospectResult, PropertyKind};
pub use introspector::BeanIntrospector;
pub use naming::mangle_property_name;
