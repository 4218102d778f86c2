//! Introspection errors

use std::fmt;

use beanmap_types::InvocationFailure;
use thiserror::Error;

/// Result type for introspection operations
pub type IntrospectResult<T> = Result<T, ConfigurationError>;

/// Which kind of property a collection pass gathers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Zero-argument accessor methods
    Getter,
    /// One-argument mutator methods
    Setter,
    /// Fields read during serialization
    SerializableField,
    /// Fields written during deserialization
    DeserializableField,
}

impl PropertyKind {
    /// Whether this kind collects fields
    pub fn is_field(&self) -> bool {
        matches!(
            self,
            PropertyKind::SerializableField | PropertyKind::DeserializableField
        )
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Getter => write!(f, "getter"),
            PropertyKind::Setter => write!(f, "setter"),
            PropertyKind::SerializableField => write!(f, "serializable field"),
            PropertyKind::DeserializableField => write!(f, "deserializable field"),
        }
    }
}

/// Static contradictions in a type's declared metadata, and instantiation failures
///
/// Member descriptions are full names (`Type#member(N params)`).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    /// Two accessor methods resolve to the same property
    #[error("Conflicting {kind} definitions for property \"{property}\": {existing} vs {conflicting}")]
    ConflictingAccessors {
        /// Getter or setter
        kind: PropertyKind,
        /// Property name
        property: String,
        /// Member already holding the name
        existing: String,
        /// Member that collided
        conflicting: String,
    },

    /// Two fields resolve to the same property
    #[error("Multiple fields representing property \"{property}\": {existing} vs {conflicting}")]
    ConflictingFields {
        /// Property name
        property: String,
        /// Field already holding the name
        existing: String,
        /// Field that collided
        conflicting: String,
    },

    /// More than one as-value method
    #[error("Multiple methods with active 'as-value' annotation ({first}, {second})")]
    MultipleAsValueMethods {
        /// First annotated method
        first: String,
        /// Second annotated method
        second: String,
    },

    /// As-value method that is not getter-shaped
    #[error("Method {method} marked with an 'as-value' annotation, but does not have valid getter signature (non-static, takes no args, returns a value)")]
    InvalidAsValueSignature {
        /// Offending method
        method: String,
    },

    /// More than one any-setter
    #[error("Multiple methods with 'any-setter' annotation ({first}, {second})")]
    MultipleAnySetters {
        /// First annotated method
        first: String,
        /// Second annotated method
        second: String,
    },

    /// Any-setter with a parameter count other than two
    #[error("Invalid 'any-setter' annotation on method {method}: takes {count} parameters, should take 2")]
    AnySetterArity {
        /// Offending method
        method: String,
        /// Actual parameter count
        count: usize,
    },

    /// Any-setter whose key parameter is neither String nor Object
    #[error("Invalid 'any-setter' annotation on method {method}: first argument not of type String or Object, but {found}")]
    AnySetterKeyType {
        /// Offending method
        method: String,
        /// Actual first parameter type
        found: String,
    },

    /// Runtime fault raised by a constructor, passed through unchanged
    #[error(transparent)]
    RuntimeFault(InvocationFailure),

    /// Any other failure while instantiating a bean
    #[error("Failed to instantiate bean of type {type_name}: ({cause_type}) {message}")]
    InstantiationFailed {
        /// Bean type
        type_name: String,
        /// Type of the underlying failure
        cause_type: String,
        /// Message of the underlying failure
        message: String,
    },
}
