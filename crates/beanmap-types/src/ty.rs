//! Type references used in member signatures

use std::fmt;

/// Primitive (unboxed) value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `char`
    Char,
}

impl PrimitiveType {
    /// Name of the primitive type
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Char => "char",
        }
    }

    /// Name of the boxed (reference) counterpart
    pub fn boxed_name(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
            PrimitiveType::Char => "Character",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Fully qualified name of a declared type, e.g. `com.example.Person`
///
/// Everything before the last `.` is the namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Create a qualified name
    pub fn new(name: impl Into<String>) -> Self {
        QualifiedName(name.into())
    }

    /// The full name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part, if the name is qualified
    pub fn namespace(&self) -> Option<&str> {
        self.0.rfind('.').map(|idx| &self.0[..idx])
    }

    /// Name without namespace
    pub fn simple_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        QualifiedName(s.to_string())
    }
}

impl From<String> for QualifiedName {
    fn from(s: String) -> Self {
        QualifiedName(s)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reference to a type as it appears in a member signature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// No value (method return only)
    Void,

    /// Primitive value type
    Primitive(PrimitiveType),

    /// Boxed counterpart of a primitive
    Boxed(PrimitiveType),

    /// The string type
    String,

    /// The generic object type (top of the reference hierarchy)
    Object,

    /// A declared class or interface
    Named(QualifiedName),

    /// Array of the element type
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Reference to a declared type
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(QualifiedName::new(name))
    }

    /// Array of `element`
    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    /// Whether this is `void`
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    /// Whether this is a primitive value type
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    /// Whether this is an array type
    pub fn is_array(&self) -> bool {
        matches!(self, TypeRef::Array(_))
    }

    /// Primitive or boxed boolean
    pub fn is_boolean(&self) -> bool {
        matches!(
            self,
            TypeRef::Primitive(PrimitiveType::Boolean) | TypeRef::Boxed(PrimitiveType::Boolean)
        )
    }

    /// Element type for arrays
    pub fn component_type(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Namespace of a declared type; built-in types have none
    pub fn namespace(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => name.namespace(),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => write!(f, "void"),
            TypeRef::Primitive(p) => write!(f, "{}", p),
            TypeRef::Boxed(p) => write!(f, "{}", p.boxed_name()),
            TypeRef::String => write!(f, "String"),
            TypeRef::Object => write!(f, "Object"),
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::Array(elem) => write!(f, "{}[]", elem),
        }
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(p: PrimitiveType) -> Self {
        TypeRef::Primitive(p)
    }
}

impl From<QualifiedName> for TypeRef {
    fn from(name: QualifiedName) -> Self {
        TypeRef::Named(name)
    }
}
