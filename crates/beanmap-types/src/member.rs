//! Reflected members: methods, fields, and constructors
//!
//! Members are plain descriptions of what a type declares. Constructors may
//! additionally carry an [`Invoker`] so callers can create instances; a
//! non-public constructor is only invocable with an [`AccessGrant`].

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::InvocationFailure;
use crate::ty::{QualifiedName, TypeRef};

/// A value produced by invoking a constructor
pub type Instance = Box<dyn Any + Send>;

/// Modifier flags for members
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Public visibility
    pub is_public: bool,
    /// Static member
    pub is_static: bool,
    /// Transient field (never part of the persistent state)
    pub is_transient: bool,
}

/// Argument of a decorator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorArg {
    /// Key for named arguments (`getters = false`)
    pub key: Option<String>,
    /// Argument value
    pub value: String,
}

/// A decorator (annotation) attached to a type or member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorInfo {
    /// Decorator name
    pub name: String,
    /// Decorator arguments in declaration order
    pub args: Vec<DecoratorArg>,
}

impl DecoratorInfo {
    /// Create a decorator without arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a positional argument
    pub fn with_arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(DecoratorArg {
            key: None,
            value: value.into(),
        });
        self
    }

    /// Add a named argument
    pub fn with_named_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(DecoratorArg {
            key: Some(key.into()),
            value: value.into(),
        });
        self
    }

    /// First positional argument
    pub fn positional(&self) -> Option<&str> {
        self.args
            .iter()
            .find(|a| a.key.is_none())
            .map(|a| a.value.as_str())
    }

    /// Value of a named argument
    pub fn named(&self, key: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|a| a.key.as_deref() == Some(key))
            .map(|a| a.value.as_str())
    }
}

/// Parameter information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    /// Parameter name
    pub name: String,
    /// Parameter type
    pub type_ref: TypeRef,
    /// Parameter index
    pub index: usize,
}

/// Method information
#[derive(Debug, Clone, PartialEq)]
pub struct MethodInfo {
    /// Method name
    pub name: String,
    /// Type declaring the method
    pub declaring_type: QualifiedName,
    /// Return type
    pub return_type: TypeRef,
    /// Parameters in order
    pub parameters: Vec<ParameterInfo>,
    /// Modifier flags
    pub modifiers: Modifiers,
    /// Attached decorators
    pub decorators: Vec<DecoratorInfo>,
}

impl MethodInfo {
    /// Create a non-public instance method returning `void` with no parameters
    pub fn new(name: impl Into<String>, declaring_type: impl Into<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.into(),
            return_type: TypeRef::Void,
            parameters: Vec::new(),
            modifiers: Modifiers::default(),
            decorators: Vec::new(),
        }
    }

    /// Mark as public
    pub fn public(mut self) -> Self {
        self.modifiers.is_public = true;
        self
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.modifiers.is_static = true;
        self
    }

    /// Set return type
    pub fn returns(mut self, type_ref: TypeRef) -> Self {
        self.return_type = type_ref;
        self
    }

    /// Append a parameter
    pub fn with_param(mut self, name: impl Into<String>, type_ref: TypeRef) -> Self {
        let index = self.parameters.len();
        self.parameters.push(ParameterInfo {
            name: name.into(),
            type_ref,
            index,
        });
        self
    }

    /// Attach a decorator
    pub fn decorated(mut self, decorator: DecoratorInfo) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Number of parameters
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Type of the parameter at `index`
    pub fn parameter_type(&self, index: usize) -> Option<&TypeRef> {
        self.parameters.get(index).map(|p| &p.type_ref)
    }

    /// Whether the method is public
    pub fn is_public(&self) -> bool {
        self.modifiers.is_public
    }

    /// Whether the method is static
    pub fn is_static(&self) -> bool {
        self.modifiers.is_static
    }

    /// Non-static, takes no arguments, returns a value
    pub fn has_getter_signature(&self) -> bool {
        !self.is_static() && self.parameters.is_empty() && !self.return_type.is_void()
    }

    /// Whether name and parameter types match exactly
    pub fn matches_signature(&self, name: &str, param_types: &[TypeRef]) -> bool {
        self.name == name
            && self.parameters.len() == param_types.len()
            && self
                .parameters
                .iter()
                .zip(param_types)
                .all(|(p, t)| &p.type_ref == t)
    }

    /// `Declaring#name(N params)`
    pub fn full_name(&self) -> String {
        format!(
            "{}#{}({} params)",
            self.declaring_type,
            self.name,
            self.parameters.len()
        )
    }
}

/// Field information
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    /// Field name
    pub name: String,
    /// Type declaring the field
    pub declaring_type: QualifiedName,
    /// Field type
    pub type_ref: TypeRef,
    /// Modifier flags
    pub modifiers: Modifiers,
    /// Attached decorators
    pub decorators: Vec<DecoratorInfo>,
}

impl FieldInfo {
    /// Create a non-public instance field
    pub fn new(
        name: impl Into<String>,
        declaring_type: impl Into<QualifiedName>,
        type_ref: TypeRef,
    ) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.into(),
            type_ref,
            modifiers: Modifiers::default(),
            decorators: Vec::new(),
        }
    }

    /// Mark as public
    pub fn public(mut self) -> Self {
        self.modifiers.is_public = true;
        self
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.modifiers.is_static = true;
        self
    }

    /// Mark as transient
    pub fn as_transient(mut self) -> Self {
        self.modifiers.is_transient = true;
        self
    }

    /// Attach a decorator
    pub fn decorated(mut self, decorator: DecoratorInfo) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Whether the field is public
    pub fn is_public(&self) -> bool {
        self.modifiers.is_public
    }

    /// `Declaring#name`
    pub fn full_name(&self) -> String {
        format!("{}#{}", self.declaring_type, self.name)
    }
}

type InvokeFn = dyn Fn(Vec<Instance>) -> Result<Instance, InvocationFailure> + Send + Sync;

/// Callable backing a constructor
#[derive(Clone)]
pub struct Invoker(Arc<InvokeFn>);

impl Invoker {
    /// Wrap a closure
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Vec<Instance>) -> Result<Instance, InvocationFailure> + Send + Sync + 'static,
    {
        Invoker(Arc::new(f))
    }

    fn call(&self, args: Vec<Instance>) -> Result<Instance, InvocationFailure> {
        (self.0)(args)
    }
}

impl fmt::Debug for Invoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invoker(..)")
    }
}

/// Permission to invoke one specific constructor regardless of visibility
///
/// Only obtainable through [`ConstructorInfo::request_access`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant {
    target: QualifiedName,
    arity: usize,
}

impl AccessGrant {
    /// Type whose constructor this grant unlocks
    pub fn target(&self) -> &QualifiedName {
        &self.target
    }

    fn covers(&self, ctor: &ConstructorInfo) -> bool {
        self.target == ctor.declaring_type && self.arity == ctor.parameters.len()
    }
}

/// Constructor information
#[derive(Debug, Clone)]
pub struct ConstructorInfo {
    /// Type declaring the constructor
    pub declaring_type: QualifiedName,
    /// Parameters in order
    pub parameters: Vec<ParameterInfo>,
    /// Modifier flags
    pub modifiers: Modifiers,
    /// Attached decorators
    pub decorators: Vec<DecoratorInfo>,
    invoker: Option<Invoker>,
}

impl ConstructorInfo {
    /// Create a non-public constructor with no parameters and no invoker
    pub fn new(declaring_type: impl Into<QualifiedName>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            parameters: Vec::new(),
            modifiers: Modifiers::default(),
            decorators: Vec::new(),
            invoker: None,
        }
    }

    /// Mark as public
    pub fn public(mut self) -> Self {
        self.modifiers.is_public = true;
        self
    }

    /// Append a parameter
    pub fn with_param(mut self, name: impl Into<String>, type_ref: TypeRef) -> Self {
        let index = self.parameters.len();
        self.parameters.push(ParameterInfo {
            name: name.into(),
            type_ref,
            index,
        });
        self
    }

    /// Attach a decorator
    pub fn decorated(mut self, decorator: DecoratorInfo) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Attach the callable that creates instances
    pub fn with_invoker<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<Instance>) -> Result<Instance, InvocationFailure> + Send + Sync + 'static,
    {
        self.invoker = Some(Invoker::new(f));
        self
    }

    /// Number of parameters
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Type of the parameter at `index`
    pub fn parameter_type(&self, index: usize) -> Option<&TypeRef> {
        self.parameters.get(index).map(|p| &p.type_ref)
    }

    /// Whether the constructor is public
    pub fn is_public(&self) -> bool {
        self.modifiers.is_public
    }

    /// `Declaring#<init>(N params)`
    pub fn full_name(&self) -> String {
        format!(
            "{}#<init>({} params)",
            self.declaring_type,
            self.parameters.len()
        )
    }

    /// Obtain a grant that allows invoking this constructor even if it is not public
    pub fn request_access(&self) -> AccessGrant {
        AccessGrant {
            target: self.declaring_type.clone(),
            arity: self.parameters.len(),
        }
    }

    /// Invoke the constructor
    pub fn invoke(
        &self,
        args: Vec<Instance>,
        grant: Option<&AccessGrant>,
    ) -> Result<Instance, InvocationFailure> {
        if !self.is_public() && !grant.is_some_and(|g| g.covers(self)) {
            return Err(InvocationFailure::checked(
                "IllegalAccess",
                format!("constructor of {} is not public", self.declaring_type),
            ));
        }
        if args.len() != self.parameters.len() {
            return Err(InvocationFailure::checked(
                "IllegalArgument",
                format!(
                    "wrong number of arguments: expected {}, got {}",
                    self.parameters.len(),
                    args.len()
                ),
            ));
        }
        let Some(invoker) = &self.invoker else {
            return Err(InvocationFailure::checked(
                "Instantiation",
                format!("no invoker attached to constructor of {}", self.declaring_type),
            ));
        };
        invoker.call(args)
    }
}
