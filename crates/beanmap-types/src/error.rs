//! Error types for reflected metadata

use thiserror::Error;

/// Broad class of an invocation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Runtime fault raised by the invoked code itself; propagated unchanged
    Fault,
    /// Any other failure (access, argument, construction problems)
    Checked,
}

/// Failure raised while invoking a constructor or factory
///
/// Failures nest: `cause` points at the failure this one wraps.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("({type_name}) {message}")]
pub struct InvocationFailure {
    /// Whether this is a runtime fault
    pub kind: FailureKind,
    /// Name of the concrete failure type
    pub type_name: String,
    /// Failure message
    pub message: String,
    /// Wrapped failure
    #[source]
    pub cause: Option<Box<InvocationFailure>>,
}

impl InvocationFailure {
    /// A runtime fault
    pub fn fault(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Fault,
            type_name: type_name.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// A non-fault failure
    pub fn checked(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Checked,
            type_name: type_name.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the failure this one wraps
    pub fn caused_by(mut self, cause: InvocationFailure) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Whether this failure is a runtime fault
    pub fn is_fault(&self) -> bool {
        self.kind == FailureKind::Fault
    }

    /// Deepest failure in the cause chain
    pub fn root_cause(&self) -> &InvocationFailure {
        let mut current = self;
        while let Some(next) = current.cause.as_deref() {
            current = next;
        }
        current
    }
}

/// Errors raised by the type registry
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// A type with the same name is already registered
    #[error("Type already registered: {name}")]
    DuplicateType {
        /// Name of the type
        name: String,
    },
}
