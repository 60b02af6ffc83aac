//! Unified error types for the binding surface.
//!
//! The errors follow the phases a definition moves through: converting
//! script values at the boundary, registering definitions with the host
//! module, and invoking registered entries.
//!
//! ```text
//! ConversionError   - a Value could not become the requested Rust type
//! RegistrationError - a definition collided during module registration
//! CallError         - a registered entry was invoked incorrectly
//! ```
//!
//! `CallError` wraps `ConversionError` via `#[from]`, so native closures can
//! use `?` on the value accessors directly.

use thiserror::Error;

/// A script value could not be converted to the requested Rust type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected {expected}, found {found}")]
pub struct ConversionError {
    /// What the native side asked for.
    pub expected: &'static str,
    /// What the value actually held.
    pub found: &'static str,
}

/// Errors raised while registering definitions with a module host.
///
/// Registration happens once, at module initialization; every variant is a
/// name collision of some kind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// A module attribute with this name is already set.
    #[error("attribute '{0}' is already set")]
    DuplicateAttribute(String),

    /// A class with this name is already registered.
    #[error("class '{0}' is already registered")]
    DuplicateClass(String),

    /// A global function with this name is already registered.
    #[error("function '{0}' is already registered")]
    DuplicateFunction(String),

    /// An enum with this name is already registered.
    #[error("enum '{0}' is already registered")]
    DuplicateEnum(String),
}

/// Errors raised while invoking a registered entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// No constructor overload accepts this many arguments.
    #[error("no constructor taking {arity} argument(s)")]
    NoMatchingConstructor { arity: usize },

    /// The module has no global function with this name.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// The class has no method with this name.
    #[error("unknown method '{0}'")]
    UnknownMethod(String),

    /// The class has no property with this name.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// The property exists but has no setter.
    #[error("property '{0}' is read-only")]
    ReadOnlyProperty(String),

    /// The call supplied the wrong number of arguments.
    #[error("expected {expected} argument(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// The receiver object is not an instance of the expected native type.
    #[error("receiver is not a {expected}")]
    ReceiverMismatch { expected: &'static str },

    /// An argument could not be converted to the native parameter type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_error_display_names_both_sides() {
        let err = ConversionError {
            expected: "string",
            found: "int",
        };
        assert_eq!(err.to_string(), "expected string, found int");
    }

    #[test]
    fn conversion_error_converts_into_call_error() {
        let err = ConversionError {
            expected: "int",
            found: "float",
        };
        let call: CallError = err.clone().into();
        assert_eq!(call, CallError::Conversion(err));
    }
}
