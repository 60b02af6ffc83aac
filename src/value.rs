//! Type-erased values crossing the binding boundary.
//!
//! Arguments, return values, and module attributes all travel as [`Value`].
//! The set of variants is deliberately tiny: the module surface only
//! traffics in strings, integers, and floats.

use crate::error::ConversionError;

/// A value passed between the host environment and native code.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value (void returns).
    Unit,
    /// Signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Owned string.
    Str(String),
}

impl Value {
    /// Name of the contained variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
        }
    }

    /// Read this value as an integer.
    pub fn as_int(&self) -> Result<i64, ConversionError> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(ConversionError {
                expected: "int",
                found: other.kind(),
            }),
        }
    }

    /// Read this value as an `i32`, rejecting out-of-range integers.
    pub fn as_i32(&self) -> Result<i32, ConversionError> {
        i32::try_from(self.as_int()?).map_err(|_| ConversionError {
            expected: "i32",
            found: "int",
        })
    }

    /// Read this value as a float. Integers coerce losslessly enough for
    /// the host's numeric arguments; everything else is an error.
    pub fn as_float(&self) -> Result<f64, ConversionError> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            other => Err(ConversionError {
                expected: "float",
                found: other.kind(),
            }),
        }
    }

    /// Borrow this value as a string slice.
    pub fn as_str(&self) -> Result<&str, ConversionError> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(ConversionError {
                expected: "string",
                found: other.kind(),
            }),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
