//! Standalone numeric helper exposed to the host module.

use crate::entries::FunctionDef;
use crate::error::RegistrationError;
use crate::module::ModuleHost;
use crate::value::Value;

/// Square `x` and truncate the result toward zero.
///
/// Awkward inputs follow Rust's float-to-int cast semantics: a NaN square
/// yields `0`, and infinite or out-of-range squares saturate at
/// `i32::MIN`/`i32::MAX`.
pub fn square_truncate(x: f32) -> i32 {
    (x * x) as i32
}

/// Register `squareTruncate` with the host module.
pub fn bind(host: &mut dyn ModuleHost) -> Result<(), RegistrationError> {
    host.register_function(FunctionDef::new("squareTruncate", 1, |args| {
        let x = args[0].as_float()? as f32;
        Ok(Value::Int(i64::from(square_truncate(x))))
    }))
}
