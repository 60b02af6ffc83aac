//! Minimal demonstration of exposing a native type to a host scripting
//! runtime.
//!
//! The crate has two functional pieces and one seam:
//!
//! - [`TextComponent`], a small data holder (mutable text, a read-only text
//!   field fixed at construction, a public counter), plus the demo
//!   [`Choice`] enum,
//! - [`square_truncate`], a standalone square-and-truncate helper,
//! - [`ModuleHost`], the registration interface an external binding layer
//!   implements to make both callable from its interpreter.
//!
//! [`register`] is the module initialization routine: it sets the module
//! attribute `name`, then binds the component, the enum, and the function.
//! [`ModuleDef`] is an in-process [`ModuleHost`] that the tests use to
//! drive the registered surface end to end.
//!
//! ```
//! use textcomponent::{MODULE_NAME, ModuleDef, Value};
//!
//! let mut module = ModuleDef::new(MODULE_NAME);
//! textcomponent::register(&mut module).unwrap();
//!
//! let answer = module
//!     .call_function("squareTruncate", &[Value::Float(1.5)])
//!     .unwrap();
//! assert_eq!(answer, Value::Int(2));
//! ```

pub mod component;
pub mod entries;
pub mod error;
pub mod math;
pub mod module;
pub mod value;

pub use component::{Choice, TextComponent};
pub use entries::{ClassDef, EnumDef, FunctionDef};
pub use error::{CallError, ConversionError, RegistrationError};
pub use math::square_truncate;
pub use module::{ModuleDef, ModuleHost};
pub use value::Value;

/// Name the module is registered under.
pub const MODULE_NAME: &str = "example";

/// Module initialization: register everything this crate exposes with the
/// given host.
pub fn register(host: &mut dyn ModuleHost) -> Result<(), RegistrationError> {
    host.set_attr("name", Value::Str("Example".to_owned()))?;
    component::bind(host)?;
    math::bind(host)?;
    Ok(())
}
