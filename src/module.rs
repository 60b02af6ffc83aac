//! The module registration surface.
//!
//! [`ModuleHost`] is the seam between this crate and the external binding
//! layer: whatever interpreter ends up hosting the module implements it and
//! receives the definitions during initialization. [`ModuleDef`] is a
//! concrete in-process implementation — a plain registry with duplicate
//! detection — used by the integration tests to drive every registered
//! operation without an interpreter.

use rustc_hash::FxHashMap;

use crate::entries::{ClassDef, EnumDef, FunctionDef};
use crate::error::{CallError, RegistrationError};
use crate::value::Value;

/// Registration interface implemented by the external binding layer.
///
/// Registration is single-threaded and happens once, at module
/// initialization. Every method rejects name collisions.
pub trait ModuleHost {
    /// Set a module-level attribute.
    fn set_attr(&mut self, name: &str, value: Value) -> Result<(), RegistrationError>;

    /// Register a class.
    fn register_class(&mut self, class: ClassDef) -> Result<(), RegistrationError>;

    /// Register a global function.
    fn register_function(&mut self, function: FunctionDef) -> Result<(), RegistrationError>;

    /// Register an enum.
    fn register_enum(&mut self, def: EnumDef) -> Result<(), RegistrationError>;
}

/// In-process module registry.
///
/// Stores everything a host would: attributes, classes, functions, and
/// enums, each keyed by name.
#[derive(Debug, Default)]
pub struct ModuleDef {
    name: String,
    attrs: FxHashMap<String, Value>,
    classes: FxHashMap<String, ClassDef>,
    functions: FxHashMap<String, FunctionDef>,
    enums: FxHashMap<String, EnumDef>,
}

impl ModuleDef {
    /// Create an empty module with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The module's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a module attribute.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Look up a registered class.
    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    /// Look up a registered function.
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Look up a registered enum.
    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.enums.get(name)
    }

    /// Call a registered global function by name.
    pub fn call_function(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| CallError::UnknownFunction(name.to_owned()))?;
        function.call(args)
    }
}

impl ModuleHost for ModuleDef {
    fn set_attr(&mut self, name: &str, value: Value) -> Result<(), RegistrationError> {
        if self.attrs.contains_key(name) {
            return Err(RegistrationError::DuplicateAttribute(name.to_owned()));
        }
        self.attrs.insert(name.to_owned(), value);
        Ok(())
    }

    fn register_class(&mut self, class: ClassDef) -> Result<(), RegistrationError> {
        if self.classes.contains_key(class.name()) {
            return Err(RegistrationError::DuplicateClass(class.name().to_owned()));
        }
        self.classes.insert(class.name().to_owned(), class);
        Ok(())
    }

    fn register_function(&mut self, function: FunctionDef) -> Result<(), RegistrationError> {
        if self.functions.contains_key(function.name()) {
            return Err(RegistrationError::DuplicateFunction(
                function.name().to_owned(),
            ));
        }
        self.functions.insert(function.name().to_owned(), function);
        Ok(())
    }

    fn register_enum(&mut self, def: EnumDef) -> Result<(), RegistrationError> {
        if self.enums.contains_key(def.name()) {
            return Err(RegistrationError::DuplicateEnum(def.name().to_owned()));
        }
        self.enums.insert(def.name().to_owned(), def);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registrations_are_rejected() {
        let mut module = ModuleDef::new("m");
        module.set_attr("version", Value::Int(1)).unwrap();
        assert_eq!(
            module.set_attr("version", Value::Int(2)),
            Err(RegistrationError::DuplicateAttribute("version".into()))
        );

        module.register_class(ClassDef::new("C")).unwrap();
        assert_eq!(
            module.register_class(ClassDef::new("C")),
            Err(RegistrationError::DuplicateClass("C".into()))
        );

        module.register_enum(EnumDef::new("E")).unwrap();
        assert_eq!(
            module.register_enum(EnumDef::new("E")),
            Err(RegistrationError::DuplicateEnum("E".into()))
        );

        module
            .register_function(FunctionDef::new("f", 0, |_| Ok(Value::Unit)))
            .unwrap();
        assert_eq!(
            module.register_function(FunctionDef::new("f", 0, |_| Ok(Value::Unit))),
            Err(RegistrationError::DuplicateFunction("f".into()))
        );
    }

    #[test]
    fn unknown_function_calls_fail() {
        let module = ModuleDef::new("m");
        assert_eq!(
            module.call_function("missing", &[]),
            Err(CallError::UnknownFunction("missing".into()))
        );
    }

    #[test]
    fn lookups_return_registered_entries() {
        let mut module = ModuleDef::new("m");
        module.register_class(ClassDef::new("C")).unwrap();
        assert!(module.class("C").is_some());
        assert!(module.class("D").is_none());
        assert_eq!(module.name(), "m");
    }
}
