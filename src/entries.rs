//! Declarative registration entries.
//!
//! These are the definitions the module initialization routine hands to a
//! [`ModuleHost`](crate::module::ModuleHost): global functions, classes
//! (constructors, methods, properties), and enums. Each entry stores
//! type-erased native callables; the typed builder methods wrap the user's
//! closure with the receiver downcast so call sites stay strongly typed.
//!
//! Entries are data. They carry no host state and can be built, inspected,
//! and invoked without any interpreter present, which is how the tests
//! drive them.

use std::any::{Any, type_name};

use rustc_hash::FxHashMap;

use crate::error::CallError;
use crate::value::Value;

type NativeFn = Box<dyn Fn(&[Value]) -> Result<Value, CallError> + Send + Sync>;
type Constructor = Box<dyn Fn(&[Value]) -> Result<Box<dyn Any>, CallError> + Send + Sync>;
type Method = Box<dyn Fn(&mut dyn Any, &[Value]) -> Result<Value, CallError> + Send + Sync>;
type Getter = Box<dyn Fn(&dyn Any) -> Result<Value, CallError> + Send + Sync>;
type Setter = Box<dyn Fn(&mut dyn Any, Value) -> Result<(), CallError> + Send + Sync>;

// ============================================================================
// Global Functions
// ============================================================================

/// A global function registered with the module.
pub struct FunctionDef {
    name: String,
    arity: usize,
    func: NativeFn,
}

impl FunctionDef {
    /// Create a function definition. `arity` is checked before every call.
    pub fn new<F>(name: impl Into<String>, arity: usize, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            func: Box::new(func),
        }
    }

    /// Host-facing name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        if args.len() != self.arity {
            return Err(CallError::ArityMismatch {
                expected: self.arity,
                got: args.len(),
            });
        }
        (self.func)(args)
    }
}

impl std::fmt::Debug for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionDef")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Classes
// ============================================================================

struct MethodDef {
    arity: usize,
    func: Method,
}

struct PropertyDef {
    getter: Getter,
    setter: Option<Setter>,
}

/// A class registered with the module.
///
/// Constructors are overloaded by arity, matching how the host resolves
/// them. Methods and properties operate on a `dyn Any` receiver owned by
/// the host; the builder methods insert the downcast to the concrete type.
pub struct ClassDef {
    name: String,
    constructors: FxHashMap<usize, Constructor>,
    methods: FxHashMap<String, MethodDef>,
    properties: FxHashMap<String, PropertyDef>,
}

impl ClassDef {
    /// Create an empty class definition with the given host-facing name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructors: FxHashMap::default(),
            methods: FxHashMap::default(),
            properties: FxHashMap::default(),
        }
    }

    /// Host-facing name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Builder Methods ===

    /// Add a constructor overload for the given arity.
    ///
    /// The argument slice handed to `ctor` is already checked to have
    /// exactly `arity` elements.
    pub fn with_constructor<T, F>(mut self, arity: usize, ctor: F) -> Self
    where
        T: Any,
        F: Fn(&[Value]) -> Result<T, CallError> + Send + Sync + 'static,
    {
        self.constructors.insert(
            arity,
            Box::new(move |args| Ok(Box::new(ctor(args)?) as Box<dyn Any>)),
        );
        self
    }

    /// Add a method. The wrapper downcasts the receiver to `T` and checks
    /// the argument count before delegating to `method`.
    pub fn with_method<T, F>(mut self, name: impl Into<String>, arity: usize, method: F) -> Self
    where
        T: Any,
        F: Fn(&mut T, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.methods.insert(
            name.into(),
            MethodDef {
                arity,
                func: Box::new(move |this, args| method(receiver::<T>(this)?, args)),
            },
        );
        self
    }

    /// Add a read/write property.
    pub fn with_property<T, G, S>(mut self, name: impl Into<String>, get: G, set: S) -> Self
    where
        T: Any,
        G: Fn(&T) -> Value + Send + Sync + 'static,
        S: Fn(&mut T, Value) -> Result<(), CallError> + Send + Sync + 'static,
    {
        self.properties.insert(
            name.into(),
            PropertyDef {
                getter: Box::new(move |this| Ok(get(receiver_ref::<T>(this)?))),
                setter: Some(Box::new(move |this, value| {
                    set(receiver::<T>(this)?, value)
                })),
            },
        );
        self
    }

    /// Add a read-only property.
    pub fn with_readonly_property<T, G>(mut self, name: impl Into<String>, get: G) -> Self
    where
        T: Any,
        G: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.properties.insert(
            name.into(),
            PropertyDef {
                getter: Box::new(move |this| Ok(get(receiver_ref::<T>(this)?))),
                setter: None,
            },
        );
        self
    }

    // === Invocation ===

    /// Construct an instance, dispatching on argument count.
    pub fn construct(&self, args: &[Value]) -> Result<Box<dyn Any>, CallError> {
        let ctor = self
            .constructors
            .get(&args.len())
            .ok_or(CallError::NoMatchingConstructor { arity: args.len() })?;
        ctor(args)
    }

    /// Call a method on an instance previously built by [`construct`].
    ///
    /// [`construct`]: ClassDef::construct
    pub fn call_method(
        &self,
        name: &str,
        this: &mut dyn Any,
        args: &[Value],
    ) -> Result<Value, CallError> {
        let method = self
            .methods
            .get(name)
            .ok_or_else(|| CallError::UnknownMethod(name.to_owned()))?;
        if args.len() != method.arity {
            return Err(CallError::ArityMismatch {
                expected: method.arity,
                got: args.len(),
            });
        }
        (method.func)(this, args)
    }

    /// Read a property.
    pub fn get_property(&self, name: &str, this: &dyn Any) -> Result<Value, CallError> {
        let prop = self
            .properties
            .get(name)
            .ok_or_else(|| CallError::UnknownProperty(name.to_owned()))?;
        (prop.getter)(this)
    }

    /// Write a property.
    pub fn set_property(
        &self,
        name: &str,
        this: &mut dyn Any,
        value: Value,
    ) -> Result<(), CallError> {
        let prop = self
            .properties
            .get(name)
            .ok_or_else(|| CallError::UnknownProperty(name.to_owned()))?;
        let setter = prop
            .setter
            .as_ref()
            .ok_or_else(|| CallError::ReadOnlyProperty(name.to_owned()))?;
        setter(this, value)
    }
}

impl std::fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassDef")
            .field("name", &self.name)
            .field("constructors", &format!("<{} arities>", self.constructors.len()))
            .field("methods", &format!("<{} methods>", self.methods.len()))
            .field("properties", &format!("<{} properties>", self.properties.len()))
            .finish()
    }
}

fn receiver<T: Any>(this: &mut dyn Any) -> Result<&mut T, CallError> {
    this.downcast_mut::<T>().ok_or(CallError::ReceiverMismatch {
        expected: type_name::<T>(),
    })
}

fn receiver_ref<T: Any>(this: &dyn Any) -> Result<&T, CallError> {
    this.downcast_ref::<T>().ok_or(CallError::ReceiverMismatch {
        expected: type_name::<T>(),
    })
}

// ============================================================================
// Enums
// ============================================================================

/// An enum registered with the module: a name and its `(variant, value)`
/// pairs, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    name: String,
    variants: Vec<(String, i32)>,
}

impl EnumDef {
    /// Create an empty enum definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    /// Add a variant.
    pub fn with_variant(mut self, name: impl Into<String>, value: impl Into<i32>) -> Self {
        self.variants.push((name.into(), value.into()));
        self
    }

    /// Host-facing name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variants in declaration order.
    pub fn variants(&self) -> &[(String, i32)] {
        &self.variants
    }

    /// Look up a variant's numeric value.
    pub fn value_of(&self, variant: &str) -> Option<i32> {
        self.variants
            .iter()
            .find(|(name, _)| name == variant)
            .map(|(_, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        hits: i32,
    }

    fn counter_class() -> ClassDef {
        ClassDef::new("Counter")
            .with_constructor(0, |_| Ok(Counter { hits: 0 }))
            .with_method("bump", 0, |this: &mut Counter, _| {
                this.hits += 1;
                Ok(Value::Int(i64::from(this.hits)))
            })
            .with_property(
                "hits",
                |this: &Counter| Value::from(this.hits),
                |this: &mut Counter, value| {
                    this.hits = value.as_i32()?;
                    Ok(())
                },
            )
    }

    #[test]
    fn construct_dispatches_on_arity() {
        let class = counter_class();
        assert!(class.construct(&[]).is_ok());
        assert_eq!(
            class.construct(&[Value::Int(1)]).unwrap_err(),
            CallError::NoMatchingConstructor { arity: 1 }
        );
    }

    #[test]
    fn methods_see_the_receiver_state() {
        let class = counter_class();
        let mut obj = class.construct(&[]).unwrap();
        assert_eq!(class.call_method("bump", obj.as_mut(), &[]), Ok(Value::Int(1)));
        assert_eq!(class.call_method("bump", obj.as_mut(), &[]), Ok(Value::Int(2)));
    }

    #[test]
    fn wrong_receiver_type_is_reported() {
        let class = counter_class();
        let mut not_a_counter: Box<dyn std::any::Any> = Box::new(17_u8);
        let err = class
            .call_method("bump", not_a_counter.as_mut(), &[])
            .unwrap_err();
        assert!(matches!(err, CallError::ReceiverMismatch { .. }));
    }

    #[test]
    fn property_round_trip() {
        let class = counter_class();
        let mut obj = class.construct(&[]).unwrap();
        class
            .set_property("hits", obj.as_mut(), Value::Int(9))
            .unwrap();
        assert_eq!(class.get_property("hits", obj.as_ref()), Ok(Value::Int(9)));
    }

    #[test]
    fn method_arity_is_enforced() {
        let class = counter_class();
        let mut obj = class.construct(&[]).unwrap();
        let err = class
            .call_method("bump", obj.as_mut(), &[Value::Int(1)])
            .unwrap_err();
        assert_eq!(err, CallError::ArityMismatch { expected: 0, got: 1 });
    }

    #[test]
    fn enum_def_records_variants_in_order() {
        let def = EnumDef::new("Tri")
            .with_variant("A", 0)
            .with_variant("B", 1);
        assert_eq!(def.value_of("B"), Some(1));
        assert_eq!(def.value_of("C"), None);
        assert_eq!(def.variants().len(), 2);
    }
}
