use std::any::{type_name, Any};
use std::collections::HashMap;

use crate::error::TraverseError;
use crate::outcome::{Outcome, Shape};
use crate::strategy::Strategy;
use crate::value::Value;

/// The call returns `None` when the receiver's runtime type does not match
/// the registered one.
type CallFn = Box<dyn Fn(&Value, &[Value]) -> Option<Outcome>>;

struct Operation {
    arity: usize,
    receiver_name: &'static str,
    call: CallFn,
}

/// The set of named operations a receiver type exposes to reified
/// invocation: per operation, a name, an arity and the call itself.
///
/// This is the dynamically queried counterpart of what a dynamic runtime
/// would find on the receiver itself.
#[derive(Default)]
pub struct CapabilitySet {
    operations: HashMap<String, Operation>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation of the given arity on receiver type `T`. The
    /// closure sees the already-downcast receiver plus the bound arguments
    /// and decides the outcome shape itself.
    pub fn register<T, F>(&mut self, name: impl Into<String>, arity: usize, f: F)
    where
        T: Any,
        F: Fn(&T, &[Value]) -> Outcome + 'static,
    {
        self.operations.insert(
            name.into(),
            Operation {
                arity,
                receiver_name: type_name::<T>(),
                call: Box::new(move |item, args| item.downcast_ref::<T>().map(|r| f(r, args))),
            },
        );
    }

    /// Shorthand: an argument-less value producer.
    pub fn property<T, U>(&mut self, name: impl Into<String>, f: impl Fn(&T) -> U + 'static)
    where
        T: Any,
        U: Into<Value>,
    {
        self.register::<T, _>(name, 0, move |receiver, _| Outcome::Value(f(receiver).into()));
    }

    /// Shorthand: a boolean producer taking `arity` bound arguments.
    pub fn test<T>(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        f: impl Fn(&T, &[Value]) -> bool + 'static,
    ) where
        T: Any,
    {
        self.register::<T, _>(name, arity, move |receiver, args| {
            Outcome::Bool(f(receiver, args))
        });
    }

    /// Shorthand: a side-effect-only operation.
    pub fn effect<T>(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        f: impl Fn(&T, &[Value]) + 'static,
    ) where
        T: Any,
    {
        self.register::<T, _>(name, arity, move |receiver, args| {
            f(receiver, args);
            Outcome::NoValue
        });
    }

    pub fn supports(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    pub fn arity_of(&self, name: &str) -> Option<usize> {
        self.operations.get(name).map(|op| op.arity)
    }

    fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }
}

/// A reified, deferred invocation: an operation name, its bound argument
/// values and its declared result shape, invocable later against arbitrary
/// receivers.
///
/// Construction checks the name and arity against the capability set, since
/// no receiver needs to be known yet; receiver compatibility is checked at
/// each invocation.
pub struct Invocation<'c> {
    caps: &'c CapabilitySet,
    name: String,
    args: Vec<Value>,
    declared: Shape,
}

impl<'c> Invocation<'c> {
    pub fn new(
        caps: &'c CapabilitySet,
        name: impl Into<String>,
        args: Vec<Value>,
        declared: Shape,
    ) -> Result<Self, TraverseError> {
        let name = name.into();
        match caps.arity_of(&name) {
            None => Err(TraverseError::UnsupportedOperation {
                name,
                reason: "no such operation in the capability set".to_owned(),
            }),
            Some(arity) if arity != args.len() => Err(TraverseError::UnsupportedOperation {
                reason: format!("takes {} arguments, {} bound", arity, args.len()),
                name,
            }),
            Some(_) => Ok(Invocation {
                caps,
                name,
                args,
                declared,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared(&self) -> Shape {
        self.declared
    }

    /// Coerce a raw outcome to the declared shape. A declared `NoValue`
    /// discards whatever was produced; booleans and boxed booleans convert
    /// into each other; everything else is a shape mismatch.
    fn coerce(&self, raw: Outcome) -> Result<Outcome, TraverseError> {
        match (self.declared, raw) {
            (Shape::NoValue, _) => Ok(Outcome::NoValue),
            (Shape::Value, Outcome::Value(v)) => Ok(Outcome::Value(v)),
            (Shape::Value, Outcome::Bool(b)) => Ok(Outcome::Value(Value::new(b))),
            (Shape::Value, Outcome::NoValue) => Err(TraverseError::TypeMismatch {
                expected: Shape::Value,
                found: Shape::NoValue,
            }),
            (Shape::Bool, raw) => match raw.as_bool() {
                Some(b) => Ok(Outcome::Bool(b)),
                None => Err(TraverseError::TypeMismatch {
                    expected: Shape::Bool,
                    found: raw.shape(),
                }),
            },
        }
    }
}

impl Strategy for Invocation<'_> {
    fn invoke(&mut self, item: &Value) -> Result<Outcome, TraverseError> {
        let op = self
            .caps
            .get(&self.name)
            .ok_or_else(|| TraverseError::UnsupportedOperation {
                name: self.name.clone(),
                reason: "no such operation in the capability set".to_owned(),
            })?;
        let raw = (op.call)(item, &self.args).ok_or_else(|| {
            TraverseError::UnsupportedOperation {
                name: self.name.clone(),
                reason: format!("receiver is not a {}", op.receiver_name),
            }
        })?;
        self.coerce(raw)
    }
}
