use crate::error::TraverseError;
use crate::outcome::{Outcome, Shape};
use crate::value::Value;

/// A pluggable description of "the operation to apply to each item".
///
/// The engine invokes a strategy once per traversed item, in the source's
/// iteration order, and aggregates the outcomes. A failure aborts the whole
/// traversal; no partial result is returned.
pub trait Strategy {
    fn invoke(&mut self, item: &Value) -> Result<Outcome, TraverseError>;
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn invoke(&mut self, item: &Value) -> Result<Outcome, TraverseError> {
        (**self).invoke(item)
    }
}

/// The simplest dispatch strategy: a single closure with a result shape
/// declared at construction.
///
/// The shape is declared by the constructor chosen (`value`, `test` or
/// `effect`) because the engine cannot otherwise tell "returned nothing
/// meaningful" apart from "produces no value by design".
pub struct Callback {
    inner: Inner,
}

enum Inner {
    Value(Box<dyn FnMut(&Value) -> Value>),
    Test(Box<dyn FnMut(&Value) -> bool>),
    Effect(Box<dyn FnMut(&Value)>),
}

impl Callback {
    /// A value-producing callback, for `map`.
    pub fn value(f: impl FnMut(&Value) -> Value + 'static) -> Self {
        Callback {
            inner: Inner::Value(Box::new(f)),
        }
    }

    /// A boolean-producing callback, for `filter` and `one`.
    pub fn test(f: impl FnMut(&Value) -> bool + 'static) -> Self {
        Callback {
            inner: Inner::Test(Box::new(f)),
        }
    }

    /// A side-effect-only callback; `map` degenerates to a pass over the
    /// source that produces nothing.
    pub fn effect(f: impl FnMut(&Value) + 'static) -> Self {
        Callback {
            inner: Inner::Effect(Box::new(f)),
        }
    }

    pub fn shape(&self) -> Shape {
        match self.inner {
            Inner::Value(_) => Shape::Value,
            Inner::Test(_) => Shape::Bool,
            Inner::Effect(_) => Shape::NoValue,
        }
    }
}

impl Strategy for Callback {
    fn invoke(&mut self, item: &Value) -> Result<Outcome, TraverseError> {
        Ok(match &mut self.inner {
            Inner::Value(f) => Outcome::Value(f(item)),
            Inner::Test(f) => Outcome::Bool(f(item)),
            Inner::Effect(f) => {
                f(item);
                Outcome::NoValue
            }
        })
    }
}
