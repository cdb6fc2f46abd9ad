use crate::value::Value;

/// Declared result shape of a dispatch strategy or reified invocation.
///
/// A strategy declares its shape up front because the engine cannot otherwise
/// distinguish "produced nothing" from "produces no value by design".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    NoValue,
    Value,
    Bool,
}

/// What a dispatch strategy produced for a single traversed item.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The operation ran for its side effect only.
    NoValue,
    /// A produced value of arbitrary type.
    Value(Value),
    /// A truth-test verdict.
    Bool(bool),
}

impl Outcome {
    pub fn shape(&self) -> Shape {
        match self {
            Outcome::NoValue => Shape::NoValue,
            Outcome::Value(_) => Shape::Value,
            Outcome::Bool(_) => Shape::Bool,
        }
    }

    /// Boolean interpretation: either a `Bool` verdict or a value boxing a
    /// `bool`. Anything else is not representable as a truth test.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Outcome::Bool(b) => Some(*b),
            Outcome::Value(v) => v.as_bool(),
            Outcome::NoValue => None,
        }
    }
}
