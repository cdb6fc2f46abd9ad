use crate::error::TraverseError;
use crate::outcome::Outcome;
use crate::strategy::Strategy;
use crate::value::Value;

/// External attribute-resolution collaborator: looks `path` up on an item.
/// `None` means the path is absent on that item.
///
/// Blanket-implemented for closures, which is how callers usually supply it.
pub trait Resolver {
    fn resolve(&self, item: &Value, path: &str) -> Option<Value>;
}

impl<F> Resolver for F
where
    F: Fn(&Value, &str) -> Option<Value>,
{
    fn resolve(&self, item: &Value, path: &str) -> Option<Value> {
        self(item, path)
    }
}

/// Key-path dispatch strategy: resolves a path on each item through the
/// resolver collaborator.
///
/// `matching` compares the resolved value against a bound expectation by
/// exact equality (no substring or partial matching); an absent path is a
/// non-match, never a failure. `projecting` produces the resolved value
/// itself; an item lacking the path contributes nothing to a `map` result.
pub struct KeyPath<R> {
    path: String,
    mode: PathMode,
    resolver: R,
}

enum PathMode {
    Matching(Value),
    Projecting,
}

impl<R: Resolver> KeyPath<R> {
    pub fn matching(path: impl Into<String>, expected: impl Into<Value>, resolver: R) -> Self {
        KeyPath {
            path: path.into(),
            mode: PathMode::Matching(expected.into()),
            resolver,
        }
    }

    pub fn projecting(path: impl Into<String>, resolver: R) -> Self {
        KeyPath {
            path: path.into(),
            mode: PathMode::Projecting,
            resolver,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<R: Resolver> Strategy for KeyPath<R> {
    fn invoke(&mut self, item: &Value) -> Result<Outcome, TraverseError> {
        let resolved = self.resolver.resolve(item, &self.path);
        Ok(match &self.mode {
            PathMode::Matching(expected) => Outcome::Bool(resolved.as_ref() == Some(expected)),
            PathMode::Projecting => match resolved {
                Some(value) => Outcome::Value(value),
                None => Outcome::NoValue,
            },
        })
    }
}
