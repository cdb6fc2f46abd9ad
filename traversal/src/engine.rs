//! The three container-agnostic algorithms plus in-place filtering,
//! parameterized over any dispatch strategy and any container kind.

use crate::collection::Collection;
use crate::error::TraverseError;
use crate::outcome::{Outcome, Shape};
use crate::strategy::Strategy;
use crate::value::Value;

/// Apply the strategy to each item in source order and collect the produced
/// values into a new container of the same kind.
///
/// A `Bool` outcome is appended as a boxed `bool`. A `NoValue` outcome means
/// the call ran for its side effect only and contributes nothing, so the
/// result may end up shorter than the source.
pub fn map<C, S>(source: &C, mut strategy: S) -> Result<C, TraverseError>
where
    C: Collection,
    S: Strategy,
{
    let mut result = C::empty();
    for item in source.iter() {
        match strategy.invoke(item)? {
            Outcome::Value(v) => result.append(v),
            Outcome::Bool(b) => result.append(Value::new(b)),
            Outcome::NoValue => {}
        }
    }
    Ok(result)
}

/// Collect the items passing the strategy's truth test into a new container
/// of the same kind, source order preserved.
pub fn filter<C, S>(source: &C, mut strategy: S) -> Result<C, TraverseError>
where
    C: Collection,
    S: Strategy,
{
    let mut result = C::empty();
    for item in source.iter() {
        if passes(strategy.invoke(item)?)? {
            result.append(item.clone());
        }
    }
    Ok(result)
}

/// The first item (in iteration order) passing the truth test, or `None`
/// when the source is exhausted without a match. Stops iterating on the
/// first match.
pub fn one<'a, C, S>(source: &'a C, mut strategy: S) -> Result<Option<&'a Value>, TraverseError>
where
    C: Collection,
    S: Strategy,
{
    for item in source.iter() {
        if passes(strategy.invoke(item)?)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// Remove every item failing the truth test from the caller's container.
///
/// The rejects are snapshotted in a full read-only pass before any mutation,
/// so storage reshuffling during removal can neither skip nor double-count
/// an item.
pub fn filter_in_place<C, S>(target: &mut C, mut strategy: S) -> Result<(), TraverseError>
where
    C: Collection,
    S: Strategy,
{
    let mut rejected = Vec::new();
    for item in target.iter() {
        if !passes(strategy.invoke(item)?)? {
            rejected.push(item.clone());
        }
    }
    target.remove_all(&rejected);
    Ok(())
}

fn passes(outcome: Outcome) -> Result<bool, TraverseError> {
    match outcome.as_bool() {
        Some(b) => Ok(b),
        None => Err(TraverseError::TypeMismatch {
            expected: Shape::Bool,
            found: outcome.shape(),
        }),
    }
}

/// The four algorithms, surfaced uniformly as methods on every container
/// kind. `filter_in_place_with` needs exclusive access and so is only
/// reachable on containers the caller can mutate.
pub trait Traverse: Collection {
    fn map_with<S: Strategy>(&self, strategy: S) -> Result<Self, TraverseError> {
        map(self, strategy)
    }

    fn filter_with<S: Strategy>(&self, strategy: S) -> Result<Self, TraverseError> {
        filter(self, strategy)
    }

    fn one_with<S: Strategy>(&self, strategy: S) -> Result<Option<&Value>, TraverseError> {
        one(self, strategy)
    }

    fn filter_in_place_with<S: Strategy>(&mut self, strategy: S) -> Result<(), TraverseError> {
        filter_in_place(self, strategy)
    }
}

impl<C: Collection> Traverse for C {}
