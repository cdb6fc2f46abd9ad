use std::cell::RefCell;
use std::rc::Rc;

use crate::collection::Collection;
use crate::engine;
use crate::error::TraverseError;
use crate::invocation::{CapabilitySet, Invocation};
use crate::outcome::Shape;
use crate::value::Value;

/// What a forwarded call produced. The boolean modes also write this through
/// the caller-owned output slot, so one call site can both satisfy its
/// apparent declared type and hand back the real result.
#[derive(Debug, Clone, PartialEq)]
pub enum Forwarded<C> {
    /// `map`/`filter` result: a new collection of the source's kind.
    Collection(C),
    /// `one` result: the first matching item, if any.
    Item(Option<Value>),
    /// In-place filtering mutated the bound source directly.
    Mutated,
}

/// Caller-owned cell the `filter` and `one` modes write their result through.
pub type Slot<C> = Rc<RefCell<Option<Forwarded<C>>>>;

/// A fresh, empty output slot.
pub fn slot<C>() -> Slot<C> {
    Rc::new(RefCell::new(None))
}

enum Bound<'a, C: Collection> {
    Map(&'a C),
    Filter(&'a C, Slot<C>),
    One(&'a C, Slot<C>),
    FilterInPlace(&'a mut C),
}

/// A single-use stand-in for "every item of a bound collection".
///
/// A trampoline implements no operation of its own. The one call forwarded
/// through [`Trampoline::send`] is reified into an [`Invocation`] and
/// replayed against every item of the source captured at construction; the
/// aggregate comes back per the mode chosen by the constructor. The armed →
/// spent transition happens on entry to the first `send`; a second `send` is
/// a contract violation ([`TraverseError::TrampolineReuse`]).
pub struct Trampoline<'a, C: Collection> {
    caps: &'a CapabilitySet,
    bound: Option<Bound<'a, C>>,
}

impl<'a, C: Collection> Trampoline<'a, C> {
    /// Forward one operation to every item and collect the produced values.
    pub fn map(source: &'a C, caps: &'a CapabilitySet) -> Self {
        Trampoline {
            caps,
            bound: Some(Bound::Map(source)),
        }
    }

    /// Forward one truth test to every item and collect the passing items,
    /// writing the result collection through `slot` as well.
    pub fn filter(source: &'a C, caps: &'a CapabilitySet, slot: Slot<C>) -> Self {
        Trampoline {
            caps,
            bound: Some(Bound::Filter(source, slot)),
        }
    }

    /// Forward one truth test until the first passing item, writing the
    /// match through `slot` as well.
    pub fn one(source: &'a C, caps: &'a CapabilitySet, slot: Slot<C>) -> Self {
        Trampoline {
            caps,
            bound: Some(Bound::One(source, slot)),
        }
    }

    /// Forward one truth test to every item and remove the failures from the
    /// bound container itself.
    pub fn filter_in_place(source: &'a mut C, caps: &'a CapabilitySet) -> Self {
        Trampoline {
            caps,
            bound: Some(Bound::FilterInPlace(source)),
        }
    }

    /// Forward one operation — name, bound arguments and declared result
    /// shape — to every item of the bound source.
    ///
    /// The boolean modes (`filter`, `one`, `filter_in_place`) insist on a
    /// `Bool` declaration; `map` accepts any shape.
    pub fn send(
        &mut self,
        name: &str,
        args: Vec<Value>,
        declared: Shape,
    ) -> Result<Forwarded<C>, TraverseError> {
        let bound = self.bound.take().ok_or(TraverseError::TrampolineReuse)?;
        if !matches!(bound, Bound::Map(_)) && declared != Shape::Bool {
            return Err(TraverseError::TypeMismatch {
                expected: Shape::Bool,
                found: declared,
            });
        }
        let invocation = Invocation::new(self.caps, name, args, declared)?;
        match bound {
            Bound::Map(source) => Ok(Forwarded::Collection(engine::map(source, invocation)?)),
            Bound::Filter(source, slot) => {
                let result = Forwarded::Collection(engine::filter(source, invocation)?);
                *slot.borrow_mut() = Some(result.clone());
                Ok(result)
            }
            Bound::One(source, slot) => {
                let result = Forwarded::Item(engine::one(source, invocation)?.cloned());
                *slot.borrow_mut() = Some(result.clone());
                Ok(result)
            }
            Bound::FilterInPlace(target) => {
                engine::filter_in_place(target, invocation)?;
                Ok(Forwarded::Mutated)
            }
        }
    }

    pub fn is_spent(&self) -> bool {
        self.bound.is_none()
    }
}
