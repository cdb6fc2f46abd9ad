//! Uniform `map`/`filter`/`one` (plus in-place filtering) over three
//! container kinds — [`Sequence`], [`Set`] and [`OrderedSet`] — where the
//! per-item operation is described by an interchangeable *dispatch strategy*
//! instead of a hand-written loop:
//!
//! - [`Callback`]: an explicit per-item closure with a declared result shape.
//! - [`KeyPath`]: attribute lookup through a [`Resolver`] collaborator,
//!   compared or projected per item.
//! - [`Invocation`]: a reified, deferred operation (name + bound arguments +
//!   declared shape) resolved against a [`CapabilitySet`] and replayable
//!   against arbitrary receivers.
//! - [`Trampoline`]: a single-use stand-in that replays one forwarded
//!   operation against every item of a bound source collection.
//!
//! Every traversal is synchronous and single-threaded: it runs to completion
//! on the calling thread or fails outright with a [`TraverseError`].
//!
//! ```rust
//! use traversal::{Callback, Sequence, Traverse};
//!
//! let numbers = Sequence::from_items([1i64, 2, 3, 4, 5]);
//! let evens = numbers
//!     .filter_with(Callback::test(|v| {
//!         v.downcast_ref::<i64>().map_or(false, |n| n % 2 == 0)
//!     }))
//!     .unwrap();
//! assert_eq!(evens, Sequence::from_items([2i64, 4]));
//! ```

mod collection;
mod engine;
mod error;
mod invocation;
mod keypath;
mod outcome;
mod strategy;
mod trampoline;
mod value;

pub use collection::{Collection, Kind, OrderedSet, Sequence, Set};
pub use engine::{filter, filter_in_place, map, one, Traverse};
pub use error::TraverseError;
pub use invocation::{CapabilitySet, Invocation};
pub use keypath::{KeyPath, Resolver};
pub use outcome::{Outcome, Shape};
pub use strategy::{Callback, Strategy};
pub use trampoline::{slot, Forwarded, Slot, Trampoline};
pub use value::Value;
