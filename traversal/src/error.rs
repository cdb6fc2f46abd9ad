use crate::outcome::Shape;
use thiserror::Error;

/// Failures that abort a traversal outright.
///
/// Every variant is fatal to the current call: no partial result is returned
/// and nothing is retried. `one` finding no match is *not* an error; it is
/// reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraverseError {
    /// A reified invocation named an operation the receiver's capability set
    /// does not expose, bound the wrong number of arguments, or met a
    /// receiver of the wrong type.
    #[error("operation `{name}` is not supported: {reason}")]
    UnsupportedOperation { name: String, reason: String },

    /// A strategy produced an outcome whose shape disagrees with what the
    /// call site needs.
    #[error("outcome shape mismatch: expected {expected:?}, found {found:?}")]
    TypeMismatch { expected: Shape, found: Shape },

    /// A spent trampoline received a second forwarded call. Trampolines are
    /// single-use; construct a new one per algorithm call.
    #[error("trampoline has already forwarded its one call")]
    TrampolineReuse,
}
