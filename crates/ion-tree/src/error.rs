use thiserror::Error;

use crate::IonType;

/// Errors surfaced by [`crate::materialize`] and [`crate::ElementReader`].
///
/// `E` is the cursor's own error type; anything the cursor reports is passed
/// through untouched in [`ReaderError::Cursor`].
#[derive(Error, Debug, PartialEq)]
pub enum ReaderError<E> {
    /// `next_element` was called with no values left.
    #[error("no more values")]
    EndOfIteration,
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
    /// The cursor failed to decode or navigate the input.
    #[error("cursor error: {0}")]
    Cursor(#[source] E),
    /// The cursor reported a state the materializer cannot act on, such as a
    /// non-null value of kind `null`. This is a bug in the cursor, not in the
    /// input.
    #[error("cursor contract violation: {0}")]
    ContractViolation(&'static str),
    #[error("container nesting exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },
    /// An earlier failure left the cursor inside a container, so it can no
    /// longer reach the reader's next value. The reader does not advance again.
    #[error("cursor is stranded at depth {depth}, expected depth {expected}")]
    Stranded { depth: usize, expected: usize },
}

/// Errors raised by [`crate::ElementCursor`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor is not positioned on a value")]
    NotPositioned,
    #[error("expected a {expected} value, found {found}")]
    TypeMismatch { expected: IonType, found: IonType },
    #[error("cannot read the payload of null.{0}")]
    NullValue(IonType),
    #[error("cannot step into a {0} value")]
    NotAContainer(IonType),
    #[error("current value is not inside a struct")]
    NotInStruct,
    #[error("cannot step out of the top level")]
    AtTopLevel,
}
