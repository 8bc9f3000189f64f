//! Errors returned by [`CircularBuffer`](crate::CircularBuffer) operations.
//!
//! Every fallible operation checks its preconditions before touching the buffer, so an `Err`
//! always leaves the buffer exactly as it was before the call.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The broad category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A requested capacity or target size is structurally impossible.
    InvalidArgument,
    /// An index, position or range falls outside the valid logical bounds, or the operation
    /// requires an element (or a slot) that the buffer does not have.
    OutOfRange,
}

/// An error returned by a [`CircularBuffer`](crate::CircularBuffer) operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity cannot be allocated for the element type.
    #[error("capacity {requested} exceeds the maximum allocation size")]
    CapacityOverflow {
        /// Requested number of slots.
        requested: usize,
    },
    /// The requested capacity is too small to hold the elements currently in the buffer.
    #[error("capacity {capacity} is less than the current length {len}")]
    CapacityBelowLength {
        /// Requested number of slots.
        capacity: usize,
        /// Number of elements in the buffer.
        len: usize,
    },
    /// An index or position is past the end of the buffer.
    #[error("index {index} out of range for buffer of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of elements in the buffer.
        len: usize,
    },
    /// A range is empty, reversed, or extends past the end of the buffer.
    #[error("range {start}..{end} out of range for buffer of length {len}")]
    InvalidRange {
        /// Start of the range (inclusive).
        start: usize,
        /// End of the range (exclusive).
        end: usize,
        /// Number of elements in the buffer.
        len: usize,
    },
    /// The operation requires at least one element.
    #[error("buffer empty")]
    Empty,
    /// The operation needs a slot to write to, but the capacity is 0.
    #[error("buffer has zero capacity")]
    ZeroCapacity,
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// use circular_deque::ErrorKind;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(3).unwrap();
    /// buf.push_back(10).unwrap();
    ///
    /// assert_eq!(buf.set_capacity(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(buf.at(1).unwrap_err().kind(), ErrorKind::OutOfRange);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CapacityOverflow { .. } | Self::CapacityBelowLength { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::IndexOutOfRange { .. }
            | Self::InvalidRange { .. }
            | Self::Empty
            | Self::ZeroCapacity => ErrorKind::OutOfRange,
        }
    }
}
