use core::fmt;
use std::{collections::TryReserveError, error::Error};

/// `RingBuffer::try_new` error.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateError {
    /// Capacity must be at least one item.
    ZeroCapacity,
    /// Backing storage allocation failed.
    Alloc(TryReserveError),
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "capacity must be non-zero"),
            Self::Alloc(e) => write!(f, "storage allocation failed: {e}"),
        }
    }
}

impl Error for CreateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroCapacity => None,
            Self::Alloc(e) => Some(e),
        }
    }
}

/// `RingBuffer::try_push` error.
///
/// Both variants hand the rejected item back to the caller; the buffer is
/// left unchanged.
#[derive(Debug, PartialEq, Eq)]
pub enum PushError<T> {
    /// Cannot push: ring buffer is full.
    Full(T),
    /// Cannot push: the lock was poisoned by a panicked thread.
    Poisoned(T),
}

impl<T> PushError<T> {
    /// Takes the rejected item back out of the error.
    pub fn into_inner(self) -> T {
        match self {
            Self::Full(elem) | Self::Poisoned(elem) => elem,
        }
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full(_) => write!(f, "ring buffer is full"),
            Self::Poisoned(_) => write!(f, "ring buffer lock is poisoned"),
        }
    }
}

impl<T: fmt::Debug> Error for PushError<T> {}

/// `RingBuffer::try_pop` error.
#[derive(Debug, PartialEq, Eq)]
pub enum PopError {
    /// Cannot pop: ring buffer is empty.
    Empty,
    /// Cannot pop: the lock was poisoned by a panicked thread.
    Poisoned,
}

impl fmt::Display for PopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "ring buffer is empty"),
            Self::Poisoned => write!(f, "ring buffer lock is poisoned"),
        }
    }
}

impl Error for PopError {}

/// `RingBuffer::try_peek` error.
#[derive(Debug, PartialEq, Eq)]
pub enum PeekError {
    /// Cannot peek: ring buffer is empty.
    Empty,
    /// Cannot peek: the lock was poisoned by a panicked thread.
    Poisoned,
}

impl fmt::Display for PeekError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "ring buffer is empty"),
            Self::Poisoned => write!(f, "ring buffer lock is poisoned"),
        }
    }
}

impl Error for PeekError {}

/// The buffer's lock was poisoned by a panicked thread.
#[derive(Debug, PartialEq, Eq)]
pub struct Poisoned;

impl fmt::Display for Poisoned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring buffer lock is poisoned")
    }
}

impl Error for Poisoned {}
