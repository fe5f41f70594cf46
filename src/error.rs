use std::fmt;

/// Why a [`RingBuffer`](crate::RingBuffer) could not be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateError {
    ZeroCapacity,
    AllocFailed,
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            CreateError::ZeroCapacity => write!(f, "ring buffer capacity must be non-zero"),
            CreateError::AllocFailed => write!(f, "failed to allocate ring buffer storage"),
        }
    }
}

impl std::error::Error for CreateError {}

/// Why an element was not accepted.
///
/// `Full` comes from the buffer itself. `Closed` only comes from a
/// [`SinkWrapper`](crate::SinkWrapper) after `poll_close` detached it from
/// its buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushError {
    Full,
    Closed,
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full => write!(f, "no free slot left in ring buffer"),
            PushError::Closed => write!(f, "sink was closed and no longer holds a ring buffer"),
        }
    }
}

impl std::error::Error for PushError {}

impl PushError {
    pub fn is_full(&self) -> bool {
        *self == PushError::Full
    }

    pub fn is_closed(&self) -> bool {
        *self == PushError::Closed
    }
}

/// A rejected [`enqueue`](crate::RingBuffer::enqueue). The element that did
/// not fit travels back in the error, so a full buffer never loses it.
#[derive(Clone, PartialEq, Eq)]
pub struct TryPushError<T> {
    pub(crate) err: PushError,
    pub(crate) val: T,
}

// `T` is an opaque payload, so it is left out of the output
impl<T> fmt::Debug for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryPushError")
            .field("kind", &self.err)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.err.fmt(f)
    }
}

impl<T: core::any::Any> std::error::Error for TryPushError<T> {}

impl<T> TryPushError<T> {
    pub(crate) fn full(val: T) -> Self {
        Self {
            err: PushError::Full,
            val,
        }
    }

    pub fn is_full(&self) -> bool {
        self.err.is_full()
    }

    /// Takes back the element that was refused.
    pub fn into_inner(self) -> T {
        self.val
    }

    /// Drops the element and keeps the reason.
    pub fn into_push_error(self) -> PushError {
        self.err
    }
}
