use super::raw_ring::RawRing;
use super::BlockMode;
use crate::error::{CreateError, TryPushError};
use crate::wrapper::{Drain, SinkWrapper};
use std::fmt;

/// A fixed-capacity FIFO that never overwrites.
///
/// Writes into a full buffer and reads from an empty one are rejected, and
/// bulk transfers that cannot be fully satisfied follow the caller's
/// [`BlockMode`]. No operation blocks and a rejected operation leaves the
/// buffer untouched.
///
/// The buffer does no synchronization of its own. Every mutation takes
/// `&mut self`; to share one buffer between a producer thread and a consumer
/// thread, wrap it in a lock.
pub struct RingBuffer<T> {
    buf: RawRing<T>,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer with room for exactly `capacity` elements.
    ///
    /// Fails with [`CreateError::ZeroCapacity`] for a zero capacity and with
    /// [`CreateError::AllocFailed`] when the slots cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, CreateError> {
        let buf = RawRing::with_capacity(capacity)?;
        Ok(Self { buf })
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of slots still free for writing.
    pub fn free(&self) -> usize {
        self.buf.free()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.buf.free() == 0
    }

    /// Appends `item` behind the newest element.
    ///
    /// A full buffer hands the item back inside the error.
    pub fn enqueue(&mut self, item: T) -> Result<(), TryPushError<T>> {
        self.buf.buffer_write(item).map_err(TryPushError::full)
    }

    /// Removes the oldest element, clearing its slot.
    pub fn dequeue(&mut self) -> Option<T> {
        self.buf.buffer_read()
    }

    /// Moves the oldest elements into the front of `out`, oldest first.
    ///
    /// The request is `out.len()`; pass a sub-slice to ask for less. Returns
    /// how many elements were moved. Positions of `out` past that count are
    /// left as they were. Should dropping an overwritten `out` value panic,
    /// the elements moved up to that point are gone from the buffer.
    pub fn drain_block(&mut self, out: &mut [T], mode: BlockMode) -> usize {
        let n = mode.amount(out.len(), self.buf.len(), self.buf.capacity());
        if n == 0 {
            return 0;
        }

        // each slot is committed as it is emptied, so a panicking drop of an
        // overwritten `out` value leaves the cursor and count in step
        let (tail, head) = self.buf.runs(self.buf.read_idx(), n);
        for (idx, dst) in tail.chain(head).zip(&mut out[..n]) {
            let val = self.buf.take(idx);
            self.buf.next_consumer_pos(1);
            if let Some(val) = val {
                *dst = val;
            }
        }
        n
    }

    /// Like [`drain_block`](Self::drain_block), appending to `out` instead of
    /// overwriting a block, so elements without a placeholder value can be
    /// drained in bulk.
    pub fn drain_into(&mut self, out: &mut Vec<T>, requested: usize, mode: BlockMode) -> usize {
        let n = mode.amount(requested, self.buf.len(), self.buf.capacity());
        if n == 0 {
            return 0;
        }

        out.reserve(n);
        let (tail, head) = self.buf.runs(self.buf.read_idx(), n);
        for idx in tail.chain(head) {
            let val = self.buf.take(idx);
            self.buf.next_consumer_pos(1);
            out.extend(val);
        }
        n
    }

    /// Copies the front of `input` behind the newest element, in order.
    ///
    /// The request is `input.len()`. Returns how many elements were copied.
    /// Should a `clone` panic, the copies made before it stay in the buffer.
    pub fn fill_block(&mut self, input: &[T], mode: BlockMode) -> usize
    where
        T: Clone,
    {
        let n = mode.amount(input.len(), self.buf.free(), self.buf.capacity());
        if n == 0 {
            return 0;
        }

        self.fill_with(n, input[..n].iter().cloned());
        n
    }

    /// Like [`fill_block`](Self::fill_block), moving the elements out of the
    /// front of `input` instead of cloning them. Whatever is not taken stays
    /// in `input`, in order.
    pub fn fill_from(&mut self, input: &mut Vec<T>, mode: BlockMode) -> usize {
        let n = mode.amount(input.len(), self.buf.free(), self.buf.capacity());
        if n == 0 {
            return 0;
        }

        self.fill_with(n, input.drain(..n));
        n
    }

    fn fill_with<I>(&mut self, n: usize, mut items: I)
    where
        I: Iterator<Item = T>,
    {
        // `items` may clone, and a clone may panic: commit slot by slot so
        // everything already written stays live
        let (tail, head) = self.buf.runs(self.buf.write_idx(), n);
        for idx in tail.chain(head) {
            match items.next() {
                Some(item) => self.buf.put(idx, item),
                None => break,
            }
            self.buf.next_producer_pos(1);
        }
    }

    /// Iterates over the live elements, oldest first, without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (tail, head) = self.buf.runs(self.buf.read_idx(), self.buf.len());
        self.buf
            .slots(tail)
            .iter()
            .chain(self.buf.slots(head))
            .filter_map(Option::as_ref)
    }

    /// Drops every resident element and rewinds both cursors.
    pub fn clear(&mut self) {
        self.buf.reset();
    }

    /// Consumes the buffer, dropping every element still resident.
    pub fn destroy(self) {
        drop(self)
    }

    /// Consumes the buffer without releasing its elements: whatever is still
    /// resident is handed back, oldest first, and becomes the caller's.
    pub fn into_residents(self) -> IntoIter<T> {
        self.into_iter()
    }

    /// A [`Sink`](futures_sink::Sink) enqueuing into this buffer.
    pub fn sink(&mut self) -> SinkWrapper<'_, T> {
        SinkWrapper::new(self)
    }

    /// An iterator and [`Stream`](futures_util::Stream) dequeuing from this
    /// buffer until it is empty.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.buf.capacity())
            .field("len", &self.buf.len())
            .field("read", &self.buf.read_idx())
            .field("write", &self.buf.write_idx())
            .finish()
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

/// Owning iterator over a buffer's elements, oldest first.
pub struct IntoIter<T> {
    inner: RingBuffer<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
