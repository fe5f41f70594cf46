use crate::error::CreateError;
use std::ops::Range;

/// Slot storage plus cursor bookkeeping. Knows nothing about transfer policy.
pub(crate) struct RawRing<T> {
    buf: Box<[Option<T>]>,
    read: usize,
    write: usize,
    len: usize,
}

impl<T> RawRing<T> {
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, CreateError> {
        if cap == 0 {
            return Err(CreateError::ZeroCapacity);
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(cap)
            .map_err(|_| CreateError::AllocFailed)?;
        buf.resize_with(cap, || None);

        Ok(Self {
            buf: buf.into_boxed_slice(),
            read: 0,
            write: 0,
            len: 0,
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn free(&self) -> usize {
        self.capacity() - self.len
    }

    pub(crate) fn read_idx(&self) -> usize {
        self.read
    }

    pub(crate) fn write_idx(&self) -> usize {
        self.write
    }

    /// `idx` and `off` are both at most `capacity`, so one subtraction wraps.
    fn index(&self, idx: usize, off: usize) -> usize {
        let next = idx + off;
        if next >= self.capacity() {
            next - self.capacity()
        } else {
            next
        }
    }

    /// Splits `n` slots starting at `start` into the run up to the end of
    /// storage and the wrapped run from slot 0.
    pub(crate) fn runs(&self, start: usize, n: usize) -> (Range<usize>, Range<usize>) {
        let to_end = self.capacity() - start;
        if n > to_end {
            (start..self.capacity(), 0..n - to_end)
        } else {
            (start..start + n, 0..0)
        }
    }

    pub(crate) fn slots(&self, range: Range<usize>) -> &[Option<T>] {
        &self.buf[range]
    }

    /// Empties a live slot. Does not move the read cursor.
    pub(crate) fn take(&mut self, idx: usize) -> Option<T> {
        let val = self.buf[idx].take();
        debug_assert!(val.is_some(), "live slot {} was empty", idx);
        val
    }

    /// Fills a free slot. Does not move the write cursor.
    pub(crate) fn put(&mut self, idx: usize, value: T) {
        debug_assert!(self.buf[idx].is_none(), "free slot {} was occupied", idx);
        self.buf[idx] = Some(value);
    }

    pub(crate) fn buffer_read(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let val = self.take(self.read);
        self.next_consumer_pos(1);
        val
    }

    pub(crate) fn buffer_write(&mut self, value: T) -> Result<(), T> {
        if self.len == self.capacity() {
            return Err(value);
        }
        self.put(self.write, value);
        self.next_producer_pos(1);
        Ok(())
    }

    /// Commits `off` slots consumed. Callers have already emptied them.
    pub(crate) fn next_consumer_pos(&mut self, off: usize) {
        debug_assert!(off <= self.len);
        self.read = self.index(self.read, off);
        self.len -= off;
    }

    /// Commits `off` slots produced. Callers have already filled them.
    pub(crate) fn next_producer_pos(&mut self, off: usize) {
        debug_assert!(off <= self.free());
        self.write = self.index(self.write, off);
        self.len += off;
    }

    pub(crate) fn reset(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.read = 0;
        self.write = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::RawRing;

    #[test]
    fn runs_split_at_storage_end() {
        let ring = RawRing::<u8>::with_capacity(5).unwrap();
        assert_eq!(ring.runs(1, 3), (1..4, 0..0));
        assert_eq!(ring.runs(3, 2), (3..5, 0..0));
        assert_eq!(ring.runs(3, 4), (3..5, 0..2));
        assert_eq!(ring.runs(0, 5), (0..5, 0..0));
    }

    #[test]
    fn cursors_wrap_to_zero() {
        let mut ring = RawRing::with_capacity(3).unwrap();
        for i in 0..3 {
            ring.buffer_write(i).unwrap();
        }
        assert_eq!(ring.write_idx(), 0);
        assert_eq!(ring.buffer_write(9), Err(9));

        assert_eq!(ring.buffer_read(), Some(0));
        ring.buffer_write(3).unwrap();
        assert_eq!(ring.write_idx(), 1);
        assert_eq!(ring.read_idx(), 1);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "live slot 2 was empty")]
    fn taking_an_empty_slot_is_caught() {
        let mut ring = RawRing::<u8>::with_capacity(3).unwrap();
        ring.take(2);
    }
}
