use crate::error::PushError;
use crate::ring::RingBuffer;
use futures_sink::Sink;
use futures_util::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Sink over a borrowed buffer. It never waits: a full buffer is reported as
/// [`PushError::Full`] straight from `poll_ready`.
pub struct SinkWrapper<'a, T> {
    inner: Option<&'a mut RingBuffer<T>>,
}

impl<'a, T> SinkWrapper<'a, T> {
    pub fn new(buffer: &'a mut RingBuffer<T>) -> Self {
        Self {
            inner: Some(buffer),
        }
    }
}

impl<'a, T> Sink<T> for SinkWrapper<'a, T> {
    type Error = PushError;

    fn poll_ready(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        let ready = match self.inner.as_mut() {
            Some(inner) if inner.is_full() => Err(PushError::Full),
            Some(_) => Ok(()),
            None => Err(PushError::Closed),
        };
        Poll::Ready(ready)
    }

    fn start_send(mut self: Pin<&mut Self>, item: T) -> Result<(), Self::Error> {
        self.inner
            .as_mut()
            .map(|inner| inner.enqueue(item).map_err(|err| err.into_push_error()))
            .unwrap_or(Err(PushError::Closed))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // items land in the buffer on start_send, there is nothing to flush
        if self.inner.is_some() {
            Poll::Ready(Ok(()))
        } else {
            Poll::Ready(Err(PushError::Closed))
        }
    }

    fn poll_close(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner = None;
        Poll::Ready(Ok(()))
    }
}

/// Dequeues from a borrowed buffer until it runs empty. Elements that are
/// never pulled stay in the buffer.
pub struct Drain<'a, T> {
    inner: &'a mut RingBuffer<T>,
}

impl<'a, T> Drain<'a, T> {
    pub fn new(buffer: &'a mut RingBuffer<T>) -> Self {
        Self { inner: buffer }
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T> Stream for Drain<'a, T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<T>> {
        Poll::Ready(self.inner.dequeue())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        Iterator::size_hint(self)
    }
}
