//! A fixed-capacity FIFO ring buffer with strict no-overwrite semantics.
//!
//! Single elements go in with [`RingBuffer::enqueue`] and come out with
//! [`RingBuffer::dequeue`]. Blocks move with [`RingBuffer::fill_block`] and
//! [`RingBuffer::drain_block`], whose [`BlockMode`] decides between
//! all-or-nothing and as-much-as-fits.
//!
//! ```
//! use circbuf::{BlockMode, RingBuffer};
//!
//! let mut rb = RingBuffer::new(4).unwrap();
//! assert_eq!(rb.fill_block(&[1, 2, 3], BlockMode::Exact), 3);
//! assert!(rb.enqueue(4).is_ok());
//! assert!(rb.enqueue(5).is_err());
//!
//! let mut out = [0; 8];
//! assert_eq!(rb.drain_block(&mut out, BlockMode::Exact), 0);
//! assert_eq!(rb.drain_block(&mut out, BlockMode::BestEffort), 4);
//! assert_eq!(&out[..4], &[1, 2, 3, 4]);
//! ```
//!
//! The buffer is not synchronized. It is `Send`/`Sync` whenever `T` is, and
//! all mutation goes through `&mut self`, so sharing it between a producer
//! and a consumer takes an external lock.

pub mod error;
mod ring;
pub mod wrapper;

pub use error::{CreateError, PushError, TryPushError};
pub use ring::{BlockMode, IntoIter, RingBuffer};
pub use wrapper::{Drain, SinkWrapper};
