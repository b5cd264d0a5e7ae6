//! Bounded MPMC FIFO ring buffer guarded by a single mutex.
//!
//! The buffer has a fixed capacity chosen at creation and stores items in a
//! contiguous ring, wrapping indices modulo capacity. Any number of producer
//! and consumer threads may use it through a shared reference without
//! external coordination: one exclusive lock per buffer orders all
//! operations, and lock-acquisition order decides FIFO position.
//!
//! No operation waits on occupancy. Pushing into a full buffer and popping
//! from an empty one return [`Full`](errors::PushError::Full) and
//! [`Empty`](errors::PopError::Empty) immediately; these errors are the
//! backpressure signal and retry policy belongs to the caller. Every
//! operation completes in bounded time (one item move plus constant index
//! work), the intended trade-off for pipeline-handoff use.
//!
//! ```
//! use ringlock::HeapRb;
//! use std::{sync::Arc, thread};
//!
//! let rb = Arc::new(HeapRb::<i32>::new(256));
//!
//! let prod = rb.clone();
//! thread::spawn(move || {
//!     prod.try_push(123).unwrap();
//! })
//! .join()
//! .unwrap();
//!
//! assert_eq!(rb.try_pop().unwrap(), 123);
//! assert!(rb.is_empty());
//! ```

mod alias;
pub mod errors;
mod rb;
mod ring;
pub mod storage;

#[cfg(test)]
mod tests;

pub use alias::{HeapRb, StaticRb};
pub use rb::RingBuffer;
