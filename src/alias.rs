use crate::{
    rb::RingBuffer,
    storage::{Array, Heap},
};

/// Heap-backed ring buffer with capacity chosen at runtime.
pub type HeapRb<T> = RingBuffer<Heap<T>>;

/// Ring buffer with inline storage of compile-time capacity.
pub type StaticRb<T, const N: usize> = RingBuffer<Array<T, N>>;
