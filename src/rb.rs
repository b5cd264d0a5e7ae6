use crate::{
    errors::{CreateError, PeekError, Poisoned, PopError, PushError},
    ring::RingCore,
    storage::{Array, Heap, Storage},
};
use core::{mem::MaybeUninit, num::NonZeroUsize};
use crossbeam_utils::CachePadded;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Bounded MPMC FIFO ring buffer guarded by a single mutex.
///
/// Every method takes `&self`, so one instance can serve any number of
/// producer and consumer threads through a shared reference (typically an
/// `Arc`). Each call acquires the buffer's lock for its full duration and
/// releases it on every exit path via the guard; the lock totally orders
/// operations, and lock-acquisition order decides FIFO position.
///
/// Pushing into a full buffer and popping from an empty one fail immediately
/// instead of waiting. Nothing here blocks on occupancy, retries internally
/// or takes a timeout.
///
/// ```
/// use ringlock::{storage::Heap, RingBuffer};
/// use std::{sync::Arc, thread};
///
/// let rb = Arc::new(RingBuffer::<Heap<i32>>::new(256));
/// let prod = rb.clone();
/// thread::spawn(move || {
///     prod.try_push(123).unwrap();
/// })
/// .join()
/// .unwrap();
/// assert_eq!(rb.try_pop().unwrap(), 123);
/// ```
pub struct RingBuffer<S: Storage> {
    // Padded so the lock word does not share a cache line with whatever the
    // user allocates next to the buffer.
    core: CachePadded<Mutex<RingCore<S>>>,
}

impl<S: Storage> RingBuffer<S> {
    fn from_storage(storage: S) -> Self {
        Self {
            core: CachePadded::new(Mutex::new(RingCore::new(storage))),
        }
    }

    /// Locks the ring for a read-only query.
    ///
    /// The critical sections never leave the indices inconsistent, so a
    /// poisoned lock still holds a valid ring and queries may proceed.
    pub(crate) fn observe(&self) -> MutexGuard<'_, RingCore<S>> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Capacity of the ring buffer.
    ///
    /// It is constant during the whole ring buffer lifetime.
    pub fn capacity(&self) -> NonZeroUsize {
        self.observe().capacity()
    }

    /// The number of items stored in the buffer at the time of the call.
    pub fn len(&self) -> usize {
        self.observe().len()
    }

    /// The number of remaining free slots at the time of the call.
    pub fn vacant_len(&self) -> usize {
        self.observe().vacant_len()
    }

    /// Checks if the ring buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.observe().is_empty()
    }

    /// Checks if the ring buffer is full.
    pub fn is_full(&self) -> bool {
        self.observe().is_full()
    }

    /// Appends an item to the ring buffer.
    ///
    /// A full buffer rejects the push without overwriting or waiting; the
    /// error hands the item back untouched. A poisoned lock likewise aborts
    /// the call before any mutation.
    pub fn try_push(&self, elem: S::Item) -> Result<(), PushError<S::Item>> {
        let mut core = match self.core.lock() {
            Ok(guard) => guard,
            Err(_) => return Err(PushError::Poisoned(elem)),
        };
        core.push(elem).map_err(PushError::Full)
    }

    /// Removes the oldest item from the ring buffer.
    ///
    /// Items come out in exactly the order they were pushed.
    pub fn try_pop(&self) -> Result<S::Item, PopError> {
        let mut core = self.core.lock().map_err(|_| PopError::Poisoned)?;
        core.pop().ok_or(PopError::Empty)
    }

    /// Returns a clone of the oldest item without removing it.
    ///
    /// Indices and occupancy are untouched; repeated peeks return the same
    /// item until someone pops it.
    pub fn try_peek(&self) -> Result<S::Item, PeekError>
    where
        S::Item: Clone,
    {
        let core = self.core.lock().map_err(|_| PeekError::Poisoned)?;
        core.peek().cloned().ok_or(PeekError::Empty)
    }

    /// Removes and drops every stored item, returning how many there were.
    ///
    /// Afterwards the buffer behaves exactly like a freshly created one of
    /// the same capacity.
    pub fn clear(&self) -> Result<usize, Poisoned> {
        let mut core = self.core.lock().map_err(|_| Poisoned)?;
        Ok(core.clear())
    }

    /// [`Self::clear`], then overwrites the entire backing storage with zero
    /// bytes. For buffers that may have held sensitive data.
    pub fn secure_clear(&self) -> Result<usize, Poisoned> {
        let mut core = self.core.lock().map_err(|_| Poisoned)?;
        Ok(core.wipe())
    }
}

impl<T> RingBuffer<Heap<T>> {
    /// Creates a new heap-backed ring buffer.
    ///
    /// *Panics if allocation failed or `capacity` is zero.*
    pub fn new(capacity: usize) -> Self {
        Self::from_storage(Heap::new(capacity))
    }

    /// Creates a new heap-backed ring buffer, reporting zero capacity and
    /// allocation failure instead of panicking.
    ///
    /// On failure nothing is left half-built.
    pub fn try_new(capacity: usize) -> Result<Self, CreateError> {
        if capacity == 0 {
            return Err(CreateError::ZeroCapacity);
        }
        let mut vec = Vec::<MaybeUninit<T>>::new();
        vec.try_reserve_exact(capacity).map_err(CreateError::Alloc)?;
        // `MaybeUninit` slots need no initialization.
        unsafe { vec.set_len(capacity) };
        Ok(Self::from_storage(Heap::from(vec.into_boxed_slice())))
    }
}

impl<T, const N: usize> Default for RingBuffer<Array<T, N>> {
    fn default() -> Self {
        Self::from_storage(Array::default())
    }
}
