use crate::storage::Storage;
use core::{num::NonZeroUsize, ptr};

/// Index arithmetic and slot access for the ring.
///
/// Keeps the `head` (next write), `tail` (next read) and `count` bookkeeping
/// with the invariant `head == (tail + count) % capacity`. Knows nothing
/// about locking: exclusive access is the caller's responsibility, which is
/// why every method takes `&self`/`&mut self` obtained from an already-held
/// guard. These are the unsynchronized status helpers; calling them never
/// touches the buffer's lock, so a mutating operation cannot deadlock on
/// itself by querying state mid-flight.
pub(crate) struct RingCore<S: Storage> {
    storage: S,
    head: usize,
    tail: usize,
    count: usize,
}

impl<S: Storage> RingCore<S> {
    /// Wraps `storage` as an empty ring; its length becomes the capacity.
    ///
    /// *Panics if `storage` has zero slots.*
    pub fn new(storage: S) -> Self {
        assert!(!storage.is_empty());
        Self {
            storage,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        unsafe { NonZeroUsize::new_unchecked(self.storage.len()) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn vacant_len(&self) -> usize {
        self.capacity().get() - self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity().get()
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    /// Writes `elem` at `head`. Returns it back untouched when full.
    pub fn push(&mut self, elem: S::Item) -> Result<(), S::Item> {
        if self.is_full() {
            return Err(elem);
        }
        let head = self.head;
        self.storage.as_mut_slice()[head].write(elem);
        self.head = self.advance(head);
        self.count += 1;
        Ok(())
    }

    /// Moves the oldest item out of the slot at `tail`.
    pub fn pop(&mut self) -> Option<S::Item> {
        if self.is_empty() {
            return None;
        }
        let tail = self.tail;
        // The slot at `tail` is initialized while `count > 0`.
        let elem = unsafe { self.storage.as_slice()[tail].assume_init_read() };
        self.tail = self.advance(tail);
        self.count -= 1;
        Some(elem)
    }

    /// Non-destructive read of the oldest item.
    pub fn peek(&self) -> Option<&S::Item> {
        if self.is_empty() {
            return None;
        }
        Some(unsafe { self.storage.as_slice()[self.tail].assume_init_ref() })
    }

    /// Drops every stored item and rewinds both indices to slot zero.
    ///
    /// Items are popped one at a time, indices first, so a panicking `Drop`
    /// leaves the occupancy bookkeeping consistent.
    pub fn clear(&mut self) -> usize {
        let mut dropped = 0;
        while self.pop().is_some() {
            dropped += 1;
        }
        self.head = 0;
        self.tail = 0;
        dropped
    }

    /// [`Self::clear`], then overwrites the whole backing region with zero
    /// bytes. For rings that may have held sensitive data.
    pub fn wipe(&mut self) -> usize {
        let dropped = self.clear();
        let slice = self.storage.as_mut_slice();
        // Every slot is vacant after `clear`, so raw zeroing cannot clobber
        // a live item.
        unsafe { ptr::write_bytes(slice.as_mut_ptr(), 0, slice.len()) };
        dropped
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: Storage> Drop for RingCore<S> {
    fn drop(&mut self) {
        self.clear();
    }
}
