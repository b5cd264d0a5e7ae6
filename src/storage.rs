use core::{iter, mem::MaybeUninit};

/// Owned container for the ring's backing memory.
///
/// The region is contiguous, lives for the whole buffer lifetime and its
/// length is the buffer capacity. Slots are [`MaybeUninit`] because occupancy
/// is tracked by the ring itself, not by the container.
pub trait Storage {
    type Item: Sized;

    /// Number of slots. Constant during the whole storage lifetime.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[MaybeUninit<Self::Item>];

    fn as_mut_slice(&mut self) -> &mut [MaybeUninit<Self::Item>];
}

/// Heap-allocated storage with capacity chosen at runtime.
pub struct Heap<T> {
    data: Box<[MaybeUninit<T>]>,
}

impl<T> Heap<T> {
    /// Allocates storage for `capacity` items.
    ///
    /// *Panics if `capacity` is zero.*
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0);
        Self {
            data: iter::repeat_with(MaybeUninit::uninit).take(capacity).collect(),
        }
    }
}

impl<T> From<Box<[MaybeUninit<T>]>> for Heap<T> {
    fn from(data: Box<[MaybeUninit<T>]>) -> Self {
        Self { data }
    }
}

impl<T> Storage for Heap<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn as_slice(&self) -> &[MaybeUninit<T>] {
        &self.data
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.data
    }
}

/// Inline storage with capacity fixed at compile time.
pub struct Array<T, const N: usize> {
    data: [MaybeUninit<T>; N],
}

impl<T, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self { data: uninit_array() }
    }
}

impl<T, const N: usize> Storage for Array<T, N> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn as_slice(&self) -> &[MaybeUninit<T>] {
        &self.data
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.data
    }
}

// TODO: Replace with `MaybeUninit::uninit_array` when it is stabilized.
fn uninit_array<T, const N: usize>() -> [MaybeUninit<T>; N] {
    unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() }
}
