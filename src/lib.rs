//! This crate implements a resizable [circular buffer], also known as cyclic buffer, circular
//! queue or ring.
//!
//! The main struct is [`CircularBuffer`]. A `CircularBuffer` is a sequence of elements stored in a
//! single heap block with a fixed capacity: elements can be added at either end, and once the
//! capacity is reached, the elements at the opposite end are discarded and overwritten. The
//! capacity only changes when explicitly requested through
//! [`set_capacity()`](CircularBuffer::set_capacity) or [`resize()`](CircularBuffer::resize).
//!
//! [circular buffer]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Examples
//!
//! ```
//! use circular_deque::CircularBuffer;
//!
//! // Initialize a new, empty circular buffer with a capacity of 5 elements
//! let mut buf = CircularBuffer::<u32>::with_capacity(5)?;
//!
//! // Add a few elements
//! buf.push_back(1)?;
//! buf.push_back(2)?;
//! buf.push_back(3)?;
//! assert_eq!(buf, [1, 2, 3]);
//!
//! // Add more elements to fill the buffer capacity completely
//! buf.push_back(4)?;
//! buf.push_back(5)?;
//! assert_eq!(buf, [1, 2, 3, 4, 5]);
//!
//! // Adding more elements than the buffer can contain causes the front elements to be
//! // automatically dropped
//! buf.push_back(6)?;
//! assert_eq!(buf, [2, 3, 4, 5, 6]); // `1` got dropped to make room for `6`
//! # Ok::<(), circular_deque::Error>(())
//! ```
//!
//! # Interface
//!
//! ## Adding/removing elements
//!
//! * [`push_back()`](CircularBuffer::push_back), [`push_front()`](CircularBuffer::push_front)
//! * [`pop_back()`](CircularBuffer::pop_back), [`pop_front()`](CircularBuffer::pop_front)
//! * [`insert()`](CircularBuffer::insert), [`erase()`](CircularBuffer::erase)
//! * [`truncate_back()`](CircularBuffer::truncate_back),
//!   [`truncate_front()`](CircularBuffer::truncate_front), [`clear()`](CircularBuffer::clear)
//!
//! ## Getting/mutating elements
//!
//! * [`at()`](CircularBuffer::at), [`at_mut()`](CircularBuffer::at_mut), and the `buf[i]`
//!   indexing operator
//! * [`front()`](CircularBuffer::front), [`back()`](CircularBuffer::back) and their `_mut`
//!   variants
//! * [`get()`](CircularBuffer::get), [`get_mut()`](CircularBuffer::get_mut)
//!
//! ## Layout and capacity
//!
//! * [`linearize()`](CircularBuffer::linearize),
//!   [`is_linearized()`](CircularBuffer::is_linearized),
//!   [`as_slices()`](CircularBuffer::as_slices)
//! * [`rotate()`](CircularBuffer::rotate)
//! * [`set_capacity()`](CircularBuffer::set_capacity), [`resize()`](CircularBuffer::resize),
//!   [`reserve()`](CircularBuffer::reserve)
//!
//! # Errors
//!
//! Fallible operations return a [`Result`] carrying an [`Error`]. Each error belongs to one of
//! two [kinds](ErrorKind): [`InvalidArgument`](ErrorKind::InvalidArgument) for capacities that
//! cannot be honored, and [`OutOfRange`](ErrorKind::OutOfRange) for indexes, positions and
//! ranges outside the buffer (including any access to an empty buffer). Preconditions are
//! checked before the buffer is modified.
//!
//! # Time complexity
//!
//! | Method                                                                                         | Complexity              |
//! |------------------------------------------------------------------------------------------------|-------------------------|
//! | [`push_back()`](CircularBuffer::push_back), [`push_front()`](CircularBuffer::push_front)       | *O*(1)                  |
//! | [`pop_back()`](CircularBuffer::pop_back), [`pop_front()`](CircularBuffer::pop_front)           | *O*(1)                  |
//! | [`at()`](CircularBuffer::at), [`front()`](CircularBuffer::front), [`back()`](CircularBuffer::back) | *O*(1)              |
//! | [`insert(i)`](CircularBuffer::insert)                                                          | *O*(*n* − *i*)          |
//! | [`erase(i..j)`](CircularBuffer::erase)                                                         | *O*(*n* − *i*)          |
//! | [`rotate()`](CircularBuffer::rotate)                                                           | *O*(1) when full, *O*(*N*) otherwise |
//! | [`linearize()`](CircularBuffer::linearize)                                                     | *O*(*N*) when wrapped, *O*(1) otherwise |
//! | [`set_capacity()`](CircularBuffer::set_capacity)                                               | *O*(*N*)                |
//!
//! Where *n* is the length of the buffer and *N* is its capacity.
//!
//! # Stale slots
//!
//! Removing elements (popping, erasing, truncating) does not clear the slots they occupied. The
//! removed values stay in storage, and are dropped only when their slot is overwritten, when the
//! storage is reallocated, or when the buffer itself is dropped.
//!
//! # `no_std`
//!
//! The crate needs an allocator but not `std`. Disable the default `std` feature to use it in a
//! `no_std` + `alloc` environment.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![warn(unused_qualifications)]

extern crate alloc;

mod error;


use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::mem;
use core::ops::Bound;
use core::ops::Index;
use core::ops::IndexMut;
use core::ops::RangeBounds;
use tracing::debug;
use tracing::trace;

pub use crate::error::Error;
pub use crate::error::ErrorKind;
pub use crate::error::Result;

/// Returns `(x + y) % m` without risk of overflows if `x + y` cannot fit in `usize`.
///
/// `x` and `y` are expected to be less than, or equal to `m`.
#[inline]
const fn add_mod(x: usize, y: usize, m: usize) -> usize {
    debug_assert!(m > 0);
    debug_assert!(x <= m);
    debug_assert!(y <= m);
    let (z, overflow) = x.overflowing_add(y);
    (z + (overflow as usize) * (usize::MAX % m + 1)) % m
}

/// Returns `(x - y) % m` without risk of underflows if `x - y` is negative.
///
/// `x` and `y` are expected to be less than, or equal to `m`.
#[inline]
const fn sub_mod(x: usize, y: usize, m: usize) -> usize {
    debug_assert!(m > 0);
    debug_assert!(x <= m);
    debug_assert!(y <= m);
    add_mod(x, m - y, m)
}

/// Returns an empty vector able to hold exactly `capacity` elements, or `CapacityOverflow` if the
/// allocation is impossible.
fn try_alloc<T>(capacity: usize) -> Result<Vec<T>> {
    let mut items = Vec::new();
    items.try_reserve_exact(capacity)
         .map_err(|_| Error::CapacityOverflow { requested: capacity })?;
    Ok(items)
}

/// A heap-allocated circular buffer with a capacity chosen at runtime.
///
/// See the [module-level documentation](self) for more details and examples.
#[derive(Clone)]
pub struct CircularBuffer<T> {
    items: Box<[T]>,
    size: usize,
    start: usize,
}

impl<T> CircularBuffer<T> {
    /// Returns an empty `CircularBuffer` with a capacity of 0.
    ///
    /// This does not allocate. A buffer with zero capacity cannot hold any element until
    /// [`set_capacity()`](Self::set_capacity) or [`resize()`](Self::resize) is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// let buf = CircularBuffer::<u32>::new();
    /// assert_eq!(buf.capacity(), 0);
    /// assert_eq!(buf, []);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Box::default(),
            size: 0,
            start: 0,
        }
    }

    /// Returns the capacity of the buffer.
    ///
    /// This is the maximum number of elements that the buffer can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// let buf = CircularBuffer::<u32>::with_capacity(16).unwrap();
    /// assert_eq!(buf.capacity(), 16);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// let mut buf = CircularBuffer::<u32>::with_capacity(16).unwrap();
    /// assert_eq!(buf.len(), 0);
    ///
    /// buf.push_back(1).unwrap();
    /// buf.push_back(2).unwrap();
    /// assert_eq!(buf.len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the buffer contains 0 elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the number of elements in the buffer matches the buffer capacity.
    ///
    /// A buffer with zero capacity is always full.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// let mut buf = CircularBuffer::<u32>::with_capacity(2).unwrap();
    /// assert!(!buf.is_full());
    ///
    /// buf.push_back(1).unwrap();
    /// buf.push_back(2).unwrap();
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Returns the number of free slots, that is `capacity() - len()`.
    ///
    /// This is the number of elements that can be pushed before the buffer starts overwriting.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// let mut buf = CircularBuffer::<u32>::with_capacity(5).unwrap();
    /// buf.push_back(1).unwrap();
    /// buf.push_back(2).unwrap();
    /// assert_eq!(buf.reserve(), 3);
    /// ```
    #[inline]
    pub fn reserve(&self) -> usize {
        self.capacity() - self.size
    }

    /// Maps a logical index to its physical slot.
    #[inline]
    fn slot(&self, index: usize) -> usize {
        debug_assert!(index < self.capacity(), "index out-of-bounds");
        debug_assert!(self.start < self.capacity(), "start out-of-bounds");
        add_mod(self.start, index, self.capacity())
    }

    /// Returns a reference to the element at `index`, or `None` if `index` is out of bounds.
    ///
    /// Element at index 0 is the front of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// let mut buf = CircularBuffer::<char>::with_capacity(5).unwrap();
    /// buf.extend("abc".chars());
    /// assert_eq!(buf.get(1), Some(&'b'));
    /// assert_eq!(buf.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        Some(&self.items[self.slot(index)])
    }

    /// Returns a mutable reference to the element at `index`, or `None` if `index` is out of
    /// bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.size {
            return None;
        }
        let slot = self.slot(index);
        Some(&mut self.items[slot])
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is greater than or equal to [`len()`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// use circular_deque::Error;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(5).unwrap();
    /// buf.extend([10, 20, 30]);
    /// assert_eq!(buf.at(2), Ok(&30));
    /// assert_eq!(buf.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.size;
        self.get(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is greater than or equal to [`len()`](Self::len).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.size;
        self.get_mut(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// use circular_deque::Error;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(5).unwrap();
    /// assert_eq!(buf.front(), Err(Error::Empty));
    ///
    /// buf.extend([1, 2, 3]);
    /// assert_eq!(buf.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.get(0).ok_or(Error::Empty)
    }

    /// Returns a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the buffer is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.get_mut(0).ok_or(Error::Empty)
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// use circular_deque::Error;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(5).unwrap();
    /// assert_eq!(buf.back(), Err(Error::Empty));
    ///
    /// buf.extend([1, 2, 3]);
    /// assert_eq!(buf.back(), Ok(&3));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T> {
        match self.size {
            0 => Err(Error::Empty),
            len => Ok(&self.items[self.slot(len - 1)]),
        }
    }

    /// Returns a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the buffer is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        match self.size {
            0 => Err(Error::Empty),
            len => {
                let slot = self.slot(len - 1);
                Ok(&mut self.items[slot])
            }
        }
    }

    /// Appends an element to the back of the buffer.
    ///
    /// If the buffer is full, the element at the front of the buffer is overwritten and dropped.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroCapacity`] if the buffer has no slot to write to.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(3).unwrap();
    ///
    /// buf.push_back(1).unwrap();
    /// assert_eq!(buf, [1]);
    ///
    /// buf.push_back(2).unwrap();
    /// assert_eq!(buf, [1, 2]);
    ///
    /// buf.push_back(3).unwrap();
    /// assert_eq!(buf, [1, 2, 3]);
    ///
    /// // The buffer is now full; adding more values causes the front elements to be dropped
    /// buf.push_back(4).unwrap();
    /// assert_eq!(buf, [2, 3, 4]);
    /// ```
    pub fn push_back(&mut self, item: T) -> Result<()> {
        if self.capacity() == 0 {
            return Err(Error::ZeroCapacity);
        }
        self.write_back(item);
        Ok(())
    }

    /// Appends an element to the front of the buffer.
    ///
    /// If the buffer is full, the element at the back of the buffer is overwritten and dropped.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroCapacity`] if the buffer has no slot to write to.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(3).unwrap();
    ///
    /// buf.push_front(1).unwrap();
    /// buf.push_front(2).unwrap();
    /// buf.push_front(3).unwrap();
    /// assert_eq!(buf, [3, 2, 1]);
    ///
    /// buf.push_front(4).unwrap();
    /// assert_eq!(buf, [4, 3, 2]);
    /// ```
    pub fn push_front(&mut self, item: T) -> Result<()> {
        let capacity = self.capacity();
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        // When full, the slot before `start` holds the back element, which gets overwritten
        self.start = sub_mod(self.start, 1, capacity);
        self.items[self.start] = item;
        if self.size < capacity {
            self.size += 1;
        }
        Ok(())
    }

    fn write_back(&mut self, item: T) {
        let capacity = self.capacity();
        debug_assert!(capacity > 0, "zero capacity");
        if self.size == capacity {
            // At capacity; the tail slot is the front slot, so overwrite it and move on
            self.items[self.start] = item;
            self.start = add_mod(self.start, 1, capacity);
        } else {
            let tail = self.slot(self.size);
            self.items[tail] = item;
            self.size += 1;
        }
    }

    /// Shortens the buffer, keeping only the front `len` elements.
    ///
    /// If `len` is greater or equal to the buffer's current length, this has no effect. The slots
    /// past the new back are not cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(4).unwrap();
    /// buf.extend([10, 20, 30]);
    /// buf.truncate_back(1);
    /// assert_eq!(buf, [10]);
    /// ```
    pub fn truncate_back(&mut self, len: usize) {
        if len < self.size {
            self.size = len;
        }
    }

    /// Shortens the buffer, keeping only the back `len` elements.
    ///
    /// If `len` is greater or equal to the buffer's current length, this has no effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(4).unwrap();
    /// buf.extend([10, 20, 30]);
    /// buf.truncate_front(1);
    /// assert_eq!(buf, [30]);
    /// ```
    pub fn truncate_front(&mut self, len: usize) {
        if len < self.size {
            self.start = add_mod(self.start, self.size - len, self.capacity());
            self.size = len;
        }
    }

    /// Removes all elements from the buffer.
    ///
    /// The capacity is unchanged. Clearing an empty buffer does nothing.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
        self.start = 0;
    }

    /// Exchanges the storage and contents of two buffers.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut a = CircularBuffer::<u32>::with_capacity(3).unwrap();
    /// a.extend([10, 20]);
    /// let mut b = CircularBuffer::<u32>::with_capacity(5).unwrap();
    /// b.extend([30, 40, 50]);
    ///
    /// a.swap(&mut b);
    /// assert_eq!((a.capacity(), b.capacity()), (5, 3));
    /// assert_eq!(a, [30, 40, 50]);
    /// assert_eq!(b, [10, 20]);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns `true` if the elements of the buffer occupy a single contiguous run of storage,
    /// i.e. the run does not wrap around the end of the storage block.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(3).unwrap();
    /// buf.extend([1, 2, 3]);
    /// assert!(buf.is_linearized());
    ///
    /// buf.push_back(4).unwrap();
    /// assert!(!buf.is_linearized());
    /// ```
    #[inline]
    pub fn is_linearized(&self) -> bool {
        self.size <= self.capacity() - self.start
    }

    /// Rearranges the internal storage of the buffer so that all elements are in a contiguous
    /// slice, which is then returned.
    ///
    /// This method does not allocate and does not change the order of the elements. When the
    /// elements wrap around, the storage is rotated so that the front element lands on the first
    /// slot. Calling this method on a buffer that is already linearized moves no data.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(4).unwrap();
    /// buf.extend([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(buf.as_slices(), (&[3, 4][..], &[5, 6][..]));
    ///
    /// assert_eq!(buf.linearize(), &[3, 4, 5, 6]);
    /// assert_eq!(buf.as_slices(), (&[3, 4, 5, 6][..], &[][..]));
    /// ```
    pub fn linearize(&mut self) -> &mut [T] {
        if !self.is_linearized() {
            trace!(start = self.start, len = self.size, "rotating storage to linearize buffer");
            self.items.rotate_left(self.start);
            self.start = 0;
        }
        let (start, end) = (self.start, self.start + self.size);
        &mut self.items[start..end]
    }

    /// Returns a pair of slices which contain the elements of this buffer, in order.
    ///
    /// The second slice is empty when the buffer [is linearized](Self::is_linearized).
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        if self.is_linearized() {
            let (start, end) = (self.start, self.start + self.size);
            return (&self.items[start..end], &[][..]);
        }
        let (back, front) = self.items.split_at(self.start);
        let wrapped = self.size - front.len();
        (front, &back[..wrapped])
    }

    /// Returns a pair of mutable slices which contain the elements of this buffer, in order.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        if self.is_linearized() {
            let (start, end) = (self.start, self.start + self.size);
            return (&mut self.items[start..end], &mut [][..]);
        }
        let (back, front) = self.items.split_at_mut(self.start);
        let wrapped = self.size - front.len();
        (front, &mut back[..wrapped])
    }

    /// Rotates the buffer so that the element at `new_begin` becomes the front element.
    ///
    /// The elements before `new_begin` move, in order, to the back of the buffer. On a full
    /// buffer this only moves the start index; otherwise the elements are linearized and rotated
    /// in place.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `new_begin` is greater than or equal to
    /// [`len()`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(5).unwrap();
    /// buf.extend([1, 2, 3, 4]);
    /// buf.rotate(1).unwrap();
    /// assert_eq!(buf, [2, 3, 4, 1]);
    /// assert!(buf.rotate(4).is_err());
    /// ```
    pub fn rotate(&mut self, new_begin: usize) -> Result<()> {
        if new_begin >= self.size {
            return Err(Error::IndexOutOfRange { index: new_begin, len: self.size });
        }
        if self.is_full() {
            self.start = self.slot(new_begin);
        } else {
            trace!(new_begin, len = self.size, "rotating elements of partially filled buffer");
            self.linearize().rotate_left(new_begin);
        }
        Ok(())
    }

    /// Inserts an element at position `index`, shifting the elements after it towards the back.
    ///
    /// If the buffer is full, the front element is dropped first. `index` then refers to the
    /// positions of the remaining elements; an `index` past the end appends the element.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`] if `index` is greater than [`len()`](Self::len).
    /// * [`Error::ZeroCapacity`] if the buffer has no slot to write to.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<char>::with_capacity(4).unwrap();
    /// buf.extend("abc".chars());
    ///
    /// buf.insert(1, 'x').unwrap();
    /// assert_eq!(buf, ['a', 'x', 'b', 'c']);
    ///
    /// // Full: 'a' is dropped, then 'y' goes to position 1 of ['x', 'b', 'c']
    /// buf.insert(1, 'y').unwrap();
    /// assert_eq!(buf, ['x', 'y', 'b', 'c']);
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.size {
            return Err(Error::IndexOutOfRange { index, len: self.size });
        }
        let capacity = self.capacity();
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        let index = if self.size == capacity {
            // At capacity; evict the front element, shifting every position down by one
            self.start = add_mod(self.start, 1, capacity);
            self.size -= 1;
            index.min(self.size)
        } else {
            index
        };

        self.write_back(item);
        for i in (index + 1..self.size).rev() {
            let (a, b) = (self.slot(i), self.slot(i - 1));
            self.items.swap(a, b);
        }
        Ok(())
    }

    /// Removes the elements in `range`, shifting the elements after it towards the front.
    ///
    /// The removed values are left in the vacated slots and dropped when overwritten.
    ///
    /// # Errors
    ///
    /// * [`Error::Empty`] if the buffer is empty.
    /// * [`Error::InvalidRange`] if the range is empty, reversed, or its end is greater than
    ///   [`len()`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<char>::with_capacity(6).unwrap();
    /// buf.extend("abcdef".chars());
    ///
    /// buf.erase(1..3).unwrap();
    /// assert_eq!(buf, ['a', 'd', 'e', 'f']);
    ///
    /// buf.erase(2..).unwrap();
    /// assert_eq!(buf, ['a', 'd']);
    ///
    /// assert!(buf.erase(1..1).is_err());
    /// ```
    pub fn erase<R>(&mut self, range: R) -> Result<()>
        where R: RangeBounds<usize>
    {
        if self.size == 0 {
            return Err(Error::Empty);
        }

        let start = match range.start_bound() {
            Bound::Included(x) => *x,
            Bound::Excluded(x) => x.saturating_add(1),
            Bound::Unbounded   => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(x) => x.saturating_add(1),
            Bound::Excluded(x) => *x,
            Bound::Unbounded   => self.size,
        };
        if start >= end || end > self.size {
            return Err(Error::InvalidRange { start, end, len: self.size });
        }

        let count = end - start;
        for i in start..self.size - count {
            let (a, b) = (self.slot(i), self.slot(i + count));
            self.items.swap(a, b);
        }
        self.size -= count;
        Ok(())
    }
}

impl<T> CircularBuffer<T>
    where T: Default
{
    /// Returns an empty `CircularBuffer` able to hold `capacity` elements.
    ///
    /// All the slots are allocated upfront and initialized with [`T::default()`](Default).
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] if `capacity` slots of `T` cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// use circular_deque::ErrorKind;
    ///
    /// let buf = CircularBuffer::<u32>::with_capacity(16).unwrap();
    /// assert_eq!(buf.capacity(), 16);
    /// assert_eq!(buf, []);
    ///
    /// let err = CircularBuffer::<u64>::with_capacity(usize::MAX).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = try_alloc(capacity)?;
        items.resize_with(capacity, T::default);
        Ok(Self {
            items: items.into_boxed_slice(),
            size: 0,
            start: 0,
        })
    }

    /// Changes the capacity of the buffer, reallocating its storage.
    ///
    /// The elements are moved to the new storage block in order, starting from the first slot,
    /// so the buffer is always [linearized](Self::is_linearized) afterwards.
    ///
    /// # Errors
    ///
    /// * [`Error::CapacityBelowLength`] if `capacity` is less than [`len()`](Self::len).
    /// * [`Error::CapacityOverflow`] if `capacity` slots of `T` cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// use circular_deque::Error;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(3).unwrap();
    /// buf.extend([10, 20]);
    ///
    /// buf.set_capacity(5).unwrap();
    /// assert_eq!(buf.capacity(), 5);
    /// assert_eq!(buf, [10, 20]);
    ///
    /// assert_eq!(buf.set_capacity(1), Err(Error::CapacityBelowLength { capacity: 1, len: 2 }));
    /// ```
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.size {
            return Err(Error::CapacityBelowLength { capacity, len: self.size });
        }

        let mut items = try_alloc(capacity)?;
        let (front, back) = self.as_mut_slices();
        items.extend(front.iter_mut().map(mem::take));
        items.extend(back.iter_mut().map(mem::take));
        items.resize_with(capacity, T::default);

        debug!(old_capacity = self.capacity(), new_capacity = capacity, len = self.size,
               "reallocated circular buffer storage");
        self.items = items.into_boxed_slice();
        self.start = 0;
        Ok(())
    }

    /// Resizes the buffer so that its length is `new_len`, calling `f` to produce each appended
    /// element.
    ///
    /// The capacity grows to `new_len` if needed; it never shrinks. Shrinking the length drops
    /// elements from the back.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] if the capacity needs to grow and the allocation is
    /// impossible.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<()>
        where F: FnMut() -> T
    {
        if new_len > self.capacity() {
            self.set_capacity(new_len)?;
        }
        self.truncate_back(new_len);
        while self.size < new_len {
            self.write_back(f());
        }
        Ok(())
    }
}

impl<T> CircularBuffer<T>
    where T: Clone
{
    /// Returns a full `CircularBuffer` of `capacity` elements, all equal to `value`.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] if `capacity` slots of `T` cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let buf = CircularBuffer::from_elem(3, 42).unwrap();
    /// assert!(buf.is_full());
    /// assert_eq!(buf, [42, 42, 42]);
    /// ```
    pub fn from_elem(capacity: usize, value: T) -> Result<Self> {
        let mut items = try_alloc(capacity)?;
        items.resize(capacity, value);
        Ok(Self {
            items: items.into_boxed_slice(),
            size: capacity,
            start: 0,
        })
    }

    /// Removes the back element and returns a copy of it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// use circular_deque::Error;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(3).unwrap();
    /// buf.extend([1, 2]);
    /// assert_eq!(buf.pop_back(), Ok(2));
    /// assert_eq!(buf.pop_back(), Ok(1));
    /// assert_eq!(buf.pop_back(), Err(Error::Empty));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        let item = self.back()?.clone();
        self.size -= 1;
        Ok(item)
    }

    /// Removes the front element and returns a copy of it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    /// use circular_deque::Error;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(3).unwrap();
    /// buf.extend([1, 2]);
    /// assert_eq!(buf.pop_front(), Ok(1));
    /// assert_eq!(buf.pop_front(), Ok(2));
    /// assert_eq!(buf.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let item = self.front()?.clone();
        self.start = add_mod(self.start, 1, self.capacity());
        self.size -= 1;
        Ok(item)
    }

    /// Clones the elements of the buffer into a new [`Vec`], leaving the buffer unchanged.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let (front, back) = self.as_slices();
        let mut vec = Vec::with_capacity(self.size);
        vec.extend_from_slice(front);
        vec.extend_from_slice(back);
        vec
    }
}

impl<T> CircularBuffer<T>
    where T: Clone + Default
{
    /// Resizes the buffer so that its length is `new_len`, appending clones of `value` if it
    /// grows.
    ///
    /// If `new_len` exceeds the capacity, the capacity first grows to `new_len`. If `new_len` is
    /// less than the current length, the buffer is truncated from the back.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] if the capacity needs to grow and the allocation is
    /// impossible.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::<u32>::with_capacity(3).unwrap();
    /// buf.extend([10, 20]);
    ///
    /// buf.resize(5, 99).unwrap();
    /// assert_eq!(buf.capacity(), 5);
    /// assert_eq!(buf, [10, 20, 99, 99, 99]);
    ///
    /// buf.resize(2, 0).unwrap();
    /// assert_eq!(buf.capacity(), 5);
    /// assert_eq!(buf, [10, 20]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<()> {
        self.resize_with(new_len, || value.clone())
    }

    /// Resizes the buffer so that its length is `new_len`, appending [`T::default()`](Default)
    /// if it grows.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] if the capacity needs to grow and the allocation is
    /// impossible.
    pub fn resize_default(&mut self, new_len: usize) -> Result<()> {
        self.resize_with(new_len, T::default)
    }
}

impl<T> Default for CircularBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked access: `buf[i]` reads slot `(start + i) % capacity` without comparing `i` against
/// [`len()`](CircularBuffer::len), so indexes past the end yield stale slots.
///
/// # Panics
///
/// If the capacity of the buffer is 0.
impl<T> Index<usize> for CircularBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        let capacity = self.capacity();
        assert!(capacity > 0, "cannot index into a buffer with zero capacity");
        &self.items[add_mod(self.start, index % capacity, capacity)]
    }
}

impl<T> IndexMut<usize> for CircularBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let capacity = self.capacity();
        assert!(capacity > 0, "cannot index into a buffer with zero capacity");
        &mut self.items[add_mod(self.start, index % capacity, capacity)]
    }
}

/// Elements pushed into a buffer with zero capacity are discarded.
impl<T> Extend<T> for CircularBuffer<T> {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = T>
    {
        if self.capacity() == 0 {
            return;
        }
        iter.into_iter().for_each(|item| self.write_back(item));
    }
}

impl<'a, T> Extend<&'a T> for CircularBuffer<T>
    where T: Copy
{
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = &'a T>
    {
        if self.capacity() == 0 {
            return;
        }
        iter.into_iter().for_each(|item| self.write_back(*item));
    }
}

impl<T, U> PartialEq<CircularBuffer<U>> for CircularBuffer<T>
    where T: PartialEq<U>
{
    fn eq(&self, other: &CircularBuffer<U>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let (a_left, a_right) = self.as_slices();
        let (b_left, b_right) = other.as_slices();

        match a_left.len().cmp(&b_left.len()) {
            Ordering::Less => {
                let x = a_left.len();
                let y = b_left.len() - x;
                a_left[..] == b_left[..x] && a_right[..y] == b_left[x..] && a_right[y..] == b_right[..]
            },
            Ordering::Greater => {
                let x = b_left.len();
                let y = a_left.len() - x;
                a_left[..x] == b_left[..] && a_left[x..] == b_right[..y] && a_right[..] == b_right[y..]
            },
            Ordering::Equal => {
                debug_assert_eq!(a_right.len(), b_right.len());
                a_left == b_left && a_right == b_right
            },
        }
    }
}

impl<T> Eq for CircularBuffer<T>
    where T: Eq
{}

impl<T, U> PartialEq<[U]> for CircularBuffer<T>
    where T: PartialEq<U>
{
    fn eq(&self, other: &[U]) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let (a_left, a_right) = self.as_slices();
        let (b_left, b_right) = other.split_at(a_left.len());
        a_left == b_left && a_right == b_right
    }
}

impl<const M: usize, T, U> PartialEq<[U; M]> for CircularBuffer<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        self == &other[..]
    }
}

impl<'a, T, U> PartialEq<&'a [U]> for CircularBuffer<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a [U]) -> bool {
        self == *other
    }
}

impl<'a, const M: usize, T, U> PartialEq<&'a [U; M]> for CircularBuffer<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a [U; M]) -> bool {
        self == *other
    }
}

impl<T, U> PartialOrd<CircularBuffer<U>> for CircularBuffer<T>
    where T: PartialOrd<U>
{
    fn partial_cmp(&self, other: &CircularBuffer<U>) -> Option<Ordering> {
        let (a_left, a_right) = self.as_slices();
        let (b_left, b_right) = other.as_slices();
        a_left.iter().chain(a_right).partial_cmp(b_left.iter().chain(b_right))
    }
}

impl<T> Ord for CircularBuffer<T>
    where T: Ord
{
    fn cmp(&self, other: &Self) -> Ordering {
        let (a_left, a_right) = self.as_slices();
        let (b_left, b_right) = other.as_slices();
        a_left.iter().chain(a_right).cmp(b_left.iter().chain(b_right))
    }
}

impl<T> Hash for CircularBuffer<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (left, right) = self.as_slices();
        self.size.hash(state);
        left.iter().chain(right).for_each(|item| item.hash(state));
    }
}

impl<T> fmt::Debug for CircularBuffer<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.as_slices();
        f.debug_list().entries(left.iter().chain(right)).finish()
    }
}
