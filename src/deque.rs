// Copyright 2024 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! # Internal Layout
//!
//! The deque owns one boxed slice of initialized slots. Live elements occupy the slots from `head`
//! up to, but not including, `tail`, wrapping around the end of the slice:
//!
//! ```text
//!       tail          head
//!        v             v
//! |--|--|--|--|--|--|--|--|
//! |c |d |  |  |  |  |a |b |
//! |--|--|--|--|--|--|--|--|
//! ```
//!
//! One slot is always left free, so `head == tail` only when the deque is empty. The capacity
//! doubles when a push would fill that last slot, and halves when a pop finds the deque less than
//! a quarter full. Both reallocations move the live elements to the start of the new buffer.

use alloc::{
	collections::VecDeque,
	vec::Vec,
};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Index, IndexMut};
use crate::error::{OutOfRange, Result};
use crate::macros::trace;
use crate::raw::RawBuffer;
use cursor::{Cursor, CursorMut, Rev};
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};

pub mod cursor;
mod eq;
pub(crate) mod into_iter;
pub(crate) mod iter;

/// The capacity of a new or cleared deque, and the smallest capacity a deque is shrunk to.
pub const INITIAL_CAPACITY: usize = 4;

/// A double-ended queue backed by a single circular buffer.
///
/// Elements are stored in a slot buffer whose every slot holds a valid `T`, so operations which
/// allocate slots require `T: Default`. Reading, indexing, iteration and cursors are available for
/// any element type.
///
/// # Examples
///
/// ```
/// use ringdeque::deque::Deque;
///
/// let mut deque = Deque::new();
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
/// assert_eq!(deque, [0, 1, 2]);
///
/// assert_eq!(deque.pop_front(), Some(0));
/// assert_eq!(deque.at(0), Ok(&1));
/// assert!(deque.at(2).is_err());
/// ```
pub struct Deque<T> {
	buf: RawBuffer<T>,
	head: usize,
	tail: usize,
	len: usize,
}

impl<T: Default> Deque<T> {
	/// Creates a new, empty deque with the [initial capacity](INITIAL_CAPACITY).
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let deque: Deque<i32> = Deque::new();
	/// assert_eq!(deque.capacity(), 4);
	/// ```
	#[must_use]
	pub fn new() -> Self {
		Self::with_buffer(RawBuffer::new(INITIAL_CAPACITY))
	}

	/// Constructs a new, empty deque able to hold at least `capacity` elements without
	/// reallocating. The capacity is rounded up to a power of two, leaving room for the free slot.
	///
	/// # Panics
	///
	/// Panics if the capacity overflows [`usize`].
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque: Deque<i32> = Deque::with_capacity(10);
	/// assert_eq!(deque.capacity(), 16);
	///
	/// // These can be pushed without reallocating
	/// for i in 0..10 {
	///     deque.push_back(i);
	/// }
	/// assert_eq!(deque.capacity(), 16);
	/// ```
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		let slots = capacity.checked_add(1)
							.and_then(usize::checked_next_power_of_two)
							.expect("capacity overflow");
		Self::with_buffer(RawBuffer::new(slots.max(INITIAL_CAPACITY)))
	}

	fn with_buffer(buf: RawBuffer<T>) -> Self {
		Self { buf, head: 0, tail: 0, len: 0 }
	}

	/// Appends an element to the back of the deque, doubling the capacity first if the element
	/// would fill the last free slot.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::new();
	/// deque.push_back(1);
	/// deque.push_back(2);
	/// assert_eq!(deque.back(), Some(&2));
	/// ```
	pub fn push_back(&mut self, value: T) {
		self.grow_if_full();
		self.buf[self.tail] = value;
		self.tail = self.buf.wrap_add(self.tail, 1);
		self.len += 1;
	}

	/// Prepends an element to the front of the deque, doubling the capacity first if the element
	/// would fill the last free slot.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::new();
	/// deque.push_front(1);
	/// deque.push_front(2);
	/// assert_eq!(deque.front(), Some(&2));
	/// ```
	pub fn push_front(&mut self, value: T) {
		self.grow_if_full();
		self.head = self.buf.wrap_sub(self.head, 1);
		self.buf[self.head] = value;
		self.len += 1;
	}

	/// Removes the last element and returns it, or `None` if the deque is empty. The capacity is
	/// halved first if the deque is less than a quarter full.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::from([1, 2]);
	/// assert_eq!(deque.pop_back(), Some(2));
	/// assert_eq!(deque.pop_back(), Some(1));
	/// assert_eq!(deque.pop_back(), None);
	/// ```
	pub fn pop_back(&mut self) -> Option<T> {
		if self.is_empty() {
			return None
		}

		self.shrink_if_sparse();
		self.len -= 1;
		self.tail = self.buf.wrap_sub(self.tail, 1);
		Some(mem::take(&mut self.buf[self.tail]))
	}

	/// Removes the first element and returns it, or `None` if the deque is empty. The capacity is
	/// halved first if the deque is less than a quarter full.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::from([1, 2]);
	/// assert_eq!(deque.pop_front(), Some(1));
	/// assert_eq!(deque.pop_front(), Some(2));
	/// assert_eq!(deque.pop_front(), None);
	/// ```
	pub fn pop_front(&mut self) -> Option<T> {
		if self.is_empty() {
			return None
		}

		self.shrink_if_sparse();
		self.len -= 1;
		let value = mem::take(&mut self.buf[self.head]);
		self.head = self.buf.wrap_add(self.head, 1);
		Some(value)
	}

	/// Removes all elements, resetting the deque to its newly constructed state. The buffer is
	/// reallocated with the [initial capacity](INITIAL_CAPACITY).
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque: Deque<i32> = (0..100).collect();
	/// deque.clear();
	///
	/// assert!(deque.is_empty());
	/// assert_eq!(deque.capacity(), 4);
	/// ```
	pub fn clear(&mut self) {
		*self = Self::new();
	}

	/// Shortens the deque to `len` elements, dropping the rest from the back. Has no effect if the
	/// deque is already shorter.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::from([1, 2, 3, 4]);
	/// deque.truncate(1);
	/// assert_eq!(deque, [1]);
	/// ```
	pub fn truncate(&mut self, len: usize) {
		while self.len > len {
			self.pop_back();
		}
	}

	/// Shrinks the capacity to exactly one slot more than the length, if the deque holds more than
	/// [`INITIAL_CAPACITY`] elements and has more than one free slot. Smaller deques are left as
	/// they are.
	///
	/// The shrunk capacity need not be a power of two. Later pops keep halving it, so a deque
	/// emptied afterwards may settle anywhere from 4 to 7 slots rather than at [`INITIAL_CAPACITY`].
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::with_capacity(32);
	/// deque.extend(0..10);
	/// deque.shrink_to_fit();
	/// assert_eq!(deque.capacity(), 11);
	/// assert_eq!(deque, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
	/// ```
	pub fn shrink_to_fit(&mut self) {
		if self.len > INITIAL_CAPACITY && self.capacity() > self.len + 1 {
			self.realloc(self.len + 1);
		}
	}

	/// Rearranges the elements so they occupy one contiguous slice starting at the beginning of
	/// the buffer, returning that slice. The capacity is unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::new();
	/// deque.push_back(2);
	/// deque.push_front(1);
	/// assert_eq!(deque.make_contiguous(), [1, 2]);
	/// assert_eq!(deque.as_slices(), (&[1, 2][..], &[][..]));
	/// ```
	pub fn make_contiguous(&mut self) -> &mut [T] {
		if self.head != 0 {
			self.realloc(self.capacity());
		}
		&mut self.buf.as_mut_slice()[..self.len]
	}

	fn grow_if_full(&mut self) {
		if self.head == self.buf.wrap_add(self.tail, 1) {
			self.realloc(self.capacity() * 2);
		}
	}

	fn shrink_if_sparse(&mut self) {
		let capacity = self.capacity();
		if self.len < capacity / 4 && capacity >= INITIAL_CAPACITY * 2 {
			self.realloc(capacity / 2);
		}
	}

	/// Moves the elements into a new buffer of `capacity` slots, starting at slot `0`.
	fn realloc(&mut self, capacity: usize) {
		trace!(from = self.capacity(), to = capacity, len = self.len, "reallocating buffer");
		self.buf.repack(self.head, self.len, capacity);
		self.head = 0;
		self.tail = self.len;
	}
}

impl<T> Deque<T> {
	/// Returns the total number of slots in the buffer. The deque can hold one less element than
	/// this before it must grow.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::new();
	/// deque.extend([1, 2, 3]);
	/// assert_eq!(deque.capacity(), 4);
	/// deque.push_back(4);
	/// assert_eq!(deque.capacity(), 8);
	/// ```
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Returns the number of elements in the deque.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let deque = Deque::from([1, 2, 3]);
	/// assert_eq!(deque.len(), 3);
	/// ```
	pub fn len(&self) -> usize {
		self.len
	}
	/// Returns `true` if the deque contains no elements.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::new();
	/// assert!(deque.is_empty());
	///
	/// deque.push_back(1);
	/// assert!(!deque.is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns a pair of slices over the contents of the deque.
	///
	/// If the deque is contiguous, all elements will be in the first slice and the second will be
	/// empty.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::with_capacity(5);
	/// deque.push_back(0);
	/// deque.push_back(1);
	/// deque.push_back(2);
	///
	/// assert_eq!(deque.as_slices(), (&[0, 1, 2][..], &[][..]));
	///
	/// deque.push_front(10);
	/// deque.push_front(9);
	///
	/// assert_eq!(deque.as_slices(), (&[9, 10][..], &[0, 1, 2][..]));
	/// ```
	pub fn as_slices(&self) -> (&[T], &[T]) {
		self.buf.slices(self.head, self.len)
	}

	/// Returns a pair of mutable slices over the contents of the deque.
	///
	/// If the deque is contiguous, all elements will be in the first slice and the second will be
	/// empty.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::new();
	/// deque.push_back(0);
	/// deque.push_back(1);
	/// deque.push_front(10);
	///
	/// deque.as_mut_slices().0[0] = 42;
	/// deque.as_mut_slices().1[0] = 24;
	///
	/// assert_eq!(deque.as_slices(), (&[42][..], &[24, 1][..]));
	/// ```
	pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
		self.buf.slices_mut(self.head, self.len)
	}

	/// Returns a reference to the element at `index`, or `None` if the index is out of bounds.
	/// Index `0` is the front of the queue.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let deque = Deque::from([1, 2, 3]);
	/// assert_eq!(deque.get(1), Some(&2));
	/// assert_eq!(deque.get(3), None);
	/// ```
	pub fn get(&self, index: usize) -> Option<&T> {
		(index < self.len).then(|| &self.buf[self.buf.wrap_add(self.head, index)])
	}
	/// Returns a mutable reference to the element at `index`, or `None` if the index is out of
	/// bounds. Index `0` is the front of the queue.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::from([1, 2, 3]);
	/// if let Some(element) = deque.get_mut(1) {
	///     *element = 7;
	/// }
	/// assert_eq!(deque, [1, 7, 3]);
	/// ```
	pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
		if index >= self.len {
			return None
		}

		let index = self.buf.wrap_add(self.head, index);
		Some(&mut self.buf[index])
	}

	/// Returns a reference to the element at `index`. Index `0` is the front of the queue.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`], carrying the index and the current length, if the index is not less
	/// than the length.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let deque = Deque::from([1, 2]);
	/// assert_eq!(deque.at(1), Ok(&2));
	///
	/// let error = deque.at(2).unwrap_err();
	/// assert_eq!((error.index(), error.length()), (2, 2));
	/// ```
	pub fn at(&self, index: usize) -> Result<&T> {
		self.get(index).ok_or(OutOfRange::new(index, self.len))
	}
	/// Returns a mutable reference to the element at `index`. Index `0` is the front of the queue.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`], carrying the index and the current length, if the index is not less
	/// than the length.
	pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
		let len = self.len;
		self.get_mut(index).ok_or(OutOfRange::new(index, len))
	}

	/// Returns a reference to the front element, or `None` if the deque is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::from([1, 2, 3]);
	/// assert_eq!(deque.front(), Some(&1));
	/// deque.clear();
	/// assert_eq!(deque.front(), None);
	/// ```
	pub fn front(&self) -> Option<&T> {
		self.get(0)
	}
	/// Returns a reference to the back element, or `None` if the deque is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::from([1, 2, 3]);
	/// assert_eq!(deque.back(), Some(&3));
	/// deque.clear();
	/// assert_eq!(deque.back(), None);
	/// ```
	pub fn back(&self) -> Option<&T> {
		self.get(self.len.checked_sub(1)?)
	}
	/// Returns a mutable reference to the front element, or `None` if the deque is empty.
	pub fn front_mut(&mut self) -> Option<&mut T> {
		self.get_mut(0)
	}
	/// Returns a mutable reference to the back element, or `None` if the deque is empty.
	pub fn back_mut(&mut self) -> Option<&mut T> {
		self.get_mut(self.len.checked_sub(1)?)
	}

	/// Returns `true` if the deque contains an element equal to the given value.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let deque = Deque::from([0, 1]);
	/// assert!(deque.contains(&1));
	/// assert!(!deque.contains(&10));
	/// ```
	pub fn contains(&self, value: &T) -> bool
	where
		T: PartialEq
	{
		let (a, b) = self.as_slices();
		a.contains(value) || b.contains(value)
	}

	/// Swaps the elements at indices `i` and `j`.
	///
	/// # Panics
	///
	/// Panics if either index is out of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::from([1, 2, 3]);
	/// deque.swap(0, 2);
	/// assert_eq!(deque, [3, 2, 1]);
	/// ```
	pub fn swap(&mut self, i: usize, j: usize) {
		assert!(i < self.len, "swap index {i} out of bounds for length {}", self.len);
		assert!(j < self.len, "swap index {j} out of bounds for length {}", self.len);
		let i = self.buf.wrap_add(self.head, i);
		let j = self.buf.wrap_add(self.head, j);
		self.buf.as_mut_slice().swap(i, j);
	}

	/// Returns a front-to-back iterator.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let deque = Deque::from([5, 3, 4]);
	/// let mut iter = deque.iter();
	/// assert_eq!(iter.next(), Some(&5));
	/// assert_eq!(iter.next_back(), Some(&4));
	/// ```
	pub fn iter(&self) -> Iter<'_, T> {
		let (a, b) = self.as_slices();
		Iter::new(a.iter(), b.iter())
	}
	/// Returns a front-to-back iterator that returns mutable references.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let mut deque = Deque::from([5, 3, 4]);
	/// for num in deque.iter_mut() {
	///     *num -= 2;
	/// }
	/// assert_eq!(deque, [3, 1, 2]);
	/// ```
	pub fn iter_mut(&mut self) -> IterMut<'_, T> {
		let (a, b) = self.as_mut_slices();
		IterMut::new(a.iter_mut(), b.iter_mut())
	}

	/// Returns a cursor at the front element.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let deque = Deque::from([1, 2, 3]);
	/// let begin = deque.begin();
	/// assert_eq!(begin.get(), Some(&1));
	/// assert_eq!(deque.end() - begin, 3);
	/// ```
	pub fn begin(&self) -> Cursor<'_, T> {
		self.cursor_at(0)
	}
	/// Returns a cursor one position past the back element.
	///
	/// The end cursor is a sentinel: it compares and subtracts with other cursors, but doesn't
	/// dereference to an element.
	pub fn end(&self) -> Cursor<'_, T> {
		self.cursor_at(self.end_position())
	}
	/// Returns a reversed cursor at the back element.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::deque::Deque;
	///
	/// let deque = Deque::from([1, 2, 3]);
	/// let rbegin = deque.rbegin();
	/// assert_eq!(rbegin.get(), Some(&3));
	/// assert_eq!(rbegin[2], 1);
	/// ```
	pub fn rbegin(&self) -> Rev<Cursor<'_, T>> {
		Rev::new(self.end())
	}
	/// Returns a reversed cursor one position before the front element.
	pub fn rend(&self) -> Rev<Cursor<'_, T>> {
		Rev::new(self.begin())
	}

	/// Returns a mutable cursor at the front element.
	pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
		self.cursor_mut_at(0)
	}
	/// Returns a mutable cursor one position past the back element.
	pub fn end_mut(&mut self) -> CursorMut<'_, T> {
		let position = self.end_position();
		self.cursor_mut_at(position)
	}
	/// Returns a reversed mutable cursor at the back element.
	pub fn rbegin_mut(&mut self) -> Rev<CursorMut<'_, T>> {
		Rev::new(self.end_mut())
	}
	/// Returns a reversed mutable cursor one position before the front element.
	pub fn rend_mut(&mut self) -> Rev<CursorMut<'_, T>> {
		Rev::new(self.begin_mut())
	}

	fn end_position(&self) -> isize {
		// Slice lengths never exceed isize::MAX.
		self.len as isize
	}

	fn cursor_at(&self, position: isize) -> Cursor<'_, T> {
		Cursor::new(self.buf.as_slice(), self.head, self.tail, position)
	}

	fn cursor_mut_at(&mut self, position: isize) -> CursorMut<'_, T> {
		CursorMut::new(self.buf.as_mut_slice(), self.head, self.tail, position)
	}
}

impl<T: Default> Deque<T> {
	/// Packs the vector's elements from slot `0` of a buffer with `capacity` slots.
	fn packed(vec: Vec<T>, capacity: usize) -> Self {
		let len = vec.len();
		Self {
			buf: RawBuffer::from_vec(vec, capacity),
			head: 0,
			tail: len,
			len,
		}
	}

	/// The power-of-two capacity a converted collection of `len` elements is given.
	fn converted_capacity(len: usize) -> usize {
		(len + 1).next_power_of_two().max(INITIAL_CAPACITY)
	}
}

impl<T: Clone + Default> Clone for Deque<T> {
	/// Creates a deque holding clones of this deque's elements.
	///
	/// The clone is packed from the start of a new buffer with one free slot, or the initial
	/// capacity for short deques; the source's physical layout is not reproduced.
	fn clone(&self) -> Self {
		let capacity = (self.len + 1).max(INITIAL_CAPACITY);
		let mut vec = Vec::with_capacity(capacity);
		vec.extend(self.iter().cloned());
		Self::packed(vec, capacity)
	}
}

impl<T: Hash> Hash for Deque<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_usize(self.len);
		for v in self.iter() {
			Hash::hash(v, state);
		}
	}
}

impl<T> Index<usize> for Deque<T> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		self.get(index).expect("Out of bounds access")
	}
}

impl<T> IndexMut<usize> for Deque<T> {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		self.get_mut(index).expect("Out of bounds access")
	}
}

impl<T: Default> FromIterator<T> for Deque<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut deque = Self::new();
		deque.extend(iter);
		deque
	}
}

impl<T> IntoIterator for Deque<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	/// Consumes the deque into a front-to-back iterator yielding elements by value.
	fn into_iter(self) -> Self::IntoIter {
		IntoIter::new(Vec::from(self))
	}
}

impl<'a, T> IntoIterator for &'a Deque<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
	type Item = &'a mut T;
	type IntoIter = IterMut<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

impl<T: Default> Extend<T> for Deque<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.push_back(value);
		}
	}
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for Deque<T> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		self.extend(iter.into_iter().copied());
	}
}

impl<T: Eq> Eq for Deque<T> { }

impl<T: PartialOrd> PartialOrd for Deque<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.iter().partial_cmp(other.iter())
	}
}

impl<T: Ord> Ord for Deque<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.iter().cmp(other.iter())
	}
}

impl<T: Default> Default for Deque<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

// Contiguous collection conversions

impl<T: Default> From<Vec<T>> for Deque<T> {
	/// Creates a deque from a vector, reusing its allocation where the vector has room for the
	/// free slot. The capacity is rounded up to a power of two, as with [`Deque::with_capacity`].
	fn from(value: Vec<T>) -> Self {
		let capacity = Self::converted_capacity(value.len());
		Self::packed(value, capacity)
	}
}

impl<T: Default, const N: usize> From<[T; N]> for Deque<T> {
	fn from(value: [T; N]) -> Self {
		let mut vec = Vec::with_capacity(Self::converted_capacity(N));
		vec.extend(value);
		Self::from(vec)
	}
}

impl<T: Clone + Default> From<&[T]> for Deque<T> {
	fn from(value: &[T]) -> Self {
		let mut vec = Vec::with_capacity(Self::converted_capacity(value.len()));
		vec.extend_from_slice(value);
		Self::from(vec)
	}
}

impl<T: Default> From<VecDeque<T>> for Deque<T> {
	fn from(value: VecDeque<T>) -> Self {
		Self::from(Vec::from(value))
	}
}

impl<T> From<Deque<T>> for Vec<T> {
	/// Converts the deque into a vector of its elements, front to back, reusing the buffer.
	fn from(value: Deque<T>) -> Self {
		let Deque { buf, head, len, .. } = value;
		buf.into_vec(head, len)
	}
}

impl<T> From<Deque<T>> for VecDeque<T> {
	fn from(value: Deque<T>) -> Self {
		Vec::from(value).into()
	}
}
