// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::{iter, mem};
use core::ops::{Index, IndexMut};

/// An owned block of initialized slots, addressed modulo its capacity.
///
/// The buffer knows nothing about which slots are live; callers pass the logical window as a
/// `(head, len)` pair.
pub(crate) struct RawBuffer<T> {
	slots: Box<[T]>,
}

impl<T: Default> RawBuffer<T> {
	/// Allocates a buffer with `capacity` default-initialized slots.
	pub fn new(capacity: usize) -> Self {
		Self {
			slots: iter::repeat_with(T::default).take(capacity).collect(),
		}
	}

	/// Creates a buffer from the contents of a vector, padded with default slots to `capacity`.
	pub fn from_vec(mut vec: Vec<T>, capacity: usize) -> Self {
		debug_assert!(vec.len() <= capacity, "vector should fit the requested capacity");
		vec.resize_with(capacity, T::default);
		Self { slots: vec.into_boxed_slice() }
	}

	/// Moves the `len` elements starting at physical slot `head` into a new buffer of
	/// `new_capacity` slots, starting at slot `0`. The old buffer is released.
	pub fn repack(&mut self, head: usize, len: usize, new_capacity: usize) {
		debug_assert!(len < new_capacity, "repacked elements should leave a free slot");
		let mut target = Self::new(new_capacity);
		for (i, slot) in target.slots[..len].iter_mut().enumerate() {
			let index = self.wrap_add(head, i);
			*slot = mem::take(&mut self.slots[index]);
		}
		*self = target;
	}
}

impl<T> RawBuffer<T> {
	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	/// Returns the physical index `n` slots after `index`.
	pub fn wrap_add(&self, index: usize, n: usize) -> usize {
		(index + n % self.capacity()) % self.capacity()
	}

	/// Returns the physical index `n` slots before `index`.
	pub fn wrap_sub(&self, index: usize, n: usize) -> usize {
		(index + self.capacity() - n % self.capacity()) % self.capacity()
	}

	pub fn as_slice(&self) -> &[T] {
		&self.slots
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.slots
	}

	/// Returns the window of `len` slots starting at `head` as a pair of slices, in logical order.
	pub fn slices(&self, head: usize, len: usize) -> (&[T], &[T]) {
		let (front, back) = self.ranges(head, len);
		(&self.slots[front], &self.slots[back])
	}

	/// Returns the window of `len` slots starting at `head` as a pair of mutable slices, in logical
	/// order.
	pub fn slices_mut(&mut self, head: usize, len: usize) -> (&mut [T], &mut [T]) {
		let (front, back) = self.ranges(head, len);
		// The window wraps at most once, so the back range always lies before the front range.
		let (wrapped, rest) = self.slots.split_at_mut(front.start);
		(&mut rest[..front.len()], &mut wrapped[back])
	}

	/// Consumes the buffer, returning the window of `len` slots starting at `head` as a vector.
	pub fn into_vec(self, head: usize, len: usize) -> Vec<T> {
		let mut vec = Vec::from(self.slots);
		vec.rotate_left(head);
		vec.truncate(len);
		vec
	}

	fn ranges(&self, head: usize, len: usize) -> (core::ops::Range<usize>, core::ops::Range<usize>) {
		let contiguous = self.capacity() - head;
		if len <= contiguous {
			(head..head + len, 0..0)
		} else {
			(head..self.capacity(), 0..len - contiguous)
		}
	}
}

impl<T> Index<usize> for RawBuffer<T> {
	type Output = T;

	fn index(&self, index: usize) -> &T {
		&self.slots[index]
	}
}

impl<T> IndexMut<usize> for RawBuffer<T> {
	fn index_mut(&mut self, index: usize) -> &mut T {
		&mut self.slots[index]
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec;
	use super::RawBuffer;

	fn wrapped() -> RawBuffer<i32> {
		// Logical window [1, 2, 3, 4] starting at slot 6 of 8.
		RawBuffer::from_vec(vec![3, 4, 0, 0, 0, 0, 1, 2], 8)
	}

	#[test]
	fn wrap_arithmetic() {
		let buf = RawBuffer::<u8>::new(8);
		assert_eq!(buf.wrap_add(6, 3), 1);
		assert_eq!(buf.wrap_add(0, 8), 0);
		assert_eq!(buf.wrap_sub(0, 1), 7);
		assert_eq!(buf.wrap_sub(2, 10), 0);
	}

	#[test]
	fn slices_split_at_the_wrap() {
		let mut buf = wrapped();
		assert_eq!(buf.slices(6, 4), (&[1, 2][..], &[3, 4][..]));
		assert_eq!(buf.slices(6, 2), (&[1, 2][..], &[][..]));
		assert_eq!(buf.slices(2, 0), (&[][..], &[][..]));

		let (front, back) = buf.slices_mut(6, 4);
		front[0] = 10;
		back[1] = 40;
		assert_eq!(buf.as_slice(), [3, 40, 0, 0, 0, 0, 10, 2]);
	}

	#[test]
	fn repack_moves_window_to_start() {
		let mut buf = wrapped();
		buf.repack(6, 4, 16);
		assert_eq!(buf.capacity(), 16);
		assert_eq!(&buf.as_slice()[..5], [1, 2, 3, 4, 0]);

		let mut buf = wrapped();
		buf.repack(6, 4, 5);
		assert_eq!(buf.as_slice(), [1, 2, 3, 4, 0]);
	}

	#[test]
	fn into_vec_keeps_logical_order() {
		assert_eq!(wrapped().into_vec(6, 4), [1, 2, 3, 4]);
		assert!(wrapped().into_vec(6, 0).is_empty());
	}
}
