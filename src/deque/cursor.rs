// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Random-access cursors over a [`Deque`].
//!
//! A cursor is a signed logical position, counted from the front of the deque, paired with a
//! snapshot of the deque's head and tail taken when the cursor was created. Moving a cursor never
//! touches the deque, and cursors may be moved anywhere, including before the front or past the
//! back; only dereferencing checks that the position names a live element.
//!
//! [`Cursor`] reads elements, [`CursorMut`] reads and writes them, and [`Rev`] wraps either one to
//! walk the deque back to front. All of them implement [`Seek`] and the offset operators (`+`, `-`,
//! `+=`, `-=` with [`isize`]), subtract to a signed distance, and order by position.
//!
//! # Examples
//!
//! ```
//! use ringdeque::prelude::*;
//!
//! let deque = Deque::from([10, 20, 30, 40, 50]);
//!
//! // Visit every second element.
//! let mut cursor = deque.begin();
//! let mut visited = Vec::new();
//! while cursor < deque.end() {
//!     visited.push(cursor[0]);
//!     cursor += 2;
//! }
//! assert_eq!(visited, [10, 30, 50]);
//!
//! // Walk backwards with a reversed cursor.
//! let mut rev = deque.rbegin();
//! assert_eq!(rev.get(), Some(&50));
//! rev.move_next();
//! assert_eq!(rev.get(), Some(&40));
//! assert_eq!(deque.rend() - rev, 4);
//! ```
//!
//! [`Deque`]: super::Deque

use core::fmt;
use core::ops::{Index, IndexMut};
use crate::macros::seek_ops;

/// Movement by signed offsets, shared by all cursor types.
pub trait Seek {
	/// Returns the logical position of the cursor.
	fn position(&self) -> isize;

	/// Moves the cursor by `offset` positions. The position is not clamped.
	fn seek(&mut self, offset: isize);

	/// Moves the cursor one position forward, returning it.
	fn move_next(&mut self) -> &mut Self where Self: Sized {
		self.seek(1);
		self
	}

	/// Moves the cursor one position back, returning it.
	fn move_prev(&mut self) -> &mut Self where Self: Sized {
		self.seek(-1);
		self
	}

	/// Moves the cursor one position forward, returning a copy of the cursor from before the move.
	fn post_next(&mut self) -> Self where Self: Clone {
		let prior = self.clone();
		self.seek(1);
		prior
	}

	/// Moves the cursor one position back, returning a copy of the cursor from before the move.
	fn post_prev(&mut self) -> Self where Self: Clone {
		let prior = self.clone();
		self.seek(-1);
		prior
	}

	/// Returns the signed number of positions from `origin` to this cursor.
	fn distance(&self, origin: &Self) -> isize where Self: Sized {
		self.position() - origin.position()
	}
}

/// Maps a logical position to a physical slot, or `None` if the position is outside the live
/// window `head..tail`.
fn slot(head: usize, tail: usize, capacity: usize, position: isize) -> Option<usize> {
	let len = (tail + capacity - head) % capacity;
	let position = usize::try_from(position).ok()?;
	(position < len).then(|| (head + position) % capacity)
}

/// A read-only random-access cursor.
///
/// Created by [`Deque::begin`] and [`Deque::end`].
///
/// [`Deque::begin`]: super::Deque::begin
/// [`Deque::end`]: super::Deque::end
pub struct Cursor<'a, T> {
	buf: &'a [T],
	head: usize,
	tail: usize,
	position: isize,
}

impl<'a, T> Cursor<'a, T> {
	pub(crate) fn new(buf: &'a [T], head: usize, tail: usize, position: isize) -> Self {
		Self { buf, head, tail, position }
	}

	/// Returns a reference to the element under the cursor, or `None` if the cursor is outside the
	/// deque.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::prelude::*;
	///
	/// let deque = Deque::from([1, 2]);
	/// assert_eq!(deque.begin().get(), Some(&1));
	/// assert_eq!(deque.end().get(), None);
	/// ```
	pub fn get(&self) -> Option<&'a T> {
		self.peek(0)
	}

	/// Returns a reference to the element `offset` positions from the cursor, or `None` if that
	/// position is outside the deque.
	///
	/// # Examples
	///
	/// ```
	/// use ringdeque::prelude::*;
	///
	/// let deque = Deque::from([1, 2, 3]);
	/// let cursor = deque.begin() + 1;
	/// assert_eq!(cursor.peek(1), Some(&3));
	/// assert_eq!(cursor.peek(-1), Some(&1));
	/// assert_eq!(cursor.peek(-2), None);
	/// ```
	pub fn peek(&self, offset: isize) -> Option<&'a T> {
		let buf = self.buf;
		let index = slot(self.head, self.tail, buf.len(), self.position.checked_add(offset)?)?;
		Some(&buf[index])
	}
}

impl<T> Seek for Cursor<'_, T> {
	fn position(&self) -> isize {
		self.position
	}

	fn seek(&mut self, offset: isize) {
		self.position += offset;
	}
}

impl<T> Clone for Cursor<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Cursor<'_, T> { }

impl<T> fmt::Debug for Cursor<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Cursor")
		 .field("position", &self.position)
		 .field("head", &self.head)
		 .field("tail", &self.tail)
		 .field("capacity", &self.buf.len())
		 .finish()
	}
}

impl<T> Index<isize> for Cursor<'_, T> {
	type Output = T;

	fn index(&self, offset: isize) -> &T {
		self.peek(offset).expect("cursor offset out of bounds")
	}
}

/// A random-access cursor allowing modification of the element under it.
///
/// Created by [`Deque::begin_mut`] and [`Deque::end_mut`]. Only one mutable cursor into a deque
/// can exist at a time.
///
/// # Examples
///
/// ```
/// use ringdeque::prelude::*;
///
/// let mut deque = Deque::from([1, 2, 3]);
/// let mut cursor = deque.begin_mut();
/// while let Some(element) = cursor.get_mut() {
///     *element *= 10;
///     cursor.move_next();
/// }
/// assert_eq!(deque, [10, 20, 30]);
/// ```
///
/// [`Deque::begin_mut`]: super::Deque::begin_mut
/// [`Deque::end_mut`]: super::Deque::end_mut
pub struct CursorMut<'a, T> {
	buf: &'a mut [T],
	head: usize,
	tail: usize,
	position: isize,
}

impl<'a, T> CursorMut<'a, T> {
	pub(crate) fn new(buf: &'a mut [T], head: usize, tail: usize, position: isize) -> Self {
		Self { buf, head, tail, position }
	}

	/// Returns a read-only cursor at the same position, borrowing this cursor.
	pub fn as_cursor(&self) -> Cursor<'_, T> {
		Cursor::new(&*self.buf, self.head, self.tail, self.position)
	}

	/// Returns a reference to the element under the cursor, or `None` if the cursor is outside the
	/// deque.
	pub fn get(&self) -> Option<&T> {
		self.peek(0)
	}

	/// Returns a mutable reference to the element under the cursor, or `None` if the cursor is
	/// outside the deque.
	pub fn get_mut(&mut self) -> Option<&mut T> {
		self.peek_mut(0)
	}

	/// Consumes the cursor, returning a mutable reference to the element under it for the full
	/// lifetime of the deque borrow, or `None` if the cursor is outside the deque.
	pub fn into_mut(self) -> Option<&'a mut T> {
		let index = slot(self.head, self.tail, self.buf.len(), self.position)?;
		let buf = self.buf;
		Some(&mut buf[index])
	}

	/// Returns a reference to the element `offset` positions from the cursor, or `None` if that
	/// position is outside the deque.
	pub fn peek(&self, offset: isize) -> Option<&T> {
		let index = slot(self.head, self.tail, self.buf.len(), self.position.checked_add(offset)?)?;
		Some(&self.buf[index])
	}

	/// Returns a mutable reference to the element `offset` positions from the cursor, or `None` if
	/// that position is outside the deque.
	pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
		let index = slot(self.head, self.tail, self.buf.len(), self.position.checked_add(offset)?)?;
		Some(&mut self.buf[index])
	}
}

impl<T> Seek for CursorMut<'_, T> {
	fn position(&self) -> isize {
		self.position
	}

	fn seek(&mut self, offset: isize) {
		self.position += offset;
	}
}

impl<T> fmt::Debug for CursorMut<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CursorMut")
		 .field("position", &self.position)
		 .field("head", &self.head)
		 .field("tail", &self.tail)
		 .field("capacity", &self.buf.len())
		 .finish()
	}
}

impl<T> Index<isize> for CursorMut<'_, T> {
	type Output = T;

	fn index(&self, offset: isize) -> &T {
		self.peek(offset).expect("cursor offset out of bounds")
	}
}

impl<T> IndexMut<isize> for CursorMut<'_, T> {
	fn index_mut(&mut self, offset: isize) -> &mut T {
		self.peek_mut(offset).expect("cursor offset out of bounds")
	}
}

/// A cursor walking the deque from back to front.
///
/// A reversed cursor wraps a base cursor and dereferences the element *before* its base, so
/// [`Deque::rbegin`] wraps the end cursor and [`Deque::rend`] wraps the begin cursor. Moving the
/// reversed cursor forward moves its base backward, and its position is the negated base position,
/// keeping ordering and distances consistent with the direction of travel.
///
/// [`Deque::rbegin`]: super::Deque::rbegin
/// [`Deque::rend`]: super::Deque::rend
#[derive(Copy, Clone, Debug)]
pub struct Rev<C> {
	base: C,
}

impl<C> Rev<C> {
	/// Creates a reversed cursor from a base cursor.
	pub fn new(base: C) -> Self {
		Self { base }
	}

	/// Returns a reference to the base cursor.
	pub fn base(&self) -> &C {
		&self.base
	}

	/// Consumes the reversed cursor, returning the base cursor.
	pub fn into_base(self) -> C {
		self.base
	}
}

impl<C: Seek> Seek for Rev<C> {
	fn position(&self) -> isize {
		-self.base.position()
	}

	fn seek(&mut self, offset: isize) {
		self.base.seek(-offset);
	}
}

/// The base offset of the element `offset` positions from a reversed cursor.
fn rev_offset(offset: isize) -> Option<isize> {
	(-1isize).checked_sub(offset)
}

impl<'a, T> Rev<Cursor<'a, T>> {
	/// Returns a reference to the element under the cursor, or `None` if the cursor is outside the
	/// deque.
	pub fn get(&self) -> Option<&'a T> {
		self.peek(0)
	}

	/// Returns a reference to the element `offset` positions from the cursor, in the reversed
	/// direction, or `None` if that position is outside the deque.
	pub fn peek(&self, offset: isize) -> Option<&'a T> {
		self.base.peek(rev_offset(offset)?)
	}
}

impl<'a, T> Rev<CursorMut<'a, T>> {
	/// Returns a reference to the element under the cursor, or `None` if the cursor is outside the
	/// deque.
	pub fn get(&self) -> Option<&T> {
		self.peek(0)
	}

	/// Returns a mutable reference to the element under the cursor, or `None` if the cursor is
	/// outside the deque.
	pub fn get_mut(&mut self) -> Option<&mut T> {
		self.peek_mut(0)
	}

	/// Consumes the cursor, returning a mutable reference to the element under it, or `None` if
	/// the cursor is outside the deque.
	pub fn into_mut(mut self) -> Option<&'a mut T> {
		self.base.seek(-1);
		self.base.into_mut()
	}

	/// Returns a reference to the element `offset` positions from the cursor, in the reversed
	/// direction, or `None` if that position is outside the deque.
	pub fn peek(&self, offset: isize) -> Option<&T> {
		self.base.peek(rev_offset(offset)?)
	}

	/// Returns a mutable reference to the element `offset` positions from the cursor, in the
	/// reversed direction, or `None` if that position is outside the deque.
	pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
		self.base.peek_mut(rev_offset(offset)?)
	}
}

impl<T> Index<isize> for Rev<Cursor<'_, T>> {
	type Output = T;

	fn index(&self, offset: isize) -> &T {
		self.peek(offset).expect("cursor offset out of bounds")
	}
}

impl<T> Index<isize> for Rev<CursorMut<'_, T>> {
	type Output = T;

	fn index(&self, offset: isize) -> &T {
		self.peek(offset).expect("cursor offset out of bounds")
	}
}

impl<T> IndexMut<isize> for Rev<CursorMut<'_, T>> {
	fn index_mut(&mut self, offset: isize) -> &mut T {
		self.peek_mut(offset).expect("cursor offset out of bounds")
	}
}

seek_ops! {
	Cursor<'a, T> ['a, T];
	CursorMut<'a, T> ['a, T];
	Rev<C> [C: Seek];
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;
	use crate::deque::Deque;
	use super::Seek;

	/// A deque whose contents wrap around the end of its buffer.
	fn wrapped() -> Deque<i32> {
		let mut deque = Deque::new();
		deque.push_back(2);
		deque.push_back(3);
		deque.push_front(1);
		deque.push_front(0);
		deque.push_back(4);
		deque.push_back(5);
		deque.push_front(-1);
		assert!(!deque.as_slices().1.is_empty(), "contents should wrap");
		deque
	}

	#[test]
	fn forward_traversal() {
		let deque = wrapped();
		let mut cursor = deque.begin();
		let mut visited = Vec::new();
		while cursor != deque.end() {
			visited.push(*cursor.get().expect("cursor should be in bounds"));
			cursor.move_next();
		}
		assert_eq!(visited, [-1, 0, 1, 2, 3, 4, 5]);
		assert_eq!(cursor.get(), None);
	}

	#[test]
	fn reverse_traversal() {
		let deque = wrapped();
		let mut cursor = deque.rbegin();
		let mut visited = Vec::new();
		while cursor < deque.rend() {
			visited.push(cursor[0]);
			cursor += 1;
		}
		assert_eq!(visited, [5, 4, 3, 2, 1, 0, -1]);
		assert!(cursor == deque.rend());
	}

	#[test]
	fn offset_arithmetic() {
		let deque = wrapped();
		let begin = deque.begin();
		for d in 0..7 {
			assert_eq!((begin + d) - begin, d);
			assert_eq!((d + begin).position(), d);
			assert_eq!(begin[d], *(begin + d).get().expect("offset should be in bounds"));
		}
		assert_eq!(deque.end() - deque.begin(), 7);
		assert_eq!(deque.begin() - deque.end(), -7);
		assert_eq!((deque.end() - 7).get(), Some(&-1));
		assert_eq!(deque.begin().distance(&deque.end()), -7);
	}

	#[test]
	fn increment_forms() {
		let deque = wrapped();
		let mut cursor = deque.begin();
		let prior = cursor.post_next();
		assert_eq!(prior.position(), 0);
		assert_eq!(cursor.position(), 1);
		assert_eq!(cursor.move_next().position(), 2);

		let prior = cursor.post_prev();
		assert_eq!(prior.position(), 2);
		assert_eq!(cursor.move_prev().position(), 0);
	}

	#[test]
	fn out_of_bounds_positions() {
		let deque = wrapped();
		let before = deque.begin() - 1;
		assert!(before < deque.begin());
		assert_eq!(before.get(), None);
		assert_eq!(before.peek(1), Some(&-1));
		assert_eq!((deque.end() + 100).get(), None);
		assert_eq!(deque.begin().peek(isize::MAX), None);
	}

	#[test]
	#[should_panic = "cursor offset out of bounds"]
	fn index_past_end_panics() {
		let deque = wrapped();
		let end = deque.end();
		let _ = end[0];
	}

	#[test]
	fn ordering_compares_positions() {
		let deque = wrapped();
		let a = deque.begin() + 2;
		let b = deque.begin() + 5;
		assert!(a < b);
		assert!(b >= a);
		assert_eq!(a.max(b), b);

		let ra = deque.rbegin() + 2;
		let rb = deque.rbegin() + 5;
		assert!(ra < rb);
		assert_eq!(rb - ra, 3);
		assert_eq!(ra.get(), Some(&3));
		assert_eq!(rb.get(), Some(&0));
	}

	#[test]
	fn empty_deque_cursors() {
		let deque = Deque::<u8>::new();
		assert!(deque.begin() == deque.end());
		assert!(deque.rbegin() == deque.rend());
		assert_eq!(deque.begin().get(), None);
		assert_eq!(deque.rbegin().get(), None);
	}

	#[test]
	fn mutable_cursor_writes() {
		let mut deque = wrapped();
		let mut cursor = deque.begin_mut() + 3;
		cursor[0] = 20;
		cursor[-3] = -10;
		*cursor.peek_mut(3).expect("offset should be in bounds") = 50;
		assert_eq!(cursor.as_cursor().get(), Some(&20));
		assert_eq!(deque, [-10, 0, 1, 20, 3, 4, 50]);

		let mut rev = deque.rbegin_mut();
		*rev.get_mut().expect("deque should not be empty") = 500;
		rev += 1;
		rev[0] = 400;
		let last = (rev + 5).into_mut().expect("offset should be in bounds");
		*last = -100;
		assert_eq!(deque, [-100, 0, 1, 20, 3, 400, 500]);

		let front = deque.begin_mut().into_mut().expect("deque should not be empty");
		*front = 7;
		assert_eq!(deque.front(), Some(&7));
	}
}
