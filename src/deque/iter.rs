// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Borrowing iterators over the two halves of a deque's ring buffer.
//!
//! Both iterators walk the `front` half, then the `back` half. Once one end runs out of its half,
//! the halves are swapped so that whatever remains is always found in `front` going forward, and
//! in `back` going backward.

use core::{fmt, mem, slice};
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

/// A front-to-back iterator over references to the elements of a [`Deque`].
///
/// [`Deque`]: super::Deque
pub struct Iter<'a, T: 'a> {
	front: slice::Iter<'a, T>,
	back: slice::Iter<'a, T>,
}

impl<'a, T: 'a> Iter<'a, T> {
	pub(super) fn new(front: slice::Iter<'a, T>, back: slice::Iter<'a, T>) -> Self {
		Self { front, back }
	}

	/// Returns the elements not yet yielded as a pair of slices, in order.
	pub fn as_slices(&self) -> (&'a [T], &'a [T]) {
		(self.front.as_slice(), self.back.as_slice())
	}
}

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Self {
			front: self.front.clone(),
			back: self.back.clone(),
		}
	}
}

impl<T: Debug> Debug for Iter<'_, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let (front, back) = self.as_slices();
		f.debug_tuple("Iter")
		 .field(&front)
		 .field(&back)
		 .finish()
	}
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<&'a T> {
		if let Some(element) = self.front.next() {
			return Some(element)
		}

		mem::swap(&mut self.front, &mut self.back);
		self.front.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}

	fn nth(&mut self, n: usize) -> Option<&'a T> {
		let skip = self.front.len();
		if n < skip {
			return self.front.nth(n)
		}

		self.front = mem::take(&mut self.back);
		self.front.nth(n - skip)
	}

	fn last(mut self) -> Option<&'a T> {
		self.next_back()
	}

	fn fold<Acc, F>(self, init: Acc, mut f: F) -> Acc
	where
		F: FnMut(Acc, Self::Item) -> Acc,
	{
		let accum = self.front.fold(init, &mut f);
		self.back.fold(accum, &mut f)
	}
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
	fn next_back(&mut self) -> Option<&'a T> {
		if let Some(element) = self.back.next_back() {
			return Some(element)
		}

		mem::swap(&mut self.front, &mut self.back);
		self.back.next_back()
	}

	fn rfold<Acc, F>(self, init: Acc, mut f: F) -> Acc
	where
		F: FnMut(Acc, Self::Item) -> Acc,
	{
		let accum = self.back.rfold(init, &mut f);
		self.front.rfold(accum, &mut f)
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {
	fn len(&self) -> usize {
		self.front.len() + self.back.len()
	}
}

impl<T> FusedIterator for Iter<'_, T> { }

/// A front-to-back iterator over mutable references to the elements of a [`Deque`].
///
/// [`Deque`]: super::Deque
pub struct IterMut<'a, T: 'a> {
	front: slice::IterMut<'a, T>,
	back: slice::IterMut<'a, T>,
}

impl<'a, T: 'a> IterMut<'a, T> {
	pub(super) fn new(front: slice::IterMut<'a, T>, back: slice::IterMut<'a, T>) -> Self {
		Self { front, back }
	}

	/// Consumes the iterator, returning the elements not yet yielded as a pair of mutable slices,
	/// in order. The slices borrow the deque for the iterator's full lifetime.
	pub fn into_slices(self) -> (&'a mut [T], &'a mut [T]) {
		(self.front.into_slice(), self.back.into_slice())
	}

	/// Returns the elements not yet yielded as a pair of slices, in order.
	pub fn as_slices(&self) -> (&[T], &[T]) {
		(self.front.as_slice(), self.back.as_slice())
	}
}

impl<T: Debug> Debug for IterMut<'_, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let (front, back) = self.as_slices();
		f.debug_tuple("IterMut")
		 .field(&front)
		 .field(&back)
		 .finish()
	}
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
	type Item = &'a mut T;

	fn next(&mut self) -> Option<&'a mut T> {
		if let Some(element) = self.front.next() {
			return Some(element)
		}

		mem::swap(&mut self.front, &mut self.back);
		self.front.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}

	fn last(mut self) -> Option<&'a mut T> {
		self.next_back()
	}

	fn fold<Acc, F>(self, init: Acc, mut f: F) -> Acc
	where
		F: FnMut(Acc, Self::Item) -> Acc,
	{
		let accum = self.front.fold(init, &mut f);
		self.back.fold(accum, &mut f)
	}
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
	fn next_back(&mut self) -> Option<&'a mut T> {
		if let Some(element) = self.back.next_back() {
			return Some(element)
		}

		mem::swap(&mut self.front, &mut self.back);
		self.back.next_back()
	}

	fn rfold<Acc, F>(self, init: Acc, mut f: F) -> Acc
	where
		F: FnMut(Acc, Self::Item) -> Acc,
	{
		let accum = self.back.rfold(init, &mut f);
		self.front.rfold(accum, &mut f)
	}
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
	fn len(&self) -> usize {
		self.front.len() + self.back.len()
	}
}

impl<T> FusedIterator for IterMut<'_, T> { }

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;
	use crate::deque::Deque;

	/// `[0, 1, 2, 3, 4]`, split across the end of the buffer after the first two elements.
	fn wrapped() -> Deque<i32> {
		let mut deque = Deque::with_capacity(7);
		deque.extend([2, 3, 4]);
		deque.push_front(1);
		deque.push_front(0);
		assert_eq!(deque.as_slices(), (&[0, 1][..], &[2, 3, 4][..]));
		deque
	}

	#[test]
	fn meets_in_the_middle() {
		let deque = wrapped();
		let mut iter = deque.iter();
		assert_eq!(iter.next(), Some(&0));
		assert_eq!(iter.next_back(), Some(&4));
		assert_eq!(iter.next_back(), Some(&3));
		assert_eq!(iter.next_back(), Some(&2));
		assert_eq!(iter.len(), 1);
		assert_eq!(iter.as_slices(), (&[1][..], &[][..]));
		assert_eq!(iter.next_back(), Some(&1));
		assert_eq!(iter.next(), None);
		assert_eq!(iter.next_back(), None);
	}

	#[test]
	fn nth_crosses_halves() {
		let deque = wrapped();
		let mut iter = deque.iter();
		assert_eq!(iter.nth(3), Some(&3));
		assert_eq!(iter.next(), Some(&4));
		assert_eq!(iter.nth(0), None);

		let mut iter = deque.iter();
		assert_eq!(iter.nth(1), Some(&1));
		assert_eq!(iter.nth(10), None);
		assert_eq!(iter.len(), 0);
	}

	#[test]
	fn folds_visit_both_halves() {
		let deque = wrapped();
		assert_eq!(deque.iter().fold(0, |acc, v| acc * 10 + v), 1234);
		assert_eq!(deque.iter().rfold(0, |acc, v| acc * 10 + v), 43210);
		assert_eq!(deque.iter().last(), Some(&4));
	}

	#[test]
	fn mutable_iteration_from_both_ends() {
		let mut deque = wrapped();
		let mut iter = deque.iter_mut();
		*iter.next_back().expect("iterator should not be empty") = 40;
		*iter.next().expect("iterator should not be empty") = 10;
		let (front, back) = iter.into_slices();
		front[0] = 11;
		back[0] = 22;
		assert_eq!(deque, [10, 11, 22, 3, 40]);

		let doubled: Vec<i32> = deque.iter_mut().rev().map(|v| *v * 2).collect();
		assert_eq!(doubled, [80, 6, 44, 22, 20]);
	}
}
