// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use alloc::vec::{self, Vec};
use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;

/// An owning front-to-back iterator over the elements of a [`Deque`].
///
/// The deque's buffer is rotated into logical order once, when the iterator is created.
///
/// [`Deque`]: super::Deque
pub struct IntoIter<T> {
	inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
	pub(super) fn new(elements: Vec<T>) -> Self {
		Self { inner: elements.into_iter() }
	}

	/// Returns the remaining elements as a slice.
	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}
}

impl<T: Clone> Clone for IntoIter<T> {
	fn clone(&self) -> Self {
		Self { inner: self.inner.clone() }
	}
}

impl<T: Debug> Debug for IntoIter<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter")
		 .field(&self.as_slice())
		 .finish()
	}
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		self.inner.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	fn count(self) -> usize {
		self.len()
	}

	fn last(mut self) -> Option<T> {
		self.next_back()
	}

	fn nth(&mut self, n: usize) -> Option<T> {
		self.inner.nth(n)
	}

	fn fold<B, F>(self, init: B, f: F) -> B
	where
		F: FnMut(B, Self::Item) -> B,
	{
		self.inner.fold(init, f)
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	fn next_back(&mut self) -> Option<T> {
		self.inner.next_back()
	}

	fn rfold<B, F>(self, init: B, f: F) -> B
	where
		F: FnMut(B, Self::Item) -> B,
	{
		self.inner.rfold(init, f)
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {
	fn len(&self) -> usize {
		self.inner.len()
	}
}

impl<T> FusedIterator for IntoIter<T> { }

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;
	use crate::deque::Deque;

	#[test]
	fn yields_wrapped_contents_in_order() {
		let mut deque = Deque::new();
		deque.push_back(3);
		deque.push_front(2);
		deque.push_front(1);
		let mut iter = deque.into_iter();
		assert_eq!(iter.len(), 3);
		assert_eq!(iter.as_slice(), [1, 2, 3]);
		assert_eq!(iter.next(), Some(1));
		assert_eq!(iter.next_back(), Some(3));
		assert_eq!(iter.clone().collect::<Vec<_>>(), [2]);
		assert_eq!(iter.last(), Some(2));
	}
}
