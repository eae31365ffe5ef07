// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use super::Deque;

/// Compares a deque's halves against a contiguous slice, without collecting either side.
fn slices_eq<T: PartialEq<U>, U>((front, back): (&[T], &[T]), other: &[U]) -> bool {
	front.len() + back.len() == other.len() && {
		let (other_front, other_back) = other.split_at(front.len());
		front == other_front && back == other_back
	}
}

macro_rules! gen_eq {
	() => { };
	($lhs:ty, $rhs:ty;$($next:tt)*) => {
		gen_eq! { $lhs, $rhs [];$($next)* }
	};
	($lhs:ty, $rhs:ty [$($params:tt)*];$($next:tt)*) => {
		impl<T: PartialEq<U>, U, $($params)*> PartialEq<$rhs> for $lhs {
			fn eq(&self, other: &$rhs) -> bool {
				slices_eq(self.as_slices(), &other[..])
			}
		}
		gen_eq! { $($next)* }
	};
}

gen_eq! {
	Deque<T>, [U];
	Deque<T>, &[U];
	Deque<T>, &mut [U];
	Deque<T>, Vec<U>;
	Deque<T>, [U; N]      [const N: usize];
	Deque<T>, &[U; N]     [const N: usize];
	Deque<T>, &mut [U; N] [const N: usize];
}

impl<T: PartialEq<U>, U> PartialEq<Deque<U>> for Deque<T> {
	fn eq(&self, other: &Deque<U>) -> bool {
		self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
	}
}

impl<T: PartialEq<U>, U> PartialEq<VecDeque<U>> for Deque<T> {
	fn eq(&self, other: &VecDeque<U>) -> bool {
		self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
	}
}

#[cfg(test)]
mod tests {
	use alloc::collections::VecDeque;
	use alloc::vec;
	use crate::deque::Deque;

	#[test]
	fn wrapped_deque_equals_contiguous_collections() {
		let mut deque = Deque::new();
		deque.push_back(3);
		deque.push_front(2);
		deque.push_front(1);
		assert!(!deque.as_slices().1.is_empty(), "contents should wrap");

		assert_eq!(deque, [1, 2, 3]);
		assert_eq!(deque, &[1, 2, 3]);
		assert_eq!(deque, vec![1, 2, 3]);
		assert_eq!(deque, VecDeque::from([1, 2, 3]));
		assert_eq!(deque, Deque::from([1, 2, 3]));
		assert_eq!(deque, [1, 2, 3][..]);

		assert_ne!(deque, [1, 2]);
		assert_ne!(deque, [1, 2, 4]);
		assert_ne!(deque, Deque::from([1, 2, 3, 4]));
	}
}
