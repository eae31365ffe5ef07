// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

/// Emits a `trace`-level event when the `tracing` feature is enabled, and nothing otherwise. The
/// arguments are not evaluated without the feature.
macro_rules! trace {
	($($args:tt)*) => {
		#[cfg(feature = "tracing")]
		{
			tracing::trace!(target: "ringdeque::deque", $($args)*);
		}
	};
}

/// Implements the arithmetic and ordering operators of a cursor type in terms of its [`Seek`]
/// implementation.
///
/// [`Seek`]: crate::deque::cursor::Seek
macro_rules! seek_ops {
	() => { };
	($ty:ty [$($params:tt)+];$($next:tt)*) => {
		impl<$($params)+> core::ops::AddAssign<isize> for $ty {
			fn add_assign(&mut self, offset: isize) {
				$crate::deque::cursor::Seek::seek(self, offset);
			}
		}

		impl<$($params)+> core::ops::SubAssign<isize> for $ty {
			fn sub_assign(&mut self, offset: isize) {
				$crate::deque::cursor::Seek::seek(self, -offset);
			}
		}

		impl<$($params)+> core::ops::Add<isize> for $ty {
			type Output = Self;

			fn add(mut self, offset: isize) -> Self {
				self += offset;
				self
			}
		}

		impl<$($params)+> core::ops::Add<$ty> for isize {
			type Output = $ty;

			fn add(self, cursor: $ty) -> $ty {
				cursor + self
			}
		}

		impl<$($params)+> core::ops::Sub<isize> for $ty {
			type Output = Self;

			fn sub(mut self, offset: isize) -> Self {
				self -= offset;
				self
			}
		}

		impl<$($params)+> core::ops::Sub for $ty {
			type Output = isize;

			fn sub(self, other: Self) -> isize {
				$crate::deque::cursor::Seek::distance(&self, &other)
			}
		}

		impl<$($params)+> PartialEq for $ty {
			fn eq(&self, other: &Self) -> bool {
				use $crate::deque::cursor::Seek;
				self.position() == other.position()
			}
		}

		impl<$($params)+> Eq for $ty { }

		impl<$($params)+> PartialOrd for $ty {
			fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		impl<$($params)+> Ord for $ty {
			fn cmp(&self, other: &Self) -> core::cmp::Ordering {
				use $crate::deque::cursor::Seek;
				self.position().cmp(&other.position())
			}
		}

		seek_ops! { $($next)* }
	};
}

pub(crate) use {seek_ops, trace};
