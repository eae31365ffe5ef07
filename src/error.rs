// Copyright 2024 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T = (), E = OutOfRange> = core::result::Result<T, E>;

/// An error returned by checked access when the requested position is not less than the length of
/// the deque.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("position {index} is out of range for a deque of length {len}")]
pub struct OutOfRange {
	index: usize,
	len: usize,
}

impl OutOfRange {
	pub(crate) const fn new(index: usize, len: usize) -> Self {
		Self { index, len }
	}

	/// The requested position.
	pub const fn index(&self) -> usize {
		self.index
	}
	/// The length of the deque at the time of access.
	pub const fn length(&self) -> usize {
		self.len
	}
}
