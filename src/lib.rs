// Copyright 2024 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
	clippy::alloc_instead_of_core,
	clippy::as_underscore,
	clippy::assertions_on_result_states,
	clippy::decimal_literal_representation,
	clippy::deref_by_slicing,
	clippy::else_if_without_else,
	clippy::empty_structs_with_brackets,
	clippy::exhaustive_enums,
	clippy::if_then_some_else_none,
	clippy::impl_trait_in_params,
	clippy::infinite_loop,
	clippy::map_err_ignore,
	clippy::mem_forget,
	clippy::missing_assert_message,
	clippy::missing_errors_doc,
	clippy::missing_panics_doc,
	clippy::partial_pub_fields,
	clippy::redundant_type_annotations,
	clippy::ref_patterns,
	clippy::renamed_function_params,
	clippy::semicolon_inside_block,
	clippy::std_instead_of_alloc,
	clippy::std_instead_of_core,
	clippy::unwrap_used,
)]
#![forbid(unsafe_code)]

//! # `ringdeque`
//!
//! `ringdeque` provides [`Deque`], a double-ended queue stored in one contiguous circular buffer,
//! along with random-access [cursors] over it. Elements can be pushed and popped at either end in
//! amortized *O*(1) time, and any element can be reached by its logical index in *O*(1) time.
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | [`push_back`]/[`push_front`] | amortized *O*(1) | Doubles the capacity when one slot remains |
//! | [`pop_back`]/[`pop_front`]   | amortized *O*(1) | Halves the capacity when under a quarter full |
//! | [`at`]/[`get`]/indexing      | *O*(1)           | |
//! | [`shrink_to_fit`]            | *O*(n)           | Repacks into `len + 1` slots |
//! | [`clone`]                    | *O*(n)           | Repacks densely, see below |
//!
//! # Buffer Layout
//!
//! The buffer always keeps one slot free, so the head and tail positions only meet when the deque
//! is empty. Every reallocation moves the live elements to the start of the new buffer, leaving
//! the front element at slot `0`. Clones are laid out the same way: only the live contents are
//! copied, never the source's physical arrangement.
//!
//! # Cursors
//!
//! A [`Cursor`] is a position handle that can be moved by any signed offset, compared, subtracted
//! from another cursor, and dereferenced. Cursors borrow the deque, so a deque can't be resized
//! while any cursor into it is alive.
//!
//! ```
//! use ringdeque::prelude::*;
//!
//! let deque: Deque<i32> = Deque::from([1, 2, 3, 4]);
//! let begin = deque.begin();
//! let end = deque.end();
//! assert_eq!(end - begin, 4);
//! assert_eq!(begin[2], 3);
//! assert_eq!((begin + 3).get(), Some(&4));
//! ```
//!
//! # Features
//!
//! - `std`: links the standard library. The crate otherwise only depends on `core` and `alloc`.
//! - `tracing`: emits `trace`-level [`tracing`] events whenever the buffer is reallocated.
//!
//! [`Deque`]: deque::Deque
//! [cursors]: deque::cursor
//! [`Cursor`]: deque::cursor::Cursor
//! [`push_back`]: deque::Deque::push_back
//! [`push_front`]: deque::Deque::push_front
//! [`pop_back`]: deque::Deque::pop_back
//! [`pop_front`]: deque::Deque::pop_front
//! [`at`]: deque::Deque::at
//! [`get`]: deque::Deque::get
//! [`shrink_to_fit`]: deque::Deque::shrink_to_fit
//! [`clone`]: Clone::clone
//! [`tracing`]: https://docs.rs/tracing

extern crate alloc;

pub mod error;
mod macros;
pub mod deque;
mod raw;

pub use deque::INITIAL_CAPACITY;

pub mod prelude {
	pub use crate::error::OutOfRange;
	pub use crate::deque::{
		Deque,
		cursor::{Cursor, CursorMut, Rev, Seek},
	};
}
