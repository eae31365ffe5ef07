// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use ringdeque::prelude::*;

const N: i32 = 4096;

fn bench_push(c: &mut Criterion) {
	let mut group = c.benchmark_group("VecDeque vs Deque (push both ends 4096)");
	group.bench_function("std::collections::VecDeque", |b| {
		b.iter(|| {
			let mut d = VecDeque::new();
			for i in 0..N {
				if i % 2 == 0 {
					d.push_back(black_box(i));
				} else {
					d.push_front(black_box(i));
				}
			}
			d
		})
	});

	group.bench_function("ringdeque::Deque", |b| {
		b.iter(|| {
			let mut d = Deque::new();
			for i in 0..N {
				if i % 2 == 0 {
					d.push_back(black_box(i));
				} else {
					d.push_front(black_box(i));
				}
			}
			d
		})
	});
	group.finish();
}

fn bench_pop(c: &mut Criterion) {
	let mut group = c.benchmark_group("VecDeque vs Deque (drain from front 4096)");
	let d_std: VecDeque<i32> = (0..N).collect();
	let d_ring: Deque<i32> = (0..N).collect();

	group.bench_function("std::collections::VecDeque", |b| {
		b.iter_batched(
			|| d_std.clone(),
			|mut d| {
				while let Some(v) = d.pop_front() {
					black_box(v);
				}
				d
			},
			criterion::BatchSize::SmallInput,
		)
	});

	group.bench_function("ringdeque::Deque", |b| {
		b.iter_batched(
			|| d_ring.clone(),
			|mut d| {
				while let Some(v) = d.pop_front() {
					black_box(v);
				}
				d
			},
			criterion::BatchSize::SmallInput,
		)
	});
	group.finish();
}

fn bench_random_access(c: &mut Criterion) {
	let mut group = c.benchmark_group("VecDeque vs Deque (get 4096)");
	let mut d_std = VecDeque::new();
	let mut d_ring = Deque::new();
	for i in 0..N {
		d_std.push_front(i);
		d_ring.push_front(i);
	}
	let len = d_std.len();

	group.bench_function("std::collections::VecDeque", |b| {
		b.iter(|| {
			for i in 0..len {
				black_box(d_std.get(black_box(i)));
			}
		})
	});

	group.bench_function("ringdeque::Deque", |b| {
		b.iter(|| {
			for i in 0..len {
				black_box(d_ring.get(black_box(i)));
			}
		})
	});

	group.bench_function("ringdeque::Cursor", |b| {
		b.iter(|| {
			let mut cursor = d_ring.begin();
			let end = d_ring.end();
			while cursor < end {
				black_box(cursor.get());
				cursor.move_next();
			}
		})
	});
	group.finish();
}

criterion_group!(benches, bench_push, bench_pop, bench_random_access);
criterion_main!(benches);
