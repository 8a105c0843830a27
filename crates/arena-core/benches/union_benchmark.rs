// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use arena_core::algorithm::union_length;
use arena_core::set::{EqualityScan, HashedIntersection, IntersectionStrategy, SortedIntersection};
use arena_core::text::is_palindrome;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_intervals(rng: &mut StdRng, n: usize) -> Vec<(i64, i64)> {
    let span = (n as i64) * 10;
    (0..n)
        .map(|_| {
            let a = rng.random_range(0..span);
            let b = a + rng.random_range(-20..20);
            (a, b)
        })
        .collect()
}

fn random_values(rng: &mut StdRng, n: usize) -> Vec<u32> {
    let range = (n as u32) * 2;
    (0..n).map(|_| rng.random_range(0..range)).collect()
}

fn bench_union_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_length");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &SIZES {
        let intervals = random_intervals(&mut rng, n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &intervals, |b, ivs| {
            b.iter(|| union_length(black_box(ivs.iter().copied())))
        });
    }
    group.finish();
}

fn bench_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection");
    let mut rng = StdRng::seed_from_u64(7);

    for &n in &SIZES {
        let left = random_values(&mut rng, n);
        let right = random_values(&mut rng, n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("sorted", n), &n, |b, _| {
            b.iter(|| SortedIntersection.intersect(black_box(&left), black_box(&right)))
        });
        group.bench_with_input(BenchmarkId::new("hashed", n), &n, |b, _| {
            b.iter(|| HashedIntersection.intersect(black_box(&left), black_box(&right)))
        });
        // Quadratic; keep it to the small sizes.
        if n <= 1_000 {
            group.bench_with_input(BenchmarkId::new("equality", n), &n, |b, _| {
                b.iter(|| EqualityScan.intersect(black_box(&left), black_box(&right)))
            });
        }
    }
    group.finish();
}

fn bench_palindrome(c: &mut Criterion) {
    let half = "Àé ïõ, ū! ".repeat(200);
    let text: String = half.chars().chain(half.chars().rev()).collect();

    c.bench_function("is_palindrome/accented_4k", |b| {
        b.iter(|| is_palindrome(black_box(&text)))
    });
}

criterion_group!(benches, bench_union_length, bench_intersection, bench_palindrome);
criterion_main!(benches);
