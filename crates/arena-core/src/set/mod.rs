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

//! # Unique Intersection
//!
//! Deduplicated intersection of two sequences. Three strategies cover the
//! capability tiers an element type can have, and the caller (or the type
//! system) picks the most capable one available:
//!
//! - `equality`: `EqualityScan` for `T: PartialEq`. Pairwise comparison,
//!   `O(n * m)`, keeps the left input's order.
//! - `hashed`: `HashedIntersection` for `T: Eq + Hash`. Hash-set membership,
//!   expected `O(n + m)`, yields values in order of first appearance in the
//!   left input.
//! - `sorted`: `SortedIntersection` for `T: Ord + Hash`. The hashed result
//!   sorted ascending.
//!
//! All strategies implement `IntersectionStrategy<T>`, and `IntersectionMode`
//! names them at run time so that a fallback is never silent.

pub mod equality;
pub mod hashed;
pub mod sorted;
pub mod strategy;

pub use equality::EqualityScan;
pub use hashed::HashedIntersection;
pub use sorted::SortedIntersection;
pub use strategy::{IntersectionMode, IntersectionStrategy};

use std::hash::Hash;

/// Returns the values present in both inputs, without duplicates, sorted
/// ascending.
///
/// # Examples
///
/// ```rust
/// # use arena_core::set::unique_intersection;
///
/// assert_eq!(unique_intersection(&[1, 2, 2, 3], &[2, 2, 4]), vec![2]);
/// assert_eq!(unique_intersection(&["b", "a", "c"], &["c", "a"]), vec!["a", "c"]);
/// ```
#[inline]
pub fn unique_intersection<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Ord + Hash + Clone,
{
    SortedIntersection.intersect(left, right)
}

/// Returns the values present in both inputs, without duplicates, in order
/// of first appearance in `left`.
#[inline]
pub fn unique_intersection_hashed<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    HashedIntersection.intersect(left, right)
}

/// Returns the values present in both inputs, without duplicates, in order
/// of first appearance in `left`, using only equality comparisons.
#[inline]
pub fn unique_intersection_by_eq<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    EqualityScan.intersect(left, right)
}
