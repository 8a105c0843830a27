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

use crate::set::strategy::{IntersectionMode, IntersectionStrategy};
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// An intersection strategy backed by hash sets.
///
/// Builds a set over `right`, then walks `left` once, keeping each value
/// that is in the set and has not been kept before. The result is in order
/// of first appearance in `left`.
///
/// # Examples
///
/// ```rust
/// # use arena_core::set::{HashedIntersection, IntersectionStrategy};
///
/// assert_eq!(
///     HashedIntersection.intersect(&["x", "b", "a", "b"], &["a", "b"]),
///     vec!["b", "a"]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashedIntersection;

impl<T> IntersectionStrategy<T> for HashedIntersection
where
    T: Eq + Hash + Clone,
{
    fn name(&self) -> &str {
        "HashedIntersection"
    }

    fn mode(&self) -> IntersectionMode {
        IntersectionMode::Hashed
    }

    fn intersect(&self, left: &[T], right: &[T]) -> Vec<T> {
        let right_set: FxHashSet<&T> = right.iter().collect();
        let mut seen: FxHashSet<&T> =
            FxHashSet::with_capacity_and_hasher(right_set.len(), Default::default());

        left.iter()
            .filter(|value| right_set.contains(value) && seen.insert(*value))
            .cloned()
            .collect()
    }
}
