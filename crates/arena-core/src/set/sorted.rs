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

use crate::set::{
    hashed::HashedIntersection,
    strategy::{IntersectionMode, IntersectionStrategy},
};
use std::hash::Hash;

/// An intersection strategy producing an ascending result.
///
/// Computes the hashed intersection and sorts it. With a total order the
/// output is fully determined by the two inputs' value sets.
///
/// # Examples
///
/// ```rust
/// # use arena_core::set::{SortedIntersection, IntersectionStrategy};
///
/// assert_eq!(SortedIntersection.intersect(&[3, 1, 2, 3], &[3, 2]), vec![2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortedIntersection;

impl<T> IntersectionStrategy<T> for SortedIntersection
where
    T: Ord + Hash + Clone,
{
    fn name(&self) -> &str {
        "SortedIntersection"
    }

    fn mode(&self) -> IntersectionMode {
        IntersectionMode::Sorted
    }

    fn intersect(&self, left: &[T], right: &[T]) -> Vec<T> {
        let mut result = HashedIntersection.intersect(left, right);
        // Values are unique, so stability is irrelevant.
        result.sort_unstable();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_reference_case() {
        assert_eq!(
            SortedIntersection.intersect(&[1, 2, 2, 3], &[2, 2, 4]),
            vec![2]
        );
    }

    #[test]
    fn test_sorted_strings() {
        let left = vec!["delta".to_string(), "alpha".into(), "charlie".into()];
        let right = vec!["charlie".to_string(), "delta".into(), "alpha".into()];
        assert_eq!(
            SortedIntersection.intersect(&left, &right),
            vec!["alpha", "charlie", "delta"]
        );
    }

    #[test]
    fn test_random_inputs_satisfy_membership_uniqueness_and_order() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let left: Vec<u8> = (0..rng.random_range(0..40))
                .map(|_| rng.random_range(0..20))
                .collect();
            let right: Vec<u8> = (0..rng.random_range(0..40))
                .map(|_| rng.random_range(0..20))
                .collect();

            let result = SortedIntersection.intersect(&left, &right);

            assert!(result.iter().all(|v| left.contains(v) && right.contains(v)));
            assert!(result.windows(2).all(|w| w[0] < w[1]));
            let expected = (0..20u8)
                .filter(|v| left.contains(v) && right.contains(v))
                .count();
            assert_eq!(result.len(), expected);
        }
    }
}
