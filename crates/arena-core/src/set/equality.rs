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

/// An intersection strategy that needs nothing but equality.
///
/// For each value of `left`, in order, the value is kept if it equals some
/// value of `right` and no equal value has been kept already. This works for
/// any `PartialEq` type (floats, JSON values, nested collections) at the cost
/// of `O(n * m)` comparisons.
///
/// # Examples
///
/// ```rust
/// # use arena_core::set::{EqualityScan, IntersectionStrategy};
///
/// let left = vec![vec![3], vec![1], vec![3], vec![2]];
/// let right = vec![vec![2], vec![3]];
/// assert_eq!(EqualityScan.intersect(&left, &right), vec![vec![3], vec![2]]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualityScan;

impl<T> IntersectionStrategy<T> for EqualityScan
where
    T: PartialEq + Clone,
{
    fn name(&self) -> &str {
        "EqualityScan"
    }

    fn mode(&self) -> IntersectionMode {
        IntersectionMode::EqualityScan
    }

    fn intersect(&self, left: &[T], right: &[T]) -> Vec<T> {
        let mut result: Vec<T> = Vec::new();
        for value in left {
            if right.iter().any(|r| r == value) && !result.iter().any(|kept| kept == value) {
                result.push(value.clone());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_mode() {
        let s = EqualityScan;
        assert_eq!(IntersectionStrategy::<i32>::name(&s), "EqualityScan");
        assert_eq!(
            IntersectionStrategy::<i32>::mode(&s),
            IntersectionMode::EqualityScan
        );
    }

    #[test]
    fn test_reference_case() {
        assert_eq!(EqualityScan.intersect(&[1, 2, 2, 3], &[2, 2, 4]), vec![2]);
    }

    #[test]
    fn test_preserves_left_order() {
        assert_eq!(
            EqualityScan.intersect(&[5, 1, 4, 1, 5], &[1, 4, 5]),
            vec![5, 1, 4]
        );
    }

    #[test]
    fn test_floats_without_hash_or_ord() {
        assert_eq!(
            EqualityScan.intersect(&[2.5, 0.5, 2.5, 1.0], &[1.0, 2.5]),
            vec![2.5, 1.0]
        );
        // NaN never equals itself, so it can never be part of the result.
        assert!(EqualityScan.intersect(&[f64::NAN], &[f64::NAN]).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [i32; 0] = [];
        assert!(EqualityScan.intersect(&empty, &[1, 2]).is_empty());
        assert!(EqualityScan.intersect(&[1, 2], &empty).is_empty());
    }
}
