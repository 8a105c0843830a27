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

use crate::num::{coordinate::Coordinate, length::UnionLength};

/// A closed interval `[start, end]` over a primitive numeric coordinate.
///
/// Both bounds belong to the interval, so two intervals that merely touch at
/// an endpoint (e.g. `[1, 2]` and `[2, 3]`) intersect and can be merged.
///
/// # Invariants
///
/// `start <= end`, and both bounds are finite. Constructors reorder reversed
/// endpoints instead of rejecting them.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ClosedInterval<T>
where
    T: Coordinate,
{
    start: T,
    end: T,
}

impl<T> ClosedInterval<T>
where
    T: Coordinate,
{
    /// Creates a new `ClosedInterval`, swapping the endpoints if `a > b`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arena_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(7, 3);
    /// assert_eq!(iv.start(), 3);
    /// assert_eq!(iv.end(), 7);
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        assert!(
            a.is_finite() && b.is_finite(),
            "Invalid interval: coordinates must be finite, got {} and {}",
            a,
            b
        );
        Self::ordered(a, b)
    }

    /// Creates a new `ClosedInterval` if both coordinates are finite,
    /// swapping the endpoints if `a > b`.
    ///
    /// Returns `None` if either coordinate is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arena_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(2.5, 1.0).is_some());
    /// assert!(ClosedInterval::try_new(f64::NAN, 1.0).is_none());
    /// ```
    #[inline]
    pub fn try_new(a: T, b: T) -> Option<Self> {
        if a.is_finite() && b.is_finite() {
            Some(Self::ordered(a, b))
        } else {
            None
        }
    }

    #[inline(always)]
    fn ordered(a: T, b: T) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns the lower bound of the interval.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the upper bound of the interval.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the length `end - start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arena_core::math::interval::ClosedInterval;
    /// # use arena_core::num::length::UnionLength;
    ///
    /// assert_eq!(ClosedInterval::new(10, 20).len(), UnionLength::Integer(10));
    /// assert_eq!(ClosedInterval::new(1.0, 2.5).len(), UnionLength::Float(1.5));
    /// ```
    #[inline]
    pub fn len(&self) -> UnionLength {
        T::span(self.start, self.end)
    }

    /// Returns `true` if the intervals share at least one point.
    ///
    /// Touching intervals share their common endpoint and therefore intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arena_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 2);
    /// assert!(a.intersects(ClosedInterval::new(2, 3)));
    /// assert!(!a.intersects(ClosedInterval::new(3, 4)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns the union of two intervals if it is contiguous.
    ///
    /// Returns `None` if the intervals are separated by a gap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arena_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 5);
    /// assert_eq!(a.merge(ClosedInterval::new(3, 7)), Some(ClosedInterval::new(1, 7)));
    /// assert_eq!(a.merge(ClosedInterval::new(5, 6)), Some(ClosedInterval::new(1, 6)));
    /// assert_eq!(a.merge(ClosedInterval::new(10, 11)), None);
    /// ```
    #[inline]
    pub fn merge(&self, other: Self) -> Option<Self> {
        if self.intersects(other) {
            let start = if other.start < self.start {
                other.start
            } else {
                self.start
            };
            let end = if other.end > self.end {
                other.end
            } else {
                self.end
            };
            Some(Self { start, end })
        } else {
            None
        }
    }

}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn iv(a: IntegerType, b: IntegerType) -> ClosedInterval<IntegerType> {
        ClosedInterval::new(a, b)
    }

    #[test]
    fn test_new_reorders_endpoints() {
        let a = iv(5, 1);
        assert_eq!(a.start(), 1);
        assert_eq!(a.end(), 5);
        assert_eq!(a, iv(1, 5));
    }

    #[test]
    #[should_panic(expected = "coordinates must be finite")]
    fn test_new_panics_on_nan() {
        let _ = ClosedInterval::new(f64::NAN, 1.0);
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(ClosedInterval::try_new(1.0, f64::INFINITY).is_none());
        assert!(ClosedInterval::try_new(f32::NEG_INFINITY, 0.0).is_none());
        assert_eq!(
            ClosedInterval::try_new(2.5, 1.0),
            Some(ClosedInterval::new(1.0, 2.5))
        );
    }

    #[test]
    fn test_len() {
        assert_eq!(iv(3, 7).len(), UnionLength::Integer(4));
        assert_eq!(iv(-3, 3).len(), UnionLength::Integer(6));
        assert_eq!(iv(4, 4).len(), UnionLength::ZERO);
    }

    #[test]
    fn test_intersects_closed_semantics() {
        let a = iv(1, 2);
        assert!(a.intersects(iv(2, 3)));
        assert!(a.intersects(iv(0, 1)));
        assert!(a.intersects(iv(0, 5)));
        assert!(!a.intersects(iv(3, 4)));
        assert!(!a.intersects(iv(-1, 0)));
    }

    #[test]
    fn test_merge() {
        assert_eq!(iv(1, 2).merge(iv(2, 3)), Some(iv(1, 3)));
        assert_eq!(iv(3, 7).merge(iv(1, 5)), Some(iv(1, 7)));
        assert_eq!(iv(0, 10).merge(iv(2, 3)), Some(iv(0, 10)));
        assert_eq!(iv(1, 2).merge(iv(3, 4)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(1, 5).to_string(), "[1, 5]");
        assert_eq!(ClosedInterval::new(0.5, 1.0).to_string(), "[0.5, 1]");
    }
}
