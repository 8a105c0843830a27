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

use crate::num::length::UnionLength;
use num_traits::ToPrimitive;
use std::cmp::Ordering;

/// A primitive number usable as an interval endpoint.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`,
/// `u64`, `usize`, `f32` and `f64`. 128-bit integers are excluded so that
/// every span between two coordinates fits in a `u128` without overflow.
///
/// # Examples
///
/// ```rust
/// # use arena_core::num::coordinate::Coordinate;
/// # use arena_core::num::length::UnionLength;
///
/// assert!(<i64 as Coordinate>::INTEGRAL);
/// assert!(!<f64 as Coordinate>::INTEGRAL);
/// assert_eq!(i8::span(-128, 127), UnionLength::Integer(255));
/// assert_eq!(f64::span(1.0, 2.5), UnionLength::Float(1.5));
/// ```
pub trait Coordinate:
    Copy + PartialOrd + ToPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
    /// `true` if every value of this type is an integer.
    const INTEGRAL: bool;

    /// Returns `false` for NaN and the infinities; integers are always finite.
    fn is_finite(self) -> bool;

    /// A total order over the type. For floats this is IEEE 754 `totalOrder`.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// The exact distance `end - start`.
    ///
    /// The caller must ensure `start <= end`.
    fn span(start: Self, end: Self) -> UnionLength;
}

macro_rules! impl_integral_coordinate_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coordinate for $t {
                const INTEGRAL: bool = true;

                #[inline(always)]
                fn is_finite(self) -> bool {
                    true
                }

                #[inline(always)]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline(always)]
                fn span(start: Self, end: Self) -> UnionLength {
                    debug_assert!(
                        start <= end,
                        "called `Coordinate::span` with start > end: start is {} but end is {}",
                        start,
                        end
                    );
                    UnionLength::Integer((end as i128 - start as i128) as u128)
                }
            }
        )*
    };
}

macro_rules! impl_float_coordinate_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coordinate for $t {
                const INTEGRAL: bool = false;

                #[inline(always)]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }

                #[inline(always)]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }

                #[inline(always)]
                fn span(start: Self, end: Self) -> UnionLength {
                    debug_assert!(
                        start <= end,
                        "called `Coordinate::span` with start > end: start is {} but end is {}",
                        start,
                        end
                    );
                    UnionLength::Float(f64::from(end) - f64::from(start))
                }
            }
        )*
    };
}

impl_integral_coordinate_for!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_coordinate_for!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_flags() {
        assert!(<i8 as Coordinate>::INTEGRAL);
        assert!(<u64 as Coordinate>::INTEGRAL);
        assert!(<usize as Coordinate>::INTEGRAL);
        assert!(!<f32 as Coordinate>::INTEGRAL);
        assert!(!<f64 as Coordinate>::INTEGRAL);
    }

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::is_finite(i64::MIN));
        assert!(Coordinate::is_finite(1.5f64));
        assert!(!Coordinate::is_finite(f64::NAN));
        assert!(!Coordinate::is_finite(f64::INFINITY));
        assert!(!Coordinate::is_finite(f32::NEG_INFINITY));
    }

    #[test]
    fn test_span_integers_do_not_overflow() {
        assert_eq!(i64::span(i64::MIN, i64::MAX), UnionLength::Integer(u64::MAX as u128));
        assert_eq!(u64::span(0, u64::MAX), UnionLength::Integer(u64::MAX as u128));
        assert_eq!(i32::span(-3, 4), UnionLength::Integer(7));
        assert_eq!(u8::span(5, 5), UnionLength::Integer(0));
    }

    #[test]
    fn test_span_floats() {
        assert_eq!(f64::span(1.0, 2.5), UnionLength::Float(1.5));
        assert_eq!(f32::span(-0.5, 0.5), UnionLength::Float(1.0));
    }

    #[test]
    fn test_total_cmp_orders_floats_and_integers() {
        assert_eq!(Coordinate::total_cmp(&1.0f64, &2.0), Ordering::Less);
        assert_eq!(Coordinate::total_cmp(&3i32, &3), Ordering::Equal);
        assert_eq!(Coordinate::total_cmp(&7u16, &2), Ordering::Greater);
    }
}
