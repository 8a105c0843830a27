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

use std::ops::{Add, AddAssign};

/// The total measure of a union of closed intervals.
///
/// `Integer` is produced when every coordinate was an integer; in that case
/// the length is exact. `Float` is produced as soon as any coordinate was a
/// floating-point number, even if the resulting value has no fractional part.
///
/// # Examples
///
/// ```rust
/// # use arena_core::num::length::UnionLength;
///
/// let total = UnionLength::Integer(6) + UnionLength::Integer(1);
/// assert_eq!(total, UnionLength::Integer(7));
/// assert_eq!(total.to_string(), "7");
///
/// let total = UnionLength::Integer(1) + UnionLength::Float(0.5);
/// assert_eq!(total.to_string(), "1.5");
/// assert_eq!(UnionLength::Float(2.0).to_string(), "2.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnionLength {
    /// An exact integral length.
    Integer(u128),
    /// A floating-point length.
    Float(f64),
}

impl UnionLength {
    /// The length of an empty union.
    pub const ZERO: Self = Self::Integer(0);

    /// Returns `true` if this is an `Integer` length.
    #[inline]
    pub const fn is_integral(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns the length as `f64`, rounding large integers to the nearest
    /// representable value.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Returns the exact integral length, or `None` for a `Float` length.
    #[inline]
    pub const fn as_integer(&self) -> Option<u128> {
        match *self {
            Self::Integer(v) => Some(v),
            Self::Float(_) => None,
        }
    }
}

impl Default for UnionLength {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for UnionLength {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(a.saturating_add(b)),
            (a, b) => Self::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl AddAssign for UnionLength {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for UnionLength {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for UnionLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            // `Debug` keeps the fractional part of integral floats (`2.0`).
            Self::Float(v) => write!(f, "{:?}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_integral() {
        assert!(UnionLength::ZERO.is_integral());
        assert_eq!(UnionLength::default(), UnionLength::Integer(0));
        assert_eq!(UnionLength::ZERO.to_string(), "0");
    }

    #[test]
    fn test_mixed_addition_promotes_to_float() {
        let mut total = UnionLength::Integer(2);
        total += UnionLength::Float(0.25);
        assert_eq!(total, UnionLength::Float(2.25));
        assert!(!total.is_integral());
        assert_eq!(total.as_integer(), None);
    }

    #[test]
    fn test_sum() {
        let total: UnionLength = [1u128, 2, 3].into_iter().map(UnionLength::Integer).sum();
        assert_eq!(total.as_integer(), Some(6));

        let empty: UnionLength = std::iter::empty().sum();
        assert_eq!(empty, UnionLength::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(UnionLength::Integer(9).to_string(), "9");
        assert_eq!(UnionLength::Float(1.5).to_string(), "1.5");
        assert_eq!(UnionLength::Float(2.0).to_string(), "2.0");
    }
}
