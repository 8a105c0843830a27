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

/// A strategy computing the deduplicated intersection of two sequences.
///
/// Every value in the result is equal to some value in `left` and to some
/// value in `right`, and no two values in the result are equal.
pub trait IntersectionStrategy<T> {
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Returns the run-time tag of the strategy.
    fn mode(&self) -> IntersectionMode;

    /// Computes the deduplicated intersection of `left` and `right`.
    fn intersect(&self, left: &[T], right: &[T]) -> Vec<T>;
}

/// The run-time name of an intersection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionMode {
    /// Pairwise equality scan, left order preserved.
    EqualityScan,
    /// Hash-set membership, left order of first appearance.
    Hashed,
    /// Hash-set membership, ascending order.
    Sorted,
}

impl IntersectionMode {
    /// Returns `true` if results in this mode are sorted ascending.
    #[inline]
    pub const fn is_sorted(&self) -> bool {
        matches!(self, Self::Sorted)
    }

    /// Returns the short name used in log output.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EqualityScan => "equality",
            Self::Hashed => "hashed",
            Self::Sorted => "sorted",
        }
    }
}

impl std::fmt::Display for IntersectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
