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

//! Error types for interval input validation.

/// Which endpoint of an interval entry a coordinate error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The first coordinate of the pair.
    First,
    /// The second coordinate of the pair.
    Second,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// The error returned when interval input is not a sequence of numeric pairs.
///
/// Validation is eager: the whole input is checked before any merging, and
/// the first offending entry aborts the computation. `index` is the position
/// of that entry in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidIntervalError {
    /// The input as a whole is not a list of intervals.
    NotAList,
    /// The entry is not a sequence at all.
    NotASequence { index: usize },
    /// The entry does not have exactly two coordinates.
    Arity { index: usize, len: usize },
    /// A coordinate is not a number.
    NonNumeric { index: usize, endpoint: Endpoint },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize, endpoint: Endpoint },
}

impl InvalidIntervalError {
    /// Position of the offending entry, if the error refers to one.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::NotAList => None,
            Self::NotASequence { index }
            | Self::Arity { index, .. }
            | Self::NonNumeric { index, .. }
            | Self::NonFinite { index, .. } => Some(index),
        }
    }
}

impl std::fmt::Display for InvalidIntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAList => write!(f, "intervals must be given as a list of pairs"),
            Self::NotASequence { index } => write!(
                f,
                "interval {} must be a pair of two numeric coordinates",
                index
            ),
            Self::Arity { index, len } => write!(
                f,
                "interval {} must be a pair of two numeric coordinates, got {} element(s)",
                index, len
            ),
            Self::NonNumeric { index, endpoint } => write!(
                f,
                "interval {} has a non-numeric {} coordinate",
                index, endpoint
            ),
            Self::NonFinite { index, endpoint } => write!(
                f,
                "interval {} has a non-finite {} coordinate",
                index, endpoint
            ),
        }
    }
}

impl std::error::Error for InvalidIntervalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            InvalidIntervalError::Arity { index: 0, len: 3 }.to_string(),
            "interval 0 must be a pair of two numeric coordinates, got 3 element(s)"
        );
        assert_eq!(
            InvalidIntervalError::NonFinite {
                index: 2,
                endpoint: Endpoint::Second
            }
            .to_string(),
            "interval 2 has a non-finite second coordinate"
        );
    }

    #[test]
    fn test_index() {
        assert_eq!(InvalidIntervalError::NotAList.index(), None);
        assert_eq!(
            InvalidIntervalError::NonNumeric {
                index: 4,
                endpoint: Endpoint::First
            }
            .index(),
            Some(4)
        );
    }
}
