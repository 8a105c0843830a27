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

//! # Interval Union
//!
//! Sort-and-sweep over closed intervals. Inputs are validated and normalized
//! eagerly (every entry checked before anything is merged), sorted by start,
//! and folded into maximal runs: an interval whose start is `<=` the current
//! run's end extends the run, anything else closes it.
//!
//! The typed entry points take pairs or slices of any `Coordinate`. The
//! result is a `UnionLength`, integral exactly when the coordinate type is.

use crate::{
    error::{Endpoint, InvalidIntervalError},
    math::interval::ClosedInterval,
    num::{coordinate::Coordinate, length::UnionLength},
};
use tracing::trace;

/// Checks whether the given intervals are sorted by start.
///
/// Returns `true` if the intervals are sorted, `false` otherwise.
#[inline(always)]
pub fn is_sorted_by_start<T>(intervals: &[ClosedInterval<T>]) -> bool
where
    T: Coordinate,
{
    intervals.windows(2).all(|w| w[0].start() <= w[1].start())
}

/// Checks whether the given intervals are sorted and pairwise separated by
/// a gap, i.e. already a merged union.
#[inline(always)]
pub fn are_disjoint_and_sorted<T>(intervals: &[ClosedInterval<T>]) -> bool
where
    T: Coordinate,
{
    intervals.windows(2).all(|w| w[0].end() < w[1].start())
}

/// Validates and normalizes a single pair.
#[inline]
fn normalize_pair<T>(index: usize, a: T, b: T) -> Result<ClosedInterval<T>, InvalidIntervalError>
where
    T: Coordinate,
{
    if !a.is_finite() {
        return Err(InvalidIntervalError::NonFinite {
            index,
            endpoint: Endpoint::First,
        });
    }
    if !b.is_finite() {
        return Err(InvalidIntervalError::NonFinite {
            index,
            endpoint: Endpoint::Second,
        });
    }
    Ok(ClosedInterval::new(a, b))
}

/// Sorts `intervals` by start in place.
#[inline]
fn sort_by_start<T>(intervals: &mut [ClosedInterval<T>])
where
    T: Coordinate,
{
    intervals.sort_unstable_by(|a, b| a.start().total_cmp(&b.start()));
}

/// Folds sorted intervals into maximal runs, handing each closed run to `emit`.
fn sweep<T, F>(sorted: &[ClosedInterval<T>], mut emit: F)
where
    T: Coordinate,
    F: FnMut(ClosedInterval<T>),
{
    debug_assert!(
        is_sorted_by_start(sorted),
        "called `sweep` with intervals that are not sorted by start"
    );

    let Some((&first, rest)) = sorted.split_first() else {
        return;
    };

    let mut run = first;
    for &next in rest {
        match run.merge(next) {
            Some(merged) => run = merged,
            None => {
                trace!(%run, "closed run");
                emit(run);
                run = next;
            }
        }
    }
    trace!(%run, "closed final run");
    emit(run);
}

/// Merges intervals into the disjoint, sorted runs that make up their union.
///
/// The slice is sorted by start in place. Touching intervals are merged.
///
/// # Examples
///
/// ```rust
/// # use arena_core::algorithm::merge_overlapping;
/// # use arena_core::math::interval::ClosedInterval;
///
/// let mut ivs = vec![
///     ClosedInterval::new(10, 11),
///     ClosedInterval::new(3, 7),
///     ClosedInterval::new(1, 5),
/// ];
/// let runs = merge_overlapping(&mut ivs);
/// assert_eq!(runs, vec![ClosedInterval::new(1, 7), ClosedInterval::new(10, 11)]);
/// ```
pub fn merge_overlapping<T>(intervals: &mut [ClosedInterval<T>]) -> Vec<ClosedInterval<T>>
where
    T: Coordinate,
{
    sort_by_start(intervals);
    let mut runs = Vec::new();
    sweep(intervals, |run| runs.push(run));

    debug_assert!(
        are_disjoint_and_sorted(&runs),
        "`merge_overlapping` produced runs that are not disjoint and sorted"
    );
    runs
}

/// Returns the total length of the union of already normalized intervals.
///
/// The slice is sorted by start in place.
pub fn union_length_of_intervals<T>(intervals: &mut [ClosedInterval<T>]) -> UnionLength
where
    T: Coordinate,
{
    sort_by_start(intervals);
    let mut total = UnionLength::ZERO;
    sweep(intervals, |run| total += run.len());
    total
}

/// Returns the total length of the union of closed intervals given as pairs.
///
/// Endpoints may come in either order. Overlapping regions are counted once
/// and touching intervals merge. An empty input has length zero.
///
/// # Errors
///
/// Returns `InvalidIntervalError::NonFinite` for the first pair holding a
/// NaN or infinite coordinate. Nothing is merged in that case.
///
/// # Examples
///
/// ```rust
/// # use arena_core::algorithm::union_length;
/// # use arena_core::num::length::UnionLength;
///
/// assert_eq!(union_length([(1, 5), (3, 7), (10, 11)]), Ok(UnionLength::Integer(7)));
/// assert_eq!(union_length([(1, 2), (3, 2)]), Ok(UnionLength::Integer(2)));
/// assert_eq!(union_length([(1.0, 2.5)]), Ok(UnionLength::Float(1.5)));
/// assert_eq!(union_length(Vec::<(i32, i32)>::new()), Ok(UnionLength::ZERO));
/// ```
pub fn union_length<T, I>(intervals: I) -> Result<UnionLength, InvalidIntervalError>
where
    T: Coordinate,
    I: IntoIterator<Item = (T, T)>,
{
    let mut normalized = intervals
        .into_iter()
        .enumerate()
        .map(|(index, (a, b))| normalize_pair(index, a, b))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(union_length_of_intervals(&mut normalized))
}

/// Returns the total length of the union of closed intervals given as
/// coordinate slices.
///
/// # Errors
///
/// Returns `InvalidIntervalError::Arity` for the first entry that does not
/// hold exactly two coordinates, or `InvalidIntervalError::NonFinite` for
/// the first NaN or infinite coordinate. Nothing is merged in either case.
///
/// # Examples
///
/// ```rust
/// # use arena_core::algorithm::union_length_of_slices;
/// # use arena_core::error::InvalidIntervalError;
///
/// let ok: &[&[i32]] = &[&[1, 2], &[2, 3]];
/// assert_eq!(union_length_of_slices(ok).unwrap().to_string(), "2");
///
/// let bad: &[&[i32]] = &[&[1, 2], &[1, 2, 3]];
/// assert_eq!(
///     union_length_of_slices(bad),
///     Err(InvalidIntervalError::Arity { index: 1, len: 3 })
/// );
/// ```
pub fn union_length_of_slices<T, S>(intervals: &[S]) -> Result<UnionLength, InvalidIntervalError>
where
    T: Coordinate,
    S: AsRef<[T]>,
{
    let mut normalized = intervals
        .iter()
        .enumerate()
        .map(|(index, entry)| match *entry.as_ref() {
            [a, b] => normalize_pair(index, a, b),
            ref other => Err(InvalidIntervalError::Arity {
                index,
                len: other.len(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(union_length_of_intervals(&mut normalized))
}
