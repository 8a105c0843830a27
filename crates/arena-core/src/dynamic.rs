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

//! # Dynamic Values
//!
//! Entry points over `serde_json::Value` for callers whose input is not
//! statically typed, such as command-line arguments or decoded documents.
//! Each function inspects the values once, picks the typed algorithm that
//! fits, and reports malformed input the same way the typed API does.
//!
//! - `is_palindrome_value`: `false` for anything that is not a JSON string.
//! - `unique_intersection_values`: integers, strings and booleans take the
//!   sorted path; any mix of numbers is compared by exact numeric value and
//!   sorted; everything else falls back to an equality scan in left order. The chosen
//!   `IntersectionMode` is returned with the values.
//! - `union_length_value`: every entry must be a two-element array of
//!   numbers. All-integer input yields an `Integer` length, any float
//!   coordinate yields a `Float` length.

use crate::{
    algorithm::union_length,
    error::{Endpoint, InvalidIntervalError},
    num::length::UnionLength,
    set::{EqualityScan, IntersectionMode, IntersectionStrategy, SortedIntersection},
    text::is_palindrome,
};
use serde_json::{Number, Value};
use std::cmp::Ordering;
use tracing::debug;

/// Returns `true` if `value` is a JSON string that is a palindrome.
///
/// # Examples
///
/// ```rust
/// # use arena_core::dynamic::is_palindrome_value;
/// # use serde_json::json;
///
/// assert!(is_palindrome_value(&json!("Anotaram a data da maratona")));
/// assert!(!is_palindrome_value(&json!(12321)));
/// assert!(!is_palindrome_value(&json!(null)));
/// ```
pub fn is_palindrome_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_palindrome)
}

/// The result of intersecting two lists of JSON values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueIntersection {
    /// The strategy the values allowed.
    pub mode: IntersectionMode,
    /// The deduplicated intersection.
    pub values: Vec<Value>,
}

/// Collects `f(value)` for every value, or `None` if `f` rejects any of them.
#[inline]
fn all_as<'a, T, F>(values: &'a [Value], f: F) -> Option<Vec<T>>
where
    F: Fn(&'a Value) -> Option<T>,
{
    values.iter().map(f).collect()
}

/// A JSON number viewed for exact comparison across representations.
///
/// Integers keep every bit, floats are compared against integers exactly,
/// so `1 == 1.0` while `2^53 + 1 != 2^53`.
#[derive(Debug, Clone, Copy)]
enum NumericKey {
    Integer(i128),
    Float(f64),
}

impl NumericKey {
    fn of(value: &Value) -> Option<Self> {
        let n = as_number(value)?;
        if let Some(i) = n.as_i64() {
            Some(Self::Integer(i128::from(i)))
        } else if let Some(u) = n.as_u64() {
            Some(Self::Integer(i128::from(u)))
        } else {
            n.as_f64().map(Self::Float)
        }
    }
}

/// Compares an integer with a finite float without rounding either.
fn cmp_integer_float(i: i128, f: f64) -> Ordering {
    // 2^127, the first float above every i128.
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }
    let floor = f.floor();
    match i.cmp(&(floor as i128)) {
        Ordering::Equal if f > floor => Ordering::Less,
        ordering => ordering,
    }
}

impl Ord for NumericKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(&b),
            (Self::Integer(a), Self::Float(b)) => cmp_integer_float(a, b),
            (Self::Float(a), Self::Integer(b)) => cmp_integer_float(b, a).reverse(),
            // JSON floats are never NaN; `-0.0 == 0.0` as for any number.
            (Self::Float(a), Self::Float(b)) => {
                a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
            }
        }
    }
}

impl PartialOrd for NumericKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NumericKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NumericKey {}

/// Intersects numbers by exact numeric value, so that `1` and `1.0` are
/// equal. The left input's representation of each value is kept.
fn numeric_intersection(left: &[Value], right: &[Value]) -> Option<Vec<Value>> {
    let left_keys = all_as(left, NumericKey::of)?;
    let mut right_keys = all_as(right, NumericKey::of)?;
    right_keys.sort_unstable();

    let mut kept: Vec<(NumericKey, &Value)> = left_keys
        .into_iter()
        .zip(left)
        .filter(|(key, _)| right_keys.binary_search(key).is_ok())
        .collect();
    // Stable, so the first appearance in `left` survives the dedup.
    kept.sort_by_key(|&(key, _)| key);
    kept.dedup_by(|a, b| a.0 == b.0);
    Some(kept.into_iter().map(|(_, v)| v.clone()).collect())
}

/// Runs the sorted strategy over values that all convert with `f`.
fn sorted_intersection_as<'a, T, F>(
    left: &'a [Value],
    right: &'a [Value],
    f: F,
) -> Option<Vec<Value>>
where
    T: Ord + std::hash::Hash + Clone,
    F: Fn(&'a Value) -> Option<T> + Copy,
    Value: From<T>,
{
    let l = all_as(left, f)?;
    let r = all_as(right, f)?;
    Some(
        SortedIntersection
            .intersect(&l, &r)
            .into_iter()
            .map(Value::from)
            .collect(),
    )
}

/// Returns the deduplicated intersection of two lists of JSON values.
///
/// # Examples
///
/// ```rust
/// # use arena_core::dynamic::unique_intersection_values;
/// # use arena_core::set::IntersectionMode;
/// # use serde_json::json;
///
/// let r = unique_intersection_values(&[json!(3), json!(1), json!(3)], &[json!(1), json!(3)]);
/// assert_eq!(r.mode, IntersectionMode::Sorted);
/// assert_eq!(r.values, vec![json!(1), json!(3)]);
///
/// let r = unique_intersection_values(&[json!([2]), json!("a")], &[json!("a"), json!([2])]);
/// assert_eq!(r.mode, IntersectionMode::EqualityScan);
/// assert_eq!(r.values, vec![json!([2]), json!("a")]);
/// ```
pub fn unique_intersection_values(left: &[Value], right: &[Value]) -> ValueIntersection {
    let sorted = |values| ValueIntersection {
        mode: IntersectionMode::Sorted,
        values,
    };

    if let Some(values) = sorted_intersection_as(left, right, Value::as_i64) {
        debug!(left = left.len(), right = right.len(), "intersecting integers");
        return sorted(values);
    }
    if let Some(values) = sorted_intersection_as(left, right, Value::as_u64) {
        debug!(
            left = left.len(),
            right = right.len(),
            "intersecting unsigned integers"
        );
        return sorted(values);
    }
    if let Some(values) = numeric_intersection(left, right) {
        debug!(left = left.len(), right = right.len(), "intersecting numbers");
        return sorted(values);
    }
    if let Some(values) = sorted_intersection_as(left, right, Value::as_str) {
        debug!(left = left.len(), right = right.len(), "intersecting strings");
        return sorted(values);
    }
    if let Some(values) = sorted_intersection_as(left, right, Value::as_bool) {
        debug!(left = left.len(), right = right.len(), "intersecting booleans");
        return sorted(values);
    }

    debug!(
        left = left.len(),
        right = right.len(),
        "values are not uniformly orderable, falling back to an equality scan"
    );
    ValueIntersection {
        mode: IntersectionMode::EqualityScan,
        values: EqualityScan.intersect(left, right),
    }
}

#[inline]
fn as_number(value: &Value) -> Option<&Number> {
    match value {
        Value::Number(n) => Some(n),
        _ => None,
    }
}

/// Checks that every entry is a two-element array of numbers.
fn validate_pairs(value: &Value) -> Result<Vec<(&Number, &Number)>, InvalidIntervalError> {
    let entries = value.as_array().ok_or(InvalidIntervalError::NotAList)?;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let pair = entry
                .as_array()
                .ok_or(InvalidIntervalError::NotASequence { index })?;
            match pair.as_slice() {
                [a, b] => {
                    let a = as_number(a).ok_or(InvalidIntervalError::NonNumeric {
                        index,
                        endpoint: Endpoint::First,
                    })?;
                    let b = as_number(b).ok_or(InvalidIntervalError::NonNumeric {
                        index,
                        endpoint: Endpoint::Second,
                    })?;
                    Ok((a, b))
                }
                other => Err(InvalidIntervalError::Arity {
                    index,
                    len: other.len(),
                }),
            }
        })
        .collect()
}

/// Collects `f` over both coordinates of every pair, or `None` if `f`
/// rejects any coordinate.
#[inline]
fn all_pairs_as<T, F>(pairs: &[(&Number, &Number)], f: F) -> Option<Vec<(T, T)>>
where
    F: Fn(&Number) -> Option<T>,
{
    pairs.iter().map(|&(a, b)| Some((f(a)?, f(b)?))).collect()
}

/// Converts every pair to `f64`, naming the first coordinate that has no
/// float view.
fn float_pairs(pairs: &[(&Number, &Number)]) -> Result<Vec<(f64, f64)>, InvalidIntervalError> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, &(a, b))| {
            let coordinate = |n: &Number, endpoint: Endpoint| {
                n.as_f64()
                    .ok_or(InvalidIntervalError::NonNumeric { index, endpoint })
            };
            Ok((
                coordinate(a, Endpoint::First)?,
                coordinate(b, Endpoint::Second)?,
            ))
        })
        .collect()
}

/// Returns the total length of the union of the intervals in a JSON array
/// of `[start, end]` pairs.
///
/// Integer coordinates are handled exactly as `i64`, or as `u64` when a
/// value exceeds `i64::MAX` and none is negative. Any other mix is measured
/// in `f64`.
///
/// # Errors
///
/// Returns `InvalidIntervalError` for the first malformed entry: the input
/// is not an array, an entry is not an array, an entry does not have exactly
/// two elements, or a coordinate is not a number. Validation covers the
/// whole input before anything is merged.
///
/// # Examples
///
/// ```rust
/// # use arena_core::dynamic::union_length_value;
/// # use arena_core::error::InvalidIntervalError;
/// # use serde_json::json;
///
/// assert_eq!(union_length_value(&json!([[1, 5], [3, 7], [10, 11]])).unwrap().to_string(), "7");
/// assert_eq!(union_length_value(&json!([[1.0, 2.5]])).unwrap().to_string(), "1.5");
/// assert_eq!(
///     union_length_value(&json!([[1, 2, 3]])),
///     Err(InvalidIntervalError::Arity { index: 0, len: 3 })
/// );
/// ```
pub fn union_length_value(value: &Value) -> Result<UnionLength, InvalidIntervalError> {
    let pairs = validate_pairs(value)?;

    if let Some(ints) = all_pairs_as(&pairs, Number::as_i64) {
        debug!(intervals = ints.len(), "measuring integer intervals");
        return union_length(ints);
    }
    if let Some(uints) = all_pairs_as(&pairs, Number::as_u64) {
        debug!(intervals = uints.len(), "measuring unsigned integer intervals");
        return union_length(uints);
    }

    debug!(intervals = pairs.len(), "measuring float intervals");
    union_length(float_pairs(&pairs)?)
}
