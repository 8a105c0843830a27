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

//! # Arena Core
//!
//! Small, deterministic algorithms over text, sequences and closed numeric
//! intervals. Every entry point is a pure function: no shared state, no I/O,
//! and identical input always yields identical output.
//!
//! ## Modules
//!
//! - `text`: Unicode-aware normalization (canonical decomposition, accent
//!   stripping, case folding, ASCII alphanumeric filtering) and palindrome
//!   detection on top of it, including an any-value boundary that answers
//!   `false` for non-textual input instead of failing.
//! - `set`: Deduplicated intersection of two sequences with three strategies
//!   selected by the element type's capabilities: equality scan (`PartialEq`),
//!   hashed (`Eq + Hash`) and sorted (`Ord + Hash`).
//! - `math`: The closed interval `[start, end]` primitive with normalization
//!   of reversed endpoints, closed-semantics predicates and merging.
//! - `algorithm`: The sort-and-sweep computing the total length of a union of
//!   closed intervals, plus the merged runs themselves.
//! - `num`: The `Coordinate` capability trait over primitive numbers and the
//!   tagged `UnionLength` result that keeps integer inputs integral.
//! - `dynamic`: A JSON-value boundary for callers whose inputs are not
//!   statically typed (e.g. command-line arguments).
//! - `error`: The `InvalidIntervalError` raised for malformed interval input.
//!
//! ## Example
//!
//! ```rust
//! use arena_core::{algorithm::union_length, set::unique_intersection, text::is_palindrome};
//! use arena_core::num::length::UnionLength;
//!
//! assert!(is_palindrome("À sogra má e amargosa"));
//! assert_eq!(unique_intersection(&[1, 2, 2, 3], &[2, 2, 4]), vec![2]);
//! assert_eq!(
//!     union_length([(1, 5), (3, 7), (10, 11)]).unwrap(),
//!     UnionLength::Integer(7)
//! );
//! ```

pub mod algorithm;
pub mod dynamic;
pub mod error;
pub mod math;
pub mod num;
pub mod set;
pub mod text;
