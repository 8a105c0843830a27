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

//! # Numeric Foundations
//!
//! Traits and types that let the interval algorithms stay generic over every
//! primitive number while still honoring the integer-versus-float result
//! contract.
//!
//! ## Submodules
//!
//! - `coordinate`: The `Coordinate` trait implemented for all primitive
//!   integers up to 64 bits and for `f32`/`f64`. It exposes whether the type
//!   is integral, a finiteness check, a total order for sorting, and an exact
//!   `span` measurement between two coordinates.
//! - `length`: `UnionLength`, the tagged measurement result
//!   (`Integer` or `Float`) with summation and formatting.
//!
//! ## Motivation
//!
//! A union of integer intervals has an integral length and should be
//! reported as such; a union with any fractional coordinate is a float. The
//! choice is made by the coordinate type at compile time rather than by
//! inspecting values at run time.

pub mod coordinate;
pub mod length;
