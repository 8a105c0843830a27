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

//! # Text
//!
//! Normalization for loose text comparison and palindrome detection.
//!
//! ## Submodules
//!
//! - `normalize`: The normalization pipeline. Canonical decomposition (NFD)
//!   splits accented letters into a base letter plus combining marks, the
//!   marks are dropped, the text is lowercased, and everything that is not
//!   an ASCII digit or ASCII lowercase letter is removed. The order matters:
//!   `á` survives as `a` instead of being filtered out as non-alphanumeric.
//! - `palindrome`: Palindrome checks over normalized text, including the
//!   any-value boundary that answers `false` for non-textual input.

pub mod normalize;
pub mod palindrome;

pub use normalize::normalize;
pub use palindrome::{is_palindrome, is_palindrome_any};
