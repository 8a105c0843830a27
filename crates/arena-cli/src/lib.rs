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

//! # Arena CLI
//!
//! Command-line front end for `arena_core`. Arguments arrive as text and are
//! decoded as JSON, which makes the library's any-value boundary reachable
//! from the shell: `arena palindrome --json 12321` answers `false`.
//!
//! - `call`: A single library invocation with JSON arguments, and how it is
//!   rendered.
//! - `cli`: `clap` argument definitions and dispatch.
//! - `demo`: The fixed demonstration run printed by `arena` / `arena demo`.
//! - `display`: Compact rendering of JSON values for result lines.

pub mod call;
pub mod cli;
pub mod demo;
pub mod display;
