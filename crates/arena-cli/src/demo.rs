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

use crate::call::Call;
use serde_json::json;
use std::io::{self, Write};
use tracing::warn;

/// First line of the demonstration output.
pub const BANNER: &str = "== Arena Demo ==";

/// The fixed calls run by the demonstration.
pub fn demo_calls() -> [Call; 3] {
    [
        Call::Palindrome(json!("À sogra má e amargosa")),
        Call::Intersection(
            vec![json!(1), json!(2), json!(2), json!(3)],
            vec![json!(2), json!(2), json!(4)],
        ),
        Call::IntervalSum(json!([[1, 5], [3, 7], [10, 11]])),
    ]
}

/// Runs `call` and writes one result line: `<call> => <result>` on success,
/// `<call> failed: <message>` on error.
///
/// Returns `true` if the call succeeded. Call errors are reported, never
/// propagated; only write errors are.
pub fn report<W>(out: &mut W, call: &Call) -> io::Result<bool>
where
    W: Write,
{
    match call.evaluate() {
        Ok(result) => {
            writeln!(out, "{} => {}", call, result)?;
            Ok(true)
        }
        Err(e) => {
            warn!(call = call.name(), error = %e, "demo call failed");
            writeln!(out, "{} failed: {}", call, e)?;
            Ok(false)
        }
    }
}

/// Writes the banner followed by one line per demonstration call.
pub fn run_demo<W>(out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{}", BANNER)?;
    writeln!(out)?;
    for call in demo_calls() {
        report(out, &call)?;
    }
    Ok(())
}
