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

use crate::{call::Call, demo::run_demo};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "arena",
    version,
    about = "Palindromes, unique intersections and interval union lengths"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Run the demonstration calls (default)
    Demo,
    /// Check whether a text reads the same both ways, ignoring accents, case and punctuation
    Palindrome {
        text: String,
        /// Decode TEXT as a JSON value; anything but a string is not a palindrome
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Deduplicated intersection of two JSON arrays
    Intersect { left: String, right: String },
    /// Total length of the union of closed intervals, given as a JSON array of pairs
    IntervalSum { intervals: String },
}

fn parse_json(text: &str, what: &str) -> Result<Value> {
    serde_json::from_str(text).with_context(|| format!("{} is not valid JSON: {}", what, text))
}

fn parse_list(text: &str, what: &str) -> Result<Vec<Value>> {
    match parse_json(text, what)? {
        Value::Array(values) => Ok(values),
        other => bail!("{} must be a JSON array, got {}", what, other),
    }
}

fn print_call<W: Write>(out: &mut W, call: &Call) -> Result<()> {
    let result = call
        .evaluate()
        .with_context(|| format!("{} failed", call))?;
    writeln!(out, "{} => {}", call, result)?;
    Ok(())
}

/// Executes the parsed command line, writing results to `out`.
///
/// The demonstration never fails on a call error; single commands do.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.cmd.unwrap_or(Cmd::Demo) {
        Cmd::Demo => run_demo(out)?,
        Cmd::Palindrome { text, json } => {
            let value = if json {
                parse_json(&text, "text")?
            } else {
                Value::String(text)
            };
            print_call(out, &Call::Palindrome(value))?;
        }
        Cmd::Intersect { left, right } => {
            let left = parse_list(&left, "left")?;
            let right = parse_list(&right, "right")?;
            print_call(out, &Call::Intersection(left, right))?;
        }
        Cmd::IntervalSum { intervals } => {
            let intervals = parse_json(&intervals, "intervals")?;
            print_call(out, &Call::IntervalSum(intervals))?;
        }
    }
    Ok(())
}
