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

use crate::display::{display_list, display_value};
use arena_core::{
    dynamic::{is_palindrome_value, union_length_value, unique_intersection_values},
    error::InvalidIntervalError,
};
use serde_json::Value;
use tracing::debug;

/// One invocation of a library entry point with JSON arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// Palindrome check of an arbitrary value.
    Palindrome(Value),
    /// Deduplicated intersection of two lists.
    Intersection(Vec<Value>, Vec<Value>),
    /// Union length of a list of `[start, end]` pairs.
    IntervalSum(Value),
}

impl Call {
    /// Returns the name the call is reported under.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Palindrome(_) => "is_palindrome",
            Self::Intersection(..) => "unique_intersection",
            Self::IntervalSum(_) => "interval_union_sum",
        }
    }

    /// Runs the call and renders its result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIntervalError` if an `IntervalSum` call receives
    /// malformed intervals. The other calls cannot fail.
    pub fn evaluate(&self) -> Result<String, InvalidIntervalError> {
        match self {
            Self::Palindrome(value) => Ok(is_palindrome_value(value).to_string()),
            Self::Intersection(left, right) => {
                let intersection = unique_intersection_values(left, right);
                debug!(mode = %intersection.mode, "intersection computed");
                Ok(display_list(&intersection.values))
            }
            Self::IntervalSum(intervals) => Ok(union_length_value(intervals)?.to_string()),
        }
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Palindrome(value) => write!(f, "{}({})", self.name(), display_value(value)),
            Self::Intersection(left, right) => write!(
                f,
                "{}({}, {})",
                self.name(),
                display_list(left),
                display_list(right)
            ),
            Self::IntervalSum(intervals) => {
                write!(f, "{}({})", self.name(), display_value(intervals))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_palindrome_call() {
        let call = Call::Palindrome(json!("Ana"));
        assert_eq!(call.to_string(), r#"is_palindrome("Ana")"#);
        assert_eq!(call.evaluate().unwrap(), "true");
        assert_eq!(Call::Palindrome(json!(12345)).evaluate().unwrap(), "false");
    }

    #[test]
    fn test_intersection_call() {
        let call = Call::Intersection(
            vec![json!(1), json!(2), json!(2), json!(3)],
            vec![json!(2), json!(2), json!(4)],
        );
        assert_eq!(
            call.to_string(),
            "unique_intersection([1, 2, 2, 3], [2, 2, 4])"
        );
        assert_eq!(call.evaluate().unwrap(), "[2]");
    }

    #[test]
    fn test_interval_sum_call() {
        let call = Call::IntervalSum(json!([[1.0, 2.5]]));
        assert_eq!(call.to_string(), "interval_union_sum([[1.0, 2.5]])");
        assert_eq!(call.evaluate().unwrap(), "1.5");

        let bad = Call::IntervalSum(json!([[1, 2, 3]]));
        assert_eq!(
            bad.evaluate(),
            Err(InvalidIntervalError::Arity { index: 0, len: 3 })
        );
    }
}
