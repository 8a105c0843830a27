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

use serde_json::Value;
use std::fmt::Write;

/// Renders a JSON value compactly with `", "` between items, e.g.
/// `[[1, 5], [3, 7]]` or `{"k": "v"}`. Strings are quoted.
pub fn display_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Renders a list of JSON values as `[a, b, c]`.
pub fn display_list(values: &[Value]) -> String {
    let mut out = String::from("[");
    write_items(&mut out, values.iter());
    out.push(']');
    out
}

fn write_items<'a>(out: &mut String, items: impl Iterator<Item = &'a Value>) {
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_value(out, item);
    }
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Array(items) => {
            out.push('[');
            write_items(out, items.iter());
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{}: ", Value::from(key.as_str()));
                write_value(out, item);
            }
            out.push('}');
        }
        // Scalars already print as JSON.
        other => {
            let _ = write!(out, "{}", other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_nested() {
        assert_eq!(
            display_value(&json!([[1, 5], [3, 7], [10, 11]])),
            "[[1, 5], [3, 7], [10, 11]]"
        );
        assert_eq!(display_value(&json!({"k": [1, "a"]})), r#"{"k": [1, "a"]}"#);
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(display_value(&json!("À sogra")), r#""À sogra""#);
        assert_eq!(display_value(&json!(2.5)), "2.5");
        assert_eq!(display_value(&json!(null)), "null");
    }

    #[test]
    fn test_display_list() {
        assert_eq!(display_list(&[json!(1), json!("b")]), r#"[1, "b"]"#);
        assert_eq!(display_list(&[]), "[]");
    }
}
