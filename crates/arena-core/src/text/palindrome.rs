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

use crate::text::normalize::normalized_chars;
use smallvec::SmallVec;
use std::{any::Any, borrow::Cow};

/// Returns `true` if `text` reads the same forward and backward after
/// normalization.
///
/// Text that normalizes to nothing (empty, punctuation only, marks only) is a
/// palindrome.
///
/// # Examples
///
/// ```rust
/// # use arena_core::text::is_palindrome;
///
/// assert!(is_palindrome("À sogra má e amargosa"));
/// assert!(is_palindrome("A man, a plan, a canal: Panama!"));
/// assert!(!is_palindrome("abc"));
/// assert!(is_palindrome(""));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    // Normalized characters are ASCII, so bytes compare like characters.
    let bytes: SmallVec<[u8; 64]> = normalized_chars(text).map(|c| c as u8).collect();
    bytes.iter().eq(bytes.iter().rev())
}

/// Returns `true` if `value` is text that is a palindrome, and `false` for
/// every other value.
///
/// Recognized text types are `String`, `&'static str`, `Box<str>`,
/// `Cow<'static, str>` and `char`. Anything else (numbers, collections,
/// `None`) is not text and yields `false` rather than an error.
///
/// # Examples
///
/// ```rust
/// # use arena_core::text::is_palindrome_any;
///
/// assert!(is_palindrome_any(&"Ana"));
/// assert!(is_palindrome_any(&String::from("Socorram-me, subi no ônibus em Marrocos")));
/// assert!(!is_palindrome_any(&12321));
/// assert!(!is_palindrome_any(&vec!['a', 'b', 'a']));
/// ```
pub fn is_palindrome_any(value: &dyn Any) -> bool {
    if let Some(s) = value.downcast_ref::<String>() {
        is_palindrome(s)
    } else if let Some(s) = value.downcast_ref::<&'static str>() {
        is_palindrome(s)
    } else if let Some(s) = value.downcast_ref::<Box<str>>() {
        is_palindrome(s)
    } else if let Some(s) = value.downcast_ref::<Cow<'static, str>>() {
        is_palindrome(s)
    } else if let Some(c) = value.downcast_ref::<char>() {
        let mut buf = [0u8; 4];
        is_palindrome(c.encode_utf8(&mut buf))
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sentence() {
        assert!(is_palindrome("À sogra má e amargosa"));
    }

    #[test]
    fn test_not_palindrome() {
        assert!(!is_palindrome("abc"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn test_trivial_palindromes() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("?!,."));
        assert!(is_palindrome("\u{0301}"));
    }

    #[test]
    fn test_digits() {
        assert!(is_palindrome("12321"));
        assert!(is_palindrome("1 2-3 2:1"));
        assert!(!is_palindrome("12345"));
    }

    #[test]
    fn test_longer_than_inline_buffer() {
        let half = "abcdefghijklmnopqrstuvwxyz0123456789".repeat(3);
        let text: String = half.chars().chain(half.chars().rev()).collect();
        assert!(is_palindrome(&text));
        assert!(!is_palindrome(&format!("{}x", text)));
    }

    #[test]
    fn test_equals_comparison_of_normalized_form() {
        for s in ["Roma me tem amor", "Été", "No lemon, no melon", "Arena", "Ñ"] {
            let n = crate::text::normalize(s);
            let reversed: String = n.chars().rev().collect();
            assert_eq!(is_palindrome(s), n == reversed, "{s}");
        }
    }

    #[test]
    fn test_any_value_boundary() {
        assert!(is_palindrome_any(&"Rir, o breve verbo rir"));
        assert!(is_palindrome_any(&String::from("Radar")));
        assert!(is_palindrome_any(&Box::<str>::from("Level")));
        assert!(is_palindrome_any(&Cow::Borrowed("Kayak")));
        assert!(is_palindrome_any(&'x'));
        assert!(is_palindrome_any(&String::new()));

        assert!(!is_palindrome_any(&12345));
        assert!(!is_palindrome_any(&121u8));
        assert!(!is_palindrome_any(&1.0f64));
        assert!(!is_palindrome_any(&Option::<String>::None));
        assert!(!is_palindrome_any(&vec!["a"]));
        assert!(!is_palindrome_any(&String::from("abc")));
    }
}
