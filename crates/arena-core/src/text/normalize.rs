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

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Returns the normalized characters of `text`, in order.
///
/// Every yielded character is an ASCII digit or an ASCII lowercase letter.
pub fn normalized_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}

/// Normalizes `text` for loose comparison.
///
/// # Examples
///
/// ```rust
/// # use arena_core::text::normalize;
///
/// assert_eq!(normalize("À sogra má e amargosa"), "asogramaeamargosa");
/// assert_eq!(normalize("Ça va? 42!"), "cava42");
/// assert_eq!(normalize("¡!…"), "");
/// ```
pub fn normalize(text: &str) -> String {
    normalized_chars(text).collect()
}

/// Removes combining marks after canonical decomposition, keeping case and
/// punctuation.
///
/// # Examples
///
/// ```rust
/// # use arena_core::text::normalize::strip_accents;
///
/// assert_eq!(strip_accents("Crème Brûlée"), "Creme Brulee");
/// ```
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_before_filtering() {
        assert_eq!(normalize("ÁÉÍÓÚ àèìòù ñ ç"), "aeiouaeiounc");
    }

    #[test]
    fn test_normalize_keeps_ascii_digits_only() {
        assert_eq!(normalize("1-2_3 ٤"), "123");
    }

    #[test]
    fn test_normalize_lowercases_with_full_case_mapping() {
        // U+0130 decomposes to `I` + combining dot above.
        assert_eq!(normalize("İstanbul"), "istanbul");
        // KELVIN SIGN canonically decomposes to `K`.
        assert_eq!(normalize("\u{212A}"), "k");
    }

    #[test]
    fn test_normalize_drops_non_latin_scripts() {
        assert_eq!(normalize("КоШКи"), "");
        assert_eq!(normalize("日本 go"), "go");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\u{0301}\u{0308}"), "");
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("ação"), "acao");
        assert_eq!(strip_accents("Ñandú!"), "Nandu!");
    }
}
