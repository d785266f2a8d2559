//! ASCII <-> Devanagari numeral transliteration.

use std::fmt::Display;

use crate::DEVANAGARI_DIGITS;

/// Replaces every ASCII digit in the rendered `value` with its Devanagari
/// counterpart. Any other character passes through unchanged.
///
/// ```
/// use bs_date::to_devanagari_digits;
///
/// assert_eq!(to_devanagari_digits(2081), "२०८१");
/// assert_eq!(to_devanagari_digits("12:30"), "१२:३०");
/// ```
pub fn to_devanagari_digits(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => DEVANAGARI_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Inverse of [`to_devanagari_digits`]: Devanagari numerals become ASCII.
pub fn to_ascii_digits(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            DEVANAGARI_DIGITS
                .iter()
                .position(|&d| d == c)
                .and_then(|i| char::from_digit(i as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_maps() {
        let expected = "०१२३४५६७८९";
        for (i, ch) in expected.chars().enumerate() {
            assert_eq!(to_devanagari_digits(i), ch.to_string(), "digit {i}");
            assert_eq!(to_devanagari_digits(i.to_string()), ch.to_string());
        }
    }

    #[test]
    fn test_integer_and_string_inputs() {
        assert_eq!(to_devanagari_digits(2081), "२०८१");
        assert_eq!(to_devanagari_digits("12:30"), "१२:३०");
        assert_eq!(to_devanagari_digits(-7), "-७");
    }

    #[test]
    fn test_non_digits_pass_through() {
        assert_eq!(to_devanagari_digits("abc / माघ"), "abc / माघ");
        assert_eq!(to_devanagari_digits(""), "");
        // already Devanagari stays as is
        assert_eq!(to_devanagari_digits("२०८१"), "२०८१");
    }

    #[test]
    fn test_to_ascii_digits() {
        assert_eq!(to_ascii_digits("२०८१/११/२३"), "2081/11/23");
        assert_eq!(to_ascii_digits("2081 साल"), "2081 साल");
        assert_eq!(to_ascii_digits(&to_devanagari_digits("0123456789")), "0123456789");
    }
}
