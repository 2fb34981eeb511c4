//! Live input mask for the phone field
//!
//! On every input event the raw value is reduced to its digits and
//! re-formatted progressively as digits accumulate. Digits beyond the
//! eleventh are dropped, so a pasted over-long number can never sit in
//! the field unmasked.

/// Most digits a masked phone number can hold: 2-digit area code,
/// 5-digit prefix, 4-digit suffix.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Reformats raw phone input into the punctuated display format.
///
/// Strips all non-digit characters, keeps at most
/// [`MAX_PHONE_DIGITS`] digits, then formats progressively:
///
/// - 1–2 digits → `(DD`
/// - 3–6 digits → `(DD) DDDD`
/// - 7–10 digits → `(DD) DDDD-DDDD`
/// - 11 digits → `(DD) DDDDD-DDDD`
///
/// An empty value (or one with no digits) masks to the empty string so
/// clearing the field leaves no residue.
///
/// # Examples
///
/// ```
/// use signup_form::mask_phone;
///
/// assert_eq!(mask_phone("1"), "(1");
/// assert_eq!(mask_phone("119"), "(11) 9");
/// assert_eq!(mask_phone("1199999999"), "(11) 9999-9999");
/// assert_eq!(mask_phone("11999999999"), "(11) 99999-9999");
/// assert_eq!(mask_phone("(11) 99999-9999"), "(11) 99999-9999");
/// ```
pub fn mask_phone(input: &str) -> String {
	let digits: String = input
		.chars()
		.filter(|c| c.is_ascii_digit())
		.take(MAX_PHONE_DIGITS)
		.collect();

	// The slicing below stays on byte boundaries: digits is ASCII only.
	match digits.len() {
		0 => String::new(),
		1..=2 => format!("({digits}"),
		3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
		7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
		_ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("", "")]
	#[case("abc-", "")]
	#[case("1", "(1")]
	#[case("11", "(11")]
	#[case("119", "(11) 9")]
	#[case("1199", "(11) 99")]
	#[case("119999", "(11) 9999")]
	#[case("1199999", "(11) 9999-9")]
	#[case("11999999", "(11) 9999-99")]
	#[case("1199999999", "(11) 9999-9999")]
	#[case("11999999999", "(11) 99999-9999")]
	fn test_mask_progressive(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(mask_phone(input), expected);
	}

	#[rstest]
	fn test_mask_keyed_one_digit_at_a_time() {
		// Arrange: the mask output is re-fed on every keystroke, as the
		// input handler does.
		let mut value = String::new();

		// Act
		for digit in "1199999999".chars() {
			value.push(digit);
			value = mask_phone(&value);
		}

		// Assert
		assert_eq!(value, "(11) 9999-9999");

		value.push('9');
		assert_eq!(mask_phone(&value), "(11) 99999-9999");
	}

	#[rstest]
	fn test_mask_is_idempotent_on_formatted_values() {
		assert_eq!(mask_phone("(11) 9999-9999"), "(11) 9999-9999");
		assert_eq!(mask_phone("(11) 99999-9999"), "(11) 99999-9999");
	}

	#[rstest]
	fn test_mask_truncates_beyond_eleven_digits() {
		assert_eq!(mask_phone("119999999991234"), mask_phone("11999999999"));
		assert_eq!(mask_phone("119999999991234"), "(11) 99999-9999");
	}

	proptest! {
		#[test]
		fn mask_preserves_leading_digits(input in "[0-9 ()\\-a-z]{0,20}") {
			let masked = mask_phone(&input);
			let digits_in: String = input
				.chars()
				.filter(|c| c.is_ascii_digit())
				.take(MAX_PHONE_DIGITS)
				.collect();
			let digits_out: String = masked.chars().filter(|c| c.is_ascii_digit()).collect();
			prop_assert_eq!(digits_out, digits_in);
		}

		#[test]
		fn mask_output_is_bounded(input in "\\PC{0,40}") {
			let masked = mask_phone(&input);
			// Worst case: "(DD) DDDDD-DDDD" is 15 characters.
			prop_assert!(masked.len() <= 15);
		}
	}
}
