//! Per-field validators for the registration form
//!
//! Each validator is a pure check from a field's current text value to a
//! [`FieldResult`]; the error message is exactly what the form displays
//! in the field's error slot.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must have at least 2 characters";
pub const NAME_BAD_CHARS: &str = "Name must contain only letters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must have at least 8 characters";
pub const PASSWORD_TOO_WEAK: &str = "Password must contain uppercase, lowercase letters and numbers";
pub const CONFIRM_REQUIRED: &str = "Confirm your password";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match";
pub const PHONE_INVALID: &str = "Format: (11) 99999-9999";

// Letters (including accented Latin), spaces, and apostrophes.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-ZÀ-ÿ\s']+$").expect("NAME_REGEX: invalid regex pattern")
});

// local@domain.tld — no whitespace or `@` inside the parts, at least
// one dot in the domain.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// (NN) NNNN-NNNN or (NN) NNNNN-NNNN.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").expect("PHONE_REGEX: invalid regex pattern")
});

/// Validates the name field.
///
/// A valid name:
/// - Is non-empty after trimming whitespace
/// - Has at least 2 characters after trimming
/// - Contains only letters (including accented Latin letters), spaces,
///   and apostrophes
///
/// # Examples
///
/// ```
/// use signup_form::validators::NameValidator;
///
/// let validator = NameValidator::new();
/// assert!(validator.validate("John Doe").is_ok());
/// assert!(validator.validate("José").is_ok());
/// assert!(validator.validate("O'Neil").is_ok());
/// assert!(validator.validate("").is_err());
/// assert!(validator.validate("John3").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NameValidator;

impl NameValidator {
	pub fn new() -> Self {
		Self
	}

	/// Validates the given value as a name.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			return Err(FieldError::Required(NAME_REQUIRED.to_string()));
		}

		// Character count, not byte count, so accented names are not
		// under-counted.
		if trimmed.chars().count() < 2 {
			return Err(FieldError::Invalid(NAME_TOO_SHORT.to_string()));
		}

		if !NAME_REGEX.is_match(value) {
			return Err(FieldError::Invalid(NAME_BAD_CHARS.to_string()));
		}

		Ok(())
	}
}

impl Default for NameValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates the email field against `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use signup_form::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("user@example.com").is_ok());
/// assert!(validator.validate("user@domain").is_err());
/// assert!(validator.validate("").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator;

impl EmailValidator {
	pub fn new() -> Self {
		Self
	}

	/// Validates the given value as an email address.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.trim().is_empty() {
			return Err(FieldError::Required(EMAIL_REQUIRED.to_string()));
		}

		if !EMAIL_REGEX.is_match(value) {
			return Err(FieldError::Invalid(EMAIL_INVALID.to_string()));
		}

		Ok(())
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates the password field.
///
/// A valid password has at least 8 characters and contains at least one
/// lowercase letter, one uppercase letter, and one digit, in any order.
/// The class checks are plain character scans; the `regex` crate has no
/// lookahead.
///
/// # Examples
///
/// ```
/// use signup_form::validators::PasswordValidator;
///
/// let validator = PasswordValidator::new();
/// assert!(validator.validate("Abcdefg1").is_ok());
/// assert!(validator.validate("abcdefg1").is_err());
/// assert!(validator.validate("Abc123").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordValidator;

impl PasswordValidator {
	pub fn new() -> Self {
		Self
	}

	/// Validates the given value as a password.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.is_empty() {
			return Err(FieldError::Required(PASSWORD_REQUIRED.to_string()));
		}

		if value.chars().count() < 8 {
			return Err(FieldError::Invalid(PASSWORD_TOO_SHORT.to_string()));
		}

		let has_lowercase = value.chars().any(|c| c.is_ascii_lowercase());
		let has_uppercase = value.chars().any(|c| c.is_ascii_uppercase());
		let has_digit = value.chars().any(|c| c.is_ascii_digit());
		if !(has_lowercase && has_uppercase && has_digit) {
			return Err(FieldError::Invalid(PASSWORD_TOO_WEAK.to_string()));
		}

		Ok(())
	}
}

impl Default for PasswordValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates the confirm-password field against the live password value.
///
/// The password argument is read at call time, so changing the password
/// after the confirmation was validated invalidates it on re-check.
///
/// # Examples
///
/// ```
/// use signup_form::validators::PasswordMatchValidator;
///
/// let validator = PasswordMatchValidator::new();
/// assert!(validator.validate("Abcdefg1", "Abcdefg1").is_ok());
/// assert!(validator.validate("different", "Abcdefg1").is_err());
/// assert!(validator.validate("", "Abcdefg1").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordMatchValidator;

impl PasswordMatchValidator {
	pub fn new() -> Self {
		Self
	}

	/// Validates `confirm` against the current `password` value.
	pub fn validate(&self, confirm: &str, password: &str) -> FieldResult<()> {
		if confirm.is_empty() {
			return Err(FieldError::Required(CONFIRM_REQUIRED.to_string()));
		}

		if confirm != password {
			return Err(FieldError::Invalid(CONFIRM_MISMATCH.to_string()));
		}

		Ok(())
	}
}

impl Default for PasswordMatchValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates the phone field.
///
/// The phone is optional: an empty value is valid. A non-empty value
/// must match `(NN) NNNN-NNNN` or `(NN) NNNNN-NNNN` — a 2-digit area
/// code, a 4-or-5-digit prefix, and a 4-digit suffix.
///
/// # Examples
///
/// ```
/// use signup_form::validators::PhoneValidator;
///
/// let validator = PhoneValidator::new();
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("(11) 99999-9999").is_ok());
/// assert!(validator.validate("(11) 9999-9999").is_ok());
/// assert!(validator.validate("11999999999").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneValidator;

impl PhoneValidator {
	pub fn new() -> Self {
		Self
	}

	/// Validates the given value as a formatted phone number.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.is_empty() {
			return Ok(());
		}

		if !PHONE_REGEX.is_match(value) {
			return Err(FieldError::Invalid(PHONE_INVALID.to_string()));
		}

		Ok(())
	}
}

impl Default for PhoneValidator {
	fn default() -> Self {
		Self::new()
	}
}
