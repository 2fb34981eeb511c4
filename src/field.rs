//! Field identity and validation error types

/// Identifier for one of the registration form's inputs.
///
/// Each field has a paired error-display slot on the host page named
/// `<id>Error`.
///
/// # Examples
///
/// ```
/// use signup_form::FieldId;
///
/// assert_eq!(FieldId::Name.as_str(), "name");
/// assert_eq!(FieldId::ConfirmPassword.error_slot(), "confirmPasswordError");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
	Name,
	Email,
	Password,
	ConfirmPassword,
	Phone,
}

impl FieldId {
	/// All fields in form order.
	pub const ALL: [FieldId; 5] = [
		FieldId::Name,
		FieldId::Email,
		FieldId::Password,
		FieldId::ConfirmPassword,
		FieldId::Phone,
	];

	/// The input element identifier on the host page.
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldId::Name => "name",
			FieldId::Email => "email",
			FieldId::Password => "password",
			FieldId::ConfirmPassword => "confirmPassword",
			FieldId::Phone => "phone",
		}
	}

	/// The identifier of the paired error-display element.
	pub fn error_slot(&self) -> &'static str {
		match self {
			FieldId::Name => "nameError",
			FieldId::Email => "emailError",
			FieldId::Password => "passwordError",
			FieldId::ConfirmPassword => "confirmPasswordError",
			FieldId::Phone => "phoneError",
		}
	}
}

impl std::fmt::Display for FieldId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A field validation failure carrying the user-facing message.
///
/// `Required` marks an empty value where one was expected; `Invalid`
/// marks a present value that fails the field's format rules. The
/// `Display` output is exactly the message shown in the error slot.
///
/// # Examples
///
/// ```
/// use signup_form::FieldError;
///
/// let err = FieldError::Required("Name is required".to_string());
/// assert_eq!(err.to_string(), "Name is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Required(String),
	#[error("{0}")]
	Invalid(String),
}

impl FieldError {
	/// The user-facing message, without allocating.
	pub fn message(&self) -> &str {
		match self {
			FieldError::Required(msg) | FieldError::Invalid(msg) => msg,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldId::Name, "name", "nameError")]
	#[case(FieldId::Email, "email", "emailError")]
	#[case(FieldId::Password, "password", "passwordError")]
	#[case(FieldId::ConfirmPassword, "confirmPassword", "confirmPasswordError")]
	#[case(FieldId::Phone, "phone", "phoneError")]
	fn test_field_identifiers(#[case] field: FieldId, #[case] id: &str, #[case] slot: &str) {
		assert_eq!(field.as_str(), id);
		assert_eq!(field.error_slot(), slot);
		assert_eq!(field.to_string(), id);
	}

	#[rstest]
	fn test_all_fields_in_form_order() {
		let ids: Vec<&str> = FieldId::ALL.iter().map(|f| f.as_str()).collect();
		assert_eq!(
			ids,
			vec!["name", "email", "password", "confirmPassword", "phone"]
		);
	}

	#[rstest]
	fn test_field_error_message() {
		// Arrange
		let required = FieldError::Required("Email is required".to_string());
		let invalid = FieldError::Invalid("Enter a valid email".to_string());

		// Act & Assert
		assert_eq!(required.message(), "Email is required");
		assert_eq!(invalid.message(), "Enter a valid email");
		assert_eq!(invalid.to_string(), invalid.message());
	}
}
