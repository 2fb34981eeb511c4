//! The form controller
//!
//! One controller instance is constructed per page view with references
//! to its collaborators: the [`FormSurface`] it reads and mutates, and
//! the [`SubmitBackend`] it awaits on a valid submit. All validation is
//! synchronous; the only suspension point is the backend round trip,
//! plus the detached success-notice timer.

use crate::config::FormConfig;
use crate::events::FormEvent;
use crate::field::{FieldId, FieldResult};
use crate::mask::mask_phone;
use crate::submit::{Registration, SubmitBackend};
use crate::surface::FormSurface;
use crate::validators::{
	EmailValidator, NameValidator, PasswordMatchValidator, PasswordValidator, PhoneValidator,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Submit control state.
///
/// `Idle` shows the enabled control with its idle label; `Busy` covers
/// the window between submit acceptance and backend completion, with
/// the control disabled and relabeled. An invalid submit causes no
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
	Idle,
	Busy,
}

/// What a call to [`RegistrationController::handle_submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// A submission was already in flight; this one was dropped.
	Ignored,
	/// Validation failed; errors stay displayed, no state change.
	Rejected,
	/// The backend accepted the registration.
	Completed,
	/// The backend failed; the form returned to idle without success
	/// feedback.
	Failed(crate::submit::SubmitError),
}

/// Controller for the registration form.
///
/// # Examples
///
/// ```
/// use signup_form::{
///     FieldId, FormSurface, MemorySurface, RegistrationController, SimulatedBackend,
///     SubmitOutcome,
/// };
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let surface = Arc::new(MemorySurface::new());
/// let backend = Arc::new(SimulatedBackend::new().with_delay(Duration::ZERO));
/// let controller = RegistrationController::new(surface.clone(), backend);
///
/// surface.set_value(FieldId::Name, "John Doe");
/// surface.set_value(FieldId::Email, "john@example.com");
/// surface.set_value(FieldId::Password, "Abcdefg1");
/// surface.set_value(FieldId::ConfirmPassword, "Abcdefg1");
///
/// tokio_test::block_on(async {
///     assert_eq!(controller.handle_submit().await, SubmitOutcome::Completed);
/// });
/// assert_eq!(surface.value(FieldId::Name), "");
/// ```
pub struct RegistrationController {
	surface: Arc<dyn FormSurface>,
	backend: Arc<dyn SubmitBackend>,
	config: FormConfig,
	state: Mutex<SubmitState>,
	name: NameValidator,
	email: EmailValidator,
	password: PasswordValidator,
	confirm: PasswordMatchValidator,
	phone: PhoneValidator,
}

impl RegistrationController {
	/// Creates a controller with the default labels and timings.
	pub fn new(surface: Arc<dyn FormSurface>, backend: Arc<dyn SubmitBackend>) -> Self {
		Self::with_config(surface, backend, FormConfig::default())
	}

	/// Creates a controller with explicit configuration.
	pub fn with_config(
		surface: Arc<dyn FormSurface>,
		backend: Arc<dyn SubmitBackend>,
		config: FormConfig,
	) -> Self {
		Self {
			surface,
			backend,
			config,
			state: Mutex::new(SubmitState::Idle),
			name: NameValidator::new(),
			email: EmailValidator::new(),
			password: PasswordValidator::new(),
			confirm: PasswordMatchValidator::new(),
			phone: PhoneValidator::new(),
		}
	}

	/// Current submit control state.
	pub fn state(&self) -> SubmitState {
		*self.state.lock()
	}

	/// Writes a validation result into the field's error slot.
	fn apply(&self, field: FieldId, result: FieldResult<()>) -> bool {
		match result {
			Ok(()) => {
				self.surface.clear_error(field);
				true
			}
			Err(error) => {
				tracing::debug!(field = %field, %error, "field validation failed");
				self.surface.set_error(field, error.message());
				false
			}
		}
	}

	/// Validates the name field against its current surface value.
	pub fn validate_name(&self) -> bool {
		let value = self.surface.value(FieldId::Name);
		self.apply(FieldId::Name, self.name.validate(&value))
	}

	/// Validates the email field.
	pub fn validate_email(&self) -> bool {
		let value = self.surface.value(FieldId::Email);
		self.apply(FieldId::Email, self.email.validate(&value))
	}

	/// Validates the password field.
	pub fn validate_password(&self) -> bool {
		let value = self.surface.value(FieldId::Password);
		self.apply(FieldId::Password, self.password.validate(&value))
	}

	/// Validates the confirm-password field against the password field's
	/// live value.
	pub fn validate_confirm_password(&self) -> bool {
		let confirm = self.surface.value(FieldId::ConfirmPassword);
		let password = self.surface.value(FieldId::Password);
		self.apply(
			FieldId::ConfirmPassword,
			self.confirm.validate(&confirm, &password),
		)
	}

	/// Validates the phone field. Empty is valid; the field is optional.
	pub fn validate_phone(&self) -> bool {
		let value = self.surface.value(FieldId::Phone);
		self.apply(FieldId::Phone, self.phone.validate(&value))
	}

	/// Runs all five validators and returns the conjunction.
	///
	/// Never short-circuits: every field's error slot is refreshed even
	/// when an earlier field failed, so no stale message survives a
	/// submit attempt.
	pub fn validate_all_fields(&self) -> bool {
		let name = self.validate_name();
		let email = self.validate_email();
		let password = self.validate_password();
		let confirm = self.validate_confirm_password();
		let phone = self.validate_phone();
		name && email && password && confirm && phone
	}

	/// Runs the submission path with native submission suppressed.
	///
	/// A submit during the busy window is ignored rather than re-queued;
	/// a submit of an invalid form leaves the errors displayed and the
	/// control idle. A valid submit disables the control, swaps in the
	/// busy label, awaits the backend, then shows the success notice,
	/// clears every field, and restores the idle control. Validators
	/// complete before the busy transition.
	pub async fn handle_submit(&self) -> SubmitOutcome {
		{
			let mut state = self.state.lock();
			if *state == SubmitState::Busy {
				tracing::debug!("submit ignored: already busy");
				return SubmitOutcome::Ignored;
			}
			if !self.validate_all_fields() {
				tracing::debug!("submit rejected: form invalid");
				return SubmitOutcome::Rejected;
			}
			*state = SubmitState::Busy;
		}

		self.surface.set_submit_enabled(false);
		self.surface.set_submit_label(&self.config.busy_label);

		let registration = self.collect();
		let outcome = match self.backend.submit(&registration).await {
			Ok(()) => {
				tracing::info!(email = %registration.email, "registration submitted");
				self.show_success();
				for field in FieldId::ALL {
					self.surface.set_value(field, "");
				}
				SubmitOutcome::Completed
			}
			Err(error) => {
				tracing::warn!(%error, "registration submission failed");
				SubmitOutcome::Failed(error)
			}
		};

		self.surface.set_submit_enabled(true);
		self.surface.set_submit_label(&self.config.idle_label);
		*self.state.lock() = SubmitState::Idle;
		outcome
	}

	/// Shows the success notice and detaches its auto-hide timer.
	///
	/// The timer is fire-and-forget and not awaited by anything; it
	/// outlives the submit that started it.
	pub fn show_success(&self) {
		self.surface.set_success_visible(true);

		let surface = Arc::clone(&self.surface);
		let timeout = self.config.success_timeout;
		tokio::spawn(async move {
			tokio::time::sleep(timeout).await;
			surface.set_success_visible(false);
		});
	}

	/// Blur handler: validates the single field that lost focus.
	pub fn handle_blur(&self, field: FieldId) -> bool {
		match field {
			FieldId::Name => self.validate_name(),
			FieldId::Email => self.validate_email(),
			FieldId::Password => self.validate_password(),
			FieldId::ConfirmPassword => self.validate_confirm_password(),
			FieldId::Phone => self.validate_phone(),
		}
	}

	/// Input handler: clears the field's error immediately, independent
	/// of revalidation, so a stale message never lingers while typing.
	/// The phone field is re-masked in place first.
	pub fn handle_input(&self, field: FieldId) {
		if field == FieldId::Phone {
			let masked = mask_phone(&self.surface.value(FieldId::Phone));
			self.surface.set_value(FieldId::Phone, &masked);
		}
		self.surface.clear_error(field);
	}

	/// Dispatches one host event.
	pub async fn handle_event(&self, event: FormEvent) {
		match event {
			FormEvent::Blur(field) => {
				self.handle_blur(field);
			}
			FormEvent::Input(field) => self.handle_input(field),
			FormEvent::Submit => {
				self.handle_submit().await;
			}
		}
	}

	fn collect(&self) -> Registration {
		Registration {
			name: self.surface.value(FieldId::Name),
			email: self.surface.value(FieldId::Email),
			password: self.surface.value(FieldId::Password),
			phone: self.surface.value(FieldId::Phone),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::submit::SimulatedBackend;
	use crate::surface::MemorySurface;
	use crate::validators;
	use rstest::rstest;
	use std::time::Duration;

	fn controller_with_surface() -> (Arc<MemorySurface>, RegistrationController) {
		let surface = Arc::new(MemorySurface::new());
		let backend = Arc::new(SimulatedBackend::new().with_delay(Duration::ZERO));
		let controller = RegistrationController::new(surface.clone(), backend);
		(surface, controller)
	}

	#[rstest]
	fn test_blur_validates_and_displays_error() {
		// Arrange
		let (surface, controller) = controller_with_surface();
		surface.set_value(FieldId::Email, "not-an-email");

		// Act
		let valid = controller.handle_blur(FieldId::Email);

		// Assert
		assert!(!valid);
		assert_eq!(
			surface.error(FieldId::Email).as_deref(),
			Some(validators::EMAIL_INVALID)
		);
	}

	#[rstest]
	fn test_input_clears_error_without_revalidation() {
		// Arrange: an invalid value with its error showing
		let (surface, controller) = controller_with_surface();
		surface.set_value(FieldId::Name, "J");
		assert!(!controller.validate_name());
		assert!(surface.error(FieldId::Name).is_some());

		// Act: the value is still invalid, but an input event fires
		controller.handle_input(FieldId::Name);

		// Assert: the slot is empty until the next blur or submit
		assert_eq!(surface.error(FieldId::Name), None);
		assert_eq!(surface.value(FieldId::Name), "J");
	}

	#[rstest]
	fn test_phone_input_is_remasked_in_place() {
		// Arrange
		let (surface, controller) = controller_with_surface();
		surface.set_value(FieldId::Phone, "11999999999");

		// Act
		controller.handle_input(FieldId::Phone);

		// Assert
		assert_eq!(surface.value(FieldId::Phone), "(11) 99999-9999");
	}

	#[rstest]
	fn test_confirm_password_reads_live_password() {
		// Arrange
		let (surface, controller) = controller_with_surface();
		surface.set_value(FieldId::Password, "Abcdefg1");
		surface.set_value(FieldId::ConfirmPassword, "Abcdefg1");
		assert!(controller.validate_confirm_password());

		// Act: the password changes after confirm was validated
		surface.set_value(FieldId::Password, "Changed1x");

		// Assert: re-check must now fail
		assert!(!controller.validate_confirm_password());
		assert_eq!(
			surface.error(FieldId::ConfirmPassword).as_deref(),
			Some(validators::CONFIRM_MISMATCH)
		);
	}

	#[rstest]
	fn test_validate_all_fields_refreshes_every_slot() {
		// Arrange: two invalid fields with stale errors on the valid ones
		let (surface, controller) = controller_with_surface();
		surface.set_value(FieldId::Name, "John Doe");
		surface.set_value(FieldId::Email, "bad");
		surface.set_value(FieldId::Password, "Abcdefg1");
		surface.set_value(FieldId::ConfirmPassword, "different");
		surface.set_value(FieldId::Phone, "(11) 99999-9999");
		surface.set_error(FieldId::Name, "stale message");

		// Act
		let valid = controller.validate_all_fields();

		// Assert: no stale errors on valid fields, no missing errors on
		// invalid ones
		assert!(!valid);
		assert_eq!(surface.error(FieldId::Name), None);
		assert_eq!(
			surface.error(FieldId::Email).as_deref(),
			Some(validators::EMAIL_INVALID)
		);
		assert_eq!(surface.error(FieldId::Password), None);
		assert_eq!(
			surface.error(FieldId::ConfirmPassword).as_deref(),
			Some(validators::CONFIRM_MISMATCH)
		);
		assert_eq!(surface.error(FieldId::Phone), None);
	}

	#[rstest]
	fn test_empty_phone_is_valid() {
		// Arrange
		let (surface, controller) = controller_with_surface();

		// Act & Assert
		assert!(controller.validate_phone());
		assert_eq!(surface.error(FieldId::Phone), None);
	}

	#[rstest]
	fn test_controller_starts_idle() {
		let (_surface, controller) = controller_with_surface();
		assert_eq!(controller.state(), SubmitState::Idle);
	}
}
