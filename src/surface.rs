//! Interactive surface abstraction
//!
//! The controller never touches a real page. It talks to a
//! [`FormSurface`], which owns the field values, the per-field error
//! slots, the submit control, and the success notice. A host embedding
//! the controller implements this trait over its widget tree; tests and
//! headless embedders use [`MemorySurface`].

use crate::config;
use crate::field::FieldId;
use parking_lot::Mutex;
use std::collections::HashMap;

/// The host page's interactive elements, as seen by the controller.
///
/// All operations are synchronous; the surface owns the storage and the
/// controller reads it at call time (the confirm-password check depends
/// on that).
pub trait FormSurface: Send + Sync {
	/// Current text value of a field's input element.
	fn value(&self, field: FieldId) -> String;

	/// Replaces a field's text value (mask rewrites, form reset).
	fn set_value(&self, field: FieldId, value: &str);

	/// Writes a message into the field's error slot and flags the input.
	fn set_error(&self, field: FieldId, message: &str);

	/// Empties the field's error slot and unflags the input.
	fn clear_error(&self, field: FieldId);

	/// Enables or disables the submit control.
	fn set_submit_enabled(&self, enabled: bool);

	/// Replaces the submit control's label text.
	fn set_submit_label(&self, label: &str);

	/// Shows or hides the success notice.
	fn set_success_visible(&self, visible: bool);
}

#[derive(Debug)]
struct PageState {
	values: HashMap<FieldId, String>,
	errors: HashMap<FieldId, String>,
	submit_enabled: bool,
	submit_label: String,
	success_visible: bool,
}

/// In-memory [`FormSurface`] for headless use.
///
/// Holds the same state a host page would: one value and one error slot
/// per field, the submit control's enabled flag and label, and the
/// success notice's visibility. The read accessors beyond the trait
/// exist so tests can assert on what the "page" shows.
///
/// # Examples
///
/// ```
/// use signup_form::{FieldId, FormSurface, MemorySurface};
///
/// let surface = MemorySurface::new();
/// assert_eq!(surface.value(FieldId::Name), "");
/// assert!(surface.submit_enabled());
///
/// surface.set_value(FieldId::Name, "John");
/// surface.set_error(FieldId::Email, "Email is required");
///
/// assert_eq!(surface.value(FieldId::Name), "John");
/// assert_eq!(surface.error(FieldId::Email).as_deref(), Some("Email is required"));
/// ```
#[derive(Debug)]
pub struct MemorySurface {
	state: Mutex<PageState>,
}

impl MemorySurface {
	pub fn new() -> Self {
		Self {
			state: Mutex::new(PageState {
				values: HashMap::new(),
				errors: HashMap::new(),
				submit_enabled: true,
				submit_label: config::DEFAULT_IDLE_LABEL.to_string(),
				success_visible: false,
			}),
		}
	}

	/// The message currently shown in a field's error slot, if any.
	pub fn error(&self, field: FieldId) -> Option<String> {
		self.state.lock().errors.get(&field).cloned()
	}

	/// Whether the submit control is enabled.
	pub fn submit_enabled(&self) -> bool {
		self.state.lock().submit_enabled
	}

	/// The submit control's current label text.
	pub fn submit_label(&self) -> String {
		self.state.lock().submit_label.clone()
	}

	/// Whether the success notice is visible.
	pub fn success_visible(&self) -> bool {
		self.state.lock().success_visible
	}
}

impl Default for MemorySurface {
	fn default() -> Self {
		Self::new()
	}
}

impl FormSurface for MemorySurface {
	fn value(&self, field: FieldId) -> String {
		self.state.lock().values.get(&field).cloned().unwrap_or_default()
	}

	fn set_value(&self, field: FieldId, value: &str) {
		self.state.lock().values.insert(field, value.to_string());
	}

	fn set_error(&self, field: FieldId, message: &str) {
		self.state.lock().errors.insert(field, message.to_string());
	}

	fn clear_error(&self, field: FieldId) {
		self.state.lock().errors.remove(&field);
	}

	fn set_submit_enabled(&self, enabled: bool) {
		self.state.lock().submit_enabled = enabled;
	}

	fn set_submit_label(&self, label: &str) {
		label.clone_into(&mut self.state.lock().submit_label);
	}

	fn set_success_visible(&self, visible: bool) {
		self.state.lock().success_visible = visible;
	}
}
