//! Events consumed from the host page

use crate::field::FieldId;

/// The three events the controller reacts to.
///
/// `Blur` validates the field it names, `Input` clears that field's
/// error (re-masking first for the phone field), and `Submit` runs the
/// whole-form submission path with native submission suppressed by the
/// host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
	Blur(FieldId),
	Input(FieldId),
	Submit,
}
