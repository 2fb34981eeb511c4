//! Registration form validation and submission handling
//!
//! This crate implements the client-side behavior of a single
//! registration form, headless: field validators (name, email, password,
//! confirm-password, phone), inline error display, a live phone input
//! mask, and a simulated asynchronous submission with success feedback.
//!
//! The page itself is abstracted behind [`FormSurface`]; the controller
//! only reads and writes that interface, so the whole flow runs under
//! test without a browser. The submission is an injected capability
//! ([`SubmitBackend`]) awaited to completion before the submit control
//! is re-enabled.

pub mod config;
pub mod controller;
pub mod events;
pub mod field;
pub mod mask;
pub mod submit;
pub mod surface;
pub mod validators;

pub use config::FormConfig;
pub use controller::{RegistrationController, SubmitOutcome, SubmitState};
pub use events::FormEvent;
pub use field::{FieldError, FieldId, FieldResult};
pub use mask::{MAX_PHONE_DIGITS, mask_phone};
pub use submit::{Registration, SimulatedBackend, SubmitBackend, SubmitError, SubmitResult};
pub use surface::{FormSurface, MemorySurface};
pub use validators::{
	EmailValidator, NameValidator, PasswordMatchValidator, PasswordValidator, PhoneValidator,
};
