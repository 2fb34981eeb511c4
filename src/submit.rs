//! Submission capability
//!
//! The controller does not know how a registration leaves the page; it
//! awaits a [`SubmitBackend`]. The default [`SimulatedBackend`] encodes
//! the payload, sleeps for a fixed delay, and reports success — the
//! shape of a network round trip without the network. Tests inject
//! instant or failing backends through the same seam.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Round-trip delay of the simulated submission.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// The collected form values handed to the backend on a valid submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
	pub name: String,
	pub email: String,
	pub password: String,
	/// Masked phone number, or empty — the field is optional.
	pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
	#[error("could not encode registration: {0}")]
	Encode(String),
	#[error("backend rejected registration: {0}")]
	Rejected(String),
}

pub type SubmitResult<T> = Result<T, SubmitError>;

/// Asynchronous submission seam awaited by the controller.
///
/// The controller stays busy until `submit` resolves; implementations
/// must run to completion rather than detach work, or the re-enable
/// ordering contract breaks.
#[async_trait]
pub trait SubmitBackend: Send + Sync {
	async fn submit(&self, registration: &Registration) -> SubmitResult<()>;
}

/// Backend that simulates a server round trip with a fixed delay.
///
/// # Examples
///
/// ```
/// use signup_form::{Registration, SimulatedBackend, SubmitBackend};
/// use std::time::Duration;
///
/// let backend = SimulatedBackend::new().with_delay(Duration::ZERO);
/// let registration = Registration {
///     name: "John Doe".to_string(),
///     email: "john@example.com".to_string(),
///     password: "Abcdefg1".to_string(),
///     phone: String::new(),
/// };
/// tokio_test::block_on(async {
///     assert!(backend.submit(&registration).await.is_ok());
/// });
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
	delay: Duration,
}

impl SimulatedBackend {
	pub fn new() -> Self {
		Self {
			delay: DEFAULT_SUBMIT_DELAY,
		}
	}

	/// Overrides the simulated round-trip delay.
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}
}

impl Default for SimulatedBackend {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl SubmitBackend for SimulatedBackend {
	async fn submit(&self, registration: &Registration) -> SubmitResult<()> {
		// Encode the payload as a real client would put it on the wire.
		let payload =
			serde_json::to_vec(registration).map_err(|e| SubmitError::Encode(e.to_string()))?;
		tracing::debug!(
			bytes = payload.len(),
			email = %registration.email,
			"simulated registration round trip"
		);

		tokio::time::sleep(self.delay).await;
		Ok(())
	}
}
