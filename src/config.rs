//! Controller configuration

use std::time::Duration;

/// Submit control label while the form is idle.
pub const DEFAULT_IDLE_LABEL: &str = "Create Account";

/// Submit control label during the simulated round trip.
pub const DEFAULT_BUSY_LABEL: &str = "Registering...";

/// How long the success notice stays visible before auto-hiding.
pub const DEFAULT_SUCCESS_TIMEOUT: Duration = Duration::from_millis(5000);

/// Labels and timings for the form controller.
///
/// # Examples
///
/// ```
/// use signup_form::FormConfig;
/// use std::time::Duration;
///
/// let config = FormConfig::default();
/// assert_eq!(config.idle_label, "Create Account");
/// assert_eq!(config.success_timeout, Duration::from_millis(5000));
/// ```
#[derive(Debug, Clone)]
pub struct FormConfig {
	/// Submit control label in the idle state.
	pub idle_label: String,
	/// Submit control label in the busy state.
	pub busy_label: String,
	/// Visibility window of the success notice.
	pub success_timeout: Duration,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			idle_label: DEFAULT_IDLE_LABEL.to_string(),
			busy_label: DEFAULT_BUSY_LABEL.to_string(),
			success_timeout: DEFAULT_SUCCESS_TIMEOUT,
		}
	}
}
