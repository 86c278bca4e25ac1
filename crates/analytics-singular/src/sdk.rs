// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The outbound contract with the Singular attribution SDK.
//!
//! Singular ships as a process-wide singleton that owns its own
//! networking, persistence, and batching. The destination plugin never
//! talks to that singleton directly; it calls through [`SingularSdk`] so
//! hosts decide the binding and tests substitute a recording double.

use std::sync::Arc;

/// Configuration handed to Singular when the SDK is started.
///
/// Built from the `apiKey` and `secret` in the plugin's settings block;
/// the SKAN flags come from the plugin's construction-time configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingularConfig {
	pub api_key: String,
	pub secret: String,
	pub skadnetwork_enabled: bool,
	pub manual_skan_conversion_management: bool,
}

impl SingularConfig {
	/// Creates a config with both SKAN flags disabled.
	pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self {
			api_key: api_key.into(),
			secret: secret.into(),
			skadnetwork_enabled: false,
			manual_skan_conversion_management: false,
		}
	}
}

/// The capability set the destination plugin needs from Singular.
///
/// Implementations are expected to be cheap to call; delivery, retry, and
/// storage are Singular's concern. The SDK singleton supports exactly one
/// [`start`](SingularSdk::start) per process; the plugin's initialization
/// guard upholds that, not the implementations of this trait.
pub trait SingularSdk: Send + Sync {
	/// Reports the wrapping library's name and version, used by Singular
	/// for attribution telemetry.
	fn set_wrapper(&self, name: &str, version: &str);

	/// Starts the SDK with the given configuration.
	fn start(&self, config: SingularConfig);

	/// Records a plain named event.
	fn event(&self, name: &str);

	/// Records a revenue event with an optional ISO currency code.
	fn revenue(&self, name: &str, currency: Option<&str>, amount: f64);

	/// Associates subsequent events with a custom user id.
	fn set_custom_user_id(&self, user_id: &str);

	/// Clears the custom user id.
	fn unset_custom_user_id(&self);
}

/// Type alias for a shared SDK handle.
pub type SharedSingularSdk = Arc<dyn SingularSdk>;

/// A Singular binding that discards every call.
///
/// Useful for wiring the plugin into a pipeline without a live vendor
/// binding, e.g. in development builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSingularSdk;

impl SingularSdk for NoOpSingularSdk {
	fn set_wrapper(&self, _name: &str, _version: &str) {}

	fn start(&self, _config: SingularConfig) {}

	fn event(&self, _name: &str) {}

	fn revenue(&self, _name: &str, _currency: Option<&str>, _amount: f64) {}

	fn set_custom_user_id(&self, _user_id: &str) {}

	fn unset_custom_user_id(&self) {}
}
