// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The Singular destination plugin.

use analytics_core::{DestinationPlugin, IdentifyEvent, RemoteSettings, TrackEvent, UpdateKind};
use serde_json::Value;
use tracing::debug;

use crate::error::SetupError;
use crate::revenue::extract_revenue;
use crate::sdk::{SharedSingularSdk, SingularConfig};

/// The integration key this plugin registers under.
pub const SINGULAR_KEY: &str = "Singular";

/// Wrapper identity reported to Singular for attribution telemetry.
const WRAPPER_NAME: &str = env!("CARGO_PKG_NAME");
const WRAPPER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The property keys consulted on track events.
const REVENUE_KEY: &str = "revenue";
const CURRENCY_KEY: &str = "currency";

/// Construction-time options for the destination.
///
/// Set once and never mutated; the flags are copied onto the
/// [`SingularConfig`] when the SDK is started.
#[derive(Debug, Clone, Copy, Default)]
pub struct DestinationConfig {
	pub skadnetwork_enabled: bool,
	pub manual_skan_conversion_management: bool,
}

/// Whether the Singular SDK has been started.
///
/// The SDK is a process-wide singleton that supports exactly one start, so
/// `Initialized` is terminal: no transition goes back, and reset does not
/// clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitializationState {
	Uninitialized,
	Initialized,
}

/// Forwards pipeline events to the Singular attribution SDK.
///
/// Track events carrying a usable `revenue` property become Singular
/// revenue calls; everything else becomes a plain event call. Identify
/// events set the custom user id and are consumed, so downstream plugins
/// never see them; track events always pass through unchanged.
///
/// All setup failures are logged and absorbed. The worst outcome of bad
/// settings is an SDK that never starts, in which case Singular's own
/// no-op behavior applies to every forwarded call.
pub struct SingularDestination {
	config: DestinationConfig,
	sdk: SharedSingularSdk,
	state: InitializationState,
}

impl SingularDestination {
	/// Creates the destination with default configuration.
	pub fn new(sdk: SharedSingularSdk) -> Self {
		Self::with_config(sdk, DestinationConfig::default())
	}

	/// Creates the destination with explicit SKAN configuration.
	///
	/// Reports the wrapper identity to the SDK immediately; no other side
	/// effects until settings arrive.
	pub fn with_config(sdk: SharedSingularSdk, config: DestinationConfig) -> Self {
		sdk.set_wrapper(WRAPPER_NAME, WRAPPER_VERSION);
		Self {
			config,
			sdk,
			state: InitializationState::Uninitialized,
		}
	}

	/// Returns `true` once the Singular SDK has been started.
	pub fn is_initialized(&self) -> bool {
		self.state == InitializationState::Initialized
	}

	fn build_config(&self, settings: &RemoteSettings) -> Result<SingularConfig, SetupError> {
		let block = settings
			.integration_settings(SINGULAR_KEY)
			.ok_or_else(|| SetupError::MissingSettings(SINGULAR_KEY.to_string()))?;

		let api_key = block
			.get("apiKey")
			.and_then(Value::as_str)
			.ok_or(SetupError::MissingCredential("apiKey"))?;
		let secret = block
			.get("secret")
			.and_then(Value::as_str)
			.ok_or(SetupError::MissingCredential("secret"))?;

		let mut config = SingularConfig::new(api_key, secret);
		config.skadnetwork_enabled = self.config.skadnetwork_enabled;
		config.manual_skan_conversion_management = self.config.manual_skan_conversion_management;
		Ok(config)
	}
}

impl DestinationPlugin for SingularDestination {
	fn key(&self) -> &'static str {
		SINGULAR_KEY
	}

	fn update(&mut self, settings: &RemoteSettings, kind: UpdateKind) {
		// The SDK singleton can only be started once; refreshes and
		// duplicate initial deliveries must not re-trigger start.
		if kind != UpdateKind::Initial {
			return;
		}
		if self.state == InitializationState::Initialized {
			return;
		}

		match self.build_config(settings) {
			Ok(config) => {
				debug!("Singular settings loaded");
				self.sdk.start(config);
				self.state = InitializationState::Initialized;
				debug!("Singular started");
			}
			Err(e) => {
				debug!(error = %e, "Singular settings could not load");
			}
		}
	}

	fn track(&mut self, event: TrackEvent) -> Option<TrackEvent> {
		match extract_revenue(&event.properties, REVENUE_KEY) {
			Some(amount) => {
				let currency = event.property(CURRENCY_KEY).and_then(Value::as_str);
				debug!(event = %event.event, amount, "Singular track revenue");
				self.sdk.revenue(&event.event, currency, amount);
			}
			None => {
				debug!(event = %event.event, "Singular track event");
				self.sdk.event(&event.event);
			}
		}
		Some(event)
	}

	fn identify(&mut self, event: IdentifyEvent) -> Option<IdentifyEvent> {
		if let Some(user_id) = event.user_id.as_deref() {
			if !user_id.is_empty() {
				self.sdk.set_custom_user_id(user_id);
				debug!(user_id = %user_id, "Singular identify");
			}
		}
		// Consumed: downstream plugins do not see identify events.
		None
	}

	fn reset(&mut self) {
		debug!("Singular reset");
		self.sdk.unset_custom_user_id();
	}
}
