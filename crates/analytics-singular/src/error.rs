// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Setup failures for the Singular destination.
//!
//! These never reach the host pipeline: settings delivery must not crash
//! the host, so the plugin logs them and stays uninitialized instead.

use thiserror::Error;

/// Reasons the plugin could not configure the Singular SDK.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
	/// The settings document has no block under the integration key.
	#[error("no settings block found for integration '{0}'")]
	MissingSettings(String),

	/// A required credential is absent or not a string.
	#[error("settings block is missing '{0}' or it is not a string")]
	MissingCredential(&'static str),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_settings_message_names_the_integration() {
		let err = SetupError::MissingSettings("Singular".to_string());
		assert_eq!(
			err.to_string(),
			"no settings block found for integration 'Singular'"
		);
	}

	#[test]
	fn missing_credential_message_names_the_field() {
		let err = SetupError::MissingCredential("apiKey");
		assert_eq!(
			err.to_string(),
			"settings block is missing 'apiKey' or it is not a string"
		);
	}
}
