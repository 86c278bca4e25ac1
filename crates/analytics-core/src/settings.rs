// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote settings delivered to destination plugins.
//!
//! The host fetches a settings document keyed by integration key and hands
//! it to every plugin on load and on each refresh. Each plugin reads only
//! its own block; the payload shape is
//! `{ "<integration key>": { ...plugin settings... } }`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Why the host is delivering settings.
///
/// Destinations that wrap a start-once vendor SDK act only on
/// [`UpdateKind::Initial`]; a [`UpdateKind::Refresh`] must not re-trigger
/// vendor initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
	/// First settings delivery after the plugin was added to the pipeline.
	Initial,
	/// A subsequent delivery, e.g. after a remote config refresh.
	Refresh,
}

/// The integration settings document, keyed by integration key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteSettings {
	integrations: Map<String, Value>,
}

impl RemoteSettings {
	/// Creates an empty settings document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an integration block (builder pattern).
	pub fn with_integration(mut self, key: impl Into<String>, settings: Value) -> Self {
		self.integrations.insert(key.into(), settings);
		self
	}

	/// Returns the settings block for an integration key.
	///
	/// Returns `None` when the key is absent or its value is not a JSON
	/// object.
	pub fn integration_settings(&self, key: &str) -> Option<&Map<String, Value>> {
		self.integrations.get(key).and_then(Value::as_object)
	}

	/// Returns `true` if a block exists for the integration key.
	pub fn has_integration(&self, key: &str) -> bool {
		self.integrations.contains_key(key)
	}
}
