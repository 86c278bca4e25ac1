// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event payloads delivered to destination plugins.
//!
//! Events are transient: the host hands them to each plugin in turn and
//! never expects a plugin to retain them past the call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A track call: a named event with free-form properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackEvent {
	/// The event name, e.g. `"checkout_completed"`.
	pub event: String,

	/// Free-form event properties.
	#[serde(default)]
	pub properties: Map<String, Value>,
}

impl TrackEvent {
	/// Creates a track event with no properties.
	pub fn new(event: impl Into<String>) -> Self {
		Self {
			event: event.into(),
			properties: Map::new(),
		}
	}

	/// Adds a property (builder pattern).
	pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.properties.insert(key.into(), value.into());
		self
	}

	/// Looks up a property by key.
	pub fn property(&self, key: &str) -> Option<&Value> {
		self.properties.get(key)
	}
}

/// An identify call, linking the current session to a user id.
///
/// `user_id` is `None` for anonymous sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyEvent {
	pub user_id: Option<String>,
}

impl IdentifyEvent {
	/// Creates an identify event for a known user.
	pub fn new(user_id: impl Into<String>) -> Self {
		Self {
			user_id: Some(user_id.into()),
		}
	}

	/// Creates an identify event with no user id.
	pub fn anonymous() -> Self {
		Self { user_id: None }
	}
}
