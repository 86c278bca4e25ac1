// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The trait every destination plugin implements.

use crate::event::{IdentifyEvent, TrackEvent};
use crate::settings::{RemoteSettings, UpdateKind};

/// A destination plugin in the host event pipeline.
///
/// The host invokes these methods synchronously, in pipeline order, on
/// whatever thread it dispatches events from. Plugins perform no internal
/// threading and must never panic out of these calls: a misconfigured
/// destination degrades to a no-op rather than crashing the pipeline.
///
/// `track` and `identify` return the event to pass downstream, or `None`
/// to consume it so later plugins never see it. The defaults pass events
/// through untouched and ignore settings and reset.
pub trait DestinationPlugin {
	/// The integration key this plugin registers under.
	///
	/// Used to locate the plugin's block in [`RemoteSettings`].
	fn key(&self) -> &'static str;

	/// Called when the host delivers settings.
	fn update(&mut self, settings: &RemoteSettings, kind: UpdateKind) {
		let _ = (settings, kind);
	}

	/// Called for each track event.
	fn track(&mut self, event: TrackEvent) -> Option<TrackEvent> {
		Some(event)
	}

	/// Called for each identify event.
	fn identify(&mut self, event: IdentifyEvent) -> Option<IdentifyEvent> {
		Some(event)
	}

	/// Called when the host resets user state, e.g. on logout.
	fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct KeyOnlyPlugin;

	impl DestinationPlugin for KeyOnlyPlugin {
		fn key(&self) -> &'static str {
			"KeyOnly"
		}
	}

	#[test]
	fn default_track_passes_event_through() {
		let mut plugin = KeyOnlyPlugin;
		let event = TrackEvent::new("signup");
		assert_eq!(plugin.track(event.clone()), Some(event));
	}

	#[test]
	fn default_identify_passes_event_through() {
		let mut plugin = KeyOnlyPlugin;
		let event = IdentifyEvent::new("user123");
		assert_eq!(plugin.identify(event.clone()), Some(event));
	}

	#[test]
	fn default_update_and_reset_are_no_ops() {
		let mut plugin = KeyOnlyPlugin;
		plugin.update(&RemoteSettings::new(), UpdateKind::Initial);
		plugin.update(&RemoteSettings::new(), UpdateKind::Refresh);
		plugin.reset();
		assert_eq!(plugin.key(), "KeyOnly");
	}
}
