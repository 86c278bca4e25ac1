// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contract types for analytics destination plugins.
//!
//! This crate defines the seam between a host analytics pipeline and the
//! destination plugins it drives: the event payloads handed to each plugin,
//! the remote settings document that configures them, and the
//! [`DestinationPlugin`] trait every destination implements.
//!
//! The host owns event dispatch and settings delivery; plugins translate
//! the calls they receive into vendor SDK calls. A plugin signals that it
//! consumed an event (hiding it from downstream plugins) by returning
//! `None` from `track` or `identify`.
//!
//! # Example
//!
//! ```
//! use analytics_core::{DestinationPlugin, TrackEvent};
//!
//! struct ConsolePlugin;
//!
//! impl DestinationPlugin for ConsolePlugin {
//!     fn key(&self) -> &'static str {
//!         "Console"
//!     }
//!
//!     fn track(&mut self, event: TrackEvent) -> Option<TrackEvent> {
//!         println!("track: {}", event.event);
//!         Some(event)
//!     }
//! }
//!
//! let mut plugin = ConsolePlugin;
//! let event = TrackEvent::new("signup").with_property("plan", "pro");
//! let passed_on = plugin.track(event);
//! assert!(passed_on.is_some());
//! ```

pub mod event;
pub mod plugin;
pub mod settings;

pub use event::{IdentifyEvent, TrackEvent};
pub use plugin::DestinationPlugin;
pub use settings::{RemoteSettings, UpdateKind};
