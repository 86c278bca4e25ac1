// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Singular attribution destination plugin.
//!
//! Bridges the host analytics pipeline to the Singular attribution SDK:
//! track events become Singular event or revenue calls, identify events
//! set the custom user id, and reset clears it. The Singular binding is
//! injected behind the [`SingularSdk`] trait because the real SDK is a
//! process-wide singleton; the plugin guards its one-shot start and treats
//! everything past the trait as opaque.
//!
//! # Revenue routing
//!
//! A track event whose `revenue` property is a number, or a string that
//! parses as one, is routed to Singular's revenue call together with the
//! optional `currency` property. Any other revenue value falls through to
//! the plain event call.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use analytics_core::{DestinationPlugin, TrackEvent, UpdateKind};
//! use analytics_singular::{DestinationConfig, SingularDestination};
//!
//! // `MySingularBinding` implements `SingularSdk` over the vendor's FFI.
//! let sdk = Arc::new(MySingularBinding::new());
//! let mut plugin = SingularDestination::with_config(
//!     sdk,
//!     DestinationConfig {
//!         skadnetwork_enabled: true,
//!         manual_skan_conversion_management: false,
//!     },
//! );
//!
//! // The host delivers settings, then dispatches events.
//! plugin.update(&settings, UpdateKind::Initial);
//! plugin.track(TrackEvent::new("purchase").with_property("revenue", "9.99"));
//! ```

mod destination;
mod error;
mod revenue;
mod sdk;

pub use destination::{DestinationConfig, SingularDestination, SINGULAR_KEY};
pub use error::SetupError;
pub use sdk::{NoOpSingularSdk, SharedSingularSdk, SingularConfig, SingularSdk};
