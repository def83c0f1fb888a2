// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Payload serialization and hand-off, with failure containment.

use std::sync::Arc;

use beacon_core::ConsoleChannel;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::console::Console;
use crate::error::{BeaconError, Result};
use crate::transport::{OutboundRequest, Transport};

/// Console message written when an event could not be handed off.
pub const DISPATCH_FAILED_MESSAGE: &str = "Error logging failed";

/// Serializes payloads to JSON and hands them to the transport.
///
/// Every SDK path (exceptions, log events, user reports) treats a failed
/// hand-off the same way: a console warning followed by the error itself on
/// the `Log` channel. Nothing is returned to the caller.
#[derive(Clone)]
pub struct Dispatcher {
	transport: Arc<dyn Transport>,
	console: Arc<dyn Console>,
}

impl Dispatcher {
	pub fn new(transport: Arc<dyn Transport>, console: Arc<dyn Console>) -> Self {
		Self { transport, console }
	}

	pub fn dispatch<T: Serialize + ?Sized>(&self, url: &Url, payload: &T) -> Result<()> {
		let body = serde_json::to_string(payload)?;
		debug!(url = %url, bytes = body.len(), "dispatching event");
		self
			.transport
			.send(OutboundRequest::post_json(url.clone(), body))
	}

	/// Dispatches and contains any failure.
	pub fn dispatch_contained<T: Serialize + ?Sized>(&self, url: &Url, payload: &T) {
		if let Err(e) = self.dispatch(url, payload) {
			self.report_failure(&e);
		}
	}

	pub fn report_failure(&self, error: &BeaconError) {
		warn!(error = %error, "event dispatch failed");
		self
			.console
			.write(ConsoleChannel::Warn, DISPATCH_FAILED_MESSAGE, None);
		self
			.console
			.write(ConsoleChannel::Log, &error.to_string(), None);
	}
}
