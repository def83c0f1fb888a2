// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Leveled application logging.

use std::sync::Arc;

use beacon_config::BeaconConfig;
use beacon_core::{LogEvent, Severity};
use serde_json::Value;
use tracing::trace;

use crate::console::Console;
use crate::dispatch::Dispatcher;
use crate::state::AppState;
use crate::threshold::ThresholdState;

/// Application-facing logger.
///
/// Calls below the current threshold are dropped. Accepted calls go to the
/// console unless logging is off, and to the remote logging endpoint when
/// logging is remote and an endpoint is configured. No method fails or
/// panics; dispatch failures become a console warning.
///
/// Cloning is cheap and clones share the same threshold.
#[derive(Clone)]
pub struct ApplicationLogger {
	config: Arc<BeaconConfig>,
	threshold: Arc<ThresholdState>,
	console: Arc<dyn Console>,
	dispatcher: Dispatcher,
	state: Arc<AppState>,
}

impl ApplicationLogger {
	pub fn new(
		config: Arc<BeaconConfig>,
		threshold: Arc<ThresholdState>,
		console: Arc<dyn Console>,
		dispatcher: Dispatcher,
		state: Arc<AppState>,
	) -> Self {
		Self {
			config,
			threshold,
			console,
			dispatcher,
			state,
		}
	}

	pub fn trace(&self, message: impl Into<String>, detail: impl Into<Option<Value>>) {
		self.log_at(Severity::Trace, message, detail);
	}

	pub fn debug(&self, message: impl Into<String>, detail: impl Into<Option<Value>>) {
		self.log_at(Severity::Debug, message, detail);
	}

	pub fn info(&self, message: impl Into<String>, detail: impl Into<Option<Value>>) {
		self.log_at(Severity::Info, message, detail);
	}

	pub fn warn(&self, message: impl Into<String>, detail: impl Into<Option<Value>>) {
		self.log_at(Severity::Warn, message, detail);
	}

	pub fn error(&self, message: impl Into<String>, detail: impl Into<Option<Value>>) {
		self.log_at(Severity::Error, message, detail);
	}

	/// Logs with a severity given by name. Unknown names are dropped.
	pub fn log(&self, severity: &str, message: impl Into<String>, detail: impl Into<Option<Value>>) {
		match severity.parse::<Severity>() {
			Ok(severity) => self.log_at(severity, message, detail),
			Err(_) => trace!(severity, "dropping log call with unknown severity"),
		}
	}

	pub fn log_at(
		&self,
		severity: Severity,
		message: impl Into<String>,
		detail: impl Into<Option<Value>>,
	) {
		if !self.threshold.is_enabled(severity) {
			return;
		}

		let message = message.into();
		let detail = detail.into();

		if self.config.logging_mode.console_enabled() {
			self
				.console
				.write(severity.console_channel(), &message, detail.as_ref());
		}

		if let Some(endpoint) = self.config.remote_log_target() {
			let event = LogEvent {
				severity,
				url: self.state.location(),
				message,
				desc: detail,
				override_logging_threshold: self.threshold.is_overridden(),
			};
			self.dispatcher.dispatch_contained(endpoint, &event);
		}
	}

	/// Changes the threshold for every handle sharing it. Unknown levels are
	/// ignored.
	pub fn set_threshold(&self, level: &str) {
		self.threshold.set_threshold(level);
	}

	pub fn is_enabled_for_severity(&self, severity: &str) -> bool {
		self.threshold.is_enabled_for_severity(severity)
	}

	pub fn threshold(&self) -> &ThresholdState {
		&self.threshold
	}
}
