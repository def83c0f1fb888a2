// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Local console output.

use beacon_core::ConsoleChannel;
use serde_json::Value;
use tracing::{debug, error, info, warn};

/// Sink for local, human-readable output.
pub trait Console: Send + Sync {
	fn write(&self, channel: ConsoleChannel, message: &str, detail: Option<&Value>);
}

/// Writes console output as `tracing` events with target `beacon::console`.
///
/// `Log` and `Info` map to the info level; the other channels map to the
/// level of the same name. The detail value, when present, is recorded as a
/// JSON-encoded `detail` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
	fn write(&self, channel: ConsoleChannel, message: &str, detail: Option<&Value>) {
		let detail = detail.map(Value::to_string);
		let detail = detail.as_deref();
		match channel {
			ConsoleChannel::Log | ConsoleChannel::Info => {
				info!(target: "beacon::console", channel = %channel, detail, "{message}")
			}
			ConsoleChannel::Debug => {
				debug!(target: "beacon::console", channel = %channel, detail, "{message}")
			}
			ConsoleChannel::Warn => {
				warn!(target: "beacon::console", channel = %channel, detail, "{message}")
			}
			ConsoleChannel::Error => {
				error!(target: "beacon::console", channel = %channel, detail, "{message}")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn writes_every_channel_without_a_subscriber() {
		let console = TracingConsole;
		for channel in [
			ConsoleChannel::Log,
			ConsoleChannel::Debug,
			ConsoleChannel::Info,
			ConsoleChannel::Warn,
			ConsoleChannel::Error,
		] {
			console.write(channel, "message", Some(&json!({"k": 1})));
			console.write(channel, "message", None);
		}
	}

	#[test]
	fn writes_with_a_subscriber_installed() {
		let subscriber = tracing_subscriber::fmt()
			.with_max_level(tracing::Level::TRACE)
			.with_test_writer()
			.finish();
		tracing::subscriber::with_default(subscriber, || {
			TracingConsole.write(ConsoleChannel::Error, "Error: boom", Some(&json!("ctx")));
		});
	}
}
