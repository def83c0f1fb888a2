// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Recording doubles for unit tests.

use std::sync::Mutex;

use beacon_core::{ConsoleChannel, Exception};
use serde_json::Value;

use crate::backtrace::StackTraceProvider;
use crate::console::Console;
use crate::error::{BeaconError, Result};
use crate::transport::{OutboundRequest, Transport};

#[derive(Default)]
pub struct RecordingTransport {
	requests: Mutex<Vec<OutboundRequest>>,
	fail: bool,
}

impl RecordingTransport {
	/// Rejects every hand-off.
	pub fn failing() -> Self {
		Self {
			requests: Mutex::new(Vec::new()),
			fail: true,
		}
	}

	pub fn requests(&self) -> Vec<OutboundRequest> {
		self.requests.lock().unwrap().clone()
	}

	pub fn bodies(&self) -> Vec<Value> {
		self
			.requests()
			.iter()
			.map(|r| serde_json::from_str(&r.body).unwrap())
			.collect()
	}
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
	fn send(&self, request: OutboundRequest) -> Result<()> {
		if self.fail {
			return Err(BeaconError::ClientShutdown);
		}
		self.requests.lock().unwrap().push(request);
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleEntry {
	pub channel: ConsoleChannel,
	pub message: String,
	pub detail: Option<Value>,
}

#[derive(Default)]
pub struct RecordingConsole {
	entries: Mutex<Vec<ConsoleEntry>>,
}

impl RecordingConsole {
	pub fn entries(&self) -> Vec<ConsoleEntry> {
		self.entries.lock().unwrap().clone()
	}
}

impl Console for RecordingConsole {
	fn write(&self, channel: ConsoleChannel, message: &str, detail: Option<&Value>) {
		self.entries.lock().unwrap().push(ConsoleEntry {
			channel,
			message: message.to_string(),
			detail: detail.cloned(),
		});
	}
}

pub struct FixedStackTrace(pub &'static str);

impl StackTraceProvider for FixedStackTrace {
	fn stack_trace(&self, _exception: &Exception) -> Result<String> {
		Ok(self.0.to_string())
	}
}

pub struct FailingStackTrace;

impl StackTraceProvider for FailingStackTrace {
	fn stack_trace(&self, _exception: &Exception) -> Result<String> {
		Err(BeaconError::StackTrace("symbols unavailable".to_string()))
	}
}

pub struct PanickingStackTrace;

impl StackTraceProvider for PanickingStackTrace {
	fn stack_trace(&self, _exception: &Exception) -> Result<String> {
		panic!("stack trace provider exploded")
	}
}
