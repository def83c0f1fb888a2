// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared doubles for the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use beacon::{Console, ConsoleChannel, OutboundRequest, Transport};
use serde_json::Value;

#[derive(Default)]
pub struct RecordingTransport {
	requests: Mutex<Vec<OutboundRequest>>,
}

impl RecordingTransport {
	pub fn bodies(&self) -> Vec<Value> {
		self
			.requests
			.lock()
			.unwrap()
			.iter()
			.map(|r| serde_json::from_str(&r.body).unwrap())
			.collect()
	}
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
	fn send(&self, request: OutboundRequest) -> beacon::Result<()> {
		self.requests.lock().unwrap().push(request);
		Ok(())
	}
}

#[derive(Default)]
pub struct RecordingConsole {
	entries: Mutex<Vec<(ConsoleChannel, String)>>,
}

impl RecordingConsole {
	pub fn entries(&self) -> Vec<(ConsoleChannel, String)> {
		self.entries.lock().unwrap().clone()
	}
}

impl Console for RecordingConsole {
	fn write(&self, channel: ConsoleChannel, message: &str, _detail: Option<&Value>) {
		self
			.entries
			.lock()
			.unwrap()
			.push((channel, message.to_string()));
	}
}
