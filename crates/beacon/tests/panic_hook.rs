// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Panic interception through the process-wide panic hook.
//!
//! The hook is global, so this binary holds a single test.

mod common;

use std::sync::Arc;

use beacon::{AppState, Beacon, BeaconConfig, ConsoleChannel, LoggingMode};
use common::{RecordingConsole, RecordingTransport};
use serde_json::json;
use url::Url;

#[test]
fn panics_are_reported_and_unwinding_continues() {
	let transport = Arc::new(RecordingTransport::default());
	let console = Arc::new(RecordingConsole::default());
	let beacon = Beacon::builder()
		.config(BeaconConfig {
			logging_mode: LoggingMode::Remote,
			remote_logging_endpoint: Some(Url::parse("https://logs.example.com/client").unwrap()),
			..Default::default()
		})
		.transport(transport.clone())
		.console(console.clone())
		.app_state(Arc::new(AppState::new("https://app.test/")))
		.build()
		.unwrap();

	beacon.install_panic_hook();
	let result = std::thread::spawn(|| panic!("inventory went negative")).join();
	let _ = std::panic::take_hook();

	assert!(result.is_err());

	let bodies = transport.bodies();
	assert_eq!(bodies.len(), 1);
	let event = &bodies[0];
	assert_eq!(event["type"], json!("exception"));
	assert_eq!(event["cause"], json!(""));
	assert_eq!(event["url"], json!("https://app.test/"));
	let message = event["message"].as_str().unwrap();
	assert!(message.starts_with("panic: inventory went negative at "));
	assert!(message.contains("panic_hook.rs"));
	assert!(!event["stackTrace"].as_str().unwrap().is_empty());

	let entries = console.entries();
	assert_eq!(entries.len(), 1);
	assert_eq!(entries[0].0, ConsoleChannel::Error);
	assert_eq!(entries[0].1, message);
}
