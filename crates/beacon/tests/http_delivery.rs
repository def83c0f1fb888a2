// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end delivery over HTTP against a mock collection service.
//!
//! Tests cover:
//! - Log events posted as JSON to the remote logging endpoint
//! - Exception events carrying a captured stack trace
//! - User reports with and without a signed-in user
//! - Server errors and unreachable endpoints never surfacing to the caller

mod common;

use std::sync::Arc;

use beacon::{
	AppState, Beacon, BeaconConfig, ConsoleChannel, CurrentUser, LoggingMode, Severity,
	UserProfile,
};
use common::RecordingConsole;
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn remote_config(base: &str) -> BeaconConfig {
	BeaconConfig {
		logging_mode: LoggingMode::Remote,
		logging_threshold: Severity::Warn,
		remote_logging_endpoint: Some(Url::parse(&format!("{base}/client")).unwrap()),
		remote_error_report_endpoint: Some(Url::parse(&format!("{base}/report")).unwrap()),
		..Default::default()
	}
}

fn beacon_for(base: &str, console: Arc<RecordingConsole>) -> (Beacon, Arc<AppState>) {
	let state = Arc::new(AppState::new("https://app.test/#/orders"));
	let beacon = Beacon::builder()
		.config(remote_config(base))
		.console(console)
		.app_state(Arc::clone(&state))
		.build()
		.unwrap();
	(beacon, state)
}

async fn received_bodies(server: &MockServer) -> Vec<Value> {
	server
		.received_requests()
		.await
		.unwrap_or_default()
		.iter()
		.map(|r| serde_json::from_slice(&r.body).unwrap())
		.collect()
}

#[tokio::test]
async fn log_event_is_posted_as_json() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/client"))
		.and(header("content-type", "application/json"))
		.and(body_json(json!({
			"type": "error",
			"url": "https://app.test/#/orders",
			"message": "y",
			"overrideLoggingThreshold": false,
		})))
		.respond_with(ResponseTemplate::new(200))
		.expect(1)
		.mount(&server)
		.await;

	let console = Arc::new(RecordingConsole::default());
	let (beacon, _state) = beacon_for(&server.uri(), console.clone());

	beacon.logger().debug("x", None);
	beacon.logger().error("y", None);
	beacon.shutdown().await;

	assert_eq!(console.entries(), vec![(ConsoleChannel::Error, "y".to_string())]);
}

#[tokio::test]
async fn exception_event_carries_stack_trace() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/client"))
		.respond_with(ResponseTemplate::new(204))
		.expect(1)
		.mount(&server)
		.await;

	let (beacon, _state) = beacon_for(&server.uri(), Arc::new(RecordingConsole::default()));
	let error = std::io::Error::other("boom");
	beacon.exception_handler().handle_error(&error, Some("ctx"));
	beacon.shutdown().await;

	let bodies = received_bodies(&server).await;
	assert_eq!(bodies.len(), 1);
	let event = &bodies[0];
	assert_eq!(event["type"], json!("exception"));
	assert_eq!(event["message"], json!("Error: boom"));
	assert_eq!(event["cause"], json!("ctx"));
	assert_eq!(event["url"], json!("https://app.test/#/orders"));
	assert!(!event["stackTrace"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn user_report_includes_signed_in_profile() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/report"))
		.respond_with(ResponseTemplate::new(200))
		.expect(2)
		.mount(&server)
		.await;

	let (beacon, state) = beacon_for(&server.uri(), Arc::new(RecordingConsole::default()));

	beacon
		.user_reports()
		.send("nothing happens", &json!({"code": "E1"}));
	state.set_user(CurrentUser::new(UserProfile {
		id: Some("u-7".into()),
		..Default::default()
	}));
	beacon
		.user_reports()
		.send("still nothing", &json!({"code": "E1"}));
	beacon.shutdown().await;

	let mut bodies = received_bodies(&server).await;
	bodies.sort_by_key(|b| b["userMessage"].as_str().unwrap_or_default().to_string());
	assert_eq!(
		bodies,
		vec![
			json!({
				"url": "https://app.test/#/orders",
				"systemError": {"code": "E1"},
				"userMessage": "nothing happens",
			}),
			json!({
				"url": "https://app.test/#/orders",
				"systemError": {"code": "E1"},
				"userMessage": "still nothing",
				"user": {"id": "u-7"},
			}),
		]
	);
}

#[tokio::test]
async fn server_errors_are_not_surfaced() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(500))
		.mount(&server)
		.await;

	let console = Arc::new(RecordingConsole::default());
	let (beacon, _state) = beacon_for(&server.uri(), console.clone());
	beacon.logger().warn("w", None);
	beacon.shutdown().await;

	assert_eq!(console.entries(), vec![(ConsoleChannel::Warn, "w".to_string())]);
}

#[tokio::test]
async fn unreachable_endpoint_is_not_surfaced() {
	let console = Arc::new(RecordingConsole::default());
	let (beacon, _state) = beacon_for("http://127.0.0.1:9", console.clone());
	beacon.logger().error("e", None);
	beacon.shutdown().await;

	assert_eq!(console.entries(), vec![(ConsoleChannel::Error, "e".to_string())]);
}

#[tokio::test]
async fn sends_after_shutdown_become_console_warnings() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200))
		.expect(0)
		.mount(&server)
		.await;

	let console = Arc::new(RecordingConsole::default());
	let (beacon, _state) = beacon_for(&server.uri(), console.clone());
	beacon.shutdown().await;
	beacon.logger().error("late", None);

	let entries = console.entries();
	assert_eq!(entries[0], (ConsoleChannel::Error, "late".to_string()));
	assert_eq!(
		entries[1],
		(ConsoleChannel::Warn, beacon::DISPATCH_FAILED_MESSAGE.to_string())
	);
}
