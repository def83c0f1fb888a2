// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: log, report and intercept with the Beacon SDK.
//!
//! Run with:
//!   BEACON_LOGGING_TYPE=remote \
//!   BEACON_REMOTE_LOGGING_ENDPOINT=http://localhost:8080/client \
//!   BEACON_REMOTE_ERROR_REPORT_ENDPOINT=http://localhost:8080/report \
//!   cargo run --example capture -p beacon

use std::sync::Arc;

use beacon::{AppState, Beacon, CurrentUser, UserProfile};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt().with_env_filter("info").init();

	let config = beacon_config::load_config()?;
	println!("Logging mode: {}", config.logging_mode);

	let state = Arc::new(AppState::new("https://shop.example.com/#/checkout"));
	let beacon = Beacon::builder()
		.config(config)
		.app_state(Arc::clone(&state))
		.build()?;

	beacon.install_panic_hook();

	let logger = beacon.logger();
	logger.debug("cart loaded", json!({"items": 3}));
	logger.warn("price changed during checkout", json!({"sku": "A-100", "old": 12, "new": 14}));

	// Raise the verbosity for this session only
	logger.set_threshold("trace");
	logger.trace("payment form rendered", None);

	let err = std::io::Error::other("payment gateway unreachable");
	beacon.exception_handler().handle_error(&err, Some("submitting order"));

	state.set_user(CurrentUser::new(UserProfile {
		id: Some("user_123".into()),
		email: Some("user@example.com".to_string()),
		..Default::default()
	}));
	beacon
		.user_reports()
		.send("The pay button spins forever", &json!({"code": "E_GATEWAY"}));

	let worker = std::thread::spawn(|| {
		panic!("inventory count went negative");
	});
	let _ = worker.join();

	beacon.shutdown().await;
	println!("Done.");

	Ok(())
}
