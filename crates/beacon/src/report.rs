// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User-initiated error reports.

use std::sync::Arc;

use beacon_config::BeaconConfig;
use beacon_core::UserReport;
use serde::Serialize;
use tracing::debug;

use crate::dispatch::Dispatcher;
use crate::state::AppState;

/// Sends problems the user chose to report, with the user's own description.
#[derive(Clone)]
pub struct UserErrorReporter {
	config: Arc<BeaconConfig>,
	dispatcher: Dispatcher,
	state: Arc<AppState>,
}

impl UserErrorReporter {
	pub fn new(config: Arc<BeaconConfig>, dispatcher: Dispatcher, state: Arc<AppState>) -> Self {
		Self {
			config,
			dispatcher,
			state,
		}
	}

	/// Posts a [`UserReport`] to the error-report endpoint.
	///
	/// Only sent in remote mode with an endpoint configured; nothing is written
	/// to the console either way. The signed-in user's profile is attached
	/// when there is one.
	pub fn send<E: Serialize + ?Sized>(&self, user_message: impl Into<String>, system_error: &E) {
		let Some(endpoint) = self.config.remote_error_target() else {
			debug!("user error report dropped, remote reporting disabled");
			return;
		};

		let system_error = match serde_json::to_value(system_error) {
			Ok(value) => value,
			Err(e) => {
				self.dispatcher.report_failure(&e.into());
				return;
			}
		};

		let report = UserReport {
			url: self.state.location(),
			system_error,
			user_message: user_message.into(),
			user: self.state.user_profile(),
		};
		self.dispatcher.dispatch_contained(endpoint, &report);
	}
}
