// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use std::time::Duration;

use beacon_core::{LoggingMode, Severity};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::BeaconConfig;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// One source's view of the configuration. Every field is optional; unset
/// fields fall through to lower-precedence sources and finally to defaults.
///
/// TOML keys use the same camelCase names as the collection service's client
/// configuration (`loggingType`, `loggingThreshold`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLayer {
	pub logging_type: Option<String>,
	pub logging_threshold: Option<String>,
	pub remote_logging_endpoint: Option<String>,
	pub remote_error_report_endpoint: Option<String>,
	pub request_timeout_secs: Option<u64>,
	pub log_level: Option<String>,
}

impl ConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.logging_type.is_some() {
			self.logging_type = other.logging_type;
		}
		if other.logging_threshold.is_some() {
			self.logging_threshold = other.logging_threshold;
		}
		if other.remote_logging_endpoint.is_some() {
			self.remote_logging_endpoint = other.remote_logging_endpoint;
		}
		if other.remote_error_report_endpoint.is_some() {
			self.remote_error_report_endpoint = other.remote_error_report_endpoint;
		}
		if other.request_timeout_secs.is_some() {
			self.request_timeout_secs = other.request_timeout_secs;
		}
		if other.log_level.is_some() {
			self.log_level = other.log_level;
		}
	}

	pub fn finalize(self) -> Result<BeaconConfig, ConfigError> {
		let logging_mode = match self.logging_type {
			Some(v) => v
				.trim()
				.parse::<LoggingMode>()
				.map_err(|e| ConfigError::invalid_value("loggingType", e.to_string()))?,
			None => LoggingMode::default(),
		};

		let logging_threshold = match self.logging_threshold {
			Some(v) => v
				.trim()
				.parse::<Severity>()
				.map_err(|e| ConfigError::invalid_value("loggingThreshold", e.to_string()))?,
			None => Severity::default(),
		};

		let request_timeout_secs = self
			.request_timeout_secs
			.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
		if request_timeout_secs == 0 {
			return Err(ConfigError::invalid_value(
				"requestTimeoutSecs",
				"must be greater than zero",
			));
		}
		if request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
			return Err(ConfigError::invalid_value(
				"requestTimeoutSecs",
				format!("must be at most {MAX_REQUEST_TIMEOUT_SECS}"),
			));
		}

		Ok(BeaconConfig {
			logging_mode,
			logging_threshold,
			remote_logging_endpoint: parse_endpoint(
				"remoteLoggingEndpoint",
				self.remote_logging_endpoint,
			)?,
			remote_error_report_endpoint: parse_endpoint(
				"remoteErrorReportEndpoint",
				self.remote_error_report_endpoint,
			)?,
			request_timeout: Duration::from_secs(request_timeout_secs),
			log_level: self
				.log_level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
		})
	}
}

/// Blank endpoints count as "not configured".
fn parse_endpoint(key: &str, value: Option<String>) -> Result<Option<Url>, ConfigError> {
	let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
		return Ok(None);
	};

	let url = Url::parse(raw.trim())
		.map_err(|e| ConfigError::invalid_value(key, format!("'{raw}': {e}")))?;
	match url.scheme() {
		"http" | "https" => Ok(Some(url)),
		other => Err(ConfigError::invalid_value(
			key,
			format!("unsupported scheme '{other}'"),
		)),
	}
}
