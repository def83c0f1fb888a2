// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration loading for Beacon.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation of modes, thresholds and endpoint URLs
//! - Consistent environment variable naming (`BEACON_*`)
//!
//! The resolved [`BeaconConfig`] is read once at startup and shared by
//! reference with every SDK component; it is never mutated afterwards.
//!
//! # Usage
//!
//! ```ignore
//! use beacon_config::load_config;
//!
//! let config = load_config()?;
//! if let Some(endpoint) = config.remote_log_target() {
//!     println!("forwarding logs to {endpoint}");
//! }
//! ```

pub mod error;
pub mod layer;
pub mod sources;

pub use error::ConfigError;
pub use layer::{
	ConfigLayer, DEFAULT_LOG_LEVEL, DEFAULT_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS,
};
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, DEFAULT_CONFIG_FILE,
};

use std::time::Duration;

use beacon_core::{LoggingMode, Severity};
use tracing::{debug, info};
use url::Url;

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BeaconConfig {
	pub logging_mode: LoggingMode,
	/// Threshold applied at startup; may be overridden at runtime.
	pub logging_threshold: Severity,
	/// Receives exception and log events.
	pub remote_logging_endpoint: Option<Url>,
	/// Receives user error reports.
	pub remote_error_report_endpoint: Option<Url>,
	pub request_timeout: Duration,
	/// `tracing` filter directive used by binaries.
	pub log_level: String,
}

impl Default for BeaconConfig {
	fn default() -> Self {
		Self {
			logging_mode: LoggingMode::default(),
			logging_threshold: Severity::default(),
			remote_logging_endpoint: None,
			remote_error_report_endpoint: None,
			request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
			log_level: DEFAULT_LOG_LEVEL.to_string(),
		}
	}
}

impl BeaconConfig {
	/// Endpoint for exception and log events, if remote dispatch is enabled
	/// and an endpoint is configured.
	pub fn remote_log_target(&self) -> Option<&Url> {
		self
			.remote_logging_endpoint
			.as_ref()
			.filter(|_| self.logging_mode.remote_enabled())
	}

	/// Endpoint for user error reports, under the same rule.
	pub fn remote_error_target(&self) -> Option<&Url> {
		self
			.remote_error_report_endpoint
			.as_ref()
			.filter(|_| self.logging_mode.remote_enabled())
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`BEACON_*`)
/// 2. Config file (`./beacon.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<BeaconConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::local()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<BeaconConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<BeaconConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

/// Merge the given sources in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<BeaconConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	let config = merged.finalize()?;

	info!(
		logging_mode = %config.logging_mode,
		logging_threshold = %config.logging_threshold,
		remote_logging_endpoint = config.remote_logging_endpoint.as_ref().map(Url::as_str),
		remote_error_report_endpoint = config.remote_error_report_endpoint.as_ref().map(Url::as_str),
		request_timeout_secs = config.request_timeout.as_secs(),
		"Beacon configuration loaded"
	);

	Ok(config)
}
