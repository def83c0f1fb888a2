// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file and environment variables.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ConfigLayer;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "beacon.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// `beacon.toml` in the working directory.
	pub fn local() -> Self {
		Self::new(DEFAULT_CONFIG_FILE)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `BEACON_<FIELD>`
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		layer_from_lookup(|name| std::env::var(name).ok())
	}
}

/// Builds a layer from any variable lookup; empty values count as unset.
pub(crate) fn layer_from_lookup<F>(lookup: F) -> Result<ConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	let request_timeout_secs = match var("BEACON_REQUEST_TIMEOUT_SECS") {
		Some(v) => Some(v.parse().map_err(|_| {
			ConfigError::invalid_value(
				"BEACON_REQUEST_TIMEOUT_SECS",
				format!("invalid u64 value '{v}'"),
			)
		})?),
		None => None,
	};

	Ok(ConfigLayer {
		logging_type: var("BEACON_LOGGING_TYPE"),
		logging_threshold: var("BEACON_LOGGING_THRESHOLD"),
		remote_logging_endpoint: var("BEACON_REMOTE_LOGGING_ENDPOINT"),
		remote_error_report_endpoint: var("BEACON_REMOTE_ERROR_REPORT_ENDPOINT"),
		request_timeout_secs,
		log_level: var("BEACON_LOG_LEVEL"),
	})
}
