// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging mode: where events are allowed to go.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Controls local console emission and remote dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggingMode {
	/// Nothing is written to the console and nothing is sent.
	#[serde(alias = "none")]
	Off,
	/// Console output only.
	#[default]
	Local,
	/// Console output plus remote dispatch to the configured endpoints.
	Remote,
}

impl LoggingMode {
	/// Whether events are written to the local console.
	pub const fn console_enabled(self) -> bool {
		!matches!(self, Self::Off)
	}

	/// Whether events may be forwarded to a remote endpoint.
	pub const fn remote_enabled(self) -> bool {
		matches!(self, Self::Remote)
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Off => "off",
			Self::Local => "local",
			Self::Remote => "remote",
		}
	}
}

impl fmt::Display for LoggingMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for LoggingMode {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"off" | "none" => Ok(Self::Off),
			"local" => Ok(Self::Local),
			"remote" => Ok(Self::Remote),
			_ => Err(CoreError::InvalidLoggingMode(s.to_string())),
		}
	}
}
