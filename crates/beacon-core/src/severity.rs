// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ordered log severities and the console channels they map to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Severity of an application log event.
///
/// The discriminant is the position in the total order used for threshold
/// comparisons: an event is emitted only when its index is greater than or
/// equal to the active threshold's index.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Severity {
	Trace = 0,
	Debug = 1,
	#[default]
	Info = 2,
	Warn = 3,
	Error = 4,
}

impl Severity {
	/// All severities, lowest first.
	pub const ALL: [Severity; 5] = [
		Severity::Trace,
		Severity::Debug,
		Severity::Info,
		Severity::Warn,
		Severity::Error,
	];

	/// Position of this severity in the total order.
	pub const fn index(self) -> u8 {
		self as u8
	}

	/// Inverse of [`Severity::index`].
	pub const fn from_index(index: u8) -> Option<Self> {
		match index {
			0 => Some(Self::Trace),
			1 => Some(Self::Debug),
			2 => Some(Self::Info),
			3 => Some(Self::Warn),
			4 => Some(Self::Error),
			_ => None,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Trace => "trace",
			Self::Debug => "debug",
			Self::Info => "info",
			Self::Warn => "warn",
			Self::Error => "error",
		}
	}

	/// Console channel used for local emission.
	///
	/// `Trace` has no dedicated channel and goes to the generic `Log` channel.
	pub const fn console_channel(self) -> ConsoleChannel {
		match self {
			Self::Trace => ConsoleChannel::Log,
			Self::Debug => ConsoleChannel::Debug,
			Self::Info => ConsoleChannel::Info,
			Self::Warn => ConsoleChannel::Warn,
			Self::Error => ConsoleChannel::Error,
		}
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Severity {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"trace" => Ok(Self::Trace),
			"debug" => Ok(Self::Debug),
			"info" => Ok(Self::Info),
			"warn" => Ok(Self::Warn),
			"error" => Ok(Self::Error),
			_ => Err(CoreError::InvalidSeverity(s.to_string())),
		}
	}
}

/// Local console output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleChannel {
	Log,
	Debug,
	Info,
	Warn,
	Error,
}

impl ConsoleChannel {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Log => "log",
			Self::Debug => "debug",
			Self::Info => "info",
			Self::Warn => "warn",
			Self::Error => "error",
		}
	}
}

impl fmt::Display for ConsoleChannel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
