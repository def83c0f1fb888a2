// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The active logging threshold and its runtime override flag.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use beacon_core::Severity;
use tracing::debug;

/// Minimum severity for emission, shared by every logger handle.
///
/// Starts at the configured threshold. [`ThresholdState::set_threshold`]
/// replaces it and raises the override flag, which is then reported in every
/// remote log event so the collection service can audit per-session changes.
#[derive(Debug)]
pub struct ThresholdState {
	index: AtomicU8,
	overridden: AtomicBool,
}

impl ThresholdState {
	pub fn new(initial: Severity) -> Self {
		Self {
			index: AtomicU8::new(initial.index()),
			overridden: AtomicBool::new(false),
		}
	}

	pub fn threshold(&self) -> Severity {
		Severity::from_index(self.index.load(Ordering::SeqCst)).unwrap_or_default()
	}

	/// Whether the threshold was changed at runtime.
	pub fn is_overridden(&self) -> bool {
		self.overridden.load(Ordering::SeqCst)
	}

	pub fn is_enabled(&self, severity: Severity) -> bool {
		severity.index() >= self.index.load(Ordering::SeqCst)
	}

	/// String entry point; unrecognized severities are never enabled.
	pub fn is_enabled_for_severity(&self, severity: &str) -> bool {
		severity
			.parse::<Severity>()
			.map(|s| self.is_enabled(s))
			.unwrap_or(false)
	}

	/// Overrides the threshold. Unrecognized levels are ignored and leave both
	/// the threshold and the override flag untouched.
	///
	/// Returns whether the level was applied.
	pub fn set_threshold(&self, level: &str) -> bool {
		match level.parse::<Severity>() {
			Ok(severity) => {
				self.set_threshold_level(severity);
				true
			}
			Err(_) => {
				debug!(level, "ignoring unrecognized logging threshold");
				false
			}
		}
	}

	pub fn set_threshold_level(&self, severity: Severity) {
		self.index.store(severity.index(), Ordering::SeqCst);
		self.overridden.store(true, Ordering::SeqCst);
		debug!(threshold = %severity, "logging threshold overridden");
	}
}

impl Default for ThresholdState {
	fn default() -> Self {
		Self::new(Severity::default())
	}
}
