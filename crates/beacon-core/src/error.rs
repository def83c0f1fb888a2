// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for Beacon core types.

use thiserror::Error;

/// Errors produced while parsing core types.
#[derive(Debug, Error)]
pub enum CoreError {
	#[error("invalid severity: {0}")]
	InvalidSeverity(String),

	#[error("invalid logging mode: {0}")]
	InvalidLoggingMode(String),
}
