// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Beacon SDK.
//!
//! None of these reach application code through the logging, reporting or
//! exception-handling entry points; they are downgraded to a console warning
//! at the point of dispatch.

use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, BeaconError>;

/// Errors that can occur in the SDK.
#[derive(Debug, Error)]
pub enum BeaconError {
	/// The client has been shut down.
	#[error("beacon client has been shut down")]
	ClientShutdown,

	/// No tokio runtime is available to run the delivery task.
	#[error("no tokio runtime available for dispatch")]
	NoRuntime,

	/// The HTTP client could not be constructed.
	#[error("HTTP client error: {0}")]
	HttpClient(#[from] reqwest::Error),

	/// Failed to serialize a payload.
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// The stack-trace provider failed or panicked.
	#[error("stack trace extraction failed: {0}")]
	StackTrace(String),
}
