// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wire payloads POSTed to the collection endpoints.
//!
//! Field names and shapes are fixed by the collection service:
//!
//! | Payload | Endpoint | Body |
//! |---------|----------|------|
//! | [`ExceptionEvent`] | remote logging | `{url, message, type:"exception", stackTrace, cause}` |
//! | [`LogEvent`] | remote logging | `{type, url, message, desc?, overrideLoggingThreshold}` |
//! | [`UserReport`] | remote error report | `{url, systemError, userMessage, user?}` |

use serde::{Deserialize, Serialize};

use crate::context::UserProfile;
use crate::exception::Exception;
use crate::severity::Severity;

/// Discriminator for [`ExceptionEvent`]; always serializes as `"exception"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExceptionKind {
	#[default]
	#[serde(rename = "exception")]
	Exception,
}

/// An intercepted exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionEvent {
	pub url: String,
	pub message: String,
	#[serde(rename = "type")]
	pub kind: ExceptionKind,
	pub stack_trace: String,
	/// Caller-supplied context, or the empty string.
	pub cause: String,
}

impl ExceptionEvent {
	pub fn new(
		url: impl Into<String>,
		exception: &Exception,
		stack_trace: impl Into<String>,
		cause: Option<&str>,
	) -> Self {
		Self {
			url: url.into(),
			message: exception.to_string(),
			kind: ExceptionKind::Exception,
			stack_trace: stack_trace.into(),
			cause: cause.unwrap_or_default().to_string(),
		}
	}
}

/// An application log call that passed the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
	#[serde(rename = "type")]
	pub severity: Severity,
	pub url: String,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub desc: Option<serde_json::Value>,
	/// Set once the threshold has been changed at runtime.
	pub override_logging_threshold: bool,
}

/// A problem explicitly reported by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
	pub url: String,
	pub system_error: serde_json::Value,
	pub user_message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user: Option<UserProfile>,
}
