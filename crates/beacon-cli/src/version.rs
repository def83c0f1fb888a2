// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Version information for the `beacon` binary.

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"beacon version: {}\n\
		 Platform:       {}\n\
		 User-Agent:     {}",
		env!("CARGO_PKG_VERSION"),
		beacon_common_http::platform(),
		beacon_common_http::user_agent(),
	)
}
