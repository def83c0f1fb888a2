// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack frames and their normalized text rendering.

use serde::{Deserialize, Serialize};

/// Rendered in place of an empty stack so the payload field is never blank.
pub const NO_FRAMES: &str = "<no frames>";

/// A single stack frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
	pub function: Option<String>,
	pub module: Option<String>,
	pub filename: Option<String>,
	pub lineno: Option<u32>,
	pub colno: Option<u32>,
	/// Whether the frame belongs to application code rather than std or the runtime.
	pub in_app: bool,
}

impl Frame {
	/// Renders the frame as `function@file:line:col`, omitting missing parts.
	pub fn render(&self) -> String {
		let mut out = self.function.clone().unwrap_or_else(|| "?".to_string());
		if let Some(filename) = &self.filename {
			out.push('@');
			out.push_str(filename);
			if let Some(lineno) = self.lineno {
				out.push_str(&format!(":{lineno}"));
				if let Some(colno) = self.colno {
					out.push_str(&format!(":{colno}"));
				}
			}
		}
		out
	}
}

/// An ordered call stack, innermost frame first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stacktrace {
	pub frames: Vec<Frame>,
}

impl Stacktrace {
	pub fn new(frames: Vec<Frame>) -> Self {
		Self { frames }
	}

	/// Multi-line representation sent as `stackTrace`.
	pub fn render(&self) -> String {
		if self.frames.is_empty() {
			return NO_FRAMES.to_string();
		}
		self
			.frames
			.iter()
			.map(Frame::render)
			.collect::<Vec<_>>()
			.join("\n")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn render_full_frame() {
		let frame = Frame {
			function: Some("app::handlers::save".to_string()),
			filename: Some("src/handlers.rs".to_string()),
			lineno: Some(42),
			colno: Some(9),
			..Default::default()
		};
		assert_eq!(frame.render(), "app::handlers::save@src/handlers.rs:42:9");
	}

	#[test]
	fn render_frame_without_location() {
		let frame = Frame {
			function: Some("app::main".to_string()),
			..Default::default()
		};
		assert_eq!(frame.render(), "app::main");
		assert_eq!(Frame::default().render(), "?");
	}

	#[test]
	fn empty_stack_is_never_blank() {
		assert_eq!(Stacktrace::default().render(), NO_FRAMES);
	}

	#[test]
	fn render_joins_frames_by_line() {
		let stack = Stacktrace::new(vec![
			Frame {
				function: Some("a".to_string()),
				in_app: true,
				..Default::default()
			},
			Frame {
				function: Some("std::rt::lang_start".to_string()),
				..Default::default()
			},
		]);
		assert_eq!(stack.render(), "a\nstd::rt::lang_start");
	}
}
