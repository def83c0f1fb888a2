// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack-trace extraction for reported exceptions.

use beacon_core::{Exception, Frame, Stacktrace};
use rustc_demangle::demangle;

use crate::error::Result;

/// Turns a raised exception into the normalized multi-line `stackTrace`
/// string sent with exception events.
pub trait StackTraceProvider: Send + Sync {
	fn stack_trace(&self, exception: &Exception) -> Result<String>;
}

/// Captures the stack of the calling thread at the moment of reporting.
///
/// Called from the panic hook this is the panicking thread's stack, so the
/// leading frames of the SDK and of the panic machinery are dropped and the
/// first rendered frame is the code that panicked.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceProvider;

impl StackTraceProvider for BacktraceProvider {
	fn stack_trace(&self, _exception: &Exception) -> Result<String> {
		Ok(capture_stacktrace().render())
	}
}

/// Capture the current stack, resolved and demangled.
pub fn capture_stacktrace() -> Stacktrace {
	let backtrace = backtrace::Backtrace::new();
	let mut frames = Vec::new();

	for frame in backtrace.frames() {
		for symbol in frame.symbols() {
			frames.push(frame_from_symbol(symbol));
		}
	}

	Stacktrace::new(trim_reporting_frames(frames))
}

fn frame_from_symbol(symbol: &backtrace::BacktraceSymbol) -> Frame {
	let function = symbol.name().map(|name| match name.as_str() {
		Some(raw) => format!("{:#}", demangle(raw)),
		None => name.to_string(),
	});

	// "app::handlers::save" -> "app::handlers"
	let module = function
		.as_deref()
		.and_then(|f| f.rfind("::").map(|idx| f[..idx].to_string()));

	let in_app = function.as_deref().is_some_and(is_in_app_frame);

	Frame {
		function,
		module,
		filename: symbol.filename().map(|p| p.display().to_string()),
		lineno: symbol.lineno(),
		colno: symbol.colno(),
		in_app,
	}
}

/// Drops the leading frames that belong to capture, reporting and panic
/// handling. Keeps the stack untouched if that would leave nothing.
fn trim_reporting_frames(frames: Vec<Frame>) -> Vec<Frame> {
	let first_app_frame = frames
		.iter()
		.position(|f| f.in_app && !f.function.as_deref().is_some_and(is_reporting_frame));

	match first_app_frame {
		Some(idx) => frames.into_iter().skip(idx).collect(),
		None => frames,
	}
}

/// Frames inside this SDK itself.
fn is_reporting_frame(function: &str) -> bool {
	const SDK_PREFIXES: &[&str] = &["beacon::", "<beacon::", "beacon_core::", "<beacon_core::"];
	SDK_PREFIXES.iter().any(|p| function.starts_with(p))
}

/// Determine if a frame is from application code rather than std, the async
/// runtime or the unwinding machinery.
fn is_in_app_frame(function: &str) -> bool {
	const SYSTEM_PREFIXES: &[&str] = &[
		"std::",
		"core::",
		"alloc::",
		"<std::",
		"<core::",
		"<alloc::",
		"tokio::",
		"<tokio::",
		"futures::",
		"<futures::",
		"async_trait::",
		"tracing::",
		"<tracing::",
		"backtrace::",
		"<backtrace::",
		"panic_unwind::",
		"<panic_unwind::",
		"test::",
		"<test::",
		"rust_begin_unwind",
		"rust_panic",
		"__rust_",
		"_rust_",
		"__libc_",
		"_start",
		"start_thread",
	];

	const SYSTEM_CONTAINS: &[&str] = &[
		"::panic::",
		"::panicking::",
		"::thread::",
		"::rt::",
		"::runtime::",
		"::sys_common::",
	];

	!SYSTEM_PREFIXES.iter().any(|p| function.starts_with(p))
		&& !SYSTEM_CONTAINS.iter().any(|c| function.contains(c))
}
