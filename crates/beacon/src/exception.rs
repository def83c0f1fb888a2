// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Exception interception.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use beacon_config::BeaconConfig;
use beacon_core::{panic_message, ConsoleChannel, Exception, ExceptionEvent};
use serde_json::Value;
use url::Url;

use crate::backtrace::StackTraceProvider;
use crate::console::Console;
use crate::dispatch::Dispatcher;
use crate::error::{BeaconError, Result};
use crate::state::AppState;

/// Receives every failure that escapes application code.
pub trait ExceptionHandler: Send + Sync {
	/// Reports the exception. Never panics or fails outward.
	fn handle(&self, exception: &Exception, cause: Option<&str>);
}

thread_local! {
	static HANDLING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as inside [`RemoteExceptionHandler::handle`].
///
/// A panic raised while reporting re-enters the panic hook on the same
/// thread; the nested call is dropped instead of recursing. A thread whose
/// locals are already torn down counts as handling.
struct HandlingGuard;

impl HandlingGuard {
	fn enter() -> Option<Self> {
		HANDLING
			.try_with(|flag| (!flag.replace(true)).then_some(HandlingGuard))
			.ok()
			.flatten()
	}
}

impl Drop for HandlingGuard {
	fn drop(&mut self) {
		let _ = HANDLING.try_with(|flag| flag.set(false));
	}
}

/// Writes exceptions to the console and, in remote mode, posts an
/// [`ExceptionEvent`] to the remote logging endpoint.
pub struct RemoteExceptionHandler {
	config: Arc<BeaconConfig>,
	console: Arc<dyn Console>,
	stack_traces: Arc<dyn StackTraceProvider>,
	dispatcher: Dispatcher,
	state: Arc<AppState>,
}

impl RemoteExceptionHandler {
	pub fn new(
		config: Arc<BeaconConfig>,
		console: Arc<dyn Console>,
		stack_traces: Arc<dyn StackTraceProvider>,
		dispatcher: Dispatcher,
		state: Arc<AppState>,
	) -> Self {
		Self {
			config,
			console,
			stack_traces,
			dispatcher,
			state,
		}
	}

	/// Reports an error value, including its `source()` chain.
	pub fn handle_error<E: std::error::Error + ?Sized>(&self, error: &E, cause: Option<&str>) {
		self.handle(&Exception::from_error(error), cause);
	}

	fn report_remote(&self, endpoint: &Url, exception: &Exception, cause: Option<&str>) -> Result<()> {
		let stack_trace = panic::catch_unwind(AssertUnwindSafe(|| {
			self.stack_traces.stack_trace(exception)
		}))
		.map_err(|payload| BeaconError::StackTrace(panic_message(&*payload)))??;

		let event = ExceptionEvent::new(self.state.location(), exception, stack_trace, cause);
		self.dispatcher.dispatch(endpoint, &event)
	}
}

impl ExceptionHandler for RemoteExceptionHandler {
	fn handle(&self, exception: &Exception, cause: Option<&str>) {
		let Some(_guard) = HandlingGuard::enter() else {
			return;
		};

		if self.config.logging_mode.console_enabled() {
			let detail = cause.map(|c| Value::String(c.to_string()));
			self
				.console
				.write(ConsoleChannel::Error, &exception.to_string(), detail.as_ref());
		}

		let Some(endpoint) = self.config.remote_log_target() else {
			return;
		};

		if let Err(e) = self.report_remote(endpoint, exception, cause) {
			self.dispatcher.report_failure(&e);
		}
	}
}
