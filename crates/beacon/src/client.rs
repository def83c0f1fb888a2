// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The Beacon client: wiring of logger, exception handler and user reports.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use beacon_config::BeaconConfig;
use tracing::info;

use crate::backtrace::{BacktraceProvider, StackTraceProvider};
use crate::console::{Console, TracingConsole};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::exception::RemoteExceptionHandler;
use crate::logger::ApplicationLogger;
use crate::panic_hook::install_panic_hook;
use crate::report::UserErrorReporter;
use crate::state::AppState;
use crate::threshold::ThresholdState;
use crate::transport::{HttpTransport, Transport};

/// Builder for constructing a [`Beacon`].
///
/// Every collaborator has a default: [`HttpTransport`], [`TracingConsole`],
/// [`BacktraceProvider`], an empty [`AppState`] and
/// [`BeaconConfig::default`] (local console only).
#[derive(Default)]
pub struct BeaconBuilder {
	config: Option<BeaconConfig>,
	transport: Option<Arc<dyn Transport>>,
	console: Option<Arc<dyn Console>>,
	stack_traces: Option<Arc<dyn StackTraceProvider>>,
	state: Option<Arc<AppState>>,
}

impl BeaconBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn config(mut self, config: BeaconConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
		self.transport = Some(transport);
		self
	}

	pub fn console(mut self, console: Arc<dyn Console>) -> Self {
		self.console = Some(console);
		self
	}

	pub fn stack_trace_provider(mut self, provider: Arc<dyn StackTraceProvider>) -> Self {
		self.stack_traces = Some(provider);
		self
	}

	/// Shares application state owned elsewhere.
	pub fn app_state(mut self, state: Arc<AppState>) -> Self {
		self.state = Some(state);
		self
	}

	/// Builds the client.
	///
	/// The default transport captures the current tokio runtime, so build
	/// inside the runtime that should carry deliveries.
	pub fn build(self) -> Result<Beacon> {
		let config = Arc::new(self.config.unwrap_or_default());

		let transport = match self.transport {
			Some(transport) => transport,
			None => Arc::new(HttpTransport::new(config.request_timeout)?),
		};
		let console = self.console.unwrap_or_else(|| Arc::new(TracingConsole));
		let stack_traces = self
			.stack_traces
			.unwrap_or_else(|| Arc::new(BacktraceProvider));
		let state = self.state.unwrap_or_default();

		let dispatcher = Dispatcher::new(Arc::clone(&transport), Arc::clone(&console));
		let threshold = Arc::new(ThresholdState::new(config.logging_threshold));

		let logger = ApplicationLogger::new(
			Arc::clone(&config),
			threshold,
			Arc::clone(&console),
			dispatcher.clone(),
			Arc::clone(&state),
		);
		let exceptions = Arc::new(RemoteExceptionHandler::new(
			Arc::clone(&config),
			console,
			stack_traces,
			dispatcher.clone(),
			Arc::clone(&state),
		));
		let reports = UserErrorReporter::new(Arc::clone(&config), dispatcher, Arc::clone(&state));

		info!(
			logging_mode = %config.logging_mode,
			logging_threshold = %config.logging_threshold,
			remote_logging = config.remote_log_target().is_some(),
			remote_error_reports = config.remote_error_target().is_some(),
			"Beacon client initialized"
		);

		Ok(Beacon {
			inner: Arc::new(BeaconInner {
				config,
				state,
				logger,
				exceptions,
				reports,
				transport,
				closed: AtomicBool::new(false),
			}),
		})
	}
}

struct BeaconInner {
	config: Arc<BeaconConfig>,
	state: Arc<AppState>,
	logger: ApplicationLogger,
	exceptions: Arc<RemoteExceptionHandler>,
	reports: UserErrorReporter,
	transport: Arc<dyn Transport>,
	closed: AtomicBool,
}

/// Client-side logging and error reporting.
///
/// # Example
///
/// ```ignore
/// use beacon::{Beacon, AppState};
///
/// let config = beacon_config::load_config()?;
/// let beacon = Beacon::builder()
///     .config(config)
///     .app_state(Arc::new(AppState::new("https://app.example.com/#/home")))
///     .build()?;
///
/// beacon.install_panic_hook();
///
/// beacon.logger().warn("cart total mismatch", json!({"expected": 12, "got": 11}));
/// beacon.user_reports().send("The page froze", &json!({"code": "E_TIMEOUT"}));
///
/// beacon.shutdown().await;
/// ```
#[derive(Clone)]
pub struct Beacon {
	inner: Arc<BeaconInner>,
}

impl Beacon {
	pub fn builder() -> BeaconBuilder {
		BeaconBuilder::new()
	}

	pub fn logger(&self) -> &ApplicationLogger {
		&self.inner.logger
	}

	pub fn exception_handler(&self) -> Arc<RemoteExceptionHandler> {
		Arc::clone(&self.inner.exceptions)
	}

	pub fn user_reports(&self) -> &UserErrorReporter {
		&self.inner.reports
	}

	pub fn state(&self) -> &Arc<AppState> {
		&self.inner.state
	}

	pub fn config(&self) -> &BeaconConfig {
		&self.inner.config
	}

	/// Reports every subsequent panic through this client's exception handler.
	pub fn install_panic_hook(&self) {
		install_panic_hook(self.exception_handler());
	}

	/// Waits for in-flight deliveries. Later sends are rejected by the
	/// transport and contained like any other dispatch failure.
	pub async fn shutdown(&self) {
		if self.inner.closed.swap(true, Ordering::SeqCst) {
			return;
		}

		self.inner.transport.shutdown().await;
		info!("Beacon client shut down");
	}

	pub fn is_closed(&self) -> bool {
		self.inner.closed.load(Ordering::SeqCst)
	}
}
