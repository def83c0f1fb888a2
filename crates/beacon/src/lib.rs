// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Beacon: client-side logging and error reporting.
//!
//! Three entry points share one configuration, one transport and one console:
//!
//! - [`ApplicationLogger`]: leveled logging with a runtime-adjustable threshold
//! - [`RemoteExceptionHandler`]: reports panics (via [`install_panic_hook`])
//!   and errors the application hands over
//! - [`UserErrorReporter`]: problems the user chose to report
//!
//! Depending on [`LoggingMode`], output goes nowhere, to the local console, or
//! to the console plus the remote collection endpoints. Remote delivery is
//! fire-and-forget; no entry point ever fails or panics because reporting
//! failed.
//!
//! # Example
//!
//! ```ignore
//! use beacon::Beacon;
//!
//! let beacon = Beacon::builder()
//!     .config(beacon_config::load_config()?)
//!     .build()?;
//! beacon.install_panic_hook();
//! beacon.logger().error("payment declined", None);
//! beacon.shutdown().await;
//! ```

pub mod backtrace;
pub mod client;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod exception;
pub mod logger;
pub mod panic_hook;
pub mod report;
pub mod state;
pub mod threshold;
pub mod transport;

#[cfg(test)]
mod testing;

pub use backtrace::{capture_stacktrace, BacktraceProvider, StackTraceProvider};
pub use client::{Beacon, BeaconBuilder};
pub use console::{Console, TracingConsole};
pub use dispatch::{Dispatcher, DISPATCH_FAILED_MESSAGE};
pub use error::{BeaconError, Result};
pub use exception::{ExceptionHandler, RemoteExceptionHandler};
pub use logger::ApplicationLogger;
pub use panic_hook::install_panic_hook;
pub use report::UserErrorReporter;
pub use state::AppState;
pub use threshold::ThresholdState;
pub use transport::{HttpTransport, OutboundRequest, Transport, JSON_CONTENT_TYPE};

pub use beacon_config::BeaconConfig;
pub use beacon_core::{
	ConsoleChannel, CurrentUser, Exception, LoggingMode, Severity, UserProfile,
};
