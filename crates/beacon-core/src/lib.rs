// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Beacon client logging and error-reporting SDK.
//!
//! This crate holds the vocabulary shared by the SDK (`beacon`), its
//! configuration loader (`beacon-config`) and the CLI:
//! - [`Severity`]: the five ordered log levels and their console channels
//! - [`LoggingMode`]: off, local console only, or local plus remote
//! - [`Exception`] and [`Stacktrace`]: what gets reported when something fails
//! - [`ExceptionEvent`], [`LogEvent`], [`UserReport`]: the exact JSON bodies
//!   the collection endpoints accept

pub mod context;
pub mod error;
pub mod exception;
pub mod mode;
pub mod payload;
pub mod severity;
pub mod stacktrace;

pub use context::{CurrentUser, UserProfile};
pub use error::CoreError;
pub use exception::{panic_message, Exception};
pub use mode::LoggingMode;
pub use payload::{ExceptionEvent, ExceptionKind, LogEvent, UserReport};
pub use severity::{ConsoleChannel, Severity};
pub use stacktrace::{Frame, Stacktrace, NO_FRAMES};
