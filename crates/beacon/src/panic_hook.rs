// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Routes panics to an [`ExceptionHandler`].

use std::panic;
use std::sync::Arc;

use beacon_core::Exception;
use tracing::info;

use crate::exception::ExceptionHandler;

/// Replaces the process panic hook with one that reports every panic to
/// `handler`.
///
/// The previous hook is not called, so the default "thread panicked at"
/// message is replaced by the handler's console output. Unwinding proceeds
/// normally after the hook returns.
pub fn install_panic_hook(handler: Arc<dyn ExceptionHandler>) {
	panic::set_hook(Box::new(move |info| {
		let exception = Exception::from_panic(info);
		handler.handle(&exception, None);
	}));

	info!("Panic hook installed");
}
