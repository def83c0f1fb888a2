// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The failure value handed to exception handlers.

use std::any::Any;
use std::fmt;
use std::panic::PanicHookInfo;

/// A raised failure: a panic, or an error the application chose to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
	/// Short kind name, e.g. `"panic"` or the error's type name.
	pub name: String,
	pub message: String,
}

impl Exception {
	pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			message: message.into(),
		}
	}

	/// Builds an exception from an error and its `source()` chain.
	pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
		let mut message = error.to_string();
		let mut source = error.source();
		while let Some(cause) = source {
			message.push_str(": ");
			message.push_str(&cause.to_string());
			source = cause.source();
		}

		Self {
			name: short_type_name(std::any::type_name::<E>()).to_string(),
			message,
		}
	}

	/// Builds an exception from the information passed to a panic hook.
	pub fn from_panic(info: &PanicHookInfo<'_>) -> Self {
		let mut message = panic_message(info.payload());

		if let Some(location) = info.location() {
			message.push_str(&format!(
				" at {}:{}:{}",
				location.file(),
				location.line(),
				location.column()
			));
		}

		Self {
			name: "panic".to_string(),
			message,
		}
	}
}

impl fmt::Display for Exception {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.name, self.message)
	}
}

/// Text of a panic payload; non-string payloads render as `Box<dyn Any>`.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(s) = payload.downcast_ref::<&str>() {
		(*s).to_string()
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s.clone()
	} else {
		"Box<dyn Any>".to_string()
	}
}

/// `my_crate::errors::FetchError<T>` -> `FetchError`. Trait objects carry
/// no concrete kind and map to `Error`.
fn short_type_name(full: &str) -> &str {
	if full.trim_start().starts_with("dyn ") {
		return "Error";
	}
	let without_generics = full.split('<').next().unwrap_or(full);
	without_generics
		.rsplit("::")
		.next()
		.unwrap_or(without_generics)
		.trim()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Outer(Inner);

	#[derive(Debug)]
	struct Inner;

	impl fmt::Display for Outer {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "request failed")
		}
	}

	impl fmt::Display for Inner {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "connection reset")
		}
	}

	impl std::error::Error for Outer {
		fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
			Some(&self.0)
		}
	}

	impl std::error::Error for Inner {}

	#[test]
	fn display_joins_name_and_message() {
		assert_eq!(Exception::new("Error", "boom").to_string(), "Error: boom");
	}

	#[test]
	fn from_error_walks_source_chain() {
		let exception = Exception::from_error(&Outer(Inner));
		assert_eq!(exception.name, "Outer");
		assert_eq!(exception.message, "request failed: connection reset");
	}

	#[test]
	fn panic_message_reads_string_payloads() {
		let borrowed: Box<dyn Any + Send> = Box::new("boom");
		let owned: Box<dyn Any + Send> = Box::new(String::from("bang"));
		let other: Box<dyn Any + Send> = Box::new(7_u32);
		assert_eq!(panic_message(&*borrowed), "boom");
		assert_eq!(panic_message(&*owned), "bang");
		assert_eq!(panic_message(&*other), "Box<dyn Any>");
	}

	#[test]
	fn short_type_name_strips_path_and_generics() {
		assert_eq!(short_type_name("a::b::FetchError<a::T>"), "FetchError");
		assert_eq!(short_type_name("Plain"), "Plain");
	}

	#[test]
	fn from_error_on_trait_objects_uses_generic_name() {
		let boxed: Box<dyn std::error::Error + Send + Sync> = Box::from("boom");
		let exception = Exception::from_error(&*boxed);
		assert_eq!(exception.name, "Error");
		assert_eq!(exception.to_string(), "Error: boom");

		let plain: Box<dyn std::error::Error> = Box::from("bang");
		assert_eq!(Exception::from_error(&*plain).name, "Error");
	}
}
