// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outbound HTTP delivery.
//!
//! [`Transport::send`] only hands a request off; it never waits on the
//! network. Delivery outcomes are traced at debug level and otherwise
//! discarded. [`Transport::shutdown`] waits for requests already handed off.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tokio::runtime::Handle;
use tokio_util::task::TaskTracker;
use tracing::{debug, info};
use url::Url;

use crate::error::{BeaconError, Result};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A request ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
	pub method: Method,
	pub url: Url,
	pub content_type: &'static str,
	pub body: String,
}

impl OutboundRequest {
	/// A JSON `POST`, the only shape the collection endpoints accept.
	pub fn post_json(url: Url, body: String) -> Self {
		Self {
			method: Method::POST,
			url,
			content_type: JSON_CONTENT_TYPE,
			body,
		}
	}
}

#[async_trait]
pub trait Transport: Send + Sync {
	/// Hands the request off for delivery. Errors only describe the hand-off.
	fn send(&self, request: OutboundRequest) -> Result<()>;

	/// Stops accepting requests and waits for in-flight deliveries.
	async fn shutdown(&self) {}
}

/// Delivers requests with reqwest on the tokio runtime.
///
/// The runtime is the one current when the transport was created, or else
/// the one current at each `send`. Requests are spawned and tracked so that
/// [`Transport::shutdown`] can drain them before the process exits.
pub struct HttpTransport {
	client: Client,
	runtime: Option<Handle>,
	tracker: TaskTracker,
	closed: AtomicBool,
}

impl HttpTransport {
	/// Creates a transport with the shared Beacon client settings.
	pub fn new(timeout: Duration) -> Result<Self> {
		let client = beacon_common_http::new_client_with_timeout(timeout)?;
		Ok(Self::with_client(client))
	}

	/// Creates a transport around an existing client.
	pub fn with_client(client: Client) -> Self {
		let runtime = Handle::try_current().ok();
		if runtime.is_none() {
			debug!("HTTP transport created outside a tokio runtime");
		}
		Self {
			client,
			runtime,
			tracker: TaskTracker::new(),
			closed: AtomicBool::new(false),
		}
	}

	/// Number of deliveries still in flight.
	pub fn in_flight(&self) -> usize {
		self.tracker.len()
	}

	fn runtime(&self) -> Result<Handle> {
		match &self.runtime {
			Some(handle) => Ok(handle.clone()),
			None => Handle::try_current().map_err(|_| BeaconError::NoRuntime),
		}
	}
}

#[async_trait]
impl Transport for HttpTransport {
	fn send(&self, request: OutboundRequest) -> Result<()> {
		if self.closed.load(Ordering::SeqCst) {
			return Err(BeaconError::ClientShutdown);
		}

		let handle = self.runtime()?;
		self
			.tracker
			.spawn_on(deliver(self.client.clone(), request), &handle);
		Ok(())
	}

	async fn shutdown(&self) {
		if self.closed.swap(true, Ordering::SeqCst) {
			return;
		}

		self.tracker.close();
		let pending = self.tracker.len();
		if pending > 0 {
			debug!(pending, "waiting for in-flight deliveries");
		}
		self.tracker.wait().await;
		info!("HTTP transport shut down");
	}
}

async fn deliver(client: Client, request: OutboundRequest) {
	let OutboundRequest {
		method,
		url,
		content_type,
		body,
	} = request;

	let result = client
		.request(method, url.clone())
		.header(CONTENT_TYPE, content_type)
		.body(body)
		.send()
		.await;

	match result {
		Ok(response) => {
			debug!(url = %url, status = response.status().as_u16(), "event delivered");
		}
		Err(e) => {
			debug!(url = %url, error = %e, "event delivery failed");
		}
	}
}
