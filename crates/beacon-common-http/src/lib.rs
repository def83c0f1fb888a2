// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Beacon.
//!
//! Every outbound request made by Beacon carries the same User-Agent so the
//! collection service can tell SDK traffic apart from application traffic.

mod client;

pub use client::{builder, new_client_with_timeout, platform, user_agent};
