// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared application state read when building payloads.

use std::sync::{PoisonError, RwLock};

use beacon_core::{CurrentUser, UserProfile};

/// The page the application is showing and the signed-in user, if any.
///
/// The application owns this state and updates it as navigation and sign-in
/// happen; the SDK only reads it.
#[derive(Debug, Default)]
pub struct AppState {
	location: RwLock<String>,
	user: RwLock<Option<CurrentUser>>,
}

impl AppState {
	pub fn new(location: impl Into<String>) -> Self {
		Self {
			location: RwLock::new(location.into()),
			user: RwLock::new(None),
		}
	}

	/// Current page URL, sent as `url` in every payload.
	pub fn location(&self) -> String {
		self
			.location
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	pub fn set_location(&self, location: impl Into<String>) {
		*self.location.write().unwrap_or_else(PoisonError::into_inner) = location.into();
	}

	pub fn current_user(&self) -> Option<CurrentUser> {
		self.user.read().unwrap_or_else(PoisonError::into_inner).clone()
	}

	pub fn user_profile(&self) -> Option<UserProfile> {
		self
			.user
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.as_ref()
			.map(|user| user.profile.clone())
	}

	pub fn set_user(&self, user: CurrentUser) {
		*self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
	}

	pub fn clear_user(&self) {
		*self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
	}
}
