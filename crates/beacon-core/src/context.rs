// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User context attached to user error reports.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user.
///
/// Unknown keys survive a round trip through `attributes`, so applications can
/// carry whatever their profile object holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
	/// String or numeric, as the application's user store issues it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<serde_json::Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	#[serde(flatten)]
	pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// The current user as held in shared application state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
	pub profile: UserProfile,
}

impl CurrentUser {
	pub fn new(profile: UserProfile) -> Self {
		Self { profile }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn absent_fields_are_omitted() {
		let profile = UserProfile {
			id: Some(json!("u_1")),
			..Default::default()
		};
		assert_eq!(serde_json::to_value(&profile).unwrap(), json!({"id": "u_1"}));
	}

	#[test]
	fn numeric_id_is_accepted() {
		let profile: UserProfile = serde_json::from_value(json!({"id": 42})).unwrap();
		assert_eq!(profile.id, Some(json!(42)));
		assert_eq!(serde_json::to_value(&profile).unwrap(), json!({"id": 42}));
	}

	#[test]
	fn extra_attributes_are_flattened() {
		let profile: UserProfile =
			serde_json::from_value(json!({"email": "a@b.test", "plan": "pro"})).unwrap();
		assert_eq!(profile.email.as_deref(), Some("a@b.test"));
		assert_eq!(profile.attributes["plan"], "pro");
		assert_eq!(
			serde_json::to_value(&profile).unwrap(),
			json!({"email": "a@b.test", "plan": "pro"})
		);
	}
}
