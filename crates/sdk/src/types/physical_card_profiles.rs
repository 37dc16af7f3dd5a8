// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::{DateTime, Utc};
use meridian_core::{QueryWriter, ToQuery, closed_enum, open_enum, wire_record};

use super::{
	Creatable, Listable, Resource,
	common::{CreatedAtFilter, write_pagination},
};

open_enum! {
	pub enum PhysicalCardProfileStatus {
		/// The card profile is not yet ready to be used.
		PendingCreating = "pending_creating",
		/// The card profile is awaiting review.
		PendingReviewing = "pending_reviewing",
		/// There is an issue with the card profile preventing it from use.
		Rejected = "rejected",
		/// The card profile is awaiting submission to the fulfillment provider.
		PendingSubmitting = "pending_submitting",
		/// The card profile is ready to be used.
		Active = "active",
		/// The card profile is no longer in use.
		Archived = "archived",
	}
}

open_enum! {
	/// Who created the profile
	pub enum PhysicalCardProfileCreator {
		/// The platform's own default profile.
		Platform = "increase",
		/// A profile created by the user.
		User = "user",
	}
}

closed_enum! {
	pub enum PhysicalCardProfileType {
		PhysicalCardProfile = "physical_card_profile",
	}
}

wire_record! {
	/// Color of text printed on the card, as 0-255 channel values
	pub struct RgbColor as "rgb_color" {
		required {
			blue: i64 = "blue",
			green: i64 = "green",
			red: i64 = "red",
		}
		optional {}
	}
}

impl Default for RgbColor {
	fn default() -> Self {
		Self::new(0, 0, 0)
	}
}

wire_record! {
	/// Text printed on the front of the card
	pub struct FrontText as "front_text" {
		required {
			line1: String = "line1",
		}
		optional {
			line2: String = "line2",
		}
	}
}

wire_record! {
	/// Artwork and carrier settings for printed cards
	pub struct PhysicalCardProfile as "physical_card_profile" {
		required {
			id: String = "id",
			created_at: DateTime<Utc> = "created_at",
			creator: PhysicalCardProfileCreator = "creator",
			description: String = "description",
			/// Whether this is the default profile for new physical cards.
			is_default: bool = "is_default",
			status: PhysicalCardProfileStatus = "status",
			object_type: PhysicalCardProfileType = "type",
		}
		optional {
			back_image_file_id: String = "back_image_file_id",
			carrier_image_file_id: String = "carrier_image_file_id",
			contact_phone: String = "contact_phone",
			front_image_file_id: String = "front_image_file_id",
			idempotency_key: String = "idempotency_key",
			program_id: String = "program_id",
		}
	}
}

wire_record! {
	pub struct PhysicalCardProfileCreateParams as "physical_card_profile_create_params" {
		required {
			carrier_image_file_id: String = "carrier_image_file_id",
			contact_phone: String = "contact_phone",
			description: String = "description",
			front_image_file_id: String = "front_image_file_id",
			program_id: String = "program_id",
		}
		optional {
			front_text: FrontText = "front_text",
		}
	}
}

wire_record! {
	/// Overrides applied when copying an existing profile
	pub struct PhysicalCardProfileCloneParams as "physical_card_profile_clone_params" {
		required {}
		optional {
			carrier_image_file_id: String = "carrier_image_file_id",
			contact_phone: String = "contact_phone",
			description: String = "description",
			front_image_file_id: String = "front_image_file_id",
			front_text: FrontText = "front_text",
			program_id: String = "program_id",
			text_color: RgbColor = "text_color",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalCardProfileListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub idempotency_key: Option<String>,
	pub status: Vec<PhysicalCardProfileStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for PhysicalCardProfileListParams {
	fn write_query(&self, query: &mut QueryWriter) {
		write_pagination(query, self.cursor.as_ref(), self.limit.as_ref());
		query
			.push_opt("idempotency_key", self.idempotency_key.as_ref())
			.nested("status", |status| {
				status.push_list("in", &self.status);
			});
		if let Some(created_at) = &self.created_at {
			created_at.write_query(query);
		}
	}
}

impl Resource for PhysicalCardProfile {
	const PATH: &'static str = "/physical_card_profiles";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for PhysicalCardProfile {
	type CreateParams = PhysicalCardProfileCreateParams;
}

impl Listable for PhysicalCardProfile {
	type ListParams = PhysicalCardProfileListParams;
}

#[cfg(test)]
mod tests {
	use super::*;
	use meridian_core::{CoercionError, Record};
	use serde_json::json;

	#[test]
	fn test_rgb_color_scenario() {
		let wire = json!({"blue": 10, "green": 20, "red": 255});
		let decoded = RgbColor::from_wire(&wire).unwrap();

		assert_eq!(decoded.blue, 10);
		assert_eq!(decoded.green, 20);
		assert_eq!(decoded.red, 255);

		let built = RgbColor::default()
			.with_blue(10)
			.with_green(20)
			.with_red(255);
		assert_eq!(built, decoded);
		assert_eq!(built.to_wire(), wire);
	}

	#[test]
	fn test_rgb_color_missing_channel() {
		let err = RgbColor::from_wire(&json!({"blue": 10, "red": 255})).unwrap_err();
		assert!(matches!(
			err.root_cause(),
			CoercionError::MissingRequiredField { field: "green", .. }
		));
	}

	#[test]
	fn test_clone_params_with_text_color() {
		let params = PhysicalCardProfileCloneParams::new()
			.with_description("Holiday edition")
			.with_front_text(FrontText::new("Ian Crease").with_line2("Founder"))
			.with_text_color(RgbColor::new(255, 255, 255));

		assert_eq!(
			params.to_wire(),
			json!({
				"description": "Holiday edition",
				"front_text": {"line1": "Ian Crease", "line2": "Founder"},
				"text_color": {"blue": 255, "green": 255, "red": 255}
			})
		);
	}
}
