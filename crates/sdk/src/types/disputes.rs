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
	pub enum CardDisputeStatus {
		/// The dispute is pending review.
		PendingReviewing = "pending_reviewing",
		/// Additional information is required to continue.
		PendingUserInformation = "pending_user_information",
		/// The dispute has been accepted and the funds returned.
		Accepted = "accepted",
		/// The dispute was rejected.
		Rejected = "rejected",
		/// The dispute was lost at the network.
		Lost = "lost",
		/// The dispute was won at the network.
		Won = "won",
	}
}

closed_enum! {
	pub enum CardDisputeType {
		CardDispute = "card_dispute",
	}
}

wire_record! {
	pub struct DisputeAcceptance as "dispute_acceptance" {
		required {
			accepted_at: DateTime<Utc> = "accepted_at",
			card_dispute_id: String = "card_dispute_id",
			/// The transaction that returned the disputed funds.
			transaction_id: String = "transaction_id",
		}
		optional {}
	}
}

wire_record! {
	pub struct DisputeRejection as "dispute_rejection" {
		required {
			card_dispute_id: String = "card_dispute_id",
			explanation: String = "explanation",
			rejected_at: DateTime<Utc> = "rejected_at",
		}
		optional {}
	}
}

wire_record! {
	pub struct DisputeLoss as "dispute_loss" {
		required {
			card_dispute_id: String = "card_dispute_id",
			explanation: String = "explanation",
			lost_at: DateTime<Utc> = "lost_at",
			transaction_id: String = "transaction_id",
		}
		optional {}
	}
}

wire_record! {
	pub struct DisputeWin as "dispute_win" {
		required {
			card_dispute_id: String = "card_dispute_id",
			won_at: DateTime<Utc> = "won_at",
		}
		optional {}
	}
}

wire_record! {
	/// A dispute raised against a card transaction
	///
	/// At most one of the outcome records is present, matching `status`.
	pub struct CardDispute as "card_dispute" {
		required {
			id: String = "id",
			created_at: DateTime<Utc> = "created_at",
			disputed_transaction_id: String = "disputed_transaction_id",
			explanation: String = "explanation",
			status: CardDisputeStatus = "status",
			object_type: CardDisputeType = "type",
		}
		optional {
			acceptance: DisputeAcceptance = "acceptance",
			amount: i64 = "amount",
			idempotency_key: String = "idempotency_key",
			loss: DisputeLoss = "loss",
			rejection: DisputeRejection = "rejection",
			win: DisputeWin = "win",
		}
	}
}

wire_record! {
	pub struct CardDisputeCreateParams as "card_dispute_create_params" {
		required {
			disputed_transaction_id: String = "disputed_transaction_id",
			explanation: String = "explanation",
		}
		optional {
			/// Defaults to the full transaction amount.
			amount: i64 = "amount",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDisputeListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub idempotency_key: Option<String>,
	pub status: Vec<CardDisputeStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for CardDisputeListParams {
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

impl Resource for CardDispute {
	const PATH: &'static str = "/card_disputes";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for CardDispute {
	type CreateParams = CardDisputeCreateParams;
}

impl Listable for CardDispute {
	type ListParams = CardDisputeListParams;
}

#[cfg(test)]
mod tests {
	use super::*;
	use meridian_core::{CoercionError, Record};
	use serde_json::json;

	#[test]
	fn test_won_dispute() {
		let wire = json!({
			"id": "card_dispute_h9sc95nbl1cgltpp7men",
			"acceptance": null,
			"amount": 1000,
			"created_at": "2020-01-31T23:59:59Z",
			"disputed_transaction_id": "transaction_uyrp7fld2ium70oa7oi",
			"explanation": "Unauthorized recurring purchase",
			"idempotency_key": null,
			"loss": null,
			"rejection": null,
			"status": "won",
			"type": "card_dispute",
			"win": {
				"card_dispute_id": "card_dispute_h9sc95nbl1cgltpp7men",
				"won_at": "2020-02-14T10:00:00Z"
			}
		});

		let dispute = CardDispute::from_wire(&wire).unwrap();
		assert_eq!(dispute.status, CardDisputeStatus::Won);
		assert!(dispute.acceptance.is_none());
		assert_eq!(
			dispute.win.unwrap().card_dispute_id,
			"card_dispute_h9sc95nbl1cgltpp7men"
		);
	}

	#[test]
	fn test_outcome_error_path() {
		let wire = json!({
			"id": "card_dispute_h9sc95nbl1cgltpp7men",
			"created_at": "2020-01-31T23:59:59Z",
			"disputed_transaction_id": "transaction_uyrp7fld2ium70oa7oi",
			"explanation": "Unauthorized recurring purchase",
			"status": "lost",
			"type": "card_dispute",
			"loss": {
				"card_dispute_id": "card_dispute_h9sc95nbl1cgltpp7men",
				"explanation": "Merchant provided proof of delivery",
				"lost_at": "yesterday",
				"transaction_id": "transaction_uyrp7fld2ium70oa7oi"
			}
		});

		let err = CardDispute::from_wire(&wire).unwrap_err();
		assert_eq!(err.path(), "card_dispute.loss.lost_at");
		assert!(matches!(err.root_cause(), CoercionError::InvalidFormat { .. }));
	}
}
