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
	Creatable, Listable, Resource, Updatable,
	common::{CreatedAtFilter, Currency, write_pagination},
};

open_enum! {
	/// Whether the card can be used
	pub enum CardStatus {
		/// The card is active.
		Active = "active",
		/// The card is temporarily disabled.
		Disabled = "disabled",
		/// The card is permanently canceled.
		Canceled = "canceled",
	}
}

open_enum! {
	/// Why an authorization was declined
	pub enum CardDeclineReason {
		/// The account has been closed.
		AccountClosed = "account_closed",
		/// The card was not active.
		CardNotActive = "card_not_active",
		/// The card has been canceled.
		CardCanceled = "card_canceled",
		/// The physical card has not been activated.
		PhysicalCardNotActive = "physical_card_not_active",
		/// The account's entity was not active.
		EntityNotActive = "entity_not_active",
		/// The account's program was not active.
		GroupLocked = "group_locked",
		/// The card's account did not have a sufficient available balance.
		InsufficientFunds = "insufficient_funds",
		/// The given CVV2 did not match the card's value.
		Cvv2Mismatch = "cvv2_mismatch",
		/// The given expiration date did not match the card's value.
		CardExpirationMismatch = "card_expiration_mismatch",
		/// The attempted card transaction is not allowed per the program's guidelines.
		TransactionNotAllowed = "transaction_not_allowed",
		/// The transaction was blocked by a limit.
		BreachesLimit = "breaches_limit",
		/// The transaction was declined by a real-time decision.
		WebhookDeclined = "webhook_declined",
		/// The real-time decision timed out.
		WebhookTimedOut = "webhook_timed_out",
		/// The transaction was suspected to be fraudulent.
		SuspectedFraud = "suspected_fraud",
	}
}

closed_enum! {
	pub enum CardType {
		Card = "card",
	}
}

closed_enum! {
	pub enum CardDeclineType {
		CardDecline = "card_decline",
	}
}

wire_record! {
	/// The card's billing address, used for address verification
	pub struct CardBillingAddress as "card_billing_address" {
		required {}
		optional {
			city: String = "city",
			line1: String = "line1",
			line2: String = "line2",
			postal_code: String = "postal_code",
			state: String = "state",
		}
	}
}

wire_record! {
	/// Contact details used when the card is added to a digital wallet
	pub struct DigitalWallet as "digital_wallet" {
		required {}
		optional {
			digital_card_profile_id: String = "digital_card_profile_id",
			email: String = "email",
			phone: String = "phone",
		}
	}
}

wire_record! {
	/// A card issued against an account
	pub struct Card as "card" {
		required {
			id: String = "id",
			account_id: String = "account_id",
			billing_address: CardBillingAddress = "billing_address",
			created_at: DateTime<Utc> = "created_at",
			expiration_month: i64 = "expiration_month",
			expiration_year: i64 = "expiration_year",
			/// The last 4 digits of the card number.
			last4: String = "last4",
			status: CardStatus = "status",
			object_type: CardType = "type",
		}
		optional {
			description: String = "description",
			digital_wallet: DigitalWallet = "digital_wallet",
			entity_id: String = "entity_id",
			idempotency_key: String = "idempotency_key",
		}
	}
}

wire_record! {
	/// A declined card authorization
	pub struct CardDecline as "card_decline" {
		required {
			id: String = "id",
			amount: i64 = "amount",
			card_payment_id: String = "card_payment_id",
			currency: Currency = "currency",
			merchant_descriptor: String = "merchant_descriptor",
			reason: CardDeclineReason = "reason",
			object_type: CardDeclineType = "type",
		}
		optional {
			merchant_category_code: String = "merchant_category_code",
			merchant_city: String = "merchant_city",
			merchant_country: String = "merchant_country",
			/// Set when a real-time decision declined the authorization.
			real_time_decision_id: String = "real_time_decision_id",
		}
	}
}

wire_record! {
	pub struct CardCreateParams as "card_create_params" {
		required {
			account_id: String = "account_id",
		}
		optional {
			billing_address: CardBillingAddress = "billing_address",
			description: String = "description",
			digital_wallet: DigitalWallet = "digital_wallet",
			entity_id: String = "entity_id",
		}
	}
}

wire_record! {
	pub struct CardUpdateParams as "card_update_params" {
		required {}
		optional {
			billing_address: CardBillingAddress = "billing_address",
			description: String = "description",
			digital_wallet: DigitalWallet = "digital_wallet",
			entity_id: String = "entity_id",
			status: CardStatus = "status",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub account_id: Option<String>,
	pub idempotency_key: Option<String>,
	pub status: Vec<CardStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for CardListParams {
	fn write_query(&self, query: &mut QueryWriter) {
		write_pagination(query, self.cursor.as_ref(), self.limit.as_ref());
		query
			.push_opt("account_id", self.account_id.as_ref())
			.push_opt("idempotency_key", self.idempotency_key.as_ref())
			.nested("status", |status| {
				status.push_list("in", &self.status);
			});
		if let Some(created_at) = &self.created_at {
			created_at.write_query(query);
		}
	}
}

impl Resource for Card {
	const PATH: &'static str = "/cards";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for Card {
	type CreateParams = CardCreateParams;
}

impl Updatable for Card {
	type UpdateParams = CardUpdateParams;
}

impl Listable for Card {
	type ListParams = CardListParams;
}

impl Resource for CardDecline {
	const PATH: &'static str = "/card_declines";

	fn id(&self) -> &str {
		&self.id
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use meridian_core::Record;
	use serde_json::json;

	#[test]
	fn test_card_with_empty_billing_address() {
		let wire = json!({
			"id": "card_oubs0hwk5rn6knuecxg2",
			"account_id": "account_in71c4amph0vgo2qllky",
			"billing_address": {
				"city": null,
				"line1": null,
				"line2": null,
				"postal_code": null,
				"state": null
			},
			"created_at": "2020-01-31T23:59:59Z",
			"description": "Office Expenses",
			"digital_wallet": null,
			"entity_id": null,
			"expiration_month": 11,
			"expiration_year": 2028,
			"idempotency_key": null,
			"last4": "4242",
			"status": "active",
			"type": "card"
		});

		let card = Card::from_wire(&wire).unwrap();
		assert_eq!(card.billing_address, CardBillingAddress::new());
		assert_eq!(card.expiration_year, 2028);
		assert_eq!(card.status, CardStatus::Active);
	}

	#[test]
	fn test_update_params_disable_card() {
		let params = CardUpdateParams::new().with_status(CardStatus::Disabled);
		assert_eq!(params.to_wire(), json!({"status": "disabled"}));
	}

	#[test]
	fn test_decline_reason_decodes() {
		let wire = json!({
			"id": "card_decline_bx3o8zd7glq8yvtwg25v",
			"amount": -1000,
			"card_payment_id": "card_payment_nd3k2kacrqjli8482ave",
			"currency": "USD",
			"merchant_descriptor": "AMAZON.COM",
			"reason": "insufficient_funds",
			"type": "card_decline"
		});

		let decline = CardDecline::from_wire(&wire).unwrap();
		assert_eq!(decline.reason, CardDeclineReason::InsufficientFunds);
		assert_eq!(decline.amount, -1000);
	}
}
