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
	common::{Address, CreatedAtFilter, Currency, write_pagination},
};

open_enum! {
	/// The lifecycle status of a wire transfer
	pub enum WireTransferStatus {
		PendingApproval = "pending_approval",
		Canceled = "canceled",
		PendingReviewing = "pending_reviewing",
		Rejected = "rejected",
		RequiresAttention = "requires_attention",
		PendingCreation = "pending_creation",
		/// The transfer was reversed by the receiving bank.
		Reversed = "reversed",
		Submitted = "submitted",
		/// The transfer has been acknowledged by Fedwire and can be considered complete.
		Complete = "complete",
	}
}

closed_enum! {
	pub enum WireTransferType {
		WireTransfer = "wire_transfer",
	}
}

wire_record! {
	/// A wire transfer sent over Fedwire
	pub struct WireTransfer as "wire_transfer" {
		required {
			id: String = "id",
			account_id: String = "account_id",
			account_number: String = "account_number",
			amount: i64 = "amount",
			created_at: DateTime<Utc> = "created_at",
			currency: Currency = "currency",
			/// The message shown to the recipient.
			message_to_recipient: String = "message_to_recipient",
			routing_number: String = "routing_number",
			status: WireTransferStatus = "status",
			object_type: WireTransferType = "type",
		}
		optional {
			beneficiary_name: String = "beneficiary_name",
			beneficiary_address: Address = "beneficiary_address",
			external_account_id: String = "external_account_id",
			idempotency_key: String = "idempotency_key",
			originator_name: String = "originator_name",
			pending_transaction_id: String = "pending_transaction_id",
			source_account_number_id: String = "source_account_number_id",
			transaction_id: String = "transaction_id",
		}
	}
}

wire_record! {
	pub struct WireTransferCreateParams as "wire_transfer_create_params" {
		required {
			account_id: String = "account_id",
			amount: i64 = "amount",
			beneficiary_name: String = "beneficiary_name",
			message_to_recipient: String = "message_to_recipient",
		}
		optional {
			account_number: String = "account_number",
			beneficiary_address: Address = "beneficiary_address",
			external_account_id: String = "external_account_id",
			originator_name: String = "originator_name",
			require_approval: bool = "require_approval",
			routing_number: String = "routing_number",
			source_account_number_id: String = "source_account_number_id",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireTransferListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub account_id: Option<String>,
	pub external_account_id: Option<String>,
	pub idempotency_key: Option<String>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for WireTransferListParams {
	fn write_query(&self, query: &mut QueryWriter) {
		write_pagination(query, self.cursor.as_ref(), self.limit.as_ref());
		query
			.push_opt("account_id", self.account_id.as_ref())
			.push_opt("external_account_id", self.external_account_id.as_ref())
			.push_opt("idempotency_key", self.idempotency_key.as_ref());
		if let Some(created_at) = &self.created_at {
			created_at.write_query(query);
		}
	}
}

impl Resource for WireTransfer {
	const PATH: &'static str = "/wire_transfers";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for WireTransfer {
	type CreateParams = WireTransferCreateParams;
}

impl Listable for WireTransfer {
	type ListParams = WireTransferListParams;
}
