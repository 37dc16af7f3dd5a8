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
	/// The lifecycle status of a check transfer
	pub enum CheckTransferStatus {
		PendingApproval = "pending_approval",
		Canceled = "canceled",
		PendingSubmission = "pending_submission",
		RequiresAttention = "requires_attention",
		Rejected = "rejected",
		/// The check is queued for mailing.
		PendingMailing = "pending_mailing",
		Mailed = "mailed",
		/// The check has been deposited by the recipient.
		Deposited = "deposited",
		Stopped = "stopped",
		Returned = "returned",
	}
}

open_enum! {
	/// How the check is delivered
	pub enum FulfillmentMethod {
		/// The check is printed and mailed.
		PhysicalCheck = "physical_check",
		/// The check number is reserved and a third party prints the check.
		ThirdParty = "third_party",
	}
}

closed_enum! {
	pub enum CheckTransferType {
		CheckTransfer = "check_transfer",
	}
}

wire_record! {
	/// Printing and mailing details for a physical check
	pub struct PhysicalCheck as "physical_check" {
		required {
			mailing_address: Address = "mailing_address",
			/// The descriptor printed on the check's memo line.
			memo: String = "memo",
			recipient_name: String = "recipient_name",
		}
		optional {
			note: String = "note",
			return_address: Address = "return_address",
			signature_text: String = "signature_text",
		}
	}
}

wire_record! {
	pub struct CheckTransfer as "check_transfer" {
		required {
			id: String = "id",
			account_id: String = "account_id",
			account_number: String = "account_number",
			amount: i64 = "amount",
			created_at: DateTime<Utc> = "created_at",
			currency: Currency = "currency",
			fulfillment_method: FulfillmentMethod = "fulfillment_method",
			routing_number: String = "routing_number",
			status: CheckTransferStatus = "status",
			object_type: CheckTransferType = "type",
		}
		optional {
			check_number: String = "check_number",
			idempotency_key: String = "idempotency_key",
			pending_transaction_id: String = "pending_transaction_id",
			physical_check: PhysicalCheck = "physical_check",
			source_account_number_id: String = "source_account_number_id",
		}
	}
}

wire_record! {
	pub struct CheckTransferCreateParams as "check_transfer_create_params" {
		required {
			account_id: String = "account_id",
			amount: i64 = "amount",
			/// The account number the check is drawn against.
			source_account_number_id: String = "source_account_number_id",
		}
		optional {
			fulfillment_method: FulfillmentMethod = "fulfillment_method",
			physical_check: PhysicalCheck = "physical_check",
			require_approval: bool = "require_approval",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckTransferListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub account_id: Option<String>,
	pub idempotency_key: Option<String>,
	pub status: Vec<CheckTransferStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for CheckTransferListParams {
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

impl Resource for CheckTransfer {
	const PATH: &'static str = "/check_transfers";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for CheckTransfer {
	type CreateParams = CheckTransferCreateParams;
}

impl Listable for CheckTransfer {
	type ListParams = CheckTransferListParams;
}
