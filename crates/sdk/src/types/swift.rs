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
	pub enum SwiftTransferStatus {
		PendingApproval = "pending_approval",
		Canceled = "canceled",
		PendingReviewing = "pending_reviewing",
		RequiresAttention = "requires_attention",
		PendingInitiating = "pending_initiating",
		Initiated = "initiated",
		Rejected = "rejected",
		/// The transfer was returned by an intermediary or the beneficiary bank.
		Returned = "returned",
	}
}

open_enum! {
	/// How the creditor's account is identified
	pub enum SwiftAccountIdentifierKind {
		/// An International Bank Account Number.
		Iban = "iban",
		/// A domestic account number with a bank identification code.
		AccountNumber = "account_number",
	}
}

closed_enum! {
	pub enum SwiftTransferType {
		SwiftTransfer = "swift_transfer",
	}
}

wire_record! {
	/// An international wire sent over the SWIFT network
	pub struct SwiftTransfer as "swift_transfer" {
		required {
			id: String = "id",
			account_id: String = "account_id",
			account_number: String = "account_number",
			/// The BIC of the creditor's bank.
			bank_identification_code: String = "bank_identification_code",
			created_at: DateTime<Utc> = "created_at",
			creditor_address: Address = "creditor_address",
			creditor_name: String = "creditor_name",
			debtor_address: Address = "debtor_address",
			debtor_name: String = "debtor_name",
			/// Amount in the minor unit of `instructed_currency`.
			instructed_amount: i64 = "instructed_amount",
			instructed_currency: Currency = "instructed_currency",
			source_account_number_id: String = "source_account_number_id",
			status: SwiftTransferStatus = "status",
			object_type: SwiftTransferType = "type",
			unstructured_remittance_information: String = "unstructured_remittance_information",
		}
		optional {
			account_identifier_kind: SwiftAccountIdentifierKind = "account_identifier_kind",
			idempotency_key: String = "idempotency_key",
			/// Required by some countries in addition to the BIC.
			routing_number: String = "routing_number",
			transaction_id: String = "transaction_id",
		}
	}
}

wire_record! {
	pub struct SwiftTransferCreateParams as "swift_transfer_create_params" {
		required {
			account_id: String = "account_id",
			account_number: String = "account_number",
			bank_identification_code: String = "bank_identification_code",
			creditor_address: Address = "creditor_address",
			creditor_name: String = "creditor_name",
			debtor_address: Address = "debtor_address",
			debtor_name: String = "debtor_name",
			instructed_amount: i64 = "instructed_amount",
			instructed_currency: Currency = "instructed_currency",
			source_account_number_id: String = "source_account_number_id",
			unstructured_remittance_information: String = "unstructured_remittance_information",
		}
		optional {
			require_approval: bool = "require_approval",
			routing_number: String = "routing_number",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwiftTransferListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub account_id: Option<String>,
	pub idempotency_key: Option<String>,
	pub status: Vec<SwiftTransferStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for SwiftTransferListParams {
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

impl Resource for SwiftTransfer {
	const PATH: &'static str = "/swift_transfers";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for SwiftTransfer {
	type CreateParams = SwiftTransferCreateParams;
}

impl Listable for SwiftTransfer {
	type ListParams = SwiftTransferListParams;
}

#[cfg(test)]
mod tests {
	use super::*;
	use meridian_core::Record;
	use serde_json::json;

	#[test]
	fn test_create_params_in_foreign_currency() {
		let creditor = Address::new("Zurich", "Bahnhofstrasse 1", "8001").with_country("CH");
		let debtor = Address::new("New York", "33 Liberty Street", "10045")
			.with_state("NY")
			.with_country("US");
		let params = SwiftTransferCreateParams::new(
			"account_in71c4amph0vgo2qllky",
			"CH9300762011623852957",
			"UBSWCHZH80A",
			creditor,
			"Ian Crease",
			debtor,
			"National Phonograph Company",
			100_000,
			Currency::Chf,
			"account_number_v18nkfqm6afpsrvy82b2",
			"New Swift transfer",
		);

		let wire = params.to_wire();
		assert_eq!(wire["instructed_currency"], json!("CHF"));
		assert_eq!(wire["creditor_address"]["country"], json!("CH"));
		assert!(wire.get("routing_number").is_none());
	}
}
