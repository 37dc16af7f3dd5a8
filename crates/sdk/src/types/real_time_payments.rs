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
	common::{CreatedAtFilter, Currency, write_pagination},
};

open_enum! {
	/// The lifecycle status of a Real-Time Payments transfer
	pub enum RealTimePaymentsTransferStatus {
		PendingApproval = "pending_approval",
		Canceled = "canceled",
		PendingReviewing = "pending_reviewing",
		RequiresAttention = "requires_attention",
		Rejected = "rejected",
		PendingSubmission = "pending_submission",
		/// The transfer has been sent and is awaiting a response from the network.
		Submitted = "submitted",
		/// The transfer has been sent and accepted by the network.
		Complete = "complete",
	}
}

open_enum! {
	/// Why the network or receiving bank rejected the transfer
	pub enum RealTimePaymentsRejectReasonCode {
		/// The destination account is closed. Corresponds to the RTP reason code `AC04`.
		AccountClosed = "account_closed",
		/// The destination account is currently blocked from receiving transactions. Corresponds to `AC06`.
		AccountBlocked = "account_blocked",
		/// The destination account type is invalid. Corresponds to `AC14`.
		InvalidCreditorAccountType = "invalid_creditor_account_type",
		/// The destination account does not exist. Corresponds to `AC03`.
		InvalidCreditorAccountNumber = "invalid_creditor_account_number",
		/// The destination routing number is invalid. Corresponds to `RC04`.
		InvalidCreditorFinancialInstitutionIdentifier = "invalid_creditor_financial_institution_identifier",
		/// The destination account holder is deceased. Corresponds to `MD07`.
		EndCustomerDeceased = "end_customer_deceased",
		/// The reason is provided as narrative information in `reject_reason_additional_information`.
		Narrative = "narrative",
		/// Real-Time Payments transfers are not allowed to the destination account. Corresponds to `AG01`.
		TransactionForbidden = "transaction_forbidden",
		/// The destination financial institution is currently not connected to Real-Time Payments.
		ProcessingError = "processing_error",
		/// The reason is not known.
		Other = "other",
	}
}

closed_enum! {
	pub enum RealTimePaymentsTransferType {
		RealTimePaymentsTransfer = "real_time_payments_transfer",
	}
}

wire_record! {
	pub struct RealTimePaymentsRejection as "real_time_payments_rejection" {
		required {
			reject_reason_code: RealTimePaymentsRejectReasonCode = "reject_reason_code",
		}
		optional {
			reject_reason_additional_information: String = "reject_reason_additional_information",
			rejected_at: DateTime<Utc> = "rejected_at",
		}
	}
}

wire_record! {
	/// An instant transfer over The Clearing House's Real-Time Payments network
	pub struct RealTimePaymentsTransfer as "real_time_payments_transfer" {
		required {
			id: String = "id",
			account_id: String = "account_id",
			amount: i64 = "amount",
			created_at: DateTime<Utc> = "created_at",
			creditor_name: String = "creditor_name",
			currency: Currency = "currency",
			destination_account_number: String = "destination_account_number",
			destination_routing_number: String = "destination_routing_number",
			remittance_information: String = "remittance_information",
			source_account_number_id: String = "source_account_number_id",
			status: RealTimePaymentsTransferStatus = "status",
			object_type: RealTimePaymentsTransferType = "type",
		}
		optional {
			debtor_name: String = "debtor_name",
			external_account_id: String = "external_account_id",
			idempotency_key: String = "idempotency_key",
			pending_transaction_id: String = "pending_transaction_id",
			rejection: RealTimePaymentsRejection = "rejection",
			transaction_id: String = "transaction_id",
			ultimate_creditor_name: String = "ultimate_creditor_name",
			ultimate_debtor_name: String = "ultimate_debtor_name",
		}
	}
}

wire_record! {
	pub struct RealTimePaymentsTransferCreateParams as "real_time_payments_transfer_create_params" {
		required {
			amount: i64 = "amount",
			creditor_name: String = "creditor_name",
			/// Unstructured information carried with the transfer.
			remittance_information: String = "remittance_information",
			source_account_number_id: String = "source_account_number_id",
		}
		optional {
			debtor_name: String = "debtor_name",
			destination_account_number: String = "destination_account_number",
			destination_routing_number: String = "destination_routing_number",
			external_account_id: String = "external_account_id",
			require_approval: bool = "require_approval",
			ultimate_creditor_name: String = "ultimate_creditor_name",
			ultimate_debtor_name: String = "ultimate_debtor_name",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealTimePaymentsTransferListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub account_id: Option<String>,
	pub external_account_id: Option<String>,
	pub idempotency_key: Option<String>,
	pub status: Vec<RealTimePaymentsTransferStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for RealTimePaymentsTransferListParams {
	fn write_query(&self, query: &mut QueryWriter) {
		write_pagination(query, self.cursor.as_ref(), self.limit.as_ref());
		query
			.push_opt("account_id", self.account_id.as_ref())
			.push_opt("external_account_id", self.external_account_id.as_ref())
			.push_opt("idempotency_key", self.idempotency_key.as_ref())
			.nested("status", |status| {
				status.push_list("in", &self.status);
			});
		if let Some(created_at) = &self.created_at {
			created_at.write_query(query);
		}
	}
}

impl Resource for RealTimePaymentsTransfer {
	const PATH: &'static str = "/real_time_payments_transfers";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for RealTimePaymentsTransfer {
	type CreateParams = RealTimePaymentsTransferCreateParams;
}

impl Listable for RealTimePaymentsTransfer {
	type ListParams = RealTimePaymentsTransferListParams;
}

#[cfg(test)]
mod tests {
	use super::*;
	use meridian_core::Record;
	use serde_json::json;

	#[test]
	fn test_rejected_transfer() {
		let wire = json!({
			"id": "real_time_payments_transfer_iyuhl5kdn7ssmup83mvq",
			"account_id": "account_in71c4amph0vgo2qllky",
			"amount": 100,
			"created_at": "2020-01-31T23:59:59Z",
			"creditor_name": "Ian Crease",
			"currency": "USD",
			"destination_account_number": "987654321",
			"destination_routing_number": "101050001",
			"rejection": {
				"reject_reason_additional_information": null,
				"reject_reason_code": "account_closed",
				"rejected_at": "2020-01-31T23:59:59Z"
			},
			"remittance_information": "Invoice 29582",
			"source_account_number_id": "account_number_v18nkfqm6afpsrvy82b2",
			"status": "rejected",
			"type": "real_time_payments_transfer"
		});

		let transfer = RealTimePaymentsTransfer::from_wire(&wire).unwrap();
		let rejection = transfer.rejection.unwrap();
		assert_eq!(
			rejection.reject_reason_code,
			RealTimePaymentsRejectReasonCode::AccountClosed
		);
		assert_eq!(rejection.reject_reason_additional_information, None);
	}

	#[test]
	fn test_create_params_builder() {
		let params = RealTimePaymentsTransferCreateParams::builder()
			.amount(100)
			.creditor_name("Ian Crease")
			.remittance_information("Invoice 29582")
			.source_account_number_id("account_number_v18nkfqm6afpsrvy82b2")
			.destination_account_number("987654321")
			.destination_routing_number("101050001")
			.build()
			.unwrap();

		assert_eq!(params.debtor_name, None);
		assert_eq!(params.to_wire()["destination_routing_number"], json!("101050001"));
	}
}
