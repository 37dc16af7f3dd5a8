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
	pub enum FednowTransferStatus {
		PendingReviewing = "pending_reviewing",
		Canceled = "canceled",
		ReviewingRejected = "reviewing_rejected",
		RequiresAttention = "requires_attention",
		PendingApproval = "pending_approval",
		PendingSubmitting = "pending_submitting",
		PendingResponse = "pending_response",
		Complete = "complete",
		Rejected = "rejected",
	}
}

open_enum! {
	pub enum FednowRejectReasonCode {
		AccountClosed = "account_closed",
		AccountBlocked = "account_blocked",
		InvalidCreditorAccountType = "invalid_creditor_account_type",
		InvalidCreditorAccountNumber = "invalid_creditor_account_number",
		InvalidCreditorFinancialInstitutionIdentifier = "invalid_creditor_financial_institution_identifier",
		EndCustomerDeceased = "end_customer_deceased",
		Narrative = "narrative",
		TransactionForbidden = "transaction_forbidden",
		TransactionTypeNotSupported = "transaction_type_not_supported",
		AmountExceedsBankLimits = "amount_exceeds_bank_limits",
		InvalidCreditorAddress = "invalid_creditor_address",
		InvalidDebtorAddress = "invalid_debtor_address",
		Timeout = "timeout",
		ProcessingError = "processing_error",
		Other = "other",
	}
}

closed_enum! {
	pub enum FednowTransferType {
		FednowTransfer = "fednow_transfer",
	}
}

wire_record! {
	pub struct FednowRejection as "fednow_rejection" {
		required {
			reject_reason_code: FednowRejectReasonCode = "reject_reason_code",
		}
		optional {
			reject_reason_additional_information: String = "reject_reason_additional_information",
			rejected_at: DateTime<Utc> = "rejected_at",
		}
	}
}

wire_record! {
	/// An instant transfer over the Federal Reserve's FedNow Service
	pub struct FednowTransfer as "fednow_transfer" {
		required {
			id: String = "id",
			account_id: String = "account_id",
			account_number: String = "account_number",
			amount: i64 = "amount",
			created_at: DateTime<Utc> = "created_at",
			creditor_name: String = "creditor_name",
			currency: Currency = "currency",
			debtor_name: String = "debtor_name",
			routing_number: String = "routing_number",
			source_account_number_id: String = "source_account_number_id",
			status: FednowTransferStatus = "status",
			object_type: FednowTransferType = "type",
			unstructured_remittance_information: String = "unstructured_remittance_information",
		}
		optional {
			creditor_address: Address = "creditor_address",
			debtor_address: Address = "debtor_address",
			external_account_id: String = "external_account_id",
			idempotency_key: String = "idempotency_key",
			pending_transaction_id: String = "pending_transaction_id",
			rejection: FednowRejection = "rejection",
			transaction_id: String = "transaction_id",
		}
	}
}

wire_record! {
	pub struct FednowTransferCreateParams as "fednow_transfer_create_params" {
		required {
			account_id: String = "account_id",
			amount: i64 = "amount",
			creditor_name: String = "creditor_name",
			debtor_name: String = "debtor_name",
			source_account_number_id: String = "source_account_number_id",
			unstructured_remittance_information: String = "unstructured_remittance_information",
		}
		optional {
			account_number: String = "account_number",
			creditor_address: Address = "creditor_address",
			debtor_address: Address = "debtor_address",
			external_account_id: String = "external_account_id",
			require_approval: bool = "require_approval",
			routing_number: String = "routing_number",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FednowTransferListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub account_id: Option<String>,
	pub external_account_id: Option<String>,
	pub idempotency_key: Option<String>,
	pub status: Vec<FednowTransferStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for FednowTransferListParams {
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

impl Resource for FednowTransfer {
	const PATH: &'static str = "/fednow_transfers";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for FednowTransfer {
	type CreateParams = FednowTransferCreateParams;
}

impl Listable for FednowTransfer {
	type ListParams = FednowTransferListParams;
}

#[cfg(test)]
mod tests {
	use super::*;
	use meridian_core::Record;
	use serde_json::json;

	#[test]
	fn test_unknown_reject_reason_is_preserved() {
		let wire = json!({
			"reject_reason_code": "some_future_value",
			"rejected_at": "2020-01-31T23:59:59Z"
		});

		let rejection = FednowRejection::from_wire(&wire).unwrap();
		assert_eq!(rejection.reject_reason_code.as_str(), "some_future_value");
		assert_eq!(rejection.to_wire(), wire);
	}

	#[test]
	fn test_list_params_with_created_at() {
		let params = FednowTransferListParams {
			limit: Some(2),
			created_at: Some(CreatedAtFilter::default().before(
				DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
					.unwrap()
					.with_timezone(&Utc),
			)),
			..Default::default()
		};

		assert_eq!(
			params.to_query_string(),
			"limit=2&created_at.before=2025-01-01T00%3A00%3A00Z"
		);
	}
}
