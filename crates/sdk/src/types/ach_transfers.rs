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
	/// The lifecycle status of an ACH transfer
	pub enum AchTransferStatus {
		/// The transfer is pending approval.
		PendingApproval = "pending_approval",
		/// The transfer belongs to a Transfer Session that is pending confirmation.
		PendingTransferSessionConfirmation = "pending_transfer_session_confirmation",
		/// The transfer has been canceled.
		Canceled = "canceled",
		/// The transfer is pending submission to the Federal Reserve.
		PendingSubmission = "pending_submission",
		/// The transfer is pending review.
		PendingReviewing = "pending_reviewing",
		/// The transfer requires attention from an operator.
		RequiresAttention = "requires_attention",
		/// The transfer has been rejected.
		Rejected = "rejected",
		/// The transfer has been submitted to the network.
		Submitted = "submitted",
		/// The transfer has been returned.
		Returned = "returned",
	}
}

open_enum! {
	/// The Standard Entry Class (SEC) code used for the transfer
	pub enum StandardEntryClassCode {
		/// Corporate Credit and Debit (CCD).
		CorporateCreditOrDebit = "corporate_credit_or_debit",
		/// Corporate Trade Exchange (CTX).
		CorporateTradeExchange = "corporate_trade_exchange",
		/// Prearranged Payments and Deposits (PPD).
		PrearrangedPaymentsAndDeposit = "prearranged_payments_and_deposit",
		/// Internet Initiated (WEB).
		InternetInitiated = "internet_initiated",
	}
}

open_enum! {
	/// The type of the counterparty's bank account
	pub enum AccountFunding {
		Checking = "checking",
		Savings = "savings",
		GeneralLedger = "general_ledger",
	}
}

open_enum! {
	/// The type of addenda attached to the transfer
	pub enum AddendaCategory {
		/// Unstructured `payment_related_information` passed through with the transfer.
		Freeform = "freeform",
		/// Structured ASC X12 820 remittance advice records.
		PaymentOrderRemittanceAdvice = "payment_order_remittance_advice",
		/// Unknown addenda type.
		Other = "other",
	}
}

open_enum! {
	/// Why the receiving bank returned the transfer
	pub enum AchReturnReasonCode {
		/// Code R01. Insufficient funds in the receiving account.
		InsufficientFund = "insufficient_fund",
		/// Code R03. The account does not exist or the receiving bank could not locate it.
		NoAccount = "no_account",
		/// Code R02. The account is closed at the receiving bank.
		AccountClosed = "account_closed",
		/// Code R04. The account number is invalid at the receiving bank.
		InvalidAccountNumberStructure = "invalid_account_number_structure",
		/// Code R16. The account at the receiving bank was frozen per the Office of Foreign Assets Control.
		AccountFrozenEntryReturnedPerOfacInstruction = "account_frozen_entry_returned_per_ofac_instruction",
		/// Code R23. The receiving bank account refused a credit transfer.
		CreditEntryRefusedByReceiver = "credit_entry_refused_by_receiver",
		/// Code R05. The receiving bank rejected because of an incorrect Standard Entry Class code.
		UnauthorizedDebitToConsumerAccountUsingCorporateSecCode = "unauthorized_debit_to_consumer_account_using_corporate_sec_code",
		/// Code R29. The corporate customer at the receiving bank reversed the transfer.
		CorporateCustomerAdvisedNotAuthorized = "corporate_customer_advised_not_authorized",
		/// Code R08. The receiving bank stopped payment on this transfer.
		PaymentStopped = "payment_stopped",
		/// Code R20. The destination account cannot receive ACH transfers.
		NonTransactionAccount = "non_transaction_account",
		/// Code R07. The customer at the receiving bank reversed the transfer.
		AuthorizationRevokedByCustomer = "authorization_revoked_by_customer",
	}
}

closed_enum! {
	pub enum AchTransferType {
		AchTransfer = "ach_transfer",
	}
}

wire_record! {
	/// One line of freeform addenda
	pub struct AddendaFreeformEntry as "addenda_freeform_entry" {
		required {
			/// The payment related information passed in the addendum.
			payment_related_information: String = "payment_related_information",
		}
		optional {}
	}
}

wire_record! {
	/// Unstructured addenda
	pub struct AddendaFreeform as "addenda_freeform" {
		required {
			/// Each entry represents an addendum sent with the transfer.
			entries: Vec<AddendaFreeformEntry> = "entries",
		}
		optional {}
	}
}

wire_record! {
	pub struct RemittanceInvoice as "remittance_invoice" {
		required {
			/// The invoice number for this reference, determined in advance with the receiver.
			invoice_number: String = "invoice_number",
			/// The amount that was paid for this invoice in the minor unit of its currency.
			paid_amount: i64 = "paid_amount",
		}
		optional {}
	}
}

wire_record! {
	/// Structured ASC X12 820 remittance advice
	pub struct PaymentOrderRemittanceAdvice as "payment_order_remittance_advice" {
		required {
			invoices: Vec<RemittanceInvoice> = "invoices",
		}
		optional {}
	}
}

wire_record! {
	/// Additional information sent with an ACH transfer
	pub struct Addenda as "addenda" {
		required {
			category: AddendaCategory = "category",
		}
		optional {
			/// Present when `category` is `freeform`.
			freeform: AddendaFreeform = "freeform",
			/// Present when `category` is `payment_order_remittance_advice`.
			payment_order_remittance_advice: PaymentOrderRemittanceAdvice = "payment_order_remittance_advice",
		}
	}
}

impl Addenda {
	/// Freeform addenda from lines of payment related information
	pub fn freeform<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let entries = lines.into_iter().map(AddendaFreeformEntry::new).collect::<Vec<_>>();
		Self::new(AddendaCategory::Freeform).with_freeform(AddendaFreeform::new(entries))
	}
}

wire_record! {
	/// Details of a returned transfer
	pub struct AchTransferReturn as "ach_transfer_return" {
		required {
			created_at: DateTime<Utc> = "created_at",
			/// The three character ACH return code, in the range R01 to R85.
			raw_return_reason_code: String = "raw_return_reason_code",
			return_reason_code: AchReturnReasonCode = "return_reason_code",
			trace_number: String = "trace_number",
			transaction_id: String = "transaction_id",
			transfer_id: String = "transfer_id",
		}
		optional {}
	}
}

wire_record! {
	/// An ACH transfer moves funds between an account and any other account in the US
	pub struct AchTransfer as "ach_transfer" {
		required {
			id: String = "id",
			account_id: String = "account_id",
			/// The destination account number.
			account_number: String = "account_number",
			/// Positive for credits, negative for debits, in the minor unit of `currency`.
			amount: i64 = "amount",
			created_at: DateTime<Utc> = "created_at",
			currency: Currency = "currency",
			funding: AccountFunding = "funding",
			/// The American Bankers' Association (ABA) Routing Transit Number (RTN).
			routing_number: String = "routing_number",
			standard_entry_class_code: StandardEntryClassCode = "standard_entry_class_code",
			statement_descriptor: String = "statement_descriptor",
			status: AchTransferStatus = "status",
			object_type: AchTransferType = "type",
		}
		optional {
			addenda: Addenda = "addenda",
			company_descriptive_date: String = "company_descriptive_date",
			company_discretionary_data: String = "company_discretionary_data",
			company_entry_description: String = "company_entry_description",
			company_name: String = "company_name",
			external_account_id: String = "external_account_id",
			idempotency_key: String = "idempotency_key",
			individual_id: String = "individual_id",
			individual_name: String = "individual_name",
			pending_transaction_id: String = "pending_transaction_id",
			ach_return: AchTransferReturn = "return",
			transaction_id: String = "transaction_id",
		}
	}
}

wire_record! {
	pub struct AchTransferCreateParams as "ach_transfer_create_params" {
		required {
			account_id: String = "account_id",
			amount: i64 = "amount",
			/// Shown on the recipient's bank statement.
			statement_descriptor: String = "statement_descriptor",
		}
		optional {
			account_number: String = "account_number",
			addenda: Addenda = "addenda",
			company_descriptive_date: String = "company_descriptive_date",
			company_discretionary_data: String = "company_discretionary_data",
			company_entry_description: String = "company_entry_description",
			company_name: String = "company_name",
			/// Use instead of `account_number` and `routing_number`.
			external_account_id: String = "external_account_id",
			funding: AccountFunding = "funding",
			individual_id: String = "individual_id",
			individual_name: String = "individual_name",
			require_approval: bool = "require_approval",
			routing_number: String = "routing_number",
			standard_entry_class_code: StandardEntryClassCode = "standard_entry_class_code",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchTransferListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub account_id: Option<String>,
	pub external_account_id: Option<String>,
	pub idempotency_key: Option<String>,
	pub status: Vec<AchTransferStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for AchTransferListParams {
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

impl Resource for AchTransfer {
	const PATH: &'static str = "/ach_transfers";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for AchTransfer {
	type CreateParams = AchTransferCreateParams;
}

impl Listable for AchTransfer {
	type ListParams = AchTransferListParams;
}

#[cfg(test)]
mod tests {
	use super::*;
	use meridian_core::{CoercionError, Record, WireKind};
	use serde_json::json;

	fn transfer_json() -> serde_json::Value {
		json!({
			"account_id": "account_in71c4amph0vgo2qllky",
			"account_number": "987654321",
			"addenda": {
				"category": "freeform",
				"freeform": {
					"entries": [{"payment_related_information": "invoice 123"}]
				},
				"payment_order_remittance_advice": null
			},
			"amount": 100,
			"company_name": "National Phonograph Company",
			"created_at": "2020-01-31T23:59:59Z",
			"currency": "USD",
			"external_account_id": null,
			"funding": "checking",
			"id": "ach_transfer_uoxatyh3lt5evrsdvo7q",
			"individual_name": "Ian Crease",
			"return": null,
			"routing_number": "101050001",
			"standard_entry_class_code": "corporate_credit_or_debit",
			"statement_descriptor": "Statement descriptor",
			"status": "returned",
			"type": "ach_transfer"
		})
	}

	#[test]
	fn test_addenda_entries_scenario() {
		let wire = json!({"entries": [{"payment_related_information": "invoice 123"}]});
		let freeform = AddendaFreeform::from_wire(&wire).unwrap();

		assert_eq!(freeform.entries.len(), 1);
		assert_eq!(freeform.entries[0].payment_related_information, "invoice 123");
		assert_eq!(freeform.to_wire(), wire);
	}

	#[test]
	fn test_addenda_entries_must_be_a_sequence() {
		let wire = json!({"entries": {"payment_related_information": "invoice 123"}});
		let err = AddendaFreeform::from_wire(&wire).unwrap_err();

		assert!(matches!(
			err.root_cause(),
			CoercionError::ShapeMismatch {
				expected: WireKind::Sequence,
				actual: WireKind::Mapping,
				..
			}
		));
		assert_eq!(err.path(), "addenda_freeform.entries");
	}

	#[test]
	fn test_transfer_decodes_nested_addenda() {
		let transfer = AchTransfer::from_wire(&transfer_json()).unwrap();

		assert_eq!(transfer.status, AchTransferStatus::Returned);
		assert_eq!(transfer.ach_return, None);
		let addenda = transfer.addenda.as_ref().unwrap();
		assert_eq!(addenda.category, AddendaCategory::Freeform);
		assert_eq!(
			addenda.freeform.as_ref().unwrap().entries[0].payment_related_information,
			"invoice 123"
		);
		assert_eq!(addenda, &Addenda::freeform(["invoice 123"]));
	}

	#[test]
	fn test_transfer_error_names_nested_field() {
		let mut wire = transfer_json();
		wire["addenda"]["freeform"]["entries"][0]["payment_related_information"] = json!(42);

		let err = AchTransfer::from_wire(&wire).unwrap_err();
		assert_eq!(
			err.path(),
			"ach_transfer.addenda.freeform.entries[0].payment_related_information"
		);
		assert!(err.to_string().starts_with("invalid ach_transfer: "));
	}

	#[test]
	fn test_transfer_missing_required_field() {
		let mut wire = transfer_json();
		wire.as_object_mut().unwrap().remove("statement_descriptor");

		let err = AchTransfer::from_wire(&wire).unwrap_err();
		assert_eq!(
			err.root_cause(),
			&CoercionError::MissingRequiredField {
				path: "ach_transfer".to_string(),
				field: "statement_descriptor",
			}
		);
	}

	#[test]
	fn test_return_details_decode() {
		let mut wire = transfer_json();
		wire["return"] = json!({
			"created_at": "2020-02-03T09:00:00Z",
			"raw_return_reason_code": "R01",
			"return_reason_code": "insufficient_fund",
			"trace_number": "111122223292834",
			"transaction_id": "transaction_uyrp7fld2ium70oa7oi",
			"transfer_id": "ach_transfer_uoxatyh3lt5evrsdvo7q"
		});

		let transfer = AchTransfer::from_wire(&wire).unwrap();
		let details = transfer.ach_return.unwrap();
		assert_eq!(details.return_reason_code, AchReturnReasonCode::InsufficientFund);
		assert_eq!(details.raw_return_reason_code, "R01");
	}

	#[test]
	fn test_create_params_body() {
		let params = AchTransferCreateParams::new("account_in71c4amph0vgo2qllky", 100, "New ACH transfer")
			.with_account_number("987654321")
			.with_routing_number("101050001")
			.with_addenda(Addenda::freeform(["invoice 123"]));

		assert_eq!(
			params.to_wire(),
			json!({
				"account_id": "account_in71c4amph0vgo2qllky",
				"amount": 100,
				"statement_descriptor": "New ACH transfer",
				"account_number": "987654321",
				"addenda": {
					"category": "freeform",
					"freeform": {"entries": [{"payment_related_information": "invoice 123"}]}
				},
				"routing_number": "101050001"
			})
		);
	}

	#[test]
	fn test_list_params_query() {
		let params = AchTransferListParams {
			account_id: Some("account_in71c4amph0vgo2qllky".to_string()),
			status: vec![AchTransferStatus::PendingApproval],
			..Default::default()
		};
		assert_eq!(
			params.to_query(),
			vec![
				(
					"account_id".to_string(),
					"account_in71c4amph0vgo2qllky".to_string()
				),
				("status.in".to_string(), "pending_approval".to_string()),
			]
		);
	}
}
