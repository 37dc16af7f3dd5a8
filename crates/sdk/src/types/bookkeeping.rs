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

//! Double-entry ledger records
//!
//! A bookkeeping entry set groups entries whose amounts sum to zero. Amounts
//! are signed minor units: positive for debits, negative for credits.

use chrono::{DateTime, Utc};
use meridian_core::{QueryWriter, ToQuery, closed_enum, open_enum, wire_record};

use super::{
	Creatable, Listable, Resource,
	common::{CreatedAtFilter, write_pagination},
};

open_enum! {
	pub enum BookkeepingComplianceCategory {
		/// Cash held in a commingled account.
		CommingledCash = "commingled_cash",
		/// A customer balance.
		CustomerBalance = "customer_balance",
	}
}

closed_enum! {
	pub enum BookkeepingAccountType {
		BookkeepingAccount = "bookkeeping_account",
	}
}

closed_enum! {
	pub enum BookkeepingEntryType {
		BookkeepingEntry = "bookkeeping_entry",
	}
}

closed_enum! {
	pub enum BookkeepingEntrySetType {
		BookkeepingEntrySet = "bookkeeping_entry_set",
	}
}

closed_enum! {
	pub enum BookkeepingBalanceLookupType {
		BookkeepingBalanceLookup = "bookkeeping_balance_lookup",
	}
}

wire_record! {
	pub struct BookkeepingAccount as "bookkeeping_account" {
		required {
			id: String = "id",
			name: String = "name",
			object_type: BookkeepingAccountType = "type",
		}
		optional {
			/// The bank account this ledger account mirrors, if any.
			account_id: String = "account_id",
			compliance_category: BookkeepingComplianceCategory = "compliance_category",
			entity_id: String = "entity_id",
			idempotency_key: String = "idempotency_key",
		}
	}
}

wire_record! {
	pub struct BookkeepingEntry as "bookkeeping_entry" {
		required {
			id: String = "id",
			account_id: String = "account_id",
			amount: i64 = "amount",
			created_at: DateTime<Utc> = "created_at",
			entry_set_id: String = "entry_set_id",
			object_type: BookkeepingEntryType = "type",
		}
		optional {}
	}
}

wire_record! {
	/// One leg of an entry set as it appears inside the set
	pub struct BookkeepingEntrySetEntry as "bookkeeping_entry_set_entry" {
		required {
			id: String = "id",
			account_id: String = "account_id",
			amount: i64 = "amount",
		}
		optional {}
	}
}

wire_record! {
	pub struct BookkeepingEntrySet as "bookkeeping_entry_set" {
		required {
			id: String = "id",
			created_at: DateTime<Utc> = "created_at",
			/// The timestamp the entries are effective at.
			date: DateTime<Utc> = "date",
			entries: Vec<BookkeepingEntrySetEntry> = "entries",
			object_type: BookkeepingEntrySetType = "type",
		}
		optional {
			idempotency_key: String = "idempotency_key",
			transaction_id: String = "transaction_id",
		}
	}
}

impl BookkeepingEntrySet {
	/// Sum of all entry amounts; zero for a balanced set
	pub fn net_amount(&self) -> i64 {
		self.entries.iter().map(|entry| entry.amount).sum()
	}
}

wire_record! {
	pub struct BookkeepingBalanceLookup as "bookkeeping_balance_lookup" {
		required {
			balance: i64 = "balance",
			bookkeeping_account_id: String = "bookkeeping_account_id",
			object_type: BookkeepingBalanceLookupType = "type",
		}
		optional {}
	}
}

wire_record! {
	pub struct BookkeepingAccountCreateParams as "bookkeeping_account_create_params" {
		required {
			name: String = "name",
		}
		optional {
			account_id: String = "account_id",
			compliance_category: BookkeepingComplianceCategory = "compliance_category",
			entity_id: String = "entity_id",
		}
	}
}

wire_record! {
	pub struct BookkeepingEntrySetEntryParams as "bookkeeping_entry_set_entry_params" {
		required {
			account_id: String = "account_id",
			amount: i64 = "amount",
		}
		optional {}
	}
}

wire_record! {
	pub struct BookkeepingEntrySetCreateParams as "bookkeeping_entry_set_create_params" {
		required {
			entries: Vec<BookkeepingEntrySetEntryParams> = "entries",
		}
		optional {
			date: DateTime<Utc> = "date",
			transaction_id: String = "transaction_id",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookkeepingAccountListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub idempotency_key: Option<String>,
}

impl ToQuery for BookkeepingAccountListParams {
	fn write_query(&self, query: &mut QueryWriter) {
		write_pagination(query, self.cursor.as_ref(), self.limit.as_ref());
		query.push_opt("idempotency_key", self.idempotency_key.as_ref());
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookkeepingEntrySetListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub idempotency_key: Option<String>,
	pub transaction_id: Option<String>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for BookkeepingEntrySetListParams {
	fn write_query(&self, query: &mut QueryWriter) {
		write_pagination(query, self.cursor.as_ref(), self.limit.as_ref());
		query
			.push_opt("idempotency_key", self.idempotency_key.as_ref())
			.push_opt("transaction_id", self.transaction_id.as_ref());
		if let Some(created_at) = &self.created_at {
			created_at.write_query(query);
		}
	}
}

impl Resource for BookkeepingAccount {
	const PATH: &'static str = "/bookkeeping_accounts";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for BookkeepingAccount {
	type CreateParams = BookkeepingAccountCreateParams;
}

impl Listable for BookkeepingAccount {
	type ListParams = BookkeepingAccountListParams;
}

impl Resource for BookkeepingEntry {
	const PATH: &'static str = "/bookkeeping_entries";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Resource for BookkeepingEntrySet {
	const PATH: &'static str = "/bookkeeping_entry_sets";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for BookkeepingEntrySet {
	type CreateParams = BookkeepingEntrySetCreateParams;
}

impl Listable for BookkeepingEntrySet {
	type ListParams = BookkeepingEntrySetListParams;
}
