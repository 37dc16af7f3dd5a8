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
	/// The bank holding an account
	pub enum AccountBank {
		BlueRidgeBank = "blue_ridge_bank",
		CoreBank = "core_bank",
		FirstInternetBank = "first_internet_bank",
		GrasshopperBank = "grasshopper_bank",
	}
}

open_enum! {
	/// The status of an account
	pub enum AccountStatus {
		/// Closed accounts do not accept new transfers.
		Closed = "closed",
		/// Open accounts are ready to use.
		Open = "open",
	}
}

closed_enum! {
	pub enum AccountType {
		Account = "account",
	}
}

closed_enum! {
	pub enum BalanceLookupType {
		BalanceLookup = "balance_lookup",
	}
}

wire_record! {
	/// An account holds money and is the source or destination of every transfer
	pub struct Account as "account" {
		required {
			id: String = "id",
			bank: AccountBank = "bank",
			created_at: DateTime<Utc> = "created_at",
			currency: Currency = "currency",
			/// Interest accrued but not yet paid, as a decimal string
			interest_accrued: String = "interest_accrued",
			/// Annual interest rate, as a decimal string
			interest_rate: String = "interest_rate",
			name: String = "name",
			program_id: String = "program_id",
			status: AccountStatus = "status",
			object_type: AccountType = "type",
		}
		optional {
			closed_at: DateTime<Utc> = "closed_at",
			entity_id: String = "entity_id",
			idempotency_key: String = "idempotency_key",
			informational_entity_id: String = "informational_entity_id",
		}
	}
}

wire_record! {
	/// Balances of an account at a point in time, in the minor unit of its currency
	pub struct BalanceLookup as "balance_lookup" {
		required {
			account_id: String = "account_id",
			/// Current balance less pending outbound holds
			available_balance: i64 = "available_balance",
			current_balance: i64 = "current_balance",
			object_type: BalanceLookupType = "type",
		}
		optional {}
	}
}

wire_record! {
	pub struct AccountCreateParams as "account_create_params" {
		required {
			name: String = "name",
		}
		optional {
			entity_id: String = "entity_id",
			informational_entity_id: String = "informational_entity_id",
			program_id: String = "program_id",
		}
	}
}

wire_record! {
	pub struct AccountUpdateParams as "account_update_params" {
		required {}
		optional {
			name: String = "name",
		}
	}
}

/// Filters for listing accounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub entity_id: Option<String>,
	pub informational_entity_id: Option<String>,
	pub program_id: Option<String>,
	/// Sent as `status.in`
	pub status: Vec<AccountStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for AccountListParams {
	fn write_query(&self, query: &mut QueryWriter) {
		write_pagination(query, self.cursor.as_ref(), self.limit.as_ref());
		query
			.push_opt("entity_id", self.entity_id.as_ref())
			.push_opt("informational_entity_id", self.informational_entity_id.as_ref())
			.push_opt("program_id", self.program_id.as_ref())
			.nested("status", |status| {
				status.push_list("in", &self.status);
			});
		if let Some(created_at) = &self.created_at {
			created_at.write_query(query);
		}
	}
}

impl Resource for Account {
	const PATH: &'static str = "/accounts";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for Account {
	type CreateParams = AccountCreateParams;
}

impl Updatable for Account {
	type UpdateParams = AccountUpdateParams;
}

impl Listable for Account {
	type ListParams = AccountListParams;
}
