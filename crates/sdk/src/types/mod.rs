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

//! Request and response models
//!
//! Every record here is declared with `wire_record!` and every classification
//! with `open_enum!` or `closed_enum!`, so decoding, encoding, and error paths
//! behave the same way across resources.

pub mod accounts;
pub mod ach_transfers;
pub mod bookkeeping;
pub mod cards;
pub mod check_transfers;
pub mod common;
pub mod disputes;
pub mod entities;
pub mod errors;
pub mod fednow;
pub mod physical_card_profiles;
pub mod real_time_payments;
pub mod swift;
pub mod wire_transfers;

use meridian_core::{CoercionError, Record, ToQuery, Wire, WireValue};
use thiserror::Error;

pub use accounts::*;
pub use ach_transfers::*;
pub use bookkeeping::*;
pub use cards::*;
pub use check_transfers::*;
pub use common::*;
pub use disputes::*;
pub use entities::*;
pub use errors::*;
pub use fednow::*;
pub use physical_card_profiles::*;
pub use real_time_payments::*;
pub use swift::*;
pub use wire_transfers::*;

/// An API object addressable at `{PATH}/{id}`
pub trait Resource: Record + Wire + Send + 'static {
	/// Collection path, e.g. `/accounts`
	const PATH: &'static str;

	fn id(&self) -> &str;
}

/// A resource created by `POST {PATH}`
pub trait Creatable: Resource {
	type CreateParams: Record + Sync;
}

/// A resource listed by `GET {PATH}`
pub trait Listable: Resource {
	type ListParams: ToQuery + Paginated + Default + Sync;
}

/// List parameters carrying the shared `cursor` and `limit`
pub trait Paginated {
	fn paginate(self, cursor: Option<String>, limit: Option<i64>) -> Self;
}

macro_rules! paginated {
	($( $ty:ty ),* $(,)?) => {
		$(
			impl Paginated for $ty {
				fn paginate(mut self, cursor: Option<String>, limit: Option<i64>) -> Self {
					self.cursor = cursor;
					self.limit = limit;
					self
				}
			}
		)*
	};
}

paginated! {
	AccountListParams,
	AchTransferListParams,
	WireTransferListParams,
	CheckTransferListParams,
	RealTimePaymentsTransferListParams,
	FednowTransferListParams,
	SwiftTransferListParams,
	CardListParams,
	PhysicalCardProfileListParams,
	CardDisputeListParams,
	EntityListParams,
	BookkeepingAccountListParams,
	BookkeepingEntrySetListParams,
}

/// A resource updated by `PATCH {PATH}/{id}`
pub trait Updatable: Resource {
	type UpdateParams: Record + Sync;
}

/// Error types for normalizing a payload against a resource kind
#[derive(Debug, Error)]
pub enum NormalizeError {
	#[error("Unknown resource kind: {0}")]
	UnknownKind(String),
	#[error(transparent)]
	Invalid(#[from] CoercionError),
}

macro_rules! resource_kinds {
	($( $kind:literal => $ty:ty ),* $(,)?) => {
		/// Resource kinds accepted by [`normalize`], by their `type` tag
		pub const KINDS: &[&str] = &[$($kind),*];

		/// Decode a wire value as the named resource kind and dump it back
		///
		/// The result has unknown keys dropped, `null` optional fields removed,
		/// and keys in declaration order.
		pub fn normalize(kind: &str, value: &WireValue) -> Result<WireValue, NormalizeError> {
			match kind {
				$( $kind => Ok(<$ty as Record>::from_wire(value)?.to_wire()), )*
				other => Err(NormalizeError::UnknownKind(other.to_owned())),
			}
		}
	};
}

resource_kinds! {
	"account" => Account,
	"balance_lookup" => BalanceLookup,
	"ach_transfer" => AchTransfer,
	"wire_transfer" => WireTransfer,
	"check_transfer" => CheckTransfer,
	"real_time_payments_transfer" => RealTimePaymentsTransfer,
	"fednow_transfer" => FednowTransfer,
	"swift_transfer" => SwiftTransfer,
	"card" => Card,
	"card_decline" => CardDecline,
	"physical_card_profile" => PhysicalCardProfile,
	"card_dispute" => CardDispute,
	"entity" => Entity,
	"bookkeeping_account" => BookkeepingAccount,
	"bookkeeping_entry" => BookkeepingEntry,
	"bookkeeping_entry_set" => BookkeepingEntrySet,
	"bookkeeping_balance_lookup" => BookkeepingBalanceLookup,
	"error" => ApiError,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_normalize_drops_unknown_and_null_fields() {
		let wire = json!({
			"type": "balance_lookup",
			"current_balance": 100,
			"available_balance": 90,
			"account_id": "account_in71c4amph0vgo2qllky",
			"new_field": "ignored",
		});
		let normalized = normalize("balance_lookup", &wire).unwrap();

		assert_eq!(
			serde_json::to_string(&normalized).unwrap(),
			r#"{"account_id":"account_in71c4amph0vgo2qllky","available_balance":90,"current_balance":100,"type":"balance_lookup"}"#
		);
	}

	#[test]
	fn test_normalize_unknown_kind() {
		assert!(matches!(
			normalize("spaceship", &json!({})),
			Err(NormalizeError::UnknownKind(kind)) if kind == "spaceship"
		));
	}

	#[test]
	fn test_normalize_reports_invalid_payload() {
		let err = normalize("card", &json!({"id": "card_1"})).unwrap_err();
		assert!(matches!(err, NormalizeError::Invalid(_)));
	}

	#[test]
	fn test_paginate_sets_cursor_and_limit() {
		let params = AccountListParams {
			program_id: Some("program_i2v2os4mwza1oetokh9i".to_string()),
			..Default::default()
		}
		.paginate(Some("v57w5d".to_string()), Some(10));

		assert_eq!(
			params.to_query_string(),
			"cursor=v57w5d&limit=10&program_id=program_i2v2os4mwza1oetokh9i"
		);
	}

	#[test]
	fn test_every_kind_is_unique() {
		let mut kinds = KINDS.to_vec();
		kinds.sort_unstable();
		kinds.dedup();
		assert_eq!(kinds.len(), KINDS.len());
	}
}
