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

use std::io::Read;

use anyhow::{Context, Result, anyhow};
use meridian_core::{State, Wire, WireValue};
use meridian_sdk::{
	Account, AchTransfer, BookkeepingAccount, BookkeepingEntry, BookkeepingEntrySet, Card,
	CardDecline, CardDispute, CheckTransfer, Client, Entity, FednowTransfer, Listable, Paginated,
	PhysicalCardProfile, RealTimePaymentsTransfer, Record, Resource, SwiftTransfer, WireTransfer,
	normalize,
};
use tracing::debug;

use crate::config::STDIN_PATH;

/// Dispatch a generic call on the resource type named by `kind`
macro_rules! by_kind {
	($kind:expr, $call:ident $args:tt, [$( $name:literal => $ty:ty ),* $(,)?]) => {
		match $kind {
			$( $name => $call::<$ty> $args .await, )*
			other => Err(anyhow!("Unsupported resource kind for this command: {}", other)),
		}
	};
}

/// Read a payload from a file, or from stdin when `input` is `-`
pub fn read_input(input: &str) -> Result<String> {
	if input == STDIN_PATH {
		let mut payload = String::new();
		std::io::stdin()
			.read_to_string(&mut payload)
			.context("Failed to read payload from stdin")?;
		return Ok(payload);
	}
	std::fs::read_to_string(input).with_context(|| format!("Failed to read payload from {}", input))
}

/// Decode `payload` as the named kind and return its normalized form
pub fn validate(kind: &str, payload: &str) -> Result<WireValue> {
	let value: WireValue = serde_json::from_str(payload).context("Payload is not valid JSON")?;
	let normalized =
		normalize(kind, &value).with_context(|| format!("Payload is not a valid {}", kind))?;
	debug!(kind, "Payload is valid");
	Ok(normalized)
}

pub async fn get(client: &Client, kind: &str, id: &str) -> Result<WireValue> {
	by_kind!(kind, retrieve(client, id), [
		"account" => Account,
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
	])
}

pub async fn list(
	client: &Client,
	kind: &str,
	cursor: Option<String>,
	limit: Option<i64>,
) -> Result<WireValue> {
	by_kind!(kind, list_page(client, cursor, limit), [
		"account" => Account,
		"ach_transfer" => AchTransfer,
		"wire_transfer" => WireTransfer,
		"check_transfer" => CheckTransfer,
		"real_time_payments_transfer" => RealTimePaymentsTransfer,
		"fednow_transfer" => FednowTransfer,
		"swift_transfer" => SwiftTransfer,
		"card" => Card,
		"physical_card_profile" => PhysicalCardProfile,
		"card_dispute" => CardDispute,
		"entity" => Entity,
		"bookkeeping_account" => BookkeepingAccount,
		"bookkeeping_entry_set" => BookkeepingEntrySet,
	])
}

pub async fn balance(client: &Client, account_id: &str) -> Result<WireValue> {
	let lookup = client
		.account_balance(account_id)
		.await
		.with_context(|| format!("Failed to look up balance of {}", account_id))?;
	Ok(lookup.to_wire())
}

async fn retrieve<R: Resource>(client: &Client, id: &str) -> Result<WireValue> {
	let resource = client
		.retrieve::<R>(id)
		.await
		.with_context(|| format!("Failed to retrieve {} {}", R::NAME, id))?;
	Ok(resource.to_wire())
}

async fn list_page<R: Listable>(
	client: &Client,
	cursor: Option<String>,
	limit: Option<i64>,
) -> Result<WireValue> {
	let params = R::ListParams::default().paginate(cursor, limit);
	let page = client
		.list::<R>(&params)
		.await
		.with_context(|| format!("Failed to list {}", R::PATH))?;
	Ok(page.dump(&State::root("page")))
}
