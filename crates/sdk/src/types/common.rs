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
use meridian_core::{
	CoercionError, QueryWriter, State, Wire, WireKind, WireValue, open_enum, wire_record,
};

open_enum! {
	/// ISO 4217 currency code
	pub enum Currency {
		/// Canadian Dollar (CAD)
		Cad = "CAD",
		/// Swiss Franc (CHF)
		Chf = "CHF",
		/// Euro (EUR)
		Eur = "EUR",
		/// British Pound (GBP)
		Gbp = "GBP",
		/// Japanese Yen (JPY)
		Jpy = "JPY",
		/// US Dollar (USD)
		Usd = "USD",
	}
}

wire_record! {
	/// A postal address
	pub struct Address as "address" {
		required {
			city: String = "city",
			line1: String = "line1",
			postal_code: String = "postal_code",
		}
		optional {
			line2: String = "line2",
			/// Two-letter US state code, or the region for non-US addresses
			state: String = "state",
			/// Two-letter ISO 3166-1 country code
			country: String = "country",
		}
	}
}

/// One page of a list response
///
/// Lists are paginated with an opaque cursor: pass `next_cursor` as the
/// `cursor` parameter of the next request until it comes back empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
	pub data: Vec<T>,
	pub next_cursor: Option<String>,
}

impl<T> Page<T> {
	/// Whether another page can be requested
	pub fn has_more(&self) -> bool {
		self.next_cursor.is_some()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.data.iter()
	}
}

impl<T: Wire> Page<T> {
	/// Decode a list response body
	pub fn from_wire(value: &WireValue) -> Result<Self, CoercionError> {
		Self::coerce(value, &State::root("page")).map_err(|err| CoercionError::nested("page", err))
	}
}

impl<T> IntoIterator for Page<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Page<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.iter()
	}
}

impl<T: Wire> Wire for Page<T> {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError> {
		let object = value
			.as_object()
			.ok_or_else(|| CoercionError::shape(state, WireKind::Mapping, value))?;

		let data = match object.get("data") {
			None | Some(WireValue::Null) => return Err(CoercionError::missing(state, "data")),
			Some(items) => Vec::<T>::coerce(items, &state.field("data"))?,
		};
		let next_cursor = match object.get("next_cursor") {
			None | Some(WireValue::Null) => None,
			Some(cursor) => Some(String::coerce(cursor, &state.field("next_cursor"))?),
		};

		Ok(Self { data, next_cursor })
	}

	fn dump(&self, state: &State) -> WireValue {
		let mut object = serde_json::Map::new();
		object.insert("data".to_owned(), self.data.dump(&state.field("data")));
		object.insert(
			"next_cursor".to_owned(),
			self.next_cursor
				.as_ref()
				.map_or(WireValue::Null, |cursor| WireValue::String(cursor.clone())),
		);
		WireValue::Object(object)
	}
}

/// Bounds on an object's creation time, sent as `created_at.*`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedAtFilter {
	pub after: Option<DateTime<Utc>>,
	pub before: Option<DateTime<Utc>>,
	pub on_or_after: Option<DateTime<Utc>>,
	pub on_or_before: Option<DateTime<Utc>>,
}

impl CreatedAtFilter {
	pub fn after(mut self, at: DateTime<Utc>) -> Self {
		self.after = Some(at);
		self
	}

	pub fn before(mut self, at: DateTime<Utc>) -> Self {
		self.before = Some(at);
		self
	}

	pub fn on_or_after(mut self, at: DateTime<Utc>) -> Self {
		self.on_or_after = Some(at);
		self
	}

	pub fn on_or_before(mut self, at: DateTime<Utc>) -> Self {
		self.on_or_before = Some(at);
		self
	}

	pub(crate) fn write_query(&self, query: &mut QueryWriter) {
		query.nested("created_at", |created_at| {
			created_at
				.push_opt("after", self.after.as_ref())
				.push_opt("before", self.before.as_ref())
				.push_opt("on_or_after", self.on_or_after.as_ref())
				.push_opt("on_or_before", self.on_or_before.as_ref());
		});
	}
}

/// Cursor and page size shared by every list endpoint
pub(crate) fn write_pagination(query: &mut QueryWriter, cursor: Option<&String>, limit: Option<&i64>) {
	query.push_opt("cursor", cursor).push_opt("limit", limit);
}
