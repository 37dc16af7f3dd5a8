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

use std::marker::PhantomData;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use indexmap::IndexMap;

use crate::{
	error::{CoercionError, WireKind},
	state::State,
};

/// Untyped JSON-compatible value exchanged over HTTP
pub type WireValue = serde_json::Value;

/// Date format used for calendar dates on the wire
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A type with a canonical wire representation
///
/// `coerce` validates the wire value's shape and produces the typed value;
/// `dump` is the inverse and cannot fail for a well-typed value.
pub trait Wire: Sized {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError>;

	fn dump(&self, state: &State) -> WireValue;
}

/// Converter between wire values and a typed representation
///
/// Unlike `Wire`, a converter is a value, so containers can be parametrized
/// by the converter used for their elements.
pub trait Converter {
	type Output;

	fn coerce(&self, value: &WireValue, state: &State) -> Result<Self::Output, CoercionError>;

	fn dump(&self, value: &Self::Output, state: &State) -> WireValue;
}

/// Converter using a type's own `Wire` implementation
pub struct Native<T>(PhantomData<fn() -> T>);

impl<T> Native<T> {
	pub const fn new() -> Self {
		Self(PhantomData)
	}
}

impl<T> Default for Native<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Clone for Native<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Native<T> {}

impl<T> std::fmt::Debug for Native<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Native<{}>", std::any::type_name::<T>())
	}
}

impl<T: Wire> Converter for Native<T> {
	type Output = T;

	fn coerce(&self, value: &WireValue, state: &State) -> Result<T, CoercionError> {
		T::coerce(value, state)
	}

	fn dump(&self, value: &T, state: &State) -> WireValue {
		value.dump(state)
	}
}

/// Ordered sequence of values decoded with an element converter
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOf<C> {
	inner: C,
}

impl<C: Converter> ListOf<C> {
	pub const fn new(inner: C) -> Self {
		Self { inner }
	}
}

impl<C: Converter> Converter for ListOf<C> {
	type Output = Vec<C::Output>;

	fn coerce(&self, value: &WireValue, state: &State) -> Result<Self::Output, CoercionError> {
		let items = value
			.as_array()
			.ok_or_else(|| CoercionError::shape(state, WireKind::Sequence, value))?;

		items
			.iter()
			.enumerate()
			.map(|(index, item)| self.inner.coerce(item, &state.index(index)))
			.collect()
	}

	fn dump(&self, value: &Self::Output, state: &State) -> WireValue {
		WireValue::Array(
			value
				.iter()
				.enumerate()
				.map(|(index, item)| self.inner.dump(item, &state.index(index)))
				.collect(),
		)
	}
}

/// String-keyed mapping of values decoded with a value converter
///
/// Keys pass through unchanged and keep their wire order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapOf<C> {
	inner: C,
}

impl<C: Converter> MapOf<C> {
	pub const fn new(inner: C) -> Self {
		Self { inner }
	}
}

impl<C: Converter> Converter for MapOf<C> {
	type Output = IndexMap<String, C::Output>;

	fn coerce(&self, value: &WireValue, state: &State) -> Result<Self::Output, CoercionError> {
		let entries = value
			.as_object()
			.ok_or_else(|| CoercionError::shape(state, WireKind::Mapping, value))?;

		let mut out = IndexMap::with_capacity(entries.len());
		for (key, item) in entries {
			let item = self.inner.coerce(item, &state.key(key))?;
			out.insert(key.clone(), item);
		}
		Ok(out)
	}

	fn dump(&self, value: &Self::Output, state: &State) -> WireValue {
		let mut out = serde_json::Map::with_capacity(value.len());
		for (key, item) in value {
			out.insert(key.clone(), self.inner.dump(item, &state.key(key)));
		}
		WireValue::Object(out)
	}
}

impl<T: Wire> Wire for Vec<T> {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError> {
		ListOf::new(Native::<T>::new()).coerce(value, state)
	}

	fn dump(&self, state: &State) -> WireValue {
		ListOf::new(Native::<T>::new()).dump(self, state)
	}
}

impl<T: Wire> Wire for IndexMap<String, T> {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError> {
		MapOf::new(Native::<T>::new()).coerce(value, state)
	}

	fn dump(&self, state: &State) -> WireValue {
		MapOf::new(Native::<T>::new()).dump(self, state)
	}
}

impl Wire for WireValue {
	fn coerce(value: &WireValue, _state: &State) -> Result<Self, CoercionError> {
		Ok(value.clone())
	}

	fn dump(&self, _state: &State) -> WireValue {
		self.clone()
	}
}

impl Wire for String {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError> {
		value
			.as_str()
			.map(str::to_owned)
			.ok_or_else(|| CoercionError::shape(state, WireKind::String, value))
	}

	fn dump(&self, _state: &State) -> WireValue {
		WireValue::String(self.clone())
	}
}

impl Wire for bool {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError> {
		value
			.as_bool()
			.ok_or_else(|| CoercionError::shape(state, WireKind::Boolean, value))
	}

	fn dump(&self, _state: &State) -> WireValue {
		WireValue::Bool(*self)
	}
}

impl Wire for i64 {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError> {
		value
			.as_i64()
			.ok_or_else(|| CoercionError::shape(state, WireKind::Integer, value))
	}

	fn dump(&self, _state: &State) -> WireValue {
		WireValue::from(*self)
	}
}

impl Wire for f64 {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError> {
		value
			.as_f64()
			.ok_or_else(|| CoercionError::shape(state, WireKind::Number, value))
	}

	// Non-finite values have no JSON form and dump as null.
	fn dump(&self, _state: &State) -> WireValue {
		serde_json::Number::from_f64(*self)
			.map(WireValue::Number)
			.unwrap_or(WireValue::Null)
	}
}

impl Wire for DateTime<Utc> {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError> {
		let raw = value
			.as_str()
			.ok_or_else(|| CoercionError::shape(state, WireKind::String, value))?;
		DateTime::parse_from_rfc3339(raw)
			.map(|parsed| parsed.with_timezone(&Utc))
			.map_err(|_| CoercionError::invalid_format(state, "RFC 3339 timestamp", raw))
	}

	fn dump(&self, _state: &State) -> WireValue {
		WireValue::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
	}
}

impl Wire for NaiveDate {
	fn coerce(value: &WireValue, state: &State) -> Result<Self, CoercionError> {
		let raw = value
			.as_str()
			.ok_or_else(|| CoercionError::shape(state, WireKind::String, value))?;
		NaiveDate::parse_from_str(raw, DATE_FORMAT)
			.map_err(|_| CoercionError::invalid_format(state, "date (YYYY-MM-DD)", raw))
	}

	fn dump(&self, _state: &State) -> WireValue {
		WireValue::String(self.format(DATE_FORMAT).to_string())
	}
}
