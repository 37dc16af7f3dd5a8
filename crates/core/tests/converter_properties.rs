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

//! Property tests for the container converters
//!
//! These check that coercing then dumping a valid wire value gives back the
//! same wire value, and that mapping keys keep their order.

use meridian_core::{
	CoercionError, Converter, ListOf, MapOf, Native, State, WireKind, WireValue,
};
use proptest::prelude::*;
use serde_json::json;

fn string_sequence() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("[a-z0-9 ]{0,12}", 0..16)
}

fn keyed_integers() -> impl Strategy<Value = Vec<(String, i64)>> {
	// Distinct keys, arbitrary order.
	prop::collection::btree_map("[a-z_]{1,8}", any::<i64>(), 0..12)
		.prop_map(|map| map.into_iter().collect::<Vec<_>>())
		.prop_shuffle()
}

proptest! {
	#[test]
	fn list_of_strings_round_trips(items in string_sequence()) {
		let wire = WireValue::Array(items.iter().cloned().map(WireValue::String).collect());
		let converter = ListOf::new(Native::<String>::new());
		let state = State::root("entries");

		let coerced = converter.coerce(&wire, &state).unwrap();
		prop_assert_eq!(&coerced, &items);
		prop_assert_eq!(converter.dump(&coerced, &state), wire);
	}

	#[test]
	fn list_of_lists_round_trips(items in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..4), 0..6)) {
		let wire = serde_json::to_value(&items).unwrap();
		let converter = ListOf::new(ListOf::new(Native::<i64>::new()));

		let coerced = converter.coerce(&wire, &State::new()).unwrap();
		prop_assert_eq!(converter.dump(&coerced, &State::new()), wire);
	}

	#[test]
	fn map_of_preserves_keys_and_order(entries in keyed_integers()) {
		let mut object = serde_json::Map::new();
		for (key, value) in &entries {
			object.insert(key.clone(), json!(value));
		}
		let wire = WireValue::Object(object);
		let converter = MapOf::new(Native::<i64>::new());
		let state = State::root("balances");

		let coerced = converter.coerce(&wire, &state).unwrap();
		let keys: Vec<&String> = coerced.keys().collect();
		let expected: Vec<&String> = entries.iter().map(|(key, _)| key).collect();
		prop_assert_eq!(keys, expected);
		prop_assert_eq!(converter.dump(&coerced, &state), wire);
	}

	#[test]
	fn list_of_rejects_any_scalar(text in "[a-z]{0,8}", number in any::<i64>(), flag in any::<bool>()) {
		let converter = ListOf::new(Native::<String>::new());
		for scalar in [json!(text), json!(number), json!(flag), json!(null)] {
			let err = converter.coerce(&scalar, &State::root("entries")).unwrap_err();
			let is_sequence_mismatch = matches!(
				err,
				CoercionError::ShapeMismatch { expected: WireKind::Sequence, .. }
			);
			prop_assert!(is_sequence_mismatch);
		}
	}
}
