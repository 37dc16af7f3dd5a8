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

//! Records driven by static field descriptors
//!
//! A record type publishes a table of [`FieldSpec`]s, one per field, naming
//! the wire key, whether the field is required, and how to decode the field
//! into a builder and encode it back out. [`decode_record`] and
//! [`encode_record`] are the only routines that walk those tables; nothing is
//! discovered at runtime.
//!
//! Records are normally declared with [`wire_record!`](crate::wire_record),
//! which generates the struct, its builder, the descriptor table, fluent
//! `with_*` mutators, and the `Wire` and serde implementations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
	converter::WireValue,
	error::{CoercionError, WireKind},
	state::State,
};

/// Decoder for one field: coerce the wire value and store it in the builder
pub type FieldDecoder<R> =
	fn(&mut <R as Record>::Builder, &WireValue, &State) -> Result<(), CoercionError>;

/// Encoder for one field: `None` when an optional field is unset
pub type FieldEncoder<R> = fn(&R, &State) -> Option<WireValue>;

/// Schema descriptor for a single record field
pub struct FieldSpec<R: Record> {
	/// Key of the field in the wire mapping
	pub key: &'static str,
	/// Whether decoding fails when the key is absent or null
	pub required: bool,
	pub decode: FieldDecoder<R>,
	pub encode: FieldEncoder<R>,
}

impl<R: Record> std::fmt::Debug for FieldSpec<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FieldSpec")
			.field("key", &self.key)
			.field("required", &self.required)
			.finish()
	}
}

/// Accumulates record fields before a completeness check
pub trait RecordBuilder: Default {
	type Record;

	/// Finish the record, failing if any required field is unset
	///
	/// `state` locates the record for error messages.
	fn build_at(self, state: &State) -> Result<Self::Record, CoercionError>;
}

/// A record type with a static field table
pub trait Record: Sized + 'static {
	/// Wire name of the record, used as the root of error paths
	const NAME: &'static str;

	type Builder: RecordBuilder<Record = Self>;

	fn fields() -> &'static [FieldSpec<Self>];

	/// Decode from a wire value
	///
	/// Failures are wrapped in `CoercionError::Nested` naming this record.
	fn from_wire(value: &WireValue) -> Result<Self, CoercionError> {
		decode_record(value, &State::root(Self::NAME))
			.map_err(|err| CoercionError::nested(Self::NAME, err))
	}

	/// Encode into a wire value
	fn to_wire(&self) -> WireValue {
		encode_record(self, &State::root(Self::NAME))
	}

	/// Look up a field descriptor by wire key
	fn field(key: &str) -> Option<&'static FieldSpec<Self>> {
		Self::fields().iter().find(|field| field.key == key)
	}
}

/// Decode a wire mapping into a record using its field table
///
/// Absent and `null` values leave a field unset. Keys without a descriptor
/// are ignored.
pub fn decode_record<R: Record>(value: &WireValue, state: &State) -> Result<R, CoercionError> {
	let object = value
		.as_object()
		.ok_or_else(|| CoercionError::shape(state, WireKind::Mapping, value))?;

	let mut builder = R::Builder::default();
	for field in R::fields() {
		match object.get(field.key) {
			None | Some(WireValue::Null) => {
				if field.required {
					return Err(CoercionError::missing(state, field.key));
				}
			}
			Some(item) => (field.decode)(&mut builder, item, &state.field(field.key))?,
		}
	}

	builder.build_at(state)
}

/// Encode a record into a wire mapping in field-table order
///
/// Unset optional fields are omitted rather than written as `null`.
pub fn encode_record<R: Record>(record: &R, state: &State) -> WireValue {
	let mut object = serde_json::Map::with_capacity(R::fields().len());
	for field in R::fields() {
		if let Some(item) = (field.encode)(record, &state.field(field.key)) {
			object.insert(field.key.to_owned(), item);
		}
	}
	WireValue::Object(object)
}

#[doc(hidden)]
pub fn serialize_record<R, S>(record: &R, serializer: S) -> Result<S::Ok, S::Error>
where
	R: Record,
	S: Serializer,
{
	record.to_wire().serialize(serializer)
}

#[doc(hidden)]
pub fn deserialize_record<'de, R, D>(deserializer: D) -> Result<R, D::Error>
where
	R: Record,
	D: Deserializer<'de>,
{
	let value = WireValue::deserialize(deserializer)?;
	R::from_wire(&value).map_err(serde::de::Error::custom)
}

/// Declare a record type
///
/// Fields are split into `required` and `optional` groups. Required fields are
/// stored as `T` and are arguments of `new`; optional fields are stored as
/// `Option<T>` and start unset.
///
/// ```
/// meridian_core::wire_record! {
///     /// A point on a statement.
///     pub struct Point as "point" {
///         required {
///             x: i64 = "x",
///         }
///         optional {
///             label: String = "label",
///         }
///     }
/// }
///
/// let point = Point::new(3).with_label("origin");
/// assert_eq!(point.label.as_deref(), Some("origin"));
/// ```
#[macro_export]
macro_rules! wire_record {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident as $wire_name:literal {
			required {
				$( $(#[$rmeta:meta])* $rfield:ident : $rty:ty = $rkey:literal ),* $(,)?
			}
			optional {
				$( $(#[$ometa:meta])* $ofield:ident : $oty:ty = $okey:literal ),* $(,)?
			}
		}
	) => {
		$crate::__private::paste! {
			$(#[$meta])*
			#[derive(Debug, Clone, PartialEq)]
			$vis struct $name {
				$( $(#[$rmeta])* pub $rfield: $rty, )*
				$( $(#[$ometa])* pub $ofield: ::core::option::Option<$oty>, )*
			}

			impl $name {
				/// Create a value from its required fields; optional fields start unset
				#[allow(clippy::too_many_arguments, clippy::new_without_default)]
				pub fn new($( $rfield: impl ::core::convert::Into<$rty> ),*) -> Self {
					Self {
						$( $rfield: $rfield.into(), )*
						$( $ofield: ::core::option::Option::None, )*
					}
				}

				/// Start a builder with every field unset
				pub fn builder() -> [<$name Builder>] {
					::core::default::Default::default()
				}

				$(
					#[doc = concat!("Copy of this value with `", $rkey, "` replaced")]
					pub fn [<with_ $rfield>](mut self, value: impl ::core::convert::Into<$rty>) -> Self {
						self.$rfield = value.into();
						self
					}
				)*

				$(
					#[doc = concat!("Copy of this value with `", $okey, "` set")]
					pub fn [<with_ $ofield>](mut self, value: impl ::core::convert::Into<$oty>) -> Self {
						self.$ofield = ::core::option::Option::Some(value.into());
						self
					}

					#[doc = concat!("Copy of this value with `", $okey, "` unset")]
					pub fn [<without_ $ofield>](mut self) -> Self {
						self.$ofield = ::core::option::Option::None;
						self
					}
				)*
			}

			#[doc = concat!("Builder for [`", stringify!($name), "`]")]
			#[derive(Debug, Clone, Default)]
			$vis struct [<$name Builder>] {
				$( $rfield: ::core::option::Option<$rty>, )*
				$( $ofield: ::core::option::Option<$oty>, )*
			}

			impl [<$name Builder>] {
				$(
					pub fn $rfield(mut self, value: impl ::core::convert::Into<$rty>) -> Self {
						self.$rfield = ::core::option::Option::Some(value.into());
						self
					}
				)*

				$(
					pub fn $ofield(mut self, value: impl ::core::convert::Into<$oty>) -> Self {
						self.$ofield = ::core::option::Option::Some(value.into());
						self
					}
				)*

				/// Finish the value, failing if a required field was never set
				pub fn build(self) -> ::core::result::Result<$name, $crate::CoercionError> {
					$crate::RecordBuilder::build_at(self, &$crate::State::root($wire_name))
				}
			}

			impl $crate::RecordBuilder for [<$name Builder>] {
				type Record = $name;

				#[allow(unused_variables)]
				fn build_at(
					self,
					state: &$crate::State,
				) -> ::core::result::Result<$name, $crate::CoercionError> {
					::core::result::Result::Ok($name {
						$(
							$rfield: match self.$rfield {
								::core::option::Option::Some(value) => value,
								::core::option::Option::None => {
									return ::core::result::Result::Err(
										$crate::CoercionError::missing(state, $rkey),
									);
								}
							},
						)*
						$( $ofield: self.$ofield, )*
					})
				}
			}

			impl $crate::Record for $name {
				const NAME: &'static str = $wire_name;

				type Builder = [<$name Builder>];

				fn fields() -> &'static [$crate::FieldSpec<Self>] {
					static FIELDS: &[$crate::FieldSpec<$name>] = &[
						$(
							$crate::FieldSpec {
								key: $rkey,
								required: true,
								decode: |builder, value, state| {
									builder.$rfield = ::core::option::Option::Some(
										<$rty as $crate::Wire>::coerce(value, state)?,
									);
									::core::result::Result::Ok(())
								},
								encode: |record, state| {
									::core::option::Option::Some(
										<$rty as $crate::Wire>::dump(&record.$rfield, state),
									)
								},
							},
						)*
						$(
							$crate::FieldSpec {
								key: $okey,
								required: false,
								decode: |builder, value, state| {
									builder.$ofield = ::core::option::Option::Some(
										<$oty as $crate::Wire>::coerce(value, state)?,
									);
									::core::result::Result::Ok(())
								},
								encode: |record, state| {
									record
										.$ofield
										.as_ref()
										.map(|value| <$oty as $crate::Wire>::dump(value, state))
								},
							},
						)*
					];
					FIELDS
				}
			}

			impl $crate::Wire for $name {
				fn coerce(
					value: &$crate::WireValue,
					state: &$crate::State,
				) -> ::core::result::Result<Self, $crate::CoercionError> {
					$crate::decode_record(value, state)
				}

				fn dump(&self, state: &$crate::State) -> $crate::WireValue {
					$crate::encode_record(self, state)
				}
			}

			impl $crate::__private::serde::Serialize for $name {
				fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
				where
					S: $crate::__private::serde::Serializer,
				{
					$crate::record::serialize_record(self, serializer)
				}
			}

			impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
				fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
				where
					D: $crate::__private::serde::Deserializer<'de>,
				{
					$crate::record::deserialize_record(deserializer)
				}
			}
		}
	};
}
