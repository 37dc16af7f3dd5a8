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

//! String-backed enumerations
//!
//! Two flavours are provided:
//!
//! - [`open_enum!`] for classifications the API may extend over time. Unknown
//!   strings decode into an `Unrecognized(String)` variant and dump back
//!   verbatim, so an older client keeps working against a newer API.
//! - [`closed_enum!`] for values that cannot grow, such as object type tags.
//!   Unknown strings fail with `CoercionError::UnrecognizedEnumValue`.

use crate::{
	converter::WireValue,
	error::{CoercionError, WireKind},
	state::State,
};

/// Common surface of generated enumerations
pub trait WireEnum {
	/// Type name used in error messages
	const NAME: &'static str;

	fn as_str(&self) -> &str;
}

/// Borrow the string inside a wire value, or fail with a shape mismatch
pub fn expect_str<'a>(value: &'a WireValue, state: &State) -> Result<&'a str, CoercionError> {
	value
		.as_str()
		.ok_or_else(|| CoercionError::shape(state, WireKind::String, value))
}

/// Declare an open enumeration
///
/// ```
/// meridian_core::open_enum! {
///     /// Lifecycle of a transfer.
///     pub enum TransferStatus {
///         /// Waiting on approval.
///         PendingApproval = "pending_approval",
///         Complete = "complete",
///     }
/// }
///
/// let status = TransferStatus::from("some_future_value");
/// assert!(!status.is_known());
/// assert_eq!(status.as_str(), "some_future_value");
/// ```
#[macro_export]
macro_rules! open_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$( $(#[$vmeta:meta])* $variant:ident = $value:literal ),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, Hash)]
		$vis enum $name {
			$( $(#[$vmeta])* $variant, )*
			/// A value not known to this version of the library, kept verbatim.
			Unrecognized(::std::string::String),
		}

		impl $name {
			/// Wire values with a named variant
			pub const KNOWN: &'static [&'static str] = &[$($value),*];

			pub fn as_str(&self) -> &str {
				match self {
					$( Self::$variant => $value, )*
					Self::Unrecognized(raw) => raw.as_str(),
				}
			}

			/// Whether the value matched a named variant
			pub fn is_known(&self) -> bool {
				!matches!(self, Self::Unrecognized(_))
			}
		}

		impl ::core::convert::From<&str> for $name {
			fn from(value: &str) -> Self {
				match value {
					$( $value => Self::$variant, )*
					other => Self::Unrecognized(other.to_owned()),
				}
			}
		}

		impl ::core::convert::From<::std::string::String> for $name {
			fn from(value: ::std::string::String) -> Self {
				match Self::from(value.as_str()) {
					Self::Unrecognized(_) => Self::Unrecognized(value),
					known => known,
				}
			}
		}

		impl ::core::str::FromStr for $name {
			type Err = ::core::convert::Infallible;

			fn from_str(value: &str) -> ::core::result::Result<Self, Self::Err> {
				Ok(Self::from(value))
			}
		}

		impl ::core::fmt::Display for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl $crate::WireEnum for $name {
			const NAME: &'static str = stringify!($name);

			fn as_str(&self) -> &str {
				$name::as_str(self)
			}
		}

		impl $crate::Wire for $name {
			fn coerce(
				value: &$crate::WireValue,
				state: &$crate::State,
			) -> ::core::result::Result<Self, $crate::CoercionError> {
				$crate::enums::expect_str(value, state).map(Self::from)
			}

			fn dump(&self, _state: &$crate::State) -> $crate::WireValue {
				$crate::WireValue::String(self.as_str().to_owned())
			}
		}

		impl $crate::QueryValue for $name {
			fn to_query_value(&self) -> ::std::string::String {
				self.as_str().to_owned()
			}
		}

		impl $crate::__private::serde::Serialize for $name {
			fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
			where
				S: $crate::__private::serde::Serializer,
			{
				serializer.serialize_str(self.as_str())
			}
		}

		impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
			where
				D: $crate::__private::serde::Deserializer<'de>,
			{
				let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
					deserializer,
				)?;
				Ok(Self::from(raw))
			}
		}
	};
}

/// Declare a closed enumeration
///
/// ```
/// meridian_core::closed_enum! {
///     pub enum Direction {
///         Credit = "credit",
///         Debit = "debit",
///     }
/// }
///
/// assert_eq!(Direction::from_wire_str("debit"), Some(Direction::Debit));
/// assert_eq!(Direction::from_wire_str("sideways"), None);
/// ```
#[macro_export]
macro_rules! closed_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$( $(#[$vmeta])* $variant, )+
		}

		impl $name {
			/// Every permitted wire value
			pub const KNOWN: &'static [&'static str] = &[$($value),+];

			pub fn as_str(&self) -> &'static str {
				match self {
					$( Self::$variant => $value, )+
				}
			}

			pub fn from_wire_str(value: &str) -> ::core::option::Option<Self> {
				match value {
					$( $value => ::core::option::Option::Some(Self::$variant), )+
					_ => ::core::option::Option::None,
				}
			}
		}

		impl ::core::convert::TryFrom<&str> for $name {
			type Error = $crate::CoercionError;

			fn try_from(value: &str) -> ::core::result::Result<Self, Self::Error> {
				Self::from_wire_str(value).ok_or_else(|| {
					$crate::CoercionError::unrecognized(
						&$crate::State::new(),
						stringify!($name),
						value,
					)
				})
			}
		}

		impl ::core::str::FromStr for $name {
			type Err = $crate::CoercionError;

			fn from_str(value: &str) -> ::core::result::Result<Self, Self::Err> {
				Self::try_from(value)
			}
		}

		impl ::core::fmt::Display for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl $crate::WireEnum for $name {
			const NAME: &'static str = stringify!($name);

			fn as_str(&self) -> &str {
				$name::as_str(self)
			}
		}

		impl $crate::Wire for $name {
			fn coerce(
				value: &$crate::WireValue,
				state: &$crate::State,
			) -> ::core::result::Result<Self, $crate::CoercionError> {
				let raw = $crate::enums::expect_str(value, state)?;
				Self::from_wire_str(raw).ok_or_else(|| {
					$crate::CoercionError::unrecognized(state, stringify!($name), raw)
				})
			}

			fn dump(&self, _state: &$crate::State) -> $crate::WireValue {
				$crate::WireValue::String(self.as_str().to_owned())
			}
		}

		impl $crate::QueryValue for $name {
			fn to_query_value(&self) -> ::std::string::String {
				self.as_str().to_owned()
			}
		}

		impl $crate::__private::serde::Serialize for $name {
			fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
			where
				S: $crate::__private::serde::Serializer,
			{
				serializer.serialize_str(self.as_str())
			}
		}

		impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
			where
				D: $crate::__private::serde::Deserializer<'de>,
			{
				let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
					deserializer,
				)?;
				Self::from_wire_str(&raw).ok_or_else(|| {
					<D::Error as $crate::__private::serde::de::Error>::unknown_variant(
						&raw,
						Self::KNOWN,
					)
				})
			}
		}
	};
}
