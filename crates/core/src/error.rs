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

use std::fmt;

use thiserror::Error;

use crate::{converter::WireValue, state::State};

/// Structural kind of a wire value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireKind {
	Null,
	Boolean,
	Integer,
	Number,
	String,
	Sequence,
	Mapping,
}

impl WireKind {
	/// Classify a wire value
	pub fn of(value: &WireValue) -> Self {
		match value {
			WireValue::Null => Self::Null,
			WireValue::Bool(_) => Self::Boolean,
			WireValue::Number(number) if number.is_i64() => Self::Integer,
			WireValue::Number(_) => Self::Number,
			WireValue::String(_) => Self::String,
			WireValue::Array(_) => Self::Sequence,
			WireValue::Object(_) => Self::Mapping,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Boolean => "boolean",
			Self::Integer => "integer",
			Self::Number => "number",
			Self::String => "string",
			Self::Sequence => "sequence",
			Self::Mapping => "mapping",
		}
	}
}

impl fmt::Display for WireKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error types for coercing wire values into typed values
///
/// Every variant carries the rendered path of the offending field, taken from
/// the decoding `State` at the point of failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
	#[error("{path}: expected {expected}, found {actual}")]
	ShapeMismatch {
		path: String,
		expected: WireKind,
		actual: WireKind,
	},
	#[error("{path}: missing required field `{field}`")]
	MissingRequiredField { path: String, field: &'static str },
	#[error("{path}: unrecognized {type_name} value `{value}`")]
	UnrecognizedEnumValue {
		path: String,
		type_name: &'static str,
		value: String,
	},
	#[error("{path}: invalid {expected} `{value}`")]
	InvalidFormat {
		path: String,
		expected: &'static str,
		value: String,
	},
	#[error("invalid {record}: {source}")]
	Nested {
		record: &'static str,
		source: Box<CoercionError>,
	},
}

impl CoercionError {
	pub fn shape(state: &State, expected: WireKind, actual: &WireValue) -> Self {
		Self::ShapeMismatch {
			path: state.path(),
			expected,
			actual: WireKind::of(actual),
		}
	}

	pub fn missing(state: &State, field: &'static str) -> Self {
		Self::MissingRequiredField {
			path: state.path(),
			field,
		}
	}

	pub fn unrecognized(state: &State, type_name: &'static str, value: &str) -> Self {
		Self::UnrecognizedEnumValue {
			path: state.path(),
			type_name,
			value: value.to_owned(),
		}
	}

	pub fn invalid_format(state: &State, expected: &'static str, value: &str) -> Self {
		Self::InvalidFormat {
			path: state.path(),
			expected,
			value: value.to_owned(),
		}
	}

	/// Wrap a failure raised while decoding the named record
	pub fn nested(record: &'static str, source: CoercionError) -> Self {
		Self::Nested {
			record,
			source: Box::new(source),
		}
	}

	/// Full path of the field that failed
	pub fn path(&self) -> &str {
		match self {
			Self::ShapeMismatch { path, .. }
			| Self::MissingRequiredField { path, .. }
			| Self::UnrecognizedEnumValue { path, .. }
			| Self::InvalidFormat { path, .. } => path,
			Self::Nested { source, .. } => source.path(),
		}
	}

	/// Innermost error, with any `Nested` wrappers removed
	pub fn root_cause(&self) -> &CoercionError {
		match self {
			Self::Nested { source, .. } => source.root_cause(),
			other => other,
		}
	}
}
