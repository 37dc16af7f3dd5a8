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

//! Meridian Core - typed conversion between wire values and models
//!
//! This crate holds the machinery every Meridian model is built from:
//! - `Wire` / `Converter`: coerce untyped JSON values into typed values and dump them back
//! - `ListOf` / `MapOf`: container adapters parametrized by an element converter
//! - `open_enum!` / `closed_enum!`: string-backed enumerations
//! - `wire_record!`: records driven by a static table of field descriptors
//! - `QueryWriter` / `expand_path`: query-string and path rendering for requests
//!
//! Everything here is pure and synchronous; there is no I/O.

pub mod converter;
pub mod enums;
pub mod error;
pub mod query;
pub mod record;
pub mod state;

pub use converter::{Converter, ListOf, MapOf, Native, Wire, WireValue};
pub use enums::WireEnum;
pub use error::{CoercionError, WireKind};
pub use query::{PathError, QueryValue, QueryWriter, ToQuery, expand_path, path_segment};
pub use record::{FieldSpec, Record, RecordBuilder, decode_record, encode_record};
pub use state::{PathSegment, State};

pub use indexmap::IndexMap;

#[doc(hidden)]
pub mod __private {
	pub use paste::paste;
	pub use serde;
}
