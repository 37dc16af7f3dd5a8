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

/// One step of a decoding path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
	/// Record field, rendered as `.name`
	Field(&'static str),
	/// Sequence position, rendered as `[3]`
	Index(usize),
	/// Mapping key, rendered as `["key"]`
	Key(String),
}

/// Decoding trace
///
/// Tracks where in a wire value a converter is working so that errors can
/// name the exact field. A state is never modified after creation: descending
/// into a field, index, or key returns a new state and leaves the parent as it
/// was, so siblings can be decoded from the same parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
	segments: Vec<PathSegment>,
}

impl State {
	/// Create an empty trace (rendered as `$`)
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a trace rooted at a named value, e.g. the record being decoded
	pub fn root(name: &'static str) -> Self {
		Self {
			segments: vec![PathSegment::Field(name)],
		}
	}

	/// Descend into a record field
	pub fn field(&self, name: &'static str) -> Self {
		self.push(PathSegment::Field(name))
	}

	/// Descend into a sequence element
	pub fn index(&self, index: usize) -> Self {
		self.push(PathSegment::Index(index))
	}

	/// Descend into a mapping entry
	pub fn key(&self, key: &str) -> Self {
		self.push(PathSegment::Key(key.to_owned()))
	}

	pub fn segments(&self) -> &[PathSegment] {
		&self.segments
	}

	pub fn depth(&self) -> usize {
		self.segments.len()
	}

	/// Render the dotted/bracketed path
	pub fn path(&self) -> String {
		self.to_string()
	}

	fn push(&self, segment: PathSegment) -> Self {
		let mut segments = Vec::with_capacity(self.segments.len() + 1);
		segments.extend_from_slice(&self.segments);
		segments.push(segment);
		Self { segments }
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.segments.is_empty() {
			return f.write_str("$");
		}
		for (position, segment) in self.segments.iter().enumerate() {
			match segment {
				PathSegment::Field(name) if position == 0 => f.write_str(name)?,
				PathSegment::Field(name) => write!(f, ".{}", name)?,
				PathSegment::Index(index) => write!(f, "[{}]", index)?,
				PathSegment::Key(key) => write!(f, "[{:?}]", key)?,
			}
		}
		Ok(())
	}
}
