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

//! Query-string and path rendering for outbound requests

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use thiserror::Error;

/// Error types for path templating
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
	#[error("No value bound for path placeholder `{0}`")]
	UnboundPlaceholder(String),
	#[error("Unterminated placeholder in path template: {0}")]
	Unterminated(String),
}

/// Scalar that can be rendered as a query-string value
pub trait QueryValue {
	fn to_query_value(&self) -> String;
}

impl QueryValue for str {
	fn to_query_value(&self) -> String {
		self.to_owned()
	}
}

impl QueryValue for String {
	fn to_query_value(&self) -> String {
		self.clone()
	}
}

impl QueryValue for i64 {
	fn to_query_value(&self) -> String {
		self.to_string()
	}
}

impl QueryValue for u32 {
	fn to_query_value(&self) -> String {
		self.to_string()
	}
}

impl QueryValue for bool {
	fn to_query_value(&self) -> String {
		self.to_string()
	}
}

impl QueryValue for DateTime<Utc> {
	fn to_query_value(&self) -> String {
		self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
	}
}

impl QueryValue for NaiveDate {
	fn to_query_value(&self) -> String {
		self.format("%Y-%m-%d").to_string()
	}
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
	fn to_query_value(&self) -> String {
		(**self).to_query_value()
	}
}

/// Accumulates query parameters in insertion order
///
/// Nested parameter groups are flattened into dotted keys, so a
/// `created_at` group with an `after` bound renders as `created_at.after`.
#[derive(Debug, Clone, Default)]
pub struct QueryWriter {
	prefix: Option<String>,
	pairs: Vec<(String, String)>,
}

impl QueryWriter {
	pub fn new() -> Self {
		Self::default()
	}

	fn full_key(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}.{}", prefix, key),
			None => key.to_owned(),
		}
	}

	pub fn push<V: QueryValue + ?Sized>(&mut self, key: &str, value: &V) -> &mut Self {
		let key = self.full_key(key);
		self.pairs.push((key, value.to_query_value()));
		self
	}

	/// Push the value if present
	pub fn push_opt<V: QueryValue>(&mut self, key: &str, value: Option<&V>) -> &mut Self {
		if let Some(value) = value {
			self.push(key, value);
		}
		self
	}

	/// Push a comma-separated list; an empty list is skipped
	pub fn push_list<V: QueryValue>(&mut self, key: &str, values: &[V]) -> &mut Self {
		if values.is_empty() {
			return self;
		}
		let joined = values
			.iter()
			.map(QueryValue::to_query_value)
			.collect::<Vec<_>>()
			.join(",");
		let key = self.full_key(key);
		self.pairs.push((key, joined));
		self
	}

	/// Write a nested parameter group under `prefix`
	pub fn nested<F>(&mut self, prefix: &str, write: F) -> &mut Self
	where
		F: FnOnce(&mut QueryWriter),
	{
		let mut inner = QueryWriter {
			prefix: Some(self.full_key(prefix)),
			pairs: Vec::new(),
		};
		write(&mut inner);
		self.pairs.append(&mut inner.pairs);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	pub fn finish(self) -> Vec<(String, String)> {
		self.pairs
	}
}

/// A parameter set rendered into the query string
pub trait ToQuery {
	fn write_query(&self, query: &mut QueryWriter);

	fn to_query(&self) -> Vec<(String, String)> {
		let mut query = QueryWriter::new();
		self.write_query(&mut query);
		query.finish()
	}

	/// Percent-encoded `key=value&...` form, without a leading `?`
	fn to_query_string(&self) -> String {
		self.to_query()
			.iter()
			.map(|(key, value)| {
				format!(
					"{}={}",
					urlencoding::encode(key),
					urlencoding::encode(value)
				)
			})
			.collect::<Vec<_>>()
			.join("&")
	}
}

/// Percent-encode a value for use as a single path segment
pub fn path_segment(value: &str) -> String {
	urlencoding::encode(value).into_owned()
}

/// Substitute `{name}` placeholders in a path template
///
/// Bound values are percent-encoded as path segments. Every placeholder must
/// have a binding.
pub fn expand_path(template: &str, bindings: &[(&str, &str)]) -> Result<String, PathError> {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		let close = after
			.find('}')
			.ok_or_else(|| PathError::Unterminated(template.to_owned()))?;
		let name = &after[..close];
		let value = bindings
			.iter()
			.find(|(key, _)| *key == name)
			.map(|(_, value)| *value)
			.ok_or_else(|| PathError::UnboundPlaceholder(name.to_owned()))?;
		out.push_str(&path_segment(value));
		rest = &after[close + 1..];
	}
	out.push_str(rest);

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Filter {
		cursor: Option<String>,
		limit: Option<i64>,
		statuses: Vec<String>,
		after: Option<DateTime<Utc>>,
	}

	impl ToQuery for Filter {
		fn write_query(&self, query: &mut QueryWriter) {
			query
				.push_opt("cursor", self.cursor.as_ref())
				.push_opt("limit", self.limit.as_ref());
			query.nested("status", |status| {
				status.push_list("in", &self.statuses);
			});
			query.nested("created_at", |created_at| {
				created_at.push_opt("after", self.after.as_ref());
			});
		}
	}

	#[test]
	fn test_query_flattens_nested_groups() {
		let filter = Filter {
			cursor: None,
			limit: Some(10),
			statuses: vec!["pending".to_string(), "returned".to_string()],
			after: Some(
				DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
					.unwrap()
					.with_timezone(&Utc),
			),
		};

		assert_eq!(
			filter.to_query(),
			vec![
				("limit".to_string(), "10".to_string()),
				("status.in".to_string(), "pending,returned".to_string()),
				(
					"created_at.after".to_string(),
					"2024-01-01T00:00:00Z".to_string()
				),
			]
		);
		assert_eq!(
			filter.to_query_string(),
			"limit=10&status.in=pending%2Creturned&created_at.after=2024-01-01T00%3A00%3A00Z"
		);
	}

	#[test]
	fn test_empty_filter_renders_nothing() {
		let filter = Filter {
			cursor: None,
			limit: None,
			statuses: Vec::new(),
			after: None,
		};
		assert!(filter.to_query().is_empty());
		assert_eq!(filter.to_query_string(), "");
	}

	#[test]
	fn test_expand_path_encodes_segments() {
		let path = expand_path(
			"/accounts/{account_id}/balance",
			&[("account_id", "account in/out")],
		)
		.unwrap();
		assert_eq!(path, "/accounts/account%20in%2Fout/balance");
	}

	#[test]
	fn test_expand_path_requires_bindings() {
		assert_eq!(
			expand_path("/ach_transfers/{id}/approve", &[]),
			Err(PathError::UnboundPlaceholder("id".to_string()))
		);
		assert!(matches!(
			expand_path("/cards/{id", &[("id", "card_1")]),
			Err(PathError::Unterminated(_))
		));
	}

	#[test]
	fn test_nested_prefixes_compose() {
		let mut query = QueryWriter::new();
		query.nested("a", |a| {
			a.nested("b", |b| {
				b.push("c", "d");
			});
		});
		assert_eq!(query.finish(), vec![("a.b.c".to_string(), "d".to_string())]);
	}
}
