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

use meridian_core::{open_enum, wire_record};

open_enum! {
	/// Category of an API error response
	pub enum ApiErrorType {
		InvalidParametersError = "invalid_parameters_error",
		MalformedRequestError = "malformed_request_error",
		InvalidApiKeyError = "invalid_api_key_error",
		InsufficientPermissionsError = "insufficient_permissions_error",
		NotFoundError = "not_found_error",
		InvalidOperationError = "invalid_operation_error",
		/// The `Idempotency-Key` was already used with a different request body.
		IdempotencyKeyAlreadyUsedError = "idempotency_key_already_used_error",
		/// Too many requests; see `retry_after`.
		RateLimitedError = "rate_limited_error",
		ObjectNotFoundError = "object_not_found_error",
		PrivateFeatureError = "private_feature_error",
		InternalServerError = "internal_server_error",
	}
}

wire_record! {
	/// Body of a non-success API response
	pub struct ApiError as "error" {
		required {
			error_type: ApiErrorType = "type",
			status: i64 = "status",
			title: String = "title",
		}
		optional {
			detail: String = "detail",
			/// Seconds to wait before retrying, set on rate-limited responses.
			retry_after: i64 = "retry_after",
		}
	}
}

impl ApiError {
	/// Whether the same request may succeed if sent again later
	pub fn is_retryable(&self) -> bool {
		matches!(
			self.error_type,
			ApiErrorType::RateLimitedError | ApiErrorType::InternalServerError
		)
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({}): {}", self.error_type, self.status, self.title)?;
		if let Some(detail) = &self.detail {
			write!(f, " - {detail}")?;
		}
		Ok(())
	}
}

impl std::error::Error for ApiError {}
