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

use meridian_core::{
	CoercionError, PathError, Record, ToQuery, WireValue, expand_path, path_segment,
};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
	config::ClientConfig,
	types::{ApiError, BalanceLookup, Creatable, Listable, Page, Resource, Updatable},
};

/// Header carrying the key that makes a create request safe to retry
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

const BALANCE_PATH: &str = "/accounts/{account_id}/balance";
const ACTION_PATH: &str = "{path}/{id}/{action}";

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Decode error: {0}")]
	Decode(#[from] CoercionError),
	#[error("Serialization error: {0}")]
	Serialization(String),
	#[error("API error: {0}")]
	Api(ApiError),
	#[error("Server error: {status}: {body}")]
	Server { status: u16, body: String },
	#[error("Invalid path: {0}")]
	InvalidPath(#[from] PathError),
	#[error("Configuration error: {0}")]
	Config(String),
	#[error("Runtime error: {0}")]
	Runtime(String),
}

/// Async client for the banking API
///
/// Every call is a single request: no retries, no background work.
#[derive(Debug, Clone)]
pub struct Client {
	config: ClientConfig,
	http: ReqwestClient,
}

impl Client {
	pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
		let http = ReqwestClient::builder()
			.timeout(config.timeout())
			.user_agent(config.user_agent.clone())
			.build()
			.map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

		Ok(Self { config, http })
	}

	/// Create a client from `MERIDIAN_*` environment variables
	pub fn from_env() -> Result<Self, ClientError> {
		let config = ClientConfig::from_env()
			.map_err(|e| ClientError::Config(format!("Failed to load configuration: {}", e)))?;
		Self::new(config)
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Retrieve a resource by id
	pub async fn retrieve<R: Resource>(&self, id: &str) -> Result<R, ClientError> {
		let path = format!("{}/{}", R::PATH, path_segment(id));
		let value = self.send(self.request(Method::GET, &path), &path).await?;
		Ok(R::from_wire(&value)?)
	}

	/// List one page of resources
	pub async fn list<R: Listable>(&self, params: &R::ListParams) -> Result<Page<R>, ClientError> {
		let query = params.to_query_string();
		let path = if query.is_empty() {
			R::PATH.to_string()
		} else {
			format!("{}?{}", R::PATH, query)
		};
		let value = self.send(self.request(Method::GET, &path), &path).await?;
		Ok(Page::from_wire(&value)?)
	}

	/// Create a resource under a fresh idempotency key
	pub async fn create<R: Creatable>(&self, params: &R::CreateParams) -> Result<R, ClientError> {
		let key = Uuid::new_v4().to_string();
		self.create_idempotent(params, &key).await
	}

	/// Create a resource, reusing `idempotency_key` across retries
	pub async fn create_idempotent<R: Creatable>(
		&self,
		params: &R::CreateParams,
		idempotency_key: &str,
	) -> Result<R, ClientError> {
		let builder = self
			.request(Method::POST, R::PATH)
			.header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
			.json(&params.to_wire());
		let value = self.send(builder, R::PATH).await?;
		Ok(R::from_wire(&value)?)
	}

	pub async fn update<R: Updatable>(
		&self,
		id: &str,
		params: &R::UpdateParams,
	) -> Result<R, ClientError> {
		let path = format!("{}/{}", R::PATH, path_segment(id));
		let builder = self.request(Method::PATCH, &path).json(&params.to_wire());
		let value = self.send(builder, &path).await?;
		Ok(R::from_wire(&value)?)
	}

	/// Trigger a state transition such as `approve` or `cancel`
	pub async fn action<R: Resource>(&self, id: &str, action: &str) -> Result<R, ClientError> {
		let path = action_path::<R>(id, action)?;
		let value = self.send(self.request(Method::POST, &path), &path).await?;
		Ok(R::from_wire(&value)?)
	}

	/// Trigger an action that takes a request body, such as cloning a
	/// physical card profile
	pub async fn action_with<R: Resource, P: Record>(
		&self,
		id: &str,
		action: &str,
		params: &P,
	) -> Result<R, ClientError> {
		let path = action_path::<R>(id, action)?;
		let builder = self.request(Method::POST, &path).json(&params.to_wire());
		let value = self.send(builder, &path).await?;
		Ok(R::from_wire(&value)?)
	}

	pub async fn account_balance(&self, account_id: &str) -> Result<BalanceLookup, ClientError> {
		let path = expand_path(BALANCE_PATH, &[("account_id", account_id)])?;
		let value = self.send(self.request(Method::GET, &path), &path).await?;
		Ok(BalanceLookup::from_wire(&value)?)
	}

	/// Check API health
	pub async fn health_check(&self) -> Result<bool, ClientError> {
		let response = self
			.request(Method::GET, "/health")
			.send()
			.await
			.map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;

		Ok(response.status().is_success())
	}

	fn request(&self, method: Method, path: &str) -> RequestBuilder {
		let builder = self.http.request(method, self.config.url(path));
		match &self.config.api_key {
			Some(api_key) => builder.bearer_auth(api_key),
			None => builder,
		}
	}

	async fn send(&self, builder: RequestBuilder, path: &str) -> Result<WireValue, ClientError> {
		let request = builder
			.build()
			.map_err(|e| ClientError::Network(format!("Invalid request: {}", e)))?;
		let method = request.method().clone();
		debug!(method = %method, path, "Sending request");

		let response = self
			.http
			.execute(request)
			.await
			.map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;
		let status = response.status();
		let body = response
			.text()
			.await
			.map_err(|e| ClientError::Network(format!("Failed to read response: {}", e)))?;

		if !status.is_success() {
			warn!(method = %method, path, status = status.as_u16(), "Request failed");
			return Err(error_from_body(status.as_u16(), body));
		}

		serde_json::from_str(&body)
			.map_err(|e| ClientError::Serialization(format!("Failed to parse response: {}", e)))
	}
}

/// Map a non-success response body to `Api` when it is an error object
fn action_path<R: Resource>(id: &str, action: &str) -> Result<String, PathError> {
	let template = ACTION_PATH.replacen("{path}", R::PATH, 1);
	expand_path(&template, &[("id", id), ("action", action)])
}

fn error_from_body(status: u16, body: String) -> ClientError {
	serde_json::from_str::<WireValue>(&body)
		.ok()
		.and_then(|value| ApiError::from_wire(&value).ok())
		.map_or(ClientError::Server { status, body }, ClientError::Api)
}

/// Blocking wrapper around [`Client`]
///
/// Owns a tokio runtime and blocks on each call. Do not use from inside an
/// async context.
pub struct SyncClient {
	client: Client,
	runtime: tokio::runtime::Runtime,
}

impl SyncClient {
	pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
		let runtime = tokio::runtime::Runtime::new()
			.map_err(|e| ClientError::Runtime(format!("Failed to create tokio runtime: {}", e)))?;
		Ok(Self {
			client: Client::new(config)?,
			runtime,
		})
	}

	pub fn from_env() -> Result<Self, ClientError> {
		let config = ClientConfig::from_env()
			.map_err(|e| ClientError::Config(format!("Failed to load configuration: {}", e)))?;
		Self::new(config)
	}

	pub fn client(&self) -> &Client {
		&self.client
	}

	pub fn retrieve<R: Resource>(&self, id: &str) -> Result<R, ClientError> {
		self.runtime.block_on(self.client.retrieve(id))
	}

	pub fn list<R: Listable>(&self, params: &R::ListParams) -> Result<Page<R>, ClientError> {
		self.runtime.block_on(self.client.list(params))
	}

	pub fn create<R: Creatable>(&self, params: &R::CreateParams) -> Result<R, ClientError> {
		self.runtime.block_on(self.client.create(params))
	}

	pub fn create_idempotent<R: Creatable>(
		&self,
		params: &R::CreateParams,
		idempotency_key: &str,
	) -> Result<R, ClientError> {
		self.runtime
			.block_on(self.client.create_idempotent(params, idempotency_key))
	}

	pub fn update<R: Updatable>(&self, id: &str, params: &R::UpdateParams) -> Result<R, ClientError> {
		self.runtime.block_on(self.client.update(id, params))
	}

	pub fn action<R: Resource>(&self, id: &str, action: &str) -> Result<R, ClientError> {
		self.runtime.block_on(self.client.action(id, action))
	}

	pub fn action_with<R: Resource, P: Record>(
		&self,
		id: &str,
		action: &str,
		params: &P,
	) -> Result<R, ClientError> {
		self.runtime.block_on(self.client.action_with(id, action, params))
	}

	pub fn account_balance(&self, account_id: &str) -> Result<BalanceLookup, ClientError> {
		self.runtime.block_on(self.client.account_balance(account_id))
	}

	pub fn health_check(&self) -> Result<bool, ClientError> {
		self.runtime.block_on(self.client.health_check())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::ApiErrorType;

	#[test]
	fn test_client_creation() {
		let client = Client::new(ClientConfig::new("http://localhost:8080")).unwrap();
		assert_eq!(client.config().base_url, "http://localhost:8080");
	}

	#[test]
	fn test_sync_client_creation() {
		let client = SyncClient::new(ClientConfig::default());
		assert!(client.is_ok());
	}

	#[test]
	fn test_error_body_maps_to_api_error() {
		let body = r#"{"detail":null,"status":404,"title":"Not found","type":"not_found_error"}"#;
		match error_from_body(404, body.to_string()) {
			ClientError::Api(err) => assert_eq!(err.error_type, ApiErrorType::NotFoundError),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn test_unparseable_error_body_keeps_status() {
		match error_from_body(502, "<html>Bad Gateway</html>".to_string()) {
			ClientError::Server { status, body } => {
				assert_eq!(status, 502);
				assert_eq!(body, "<html>Bad Gateway</html>");
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn test_action_path_is_encoded() {
		let path = action_path::<crate::types::AchTransfer>("ach transfer", "approve").unwrap();
		assert_eq!(path, "/ach_transfers/ach%20transfer/approve");
	}
}
