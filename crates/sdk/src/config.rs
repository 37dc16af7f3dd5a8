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

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Default API base URL (can be overridden by MERIDIAN_BASE_URL)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds (can be overridden by MERIDIAN_TIMEOUT_SECS)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable prefix for client settings
pub const ENV_PREFIX: &str = "MERIDIAN";

/// Client configuration
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
	/// Base URL every resource path is appended to
	#[serde(default = "default_base_url")]
	pub base_url: String,
	/// Bearer token; requests are sent unauthenticated when unset
	#[serde(default)]
	pub api_key: Option<String>,
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
	#[serde(default = "default_user_agent")]
	pub user_agent: String,
}

fn default_base_url() -> String {
	DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
	DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
	format!("meridian-sdk/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: default_base_url(),
			api_key: None,
			timeout_secs: default_timeout_secs(),
			user_agent: default_user_agent(),
		}
	}
}

// The API key never appears in logs.
impl fmt::Debug for ClientConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClientConfig")
			.field("base_url", &self.base_url)
			.field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
			.field("timeout_secs", &self.timeout_secs)
			.field("user_agent", &self.user_agent)
			.finish()
	}
}

impl ClientConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			..Default::default()
		}
	}

	pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
		self.api_key = Some(api_key.into());
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout_secs = timeout.as_secs();
		self
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	/// Load configuration from environment variables
	pub fn from_env() -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::Environment::with_prefix(ENV_PREFIX))
			.build()?;

		cfg.try_deserialize()
	}

	/// Load configuration from file, with environment variables taking precedence
	pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix(ENV_PREFIX))
			.build()?;

		cfg.try_deserialize()
	}

	/// Absolute URL for a path such as `/accounts/account_123`
	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url.trim_end_matches('/'), path)
	}
}
