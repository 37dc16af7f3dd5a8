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

//! Meridian SDK - typed client for the banking API
//!
//! This crate provides the request and response models for accounts,
//! transfers, cards, disputes, entities, and bookkeeping, plus an HTTP client
//! that sends them.
//!
//! The SDK is designed to be lightweight and embeddable:
//! - No background threads
//! - No retries; each call is one request
//! - Configuration is only read from the environment when asked to

pub mod client;
pub mod config;
pub mod types;

pub use client::{Client, ClientError, IDEMPOTENCY_KEY_HEADER, SyncClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use meridian_core::{CoercionError, Record, ToQuery, WireValue};
pub use types::*;
