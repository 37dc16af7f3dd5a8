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

use httpmock::{Method::PATCH, prelude::*};
use meridian_sdk::{
	Account, AccountListParams, AccountStatus, AccountUpdateParams, AchTransfer,
	AchTransferCreateParams, AchTransferStatus, ApiErrorType, Client, ClientConfig, ClientError,
	CoercionError, FrontText, IDEMPOTENCY_KEY_HEADER, PhysicalCardProfile,
	PhysicalCardProfileCloneParams, PhysicalCardProfileStatus, RgbColor, SyncClient,
};
use serde_json::{Value, json};

const API_KEY: &str = "secret_example_key";

fn client_for(server: &MockServer) -> Client {
	let config = ClientConfig::new(server.base_url()).with_api_key(API_KEY);
	Client::new(config).unwrap()
}

fn account_json(id: &str, name: &str) -> Value {
	json!({
		"id": id,
		"bank": "first_internet_bank",
		"closed_at": null,
		"created_at": "2020-01-31T23:59:59Z",
		"currency": "USD",
		"entity_id": "entity_n8y8tnk2p9339ti393yi",
		"idempotency_key": null,
		"informational_entity_id": null,
		"interest_accrued": "0.01",
		"interest_rate": "0.055",
		"name": name,
		"program_id": "program_i2v2os4mwza1oetokh9i",
		"status": "open",
		"type": "account"
	})
}

fn ach_transfer_json() -> Value {
	json!({
		"id": "ach_transfer_uoxatyh3lt5evrsdvo7q",
		"account_id": "account_in71c4amph0vgo2qllky",
		"account_number": "987654321",
		"addenda": null,
		"amount": 100,
		"company_descriptive_date": null,
		"company_discretionary_data": null,
		"company_entry_description": null,
		"company_name": "National Phonograph Company",
		"created_at": "2020-01-31T23:59:59Z",
		"currency": "USD",
		"external_account_id": null,
		"funding": "checking",
		"idempotency_key": null,
		"individual_id": null,
		"individual_name": "Ian Crease",
		"network": "ach",
		"pending_transaction_id": null,
		"return": null,
		"routing_number": "101050001",
		"standard_entry_class_code": "corporate_credit_or_debit",
		"statement_descriptor": "Statement descriptor",
		"status": "pending_approval",
		"transaction_id": null,
		"type": "ach_transfer"
	})
}

#[tokio::test]
async fn test_retrieve_sends_bearer_auth() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/accounts/account_in71c4amph0vgo2qllky")
				.header("authorization", format!("Bearer {API_KEY}"));
			then.status(200)
				.json_body(account_json("account_in71c4amph0vgo2qllky", "My first account!"));
		})
		.await;

	let account: Account = client_for(&server)
		.retrieve("account_in71c4amph0vgo2qllky")
		.await
		.unwrap();

	mock.assert_async().await;
	assert_eq!(account.name, "My first account!");
	assert_eq!(account.status, AccountStatus::Open);
	assert_eq!(account.closed_at, None);
}

#[tokio::test]
async fn test_list_renders_query_and_decodes_page() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/accounts")
				.query_param("limit", "2")
				.query_param("entity_id", "entity_n8y8tnk2p9339ti393yi")
				.query_param("status.in", "open,closed");
			then.status(200).json_body(json!({
				"data": [
					account_json("account_1", "Operating"),
					account_json("account_2", "Payroll"),
				],
				"next_cursor": "v57w5d"
			}));
		})
		.await;

	let params = AccountListParams {
		limit: Some(2),
		entity_id: Some("entity_n8y8tnk2p9339ti393yi".to_string()),
		status: vec![AccountStatus::Open, AccountStatus::Closed],
		..Default::default()
	};
	let page = client_for(&server).list::<Account>(&params).await.unwrap();

	mock.assert_async().await;
	assert_eq!(page.len(), 2);
	assert_eq!(page.next_cursor.as_deref(), Some("v57w5d"));
	let names: Vec<&str> = page.iter().map(|account| account.name.as_str()).collect();
	assert_eq!(names, vec!["Operating", "Payroll"]);
}

#[tokio::test]
async fn test_create_sends_body_and_idempotency_key() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/ach_transfers")
				.header("idempotency-key", "create-ach-1")
				.json_body(json!({
					"account_id": "account_in71c4amph0vgo2qllky",
					"amount": 100,
					"statement_descriptor": "Statement descriptor",
					"account_number": "987654321",
					"routing_number": "101050001"
				}));
			then.status(200).json_body(ach_transfer_json());
		})
		.await;

	let params = AchTransferCreateParams::new("account_in71c4amph0vgo2qllky", 100, "Statement descriptor")
		.with_account_number("987654321")
		.with_routing_number("101050001");
	let transfer: AchTransfer = client_for(&server)
		.create_idempotent(&params, "create-ach-1")
		.await
		.unwrap();

	mock.assert_async().await;
	assert_eq!(transfer.status, AchTransferStatus::PendingApproval);
}

#[tokio::test]
async fn test_create_generates_idempotency_key() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/ach_transfers")
				.header_exists("idempotency-key");
			then.status(200).json_body(ach_transfer_json());
		})
		.await;

	let params = AchTransferCreateParams::new("account_in71c4amph0vgo2qllky", 100, "Statement descriptor");
	let transfer = client_for(&server)
		.create::<AchTransfer>(&params)
		.await
		.unwrap();

	mock.assert_async().await;
	assert_eq!(transfer.id, "ach_transfer_uoxatyh3lt5evrsdvo7q");
	assert!(IDEMPOTENCY_KEY_HEADER.eq_ignore_ascii_case("idempotency-key"));
}

#[tokio::test]
async fn test_update_uses_patch() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/accounts/account_1")
				.json_body(json!({"name": "Renamed"}));
			then.status(200).json_body(account_json("account_1", "Renamed"));
		})
		.await;

	let account = client_for(&server)
		.update::<Account>("account_1", &AccountUpdateParams::new().with_name("Renamed"))
		.await
		.unwrap();

	mock.assert_async().await;
	assert_eq!(account.name, "Renamed");
}

#[tokio::test]
async fn test_action_posts_to_action_path() {
	let server = MockServer::start_async().await;
	let mut approved = ach_transfer_json();
	approved["status"] = json!("submitted");
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/ach_transfers/ach_transfer_uoxatyh3lt5evrsdvo7q/approve");
			then.status(200).json_body(approved.clone());
		})
		.await;

	let transfer = client_for(&server)
		.action::<AchTransfer>("ach_transfer_uoxatyh3lt5evrsdvo7q", "approve")
		.await
		.unwrap();

	mock.assert_async().await;
	assert_eq!(transfer.status, AchTransferStatus::Submitted);
}

#[tokio::test]
async fn test_action_with_sends_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/physical_card_profiles/physical_card_profile_m534d5rn9qyy9ufqxoec/clone")
				.json_body(json!({
					"description": "Holiday edition",
					"front_text": {"line1": "Ian Crease"},
					"text_color": {"blue": 0, "green": 0, "red": 255}
				}));
			then.status(200).json_body(json!({
				"id": "physical_card_profile_7vd2tvrfe7ma6hs7ajnu",
				"back_image_file_id": null,
				"carrier_image_file_id": "file_makxrc67oh9l6sg7w9yc",
				"contact_phone": "+16505046304",
				"created_at": "2020-01-31T23:59:59Z",
				"creator": "user",
				"description": "Holiday edition",
				"front_image_file_id": "file_makxrc67oh9l6sg7w9yc",
				"idempotency_key": null,
				"is_default": false,
				"program_id": "program_i2v2os4mwza1oetokh9i",
				"status": "pending_creating",
				"type": "physical_card_profile"
			}));
		})
		.await;

	let params = PhysicalCardProfileCloneParams::new()
		.with_description("Holiday edition")
		.with_front_text(FrontText::new("Ian Crease"))
		.with_text_color(RgbColor::default().with_red(255));
	let profile: PhysicalCardProfile = client_for(&server)
		.action_with("physical_card_profile_m534d5rn9qyy9ufqxoec", "clone", &params)
		.await
		.unwrap();

	mock.assert_async().await;
	assert_eq!(profile.id, "physical_card_profile_7vd2tvrfe7ma6hs7ajnu");
	assert_eq!(profile.status, PhysicalCardProfileStatus::PendingCreating);
}

#[tokio::test]
async fn test_account_balance() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/accounts/account_1/balance");
			then.status(200).json_body(json!({
				"account_id": "account_1",
				"available_balance": 90,
				"current_balance": 100,
				"type": "balance_lookup"
			}));
		})
		.await;

	let balance = client_for(&server).account_balance("account_1").await.unwrap();

	mock.assert_async().await;
	assert_eq!(balance.available_balance, 90);
	assert_eq!(balance.current_balance, 100);
}

#[tokio::test]
async fn test_error_response_maps_to_api_error() {
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/accounts/missing");
			then.status(404).json_body(json!({
				"detail": "No account with id missing",
				"status": 404,
				"title": "Not found",
				"type": "not_found_error"
			}));
		})
		.await;

	let err = client_for(&server)
		.retrieve::<Account>("missing")
		.await
		.unwrap_err();

	match err {
		ClientError::Api(api) => {
			assert_eq!(api.error_type, ApiErrorType::NotFoundError);
			assert_eq!(api.detail.as_deref(), Some("No account with id missing"));
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn test_non_json_error_maps_to_server_error() {
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/accounts/account_1");
			then.status(503).body("upstream unavailable");
		})
		.await;

	let err = client_for(&server)
		.retrieve::<Account>("account_1")
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		ClientError::Server { status: 503, ref body } if body == "upstream unavailable"
	));
}

#[tokio::test]
async fn test_malformed_resource_is_decode_error() {
	let server = MockServer::start_async().await;
	let mut account = account_json("account_1", "Operating");
	account["type"] = json!("card");
	server
		.mock_async(|when, then| {
			when.method(GET).path("/accounts/account_1");
			then.status(200).json_body(account.clone());
		})
		.await;

	let err = client_for(&server)
		.retrieve::<Account>("account_1")
		.await
		.unwrap_err();

	match err {
		ClientError::Decode(decode) => {
			assert_eq!(decode.path(), "account.type");
			assert!(matches!(
				decode.root_cause(),
				CoercionError::UnrecognizedEnumValue { .. }
			));
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn test_health_check() {
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/health");
			then.status(200);
		})
		.await;

	assert!(client_for(&server).health_check().await.unwrap());
}

#[test]
fn test_sync_client_retrieve() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path("/accounts/account_1");
		then.status(200).json_body(account_json("account_1", "Operating"));
	});

	let client = SyncClient::new(ClientConfig::new(server.base_url())).unwrap();
	let account: Account = client.retrieve("account_1").unwrap();

	mock.assert();
	assert_eq!(account.id, "account_1");
}
