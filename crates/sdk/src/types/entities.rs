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

use chrono::{DateTime, NaiveDate, Utc};
use meridian_core::{QueryWriter, ToQuery, closed_enum, open_enum, wire_record};

use super::{
	Creatable, Listable, Resource,
	common::{Address, CreatedAtFilter, write_pagination},
};

open_enum! {
	/// The legal structure of an entity
	pub enum EntityStructure {
		/// A corporation.
		Corporation = "corporation",
		/// An individual person.
		NaturalPerson = "natural_person",
		/// Multiple individual people.
		Joint = "joint",
		/// A trust.
		Trust = "trust",
		/// A government authority.
		GovernmentAuthority = "government_authority",
	}
}

open_enum! {
	pub enum EntityStatus {
		/// The entity is active.
		Active = "active",
		/// The entity is archived, and can no longer be used to create accounts.
		Archived = "archived",
		/// The entity is temporarily disabled.
		Disabled = "disabled",
	}
}

open_enum! {
	/// Kind of identity document on file for a person
	pub enum IdentificationMethod {
		/// A social security number.
		SocialSecurityNumber = "social_security_number",
		/// An individual taxpayer identification number.
		IndividualTaxpayerIdentificationNumber = "individual_taxpayer_identification_number",
		/// A passport number.
		Passport = "passport",
		/// A driver's license number.
		DriversLicense = "drivers_license",
		/// Another identifying document.
		Other = "other",
	}
}

open_enum! {
	/// Why a person counts as a beneficial owner
	pub enum BeneficialOwnerProng {
		/// A person with 25% or greater direct or indirect ownership of the entity.
		Ownership = "ownership",
		/// A person who manages, directs, or has significant control of the entity.
		Control = "control",
	}
}

closed_enum! {
	pub enum EntityType {
		Entity = "entity",
	}
}

wire_record! {
	/// An identity document, with only the last four digits exposed
	pub struct Identification as "identification" {
		required {
			method: IdentificationMethod = "method",
			number_last4: String = "number_last4",
		}
		optional {}
	}
}

wire_record! {
	pub struct NaturalPerson as "natural_person" {
		required {
			address: Address = "address",
			date_of_birth: NaiveDate = "date_of_birth",
			identification: Identification = "identification",
			name: String = "name",
		}
		optional {}
	}
}

wire_record! {
	pub struct BeneficialOwner as "beneficial_owner" {
		required {
			individual: NaturalPerson = "individual",
			prongs: Vec<BeneficialOwnerProng> = "prongs",
		}
		optional {
			beneficial_owner_id: String = "beneficial_owner_id",
			company_title: String = "company_title",
		}
	}
}

wire_record! {
	pub struct Corporation as "corporation" {
		required {
			address: Address = "address",
			beneficial_owners: Vec<BeneficialOwner> = "beneficial_owners",
			name: String = "name",
		}
		optional {
			/// Two-letter US state code of the state of incorporation.
			incorporation_state: String = "incorporation_state",
			industry_code: String = "industry_code",
			tax_identifier: String = "tax_identifier",
			website: String = "website",
		}
	}
}

wire_record! {
	/// A legal person or organization that owns accounts
	///
	/// Exactly one of the structure-specific records is present, matching
	/// `structure`.
	pub struct Entity as "entity" {
		required {
			id: String = "id",
			created_at: DateTime<Utc> = "created_at",
			status: EntityStatus = "status",
			structure: EntityStructure = "structure",
			object_type: EntityType = "type",
		}
		optional {
			corporation: Corporation = "corporation",
			description: String = "description",
			idempotency_key: String = "idempotency_key",
			joint: Vec<NaturalPerson> = "joint",
			natural_person: NaturalPerson = "natural_person",
		}
	}
}

wire_record! {
	pub struct EntityCreateParams as "entity_create_params" {
		required {
			structure: EntityStructure = "structure",
		}
		optional {
			corporation: Corporation = "corporation",
			description: String = "description",
			natural_person: NaturalPerson = "natural_person",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityListParams {
	pub cursor: Option<String>,
	pub limit: Option<i64>,
	pub idempotency_key: Option<String>,
	pub status: Vec<EntityStatus>,
	pub created_at: Option<CreatedAtFilter>,
}

impl ToQuery for EntityListParams {
	fn write_query(&self, query: &mut QueryWriter) {
		write_pagination(query, self.cursor.as_ref(), self.limit.as_ref());
		query
			.push_opt("idempotency_key", self.idempotency_key.as_ref())
			.nested("status", |status| {
				status.push_list("in", &self.status);
			});
		if let Some(created_at) = &self.created_at {
			created_at.write_query(query);
		}
	}
}

impl Resource for Entity {
	const PATH: &'static str = "/entities";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Creatable for Entity {
	type CreateParams = EntityCreateParams;
}

impl Listable for Entity {
	type ListParams = EntityListParams;
}

#[cfg(test)]
mod tests {
	use super::*;
	use meridian_core::{CoercionError, Record};
	use serde_json::json;

	fn owner_wire(date_of_birth: &str) -> serde_json::Value {
		json!({
			"beneficial_owner_id": "entity_beneficial_owner_vozma8szzu1sxezp5zq6",
			"company_title": "CEO",
			"individual": {
				"address": {
					"city": "New York",
					"country": "US",
					"line1": "33 Liberty Street",
					"line2": null,
					"postal_code": "10045",
					"state": "NY"
				},
				"date_of_birth": date_of_birth,
				"identification": {
					"method": "social_security_number",
					"number_last4": "1120"
				},
				"name": "Ian Crease"
			},
			"prongs": ["control", "ownership"]
		})
	}

	#[test]
	fn test_corporation_entity() {
		let wire = json!({
			"id": "entity_n8y8tnk2p9339ti393yi",
			"corporation": {
				"address": {
					"city": "New York",
					"country": "US",
					"line1": "33 Liberty Street",
					"postal_code": "10045",
					"state": "NY"
				},
				"beneficial_owners": [owner_wire("1970-01-31")],
				"incorporation_state": "NY",
				"name": "National Phonograph Company",
				"tax_identifier": "602214076",
				"website": "https://example.com"
			},
			"created_at": "2020-01-31T23:59:59Z",
			"description": null,
			"status": "active",
			"structure": "corporation",
			"type": "entity"
		});

		let entity = Entity::from_wire(&wire).unwrap();
		let corporation = entity.corporation.unwrap();
		let owner = &corporation.beneficial_owners[0];

		assert_eq!(entity.structure, EntityStructure::Corporation);
		assert_eq!(
			owner.individual.date_of_birth,
			NaiveDate::from_ymd_opt(1970, 1, 31).unwrap()
		);
		assert_eq!(
			owner.prongs,
			vec![BeneficialOwnerProng::Control, BeneficialOwnerProng::Ownership]
		);
	}

	#[test]
	fn test_bad_birth_date_path() {
		let err = BeneficialOwner::from_wire(&owner_wire("31/01/1970")).unwrap_err();
		assert_eq!(err.path(), "beneficial_owner.individual.date_of_birth");
		assert!(matches!(
			err.root_cause(),
			CoercionError::InvalidFormat { value, .. } if value == "31/01/1970"
		));
	}

	#[test]
	fn test_create_natural_person() {
		let person = NaturalPerson::new(
			Address::new("New York", "33 Liberty Street", "10045").with_state("NY"),
			NaiveDate::from_ymd_opt(1970, 1, 31).unwrap(),
			Identification::new(IdentificationMethod::Passport, "4321"),
			"Ian Crease",
		);
		let params = EntityCreateParams::new(EntityStructure::NaturalPerson).with_natural_person(person);
		let wire = params.to_wire();

		assert_eq!(wire["structure"], json!("natural_person"));
		assert_eq!(wire["natural_person"]["date_of_birth"], json!("1970-01-31"));
		assert_eq!(wire["natural_person"]["identification"]["method"], json!("passport"));
	}
}
