//! Property-based tests for the converter contracts.

use chrono::{TimeZone, Utc};
use contact_converter::domain::model::{Address, Audit, Person, PersonDto};
use contact_converter::{ContactConverter, ConvertError, Converter, ListConverter, Result};
use proptest::prelude::*;

fn address_strategy() -> impl Strategy<Value = Address> {
    (
        prop::option::of(1..10_000i32),
        "[A-Za-z0-9 ]{0,30}",
        "[A-Za-z ]{0,20}",
        prop::option::of("[A-Z]{2}"),
        "[0-9]{5}",
        "[A-Za-z]{0,12}",
    )
        .prop_map(|(id, address, city, state, zip_postal, country)| Address {
            id,
            address,
            city,
            state,
            zip_postal,
            country,
        })
}

fn audit_strategy() -> impl Strategy<Value = Audit> {
    (
        prop::option::of("[a-z]{1,10}"),
        prop::option::of(0..2_000_000_000i64),
    )
        .prop_map(|(user, seconds)| {
            let timestamp = seconds.and_then(|s| Utc.timestamp_opt(s, 0).single());
            Audit {
                created_by: user.clone(),
                created: timestamp,
                last_modified_by: user,
                last_modified: timestamp,
            }
        })
}

/// Persisted people: ids, when present, are valid primary keys.
fn person_strategy() -> impl Strategy<Value = Person> {
    (
        prop::option::of(1..i32::MAX),
        any::<String>(),
        any::<String>(),
        0..1_000i32,
        audit_strategy(),
        prop::collection::vec(address_strategy(), 0..4),
    )
        .prop_map(
            |(id, first_name, last_name, lock_version, audit, addresses)| Person {
                id,
                first_name,
                last_name,
                lock_version,
                audit,
                addresses,
            },
        )
}

/// Property: converting to the transfer model and back keeps every field
/// except the audit columns.
#[test]
fn prop_round_trip_preserves_non_audit_fields() {
    let converter = ContactConverter::new();

    proptest!(|(person in person_strategy())| {
        let back = converter.convert_from(&converter.convert_to(&person).unwrap()).unwrap();

        prop_assert_eq!(back.id, person.id);
        prop_assert_eq!(&back.first_name, &person.first_name);
        prop_assert_eq!(&back.last_name, &person.last_name);
        prop_assert_eq!(back.lock_version, person.lock_version);
        prop_assert_eq!(&back.addresses, &person.addresses);
        prop_assert_eq!(back.audit, Audit::default());
    });
}

/// Property: transfer objects without server-managed fields survive
/// `convert_to(convert_from(v))` unchanged.
#[test]
fn prop_transfer_round_trip_without_audit_is_identity() {
    let converter = ContactConverter::new();

    proptest!(|(person in person_strategy())| {
        let mut dto = converter.convert_to(&person).unwrap();
        dto.create_user = None;
        dto.created = None;
        dto.last_update_user = None;
        dto.last_updated = None;

        let again = converter.convert_to(&converter.convert_from(&dto).unwrap()).unwrap();
        prop_assert_eq!(again, dto);
    });
}

/// Property: list conversion keeps length and order and matches
/// element-wise conversion.
#[test]
fn prop_list_conversion_is_element_wise() {
    let converter = ContactConverter::new();

    proptest!(|(people in prop::collection::vec(person_strategy(), 0..20))| {
        let converted = converter.convert_list_to(&people).unwrap();

        prop_assert_eq!(converted.len(), people.len());
        for (dto, person) in converted.iter().zip(&people) {
            prop_assert_eq!(dto, &converter.convert_to(person).unwrap());
        }
    });
}

#[test]
fn test_empty_list_converts_to_empty_list() {
    let converter = ContactConverter::new();

    assert!(converter.convert_list_to(&[]).unwrap().is_empty());
    assert!(converter.convert_list_from(&[]).unwrap().is_empty());
}

/// Rejects people without a last name.
struct StrictConverter;

impl Converter for StrictConverter {
    type Domain = Person;
    type Transfer = PersonDto;

    fn convert_to(&self, source: &Person) -> Result<PersonDto> {
        if source.last_name.is_empty() {
            return Err(ConvertError::conversion("Person", "last name is required"));
        }
        ContactConverter::new().convert_to(source)
    }

    fn convert_from(&self, source: &PersonDto) -> Result<Person> {
        ContactConverter::new().convert_from(source)
    }
}

#[test]
fn test_batch_fails_as_a_whole_on_first_bad_element() {
    let people = vec![
        Person {
            last_name: "Smith".to_string(),
            ..Default::default()
        },
        Person::default(),
        Person {
            last_name: "Jones".to_string(),
            ..Default::default()
        },
    ];

    let result = StrictConverter.convert_list_to(&people);

    match result {
        Err(ConvertError::ConversionFailure { entity, message }) => {
            assert_eq!(entity, "Person");
            assert_eq!(message, "last name is required");
        }
        other => panic!("expected a conversion failure, got {:?}", other),
    }
}
