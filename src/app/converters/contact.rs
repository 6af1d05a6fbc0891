use crate::app::converters::address::AddressConverter;
use crate::domain::model::{is_primary_key_valid, Audit, Person, PersonDto};
use crate::domain::ports::{Converter, ListConverter};
use crate::utils::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};

/// Full person mapping, addresses included.
///
/// Audit columns go out as RFC 3339 strings and are ignored on the way in;
/// the repository stamps them on save. An id that is not a valid primary
/// key (absent, zero or negative) is treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactConverter {
    addresses: AddressConverter,
}

impl ContactConverter {
    pub fn new() -> Self {
        Self::default()
    }
}

fn format_timestamp(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl Converter for ContactConverter {
    type Domain = Person;
    type Transfer = PersonDto;

    fn convert_to(&self, source: &Person) -> Result<PersonDto> {
        Ok(PersonDto {
            id: source.id,
            first_name: source.first_name.clone(),
            last_name: source.last_name.clone(),
            lock_version: source.lock_version,
            create_user: source.audit.created_by.clone(),
            created: format_timestamp(source.audit.created),
            last_update_user: source.audit.last_modified_by.clone(),
            last_updated: format_timestamp(source.audit.last_modified),
            addresses: self.addresses.convert_list_to(&source.addresses)?,
        })
    }

    fn convert_from(&self, source: &PersonDto) -> Result<Person> {
        Ok(Person {
            id: if is_primary_key_valid(source.id) { source.id } else { None },
            first_name: source.first_name.clone(),
            last_name: source.last_name.clone(),
            lock_version: source.lock_version,
            audit: Audit::default(),
            addresses: self.addresses.convert_list_from(&source.addresses)?,
        })
    }
}
