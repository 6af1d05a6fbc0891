use crate::domain::model::{is_primary_key_valid, Address, AddressDto};
use crate::domain::ports::Converter;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct AddressConverter;

impl Converter for AddressConverter {
    type Domain = Address;
    type Transfer = AddressDto;

    fn convert_to(&self, source: &Address) -> Result<AddressDto> {
        Ok(AddressDto {
            id: source.id,
            address: source.address.clone(),
            city: source.city.clone(),
            state: source.state.clone(),
            zip_postal: source.zip_postal.clone(),
            country: source.country.clone(),
        })
    }

    fn convert_from(&self, source: &AddressDto) -> Result<Address> {
        Ok(Address {
            id: if is_primary_key_valid(source.id) { source.id } else { None },
            address: source.address.clone(),
            city: source.city.clone(),
            state: source.state.clone(),
            zip_postal: source.zip_postal.clone(),
            country: source.country.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_id_is_dropped() {
        let dto = AddressDto {
            id: Some(0),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: None,
            zip_postal: "12345".to_string(),
            country: "USA".to_string(),
        };

        let address = AddressConverter.convert_from(&dto).unwrap();
        assert_eq!(address.id, None);
        assert_eq!(address.city, "Springfield");
    }
}
