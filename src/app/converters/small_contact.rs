use crate::domain::model::PersonDto;
use crate::domain::ports::Converter;
use crate::utils::error::{ConversionDirection, ConvertError, Result};

/// Trims a person down to id, names and lock version for lightweight
/// listings. Read-only: `convert_from` always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallContactConverter;

impl Converter for SmallContactConverter {
    type Domain = PersonDto;
    type Transfer = PersonDto;

    fn convert_to(&self, source: &PersonDto) -> Result<PersonDto> {
        Ok(PersonDto {
            id: source.id,
            first_name: source.first_name.clone(),
            last_name: source.last_name.clone(),
            lock_version: source.lock_version,
            ..Default::default()
        })
    }

    fn convert_from(&self, _source: &PersonDto) -> Result<PersonDto> {
        Err(ConvertError::unsupported(
            "SmallContactConverter",
            ConversionDirection::From,
        ))
    }
}
