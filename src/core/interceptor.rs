use crate::core::response_model::ResponseModel;
use crate::domain::ports::{Converter, ListConverter, ResponseResults, ResultsMut};
use crate::utils::error::Result;
use std::any::type_name;
use std::marker::PhantomData;

/// Hook run after a handler has filled the response model and before the
/// model is serialized.
pub trait HandlerInterceptor: Send + Sync {
    fn post_handle(&self, model: &mut ResponseModel) -> Result<()>;
}

/// Rewrites the results of the first `E` envelope found in the response
/// model using converter `C`.
///
/// Only one envelope is converted per response, even if the model holds
/// several attributes of type `E`. A model without an `E` attribute is
/// left untouched and no error is raised.
pub struct ConverterHandlerInterceptor<C, E> {
    converter: C,
    _envelope: PhantomData<fn() -> E>,
}

impl<C, E> ConverterHandlerInterceptor<C, E>
where
    E: ResponseResults,
    C: Converter<Domain = E::Item, Transfer = E::Item>,
{
    pub fn new(converter: C) -> Self {
        Self {
            converter,
            _envelope: PhantomData,
        }
    }
}

impl<C, E> HandlerInterceptor for ConverterHandlerInterceptor<C, E>
where
    E: ResponseResults,
    C: Converter<Domain = E::Item, Transfer = E::Item>,
{
    fn post_handle(&self, model: &mut ResponseModel) -> Result<()> {
        for (name, attribute) in model.attributes_mut() {
            if let Some(envelope) = attribute.as_any_mut().downcast_mut::<E>() {
                tracing::debug!(
                    "Converting '{}' with {}",
                    name,
                    type_name::<C>().rsplit("::").next().unwrap_or_default()
                );
                convert_results(&self.converter, envelope)?;
                return Ok(());
            }
        }

        tracing::debug!(
            "No {} in response model, nothing converted",
            type_name::<E>()
        );
        Ok(())
    }
}

/// Converts an envelope's payload in place. A single result goes through
/// `convert_to`, a list through `convert_list_to`. An absent single result
/// stays absent.
pub fn convert_results<C, E>(converter: &C, envelope: &mut E) -> Result<()>
where
    E: ResponseResults,
    C: Converter<Domain = E::Item, Transfer = E::Item>,
{
    match envelope.results_mut() {
        ResultsMut::Single(slot) => {
            if let Some(value) = slot.as_ref() {
                let converted = converter.convert_to(value)?;
                *slot = Some(converted);
            }
        }
        ResultsMut::List(items) => {
            let converted = converter.convert_list_to(items)?;
            *items = converted;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::converters::SmallContactConverter;
    use crate::domain::model::{Message, PersonDto, PersonFindResponse, PersonResponse};
    use crate::utils::error::ConvertError;

    /// Fails on any person without a first name.
    struct RequireFirstName;

    impl Converter for RequireFirstName {
        type Domain = PersonDto;
        type Transfer = PersonDto;

        fn convert_to(&self, source: &PersonDto) -> Result<PersonDto> {
            if source.first_name.is_empty() {
                return Err(ConvertError::conversion("Person", "first name is required"));
            }
            Ok(PersonDto {
                create_user: None,
                created: None,
                ..source.clone()
            })
        }

        fn convert_from(&self, source: &PersonDto) -> Result<PersonDto> {
            Ok(source.clone())
        }
    }

    fn full_person(id: i32, first: &str, last: &str) -> PersonDto {
        PersonDto {
            id: Some(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            lock_version: 2,
            create_user: Some("admin".to_string()),
            created: Some("2013-01-01T00:00:00.000Z".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_result_is_converted_and_messages_kept() {
        let interceptor =
            ConverterHandlerInterceptor::<_, PersonResponse>::new(SmallContactConverter);
        let mut model = ResponseModel::new();
        model.insert(
            "response",
            PersonResponse::default()
                .with_results(Some(full_person(1, "Joe", "Smith")))
                .with_message(Message::info("found")),
        );

        interceptor.post_handle(&mut model).unwrap();

        let response = model.get::<PersonResponse>("response").unwrap();
        let result = response.results.as_ref().unwrap();
        assert_eq!(result.first_name, "Joe");
        assert!(result.create_user.is_none());
        assert_eq!(response.message_list, vec![Message::info("found")]);
    }

    #[test]
    fn test_absent_single_result_stays_absent() {
        let interceptor =
            ConverterHandlerInterceptor::<_, PersonResponse>::new(SmallContactConverter);
        let mut model = ResponseModel::new();
        model.insert("response", PersonResponse::default());

        interceptor.post_handle(&mut model).unwrap();

        assert!(model.get::<PersonResponse>("response").unwrap().results.is_none());
    }

    #[test]
    fn test_only_first_matching_envelope_is_converted() {
        let interceptor =
            ConverterHandlerInterceptor::<_, PersonFindResponse>::new(SmallContactConverter);
        let mut model = ResponseModel::new();
        model.insert("label", "people".to_string());
        model.insert(
            "first",
            PersonFindResponse::default().with_results(vec![full_person(1, "A", "B")]),
        );
        model.insert(
            "second",
            PersonFindResponse::default().with_results(vec![full_person(2, "C", "D")]),
        );

        interceptor.post_handle(&mut model).unwrap();

        let first = model.get::<PersonFindResponse>("first").unwrap();
        let second = model.get::<PersonFindResponse>("second").unwrap();
        assert!(first.results[0].create_user.is_none());
        assert_eq!(second.results[0].create_user.as_deref(), Some("admin"));
        assert_eq!(model.get::<String>("label").unwrap(), "people");
    }

    #[test]
    fn test_envelope_of_other_type_is_ignored() {
        let interceptor =
            ConverterHandlerInterceptor::<_, PersonFindResponse>::new(SmallContactConverter);
        let original = PersonResponse::default().with_results(Some(full_person(1, "Joe", "Smith")));
        let mut model = ResponseModel::new();
        model.insert("response", original.clone());

        interceptor.post_handle(&mut model).unwrap();

        assert_eq!(model.get::<PersonResponse>("response"), Some(&original));
    }

    #[test]
    fn test_conversion_failure_is_returned_and_envelope_kept() {
        let interceptor =
            ConverterHandlerInterceptor::<_, PersonFindResponse>::new(RequireFirstName);
        let original = PersonFindResponse::default()
            .with_results(vec![
                full_person(1, "Joe", "Smith"),
                full_person(2, "", "Doe"),
                full_person(3, "Ann", "Lee"),
            ])
            .with_count(3);
        let mut model = ResponseModel::new();
        model.insert("response", original.clone());

        let result = interceptor.post_handle(&mut model);

        match result {
            Err(ConvertError::ConversionFailure { entity, message }) => {
                assert_eq!(entity, "Person");
                assert_eq!(message, "first name is required");
            }
            other => panic!("expected a conversion failure, got {:?}", other),
        }
        assert_eq!(model.get::<PersonFindResponse>("response"), Some(&original));
    }
}
