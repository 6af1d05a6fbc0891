use crate::core::messages::{MessageHelper, DELETE_MSG, SAVE_MSG};
use crate::domain::model::{
    is_primary_key_valid, Message, Person, PersonDto, PersonFindResponse, PersonResponse,
};
use crate::domain::ports::{Converter, ListConverter, Repository};
use crate::utils::error::{ConvertError, Result};

/// Find and save operations over a person repository. Every result leaves
/// the service as a transfer object built by `converter`.
pub struct ContactService<R, C> {
    repository: R,
    converter: C,
    messages: MessageHelper,
}

impl<R, C> ContactService<R, C>
where
    R: Repository,
    C: Converter<Domain = Person, Transfer = PersonDto>,
{
    pub fn new(repository: R, converter: C, messages: MessageHelper) -> Self {
        Self {
            repository,
            converter,
            messages,
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<PersonResponse> {
        let result = match self.repository.find_one(id).await? {
            Some(bean) => Some(self.converter.convert_to(&bean)?),
            None => None,
        };
        Ok(PersonResponse::default().with_results(result))
    }

    pub async fn find(&self) -> Result<PersonFindResponse> {
        let results = self
            .converter
            .convert_list_to(&self.repository.find_all().await?)?;
        Ok(find_response(results))
    }

    /// `count` is the total number of rows, not the page size.
    pub async fn find_page(&self, page: usize, page_size: usize) -> Result<PersonFindResponse> {
        let page_results = self.repository.find_page(page, page_size).await?;
        let results = self.converter.convert_list_to(&page_results.content)?;
        Ok(PersonFindResponse::default()
            .with_results(results)
            .with_count(page_results.total_elements))
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> Result<PersonFindResponse> {
        let results = self
            .converter
            .convert_list_to(&self.repository.find_by_last_name(last_name).await?)?;
        Ok(find_response(results))
    }

    pub async fn create(&self, request: &PersonDto) -> Result<PersonResponse> {
        if is_primary_key_valid(request.id) {
            return Err(ConvertError::validation(
                "Create should not have a valid primary key.",
            ));
        }
        self.save(request).await
    }

    pub async fn update(&self, request: &PersonDto) -> Result<PersonResponse> {
        if !is_primary_key_valid(request.id) {
            return Err(ConvertError::validation(
                "Update should have a valid primary key.",
            ));
        }
        self.save(request).await
    }

    pub async fn delete(&self, request: &PersonDto) -> Result<PersonResponse> {
        let id = request
            .id
            .filter(|id| *id > 0)
            .ok_or_else(|| ConvertError::validation("Delete should have a valid primary key."))?;
        self.repository.delete(id).await?;

        Ok(PersonResponse::default().with_message(
            Message::info(self.messages.get_message(DELETE_MSG, &[])).with_key(DELETE_MSG),
        ))
    }

    /// Bulk load, ignoring incoming ids and lock versions. Rows get fresh
    /// ids in input order.
    pub async fn import(&self, people: &[PersonDto]) -> Result<usize> {
        for person in people {
            let mut bean = self.converter.convert_from(person)?;
            bean.id = None;
            bean.lock_version = 0;
            self.repository.save_and_flush(bean).await?;
        }
        tracing::info!("Imported {} contacts", people.len());
        Ok(people.len())
    }

    async fn save(&self, request: &PersonDto) -> Result<PersonResponse> {
        let converted_request = self.converter.convert_from(request)?;
        let bean = self.repository.save_and_flush(converted_request).await?;
        let result = self.converter.convert_to(&bean)?;

        tracing::info!(
            "Saved {} {} (id {:?})",
            result.first_name,
            result.last_name,
            result.id
        );

        let message = self
            .messages
            .get_message(SAVE_MSG, &[result.first_name.as_str(), result.last_name.as_str()]);
        Ok(PersonResponse::default()
            .with_message(Message::info(message))
            .with_results(Some(result)))
    }
}

fn find_response(results: Vec<PersonDto>) -> PersonFindResponse {
    let count = results.len() as u64;
    PersonFindResponse::default()
        .with_results(results)
        .with_count(count)
}
