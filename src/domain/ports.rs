use crate::domain::model::{Page, Person};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Bidirectional mapping between a domain type and its transfer type.
///
/// `convert_from` need not be an exact inverse of `convert_to`: fields the
/// server owns (audit columns) are dropped on the way in and regenerated on
/// save. Everything else must survive `convert_to(convert_from(v))`.
pub trait Converter: Send + Sync {
    type Domain;
    type Transfer;

    fn convert_to(&self, source: &Self::Domain) -> Result<Self::Transfer>;

    fn convert_from(&self, source: &Self::Transfer) -> Result<Self::Domain>;
}

/// Element-wise conversion of ordered collections.
///
/// Order and length are preserved. The first failing element aborts the
/// whole batch and no partial output is returned.
pub trait ListConverter: Converter {
    fn convert_list_to(&self, sources: &[Self::Domain]) -> Result<Vec<Self::Transfer>> {
        sources.iter().map(|item| self.convert_to(item)).collect()
    }

    fn convert_list_from(&self, sources: &[Self::Transfer]) -> Result<Vec<Self::Domain>> {
        sources.iter().map(|item| self.convert_from(item)).collect()
    }
}

impl<C: Converter + ?Sized> ListConverter for C {}

/// Mutable view of an envelope's payload.
pub enum ResultsMut<'a, T> {
    Single(&'a mut Option<T>),
    List(&'a mut Vec<T>),
}

/// Typed accessor each response envelope implements so results can be
/// rewritten after the handler ran.
pub trait ResponseResults: Send + 'static {
    type Item;

    fn results_mut(&mut self) -> ResultsMut<'_, Self::Item>;
}

#[async_trait]
pub trait Repository: Send + Sync {
    async fn find_one(&self, id: i32) -> Result<Option<Person>>;

    /// All rows, ordered by last name then first name.
    async fn find_all(&self) -> Result<Vec<Person>>;

    /// Zero-based page, same ordering as `find_all`.
    async fn find_page(&self, page: usize, page_size: usize) -> Result<Page<Person>>;

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Person>>;

    /// Inserts when the id is not a valid primary key, updates otherwise.
    async fn save_and_flush(&self, person: Person) -> Result<Person>;

    async fn delete(&self, id: i32) -> Result<()>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
