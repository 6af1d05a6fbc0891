use crate::domain::ports::{ResponseResults, ResultsMut};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit columns maintained by the repository, never by callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Audit {
    pub created_by: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Persisted person entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    /// Optimistic locking counter, bumped on every save.
    pub lock_version: i32,
    pub audit: Audit,
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub id: Option<i32>,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_postal: String,
    pub country: String,
}

/// Externally exposed person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub lock_version: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<AddressDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub address: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub zip_postal: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageType {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_key: Option<String>,
    pub message: String,
}

impl Message {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Info,
            message_key: None,
            message: message.into(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.message_key = Some(key.to_string());
        self
    }
}

/// Single-result envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub message_list: Vec<Message>,
    #[serde(default)]
    pub results: Option<PersonDto>,
}

impl PersonResponse {
    pub fn with_results(mut self, results: Option<PersonDto>) -> Self {
        self.results = results;
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.message_list.push(message);
        self
    }
}

/// Result-list envelope. `count` is the list size, or the total row count
/// for paged queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFindResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub message_list: Vec<Message>,
    #[serde(default)]
    pub results: Vec<PersonDto>,
    #[serde(default)]
    pub count: u64,
}

impl PersonFindResponse {
    pub fn with_results(mut self, results: Vec<PersonDto>) -> Self {
        self.results = results;
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }
}

impl ResponseResults for PersonResponse {
    type Item = PersonDto;

    fn results_mut(&mut self) -> ResultsMut<'_, PersonDto> {
        ResultsMut::Single(&mut self.results)
    }
}

impl ResponseResults for PersonFindResponse {
    type Item = PersonDto;

    fn results_mut(&mut self) -> ResultsMut<'_, PersonDto> {
        ResultsMut::List(&mut self.results)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
}

/// A primary key is valid when present and greater than zero.
pub fn is_primary_key_valid(id: Option<i32>) -> bool {
    matches!(id, Some(id) if id > 0)
}
