use crate::utils::error::Result;
use serde::Serialize;
use std::any::Any;

/// A value stored in a [`ResponseModel`]. Implemented for every
/// serializable `'static` type.
pub trait ModelAttribute: Any + Send {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn to_json(&self) -> Result<serde_json::Value>;
}

impl<T: Any + Send + Serialize> ModelAttribute for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Named results a handler leaves behind for post-processing and
/// serialization. Attributes keep insertion order.
#[derive(Default)]
pub struct ResponseModel {
    attributes: Vec<(String, Box<dyn ModelAttribute>)>,
}

impl ResponseModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, replacing any attribute of the same name in place.
    pub fn insert<T: ModelAttribute>(&mut self, name: &str, value: T) {
        let value: Box<dyn ModelAttribute> = Box::new(value);
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| (**value).as_any().downcast_ref::<T>())
    }

    pub fn get_mut<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.attributes
            .iter_mut()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| (**value).as_any_mut().downcast_mut::<T>())
    }

    /// Removes and returns the attribute if it exists and has type `T`.
    /// An attribute of another type is left in place.
    pub fn take<T: Any>(&mut self, name: &str) -> Option<T> {
        let index = self
            .attributes
            .iter()
            .position(|(key, value)| key == name && (**value).as_any().is::<T>())?;
        let (_, value) = self.attributes.remove(index);
        value.into_any().downcast::<T>().ok().map(|boxed| *boxed)
    }

    pub fn attributes_mut(
        &mut self,
    ) -> impl Iterator<Item = (&str, &mut (dyn ModelAttribute + 'static))> {
        self.attributes
            .iter_mut()
            .map(|(key, value)| (key.as_str(), &mut **value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        let mut map = serde_json::Map::new();
        for (key, value) in &self.attributes {
            map.insert(key.clone(), value.to_json()?);
        }
        Ok(serde_json::Value::Object(map))
    }
}

impl std::fmt::Debug for ResponseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseModel")
            .field("attributes", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Message, PersonDto, PersonResponse};

    #[test]
    fn test_insert_replaces_same_name_in_place() {
        let mut model = ResponseModel::new();
        model.insert("first", 1u32);
        model.insert("second", "two".to_string());
        model.insert("first", 3u32);

        assert_eq!(model.len(), 2);
        assert_eq!(model.names().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(model.get::<u32>("first"), Some(&3));
    }

    #[test]
    fn test_get_mut_edits_attribute_in_place() {
        let mut model = ResponseModel::new();
        model.insert("response", PersonResponse::default());

        if let Some(response) = model.get_mut::<PersonResponse>("response") {
            response.message_list.push(Message::info("edited"));
        }

        assert!(model.get_mut::<u32>("response").is_none());
        let response = model.get::<PersonResponse>("response").unwrap();
        assert_eq!(response.message_list, vec![Message::info("edited")]);
    }

    #[test]
    fn test_get_with_wrong_type_is_none() {
        let mut model = ResponseModel::new();
        model.insert("count", 5u64);

        assert!(model.get::<String>("count").is_none());
        assert!(model.take::<String>("count").is_none());
        assert_eq!(model.len(), 1);
        assert_eq!(model.take::<u64>("count"), Some(5));
        assert!(model.is_empty());
    }

    #[test]
    fn test_to_json_serializes_every_attribute() {
        let mut model = ResponseModel::new();
        let dto = PersonDto {
            id: Some(1),
            first_name: "Joe".to_string(),
            last_name: "Smith".to_string(),
            ..Default::default()
        };
        model.insert("response", PersonResponse::default().with_results(Some(dto)));
        model.insert("page", 0usize);

        let json = model.to_json().unwrap();
        assert_eq!(json["response"]["results"]["firstName"], "Joe");
        assert_eq!(json["page"], 0);
    }
}
