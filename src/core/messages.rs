use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

pub const SAVE_MSG: &str = "contact.save.msg";
pub const DELETE_MSG: &str = "delete.msg";

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (SAVE_MSG, "Successfully saved contact {0} {1}."),
    (DELETE_MSG, "Successfully deleted record."),
];

/// Resolves message keys to text, filling `{0}`, `{1}`, ... placeholders.
#[derive(Debug, Clone)]
pub struct MessageHelper {
    messages: HashMap<String, String>,
}

impl MessageHelper {
    /// Built-in messages overlaid with `overrides`.
    pub fn new(overrides: &HashMap<String, String>) -> Self {
        let mut messages: HashMap<String, String> = DEFAULT_MESSAGES
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        messages.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { messages }
    }

    /// Unknown keys resolve to the key itself.
    pub fn get_message(&self, key: &str, args: &[&str]) -> String {
        let template = self.messages.get(key).map(String::as_str).unwrap_or(key);
        let Some(placeholder) = placeholder() else {
            return template.to_string();
        };
        placeholder
            .replace_all(template, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| args.get(index))
                    .map(|arg| arg.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Matches `{0}`, `{1}`, ... so every placeholder is filled in one pass.
fn placeholder() -> Option<&'static Regex> {
    static PLACEHOLDER: OnceLock<Option<Regex>> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"\{(\d+)\}").ok())
        .as_ref()
}

impl Default for MessageHelper {
    fn default() -> Self {
        Self::new(&HashMap::new())
    }
}
