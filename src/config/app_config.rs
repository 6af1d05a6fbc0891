use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSection,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Message text overrides, keyed by message key.
    #[serde(default)]
    pub messages: HashMap<String, String>,
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    pub name: String,
    /// Recorded in audit columns on save.
    #[serde(default = "default_audit_user")]
    pub audit_user: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub name: String,
    pub operation: Operation,
    /// Post-handle converter applied to the operation's response.
    #[serde(default)]
    pub converter: Option<ConverterKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    FindById,
    Find,
    FindPage,
    FindByLastName,
    Create,
    Update,
    Delete,
}

/// Which envelope an operation answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Single,
    List,
}

impl Operation {
    pub fn response_kind(self) -> ResponseKind {
        match self {
            Operation::FindById | Operation::Create | Operation::Update | Operation::Delete => {
                ResponseKind::Single
            }
            Operation::Find | Operation::FindPage | Operation::FindByLastName => ResponseKind::List,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConverterKind {
    SmallContact,
}

fn default_audit_user() -> String {
    "system".to_string()
}

fn default_page_size() -> usize {
    20
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_FORMATS: &[&str] = &["compact", "json"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: AppConfig = toml::from_str(&processed_content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConvertError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn route(&self, name: &str) -> Option<&RouteConfig> {
        self.routes.iter().find(|route| route.name == name)
    }
}

impl Default for AppConfig {
    /// Full and small variants of every read route, plus the write routes.
    fn default() -> Self {
        let route = |name: &str, operation, converter| RouteConfig {
            name: name.to_string(),
            operation,
            converter,
        };
        let small = Some(ConverterKind::SmallContact);

        Self {
            app: AppSection {
                name: "contact".to_string(),
                audit_user: default_audit_user(),
                default_page_size: default_page_size(),
            },
            logging: LoggingConfig::default(),
            messages: HashMap::new(),
            routes: vec![
                route("find-by-id", Operation::FindById, None),
                route("find", Operation::Find, None),
                route("find-page", Operation::FindPage, None),
                route("find-by-last-name", Operation::FindByLastName, None),
                route("small-find-by-id", Operation::FindById, small),
                route("small-find", Operation::Find, small),
                route("small-find-page", Operation::FindPage, small),
                route("small-find-by-last-name", Operation::FindByLastName, small),
                route("create", Operation::Create, None),
                route("update", Operation::Update, None),
                route("delete", Operation::Delete, None),
            ],
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("app.name", &self.app.name)?;
        validation::validate_non_empty_string("app.audit_user", &self.app.audit_user)?;
        validation::validate_positive_number(
            "app.default_page_size",
            self.app.default_page_size,
            1,
        )?;
        validation::validate_one_of("logging.format", &self.logging.format, LOG_FORMATS)?;
        validation::validate_one_of("logging.level", &self.logging.level, LOG_LEVELS)?;

        for route in &self.routes {
            validation::validate_non_empty_string("routes.name", &route.name)?;
        }
        validation::validate_unique("routes.name", self.routes.iter().map(|r| r.name.as_str()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[app]
name = "contact"
audit_user = "importer"

[logging]
format = "json"

[messages]
"contact.save.msg" = "Saved {0} {1}"

[[routes]]
name = "small-find"
operation = "find"
converter = "small-contact"

[[routes]]
name = "find-by-id"
operation = "find_by_id"
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.app.audit_user, "importer");
        assert_eq!(config.app.default_page_size, 20);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.routes.len(), 2);

        let small = config.route("small-find").unwrap();
        assert_eq!(small.operation, Operation::Find);
        assert_eq!(small.converter, Some(ConverterKind::SmallContact));
        assert_eq!(config.route("find-by-id").unwrap().converter, None);
    }

    #[test]
    fn test_unknown_converter_is_rejected() {
        let content = r#"
[app]
name = "contact"

[[routes]]
name = "tiny"
operation = "find"
converter = "tiny-contact"
"#;
        let err = AppConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, ConvertError::TomlError(_)));
    }

    #[test]
    fn test_duplicate_route_names_fail_validation() {
        let content = r#"
[app]
name = "contact"

[[routes]]
name = "find"
operation = "find"

[[routes]]
name = "find"
operation = "find_page"
"#;
        let err = AppConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("CONTACT_CONVERTER_TEST_AUDIT_USER", "batch");
        let content = r#"
[app]
name = "contact"
audit_user = "${CONTACT_CONVERTER_TEST_AUDIT_USER}"
"#;
        let config = AppConfig::from_toml_str(content).unwrap();
        assert_eq!(config.app.audit_user, "batch");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.route("small-find-by-id").unwrap().operation.response_kind(),
            ResponseKind::Single
        );
    }
}
