pub mod app_config;

pub use app_config::{
    AppConfig, ConverterKind, LoggingConfig, Operation, ResponseKind, RouteConfig,
};

#[cfg(feature = "cli")]
use crate::utils::error::{ConvertError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "contact-converter")]
#[command(about = "Run a contact route and convert its response")]
pub struct CliConfig {
    /// TOML application config; built-in routes are used when omitted.
    #[arg(long)]
    pub config: Option<String>,

    /// JSON array of people to load before running the route.
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, default_value = "small-find")]
    pub route: String,

    #[arg(long)]
    pub id: Option<i32>,

    #[arg(long, default_value = "0")]
    pub page: usize,

    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// JSON person used as the request body for create, update and delete.
    #[arg(long)]
    pub body: Option<String>,

    #[arg(long, default_value = "./output/response.json")]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("route", &self.route)?;
        validation::validate_path("output", &self.output)?;
        if let Some(path) = &self.input {
            validation::validate_path("input", path)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(page_size) = self.page_size {
            validation::validate_positive_number("page_size", page_size, 1)?;
        }
        if self.id.is_some_and(|id| id <= 0) {
            return Err(ConvertError::InvalidConfigValueError {
                field: "id".to_string(),
                value: self.id.unwrap_or_default().to_string(),
                reason: "Value must be a positive primary key".to_string(),
            });
        }
        Ok(())
    }
}
