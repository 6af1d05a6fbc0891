pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{InMemoryPersonRepository, LocalStorage};
pub use app::converters::{AddressConverter, ContactConverter, SmallContactConverter};
pub use app::routes::{build_registry, ContactRoutes, RouteRequest, RESPONSE_ATTRIBUTE};
pub use app::services::ContactService;
pub use config::AppConfig;
pub use self::core::{
    ConverterHandlerInterceptor, HandlerInterceptor, InterceptorRegistry, ResponseModel,
};
pub use domain::ports::{Converter, ListConverter, ResponseResults, ResultsMut};
pub use utils::error::{ConvertError, Result};
