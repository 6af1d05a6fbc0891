pub mod interceptor;
pub mod messages;
pub mod registry;
pub mod response_model;

pub use crate::domain::model::{PersonDto, PersonFindResponse, PersonResponse};
pub use crate::domain::ports::{Converter, ListConverter, Repository, ResponseResults, Storage};
pub use crate::utils::error::Result;
pub use interceptor::{ConverterHandlerInterceptor, HandlerInterceptor};
pub use registry::InterceptorRegistry;
pub use response_model::ResponseModel;
