use crate::app::converters::SmallContactConverter;
use crate::app::services::ContactService;
use crate::config::{AppConfig, ConverterKind, Operation, ResponseKind};
use crate::core::interceptor::ConverterHandlerInterceptor;
use crate::core::registry::InterceptorRegistry;
use crate::core::response_model::ResponseModel;
use crate::domain::model::{Person, PersonDto, PersonFindResponse, PersonResponse};
use crate::domain::ports::{Converter, Repository};
use crate::utils::error::{ConvertError, Result};
use std::sync::Arc;

/// Model attribute the route handlers store their envelope under.
pub const RESPONSE_ATTRIBUTE: &str = "response";

/// One interceptor per route that names a converter. The envelope type is
/// picked from the route's operation, so each interceptor is bound to a
/// single concrete response type.
pub fn build_registry(config: &AppConfig) -> Result<InterceptorRegistry> {
    let mut builder = InterceptorRegistry::builder();

    for route in &config.routes {
        let Some(kind) = route.converter else {
            continue;
        };
        builder = match (kind, route.operation.response_kind()) {
            (ConverterKind::SmallContact, ResponseKind::Single) => builder.register(
                &route.name,
                ConverterHandlerInterceptor::<_, PersonResponse>::new(SmallContactConverter),
            )?,
            (ConverterKind::SmallContact, ResponseKind::List) => builder.register(
                &route.name,
                ConverterHandlerInterceptor::<_, PersonFindResponse>::new(SmallContactConverter),
            )?,
        };
        tracing::debug!("Route '{}' converts with {:?}", route.name, kind);
    }

    Ok(builder.build())
}

#[derive(Debug, Clone, Default)]
pub struct RouteRequest {
    pub id: Option<i32>,
    pub page: usize,
    pub page_size: Option<usize>,
    pub last_name: Option<String>,
    pub body: Option<PersonDto>,
}

/// Runs a configured route: service call, then the route's post-handle
/// conversion.
pub struct ContactRoutes<R, C> {
    config: Arc<AppConfig>,
    service: ContactService<R, C>,
    registry: Arc<InterceptorRegistry>,
}

impl<R, C> ContactRoutes<R, C>
where
    R: Repository,
    C: Converter<Domain = Person, Transfer = PersonDto>,
{
    pub fn new(
        config: Arc<AppConfig>,
        service: ContactService<R, C>,
        registry: Arc<InterceptorRegistry>,
    ) -> Self {
        Self {
            config,
            service,
            registry,
        }
    }

    pub fn service(&self) -> &ContactService<R, C> {
        &self.service
    }

    pub async fn handle(&self, route_name: &str, request: &RouteRequest) -> Result<ResponseModel> {
        let route = self
            .config
            .route(route_name)
            .ok_or_else(|| ConvertError::MappingNotFound {
                route: route_name.to_string(),
            })?;
        tracing::debug!("Handling route '{}' ({:?})", route.name, route.operation);

        let mut model = ResponseModel::new();
        match route.operation {
            Operation::FindById => {
                let id = request
                    .id
                    .ok_or_else(|| ConvertError::validation("find_by_id requires an id"))?;
                model.insert(RESPONSE_ATTRIBUTE, self.service.find_by_id(id).await?);
            }
            Operation::Find => {
                model.insert(RESPONSE_ATTRIBUTE, self.service.find().await?);
            }
            Operation::FindPage => {
                let page_size = request
                    .page_size
                    .unwrap_or(self.config.app.default_page_size);
                model.insert(
                    RESPONSE_ATTRIBUTE,
                    self.service.find_page(request.page, page_size).await?,
                );
            }
            Operation::FindByLastName => {
                let last_name = request.last_name.as_deref().ok_or_else(|| {
                    ConvertError::validation("find_by_last_name requires a last name")
                })?;
                model.insert(
                    RESPONSE_ATTRIBUTE,
                    self.service.find_by_last_name(last_name).await?,
                );
            }
            Operation::Create => {
                let body = required_body(request)?;
                model.insert(RESPONSE_ATTRIBUTE, self.service.create(body).await?);
            }
            Operation::Update => {
                let body = required_body(request)?;
                model.insert(RESPONSE_ATTRIBUTE, self.service.update(body).await?);
            }
            Operation::Delete => {
                let body = required_body(request)?;
                model.insert(RESPONSE_ATTRIBUTE, self.service.delete(body).await?);
            }
        }

        self.registry.post_handle(route_name, &mut model)?;
        Ok(model)
    }
}

fn required_body(request: &RouteRequest) -> Result<&PersonDto> {
    request
        .body
        .as_ref()
        .ok_or_else(|| ConvertError::validation("This route requires a request body"))
}
