use crate::core::interceptor::HandlerInterceptor;
use crate::core::response_model::ResponseModel;
use crate::utils::error::{ConvertError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Route name to post-handle interceptor, fixed at startup.
///
/// The registry has no mutating methods once built; share it behind an
/// `Arc` between request tasks.
#[derive(Clone, Default)]
pub struct InterceptorRegistry {
    interceptors: HashMap<String, Arc<dyn HandlerInterceptor>>,
}

impl InterceptorRegistry {
    pub fn builder() -> InterceptorRegistryBuilder {
        InterceptorRegistryBuilder::default()
    }

    /// Runs the route's interceptor, if any. Routes without one leave the
    /// model as the handler produced it.
    pub fn post_handle(&self, route: &str, model: &mut ResponseModel) -> Result<()> {
        match self.interceptors.get(route) {
            Some(interceptor) => interceptor.post_handle(model),
            None => {
                tracing::debug!("No interceptor registered for route '{}'", route);
                Ok(())
            }
        }
    }

    pub fn contains(&self, route: &str) -> bool {
        self.interceptors.contains_key(route)
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl std::fmt::Debug for InterceptorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut routes: Vec<_> = self.interceptors.keys().collect();
        routes.sort();
        f.debug_struct("InterceptorRegistry")
            .field("routes", &routes)
            .finish()
    }
}

#[derive(Default)]
pub struct InterceptorRegistryBuilder {
    interceptors: HashMap<String, Arc<dyn HandlerInterceptor>>,
}

impl InterceptorRegistryBuilder {
    /// Binds an interceptor to a route. A route takes exactly one
    /// interceptor; registering a second one is a configuration error.
    pub fn register<I>(mut self, route: &str, interceptor: I) -> Result<Self>
    where
        I: HandlerInterceptor + 'static,
    {
        if self.interceptors.contains_key(route) {
            return Err(ConvertError::config(format!(
                "Route '{}' already has a converter registered",
                route
            )));
        }
        self.interceptors
            .insert(route.to_string(), Arc::new(interceptor));
        Ok(self)
    }

    pub fn build(self) -> InterceptorRegistry {
        tracing::debug!("Built interceptor registry with {} routes", self.interceptors.len());
        InterceptorRegistry {
            interceptors: self.interceptors,
        }
    }
}
