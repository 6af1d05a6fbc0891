// Application layer: concrete conversion mappings, services and route glue.

pub mod converters;
pub mod routes;
pub mod services;
