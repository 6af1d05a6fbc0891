// Domain layer: entities, transfer models and ports. No adapters here.

pub mod model;
pub mod ports;
