// Domain layer: record models and ports (interfaces) for the hosted backend.

pub mod model;
pub mod ports;
