// Core performance module - member performance logs.
// Same split as the other core features: models, parser, service + store port.

pub mod log_parser;
pub mod performance_models;
pub mod performance_service;

pub use performance_models::*;
pub use performance_service::*;
