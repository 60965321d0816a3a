// Discord adapters for the performance log feature.

pub mod commands;
pub mod formatter;
