//! Infrastructure adapters: the outbound model client and telemetry bootstrap.

pub mod error;
pub mod model;
pub mod telemetry;
