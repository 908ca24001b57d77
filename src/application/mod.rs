//! Application services: deterministic generation, AI generation, rendering.

pub mod ai;
pub mod generator;
pub mod render;
