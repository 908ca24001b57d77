//! Advertorial page core.
//!
//! A page is an ordered sequence of typed content blocks. The sequence is the
//! single source of truth: its order is the page layout, and each block
//! renders independently into an HTML fragment. Three subsystems live here:
//!
//! - [`domain`]: the block data model, id generation, the add-block catalog
//!   and factory defaults, and the editor's sequence operations.
//! - [`application`]: the deterministic archetype/angle generator, the
//!   AI generation adapter, and the rendering engine.
//! - [`infra`]: the outbound completion-model HTTP client and telemetry
//!   bootstrap.
//!
//! The hosting application (editor UI, persistence, publishing) consumes this
//! crate; nothing here reads the environment or opens a listener.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod util;
