//! Domain layer: the block data model and its invariants.

pub mod block;
pub mod catalog;
pub mod id;
pub mod sequence;
