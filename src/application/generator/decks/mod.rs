//! Hand-authored skeleton decks, one module per archetype.
//!
//! Deck order is the page layout. Cells marked with [`tri`] carry one copy
//! variant per angle; [`uni`] cells read the same under every angle. The
//! comparison table is the single conditional slot and appears only under the
//! comparison angle.
//!
//! [`tri`]: super::copy::tri
//! [`uni`]: super::copy::uni

pub(crate) mod editorial;
pub(crate) mod listicle;
pub(crate) mod minimal;
pub(crate) mod narrative;
pub(crate) mod report;
pub(crate) mod transformation;
