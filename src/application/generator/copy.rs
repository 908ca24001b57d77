//! Copy-variant tables keyed by archetype and angle.
//!
//! A skeleton is a static slot table per archetype; a slot holds one
//! [`SlotCopy`] whose angle-varying cells are [`ByAngle`] triples. Selecting
//! an angle can therefore only ever swap copy, never reorder the skeleton.
//! The one structural exception is declarative: a slot with `only:
//! Some(angle)` is emitted for that angle alone, leaving the rest of the
//! skeleton's relative order untouched.
//!
//! Copy cells may contain `{title}` and `{description}` placeholders, filled
//! with pre-escaped product text at generation time.

use super::{Angle, Archetype};
use super::decks;

/// A pain/aspiration/comparison triple of copy cells.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ByAngle<T: 'static = &'static str> {
    pub pain: T,
    pub aspiration: T,
    pub comparison: T,
}

impl<T: Copy> ByAngle<T> {
    pub(crate) fn pick(&self, angle: Angle) -> T {
        match angle {
            Angle::Pain => self.pain,
            Angle::Aspiration => self.aspiration,
            Angle::Comparison => self.comparison,
        }
    }
}

/// A cell with distinct copy per angle.
pub(crate) const fn tri<T: Copy>(pain: T, aspiration: T, comparison: T) -> ByAngle<T> {
    ByAngle {
        pain,
        aspiration,
        comparison,
    }
}

/// A cell whose copy does not vary by angle.
pub(crate) const fn uni<T: Copy>(value: T) -> ByAngle<T> {
    ByAngle {
        pain: value,
        aspiration: value,
        comparison: value,
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct StatCopy {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TestimonialCopy {
    pub quote: &'static str,
    pub name: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct StepCopy {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FaqCopy {
    pub question: &'static str,
    pub answer: &'static str,
}

/// `text` may be empty, meaning the feature has no supporting line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FeatureCopy {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CommentCopy {
    pub name: &'static str,
    pub text: &'static str,
    pub likes: u32,
    pub time_ago: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RowCopy {
    pub feature: &'static str,
    pub us: &'static str,
    pub them: &'static str,
}

/// Empty string fields mean "absent" for the optional tier attributes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TierCopy {
    pub name: &'static str,
    pub quantity: &'static str,
    pub price: &'static str,
    pub original_price: &'static str,
    pub badge: &'static str,
    pub button: &'static str,
}

/// Copy for one skeleton slot. The variant decides which block type the slot
/// materializes into.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SlotCopy {
    Headline {
        text: ByAngle,
        sub: Option<ByAngle>,
    },
    Text {
        heading: Option<ByAngle>,
        body: ByAngle,
    },
    Image {
        url: &'static str,
        alt: ByAngle,
        caption: Option<ByAngle>,
    },
    Cta {
        heading: Option<ByAngle>,
        button: ByAngle,
        sub: Option<ByAngle>,
    },
    SocialProof {
        text: ByAngle,
        highlight: Option<&'static str>,
    },
    Stats {
        heading: Option<ByAngle>,
        entries: ByAngle<&'static [StatCopy]>,
    },
    Testimonials {
        heading: ByAngle,
        entries: ByAngle<&'static [TestimonialCopy]>,
    },
    Numbered {
        number: u32,
        heading: ByAngle,
        body: ByAngle,
        image_url: &'static str,
    },
    Comparison {
        heading: ByAngle,
        us_label: &'static str,
        them_label: &'static str,
        rows: &'static [RowCopy],
    },
    ProsCons {
        heading: Option<ByAngle>,
        pros: &'static [&'static str],
        cons: &'static [&'static str],
    },
    Timeline {
        heading: ByAngle,
        steps: ByAngle<&'static [StepCopy]>,
    },
    Guarantee {
        heading: &'static str,
        body: ByAngle,
        badge: &'static str,
    },
    Divider,
    Note {
        heading: &'static str,
        body: ByAngle,
    },
    Faq {
        heading: &'static str,
        items: ByAngle<&'static [FaqCopy]>,
    },
    AsSeenIn {
        outlets: &'static [&'static str],
    },
    AuthorByline {
        name: &'static str,
        title: &'static str,
        date: &'static str,
    },
    FeatureList {
        heading: ByAngle,
        features: ByAngle<&'static [FeatureCopy]>,
    },
    OfferBox {
        heading: ByAngle,
        body: Option<ByAngle>,
        price: &'static str,
        original_price: &'static str,
        button: ByAngle,
        badge: &'static str,
    },
    Comments {
        heading: &'static str,
        entries: &'static [CommentCopy],
    },
    Disclaimer,
    UrgencyBanner {
        text: ByAngle,
        countdown_label: &'static str,
    },
    PricingTiers {
        heading: ByAngle,
        tiers: &'static [TierCopy],
    },
}

impl SlotCopy {
    /// Wire tag of the block type this slot materializes into.
    pub(crate) fn type_tag(&self) -> &'static str {
        match self {
            SlotCopy::Headline { .. } => "headline",
            SlotCopy::Text { .. } => "text",
            SlotCopy::Image { .. } => "image",
            SlotCopy::Cta { .. } => "cta",
            SlotCopy::SocialProof { .. } => "socialProof",
            SlotCopy::Stats { .. } => "stats",
            SlotCopy::Testimonials { .. } => "testimonials",
            SlotCopy::Numbered { .. } => "numberedSection",
            SlotCopy::Comparison { .. } => "comparison",
            SlotCopy::ProsCons { .. } => "prosCons",
            SlotCopy::Timeline { .. } => "timeline",
            SlotCopy::Guarantee { .. } => "guarantee",
            SlotCopy::Divider => "divider",
            SlotCopy::Note { .. } => "note",
            SlotCopy::Faq { .. } => "faq",
            SlotCopy::AsSeenIn { .. } => "asSeenIn",
            SlotCopy::AuthorByline { .. } => "authorByline",
            SlotCopy::FeatureList { .. } => "featureList",
            SlotCopy::OfferBox { .. } => "offerBox",
            SlotCopy::Comments { .. } => "comments",
            SlotCopy::Disclaimer => "disclaimer",
            SlotCopy::UrgencyBanner { .. } => "urgencyBanner",
            SlotCopy::PricingTiers { .. } => "pricingTiers",
        }
    }
}

/// One skeleton position. `only` restricts the slot to a single angle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot {
    pub copy: SlotCopy,
    pub only: Option<Angle>,
}

pub(crate) const fn slot(copy: SlotCopy) -> Slot {
    Slot { copy, only: None }
}

pub(crate) const fn slot_only(copy: SlotCopy, angle: Angle) -> Slot {
    Slot {
        copy,
        only: Some(angle),
    }
}

/// The skeleton slot table for an archetype.
pub(crate) fn slots(archetype: Archetype) -> &'static [Slot] {
    match archetype {
        Archetype::Minimal => decks::minimal::SLOTS,
        Archetype::Narrative => decks::narrative::SLOTS,
        Archetype::Listicle => decks::listicle::SLOTS,
        Archetype::Editorial => decks::editorial::SLOTS,
        Archetype::Report => decks::report::SLOTS,
        Archetype::Transformation => decks::transformation::SLOTS,
    }
}
