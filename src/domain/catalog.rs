//! The add-block catalog and factory defaults.
//!
//! `create_default` and the renderer are kept in lock-step: a factory-created
//! block carries exactly the fields the renderer treats as fully specified
//! for that variant, with human-readable placeholder copy so a block renders
//! meaningfully before anyone edits it.

use crate::domain::block::{
    AsSeenInBlock, AuthorBylineBlock, Block, BlockBody, BlockSize, CommentEntry, CommentsBlock,
    ComparisonBlock, ComparisonRow, CtaBlock, DisclaimerBlock, DividerBlock, FaqBlock, FaqEntry,
    FeatureEntry, FeatureListBlock, GuaranteeBlock, HeadlineBlock, ImageBlock, Layout, NoteBlock,
    NumberedSectionBlock, OfferBoxBlock, PricingTier, PricingTiersBlock, ProsConsBlock,
    SocialProofBlock, StatEntry, StatsBlock, TestimonialEntry, TestimonialsBlock, TextBlock,
    TimelineBlock, TimelineStep, UrgencyBannerBlock,
};
use crate::domain::id::BlockIdGenerator;

/// Discriminator for the closed variant set. This is the metadata-side twin
/// of [`BlockBody`]; `as_str` returns the exact wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Headline,
    Text,
    Image,
    Cta,
    SocialProof,
    Stats,
    Testimonials,
    NumberedSection,
    Comparison,
    ProsCons,
    Timeline,
    Guarantee,
    Divider,
    Note,
    Faq,
    AsSeenIn,
    AuthorByline,
    FeatureList,
    OfferBox,
    Comments,
    Disclaimer,
    UrgencyBanner,
    PricingTiers,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Headline => "headline",
            BlockType::Text => "text",
            BlockType::Image => "image",
            BlockType::Cta => "cta",
            BlockType::SocialProof => "socialProof",
            BlockType::Stats => "stats",
            BlockType::Testimonials => "testimonials",
            BlockType::NumberedSection => "numberedSection",
            BlockType::Comparison => "comparison",
            BlockType::ProsCons => "prosCons",
            BlockType::Timeline => "timeline",
            BlockType::Guarantee => "guarantee",
            BlockType::Divider => "divider",
            BlockType::Note => "note",
            BlockType::Faq => "faq",
            BlockType::AsSeenIn => "asSeenIn",
            BlockType::AuthorByline => "authorByline",
            BlockType::FeatureList => "featureList",
            BlockType::OfferBox => "offerBox",
            BlockType::Comments => "comments",
            BlockType::Disclaimer => "disclaimer",
            BlockType::UrgencyBanner => "urgencyBanner",
            BlockType::PricingTiers => "pricingTiers",
        }
    }
}

/// One row of the "add block" affordance: metadata only, not data model.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub block_type: BlockType,
    pub label: &'static str,
    pub blurb: &'static str,
}

/// Ordered catalog backing any "add block" UI.
pub fn catalog() -> &'static [CatalogEntry] {
    const ENTRIES: &[CatalogEntry] = &[
        CatalogEntry {
            block_type: BlockType::Headline,
            label: "Headline",
            blurb: "Large page title with optional subheadline",
        },
        CatalogEntry {
            block_type: BlockType::Text,
            label: "Text",
            blurb: "Paragraph copy with an optional section heading",
        },
        CatalogEntry {
            block_type: BlockType::Image,
            label: "Image",
            blurb: "Full-width image with optional caption",
        },
        CatalogEntry {
            block_type: BlockType::Cta,
            label: "Call to action",
            blurb: "Button linking to the product page",
        },
        CatalogEntry {
            block_type: BlockType::SocialProof,
            label: "Social proof",
            blurb: "One-line customer-count or rating banner",
        },
        CatalogEntry {
            block_type: BlockType::Stats,
            label: "Stats",
            blurb: "Row of headline numbers with labels",
        },
        CatalogEntry {
            block_type: BlockType::Testimonials,
            label: "Testimonials",
            blurb: "Customer quotes with names and details",
        },
        CatalogEntry {
            block_type: BlockType::NumberedSection,
            label: "Numbered section",
            blurb: "Listicle entry: number, heading, body, optional image",
        },
        CatalogEntry {
            block_type: BlockType::Comparison,
            label: "Comparison table",
            blurb: "Us-versus-them feature table",
        },
        CatalogEntry {
            block_type: BlockType::ProsCons,
            label: "Pros and cons",
            blurb: "Two-column pros and cons list",
        },
        CatalogEntry {
            block_type: BlockType::Timeline,
            label: "Timeline",
            blurb: "What to expect, step by step",
        },
        CatalogEntry {
            block_type: BlockType::Guarantee,
            label: "Guarantee",
            blurb: "Money-back guarantee box",
        },
        CatalogEntry {
            block_type: BlockType::Divider,
            label: "Divider",
            blurb: "Horizontal rule between sections",
        },
        CatalogEntry {
            block_type: BlockType::Note,
            label: "Note",
            blurb: "Highlighted editorial aside",
        },
        CatalogEntry {
            block_type: BlockType::Faq,
            label: "FAQ",
            blurb: "Question-and-answer list",
        },
        CatalogEntry {
            block_type: BlockType::AsSeenIn,
            label: "As seen in",
            blurb: "Press-mention strip",
        },
        CatalogEntry {
            block_type: BlockType::AuthorByline,
            label: "Author byline",
            blurb: "Author name, role, and date",
        },
        CatalogEntry {
            block_type: BlockType::FeatureList,
            label: "Feature list",
            blurb: "Checklist of product features",
        },
        CatalogEntry {
            block_type: BlockType::OfferBox,
            label: "Offer box",
            blurb: "Price, savings, and buy button",
        },
        CatalogEntry {
            block_type: BlockType::Comments,
            label: "Comments",
            blurb: "Reader-comments section",
        },
        CatalogEntry {
            block_type: BlockType::Disclaimer,
            label: "Disclaimer",
            blurb: "Legal disclosure text",
        },
        CatalogEntry {
            block_type: BlockType::UrgencyBanner,
            label: "Urgency banner",
            blurb: "Limited-stock or limited-time banner",
        },
        CatalogEntry {
            block_type: BlockType::PricingTiers,
            label: "Pricing tiers",
            blurb: "Multi-pack bundle pricing cards",
        },
    ];
    ENTRIES
}

/// Build a block of the requested variant with placeholder content.
pub fn create_default(block_type: BlockType, ids: &BlockIdGenerator) -> Block {
    let body = match block_type {
        BlockType::Headline => BlockBody::Headline(HeadlineBlock {
            text: "Your Attention-Grabbing Headline Goes Here".into(),
            subheadline: Some("A supporting line that expands on the promise above.".into()),
            size: Some(BlockSize::Large),
        }),
        BlockType::Text => BlockBody::Text(TextBlock {
            heading: None,
            text: "Write a paragraph that moves the story forward. Keep sentences short and concrete.".into(),
        }),
        BlockType::Image => BlockBody::Image(ImageBlock {
            url: "https://placehold.co/800x450".into(),
            alt: "Product photo".into(),
            caption: None,
            size: Some(BlockSize::Large),
        }),
        BlockType::Cta => BlockBody::Cta(CtaBlock {
            heading: Some("Ready to try it yourself?".into()),
            button_text: "Check Availability".into(),
            subtext: Some("Free shipping on every order.".into()),
        }),
        BlockType::SocialProof => BlockBody::SocialProof(SocialProofBlock {
            text: "Join 24,000+ happy customers".into(),
            highlight: Some("★★★★★ 4.8/5 average rating".into()),
        }),
        BlockType::Stats => BlockBody::Stats(StatsBlock {
            heading: Some("The numbers speak for themselves".into()),
            stats: vec![
                StatEntry { value: "93%".into(), label: "noticed a difference".into() },
                StatEntry { value: "30 days".into(), label: "average time to results".into() },
                StatEntry { value: "4.8/5".into(), label: "verified review score".into() },
            ],
            layout: Some(Layout::Grid),
        }),
        BlockType::Testimonials => BlockBody::Testimonials(TestimonialsBlock {
            heading: Some("What customers are saying".into()),
            testimonials: vec![
                TestimonialEntry {
                    quote: "I was skeptical at first, but the results won me over completely.".into(),
                    name: "Jordan M.".into(),
                    detail: Some("Verified buyer".into()),
                },
                TestimonialEntry {
                    quote: "Exactly as described. I ordered a second one for my sister.".into(),
                    name: "Priya K.".into(),
                    detail: Some("Verified buyer".into()),
                },
            ],
            layout: Some(Layout::Stacked),
        }),
        BlockType::NumberedSection => BlockBody::NumberedSection(NumberedSectionBlock {
            number: 1,
            heading: "The first thing to know".into(),
            text: "Explain one idea per section. Lead with the benefit, then back it up.".into(),
            image_url: None,
        }),
        BlockType::Comparison => BlockBody::Comparison(ComparisonBlock {
            heading: Some("How it stacks up".into()),
            us_label: "This product".into(),
            them_label: "Typical alternative".into(),
            rows: vec![
                ComparisonRow { feature: "Works in under 30 days".into(), us: "Yes".into(), them: "Rarely".into() },
                ComparisonRow { feature: "Money-back guarantee".into(), us: "90 days".into(), them: "None".into() },
            ],
        }),
        BlockType::ProsCons => BlockBody::ProsCons(ProsConsBlock {
            heading: Some("The honest breakdown".into()),
            pros: vec![
                "Simple to use daily".into(),
                "Noticeable results within a month".into(),
            ],
            cons: vec!["Only available online".into()],
        }),
        BlockType::Timeline => BlockBody::Timeline(TimelineBlock {
            heading: Some("What to expect".into()),
            steps: vec![
                TimelineStep { label: "Week 1".into(), text: "You settle into the routine.".into() },
                TimelineStep { label: "Week 4".into(), text: "The first visible changes appear.".into() },
            ],
        }),
        BlockType::Guarantee => BlockBody::Guarantee(GuaranteeBlock {
            heading: "90-Day Money-Back Guarantee".into(),
            text: "Try it for a full 90 days. If you are not delighted, send it back for a complete refund.".into(),
            badge: Some("Risk-free".into()),
        }),
        BlockType::Divider => BlockBody::Divider(DividerBlock {}),
        BlockType::Note => BlockBody::Note(NoteBlock {
            heading: Some("Editor's note".into()),
            text: "A short aside that adds credibility or context to the surrounding copy.".into(),
        }),
        BlockType::Faq => BlockBody::Faq(FaqBlock {
            heading: Some("Frequently asked questions".into()),
            items: vec![
                FaqEntry {
                    question: "How long does shipping take?".into(),
                    answer: "Orders ship within 24 hours and arrive in 3-5 business days.".into(),
                },
                FaqEntry {
                    question: "Is there a guarantee?".into(),
                    answer: "Yes, every order is covered by a 90-day money-back guarantee.".into(),
                },
            ],
        }),
        BlockType::AsSeenIn => BlockBody::AsSeenIn(AsSeenInBlock {
            heading: Some("As seen in".into()),
            outlets: vec!["Daily Health".into(), "Modern Living".into(), "The Morning Edit".into()],
        }),
        BlockType::AuthorByline => BlockBody::AuthorByline(AuthorBylineBlock {
            name: "Alex Rivera".into(),
            title: Some("Staff Writer".into()),
            date: Some("Updated this week".into()),
            avatar_url: None,
        }),
        BlockType::FeatureList => BlockBody::FeatureList(FeatureListBlock {
            heading: Some("What you get".into()),
            features: vec![
                FeatureEntry { title: "Premium materials".into(), text: Some("Built to last through daily use.".into()) },
                FeatureEntry { title: "Free shipping".into(), text: None },
            ],
            layout: Some(Layout::Grid),
        }),
        BlockType::OfferBox => BlockBody::OfferBox(OfferBoxBlock {
            heading: "Today's offer".into(),
            text: Some("Stock is limited to current inventory.".into()),
            price: Some("$39".into()),
            original_price: Some("$59".into()),
            button_text: "Claim This Offer".into(),
            badge: Some("Save 33%".into()),
        }),
        BlockType::Comments => BlockBody::Comments(CommentsBlock {
            heading: Some("Reader comments".into()),
            comments: vec![
                CommentEntry {
                    name: "Sam T.".into(),
                    text: "Ordered last month, can confirm it does what it says.".into(),
                    likes: Some(12),
                    time_ago: Some("2d".into()),
                },
            ],
        }),
        BlockType::Disclaimer => BlockBody::Disclaimer(DisclaimerBlock {
            text: DEFAULT_DISCLAIMER.into(),
        }),
        BlockType::UrgencyBanner => BlockBody::UrgencyBanner(UrgencyBannerBlock {
            text: "High demand: stock is moving quickly today.".into(),
            countdown_label: Some("Offer ends soon".into()),
        }),
        BlockType::PricingTiers => BlockBody::PricingTiers(PricingTiersBlock {
            heading: Some("Choose your bundle".into()),
            tiers: vec![
                PricingTier {
                    name: "Starter".into(),
                    quantity: Some("1 pack".into()),
                    price: "$39".into(),
                    original_price: None,
                    badge: None,
                    button_text: Some("Select".into()),
                },
                PricingTier {
                    name: "Most popular".into(),
                    quantity: Some("3 packs".into()),
                    price: "$89".into(),
                    original_price: Some("$117".into()),
                    badge: Some("Best value".into()),
                    button_text: Some("Select".into()),
                },
            ],
        }),
    };

    Block::new(ids.next_id(), body)
}

/// Fixed legal disclosure. Angle- and archetype-independent by policy.
pub const DEFAULT_DISCLAIMER: &str = "This is an advertisement and not an actual news article, \
blog, or consumer protection update. Individual results may vary. The statements on this page \
have not been evaluated by any regulatory authority.";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_lists_each_variant_once() {
        let tags: HashSet<&str> = catalog().iter().map(|e| e.block_type.as_str()).collect();
        assert_eq!(tags.len(), catalog().len());
        assert_eq!(catalog().len(), 23);
    }

    #[test]
    fn factory_tag_matches_wire_tag() {
        let ids = BlockIdGenerator::new();
        for entry in catalog() {
            let block = create_default(entry.block_type, &ids);
            assert_eq!(block.type_tag(), entry.block_type.as_str());
            let value = serde_json::to_value(&block).expect("serialize");
            assert_eq!(
                value.get("type").and_then(|v| v.as_str()),
                Some(entry.block_type.as_str())
            );
        }
    }

    #[test]
    fn factory_blocks_get_distinct_ids() {
        let ids = BlockIdGenerator::new();
        let issued: HashSet<String> = catalog()
            .iter()
            .map(|e| create_default(e.block_type, &ids).id)
            .collect();
        assert_eq!(issued.len(), catalog().len());
    }
}
