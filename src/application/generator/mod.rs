//! Deterministic page generation.
//!
//! `generate` is a pure lookup-and-interpolation step over the copy tables in
//! [`copy`] and [`decks`]: the archetype picks a skeleton, the angle picks
//! which copy cells fill it, and the caller's product text is escaped once
//! and interpolated into the `{title}` / `{description}` placeholders. For
//! fixed inputs two calls produce field-identical sequences apart from the
//! freshly issued ids. There is no error path: archetype and angle are closed
//! enums, and every (archetype, angle) cell is populated.

pub(crate) mod copy;
pub(crate) mod decks;

use metrics::counter;
use serde::{Deserialize, Serialize};

use crate::domain::block::{
    AsSeenInBlock, AuthorBylineBlock, Block, BlockBody, BlockSize, CommentEntry, CommentsBlock,
    ComparisonBlock, ComparisonRow, CtaBlock, DisclaimerBlock, DividerBlock, FaqBlock, FaqEntry,
    FeatureEntry, FeatureListBlock, GuaranteeBlock, HeadlineBlock, ImageBlock, Layout, NoteBlock,
    NumberedSectionBlock, OfferBoxBlock, PricingTier, PricingTiersBlock, ProsConsBlock,
    SocialProofBlock, StatEntry, StatsBlock, TestimonialEntry, TestimonialsBlock, TextBlock,
    TimelineBlock, TimelineStep, UrgencyBannerBlock,
};
use crate::domain::catalog::DEFAULT_DISCLAIMER;
use crate::domain::id::BlockIdGenerator;
use crate::util::html::escape_html;

use copy::SlotCopy;

/// A named page skeleton used as a generation starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    /// Headline, one paragraph, disclaimer. Used for previews and smoke copy.
    Minimal,
    /// Long-form first-person narrative.
    Narrative,
    /// Numbered-list "N reasons" page.
    Listicle,
    /// Magazine-style editorial review.
    Editorial,
    /// Research-report framing with stats up front.
    Report,
    /// Before/after transformation story.
    Transformation,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Minimal,
        Archetype::Narrative,
        Archetype::Listicle,
        Archetype::Editorial,
        Archetype::Report,
        Archetype::Transformation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::Minimal => "minimal",
            Archetype::Narrative => "narrative",
            Archetype::Listicle => "listicle",
            Archetype::Editorial => "editorial",
            Archetype::Report => "report",
            Archetype::Transformation => "transformation",
        }
    }
}

/// The psychological framing applied within an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Angle {
    /// Problem-focused: lead with the frustration the product removes.
    Pain,
    /// Aspiration-focused: lead with the outcome the reader wants.
    Aspiration,
    /// Competitor-comparison-focused: lead with why alternatives fall short.
    Comparison,
}

impl Angle {
    pub const ALL: [Angle; 3] = [Angle::Pain, Angle::Aspiration, Angle::Comparison];

    pub fn as_str(self) -> &'static str {
        match self {
            Angle::Pain => "pain",
            Angle::Aspiration => "aspiration",
            Angle::Comparison => "comparison",
        }
    }
}

/// Caller-supplied product facts. Free text here is escaped before it is
/// interpolated anywhere; titles pulled from a store catalog are untrusted.
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub title: String,
    pub description: String,
}

/// Escaped interpolation values for one generation call.
struct CopyContext {
    title: String,
    description: String,
}

impl CopyContext {
    fn new(input: &ProductInput) -> Self {
        Self {
            title: escape_html(&input.title),
            description: escape_html(&input.description),
        }
    }

    fn fill(&self, template: &str) -> String {
        template
            .replace("{title}", &self.title)
            .replace("{description}", &self.description)
    }

    fn fill_opt(&self, template: Option<copy::ByAngle>, angle: Angle) -> Option<String> {
        template.map(|cell| self.fill(cell.pick(angle)))
    }
}

fn non_empty(value: &'static str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Produce the complete ordered block sequence for one page.
pub fn generate(
    input: &ProductInput,
    archetype: Archetype,
    angle: Angle,
    ids: &BlockIdGenerator,
) -> Vec<Block> {
    let cx = CopyContext::new(input);
    let mut blocks = Vec::new();

    for slot in copy::slots(archetype) {
        if slot.only.is_some_and(|only| only != angle) {
            continue;
        }
        blocks.push(materialize(&slot.copy, angle, &cx, ids));
    }

    counter!("advertorial_blocks_generated_total").increment(blocks.len() as u64);
    blocks
}

fn materialize(
    copy: &SlotCopy,
    angle: Angle,
    cx: &CopyContext,
    ids: &BlockIdGenerator,
) -> Block {
    let body = match copy {
        SlotCopy::Headline { text, sub } => BlockBody::Headline(HeadlineBlock {
            text: cx.fill(text.pick(angle)),
            subheadline: cx.fill_opt(*sub, angle),
            size: Some(BlockSize::Large),
        }),
        SlotCopy::Text { heading, body } => BlockBody::Text(TextBlock {
            heading: cx.fill_opt(*heading, angle),
            text: cx.fill(body.pick(angle)),
        }),
        SlotCopy::Image { url, alt, caption } => BlockBody::Image(ImageBlock {
            url: (*url).to_owned(),
            alt: cx.fill(alt.pick(angle)),
            caption: cx.fill_opt(*caption, angle),
            size: Some(BlockSize::Large),
        }),
        SlotCopy::Cta { heading, button, sub } => BlockBody::Cta(CtaBlock {
            heading: cx.fill_opt(*heading, angle),
            button_text: cx.fill(button.pick(angle)),
            subtext: cx.fill_opt(*sub, angle),
        }),
        SlotCopy::SocialProof { text, highlight } => BlockBody::SocialProof(SocialProofBlock {
            text: cx.fill(text.pick(angle)),
            highlight: highlight.map(str::to_owned),
        }),
        SlotCopy::Stats { heading, entries } => BlockBody::Stats(StatsBlock {
            heading: cx.fill_opt(*heading, angle),
            stats: entries
                .pick(angle)
                .iter()
                .map(|entry| StatEntry {
                    value: entry.value.to_owned(),
                    label: cx.fill(entry.label),
                })
                .collect(),
            layout: Some(Layout::Grid),
        }),
        SlotCopy::Testimonials { heading, entries } => {
            BlockBody::Testimonials(TestimonialsBlock {
                heading: Some(cx.fill(heading.pick(angle))),
                testimonials: entries
                    .pick(angle)
                    .iter()
                    .map(|entry| TestimonialEntry {
                        quote: cx.fill(entry.quote),
                        name: entry.name.to_owned(),
                        detail: non_empty(entry.detail),
                    })
                    .collect(),
                layout: Some(Layout::Stacked),
            })
        }
        SlotCopy::Numbered {
            number,
            heading,
            body,
            image_url,
        } => BlockBody::NumberedSection(NumberedSectionBlock {
            number: *number,
            heading: cx.fill(heading.pick(angle)),
            text: cx.fill(body.pick(angle)),
            image_url: non_empty(image_url),
        }),
        SlotCopy::Comparison {
            heading,
            us_label,
            them_label,
            rows,
        } => BlockBody::Comparison(ComparisonBlock {
            heading: Some(cx.fill(heading.pick(angle))),
            us_label: cx.fill(us_label),
            them_label: (*them_label).to_owned(),
            rows: rows
                .iter()
                .map(|row| ComparisonRow {
                    feature: cx.fill(row.feature),
                    us: row.us.to_owned(),
                    them: row.them.to_owned(),
                })
                .collect(),
        }),
        SlotCopy::ProsCons { heading, pros, cons } => BlockBody::ProsCons(ProsConsBlock {
            heading: cx.fill_opt(*heading, angle),
            pros: pros.iter().map(|p| cx.fill(p)).collect(),
            cons: cons.iter().map(|c| cx.fill(c)).collect(),
        }),
        SlotCopy::Timeline { heading, steps } => BlockBody::Timeline(TimelineBlock {
            heading: Some(cx.fill(heading.pick(angle))),
            steps: steps
                .pick(angle)
                .iter()
                .map(|step| TimelineStep {
                    label: step.label.to_owned(),
                    text: cx.fill(step.text),
                })
                .collect(),
        }),
        SlotCopy::Guarantee {
            heading,
            body,
            badge,
        } => BlockBody::Guarantee(GuaranteeBlock {
            heading: (*heading).to_owned(),
            text: cx.fill(body.pick(angle)),
            badge: non_empty(badge),
        }),
        SlotCopy::Divider => BlockBody::Divider(DividerBlock {}),
        SlotCopy::Note { heading, body } => BlockBody::Note(NoteBlock {
            heading: non_empty(heading),
            text: cx.fill(body.pick(angle)),
        }),
        SlotCopy::Faq { heading, items } => BlockBody::Faq(FaqBlock {
            heading: non_empty(heading),
            items: items
                .pick(angle)
                .iter()
                .map(|item| FaqEntry {
                    question: cx.fill(item.question),
                    answer: cx.fill(item.answer),
                })
                .collect(),
        }),
        SlotCopy::AsSeenIn { outlets } => BlockBody::AsSeenIn(AsSeenInBlock {
            heading: Some("As seen in".to_owned()),
            outlets: outlets.iter().map(|o| (*o).to_owned()).collect(),
        }),
        SlotCopy::AuthorByline { name, title, date } => {
            BlockBody::AuthorByline(AuthorBylineBlock {
                name: (*name).to_owned(),
                title: non_empty(title),
                date: non_empty(date),
                avatar_url: None,
            })
        }
        SlotCopy::FeatureList { heading, features } => {
            BlockBody::FeatureList(FeatureListBlock {
                heading: Some(cx.fill(heading.pick(angle))),
                features: features
                    .pick(angle)
                    .iter()
                    .map(|feature| FeatureEntry {
                        title: cx.fill(feature.title),
                        text: if feature.text.is_empty() {
                            None
                        } else {
                            Some(cx.fill(feature.text))
                        },
                    })
                    .collect(),
                layout: Some(Layout::Grid),
            })
        }
        SlotCopy::OfferBox {
            heading,
            body,
            price,
            original_price,
            button,
            badge,
        } => BlockBody::OfferBox(OfferBoxBlock {
            heading: cx.fill(heading.pick(angle)),
            text: cx.fill_opt(*body, angle),
            price: non_empty(price),
            original_price: non_empty(original_price),
            button_text: cx.fill(button.pick(angle)),
            badge: non_empty(badge),
        }),
        SlotCopy::Comments { heading, entries } => BlockBody::Comments(CommentsBlock {
            heading: non_empty(heading),
            comments: entries
                .iter()
                .map(|entry| CommentEntry {
                    name: entry.name.to_owned(),
                    text: cx.fill(entry.text),
                    likes: Some(entry.likes),
                    time_ago: non_empty(entry.time_ago),
                })
                .collect(),
        }),
        SlotCopy::Disclaimer => BlockBody::Disclaimer(DisclaimerBlock {
            text: DEFAULT_DISCLAIMER.to_owned(),
        }),
        SlotCopy::UrgencyBanner {
            text,
            countdown_label,
        } => BlockBody::UrgencyBanner(UrgencyBannerBlock {
            text: cx.fill(text.pick(angle)),
            countdown_label: non_empty(countdown_label),
        }),
        SlotCopy::PricingTiers { heading, tiers } => {
            BlockBody::PricingTiers(PricingTiersBlock {
                heading: Some(cx.fill(heading.pick(angle))),
                tiers: tiers
                    .iter()
                    .map(|tier| PricingTier {
                        name: tier.name.to_owned(),
                        quantity: non_empty(tier.quantity),
                        price: tier.price.to_owned(),
                        original_price: non_empty(tier.original_price),
                        badge: non_empty(tier.badge),
                        button_text: non_empty(tier.button),
                    })
                    .collect(),
            })
        }
    };

    Block::new(ids.next_id(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::block::BlockBody;

    fn input() -> ProductInput {
        ProductInput {
            title: "Glow Serum".into(),
            description: "A brightening serum with vitamin C.".into(),
        }
    }

    #[test]
    fn generation_is_deterministic_apart_from_ids() {
        let ids = BlockIdGenerator::new();
        for archetype in Archetype::ALL {
            for angle in Angle::ALL {
                let mut a = generate(&input(), archetype, angle, &ids);
                let mut b = generate(&input(), archetype, angle, &ids);
                for block in a.iter_mut().chain(b.iter_mut()) {
                    block.id.clear();
                }
                assert_eq!(a, b, "{archetype:?}/{angle:?}");
            }
        }
    }

    #[test]
    fn every_archetype_angle_cell_generates_unique_ids() {
        let ids = BlockIdGenerator::new();
        for archetype in Archetype::ALL {
            for angle in Angle::ALL {
                let blocks = generate(&input(), archetype, angle, &ids);
                let distinct: std::collections::HashSet<&str> =
                    blocks.iter().map(|b| b.id.as_str()).collect();
                assert_eq!(distinct.len(), blocks.len(), "{archetype:?}/{angle:?}");
            }
        }
    }

    #[test]
    fn full_skeletons_stay_within_expected_length() {
        let ids = BlockIdGenerator::new();
        for archetype in Archetype::ALL {
            if archetype == Archetype::Minimal {
                continue;
            }
            for angle in Angle::ALL {
                let blocks = generate(&input(), archetype, angle, &ids);
                assert!(
                    (13..=24).contains(&blocks.len()),
                    "{archetype:?}/{angle:?} produced {} blocks",
                    blocks.len()
                );
            }
        }
    }

    #[test]
    fn product_title_is_escaped_exactly_once() {
        let ids = BlockIdGenerator::new();
        let hostile = ProductInput {
            title: r#"<Glow> & "Serum"'"#.into(),
            description: "desc".into(),
        };
        let blocks = generate(&hostile, Archetype::Minimal, Angle::Pain, &ids);
        let headline = match &blocks[0].body {
            BlockBody::Headline(h) => &h.text,
            other => panic!("unexpected first block: {other:?}"),
        };

        assert!(headline.contains("&lt;Glow&gt; &amp; &quot;Serum&quot;&#39;"));
        for raw in ['<', '>'] {
            assert!(!headline.contains(raw), "raw metacharacter in {headline}");
        }
        assert!(!headline.contains("&amp;lt;"), "double escape in {headline}");
    }

    #[test]
    fn stats_and_pros_cons_slots_carry_headings() {
        let ids = BlockIdGenerator::new();
        for archetype in [
            Archetype::Narrative,
            Archetype::Report,
            Archetype::Transformation,
        ] {
            let blocks = generate(&input(), archetype, Angle::Pain, &ids);
            let stats = blocks
                .iter()
                .find_map(|b| match &b.body {
                    BlockBody::Stats(s) => Some(s),
                    _ => None,
                })
                .unwrap_or_else(|| panic!("{archetype:?} deck has no stats block"));
            assert!(
                stats.heading.as_deref().is_some_and(|h| !h.is_empty()),
                "{archetype:?} stats block lost its heading"
            );
        }

        let editorial = generate(&input(), Archetype::Editorial, Angle::Pain, &ids);
        let pros_cons = editorial
            .iter()
            .find_map(|b| match &b.body {
                BlockBody::ProsCons(p) => Some(p),
                _ => None,
            })
            .expect("editorial deck has a pros/cons block");
        assert!(
            pros_cons.heading.as_deref().is_some_and(|h| !h.is_empty()),
            "editorial pros/cons block lost its heading"
        );
    }

    #[test]
    fn angle_changes_copy_but_not_structure() {
        let ids = BlockIdGenerator::new();
        let pain = generate(&input(), Archetype::Narrative, Angle::Pain, &ids);
        let aspiration = generate(&input(), Archetype::Narrative, Angle::Aspiration, &ids);

        let tags = |blocks: &[crate::domain::block::Block]| -> Vec<String> {
            blocks.iter().map(|b| b.type_tag().to_owned()).collect()
        };
        assert_eq!(tags(&pain), tags(&aspiration));
    }

    #[test]
    fn comparison_angle_inserts_comparison_table_preserving_order() {
        let ids = BlockIdGenerator::new();
        let pain = generate(&input(), Archetype::Narrative, Angle::Pain, &ids);
        let comparison = generate(&input(), Archetype::Narrative, Angle::Comparison, &ids);

        assert_eq!(comparison.len(), pain.len() + 1);
        assert!(comparison.iter().any(|b| b.type_tag() == "comparison"));
        assert!(pain.iter().all(|b| b.type_tag() != "comparison"));

        // Removing the conditional block restores the base skeleton order.
        let without: Vec<&str> = comparison
            .iter()
            .filter(|b| b.type_tag() != "comparison")
            .map(|b| b.type_tag())
            .collect();
        let base: Vec<&str> = pain.iter().map(|b| b.type_tag()).collect();
        assert_eq!(without, base);
    }

    #[test]
    fn minimal_scenario_matches_contract() {
        let ids = BlockIdGenerator::new();
        let blocks = generate(&input(), Archetype::Minimal, Angle::Pain, &ids);

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].type_tag(), "headline");
        assert_eq!(blocks[1].type_tag(), "text");
        assert_eq!(blocks[2].type_tag(), "disclaimer");

        match &blocks[0].body {
            BlockBody::Headline(h) => assert!(h.text.contains("Glow Serum")),
            other => panic!("unexpected headline body: {other:?}"),
        }
        match &blocks[2].body {
            BlockBody::Disclaimer(d) => assert_eq!(d.text, DEFAULT_DISCLAIMER),
            other => panic!("unexpected disclaimer body: {other:?}"),
        }
    }
}
