//! The closed set of content-unit variants that make up an advertorial page.
//!
//! A page is `Vec<Block>`; the vector order is the page layout and is
//! preserved through generation, repair, editor mutation, and the wire
//! format. The wire format is exactly the in-memory shape: an array of
//! objects tagged by `type`, camelCase fields, serialized losslessly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One typed content unit in a page's ordered sequence.
///
/// `id` is process-unique and stable for the block's lifetime; the editor
/// uses it as its reconciliation key and derived sub-fragments namespace
/// under it (a numbered section's inline image renders as `<id>_img`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub body: BlockBody,
}

impl Block {
    pub fn new(id: impl Into<String>, body: BlockBody) -> Self {
        Self {
            id: id.into(),
            body,
        }
    }

    /// Wire tag of this block, or the raw `type` field for unknown payloads.
    pub fn type_tag(&self) -> &str {
        self.body.type_tag()
    }
}

/// Variant payloads, internally tagged on `type`.
///
/// The trailing `Unknown` variant is an untagged fallback: a payload whose
/// tag is not in the closed set still deserializes (as its raw field map) so
/// that one corrupt block can never fail a whole sequence. The renderer drops
/// `Unknown` blocks silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockBody {
    Headline(HeadlineBlock),
    Text(TextBlock),
    Image(ImageBlock),
    Cta(CtaBlock),
    SocialProof(SocialProofBlock),
    Stats(StatsBlock),
    Testimonials(TestimonialsBlock),
    NumberedSection(NumberedSectionBlock),
    Comparison(ComparisonBlock),
    ProsCons(ProsConsBlock),
    Timeline(TimelineBlock),
    Guarantee(GuaranteeBlock),
    Divider(DividerBlock),
    Note(NoteBlock),
    Faq(FaqBlock),
    AsSeenIn(AsSeenInBlock),
    AuthorByline(AuthorBylineBlock),
    FeatureList(FeatureListBlock),
    OfferBox(OfferBoxBlock),
    Comments(CommentsBlock),
    Disclaimer(DisclaimerBlock),
    UrgencyBanner(UrgencyBannerBlock),
    PricingTiers(PricingTiersBlock),
    #[serde(untagged)]
    Unknown(Map<String, Value>),
}

impl BlockBody {
    pub fn type_tag(&self) -> &str {
        match self {
            BlockBody::Headline(_) => "headline",
            BlockBody::Text(_) => "text",
            BlockBody::Image(_) => "image",
            BlockBody::Cta(_) => "cta",
            BlockBody::SocialProof(_) => "socialProof",
            BlockBody::Stats(_) => "stats",
            BlockBody::Testimonials(_) => "testimonials",
            BlockBody::NumberedSection(_) => "numberedSection",
            BlockBody::Comparison(_) => "comparison",
            BlockBody::ProsCons(_) => "prosCons",
            BlockBody::Timeline(_) => "timeline",
            BlockBody::Guarantee(_) => "guarantee",
            BlockBody::Divider(_) => "divider",
            BlockBody::Note(_) => "note",
            BlockBody::Faq(_) => "faq",
            BlockBody::AsSeenIn(_) => "asSeenIn",
            BlockBody::AuthorByline(_) => "authorByline",
            BlockBody::FeatureList(_) => "featureList",
            BlockBody::OfferBox(_) => "offerBox",
            BlockBody::Comments(_) => "comments",
            BlockBody::Disclaimer(_) => "disclaimer",
            BlockBody::UrgencyBanner(_) => "urgencyBanner",
            BlockBody::PricingTiers(_) => "pricingTiers",
            BlockBody::Unknown(fields) => fields
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown"),
        }
    }
}

/// Layout hint for blocks that can arrange sub-records either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Grid,
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockSize {
    Large,
    Medium,
    Small,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineBlock {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<BlockSize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<BlockSize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CtaBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub button_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialProofBlock {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatEntry {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatsBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialEntry {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub testimonials: Vec<TestimonialEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NumberedSectionBlock {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    #[serde(default)]
    pub feature: String,
    #[serde(default)]
    pub us: String,
    #[serde(default)]
    pub them: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub us_label: String,
    #[serde(default)]
    pub them_label: String,
    #[serde(default)]
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProsConsBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub steps: Vec<TimelineStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteeBlock {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DividerBlock {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoteBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FaqBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub items: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AsSeenInBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub outlets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBylineBlock {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureListBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub features: Vec<FeatureEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OfferBoxBlock {
    #[serde(default)]
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(default)]
    pub button_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ago: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentsBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub comments: Vec<CommentEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisclaimerBlock {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyBannerBlock {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default)]
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingTiersBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn block_serializes_with_flattened_type_tag() {
        let block = Block::new(
            "blk-1",
            BlockBody::Headline(HeadlineBlock {
                text: "Hello".into(),
                subheadline: Some("World".into()),
                size: Some(BlockSize::Large),
            }),
        );

        let value = serde_json::to_value(&block).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "blk-1",
                "type": "headline",
                "text": "Hello",
                "subheadline": "World",
                "size": "large"
            })
        );
    }

    #[test]
    fn sequence_round_trips_losslessly() {
        let raw = json!([
            { "id": "a", "type": "text", "heading": "H", "text": "body" },
            { "id": "b", "type": "stats", "stats": [ { "value": "97%", "label": "happy" } ] },
            { "id": "c", "type": "divider" }
        ]);

        let blocks: Vec<Block> = serde_json::from_value(raw.clone()).expect("deserialize");
        assert_eq!(blocks.len(), 3);
        assert_eq!(serde_json::to_value(&blocks).expect("serialize"), raw);
    }

    #[test]
    fn unknown_type_deserializes_into_fallback() {
        let raw = json!({ "id": "x", "type": "totally-unknown", "payload": 7 });
        let block: Block = serde_json::from_value(raw).expect("deserialize");
        assert!(matches!(block.body, BlockBody::Unknown(_)));
        assert_eq!(block.type_tag(), "totally-unknown");
    }

    #[test]
    fn missing_optional_fields_default() {
        let raw = json!({ "id": "y", "type": "testimonials" });
        let block: Block = serde_json::from_value(raw).expect("deserialize");
        match block.body {
            BlockBody::Testimonials(t) => {
                assert!(t.heading.is_none());
                assert!(t.testimonials.is_empty());
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
