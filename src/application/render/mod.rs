//! The rendering engine.
//!
//! A total, stateless map from a block sequence to one self-contained HTML
//! fragment. Dispatch is an exhaustive match over [`BlockBody`], so adding a
//! variant without a render function is a compile error. An unrecognized
//! `type` renders as the empty string rather than failing: one corrupt block
//! must never blank an entire page.

mod blocks;
mod chrome;

use metrics::counter;
use tracing::warn;

use crate::domain::block::{Block, BlockBody};
use crate::util::html::escape_attr;

/// Shared presentation parameters for one page render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// CSS color used for buttons, highlights, and accents.
    pub accent_color: String,
    /// Fallback alt text for images that carry none.
    pub product_title: String,
    /// Store handle the call-to-action anchors point at; the renderer derives
    /// the target URL from it and performs no lookup or validation.
    pub product_handle: String,
}

impl RenderOptions {
    pub fn new(
        accent_color: impl Into<String>,
        product_title: impl Into<String>,
        product_handle: impl Into<String>,
    ) -> Self {
        Self {
            accent_color: accent_color.into(),
            product_title: product_title.into(),
            product_handle: product_handle.into(),
        }
    }

    pub(crate) fn product_url(&self) -> String {
        format!("/products/{}", self.product_handle)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            accent_color: "#0a7d44".into(),
            product_title: String::new(),
            product_handle: String::new(),
        }
    }
}

/// Render a full page: shared chrome once, then every block in sequence
/// order. The output is an HTML fragment intended for direct injection into
/// a CMS page body; it contains no `<html>`, `<head>`, or `<body>`.
pub fn render_page(page: &[Block], options: &RenderOptions) -> String {
    let mut out = String::with_capacity(chrome::STYLESHEET.len() + page.len() * 512);
    out.push_str(&format!(
        "<div class=\"advertorial\" style=\"--adv-accent:{}\">\n",
        escape_attr(&options.accent_color),
    ));
    out.push_str("<style>");
    out.push_str(chrome::STYLESHEET);
    out.push_str("</style>\n");
    out.push_str(chrome::REFLOW_SCRIPT);
    out.push('\n');

    for block in page {
        out.push_str(&render_block(block, options));
    }

    out.push_str("</div>");
    out
}

/// Render a single block in isolation. Used by the editor for incremental
/// preview; the output for a block is identical to its fragment inside
/// [`render_page`] because no render function may look at siblings.
pub fn render_block(block: &Block, options: &RenderOptions) -> String {
    let id = block.id.as_str();
    match &block.body {
        BlockBody::Headline(b) => blocks::headline(id, b),
        BlockBody::Text(b) => blocks::text(id, b),
        BlockBody::Image(b) => blocks::image(id, b, options),
        BlockBody::Cta(b) => blocks::cta(id, b, options),
        BlockBody::SocialProof(b) => blocks::social_proof(id, b),
        BlockBody::Stats(b) => blocks::stats(id, b),
        BlockBody::Testimonials(b) => blocks::testimonials(id, b),
        BlockBody::NumberedSection(b) => blocks::numbered_section(id, b),
        BlockBody::Comparison(b) => blocks::comparison(id, b),
        BlockBody::ProsCons(b) => blocks::pros_cons(id, b),
        BlockBody::Timeline(b) => blocks::timeline(id, b),
        BlockBody::Guarantee(b) => blocks::guarantee(id, b),
        BlockBody::Divider(_) => blocks::divider(id),
        BlockBody::Note(b) => blocks::note(id, b),
        BlockBody::Faq(b) => blocks::faq(id, b),
        BlockBody::AsSeenIn(b) => blocks::as_seen_in(id, b),
        BlockBody::AuthorByline(b) => blocks::author_byline(id, b),
        BlockBody::FeatureList(b) => blocks::feature_list(id, b),
        BlockBody::OfferBox(b) => blocks::offer_box(id, b, options),
        BlockBody::Comments(b) => blocks::comments(id, b),
        BlockBody::Disclaimer(b) => blocks::disclaimer(id, b),
        BlockBody::UrgencyBanner(b) => blocks::urgency_banner(id, b),
        BlockBody::PricingTiers(b) => blocks::pricing_tiers(id, b, options),
        BlockBody::Unknown(_) => {
            warn!(
                target = "application::render",
                block_id = id,
                block_type = block.type_tag(),
                "dropping block with unknown type"
            );
            counter!("advertorial_blocks_dropped_total").increment(1);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{catalog, create_default};
    use crate::domain::id::BlockIdGenerator;
    use crate::domain::sequence::move_block;
    use serde_json::json;

    fn options() -> RenderOptions {
        RenderOptions::new("#0a7d44", "Glow Serum", "glow-serum")
    }

    #[test]
    fn every_cataloged_variant_renders_non_empty() {
        let ids = BlockIdGenerator::new();
        for entry in catalog() {
            let block = create_default(entry.block_type, &ids);
            let html = render_block(&block, &options());
            assert!(
                !html.is_empty(),
                "{} rendered empty",
                entry.block_type.as_str()
            );
            assert!(html.contains("data-block-id"));
        }
    }

    #[test]
    fn unknown_block_renders_to_page_without_it() {
        let ids = BlockIdGenerator::new();
        let mut page: Vec<Block> = vec![
            create_default(crate::domain::catalog::BlockType::Headline, &ids),
            create_default(crate::domain::catalog::BlockType::Text, &ids),
        ];
        let clean = render_page(&page, &options());

        let bogus: Block = serde_json::from_value(json!({
            "id": "zzz", "type": "totally-unknown", "junk": true
        }))
        .expect("deserialize");
        page.insert(1, bogus);

        assert_eq!(render_page(&page, &options()), clean);
    }

    #[test]
    fn cta_targets_the_product_handle() {
        let ids = BlockIdGenerator::new();
        let block = create_default(crate::domain::catalog::BlockType::Cta, &ids);
        let html = render_block(&block, &options());
        assert!(html.contains("href=\"/products/glow-serum\""));
    }

    #[test]
    fn attribute_values_are_quote_escaped() {
        let block: Block = serde_json::from_value(json!({
            "id": "img1",
            "type": "image",
            "url": "https://x.test/a.jpg\" onerror=\"alert(1)",
            "alt": "a \"quoted\" alt"
        }))
        .expect("deserialize");
        let html = render_block(&block, &options());
        assert!(html.contains("a.jpg&quot; onerror=&quot;"));
        assert!(html.contains("alt=\"a &quot;quoted&quot; alt\""));
    }

    #[test]
    fn missing_optional_heading_is_omitted_entirely() {
        let block: Block = serde_json::from_value(json!({
            "id": "t1", "type": "text", "text": "no heading here"
        }))
        .expect("deserialize");
        let html = render_block(&block, &options());
        assert!(!html.contains("<h2>"));
        assert!(html.contains("<p>no heading here</p>"));
    }

    #[test]
    fn numbered_section_image_uses_derived_sub_id() {
        let block: Block = serde_json::from_value(json!({
            "id": "sec1",
            "type": "numberedSection",
            "number": 2,
            "heading": "Second point",
            "text": "Body",
            "imageUrl": "https://x.test/b.jpg"
        }))
        .expect("deserialize");
        let html = render_block(&block, &options());
        assert!(html.contains("data-block-id=\"sec1_img\""));
    }

    #[test]
    fn page_emits_chrome_once_and_blocks_in_order() {
        let ids = BlockIdGenerator::new();
        let mut page: Vec<Block> = [
            crate::domain::catalog::BlockType::Headline,
            crate::domain::catalog::BlockType::Text,
            crate::domain::catalog::BlockType::Cta,
        ]
        .into_iter()
        .map(|ty| create_default(ty, &ids))
        .collect();

        let html = render_page(&page, &options());
        assert_eq!(html.matches("<style>").count(), 1);
        assert_eq!(html.matches("<script>").count(), 1);

        // Locate fragments by block id; class names also occur inside the
        // chrome stylesheet.
        let pos = |html: &str, id: &str| {
            let needle = format!("data-block-id=\"{id}\"");
            html.find(&needle).expect("fragment present")
        };
        let headline = page[0].id.clone();
        let text = page[1].id.clone();
        let cta = page[2].id.clone();
        assert!(pos(&html, &headline) < pos(&html, &text));
        assert!(pos(&html, &text) < pos(&html, &cta));

        // Moving the headline below the text block moves its fragment too.
        move_block(&mut page, 0, 1).expect("move");
        let moved = render_page(&page, &options());
        assert!(pos(&moved, &text) < pos(&moved, &headline));
        assert!(pos(&moved, &headline) < pos(&moved, &cta));
    }

    #[test]
    fn render_block_fragment_matches_page_fragment() {
        let ids = BlockIdGenerator::new();
        let block = create_default(crate::domain::catalog::BlockType::Guarantee, &ids);
        let solo = render_block(&block, &options());
        let page = render_page(std::slice::from_ref(&block), &options());
        assert!(page.contains(&solo));
    }
}
