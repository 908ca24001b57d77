//! Per-variant render functions.
//!
//! Every function here is pure: output depends only on the block's fields and
//! the shared options, never on sibling blocks. Element content is emitted
//! verbatim (escaping is the generator's authoring-time duty and limited
//! markup like `<strong>` is allowed through); attribute-position values are
//! quote-escaped here regardless of source because they sit in a different
//! injection context.

use crate::application::render::RenderOptions;
use crate::domain::block::{
    AsSeenInBlock, AuthorBylineBlock, CommentsBlock, ComparisonBlock, CtaBlock, DisclaimerBlock,
    FaqBlock, FeatureListBlock, GuaranteeBlock, HeadlineBlock, ImageBlock, Layout, NoteBlock,
    NumberedSectionBlock, OfferBoxBlock, PricingTiersBlock, ProsConsBlock, SocialProofBlock,
    StatsBlock, TestimonialsBlock, TextBlock, TimelineBlock, UrgencyBannerBlock,
};
use crate::util::html::escape_attr;

fn shell(id: &str, class: &str, inner: &str) -> String {
    format!(
        "<div class=\"adv-block adv-{class}\" data-block-id=\"{id}\">{inner}</div>\n",
        id = escape_attr(id),
    )
}

pub(super) fn headline(id: &str, block: &HeadlineBlock) -> String {
    let mut inner = format!("<h1>{}</h1>", block.text);
    if let Some(sub) = &block.subheadline {
        inner.push_str(&format!("<p class=\"adv-subheadline\">{sub}</p>"));
    }
    shell(id, "headline", &inner)
}

pub(super) fn text(id: &str, block: &TextBlock) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    inner.push_str(&format!("<p>{}</p>", block.text));
    shell(id, "text", &inner)
}

pub(super) fn image(id: &str, block: &ImageBlock, options: &RenderOptions) -> String {
    if block.url.is_empty() {
        return String::new();
    }
    let alt = if block.alt.is_empty() {
        &options.product_title
    } else {
        &block.alt
    };
    let mut inner = format!(
        "<figure><img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
        escape_attr(&block.url),
        escape_attr(alt),
    );
    if let Some(caption) = &block.caption {
        inner.push_str(&format!("<figcaption>{caption}</figcaption>"));
    }
    inner.push_str("</figure>");
    shell(id, "image", &inner)
}

pub(super) fn cta(id: &str, block: &CtaBlock, options: &RenderOptions) -> String {
    let mut inner = String::from("<div class=\"adv-cta\">");
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    inner.push_str(&format!(
        "<a class=\"adv-btn\" href=\"{}\">{}</a>",
        escape_attr(&options.product_url()),
        block.button_text,
    ));
    if let Some(subtext) = &block.subtext {
        inner.push_str(&format!("<p class=\"adv-subtext\">{subtext}</p>"));
    }
    inner.push_str("</div>");
    shell(id, "cta", &inner)
}

pub(super) fn social_proof(id: &str, block: &SocialProofBlock) -> String {
    let mut inner = format!("<div class=\"adv-social-proof\"><p>{}</p>", block.text);
    if let Some(highlight) = &block.highlight {
        inner.push_str(&format!("<p class=\"adv-highlight\">{highlight}</p>"));
    }
    inner.push_str("</div>");
    shell(id, "social-proof", &inner)
}

pub(super) fn stats(id: &str, block: &StatsBlock) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    let class = match block.layout {
        Some(Layout::Stacked) => "adv-stats adv-stacked",
        _ => "adv-stats",
    };
    inner.push_str(&format!("<div class=\"{class}\">"));
    for stat in &block.stats {
        inner.push_str(&format!(
            "<div class=\"adv-stat\"><div class=\"adv-stat-value\">{}</div><div class=\"adv-stat-label\">{}</div></div>",
            stat.value, stat.label,
        ));
    }
    inner.push_str("</div>");
    shell(id, "stats", &inner)
}

pub(super) fn testimonials(id: &str, block: &TestimonialsBlock) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    for entry in &block.testimonials {
        inner.push_str("<blockquote class=\"adv-testimonial\">");
        inner.push_str(&format!("<p>{}</p>", entry.quote));
        inner.push_str(&format!("<cite>{}", entry.name));
        if let Some(detail) = &entry.detail {
            inner.push_str(&format!(" <span class=\"adv-detail\">{detail}</span>"));
        }
        inner.push_str("</cite></blockquote>");
    }
    shell(id, "testimonials", &inner)
}

pub(super) fn numbered_section(id: &str, block: &NumberedSectionBlock) -> String {
    let mut inner = format!(
        "<div class=\"adv-numbered\"><div class=\"adv-number\">{}</div><div class=\"adv-numbered-body\"><h2>{}</h2><p>{}</p>",
        block.number, block.heading, block.text,
    );
    if let Some(url) = &block.image_url
        && !url.is_empty()
    {
        // Derived sub-block: the inline image is addressable as `<id>_img`.
        inner.push_str(&format!(
            "<figure data-block-id=\"{}_img\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></figure>",
            escape_attr(id),
            escape_attr(url),
            escape_attr(&block.heading),
        ));
    }
    inner.push_str("</div></div>");
    shell(id, "numbered-section", &inner)
}

pub(super) fn comparison(id: &str, block: &ComparisonBlock) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    inner.push_str(&format!(
        "<table><thead><tr><th></th><th>{}</th><th>{}</th></tr></thead><tbody>",
        block.us_label, block.them_label,
    ));
    for row in &block.rows {
        inner.push_str(&format!(
            "<tr><td>{}</td><td class=\"adv-us\">{}</td><td>{}</td></tr>",
            row.feature, row.us, row.them,
        ));
    }
    inner.push_str("</tbody></table>");
    shell(id, "comparison", &inner)
}

pub(super) fn pros_cons(id: &str, block: &ProsConsBlock) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    inner.push_str("<div class=\"adv-pros-cons\"><div><h3>Pros</h3><ul>");
    for pro in &block.pros {
        inner.push_str(&format!("<li>{pro}</li>"));
    }
    inner.push_str("</ul></div><div><h3>Cons</h3><ul>");
    for con in &block.cons {
        inner.push_str(&format!("<li>{con}</li>"));
    }
    inner.push_str("</ul></div></div>");
    shell(id, "pros-cons", &inner)
}

pub(super) fn timeline(id: &str, block: &TimelineBlock) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    inner.push_str("<ul class=\"adv-timeline\">");
    for step in &block.steps {
        inner.push_str(&format!(
            "<li><span class=\"adv-step-label\">{}</span> {}</li>",
            step.label, step.text,
        ));
    }
    inner.push_str("</ul>");
    shell(id, "timeline", &inner)
}

pub(super) fn guarantee(id: &str, block: &GuaranteeBlock) -> String {
    let mut inner = String::from("<div class=\"adv-guarantee\">");
    if let Some(badge) = &block.badge {
        inner.push_str(&format!("<span class=\"adv-badge\">{badge}</span>"));
    }
    inner.push_str(&format!("<h2>{}</h2><p>{}</p></div>", block.heading, block.text));
    shell(id, "guarantee", &inner)
}

pub(super) fn divider(id: &str) -> String {
    shell(id, "divider", "<hr>")
}

pub(super) fn note(id: &str, block: &NoteBlock) -> String {
    let mut inner = String::from("<div class=\"adv-note\">");
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h3>{heading}</h3>"));
    }
    inner.push_str(&format!("<p>{}</p></div>", block.text));
    shell(id, "note", &inner)
}

pub(super) fn faq(id: &str, block: &FaqBlock) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    for item in &block.items {
        inner.push_str(&format!(
            "<details><summary>{}</summary><p>{}</p></details>",
            item.question, item.answer,
        ));
    }
    shell(id, "faq", &inner)
}

pub(super) fn as_seen_in(id: &str, block: &AsSeenInBlock) -> String {
    let mut inner = String::from("<div class=\"adv-as-seen-in\">");
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<p>{heading}</p>"));
    }
    inner.push_str("<div class=\"adv-outlets\">");
    for outlet in &block.outlets {
        inner.push_str(&format!("<span>{outlet}</span>"));
    }
    inner.push_str("</div></div>");
    shell(id, "as-seen-in", &inner)
}

pub(super) fn author_byline(id: &str, block: &AuthorBylineBlock) -> String {
    let mut inner = String::from("<div class=\"adv-byline\">");
    if let Some(url) = &block.avatar_url {
        inner.push_str(&format!(
            "<img class=\"adv-avatar\" src=\"{}\" alt=\"{}\" width=\"40\" height=\"40\">",
            escape_attr(url),
            escape_attr(&block.name),
        ));
    }
    inner.push_str(&format!("<span class=\"adv-author\">{}</span>", block.name));
    if let Some(title) = &block.title {
        inner.push_str(&format!("<span class=\"adv-author-title\">{title}</span>"));
    }
    if let Some(date) = &block.date {
        inner.push_str(&format!("<span class=\"adv-date\">{date}</span>"));
    }
    inner.push_str("</div>");
    shell(id, "author-byline", &inner)
}

pub(super) fn feature_list(id: &str, block: &FeatureListBlock) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    let class = match block.layout {
        Some(Layout::Stacked) => "adv-features adv-stacked",
        _ => "adv-features",
    };
    inner.push_str(&format!("<div class=\"{class}\">"));
    for feature in &block.features {
        inner.push_str(&format!(
            "<div class=\"adv-feature\"><strong>{}</strong>",
            feature.title
        ));
        if let Some(text) = &feature.text {
            inner.push_str(&format!("<p>{text}</p>"));
        }
        inner.push_str("</div>");
    }
    inner.push_str("</div>");
    shell(id, "feature-list", &inner)
}

pub(super) fn offer_box(id: &str, block: &OfferBoxBlock, options: &RenderOptions) -> String {
    let mut inner = String::from("<div class=\"adv-offer\">");
    if let Some(badge) = &block.badge {
        inner.push_str(&format!("<span class=\"adv-badge\">{badge}</span>"));
    }
    inner.push_str(&format!("<h2>{}</h2>", block.heading));
    if let Some(text) = &block.text {
        inner.push_str(&format!("<p>{text}</p>"));
    }
    if let Some(price) = &block.price {
        inner.push_str("<p>");
        if let Some(original) = &block.original_price {
            inner.push_str(&format!(
                "<span class=\"adv-original-price\">{original}</span>"
            ));
        }
        inner.push_str(&format!("<span class=\"adv-price\">{price}</span></p>"));
    }
    inner.push_str(&format!(
        "<a class=\"adv-btn\" href=\"{}\">{}</a></div>",
        escape_attr(&options.product_url()),
        block.button_text,
    ));
    shell(id, "offer-box", &inner)
}

pub(super) fn comments(id: &str, block: &CommentsBlock) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    for comment in &block.comments {
        inner.push_str(&format!(
            "<div class=\"adv-comment\"><p>{}</p><p class=\"adv-comment-meta\"><strong>{}</strong>",
            comment.text, comment.name,
        ));
        if let Some(time_ago) = &comment.time_ago {
            inner.push_str(&format!(" · {time_ago}"));
        }
        if let Some(likes) = comment.likes {
            inner.push_str(&format!(" · {likes} likes"));
        }
        inner.push_str("</p></div>");
    }
    shell(id, "comments", &inner)
}

pub(super) fn disclaimer(id: &str, block: &DisclaimerBlock) -> String {
    shell(
        id,
        "disclaimer",
        &format!("<p class=\"adv-disclaimer\">{}</p>", block.text),
    )
}

pub(super) fn urgency_banner(id: &str, block: &UrgencyBannerBlock) -> String {
    let mut inner = format!("<div class=\"adv-urgency\">{}", block.text);
    if let Some(label) = &block.countdown_label {
        inner.push_str(&format!("<span class=\"adv-countdown\">{label}</span>"));
    }
    inner.push_str("</div>");
    shell(id, "urgency-banner", &inner)
}

pub(super) fn pricing_tiers(id: &str, block: &PricingTiersBlock, options: &RenderOptions) -> String {
    let mut inner = String::new();
    if let Some(heading) = &block.heading {
        inner.push_str(&format!("<h2>{heading}</h2>"));
    }
    inner.push_str("<div class=\"adv-tiers\">");
    for tier in &block.tiers {
        let class = if tier.badge.is_some() {
            "adv-tier adv-featured"
        } else {
            "adv-tier"
        };
        inner.push_str(&format!("<div class=\"{class}\">"));
        if let Some(badge) = &tier.badge {
            inner.push_str(&format!("<span class=\"adv-badge\">{badge}</span>"));
        }
        inner.push_str(&format!("<h3>{}</h3>", tier.name));
        if let Some(quantity) = &tier.quantity {
            inner.push_str(&format!("<p>{quantity}</p>"));
        }
        inner.push_str("<p>");
        if let Some(original) = &tier.original_price {
            inner.push_str(&format!(
                "<span class=\"adv-original-price\">{original}</span>"
            ));
        }
        inner.push_str(&format!("<span class=\"adv-price\">{}</span></p>", tier.price));
        if let Some(button) = &tier.button_text {
            inner.push_str(&format!(
                "<a class=\"adv-btn\" href=\"{}\">{button}</a>",
                escape_attr(&options.product_url()),
            ));
        }
        inner.push_str("</div>");
    }
    inner.push_str("</div>");
    shell(id, "pricing-tiers", &inner)
}
