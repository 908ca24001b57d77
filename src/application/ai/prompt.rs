//! Prompt construction for AI page generation.
//!
//! The system prompt carries everything the model needs to emit a
//! structurally valid block array: the block-shape schema, the mandatory
//! ordering script for the requested archetype, and the copywriting
//! constraints. The user message carries only the product facts the caller
//! actually supplied; absent fields are omitted, never sent as placeholders.

use std::fmt::Write;

use crate::application::ai::{ProductBrief, TonePreset};
use crate::application::generator::{Archetype, copy};

/// JSON shape of every block variant, in the exact wire vocabulary the
/// repair pass and renderer consume.
const SCHEMA_GUIDE: &str = r#"Each element of the array is an object with a "type" field and these shapes:
- {"type":"headline","text":string,"subheadline"?:string,"size"?:"large"|"medium"|"small"}
- {"type":"text","heading"?:string,"text":string}
- {"type":"image","url":string,"alt":string,"caption"?:string}
- {"type":"cta","heading"?:string,"buttonText":string,"subtext"?:string}
- {"type":"socialProof","text":string,"highlight"?:string}
- {"type":"stats","heading"?:string,"stats":[{"value":string,"label":string}]}
- {"type":"testimonials","heading"?:string,"testimonials":[{"quote":string,"name":string,"detail"?:string}]}
- {"type":"numberedSection","number":number,"heading":string,"text":string,"imageUrl"?:string}
- {"type":"comparison","heading"?:string,"usLabel":string,"themLabel":string,"rows":[{"feature":string,"us":string,"them":string}]}
- {"type":"prosCons","heading"?:string,"pros":[string],"cons":[string]}
- {"type":"timeline","heading"?:string,"steps":[{"label":string,"text":string}]}
- {"type":"guarantee","heading":string,"text":string,"badge"?:string}
- {"type":"divider"}
- {"type":"note","heading"?:string,"text":string}
- {"type":"faq","heading"?:string,"items":[{"question":string,"answer":string}]}
- {"type":"asSeenIn","heading"?:string,"outlets":[string]}
- {"type":"authorByline","name":string,"title"?:string,"date"?:string}
- {"type":"featureList","heading"?:string,"features":[{"title":string,"text"?:string}]}
- {"type":"offerBox","heading":string,"text"?:string,"price"?:string,"originalPrice"?:string,"buttonText":string,"badge"?:string}
- {"type":"comments","heading"?:string,"comments":[{"name":string,"text":string,"likes"?:number,"timeAgo"?:string}]}
- {"type":"disclaimer","text":string}
- {"type":"urgencyBanner","text":string,"countdownLabel"?:string}
- {"type":"pricingTiers","heading"?:string,"tiers":[{"name":string,"quantity"?:string,"price":string,"originalPrice"?:string,"badge"?:string,"buttonText"?:string}]}"#;

const COPY_CONSTRAINTS: &str = r#"Copywriting constraints:
- Never use these filler words: revolutionary, game-changing, cutting-edge, synergy, unleash, elevate, transform your life, miracle.
- Be specific: concrete numbers, named timeframes, and plain verbs beat superlatives.
- Write testimonials and comments as distinct voices, not paraphrases of each other.
- Keep the disclaimer factual and unembellished."#;

pub(super) fn system_prompt(archetype: Archetype, tone: TonePreset) -> String {
    let mut prompt = String::with_capacity(SCHEMA_GUIDE.len() + 1024);
    prompt.push_str(
        "You generate long-form advertorial pages as a single JSON array of content blocks. \
         Respond with the raw JSON array only: no prose, no Markdown fences.\n\n",
    );
    prompt.push_str(SCHEMA_GUIDE);
    prompt.push_str("\n\nMandatory block order for this page, first to last:\n");
    for (index, slot) in copy::slots(archetype).iter().enumerate() {
        let _ = writeln!(prompt, "{}. {}", index + 1, slot.copy.type_tag());
    }
    prompt.push('\n');
    prompt.push_str(COPY_CONSTRAINTS);
    prompt.push_str("\n\nTone: ");
    prompt.push_str(tone.style_instructions());
    prompt
}

pub(super) fn user_message(brief: &ProductBrief) -> String {
    let mut message = format!("Product title: {}\n", brief.title);
    if let Some(handle) = &brief.handle {
        let _ = writeln!(message, "Store handle: {handle}");
    }
    if let Some(description) = &brief.description {
        let _ = writeln!(message, "Description: {description}");
    }
    if let Some(target_customer) = &brief.target_customer {
        let _ = writeln!(message, "Target customer: {target_customer}");
    }
    if let Some(mechanism) = &brief.mechanism {
        let _ = writeln!(message, "How it works: {mechanism}");
    }
    if !brief.proof_points.is_empty() {
        message.push_str("Proof points:\n");
        for point in &brief.proof_points {
            let _ = writeln!(message, "- {point}");
        }
    }
    if !brief.image_urls.is_empty() {
        message.push_str("Available image URLs:\n");
        for url in &brief.image_urls {
            let _ = writeln!(message, "- {url}");
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_lists_the_archetype_ordering() {
        let prompt = system_prompt(Archetype::Minimal, TonePreset::Conversational);
        assert!(prompt.contains("1. headline"));
        assert!(prompt.contains("2. text"));
        assert!(prompt.contains("3. disclaimer"));
    }

    #[test]
    fn user_message_omits_absent_fields() {
        let brief = ProductBrief {
            title: "Glow Serum".into(),
            ..ProductBrief::default()
        };
        let message = user_message(&brief);
        assert!(message.contains("Product title: Glow Serum"));
        assert!(!message.contains("Description:"));
        assert!(!message.contains("Proof points:"));
    }

    #[test]
    fn user_message_includes_supplied_fields() {
        let brief = ProductBrief {
            title: "Glow Serum".into(),
            description: Some("A brightening serum.".into()),
            proof_points: vec!["93% satisfaction".into()],
            ..ProductBrief::default()
        };
        let message = user_message(&brief);
        assert!(message.contains("Description: A brightening serum."));
        assert!(message.contains("- 93% satisfaction"));
    }
}
