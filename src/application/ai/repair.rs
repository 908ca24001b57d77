//! Response cleanup for model output.
//!
//! Models wrap JSON in Markdown fences, forget `id` fields, and occasionally
//! emit a corrupt element mid-array. The repair pass is deliberately loose:
//! it fixes what it can mechanically (fences, missing ids), drops non-object
//! array elements, and only fails the whole call when the payload is not a
//! JSON array at all. Objects pass through without per-field validation: a
//! recognized tag with a corrupt payload lands in the `Unknown` fallback and
//! is dropped later, at render time. Repair is idempotent; running it on
//! already-clean output changes nothing.

use metrics::counter;
use serde_json::Value;
use tracing::warn;

use crate::application::ai::AiGenerateError;
use crate::domain::block::Block;
use crate::domain::id::BlockIdGenerator;

/// Remove a surrounding Markdown code fence, with or without a language tag.
pub(super) fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the language tag on the opening fence line, if any.
    match rest.split_once('\n') {
        Some((first_line, body)) if !first_line.trim().starts_with('[') => body.trim(),
        _ => rest.trim(),
    }
}

fn snippet(raw: &str) -> String {
    raw.chars().take(200).collect()
}

/// Parse a completion into blocks, repairing what can be repaired and
/// dropping elements that cannot.
pub(super) fn parse_blocks(
    raw: &str,
    ids: &BlockIdGenerator,
) -> Result<Vec<Block>, AiGenerateError> {
    let body = strip_code_fences(raw);
    let value: Value = serde_json::from_str(body).map_err(|_| AiGenerateError::MalformedResponse {
        snippet: snippet(body),
    })?;
    let Value::Array(elements) = value else {
        return Err(AiGenerateError::MalformedResponse {
            snippet: snippet(body),
        });
    };

    let mut blocks = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let Value::Object(mut object) = element else {
            warn!(
                target = "application::ai",
                index, "dropping non-object array element"
            );
            counter!("advertorial_blocks_dropped_total").increment(1);
            continue;
        };

        let has_id = matches!(object.get("id"), Some(Value::String(id)) if !id.is_empty());
        if !has_id {
            object.insert("id".to_owned(), Value::String(ids.next_id()));
        }

        match serde_json::from_value::<Block>(Value::Object(object)) {
            Ok(block) => blocks.push(block),
            Err(err) => {
                warn!(
                    target = "application::ai",
                    index,
                    error = %err,
                    "dropping structurally corrupt block"
                );
                counter!("advertorial_blocks_dropped_total").increment(1);
            }
        }
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::block::BlockBody;

    #[test]
    fn strips_fence_with_language_tag() {
        let raw = "```json\n[{\"type\":\"divider\"}]\n```";
        assert_eq!(strip_code_fences(raw), "[{\"type\":\"divider\"}]");
    }

    #[test]
    fn strips_bare_fence_and_leaves_clean_input_alone() {
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("  [1]  "), "[1]");
    }

    #[test]
    fn non_array_payload_is_malformed() {
        let ids = BlockIdGenerator::new();
        let err = parse_blocks("{\"type\":\"divider\"}", &ids).unwrap_err();
        assert!(matches!(err, AiGenerateError::MalformedResponse { .. }));

        let err = parse_blocks("Sure! Here is your page:", &ids).unwrap_err();
        match err {
            AiGenerateError::MalformedResponse { snippet } => {
                assert!(snippet.starts_with("Sure!"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_ids_are_assigned_and_existing_ids_kept() {
        let ids = BlockIdGenerator::new();
        let raw = r#"[
            {"type":"headline","text":"Hello"},
            {"id":"keep-me","type":"text","text":"Body"}
        ]"#;
        let blocks = parse_blocks(raw, &ids).unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].id.starts_with("blk-"));
        assert_eq!(blocks[1].id, "keep-me");
    }

    #[test]
    fn repair_is_idempotent() {
        let ids = BlockIdGenerator::new();
        let raw = r#"[{"type":"headline","text":"Hello"}]"#;
        let once = parse_blocks(raw, &ids).unwrap();
        let reserialized = serde_json::to_string(&once).unwrap();
        let twice = parse_blocks(&reserialized, &ids).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn non_object_elements_are_dropped_without_failing_the_array() {
        let ids = BlockIdGenerator::new();
        let raw = r#"[
            {"type":"headline","text":"Hello"},
            "just a string",
            42,
            {"type":"text","text":"Body"}
        ]"#;
        let blocks = parse_blocks(raw, &ids).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].type_tag(), "headline");
        assert_eq!(blocks[1].type_tag(), "text");
    }

    #[test]
    fn corrupt_known_type_payload_survives_for_the_renderer_to_drop() {
        let ids = BlockIdGenerator::new();
        let raw = r#"[
            {"type":"headline","text":"Hello"},
            {"type":"stats","stats":"not an array"}
        ]"#;
        let blocks = parse_blocks(raw, &ids).unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[1].body, BlockBody::Unknown(_)));
        assert_eq!(blocks[1].type_tag(), "stats");
    }

    #[test]
    fn unknown_type_survives_repair_as_unknown() {
        let ids = BlockIdGenerator::new();
        let raw = r#"[{"type":"hologram","text":"??"}]"#;
        let blocks = parse_blocks(raw, &ids).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].type_tag(), "hologram");
    }
}
