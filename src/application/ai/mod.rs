//! AI page generation.
//!
//! Wraps a [`CompletionClient`] with prompt construction on the way in and a
//! repair pass on the way out, so callers receive the same `Vec<Block>` shape
//! the deterministic generator produces. The adapter owns no rendering and no
//! persistence; a failed call leaves nothing behind.

mod prompt;
mod repair;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::application::generator::Archetype;
use crate::config::ModelSettings;
use crate::domain::block::Block;
use crate::domain::id::BlockIdGenerator;
use crate::infra::model::{CompletionClient, ModelCallError};

#[derive(Debug, Error)]
pub enum AiGenerateError {
    /// No model credentials were configured. Detected before any network
    /// traffic is attempted.
    #[error("AI generation is not configured: {reason}")]
    Configuration { reason: &'static str },
    #[error(transparent)]
    ModelCall(#[from] ModelCallError),
    /// The completion was not a JSON array even after fence stripping.
    #[error("model returned a malformed page payload: {snippet}")]
    MalformedResponse { snippet: String },
}

/// Product facts supplied by the caller. Only `title` is required; every
/// other field is forwarded to the model verbatim when present and omitted
/// from the prompt when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBrief {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proof_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,
}

/// Voice the generated copy is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TonePreset {
    Conversational,
    Editorial,
    Urgent,
    Scientific,
}

impl TonePreset {
    pub(crate) fn style_instructions(self) -> &'static str {
        match self {
            TonePreset::Conversational => {
                "warm and direct, like a friend recommending something that worked for them; \
                 contractions are fine, hype is not"
            }
            TonePreset::Editorial => {
                "measured magazine prose in the third person; cite specifics, qualify claims, \
                 never address the reader as 'you' in headings"
            }
            TonePreset::Urgent => {
                "short punchy sentences with concrete stakes and deadlines; urgency comes from \
                 facts like stock counts and offer windows, not exclamation marks"
            }
            TonePreset::Scientific => {
                "precise and sober; name mechanisms and study figures, avoid emotional adjectives, \
                 spell out units"
            }
        }
    }
}

/// Generates a full page by a single completion call.
pub struct AiPageGenerator<C> {
    client: C,
    configured: bool,
}

impl<C: CompletionClient> AiPageGenerator<C> {
    /// Credentials are checked at construction so a misconfigured deployment
    /// fails on first use rather than mid-request with a 401.
    pub fn new(client: C, settings: &ModelSettings) -> Self {
        Self {
            client,
            configured: !settings.api_key.trim().is_empty(),
        }
    }

    pub async fn generate(
        &self,
        brief: &ProductBrief,
        tone: TonePreset,
        archetype: Archetype,
        ids: &BlockIdGenerator,
    ) -> Result<Vec<Block>, AiGenerateError> {
        if !self.configured {
            return Err(AiGenerateError::Configuration {
                reason: "no API key set",
            });
        }

        let system = prompt::system_prompt(archetype, tone);
        let user = prompt::user_message(brief);
        let completion = self.client.complete(&system, &user).await?;
        let blocks = repair::parse_blocks(&completion, ids)?;

        info!(
            target = "application::ai",
            archetype = archetype.as_str(),
            blocks = blocks.len(),
            "AI page generated"
        );
        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CannedClient {
        calls: AtomicU32,
        reply: &'static str,
    }

    impl CannedClient {
        fn new(reply: &'static str) -> Self {
            Self {
                calls: AtomicU32::new(0),
                reply,
            }
        }
    }

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, ModelCallError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_owned())
        }
    }

    fn brief() -> ProductBrief {
        ProductBrief {
            title: "Glow Serum".into(),
            ..ProductBrief::default()
        }
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_call() {
        let client = CannedClient::new("[]");
        let generator = AiPageGenerator::new(client, &ModelSettings::new("  "));
        let ids = BlockIdGenerator::new();

        let err = generator
            .generate(&brief(), TonePreset::Conversational, Archetype::Minimal, &ids)
            .await
            .unwrap_err();
        assert!(matches!(err, AiGenerateError::Configuration { .. }));
        assert_eq!(generator.client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fenced_completion_parses_into_blocks_with_ids() {
        let client = CannedClient::new(
            "```json\n[{\"type\":\"headline\",\"text\":\"Hi\"},{\"type\":\"disclaimer\",\"text\":\"Ad.\"}]\n```",
        );
        let generator = AiPageGenerator::new(client, &ModelSettings::new("sk-test"));
        let ids = BlockIdGenerator::new();

        let blocks = generator
            .generate(&brief(), TonePreset::Editorial, Archetype::Minimal, &ids)
            .await
            .unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].type_tag(), "headline");
        assert!(blocks.iter().all(|b| b.id.starts_with("blk-")));
    }

    #[tokio::test]
    async fn prose_completion_is_a_malformed_response() {
        let client = CannedClient::new("I could not produce a page this time.");
        let generator = AiPageGenerator::new(client, &ModelSettings::new("sk-test"));
        let ids = BlockIdGenerator::new();

        let err = generator
            .generate(&brief(), TonePreset::Urgent, Archetype::Narrative, &ids)
            .await
            .unwrap_err();
        assert!(matches!(err, AiGenerateError::MalformedResponse { .. }));
    }
}
