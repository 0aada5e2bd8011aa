//! The agent configuration document consumed by the conversational runtime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Narrative biography: either a single fragment or an ordered sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bio {
    /// A single narrative string.
    One(String),
    /// An ordered sequence of narrative fragments.
    Many(Vec<String>),
}

impl Bio {
    /// Returns true when the biography carries no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(text) => text.is_empty(),
            Self::Many(fragments) => fragments.is_empty(),
        }
    }
}

impl Default for Bio {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// One turn of an example dialogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageExample {
    /// Speaker role for the turn (e.g. "user").
    pub role: String,
    /// Turn text.
    pub content: String,
}

/// Style directives applied per conversational context.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Directives applied in every context.
    pub all: Vec<String>,
    /// Directives applied in chat contexts.
    pub chat: Vec<String>,
    /// Directives applied when composing posts.
    pub post: Vec<String>,
}

/// Voice synthesis settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// Voice model identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Voice service endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Provider-specific voice options, passed through opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevenlabs: Option<BTreeMap<String, Value>>,
}

/// Free-form operational settings (secrets, voice, model and chain tuning).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Named secret values injected into the runtime environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<BTreeMap<String, String>>,
    /// Intiface integration toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intiface: Option<bool>,
    /// Voice synthesis settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<VoiceConfig>,
    /// Inference model override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Embedding model override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    /// Chain configuration keyed by chain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chains: Option<BTreeMap<String, Vec<Value>>>,
}

/// Per-platform behavioral toggles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPlatformConfig {
    /// Ignore messages authored by other bots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_ignore_bot_messages: Option<bool>,
    /// Ignore direct messages entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_ignore_direct_messages: Option<bool>,
    /// Only respond when explicitly mentioned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_respond_only_to_mentions: Option<bool>,
    /// Similarity threshold for duplicate-message suppression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_similarity_threshold: Option<f64>,
    /// Whether this agent operates as part of a team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_part_of_team: Option<bool>,
    /// Identifiers of teammate agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_agent_ids: Option<Vec<String>>,
    /// Identifier of the team leader agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_leader_id: Option<String>,
    /// Keywords that route team-directed messages to this member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_interest_keywords: Option<Vec<String>>,
}

/// Behavioral toggles grouped by platform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Discord-specific toggles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<ClientPlatformConfig>,
    /// Telegram-specific toggles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<ClientPlatformConfig>,
    /// Slack-specific toggles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<ClientPlatformConfig>,
}

/// Pre-existing Twitter identity bound to the agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterProfile {
    /// Platform account id.
    pub id: String,
    /// Account handle.
    pub username: String,
    /// Display name.
    pub screen_name: String,
    /// Profile biography text.
    pub bio: String,
    /// Alternative names the account is known by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nicknames: Option<Vec<String>>,
}

/// NFT generation prompt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NftConfig {
    /// Image-generation prompt text.
    pub prompt: String,
}

/// A named, versionless document describing one agent's persona and
/// operational parameters.
///
/// `name` is the unique store key. Enumerated fields (`model_provider`,
/// `clients`) are plain strings here; membership in the deployment allowlist
/// is enforced by [`crate::Validator`], not by the type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    /// Unique agent name.
    pub name: String,
    /// Inference provider identifier.
    pub model_provider: String,
    /// Optional image-generation provider identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_model_provider: Option<String>,
    /// Optional override for the provider endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_endpoint_override: Option<String>,
    /// Prompt templates keyed by template name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<BTreeMap<String, String>>,
    /// Narrative biography.
    #[serde(default)]
    pub bio: Bio,
    /// Background facts.
    #[serde(default)]
    pub lore: Vec<String>,
    /// Example dialogues, each an ordered sequence of turns.
    #[serde(default)]
    pub message_examples: Vec<Vec<MessageExample>>,
    /// Example posts.
    #[serde(default)]
    pub post_examples: Vec<String>,
    /// Conversation topics.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Personality adjectives.
    #[serde(default)]
    pub adjectives: Vec<String>,
    /// Knowledge fragments fed to retrieval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<Vec<String>>,
    /// Platform identifiers the agent is deployed against.
    #[serde(default)]
    pub clients: Vec<String>,
    /// Plugin identifiers, opaque to this service.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Free-form operational settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    /// Per-platform behavioral toggles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_config: Option<ClientConfig>,
    /// Style directives.
    #[serde(default)]
    pub style: StyleConfig,
    /// Pre-existing Twitter identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_profile: Option<TwitterProfile>,
    /// NFT generation prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nft: Option<NftConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bio_accepts_string_or_sequence() {
        let one: Bio = serde_json::from_value(json!("a bot")).unwrap();
        assert_eq!(one, Bio::One("a bot".into()));

        let many: Bio = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(many, Bio::Many(vec!["a".into(), "b".into()]));
        assert!(!many.is_empty());
        assert!(Bio::Many(Vec::new()).is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let config: AgentConfig = serde_json::from_value(json!({
            "name": "bob",
            "modelProvider": "openai",
            "bio": "a bot",
            "messageExamples": [[{"role": "user", "content": "hi"}]],
            "postExamples": ["hello"],
            "style": {"all": [], "chat": [], "post": []}
        }))
        .unwrap();

        assert_eq!(config.model_provider, "openai");
        assert_eq!(config.message_examples[0][0].content, "hi");

        let round = serde_json::to_value(&config).unwrap();
        assert!(round.get("modelProvider").is_some());
        assert!(round.get("postExamples").is_some());
        // Absent optionals stay off the wire.
        assert!(round.get("twitterProfile").is_none());
    }

    #[test]
    fn optional_extensions_round_trip() {
        let config: AgentConfig = serde_json::from_value(json!({
            "name": "eve",
            "modelProvider": "anthropic",
            "bio": ["x"],
            "settings": {"secrets": {"KEY": "v"}, "embeddingModel": "e5"},
            "clientConfig": {"discord": {"shouldIgnoreBotMessages": true}},
            "twitterProfile": {
                "id": "1", "username": "eve", "screenName": "Eve", "bio": "b"
            },
            "nft": {"prompt": "portrait"}
        }))
        .unwrap();

        let settings = config.settings.as_ref().unwrap();
        assert_eq!(settings.embedding_model.as_deref(), Some("e5"));
        let discord = config
            .client_config
            .as_ref()
            .unwrap()
            .discord
            .as_ref()
            .unwrap();
        assert_eq!(discord.should_ignore_bot_messages, Some(true));
        assert_eq!(config.nft.as_ref().unwrap().prompt, "portrait");
    }
}
