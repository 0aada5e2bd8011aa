//! Injectable allowlists for enumerated configuration fields.

use std::collections::BTreeSet;

/// Default set of supported inference-provider identifiers.
const DEFAULT_PROVIDERS: &[&str] = &[
    "openai",
    "anthropic",
    "grok",
    "google",
    "claude_vertex",
    "redpill",
    "openrouter",
    "ollama",
    "heurist",
    "galadriel",
    "fal",
    "gaianet",
    "ali_bailian",
    "volengine",
    "nanogpt",
    "hyperbolic",
    "venice",
    "akash_chat_api",
];

/// Default set of supported client platform identifiers.
const DEFAULT_CLIENTS: &[&str] = &["discord", "telegram", "twitter", "slack", "farcaster", "lens"];

/// A closed set of string identifiers against which an enumerated field is
/// validated.
///
/// The member set is deployment configuration, not code: deployments disagree
/// on which providers and platforms they support, so the list is injected
/// into the validator rather than baked into an enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allowlist {
    values: BTreeSet<String>,
}

impl Allowlist {
    /// Builds an allowlist from the provided members. Blank entries are
    /// dropped; matching stays exact and case-sensitive.
    #[must_use]
    pub fn new(members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            values: members
                .into_iter()
                .map(Into::into)
                .filter(|member| !member.trim().is_empty())
                .collect(),
        }
    }

    /// Parses a comma-separated member list, as supplied via environment
    /// variables.
    #[must_use]
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(',').map(str::trim))
    }

    /// The default inference-provider allowlist.
    #[must_use]
    pub fn default_providers() -> Self {
        Self::new(DEFAULT_PROVIDERS.iter().copied())
    }

    /// The default client-platform allowlist.
    #[must_use]
    pub fn default_clients() -> Self {
        Self::new(DEFAULT_CLIENTS.iter().copied())
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the allowlist has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates members in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}
