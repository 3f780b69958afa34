//! Shared wire model for the revision relay and its streaming consumer.
//!
//! This crate owns the request/response shapes exchanged between `cli` and
//! `server`, plus the incremental event-stream decoder the consumer runs over
//! the relay's response body. The relay itself never decodes the stream; it
//! only forwards bytes.

pub mod stream;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use stream::{DATA_PREFIX, DONE_TOKEN, EventDecoder, LineEvent, StreamEvent, decode_line};

// =============================================================================
// ERROR
// =============================================================================

/// Error returned by [`Mode::from_str`] for a tag outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown revision mode '{0}'")]
pub struct UnknownMode(pub String);

// =============================================================================
// MESSAGES
// =============================================================================

/// Author of a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instruction prompt. Only the relay emits these.
    System,
    User,
    Assistant,
}

/// A single conversation entry. Order within a conversation is chronological.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

// =============================================================================
// MODE
// =============================================================================

/// Revision mode. Selects which instruction prompt the relay injects.
///
/// Decoding is lenient: an unknown, `null`, or missing tag becomes
/// [`Mode::Default`]. Use [`Mode::from_str`] where a typo should be reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Default,
    Summary,
    KeyPoints,
    Flashcards,
    Formula,
    Explanation,
    Questions,
    MindMap,
}

impl Mode {
    /// Every mode, in picker order.
    pub const ALL: [Mode; 8] = [
        Self::Default,
        Self::Summary,
        Self::KeyPoints,
        Self::Flashcards,
        Self::Formula,
        Self::Explanation,
        Self::Questions,
        Self::MindMap,
    ];

    /// Wire tag, e.g. `"keypoints"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Summary => "summary",
            Self::KeyPoints => "keypoints",
            Self::Flashcards => "flashcards",
            Self::Formula => "formula",
            Self::Explanation => "explanation",
            Self::Questions => "questions",
            Self::MindMap => "mindmap",
        }
    }

    /// Short human label for mode pickers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Chat",
            Self::Summary => "Summary",
            Self::KeyPoints => "Key Points",
            Self::Flashcards => "Flashcards",
            Self::Formula => "Formulas",
            Self::Explanation => "Explain",
            Self::Questions => "Practice",
            Self::MindMap => "Mind Map",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Default => "💬",
            Self::Summary => "📝",
            Self::KeyPoints => "🔑",
            Self::Flashcards => "🎴",
            Self::Formula => "📐",
            Self::Explanation => "💡",
            Self::Questions => "❓",
            Self::MindMap => "🗺️",
        }
    }

    /// Resolve an optional wire tag, falling back to [`Mode::Default`].
    #[must_use]
    pub fn resolve(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_owned()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::resolve(raw.as_str()))
    }
}

// =============================================================================
// RELAY BODIES
// =============================================================================

/// Body of a relay request: full history plus the selected mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub mode: Mode,
}

/// JSON body of every relay error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
