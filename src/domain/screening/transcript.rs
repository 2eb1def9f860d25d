//! The ordered record of everything said in a session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// The screening assistant.
    Assistant,
    /// The candidate.
    User,
}

/// One role-tagged message in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
    pub created_at: Timestamp,
}

impl Turn {
    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Creates a candidate turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// Append-only list of turns.
///
/// Turns are never removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::assistant(content));
    }

    /// Appends a candidate turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Turns appended at or after `index`.
    pub fn since(&self, index: usize) -> &[Turn] {
        self.turns.get(index..).unwrap_or(&[])
    }

    /// Contents of all assistant turns, oldest first.
    pub fn assistant_messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.turns
            .iter()
            .filter(|t| t.role == TurnRole::Assistant)
            .map(|t| t.content.as_str())
    }
}
